// Copyright 2025 itscheems
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CoW Protocol SDK - Client library for the order-relay API
//!
//! This crate provides a typed client for the operator API, EIP-712 signing
//! of orders and cancellations, and validation of app data documents.
//!
//! Every call maps to exactly one HTTP request against the network's API.
//! Failures are returned to the caller as [`CowError`] and never retried,
//! and responses are not cached. The only shared state is the compiled
//! app data schema.
//!
//! [`SdkConfig`] reads settings from `COW_*` variables or a file when asked
//! to; building a [`CowSdk`] directly touches neither.

pub mod api;
pub mod app_data;
pub mod chains;
pub mod constants;
pub mod context;
pub mod endpoints;
pub mod error;
pub mod price;
pub mod sdk;
pub mod signing;
pub mod tokens;
pub mod types;

pub use api::errors::{ApiErrorCode, OperatorError, QuoteError, QuoteErrorCode};
pub use api::{BaseUrlOverrides, CowApi};
pub use app_data::{ValidationErrorRecord, ValidationResult, validate_app_data_document};
pub use chains::SupportedChainId;
pub use context::{Context, CowContext, SdkConfig};
pub use endpoints::Environment;
pub use error::{CowError, CowResult};
pub use sdk::CowSdk;
pub use signing::{
	SigningResult, WalletError, WalletProvider, compute_order_uid, sign_order,
	sign_order_cancellation,
};
pub use types::*;

pub use alloy_primitives::{Address, B256};
pub use alloy_signer_local::PrivateKeySigner;
