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

use thiserror::Error;

use crate::api::errors::{OperatorError, QuoteError};

/// Error types for SDK operations
#[derive(Debug, Error)]
pub enum CowError {
	#[error("Unsupported Network. The {api} API is not deployed in the Network {chain_id}")]
	UnsupportedNetwork { api: &'static str, chain_id: u64 },
	#[error("No provider was instantiated")]
	MissingSigner,
	#[error(transparent)]
	Operator(#[from] OperatorError),
	#[error(transparent)]
	Quote(#[from] QuoteError),
	#[error("Order request failed ({status}): {message}")]
	OrderRequest { status: u16, message: String },
	#[error("Network error: {0}")]
	Network(String),
	#[error("Invalid response: {0}")]
	Decode(String),
	#[error("Invalid order: {0}")]
	InvalidOrder(String),
	#[error("Signing error: {0}")]
	Signing(String),
	#[error("App data schema error: {0}")]
	AppDataSchema(String),
	#[error("Configuration error: {0}")]
	Config(#[from] config::ConfigError),
	#[error("{0}")]
	Sdk(String),
}

pub type CowResult<T> = Result<T, CowError>;
