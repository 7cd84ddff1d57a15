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

//! SDK entry point

use std::sync::Arc;

use serde_json::Value;

use crate::api::CowApi;
use crate::app_data::{ValidationResult, validate_app_data_document};
use crate::context::{Context, CowContext, SdkConfig};
use crate::error::CowError;
use crate::signing::{self, SigningResult, WalletProvider};
use crate::types::UnsignedOrder;

/// Facade bundling the API client, signing and app data validation for one network
#[derive(Debug, Clone)]
pub struct CowSdk {
	pub chain_id: u64,
	pub context: Context,
	pub cow_api: CowApi,
}

impl CowSdk {
	pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");

	pub fn new(chain_id: u64, cow_context: CowContext) -> Self {
		let context = Context::new(cow_context);
		let cow_api = CowApi::from_context(chain_id, &context);
		Self {
			chain_id,
			context,
			cow_api,
		}
	}

	pub fn from_config(config: SdkConfig, provider: Option<Arc<dyn WalletProvider>>) -> Self {
		let chain_id = config.chain_id;
		Self::new(chain_id, config.into_context(provider))
	}

	pub fn validate_app_data_document(&self, document: &Value) -> Result<ValidationResult, CowError> {
		validate_app_data_document(document)
	}

	/// Sign an order with the configured wallet
	///
	/// Fails with [`CowError::MissingSigner`] before doing anything else when
	/// no wallet was configured.
	pub async fn sign_order(&self, order: &UnsignedOrder) -> Result<SigningResult, CowError> {
		let provider = self.context.provider()?;
		signing::sign_order(order, self.chain_id, &**provider).await
	}

	/// Sign the cancellation of an order with the configured wallet
	pub async fn sign_order_cancellation(&self, order_id: &str) -> Result<SigningResult, CowError> {
		let provider = self.context.provider()?;
		signing::sign_order_cancellation(order_id, self.chain_id, &**provider).await
	}
}
