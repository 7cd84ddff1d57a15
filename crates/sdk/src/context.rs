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

//! Construction-time configuration

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_APP_DATA_HASH;
use crate::endpoints::Environment;
use crate::chains::DEFAULT_NETWORK_FOR_LISTS;
use crate::error::{CowError, CowResult};
use crate::signing::WalletProvider;

/// Optional settings supplied when building the SDK
#[derive(Clone, Default)]
pub struct CowContext {
	pub app_data_hash: Option<String>,
	pub is_dev_environment: Option<bool>,
	pub provider: Option<Arc<dyn WalletProvider>>,
}

impl fmt::Debug for CowContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CowContext")
			.field("app_data_hash", &self.app_data_hash)
			.field("is_dev_environment", &self.is_dev_environment)
			.field("provider", &self.provider.as_ref().map(|p| p.address()))
			.finish()
	}
}

/// Context with defaults applied; read-only after construction
#[derive(Clone)]
pub struct Context {
	app_data_hash: String,
	is_dev_environment: bool,
	provider: Option<Arc<dyn WalletProvider>>,
}

impl Context {
	pub fn new(context: CowContext) -> Self {
		Self {
			app_data_hash: context
				.app_data_hash
				.unwrap_or_else(|| DEFAULT_APP_DATA_HASH.to_string()),
			is_dev_environment: context.is_dev_environment.unwrap_or(false),
			provider: context.provider,
		}
	}

	pub fn app_data_hash(&self) -> &str {
		&self.app_data_hash
	}

	pub fn is_dev_environment(&self) -> bool {
		self.is_dev_environment
	}

	pub fn environment(&self) -> Environment {
		Environment::from_dev_flag(self.is_dev_environment)
	}

	/// Wallet used for signing, fails when none was configured
	pub fn provider(&self) -> Result<&Arc<dyn WalletProvider>, CowError> {
		self.provider.as_ref().ok_or(CowError::MissingSigner)
	}
}

impl Default for Context {
	fn default() -> Self {
		Self::new(CowContext::default())
	}
}

impl fmt::Debug for Context {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Context")
			.field("app_data_hash", &self.app_data_hash)
			.field("is_dev_environment", &self.is_dev_environment)
			.field("provider", &self.provider.as_ref().map(|p| p.address()))
			.finish()
	}
}

/// Serializable SDK settings
///
/// The wallet provider is not part of it; attach one with [`SdkConfig::into_context`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkConfig {
	/// Network id
	pub chain_id: u64,
	/// Value sent in the `X-AppId` header
	#[serde(default)]
	pub app_data_hash: Option<String>,
	/// Use the staging API
	#[serde(default)]
	pub is_dev_environment: bool,
}

impl Default for SdkConfig {
	fn default() -> Self {
		Self {
			chain_id: DEFAULT_NETWORK_FOR_LISTS.id(),
			app_data_hash: None,
			is_dev_environment: false,
		}
	}
}

impl SdkConfig {
	/// Load configuration from environment variables (`COW_CHAIN_ID`, ...)
	pub fn from_env() -> CowResult<Self> {
		let cfg = config::Config::builder()
			.set_default("chain_id", DEFAULT_NETWORK_FOR_LISTS.id() as i64)?
			.add_source(config::Environment::with_prefix("COW").try_parsing(true))
			.build()?;

		Ok(cfg.try_deserialize()?)
	}

	/// Load configuration from file, environment variables take precedence
	pub fn from_file(path: &str) -> CowResult<Self> {
		let cfg = config::Config::builder()
			.set_default("chain_id", DEFAULT_NETWORK_FOR_LISTS.id() as i64)?
			.add_source(config::File::with_name(path))
			.add_source(config::Environment::with_prefix("COW").try_parsing(true))
			.build()?;

		Ok(cfg.try_deserialize()?)
	}

	pub fn into_context(self, provider: Option<Arc<dyn WalletProvider>>) -> CowContext {
		CowContext {
			app_data_hash: self.app_data_hash,
			is_dev_environment: Some(self.is_dev_environment),
			provider,
		}
	}
}
