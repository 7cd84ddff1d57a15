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

//! Configuration for the `cow` console
//!
//! SDK settings come from `COW_*` environment variables (and `.env`), or from
//! the file named by `COW_CONFIG_FILE` with the environment taking precedence.

use std::{env, fmt, sync::Arc};

use anyhow::{Context, Result};
use cow_sdk::{PrivateKeySigner, SdkConfig, WalletProvider};

// Logging configuration constants
/// Default log level (can be overridden by RUST_LOG environment variable)
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log directory component name
pub const LOG_COMPONENT_NAME: &str = "cow";

/// Default console output enabled (can be overridden by LOG_TO_CONSOLE environment variable)
pub const DEFAULT_LOG_TO_CONSOLE: bool = false;

/// Optional configuration file (toml, yaml or json)
pub const CONFIG_FILE_ENV: &str = "COW_CONFIG_FILE";

/// Hex private key used for signing commands
pub const PRIVATE_KEY_ENV: &str = "COW_PRIVATE_KEY";

#[derive(Clone)]
pub struct CmdConfig {
	pub sdk: SdkConfig,
	private_key: Option<String>,
}

impl fmt::Debug for CmdConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CmdConfig")
			.field("sdk", &self.sdk)
			.field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
			.finish()
	}
}

impl CmdConfig {
	pub fn from_env() -> Result<Self> {
		dotenv::dotenv().ok();

		let sdk = match env::var(CONFIG_FILE_ENV) {
			Ok(path) => SdkConfig::from_file(&path)
				.with_context(|| format!("Failed to load configuration file {}", path))?,
			Err(_) => SdkConfig::from_env().context("Failed to load configuration from environment")?,
		};

		let private_key = env::var(PRIVATE_KEY_ENV)
			.ok()
			.map(|key| key.trim().to_string())
			.filter(|key| !key.is_empty());

		Ok(Self { sdk, private_key })
	}

	pub fn new(sdk: SdkConfig, private_key: Option<String>) -> Self {
		Self { sdk, private_key }
	}

	pub fn has_signer(&self) -> bool {
		self.private_key.is_some()
	}

	/// Wallet built from the configured private key, if any
	pub fn signer(&self) -> Result<Option<Arc<dyn WalletProvider>>> {
		let Some(key) = &self.private_key else {
			return Ok(None);
		};

		let signer: PrivateKeySigner = key
			.parse()
			.with_context(|| format!("Invalid {}", PRIVATE_KEY_ENV))?;

		Ok(Some(Arc::new(signer)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_no_key_no_signer() {
		let config = CmdConfig::new(SdkConfig::default(), None);
		assert!(!config.has_signer());
		assert!(config.signer().unwrap().is_none());
	}

	#[test]
	fn test_signer_from_key() {
		let config = CmdConfig::new(
			SdkConfig::default(),
			Some("0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80".to_string()),
		);
		let signer = config.signer().unwrap().unwrap();
		assert_eq!(
			signer.address().to_string(),
			"0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
		);
	}

	#[test]
	fn test_invalid_key() {
		let config = CmdConfig::new(SdkConfig::default(), Some("not-a-key".to_string()));
		assert!(config.signer().is_err());
	}

	#[test]
	fn test_debug_hides_key() {
		let config = CmdConfig::new(SdkConfig::default(), Some("0xsecret".to_string()));
		let debug = format!("{:?}", config);
		assert!(!debug.contains("secret"));
		assert!(debug.contains("redacted"));
	}
}
