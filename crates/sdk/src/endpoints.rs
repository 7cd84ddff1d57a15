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

//! Per-network base URLs
//!
//! Three API families are resolved here:
//! - the order-relay API (production and staging)
//! - the affiliate profile API (mainnet only)
//! - the static price-strategy documents
//!
//! Gas prices come from an unrelated gas station per network.
//!
//! Every lookup returns `None` for an unsupported network; callers turn that
//! into [`CowError::UnsupportedNetwork`](crate::error::CowError::UnsupportedNetwork).

use serde::{Deserialize, Serialize};

use crate::chains::SupportedChainId;

const STRATEGY_URL_BASE: &str =
	"https://raw.githubusercontent.com/gnosis/cowswap/configuration/config/strategies";

/// Deployment environment of the hosted API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
	#[default]
	Production,
	Staging,
}

impl Environment {
	pub fn from_dev_flag(is_dev_environment: bool) -> Self {
		if is_dev_environment {
			Environment::Staging
		} else {
			Environment::Production
		}
	}

	fn host(self) -> &'static str {
		match self {
			Environment::Production => "https://api.cow.fi",
			Environment::Staging => "https://barn.api.cow.fi",
		}
	}
}

/// Order-relay API base URL, without the version suffix
pub fn api_base_url(chain_id: u64, env: Environment) -> Option<String> {
	let chain = SupportedChainId::try_from(chain_id).ok()?;
	Some(format!("{}/{}/api", env.host(), chain.api_slug()))
}

/// Affiliate profile API base URL, without the version suffix
pub fn profile_base_url(chain_id: u64, env: Environment) -> Option<String> {
	match SupportedChainId::try_from(chain_id).ok()? {
		SupportedChainId::Mainnet => Some(format!("{}/affiliate/api", env.host())),
		_ => None,
	}
}

/// Price strategy document URL
pub fn price_strategy_url(chain_id: u64) -> Option<String> {
	let chain = SupportedChainId::try_from(chain_id).ok()?;
	Some(format!("{}/strategy-{}.json", STRATEGY_URL_BASE, chain.id()))
}

/// Gas station endpoint
pub fn gas_fee_endpoint(chain_id: u64) -> Option<&'static str> {
	match SupportedChainId::try_from(chain_id).ok()? {
		SupportedChainId::Mainnet | SupportedChainId::GnosisChain => {
			Some("https://safe-relay.gnosis.io/api/v1/gas-station/")
		}
		SupportedChainId::Rinkeby => Some("https://safe-relay.rinkeby.gnosis.io/api/v1/gas-station/"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_api_urls_per_environment() {
		assert_eq!(
			api_base_url(1, Environment::Production).as_deref(),
			Some("https://api.cow.fi/mainnet/api")
		);
		assert_eq!(
			api_base_url(100, Environment::Staging).as_deref(),
			Some("https://barn.api.cow.fi/xdai/api")
		);
		assert_eq!(
			api_base_url(4, Environment::Staging).as_deref(),
			Some("https://barn.api.cow.fi/rinkeby/api")
		);
	}

	#[test]
	fn test_profile_is_mainnet_only() {
		assert_eq!(
			profile_base_url(1, Environment::Staging).as_deref(),
			Some("https://barn.api.cow.fi/affiliate/api")
		);
		assert!(profile_base_url(4, Environment::Production).is_none());
		assert!(profile_base_url(100, Environment::Production).is_none());
	}

	#[test]
	fn test_strategy_url_ignores_environment() {
		assert_eq!(
			price_strategy_url(100).as_deref(),
			Some(
				"https://raw.githubusercontent.com/gnosis/cowswap/configuration/config/strategies/strategy-100.json"
			)
		);
	}

	#[test]
	fn test_unsupported_network_has_no_urls() {
		for chain_id in [0, 5, 137, 42161] {
			assert!(api_base_url(chain_id, Environment::Production).is_none());
			assert!(api_base_url(chain_id, Environment::Staging).is_none());
			assert!(profile_base_url(chain_id, Environment::Production).is_none());
			assert!(price_strategy_url(chain_id).is_none());
			assert!(gas_fee_endpoint(chain_id).is_none());
		}
	}

	#[test]
	fn test_dev_flag_selects_staging() {
		assert_eq!(Environment::from_dev_flag(true), Environment::Staging);
		assert_eq!(Environment::from_dev_flag(false), Environment::Production);
		assert_eq!(Environment::default(), Environment::Production);
	}
}
