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

//! Supported networks

use serde::{Deserialize, Serialize};

use crate::error::CowError;

/// Networks where the protocol is deployed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
#[repr(u64)]
pub enum SupportedChainId {
	Mainnet = 1,
	Rinkeby = 4,
	GnosisChain = 100,
}

pub const ALL_SUPPORTED_CHAIN_IDS: [SupportedChainId; 3] = [
	SupportedChainId::Mainnet,
	SupportedChainId::Rinkeby,
	SupportedChainId::GnosisChain,
];

/// Network used when no chain id is available
pub const DEFAULT_NETWORK_FOR_LISTS: SupportedChainId = SupportedChainId::Mainnet;

impl SupportedChainId {
	pub fn id(self) -> u64 {
		self as u64
	}

	/// Path segment used by the hosted API for this network
	pub fn api_slug(self) -> &'static str {
		match self {
			SupportedChainId::Mainnet => "mainnet",
			SupportedChainId::Rinkeby => "rinkeby",
			SupportedChainId::GnosisChain => "xdai",
		}
	}
}

impl TryFrom<u64> for SupportedChainId {
	type Error = CowError;

	fn try_from(chain_id: u64) -> Result<Self, Self::Error> {
		match chain_id {
			1 => Ok(SupportedChainId::Mainnet),
			4 => Ok(SupportedChainId::Rinkeby),
			100 => Ok(SupportedChainId::GnosisChain),
			_ => Err(CowError::UnsupportedNetwork {
				api: "CoW Protocol",
				chain_id,
			}),
		}
	}
}

impl From<SupportedChainId> for u64 {
	fn from(chain: SupportedChainId) -> Self {
		chain.id()
	}
}

impl std::fmt::Display for SupportedChainId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.id())
	}
}
