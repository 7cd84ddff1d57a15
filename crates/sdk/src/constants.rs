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

//! Protocol-wide constants

use alloy_primitives::{Address, address};

use crate::chains::SupportedChainId;

pub const ZERO_ADDRESS: Address = Address::ZERO;

/// App data hash sent when the caller does not provide one
pub const DEFAULT_APP_DATA_HASH: &str =
	"0x0000000000000000000000000000000000000000000000000000000000000000";

/// Marker address the UI uses for the chain's native currency
pub const NATIVE_CURRENCY_ADDRESS: Address = address!("EeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE");

const GP_SETTLEMENT_CONTRACT: Address = address!("9008D19f58AAbD9eD0D60971565AA8510560ab41");

/// Settlement contract used as the EIP-712 verifying contract
pub fn settlement_contract_address(chain_id: u64) -> Option<Address> {
	SupportedChainId::try_from(chain_id)
		.ok()
		.map(|_| GP_SETTLEMENT_CONTRACT)
}

/// Wrapped native token per network
pub fn wrapped_native_address(chain_id: u64) -> Option<Address> {
	match SupportedChainId::try_from(chain_id).ok()? {
		SupportedChainId::Mainnet => Some(address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2")),
		SupportedChainId::Rinkeby => Some(address!("c778417E063141139Fce010982780140Aa0cD5Ab")),
		SupportedChainId::GnosisChain => {
			Some(address!("e91D153E0b41518A2Ce8Dd3D7944Fa863463a97d"))
		}
	}
}
