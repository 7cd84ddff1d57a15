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

//! Native and wrapped currencies

use alloy_primitives::Address;

use crate::chains::SupportedChainId;
use crate::constants::{NATIVE_CURRENCY_ADDRESS, wrapped_native_address};
use crate::error::CowError;

/// ERC-20 token on a given network
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
	pub chain_id: u64,
	pub address: Address,
	pub decimals: u8,
	pub symbol: String,
	pub name: String,
}

/// Native currency of a network (ETH, xDai)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NativeCurrency {
	pub chain_id: u64,
	pub decimals: u8,
	pub symbol: String,
	pub name: String,
}

impl NativeCurrency {
	pub fn on_chain(chain_id: u64) -> Self {
		match SupportedChainId::try_from(chain_id) {
			Ok(SupportedChainId::GnosisChain) => Self {
				chain_id,
				decimals: 18,
				symbol: "XDAI".to_string(),
				name: "xDai".to_string(),
			},
			_ => Self {
				chain_id,
				decimals: 18,
				symbol: "ETH".to_string(),
				name: "Ether".to_string(),
			},
		}
	}

	/// ERC-20 wrapper of this currency
	pub fn wrapped(&self) -> Result<Token, CowError> {
		let address =
			wrapped_native_address(self.chain_id).ok_or(CowError::UnsupportedNetwork {
				api: "Wrapped native token",
				chain_id: self.chain_id,
			})?;

		let (symbol, name) = match SupportedChainId::try_from(self.chain_id)? {
			SupportedChainId::GnosisChain => ("WXDAI", "Wrapped XDAI"),
			_ => ("WETH", "Wrapped Ether"),
		};

		Ok(Token {
			chain_id: self.chain_id,
			address,
			decimals: 18,
			symbol: symbol.to_string(),
			name: name.to_string(),
		})
	}

	pub fn equals(&self, other: &NativeCurrency) -> bool {
		self.chain_id == other.chain_id
	}
}

/// Replace the native currency marker with the wrapped token address
///
/// Other addresses, and the marker on unknown networks, are returned as is.
pub fn to_erc20_address(token: Address, chain_id: u64) -> Address {
	if token == NATIVE_CURRENCY_ADDRESS {
		wrapped_native_address(chain_id).unwrap_or(token)
	} else {
		token
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::address;

	#[test]
	fn test_native_currency_per_chain() {
		let xdai = NativeCurrency::on_chain(100);
		assert_eq!(xdai.symbol, "XDAI");
		assert_eq!(xdai.wrapped().unwrap().symbol, "WXDAI");

		let eth = NativeCurrency::on_chain(1);
		assert_eq!(eth.symbol, "ETH");
		assert_eq!(
			eth.wrapped().unwrap().address,
			address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2")
		);
		assert!(!eth.equals(&xdai));
		assert!(eth.equals(&NativeCurrency::on_chain(1)));
	}

	#[test]
	fn test_wrapped_on_unknown_chain_fails() {
		let currency = NativeCurrency::on_chain(137);
		assert_eq!(currency.symbol, "ETH");
		assert!(matches!(
			currency.wrapped(),
			Err(CowError::UnsupportedNetwork { chain_id: 137, .. })
		));
	}

	#[test]
	fn test_to_erc20_address() {
		let dai = address!("6B175474E89094C44Da98b954EedeAC495271d0F");
		assert_eq!(to_erc20_address(dai, 1), dai);
		assert_eq!(
			to_erc20_address(NATIVE_CURRENCY_ADDRESS, 100),
			address!("e91D153E0b41518A2Ce8Dd3D7944Fa863463a97d")
		);
		assert_eq!(to_erc20_address(NATIVE_CURRENCY_ADDRESS, 5), NATIVE_CURRENCY_ADDRESS);
	}
}
