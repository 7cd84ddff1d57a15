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

use alloy_primitives::{Address, B256};
use serde::{Deserialize, Serialize};

/// Order identifier (56 bytes, hex encoded)
pub type OrderId = String;

/// Order kind (sell or buy)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
	Sell,
	Buy,
}

impl OrderKind {
	pub fn as_str(self) -> &'static str {
		match self {
			OrderKind::Sell => "sell",
			OrderKind::Buy => "buy",
		}
	}
}

/// Where sell tokens are drawn from, or buy tokens are sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenBalance {
	#[default]
	Erc20,
	External,
	Internal,
}

impl TokenBalance {
	pub fn as_str(self) -> &'static str {
		match self {
			TokenBalance::Erc20 => "erc20",
			TokenBalance::External => "external",
			TokenBalance::Internal => "internal",
		}
	}
}

/// Encoding convention of an order signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SigningScheme {
	Eip712,
	#[serde(rename = "ethsign")]
	EthSign,
	Eip1271,
	#[serde(rename = "presign")]
	PreSign,
}

impl SigningScheme {
	/// Value expected by the operator API
	pub fn api_value(self) -> &'static str {
		match self {
			SigningScheme::Eip712 => "eip712",
			SigningScheme::EthSign => "ethsign",
			SigningScheme::Eip1271 => "eip1271",
			SigningScheme::PreSign => "presign",
		}
	}
}

/// Order payload prior to signing
///
/// Amounts are base-10 integer strings, as exchanged with the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsignedOrder {
	pub sell_token: Address,
	pub buy_token: Address,
	/// Defaults to the owner when absent
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub receiver: Option<Address>,
	pub sell_amount: String,
	pub buy_amount: String,
	/// Unix timestamp (seconds)
	pub valid_to: u32,
	pub app_data: B256,
	pub fee_amount: String,
	pub kind: OrderKind,
	pub partially_fillable: bool,
	#[serde(default)]
	pub sell_token_balance: TokenBalance,
	#[serde(default)]
	pub buy_token_balance: TokenBalance,
}

/// Signed order ready for submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreation {
	#[serde(flatten)]
	pub order: UnsignedOrder,
	pub signature: String,
	pub signing_scheme: SigningScheme,
}

/// Server-side order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderStatus {
	PresignaturePending,
	Open,
	Fulfilled,
	Cancelled,
	Expired,
}

/// Order information returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderMetaData {
	pub uid: OrderId,
	pub owner: Address,
	pub creation_date: String,
	pub status: OrderStatus,
	pub sell_token: Address,
	pub buy_token: Address,
	#[serde(default)]
	pub receiver: Option<Address>,
	pub sell_amount: String,
	pub buy_amount: String,
	pub valid_to: u32,
	pub app_data: B256,
	pub fee_amount: String,
	pub kind: OrderKind,
	pub partially_fillable: bool,
	#[serde(default)]
	pub signature: String,
	#[serde(default)]
	pub signing_scheme: Option<SigningScheme>,
	#[serde(default)]
	pub available_balance: Option<String>,
	#[serde(default)]
	pub executed_buy_amount: String,
	#[serde(default)]
	pub executed_sell_amount: String,
	#[serde(default)]
	pub executed_sell_amount_before_fees: String,
	#[serde(default)]
	pub executed_fee_amount: String,
	#[serde(default)]
	pub invalidated: bool,
	#[serde(default)]
	pub full_fee_amount: Option<String>,
	#[serde(default)]
	pub settlement_contract: Option<Address>,
	#[serde(default)]
	pub is_liquidity_order: Option<bool>,
}

/// Trade information returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeMetaData {
	pub block_number: u64,
	pub log_index: u64,
	pub order_uid: OrderId,
	pub owner: Address,
	pub sell_token: Address,
	pub buy_token: Address,
	pub sell_amount: String,
	pub sell_amount_before_fees: String,
	pub buy_amount: String,
	#[serde(default)]
	pub tx_hash: Option<B256>,
}

/// Parameters for listing an account's orders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetOrdersParams {
	pub owner: Address,
	/// Defaults to 1000
	pub limit: Option<u32>,
	/// Defaults to 0
	pub offset: Option<u32>,
}

impl GetOrdersParams {
	pub fn new(owner: Address) -> Self {
		Self {
			owner,
			limit: None,
			offset: None,
		}
	}
}

/// Parameters for listing trades; absent values are left out of the query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetTradesParams {
	pub owner: Option<Address>,
	pub limit: Option<u32>,
	pub offset: Option<u32>,
}

impl GetTradesParams {
	/// Query pairs in `owner`, `limit`, `offset` order
	///
	/// The owner uses the checksummed form, as in the orders path.
	pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
		let mut pairs = Vec::with_capacity(3);
		if let Some(owner) = self.owner {
			pairs.push(("owner", owner.to_string()));
		}
		if let Some(limit) = self.limit {
			pairs.push(("limit", limit.to_string()));
		}
		if let Some(offset) = self.offset {
			pairs.push(("offset", offset.to_string()));
		}
		pairs
	}
}

/// Signed cancellation of a single order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCancellation {
	pub order_uid: OrderId,
	pub signature: String,
	pub signing_scheme: SigningScheme,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCancellationParams {
	pub cancellation: OrderCancellation,
	pub owner: Address,
}

/// Affiliate statistics of an address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
	pub total_trades: u64,
	pub total_referrals: u64,
	pub trade_volume_usd: f64,
	pub referral_volume_usd: f64,
	pub last_updated: Option<String>,
}

/// Price source preferred by the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GpPriceStrategy {
	Cowswap,
	Legacy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceStrategy {
	pub primary: GpPriceStrategy,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub secondary: Option<GpPriceStrategy>,
}

/// Gas station response, prices in wei as strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasFeeEndpointResponse {
	pub last_update: String,
	pub lowest: String,
	pub safe_low: String,
	pub standard: String,
	pub fast: String,
	pub fastest: String,
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::address;
	use serde_json::json;

	fn sample_order() -> UnsignedOrder {
		UnsignedOrder {
			sell_token: address!("6810e776880C02933D47DB1b9fc05908e5386b96"),
			buy_token: address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
			receiver: None,
			sell_amount: "1000000000000000000".to_string(),
			buy_amount: "5000000000000000".to_string(),
			valid_to: 1_700_000_000,
			app_data: B256::ZERO,
			fee_amount: "1000".to_string(),
			kind: OrderKind::Sell,
			partially_fillable: false,
			sell_token_balance: TokenBalance::Erc20,
			buy_token_balance: TokenBalance::Erc20,
		}
	}

	#[test]
	fn test_signing_scheme_api_values() {
		for scheme in [
			SigningScheme::Eip712,
			SigningScheme::EthSign,
			SigningScheme::Eip1271,
			SigningScheme::PreSign,
		] {
			let json = serde_json::to_value(scheme).unwrap();
			assert_eq!(json, json!(scheme.api_value()));
		}
	}

	#[test]
	fn test_order_creation_is_flat_camel_case() {
		let creation = OrderCreation {
			order: sample_order(),
			signature: "0xdead".to_string(),
			signing_scheme: SigningScheme::Eip712,
		};
		let value = serde_json::to_value(&creation).unwrap();
		assert_eq!(value["sellAmount"], "1000000000000000000");
		assert_eq!(value["validTo"], 1_700_000_000);
		assert_eq!(value["kind"], "sell");
		assert_eq!(value["sellTokenBalance"], "erc20");
		assert_eq!(value["signingScheme"], "eip712");
		assert!(value.get("receiver").is_none());
	}

	#[test]
	fn test_trades_params_skip_absent_values() {
		let params = GetTradesParams {
			owner: None,
			limit: Some(10),
			offset: None,
		};
		assert_eq!(params.query_pairs(), vec![("limit", "10".to_string())]);

		let owner = address!("FEB4acf3df3cDEA7399794D0869ef76A6EfAff52");
		let params = GetTradesParams {
			owner: Some(owner),
			limit: None,
			offset: Some(20),
		};
		assert_eq!(
			params.query_pairs(),
			vec![
				("owner", "0xFEB4acf3df3cDEA7399794D0869ef76A6EfAff52".to_string()),
				("offset", "20".to_string()),
			]
		);
	}

	#[test]
	fn test_price_strategy_parsing() {
		let strategy: PriceStrategy =
			serde_json::from_str(r#"{"primary":"COWSWAP","secondary":"LEGACY"}"#).unwrap();
		assert_eq!(strategy.primary, GpPriceStrategy::Cowswap);
		assert_eq!(strategy.secondary, Some(GpPriceStrategy::Legacy));
	}
}
