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

//! Quote and price request/response shapes

use alloy_primitives::Address;
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::ZERO_ADDRESS;
use crate::tokens::to_erc20_address;
use crate::types::{OrderKind, TokenBalance};

/// Fee quote request as supplied by callers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeQuoteParams {
	pub sell_token: Address,
	pub buy_token: Address,
	pub kind: OrderKind,
	/// Sell amount before fee for sell orders, buy amount after fee for buy orders
	pub amount: String,
	pub from_decimals: u8,
	pub to_decimals: u8,
	pub chain_id: u64,
	pub user_address: Option<Address>,
	pub receiver: Option<Address>,
	pub valid_to: u32,
}

/// Legacy market price request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuoteParams {
	pub base_token: Address,
	pub quote_token: Address,
	pub kind: OrderKind,
	pub amount: String,
	pub from_decimals: u8,
	pub to_decimals: u8,
	pub chain_id: u64,
	pub user_address: Option<Address>,
	pub receiver: Option<Address>,
	pub valid_to: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceInformation {
	pub token: String,
	pub amount: Option<String>,
}

/// Amount side of a quote query, tagged by order kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum QuoteSide {
	Sell {
		#[serde(rename = "sellAmountBeforeFee")]
		sell_amount_before_fee: String,
	},
	Buy {
		#[serde(rename = "buyAmountAfterFee")]
		buy_amount_after_fee: String,
	},
}

/// Body of `POST /quote`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteQuery {
	pub sell_token: Address,
	pub buy_token: Address,
	pub from: Address,
	pub receiver: Address,
	pub app_data: String,
	pub valid_to: u32,
	pub partially_fillable: bool,
	#[serde(flatten)]
	pub side: QuoteSide,
}

impl QuoteQuery {
	/// Map caller-facing fee parameters onto the API's quote query
	pub fn from_fee_params(params: &FeeQuoteParams, app_data_hash: &str) -> Self {
		let from = params.user_address.unwrap_or(ZERO_ADDRESS);
		let side = match params.kind {
			OrderKind::Sell => QuoteSide::Sell {
				sell_amount_before_fee: params.amount.clone(),
			},
			OrderKind::Buy => QuoteSide::Buy {
				buy_amount_after_fee: params.amount.clone(),
			},
		};

		Self {
			sell_token: to_erc20_address(params.sell_token, params.chain_id),
			buy_token: to_erc20_address(params.buy_token, params.chain_id),
			from,
			receiver: params.receiver.unwrap_or(from),
			app_data: app_data_hash.to_string(),
			valid_to: params.valid_to,
			partially_fillable: false,
			side,
		}
	}
}

/// Order parameters inside a quote response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotedOrder {
	pub sell_token: Address,
	pub buy_token: Address,
	#[serde(default)]
	pub receiver: Option<Address>,
	#[serde(deserialize_with = "string_or_number")]
	pub sell_amount: String,
	#[serde(deserialize_with = "string_or_number")]
	pub buy_amount: String,
	#[serde(deserialize_with = "string_or_number")]
	pub valid_to: String,
	#[serde(default)]
	pub app_data: Option<String>,
	#[serde(deserialize_with = "string_or_number")]
	pub fee_amount: String,
	pub kind: OrderKind,
	#[serde(default)]
	pub partially_fillable: bool,
	#[serde(default)]
	pub sell_token_balance: TokenBalance,
	#[serde(default)]
	pub buy_token_balance: TokenBalance,
}

/// Response of `POST /quote`, numeric values normalised to strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleGetQuoteResponse {
	pub from: Address,
	pub quote: QuotedOrder,
	pub expiration: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Raw {
		Text(String),
		Number(serde_json::Number),
	}

	Ok(match Raw::deserialize(deserializer)? {
		Raw::Text(s) => s,
		Raw::Number(n) => n.to_string(),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::constants::NATIVE_CURRENCY_ADDRESS;
	use alloy_primitives::address;
	use serde_json::json;

	fn params(kind: OrderKind) -> FeeQuoteParams {
		FeeQuoteParams {
			sell_token: NATIVE_CURRENCY_ADDRESS,
			buy_token: address!("6B175474E89094C44Da98b954EedeAC495271d0F"),
			kind,
			amount: "1000".to_string(),
			from_decimals: 18,
			to_decimals: 18,
			chain_id: 1,
			user_address: None,
			receiver: None,
			valid_to: 1_700_000_000,
		}
	}

	#[test]
	fn test_sell_quote_query() {
		let query = QuoteQuery::from_fee_params(&params(OrderKind::Sell), "0xabc");
		let value = serde_json::to_value(&query).unwrap();
		assert_eq!(value["kind"], "sell");
		assert_eq!(value["sellAmountBeforeFee"], "1000");
		assert!(value.get("buyAmountAfterFee").is_none());
		assert_eq!(value["from"], json!(ZERO_ADDRESS));
		assert_eq!(value["receiver"], json!(ZERO_ADDRESS));
		assert_eq!(value["appData"], "0xabc");
		assert_eq!(value["partiallyFillable"], false);
		// native marker is swapped for WETH
		assert_eq!(
			value["sellToken"],
			json!(address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"))
		);
	}

	#[test]
	fn test_buy_quote_query_uses_user_as_receiver() {
		let user = address!("FEB4acf3df3cDEA7399794D0869ef76A6EfAff52");
		let mut p = params(OrderKind::Buy);
		p.user_address = Some(user);
		let query = QuoteQuery::from_fee_params(&p, "0x0");
		assert_eq!(query.from, user);
		assert_eq!(query.receiver, user);
		let value = serde_json::to_value(&query).unwrap();
		assert_eq!(value["kind"], "buy");
		assert_eq!(value["buyAmountAfterFee"], "1000");
	}

	#[test]
	fn test_quote_response_accepts_numbers() {
		let body = json!({
			"from": "0xfeb4acf3df3cdea7399794d0869ef76a6efaff52",
			"quote": {
				"sellToken": "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
				"buyToken": "0x6b175474e89094c44da98b954eedeac495271d0f",
				"sellAmount": "1000",
				"buyAmount": 2000,
				"validTo": 1700000000,
				"feeAmount": "12",
				"kind": "sell",
				"partiallyFillable": false
			},
			"expiration": "2023-11-14T22:13:20Z"
		});
		let response: SimpleGetQuoteResponse = serde_json::from_value(body).unwrap();
		assert_eq!(response.quote.buy_amount, "2000");
		assert_eq!(response.quote.valid_to, "1700000000");
		assert_eq!(response.quote.sell_token_balance, TokenBalance::Erc20);
	}
}
