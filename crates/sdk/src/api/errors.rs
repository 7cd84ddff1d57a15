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

//! Operator and quote error taxonomies
//!
//! The operator API answers failures with `{ "errorType": ..., "description": ... }`.
//! [`OperatorError`] keeps that shape for order reads and writes, while
//! [`QuoteError`] re-maps the same codes into the quote-specific set used by
//! the quote and legacy price endpoints.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Error codes returned by the operator API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApiErrorCode {
	DuplicateOrder,
	InvalidSignature,
	MissingOrderData,
	InsufficientValidTo,
	InsufficientAllowance,
	InsufficientBalance,
	InsufficientFee,
	WrongOwner,
	NotFound,
	OrderNotFound,
	AlreadyCancelled,
	OrderFullyExecuted,
	OrderExpired,
	NoLiquidity,
	UnsupportedToken,
	AmountIsZero,
	SellAmountDoesNotCoverFee,
	TransferEthToContract,
	TransferSimulationFailed,
	UnhandledGetError,
	UnhandledCreateError,
	UnhandledDeleteError,
	/// Code not known to this SDK, kept verbatim
	Other(String),
}

impl ApiErrorCode {
	pub fn as_str(&self) -> &str {
		match self {
			ApiErrorCode::DuplicateOrder => "DuplicateOrder",
			ApiErrorCode::InvalidSignature => "InvalidSignature",
			ApiErrorCode::MissingOrderData => "MissingOrderData",
			ApiErrorCode::InsufficientValidTo => "InsufficientValidTo",
			ApiErrorCode::InsufficientAllowance => "InsufficientAllowance",
			ApiErrorCode::InsufficientBalance => "InsufficientBalance",
			ApiErrorCode::InsufficientFee => "InsufficientFee",
			ApiErrorCode::WrongOwner => "WrongOwner",
			ApiErrorCode::NotFound => "NotFound",
			ApiErrorCode::OrderNotFound => "OrderNotFound",
			ApiErrorCode::AlreadyCancelled => "AlreadyCancelled",
			ApiErrorCode::OrderFullyExecuted => "OrderFullyExecuted",
			ApiErrorCode::OrderExpired => "OrderExpired",
			ApiErrorCode::NoLiquidity => "NoLiquidity",
			ApiErrorCode::UnsupportedToken => "UnsupportedToken",
			ApiErrorCode::AmountIsZero => "AmountIsZero",
			ApiErrorCode::SellAmountDoesNotCoverFee => "SellAmountDoesNotCoverFee",
			ApiErrorCode::TransferEthToContract => "TransferEthToContract",
			ApiErrorCode::TransferSimulationFailed => "TransferSimulationFailed",
			ApiErrorCode::UnhandledGetError => "UNHANDLED_GET_ERROR",
			ApiErrorCode::UnhandledCreateError => "UNHANDLED_CREATE_ERROR",
			ApiErrorCode::UnhandledDeleteError => "UNHANDLED_DELETE_ERROR",
			ApiErrorCode::Other(code) => code,
		}
	}

	/// Human readable explanation shown to users, `None` for unknown codes
	pub fn details(&self) -> Option<&'static str> {
		let details = match self {
			ApiErrorCode::DuplicateOrder => {
				"There was another identical order already submitted. Please try again."
			}
			ApiErrorCode::InvalidSignature => {
				"The order signature is invalid. Check whether your Wallet app supports off-chain signing."
			}
			ApiErrorCode::MissingOrderData => "The order has missing information",
			ApiErrorCode::InsufficientValidTo => {
				"The order you are signing is already expired. This can happen if you set a short expiration in the settings and waited too long before signing the transaction. Please try again."
			}
			ApiErrorCode::InsufficientAllowance => {
				"The account needs to approve the selling token in order to trade"
			}
			ApiErrorCode::InsufficientBalance => "The account doesn't have enough funds",
			ApiErrorCode::InsufficientFee => {
				"The signed fee is insufficient. It's possible that is higher now due to a change in the gas price, ether price, or the sell token price. Please try again to get an updated fee quote."
			}
			ApiErrorCode::WrongOwner => {
				"The signature is invalid. It's likely that the signing method provided by your wallet doesn't comply with the standards required by the protocol. Check whether your Wallet app supports off-chain signing (EIP-712 or ETHSIGN)."
			}
			ApiErrorCode::NotFound => "Token pair selected has insufficient liquidity",
			ApiErrorCode::OrderNotFound => "The order you are trying to cancel does not exist",
			ApiErrorCode::AlreadyCancelled => "Order is already cancelled",
			ApiErrorCode::OrderFullyExecuted => "Order is already filled",
			ApiErrorCode::OrderExpired => "Order is expired",
			ApiErrorCode::NoLiquidity => "Token pair selected has insufficient liquidity",
			ApiErrorCode::UnsupportedToken => {
				"One of the tokens you are trading is unsupported. Please read the FAQ for more info."
			}
			ApiErrorCode::AmountIsZero => "Amount is zero",
			ApiErrorCode::SellAmountDoesNotCoverFee => {
				"Sell amount does not sufficiently cover the current fee"
			}
			ApiErrorCode::TransferEthToContract => {
				"Sending the native currency to smart contract wallets is not currently supported"
			}
			ApiErrorCode::TransferSimulationFailed => {
				"Transfer simulation of the native currency failed"
			}
			ApiErrorCode::UnhandledGetError => {
				"Order fetch failed. This may be due to a server or network connectivity issue. Please try again later."
			}
			ApiErrorCode::UnhandledCreateError => "The order was not accepted by the network",
			ApiErrorCode::UnhandledDeleteError => {
				"The order cancellation was not accepted by the network"
			}
			ApiErrorCode::Other(_) => return None,
		};
		Some(details)
	}
}

impl From<String> for ApiErrorCode {
	fn from(code: String) -> Self {
		match code.as_str() {
			"DuplicateOrder" => ApiErrorCode::DuplicateOrder,
			"InvalidSignature" => ApiErrorCode::InvalidSignature,
			"MissingOrderData" => ApiErrorCode::MissingOrderData,
			"InsufficientValidTo" => ApiErrorCode::InsufficientValidTo,
			"InsufficientAllowance" => ApiErrorCode::InsufficientAllowance,
			"InsufficientBalance" => ApiErrorCode::InsufficientBalance,
			"InsufficientFee" => ApiErrorCode::InsufficientFee,
			"WrongOwner" => ApiErrorCode::WrongOwner,
			"NotFound" => ApiErrorCode::NotFound,
			"OrderNotFound" => ApiErrorCode::OrderNotFound,
			"AlreadyCancelled" => ApiErrorCode::AlreadyCancelled,
			"OrderFullyExecuted" => ApiErrorCode::OrderFullyExecuted,
			"OrderExpired" => ApiErrorCode::OrderExpired,
			"NoLiquidity" => ApiErrorCode::NoLiquidity,
			"UnsupportedToken" => ApiErrorCode::UnsupportedToken,
			"AmountIsZero" => ApiErrorCode::AmountIsZero,
			"SellAmountDoesNotCoverFee" => ApiErrorCode::SellAmountDoesNotCoverFee,
			"TransferEthToContract" => ApiErrorCode::TransferEthToContract,
			"TransferSimulationFailed" => ApiErrorCode::TransferSimulationFailed,
			"UNHANDLED_GET_ERROR" => ApiErrorCode::UnhandledGetError,
			"UNHANDLED_CREATE_ERROR" => ApiErrorCode::UnhandledCreateError,
			"UNHANDLED_DELETE_ERROR" => ApiErrorCode::UnhandledDeleteError,
			_ => ApiErrorCode::Other(code),
		}
	}
}

impl From<ApiErrorCode> for String {
	fn from(code: ApiErrorCode) -> Self {
		code.as_str().to_string()
	}
}

impl fmt::Display for ApiErrorCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error body returned by the operator API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorObject {
	pub error_type: ApiErrorCode,
	#[serde(default)]
	pub description: String,
}

/// Failure reported by the operator API for order reads
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error_type}: {description}")]
pub struct OperatorError {
	pub error_type: ApiErrorCode,
	pub description: String,
}

impl OperatorError {
	/// Fallback used when the error body cannot be interpreted
	pub fn unhandled(error_type: ApiErrorCode) -> Self {
		let description = error_type.details().unwrap_or_default().to_string();
		Self {
			error_type,
			description,
		}
	}
}

impl From<ApiErrorObject> for OperatorError {
	fn from(obj: ApiErrorObject) -> Self {
		Self {
			error_type: obj.error_type,
			description: obj.description,
		}
	}
}

/// Write operation a failed response belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
	Create,
	Delete,
}

impl OrderAction {
	fn unhandled_code(self) -> ApiErrorCode {
		match self {
			OrderAction::Create => ApiErrorCode::UnhandledCreateError,
			OrderAction::Delete => ApiErrorCode::UnhandledDeleteError,
		}
	}
}

/// Build the user-facing message for a failed order creation or cancellation
///
/// `body` is the raw response body; it is only inspected for 400 and 404.
pub fn error_message_from_status(status: u16, body: &str, action: OrderAction) -> String {
	match status {
		400 | 404 => error_message_from_body(body, action),
		403 => match action {
			OrderAction::Create => {
				"The order cannot be accepted. Your account is deny-listed.".to_string()
			}
			OrderAction::Delete => {
				"The order cannot be cancelled. Your account is deny-listed.".to_string()
			}
		},
		429 => match action {
			OrderAction::Create => {
				"The order cannot be accepted. Too many order placements. Please, retry in a minute"
					.to_string()
			}
			OrderAction::Delete => {
				"The order cannot be cancelled. Too many order cancellations. Please, retry in a minute"
					.to_string()
			}
		},
		_ => {
			error!(status, body, "Unexpected status from the operator API");
			match action {
				OrderAction::Create => "Error creating the order".to_string(),
				OrderAction::Delete => "Error cancelling the order".to_string(),
			}
		}
	}
}

fn error_message_from_body(body: &str, action: OrderAction) -> String {
	let unhandled = || {
		action
			.unhandled_code()
			.details()
			.unwrap_or_default()
			.to_string()
	};

	let value: serde_json::Value = match serde_json::from_str(body) {
		Ok(value) => value,
		Err(e) => {
			error!("Error handling a 4xx response, body is not JSON: {}", e);
			return unhandled();
		}
	};

	match value.get("errorType").and_then(|v| v.as_str()) {
		Some(error_type) => {
			let code = ApiErrorCode::from(error_type.to_string());
			code.details()
				.map(str::to_string)
				.unwrap_or_else(|| error_type.to_string())
		}
		None => {
			error!(%value, "Unknown reason for the rejected order request");
			value
				.get("description")
				.and_then(|v| v.as_str())
				.map(str::to_string)
				.unwrap_or_else(unhandled)
		}
	}
}

/// Error codes used for quote failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuoteErrorCode {
	UnsupportedToken,
	InsufficientLiquidity,
	FeeExceedsFrom,
	ZeroPrice,
	#[serde(rename = "UNHANDLED_ERROR")]
	UnhandledError,
}

impl QuoteErrorCode {
	pub fn as_str(self) -> &'static str {
		match self {
			QuoteErrorCode::UnsupportedToken => "UnsupportedToken",
			QuoteErrorCode::InsufficientLiquidity => "InsufficientLiquidity",
			QuoteErrorCode::FeeExceedsFrom => "FeeExceedsFrom",
			QuoteErrorCode::ZeroPrice => "ZeroPrice",
			QuoteErrorCode::UnhandledError => "UNHANDLED_ERROR",
		}
	}

	pub fn details(self) -> &'static str {
		match self {
			QuoteErrorCode::UnsupportedToken => {
				"One of the tokens you are trading is unsupported. Please read the FAQ for more info."
			}
			QuoteErrorCode::InsufficientLiquidity => "Token pair selected has insufficient liquidity",
			QuoteErrorCode::FeeExceedsFrom => "Current fee exceeds entered \"from\" amount",
			QuoteErrorCode::ZeroPrice => {
				"Quoted price is zero. This is likely due to a significant price difference between the two tokens. Please try increasing amounts."
			}
			QuoteErrorCode::UnhandledError => {
				"Quote fetch failed. This may be due to a server or network connectivity issue. Please try again later."
			}
		}
	}
}

impl fmt::Display for QuoteErrorCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Failure of a quote or legacy price request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error_type}: {description}")]
pub struct QuoteError {
	pub error_type: QuoteErrorCode,
	pub description: String,
}

impl QuoteError {
	pub fn new(error_type: QuoteErrorCode) -> Self {
		Self {
			error_type,
			description: error_type.details().to_string(),
		}
	}

	pub fn unhandled() -> Self {
		Self::new(QuoteErrorCode::UnhandledError)
	}
}

/// Re-map an operator error body into the quote taxonomy
pub fn map_operator_error_to_quote_error(error: Option<&ApiErrorObject>) -> QuoteError {
	let Some(error) = error else {
		return QuoteError::unhandled();
	};

	match error.error_type {
		ApiErrorCode::NotFound | ApiErrorCode::NoLiquidity => {
			QuoteError::new(QuoteErrorCode::InsufficientLiquidity)
		}
		ApiErrorCode::SellAmountDoesNotCoverFee => QuoteError {
			error_type: QuoteErrorCode::FeeExceedsFrom,
			description: error.description.clone(),
		},
		ApiErrorCode::UnsupportedToken | ApiErrorCode::TransferEthToContract => QuoteError {
			error_type: QuoteErrorCode::UnsupportedToken,
			description: error.description.clone(),
		},
		_ => QuoteError::unhandled(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn api_error(error_type: &str, description: &str) -> ApiErrorObject {
		ApiErrorObject {
			error_type: ApiErrorCode::from(error_type.to_string()),
			description: description.to_string(),
		}
	}

	#[test]
	fn test_error_code_keeps_unknown_values() {
		let obj: ApiErrorObject =
			serde_json::from_str(r#"{"errorType":"SomethingNew","description":"x"}"#).unwrap();
		assert_eq!(obj.error_type, ApiErrorCode::Other("SomethingNew".to_string()));
		assert_eq!(obj.error_type.as_str(), "SomethingNew");
		assert!(obj.error_type.details().is_none());
	}

	#[test]
	fn test_error_code_serializes_wire_name() {
		let json = serde_json::to_string(&ApiErrorCode::UnhandledCreateError).unwrap();
		assert_eq!(json, r#""UNHANDLED_CREATE_ERROR""#);
	}

	#[test]
	fn test_quote_mapping() {
		let mapped = map_operator_error_to_quote_error(Some(&api_error("NoLiquidity", "none")));
		assert_eq!(mapped.error_type, QuoteErrorCode::InsufficientLiquidity);
		assert_eq!(
			mapped.description,
			QuoteErrorCode::InsufficientLiquidity.details()
		);

		let mapped = map_operator_error_to_quote_error(Some(&api_error(
			"SellAmountDoesNotCoverFee",
			"fee too high",
		)));
		assert_eq!(mapped.error_type, QuoteErrorCode::FeeExceedsFrom);
		assert_eq!(mapped.description, "fee too high");

		let mapped =
			map_operator_error_to_quote_error(Some(&api_error("TransferEthToContract", "eth")));
		assert_eq!(mapped.error_type, QuoteErrorCode::UnsupportedToken);

		let mapped = map_operator_error_to_quote_error(Some(&api_error("WrongOwner", "nope")));
		assert_eq!(mapped.error_type, QuoteErrorCode::UnhandledError);

		assert_eq!(
			map_operator_error_to_quote_error(None).error_type,
			QuoteErrorCode::UnhandledError
		);
	}

	#[test]
	fn test_status_messages() {
		let body = r#"{"errorType":"DuplicateOrder","description":"dup"}"#;
		assert_eq!(
			error_message_from_status(400, body, OrderAction::Create),
			ApiErrorCode::DuplicateOrder.details().unwrap()
		);
		assert_eq!(
			error_message_from_status(404, r#"{"errorType":"Brand","description":""}"#, OrderAction::Delete),
			"Brand"
		);
		assert_eq!(
			error_message_from_status(400, r#"{"description":"only text"}"#, OrderAction::Create),
			"only text"
		);
		assert_eq!(
			error_message_from_status(400, "not json", OrderAction::Delete),
			ApiErrorCode::UnhandledDeleteError.details().unwrap()
		);
		assert!(error_message_from_status(403, "", OrderAction::Create).contains("deny-listed"));
		assert!(error_message_from_status(429, "", OrderAction::Delete).contains("cancellations"));
		assert_eq!(
			error_message_from_status(500, "", OrderAction::Create),
			"Error creating the order"
		);
	}
}
