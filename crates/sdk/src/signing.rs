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

//! Order and cancellation signing
//!
//! Orders are signed as EIP-712 typed data under the settlement contract's
//! domain. The wallet is asked for a typed-data signature first; wallets that
//! report typed data as unsupported fall back to `eth_sign` over the same
//! digest, which the operator accepts as the `ethsign` scheme.

use alloy_primitives::{Address, B256, Bytes, U256};
use alloy_signer_local::PrivateKeySigner;
use alloy_sol_types::{Eip712Domain, SolStruct};
use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

use crate::constants::settlement_contract_address;
use crate::error::CowError;
use crate::types::{OrderId, SigningScheme, UnsignedOrder};

mod typed {
	alloy_sol_types::sol! {
		struct Order {
			address sellToken;
			address buyToken;
			address receiver;
			uint256 sellAmount;
			uint256 buyAmount;
			uint32 validTo;
			bytes32 appData;
			uint256 feeAmount;
			string kind;
			bool partiallyFillable;
			string sellTokenBalance;
			string buyTokenBalance;
		}

		struct OrderCancellation {
			bytes orderUid;
		}
	}
}

const DOMAIN_NAME: &str = "Gnosis Protocol";
const DOMAIN_VERSION: &str = "v2";

/// Length of an order uid: digest (32) + owner (20) + validTo (4)
pub const ORDER_UID_LENGTH: usize = 56;

/// Error types reported by a wallet
#[derive(Debug, Clone, Error)]
pub enum WalletError {
	#[error("Signing method not supported: {0}")]
	Unsupported(String),
	#[error("Signature rejected: {0}")]
	Rejected(String),
}

/// Source of signatures, usually backed by a wallet
///
/// Signatures are 65 bytes, `r ‖ s ‖ v` with `v` in {27, 28}.
#[async_trait]
pub trait WalletProvider: Send + Sync {
	/// Address of the signing account
	fn address(&self) -> Address;

	/// Sign an EIP-712 digest without any prefix
	async fn sign_typed_data_hash(&self, hash: B256) -> Result<[u8; 65], WalletError>;

	/// Sign a message with the EIP-191 personal message prefix
	async fn sign_message(&self, message: &[u8]) -> Result<[u8; 65], WalletError>;
}

#[async_trait]
impl WalletProvider for PrivateKeySigner {
	fn address(&self) -> Address {
		alloy_signer::Signer::address(self)
	}

	async fn sign_typed_data_hash(&self, hash: B256) -> Result<[u8; 65], WalletError> {
		let signature = alloy_signer::Signer::sign_hash(self, &hash)
			.await
			.map_err(|e| WalletError::Rejected(e.to_string()))?;
		Ok(signature.as_bytes())
	}

	async fn sign_message(&self, message: &[u8]) -> Result<[u8; 65], WalletError> {
		let signature = alloy_signer::Signer::sign_message(self, message)
			.await
			.map_err(|e| WalletError::Rejected(e.to_string()))?;
		Ok(signature.as_bytes())
	}
}

/// Signature plus the scheme it was produced with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningResult {
	/// `0x`-prefixed hex
	pub signature: String,
	pub signing_scheme: SigningScheme,
}

impl SigningResult {
	fn new(signature: [u8; 65], signing_scheme: SigningScheme) -> Self {
		Self {
			signature: format!("0x{}", hex::encode(signature)),
			signing_scheme,
		}
	}
}

/// EIP-712 domain of the settlement contract on a network
pub fn domain(chain_id: u64) -> Result<Eip712Domain, CowError> {
	let verifying_contract =
		settlement_contract_address(chain_id).ok_or(CowError::UnsupportedNetwork {
			api: "Settlement contract",
			chain_id,
		})?;

	Ok(Eip712Domain::new(
		Some(DOMAIN_NAME.into()),
		Some(DOMAIN_VERSION.into()),
		Some(U256::from(chain_id)),
		Some(verifying_contract),
		None,
	))
}

// Only plain decimal digits; the submitted order carries the same string verbatim
fn parse_amount(field: &str, value: &str) -> Result<U256, CowError> {
	if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
		return Err(CowError::InvalidOrder(format!(
			"{} '{}' is not a decimal integer",
			field, value
		)));
	}
	U256::from_str_radix(value, 10)
		.map_err(|e| CowError::InvalidOrder(format!("{} '{}' is not an integer: {}", field, value, e)))
}

fn to_typed_order(order: &UnsignedOrder) -> Result<typed::Order, CowError> {
	Ok(typed::Order {
		sellToken: order.sell_token,
		buyToken: order.buy_token,
		receiver: order.receiver.unwrap_or(Address::ZERO),
		sellAmount: parse_amount("sellAmount", &order.sell_amount)?,
		buyAmount: parse_amount("buyAmount", &order.buy_amount)?,
		validTo: order.valid_to,
		appData: order.app_data,
		feeAmount: parse_amount("feeAmount", &order.fee_amount)?,
		kind: order.kind.as_str().to_string(),
		partiallyFillable: order.partially_fillable,
		sellTokenBalance: order.sell_token_balance.as_str().to_string(),
		buyTokenBalance: order.buy_token_balance.as_str().to_string(),
	})
}

fn decode_order_uid(order_uid: &str) -> Result<Vec<u8>, CowError> {
	let bytes = hex::decode(order_uid.trim_start_matches("0x"))
		.map_err(|e| CowError::InvalidOrder(format!("Invalid order uid: {}", e)))?;
	if bytes.len() != ORDER_UID_LENGTH {
		return Err(CowError::InvalidOrder(format!(
			"Invalid order uid length: {} (expected {})",
			bytes.len(),
			ORDER_UID_LENGTH
		)));
	}
	Ok(bytes)
}

/// EIP-712 digest of an order
pub fn order_signing_hash(order: &UnsignedOrder, chain_id: u64) -> Result<B256, CowError> {
	let domain = domain(chain_id)?;
	Ok(to_typed_order(order)?.eip712_signing_hash(&domain))
}

/// EIP-712 digest of an order cancellation
pub fn cancellation_signing_hash(order_uid: &str, chain_id: u64) -> Result<B256, CowError> {
	let domain = domain(chain_id)?;
	let cancellation = typed::OrderCancellation {
		orderUid: Bytes::from(decode_order_uid(order_uid)?),
	};
	Ok(cancellation.eip712_signing_hash(&domain))
}

/// Unique identifier the operator assigns to an order from `owner`
pub fn compute_order_uid(
	order: &UnsignedOrder,
	chain_id: u64,
	owner: Address,
) -> Result<OrderId, CowError> {
	let digest = order_signing_hash(order, chain_id)?;

	let mut uid = Vec::with_capacity(ORDER_UID_LENGTH);
	uid.extend_from_slice(digest.as_slice());
	uid.extend_from_slice(owner.as_slice());
	uid.extend_from_slice(&order.valid_to.to_be_bytes());

	Ok(format!("0x{}", hex::encode(uid)))
}

async fn sign_digest(
	digest: B256,
	provider: &dyn WalletProvider,
) -> Result<SigningResult, CowError> {
	match provider.sign_typed_data_hash(digest).await {
		Ok(signature) => Ok(SigningResult::new(signature, SigningScheme::Eip712)),
		Err(WalletError::Unsupported(reason)) => {
			warn!("Typed data signing unsupported ({}), falling back to eth_sign", reason);
			let signature = provider
				.sign_message(digest.as_slice())
				.await
				.map_err(|e| CowError::Signing(e.to_string()))?;
			Ok(SigningResult::new(signature, SigningScheme::EthSign))
		}
		Err(e) => Err(CowError::Signing(e.to_string())),
	}
}

/// Sign an order for `chain_id`
pub async fn sign_order(
	order: &UnsignedOrder,
	chain_id: u64,
	provider: &dyn WalletProvider,
) -> Result<SigningResult, CowError> {
	let digest = order_signing_hash(order, chain_id)?;
	debug!(chain_id, %digest, signer = %provider.address(), "Signing order");
	sign_digest(digest, provider).await
}

/// Sign the cancellation of `order_uid` for `chain_id`
pub async fn sign_order_cancellation(
	order_uid: &str,
	chain_id: u64,
	provider: &dyn WalletProvider,
) -> Result<SigningResult, CowError> {
	let digest = cancellation_signing_hash(order_uid, chain_id)?;
	debug!(chain_id, order_uid, signer = %provider.address(), "Signing order cancellation");
	sign_digest(digest, provider).await
}
