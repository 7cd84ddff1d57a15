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

//! Integration tests for the SDK facade

use std::sync::Arc;

use async_trait::async_trait;
use cow_sdk::{
	Address, B256, CowContext, CowError, CowSdk, Environment, OrderKind, PrivateKeySigner,
	SdkConfig, SigningScheme, TokenBalance, UnsignedOrder, WalletError, WalletProvider,
	compute_order_uid,
};
use serde_json::json;

const TEST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

fn signer() -> Arc<dyn WalletProvider> {
	Arc::new(TEST_KEY.parse::<PrivateKeySigner>().unwrap())
}

fn order() -> UnsignedOrder {
	UnsignedOrder {
		sell_token: "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2".parse().unwrap(),
		buy_token: "0x6b175474e89094c44da98b954eedeac495271d0f".parse().unwrap(),
		receiver: None,
		sell_amount: "1000000000000000000".to_string(),
		buy_amount: "3000000000000000000000".to_string(),
		valid_to: 1_700_000_000,
		app_data: B256::ZERO,
		fee_amount: "0".to_string(),
		kind: OrderKind::Sell,
		partially_fillable: false,
		sell_token_balance: TokenBalance::Erc20,
		buy_token_balance: TokenBalance::Erc20,
	}
}

/// Wallet that only knows personal messages
struct MessageOnlyWallet(PrivateKeySigner);

#[async_trait]
impl WalletProvider for MessageOnlyWallet {
	fn address(&self) -> Address {
		WalletProvider::address(&self.0)
	}

	async fn sign_typed_data_hash(&self, _hash: B256) -> Result<[u8; 65], WalletError> {
		Err(WalletError::Unsupported("eth_signTypedData_v4".to_string()))
	}

	async fn sign_message(&self, message: &[u8]) -> Result<[u8; 65], WalletError> {
		WalletProvider::sign_message(&self.0, message).await
	}
}

#[test]
fn test_defaults_without_context() {
	let sdk = CowSdk::new(1, CowContext::default());

	assert_eq!(sdk.chain_id, 1);
	assert_eq!(sdk.cow_api.chain_id(), 1);
	assert_eq!(sdk.cow_api.environment(), Environment::Production);
	assert_eq!(sdk.cow_api.app_data_hash(), format!("0x{}", "0".repeat(64)));
	assert!(!CowSdk::VERSION.is_empty());
}

#[test]
fn test_context_flows_into_api_client() {
	let sdk = CowSdk::new(
		100,
		CowContext {
			app_data_hash: Some("0x1234".to_string()),
			is_dev_environment: Some(true),
			provider: None,
		},
	);

	assert_eq!(sdk.cow_api.app_data_hash(), "0x1234");
	assert_eq!(sdk.cow_api.environment(), Environment::Staging);
	assert_eq!(
		sdk.cow_api.get_order_link("0xabc").unwrap(),
		"https://barn.api.cow.fi/xdai/api/v1/orders/0xabc"
	);
}

#[test]
fn test_from_config() {
	let config = SdkConfig {
		chain_id: 4,
		app_data_hash: Some("0xfeed".to_string()),
		is_dev_environment: false,
	};
	let sdk = CowSdk::from_config(config, Some(signer()));

	assert_eq!(sdk.chain_id, 4);
	assert_eq!(sdk.cow_api.app_data_hash(), "0xfeed");
	assert!(sdk.context.provider().is_ok());
}

#[tokio::test]
async fn test_signing_without_provider_fails_first() {
	// Chain 5 is unsupported; the missing signer is still reported first
	let sdk = CowSdk::new(5, CowContext::default());

	let err = sdk.sign_order(&order()).await.unwrap_err();
	assert!(matches!(err, CowError::MissingSigner));
	assert_eq!(err.to_string(), "No provider was instantiated");

	let err = sdk
		.sign_order_cancellation(&format!("0x{}", "00".repeat(56)))
		.await
		.unwrap_err();
	assert!(matches!(err, CowError::MissingSigner));
}

#[tokio::test]
async fn test_sign_order_with_private_key() {
	let sdk = CowSdk::new(
		1,
		CowContext {
			provider: Some(signer()),
			..Default::default()
		},
	);

	let signed = sdk.sign_order(&order()).await.unwrap();

	assert_eq!(signed.signing_scheme, SigningScheme::Eip712);
	assert!(signed.signature.starts_with("0x"));
	assert_eq!(signed.signature.len(), 2 + 65 * 2);
}

#[tokio::test]
async fn test_sign_order_on_unsupported_network() {
	let sdk = CowSdk::new(
		5,
		CowContext {
			provider: Some(signer()),
			..Default::default()
		},
	);

	let err = sdk.sign_order(&order()).await.unwrap_err();
	assert!(matches!(err, CowError::UnsupportedNetwork { chain_id: 5, .. }));
}

#[tokio::test]
async fn test_cancellation_falls_back_to_eth_sign() {
	let wallet = MessageOnlyWallet(TEST_KEY.parse().unwrap());
	let owner = WalletProvider::address(&wallet);
	let sdk = CowSdk::new(
		100,
		CowContext {
			provider: Some(Arc::new(wallet)),
			..Default::default()
		},
	);

	let uid = compute_order_uid(&order(), 100, owner).unwrap();
	let signed = sdk.sign_order_cancellation(&uid).await.unwrap();

	assert_eq!(signed.signing_scheme, SigningScheme::EthSign);
	assert_eq!(signed.signature.len(), 2 + 65 * 2);
}

#[tokio::test]
async fn test_cancellation_rejects_malformed_uid() {
	let sdk = CowSdk::new(
		1,
		CowContext {
			provider: Some(signer()),
			..Default::default()
		},
	);

	let err = sdk.sign_order_cancellation("0x1234").await.unwrap_err();
	assert!(matches!(err, CowError::InvalidOrder(_)));
}

#[test]
fn test_app_data_documents() {
	let sdk = CowSdk::new(1, CowContext::default());

	let minimal = json!({ "version": "0.1.0", "metadata": {} });
	let validation = sdk.validate_app_data_document(&minimal).unwrap();
	assert!(validation.result);
	assert!(validation.errors.is_none());

	let with_referrer = json!({
		"version": "0.1.0",
		"appCode": "CowSwap",
		"metadata": {
			"referrer": {
				"version": "0.1.0",
				"address": "0xFEB4acf3df3cDEA7399794D0869ef76A6EfAff52"
			}
		}
	});
	assert!(sdk.validate_app_data_document(&with_referrer).unwrap().result);

	let missing_version = json!({ "metadata": {} });
	let validation = sdk.validate_app_data_document(&missing_version).unwrap();
	assert!(!validation.result);
	assert!(!validation.errors.unwrap().is_empty());

	let missing_metadata = json!({ "version": "0.1.0" });
	assert!(!sdk.validate_app_data_document(&missing_metadata).unwrap().result);

	let bad_referrer = json!({
		"version": "0.1.0",
		"metadata": { "referrer": { "version": "0.1.0" } }
	});
	let validation = sdk.validate_app_data_document(&bad_referrer).unwrap();
	assert!(!validation.result);
	let errors = validation.errors.unwrap();
	assert!(errors.iter().any(|e| e.instance_path.contains("referrer")));

	// Repeated validation gives the same answer
	assert_eq!(
		sdk.validate_app_data_document(&bad_referrer).unwrap(),
		sdk.validate_app_data_document(&bad_referrer).unwrap()
	);
}
