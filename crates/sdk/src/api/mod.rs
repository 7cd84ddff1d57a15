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

//! HTTP client for the operator API
//!
//! One method per REST endpoint. Base URLs are resolved from the chain
//! registry on every call, so an unsupported network only surfaces when a
//! request is attempted. Nothing is retried or cached.

pub mod errors;

use alloy_primitives::Address;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};

use crate::chains::SupportedChainId;
use crate::context::Context;
use crate::endpoints::{self, Environment};
use crate::error::CowError;
use crate::price::{
	FeeQuoteParams, PriceInformation, PriceQuoteParams, QuoteQuery, SimpleGetQuoteResponse,
};
use crate::tokens::to_erc20_address;
use crate::types::{
	GasFeeEndpointResponse, GetOrdersParams, GetTradesParams, OrderCancellationParams,
	OrderCreation, OrderId, OrderMetaData, PriceStrategy, ProfileData, TradeMetaData,
};
use errors::{
	ApiErrorCode, ApiErrorObject, OperatorError, OrderAction, QuoteError,
	error_message_from_status, map_operator_error_to_quote_error,
};

const API_NAME: &str = "CoW Protocol";
const PROFILE_API_NAME: &str = "CoW Protocol profile";
const STRATEGY_API_NAME: &str = "CoW Protocol strategy";
const GAS_API_NAME: &str = "Gas station";

const APP_ID_HEADER: &str = "X-AppId";

/// Default page size for order listings
pub const DEFAULT_ORDERS_LIMIT: u32 = 1000;

/// Replacement base URLs, one per API family
///
/// The registry must still know the network for the family; only the host
/// part changes. Used to target private deployments and mock servers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseUrlOverrides {
	/// Replaces `https://api.cow.fi/<network>/api` (the `/v1` suffix is kept)
	pub api: Option<String>,
	/// Replaces `https://api.cow.fi/affiliate/api` (the `/v1` suffix is kept)
	pub profile: Option<String>,
	/// Replaces the full strategy document URL
	pub strategy: Option<String>,
	/// Replaces the full gas station URL
	pub gas: Option<String>,
}

/// Client for the operator API of one network
#[derive(Debug, Clone)]
pub struct CowApi {
	chain_id: u64,
	app_data_hash: String,
	environment: Environment,
	overrides: BaseUrlOverrides,
	client: ReqwestClient,
}

impl CowApi {
	/// Create a client; the network is not validated until a request is made
	pub fn new(chain_id: u64, app_data_hash: impl Into<String>, environment: Environment) -> Self {
		Self {
			chain_id,
			app_data_hash: app_data_hash.into(),
			environment,
			overrides: BaseUrlOverrides::default(),
			client: ReqwestClient::new(),
		}
	}

	pub fn from_context(chain_id: u64, context: &Context) -> Self {
		Self::new(chain_id, context.app_data_hash(), context.environment())
	}

	pub fn with_base_urls(mut self, overrides: BaseUrlOverrides) -> Self {
		self.overrides = overrides;
		self
	}

	pub fn chain_id(&self) -> u64 {
		self.chain_id
	}

	pub fn app_data_hash(&self) -> &str {
		&self.app_data_hash
	}

	pub fn environment(&self) -> Environment {
		self.environment
	}

	fn unsupported(&self, api: &'static str) -> CowError {
		error!(chain_id = self.chain_id, "{} API is not deployed on this network", api);
		CowError::UnsupportedNetwork {
			api,
			chain_id: self.chain_id,
		}
	}

	fn api_base_url(&self) -> Result<String, CowError> {
		let base = endpoints::api_base_url(self.chain_id, self.environment)
			.ok_or_else(|| self.unsupported(API_NAME))?;
		let base = self.overrides.api.clone().unwrap_or(base);
		Ok(format!("{}/v1", base.trim_end_matches('/')))
	}

	fn profile_base_url(&self) -> Result<String, CowError> {
		let base = endpoints::profile_base_url(self.chain_id, self.environment)
			.ok_or_else(|| self.unsupported(PROFILE_API_NAME))?;
		let base = self.overrides.profile.clone().unwrap_or(base);
		Ok(format!("{}/v1", base.trim_end_matches('/')))
	}

	fn price_strategy_url(&self) -> Result<String, CowError> {
		let url = endpoints::price_strategy_url(self.chain_id)
			.ok_or_else(|| self.unsupported(STRATEGY_API_NAME))?;
		Ok(self.overrides.strategy.clone().unwrap_or(url))
	}

	fn gas_fee_url(&self) -> Result<String, CowError> {
		let url = endpoints::gas_fee_endpoint(self.chain_id)
			.ok_or_else(|| self.unsupported(GAS_API_NAME))?;
		Ok(self
			.overrides
			.gas
			.clone()
			.unwrap_or_else(|| url.to_string()))
	}

	fn with_default_headers(&self, request: RequestBuilder) -> RequestBuilder {
		request
			.header(CONTENT_TYPE, "application/json")
			.header(APP_ID_HEADER, &self.app_data_hash)
	}

	fn api_request(&self, method: Method, path: &str) -> Result<RequestBuilder, CowError> {
		let url = format!("{}{}", self.api_base_url()?, path);
		Ok(self.with_default_headers(self.client.request(method, url)))
	}

	fn profile_request(&self, path: &str) -> Result<RequestBuilder, CowError> {
		let url = format!("{}{}", self.profile_base_url()?, path);
		Ok(self.with_default_headers(self.client.get(url)))
	}

	async fn send(&self, request: RequestBuilder, what: &str) -> Result<Response, CowError> {
		request.send().await.map_err(|e| {
			error!("Error {}: {}", what, e);
			CowError::Network(format!("Error {}: {}", what, e))
		})
	}

	/// Link to the API resource of an order
	pub fn get_order_link(&self, order_id: &str) -> Result<String, CowError> {
		Ok(format!("{}/orders/{}", self.api_base_url()?, order_id))
	}

	/// Orders created by `owner`, newest first
	pub async fn get_orders(&self, params: GetOrdersParams) -> Result<Vec<OrderMetaData>, CowError> {
		let limit = params.limit.unwrap_or(DEFAULT_ORDERS_LIMIT);
		let offset = params.offset.unwrap_or(0);
		debug!(
			"[api:{}] Get orders for chain {} owner {} limit {} offset {}",
			API_NAME, self.chain_id, params.owner, limit, offset
		);

		let request = self
			.api_request(Method::GET, &format!("/account/{}/orders", params.owner))?
			.query(&[("limit", limit), ("offset", offset)]);
		let response = self.send(request, "getting orders information").await?;

		operator_response(response, ApiErrorCode::UnhandledGetError).await
	}

	/// Single order by uid
	pub async fn get_order(&self, order_id: &str) -> Result<OrderMetaData, CowError> {
		debug!("[api:{}] Get order for chain {} uid {}", API_NAME, self.chain_id, order_id);

		let request = self.api_request(Method::GET, &format!("/orders/{}", order_id))?;
		let response = self.send(request, "getting order information").await?;

		operator_response(response, ApiErrorCode::UnhandledGetError).await
	}

	/// Trades, optionally filtered by owner
	pub async fn get_trades(&self, params: GetTradesParams) -> Result<Vec<TradeMetaData>, CowError> {
		debug!(
			"[api:{}] Get trades for chain {} owner {:?} limit {:?} offset {:?}",
			API_NAME, self.chain_id, params.owner, params.limit, params.offset
		);

		let request = self.api_request(Method::GET, "/trades")?.query(&params.query_pairs());
		let response = self.send(request, "getting trades").await?;

		operator_response(response, ApiErrorCode::UnhandledGetError).await
	}

	/// Legacy market price for a token pair
	pub async fn get_price_quote_legacy(
		&self,
		params: &PriceQuoteParams,
	) -> Result<Option<PriceInformation>, CowError> {
		debug!("[api:{}] Get price from API {:?}", API_NAME, params);

		let path = format!(
			"/markets/{}-{}/{}/{}",
			to_erc20_address(params.base_token, self.chain_id),
			to_erc20_address(params.quote_token, self.chain_id),
			params.kind.as_str(),
			params.amount
		);
		let request = self.api_request(Method::GET, &path)?;
		let response = request.send().await.map_err(|e| {
			error!("Error getting price quote: {}", e);
			CowError::Quote(QuoteError::unhandled())
		})?;

		quote_response(response, None).await
	}

	/// Fee and amount quote for a prospective order
	pub async fn get_quote(&self, params: &FeeQuoteParams) -> Result<SimpleGetQuoteResponse, CowError> {
		let query = QuoteQuery::from_fee_params(params, &self.app_data_hash);
		debug!("[api:{}] Get quote {:?}", API_NAME, query);

		let request = self.api_request(Method::POST, "/quote")?.json(&query);
		let response = self.send(request, "getting quote").await?;

		quote_response(response, Some((query.sell_token, query.buy_token))).await
	}

	/// Submit a signed order, returns its uid
	pub async fn send_order(&self, order: &OrderCreation, owner: Address) -> Result<OrderId, CowError> {
		debug!(
			"[api:{}] Post signed order for chain {}: {:?}",
			API_NAME, self.chain_id, order
		);

		#[derive(Serialize)]
		#[serde(rename_all = "camelCase")]
		struct Body<'a> {
			#[serde(flatten)]
			order: &'a OrderCreation,
			from: Address,
		}

		let request = self
			.api_request(Method::POST, "/orders")?
			.json(&Body { order, from: owner });
		let response = self.send(request, "posting the signed order").await?;

		if !response.status().is_success() {
			let status = response.status().as_u16();
			let body = response.text().await.unwrap_or_default();
			let message = error_message_from_status(status, &body, OrderAction::Create);
			error!(status, "Order submission rejected: {}", message);
			return Err(CowError::OrderRequest { status, message });
		}

		let uid: OrderId = parse_json(response).await?;
		debug!("[api:{}] Success posting the signed order {}", API_NAME, uid);
		Ok(uid)
	}

	/// Submit a signed cancellation
	pub async fn send_signed_order_cancellation(
		&self,
		params: &OrderCancellationParams,
	) -> Result<(), CowError> {
		let cancellation = &params.cancellation;
		debug!(
			"[api:{}] Delete signed order for chain {}: {:?}",
			API_NAME, self.chain_id, cancellation
		);

		#[derive(Serialize)]
		#[serde(rename_all = "camelCase")]
		struct Body<'a> {
			signature: &'a str,
			signing_scheme: &'static str,
			from: Address,
		}

		let request = self
			.api_request(Method::DELETE, &format!("/orders/{}", cancellation.order_uid))?
			.json(&Body {
				signature: &cancellation.signature,
				signing_scheme: cancellation.signing_scheme.api_value(),
				from: params.owner,
			});
		let response = self.send(request, "cancelling the order").await?;

		if !response.status().is_success() {
			let status = response.status().as_u16();
			let body = response.text().await.unwrap_or_default();
			let message = error_message_from_status(status, &body, OrderAction::Delete);
			error!(status, "Order cancellation rejected: {}", message);
			return Err(CowError::OrderRequest { status, message });
		}

		debug!(
			"[api:{}] Cancelled order {} on chain {}",
			API_NAME, cancellation.order_uid, self.chain_id
		);
		Ok(())
	}

	/// Affiliate statistics; `None` on networks other than mainnet
	pub async fn get_profile_data(&self, address: Address) -> Result<Option<ProfileData>, CowError> {
		debug!("[api:{}] Get profile data for chain {} {}", API_NAME, self.chain_id, address);
		if self.chain_id != SupportedChainId::Mainnet.id() {
			info!("Profile data is only available for mainnet");
			return Ok(None);
		}

		let request = self.profile_request(&format!("/profile/{}", address))?;
		let response = self.send(request, "getting profile data").await?;

		sdk_response(response).await.map(Some)
	}

	/// Price strategy document of the network
	pub async fn get_price_strategy(&self) -> Result<PriceStrategy, CowError> {
		debug!("[api:{}] Get price strategy for chain {}", API_NAME, self.chain_id);

		let request = self.client.get(self.price_strategy_url()?);
		let response = self.send(request, "getting price strategy").await?;

		sdk_response(response).await
	}

	/// Gas prices from the network's gas station
	pub async fn get_gas_prices(&self) -> Result<GasFeeEndpointResponse, CowError> {
		debug!("[api:{}] Get gas prices for chain {}", GAS_API_NAME, self.chain_id);

		let request = self.client.get(self.gas_fee_url()?);
		let response = self.send(request, "getting gas prices").await?;

		sdk_response(response).await
	}
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, CowError> {
	response.json::<T>().await.map_err(|e| {
		error!("Failed to parse response: {}", e);
		CowError::Decode(format!("Failed to parse response: {}", e))
	})
}

/// Order read responses: failures become [`OperatorError`]
async fn operator_response<T: DeserializeOwned>(
	response: Response,
	fallback: ApiErrorCode,
) -> Result<T, CowError> {
	if response.status().is_success() {
		return parse_json(response).await;
	}

	let status = response.status();
	let body = response.text().await.unwrap_or_default();
	let operator_error = match serde_json::from_str::<ApiErrorObject>(&body) {
		Ok(obj) => OperatorError::from(obj),
		Err(_) => OperatorError::unhandled(fallback),
	};
	error!(%status, error_type = %operator_error.error_type, "Operator API error: {}", operator_error.description);

	Err(CowError::Operator(operator_error))
}

/// Quote and price responses: failures are re-mapped into [`QuoteError`]
async fn quote_response<T: DeserializeOwned>(
	response: Response,
	tokens: Option<(Address, Address)>,
) -> Result<T, CowError> {
	if response.status().is_success() {
		return parse_json(response).await;
	}

	let body = response.text().await.unwrap_or_default();
	let api_error = serde_json::from_str::<ApiErrorObject>(&body).ok();
	let quote_error = map_operator_error_to_quote_error(api_error.as_ref());

	match tokens {
		Some((sell_token, buy_token)) => error!(
			"Error querying fee from API - sellToken: {}, buyToken: {}",
			sell_token, buy_token
		),
		None => error!("Error querying price from API: {}", quote_error),
	}

	Err(CowError::Quote(quote_error))
}

/// Profile, strategy and gas responses: failures become a plain SDK error
async fn sdk_response<T: DeserializeOwned>(response: Response) -> Result<T, CowError> {
	if response.status().is_success() {
		return parse_json(response).await;
	}

	let status = response.status();
	let body = response.text().await.unwrap_or_default();
	error!(%status, "Request failed: {}", body);

	let description = serde_json::from_str::<serde_json::Value>(&body)
		.ok()
		.and_then(|v| v.get("description").and_then(|d| d.as_str()).map(str::to_string))
		.unwrap_or_else(|| format!("HTTP {}", status));

	Err(CowError::Sdk(description))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_client_creation() {
		let api = CowApi::new(1, "0x00", Environment::Production);
		assert_eq!(api.chain_id(), 1);
		assert_eq!(api.app_data_hash(), "0x00");
		assert_eq!(api.environment(), Environment::Production);
	}

	#[test]
	fn test_order_link() {
		let api = CowApi::new(100, "0x00", Environment::Staging);
		assert_eq!(
			api.get_order_link("0xabc").unwrap(),
			"https://barn.api.cow.fi/xdai/api/v1/orders/0xabc"
		);
	}

	#[test]
	fn test_unsupported_network_never_resolves_a_url() {
		let api = CowApi::new(5, "0x00", Environment::Production);
		assert!(matches!(
			api.get_order_link("0xabc"),
			Err(CowError::UnsupportedNetwork { chain_id: 5, .. })
		));
		assert!(api.price_strategy_url().is_err());
		assert!(api.gas_fee_url().is_err());
		assert!(api.profile_base_url().is_err());
	}

	#[test]
	fn test_override_keeps_version_suffix() {
		let api = CowApi::new(1, "0x00", Environment::Production).with_base_urls(
			BaseUrlOverrides {
				api: Some("http://127.0.0.1:8080/".to_string()),
				..Default::default()
			},
		);
		assert_eq!(api.api_base_url().unwrap(), "http://127.0.0.1:8080/v1");
	}

	#[test]
	fn test_override_does_not_enable_unknown_network() {
		let api = CowApi::new(42, "0x00", Environment::Production).with_base_urls(
			BaseUrlOverrides {
				api: Some("http://127.0.0.1:8080".to_string()),
				..Default::default()
			},
		);
		assert!(api.api_base_url().is_err());
	}
}
