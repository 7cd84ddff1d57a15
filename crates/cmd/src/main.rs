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

//! `cow` console
//!
//! Runs one SDK operation per invocation and prints the result as JSON.
//! Network and app data hash come from `COW_*` settings; signing commands
//! use `COW_PRIVATE_KEY`.

mod command;
mod config;
mod logging;

use std::fs;

use anyhow::{Context, Result, bail};
use cow_sdk::{CowSdk, GetOrdersParams, GetTradesParams, WalletProvider};
use serde_json::{Value, json};
use tracing::info;

use crate::{
	command::{Command, USAGE},
	config::CmdConfig,
	logging::init_logging,
};

#[tokio::main]
async fn main() -> Result<()> {
	init_logging()?;

	let command = match Command::parse(std::env::args().skip(1)) {
		Ok(command) => command,
		Err(e) => {
			eprintln!("{}\n\n{}", e, USAGE);
			std::process::exit(2);
		}
	};

	let config = CmdConfig::from_env()?;
	info!(target: "cow", "Configuration: {:?}", config);
	if !config.has_signer() {
		info!(target: "cow", "No signer configured, signing commands are unavailable");
	}

	let sdk = CowSdk::from_config(config.sdk.clone(), config.signer()?);
	info!(
		target: "cow",
		"CoW SDK {} on chain {} ({:?})",
		CowSdk::VERSION,
		sdk.chain_id,
		sdk.cow_api.environment()
	);

	let output = run(&sdk, command).await?;
	println!("{}", serde_json::to_string_pretty(&output)?);

	Ok(())
}

async fn run(sdk: &CowSdk, command: Command) -> Result<Value> {
	let api = &sdk.cow_api;

	let output = match command {
		Command::Orders {
			owner,
			limit,
			offset,
		} => {
			let orders = api
				.get_orders(GetOrdersParams {
					owner,
					limit,
					offset,
				})
				.await
				.context("Failed to fetch orders")?;
			serde_json::to_value(orders)?
		}
		Command::Order { uid } => {
			let order = api.get_order(&uid).await.context("Failed to fetch order")?;
			serde_json::to_value(order)?
		}
		Command::OrderLink { uid } => json!(api.get_order_link(&uid)?),
		Command::Trades { owner } => {
			let trades = api
				.get_trades(GetTradesParams {
					owner,
					..Default::default()
				})
				.await
				.context("Failed to fetch trades")?;
			serde_json::to_value(trades)?
		}
		Command::Profile { address } => {
			let profile = api
				.get_profile_data(address)
				.await
				.context("Failed to fetch profile data")?;
			serde_json::to_value(profile)?
		}
		Command::Strategy => serde_json::to_value(api.get_price_strategy().await?)?,
		Command::Gas => serde_json::to_value(api.get_gas_prices().await?)?,
		Command::ValidateAppData { path } => {
			let content = fs::read_to_string(&path)
				.with_context(|| format!("Failed to read {}", path.display()))?;
			let document: Value = serde_json::from_str(&content)
				.with_context(|| format!("{} is not valid JSON", path.display()))?;
			serde_json::to_value(sdk.validate_app_data_document(&document)?)?
		}
		Command::SignCancellation { uid } => {
			let signed = sdk.sign_order_cancellation(&uid).await?;
			json!({
				"orderUid": uid,
				"signature": signed.signature,
				"signingScheme": signed.signing_scheme,
			})
		}
		Command::Address => {
			let Ok(provider) = sdk.context.provider() else {
				bail!("No signer configured, set COW_PRIVATE_KEY");
			};
			json!(provider.address())
		}
	};

	Ok(output)
}
