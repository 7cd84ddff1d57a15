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

//! Command line parsing for the `cow` console

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use cow_sdk::Address;

pub const USAGE: &str = "\
Usage: cow <command> [args]

Commands:
  orders <owner> [limit] [offset]   List orders of an account
  order <uid>                       Show one order
  order-link <uid>                  Print the API link of an order
  trades [owner]                    List trades, optionally for one account
  profile <address>                 Affiliate statistics (mainnet only)
  strategy                          Price strategy of the network
  gas                               Gas prices of the network
  validate-app-data <file>          Validate an app data JSON document
  sign-cancellation <uid>           Sign an order cancellation (needs COW_PRIVATE_KEY)
  address                           Print the signer address (needs COW_PRIVATE_KEY)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	Orders {
		owner: Address,
		limit: Option<u32>,
		offset: Option<u32>,
	},
	Order {
		uid: String,
	},
	OrderLink {
		uid: String,
	},
	Trades {
		owner: Option<Address>,
	},
	Profile {
		address: Address,
	},
	Strategy,
	Gas,
	ValidateAppData {
		path: PathBuf,
	},
	SignCancellation {
		uid: String,
	},
	Address,
}

fn parse_address(value: &str) -> Result<Address> {
	value
		.parse()
		.with_context(|| format!("Invalid address: {}", value))
}

fn parse_number(name: &str, value: Option<String>) -> Result<Option<u32>> {
	value
		.map(|v| {
			v.parse()
				.with_context(|| format!("Invalid {}: {}", name, v))
		})
		.transpose()
}

impl Command {
	/// Parse arguments without the program name
	pub fn parse<I>(args: I) -> Result<Self>
	where
		I: IntoIterator<Item = String>,
	{
		let mut args = args.into_iter();
		let name = args.next().ok_or_else(|| anyhow!("Missing command"))?;
		let mut required = |what: &str| {
			args.next()
				.ok_or_else(|| anyhow!("'{}' requires <{}>", name, what))
		};

		let command = match name.as_str() {
			"orders" => {
				let owner = parse_address(&required("owner")?)?;
				let limit = parse_number("limit", args.next())?;
				let offset = parse_number("offset", args.next())?;
				Command::Orders {
					owner,
					limit,
					offset,
				}
			}
			"order" => Command::Order {
				uid: required("uid")?,
			},
			"order-link" => Command::OrderLink {
				uid: required("uid")?,
			},
			"trades" => Command::Trades {
				owner: args.next().as_deref().map(parse_address).transpose()?,
			},
			"profile" => Command::Profile {
				address: parse_address(&required("address")?)?,
			},
			"strategy" => Command::Strategy,
			"gas" => Command::Gas,
			"validate-app-data" => Command::ValidateAppData {
				path: PathBuf::from(required("file")?),
			},
			"sign-cancellation" => Command::SignCancellation {
				uid: required("uid")?,
			},
			"address" => Command::Address,
			other => bail!("Unknown command: {}", other),
		};

		Ok(command)
	}
}
