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

//! Logging initialization for the `cow` console
//!
//! # Configuration
//!
//! - `RUST_LOG`: Log level filter (default: `info`)
//!   - Can be set per module: `RUST_LOG=cow_sdk=debug,cow=info`
//!
//! - `LOG_DIR`: Root directory for log files (default: `{workspace_root}/logs`)
//!   - Log files are created in `{LOG_DIR}/cow/`
//!
//! - `LOG_TO_CONSOLE`: Also write logs to stderr (default: `false`)
//!   - `true`, `1` or `yes` enable it
//!
//! # Log File Format
//!
//! - Rotation: one file per day (UTC), e.g. `cow.2026-01-03.log`
//! - Format: UTC RFC 3339 timestamp, thread ID, level, target, message
//! - No ANSI colors in files

use std::{
	env,
	path::{Path, PathBuf},
	sync::OnceLock,
};

use anyhow::{Context, Result};
use tracing::info;
use tracing_appender::{
	non_blocking,
	rolling::{self, Rotation},
};
use tracing_subscriber::{
	EnvFilter, fmt, layer::SubscriberExt, registry::Registry, util::SubscriberInitExt,
};

use crate::config::{DEFAULT_LOG_LEVEL, DEFAULT_LOG_TO_CONSOLE, LOG_COMPONENT_NAME};

// Flushes buffered lines on exit
static LOG_GUARD: OnceLock<non_blocking::WorkerGuard> = OnceLock::new();

/// Closest ancestor of the working directory holding a workspace manifest
fn find_workspace_root() -> PathBuf {
	let start = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

	start
		.ancestors()
		.find(|dir| {
			std::fs::read_to_string(dir.join("Cargo.toml"))
				.map(|content| content.contains("[workspace]"))
				.unwrap_or(false)
		})
		.map(Path::to_path_buf)
		.unwrap_or(start)
}

fn get_log_root() -> PathBuf {
	env::var("LOG_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|_| find_workspace_root().join("logs"))
}

fn parse_flag(value: &str) -> bool {
	matches!(value, "true" | "1" | "yes")
}

fn setup_file_logging(log_dir: &Path) -> Result<non_blocking::NonBlocking> {
	let file_appender = rolling::RollingFileAppender::builder()
		.rotation(Rotation::DAILY)
		.filename_prefix(LOG_COMPONENT_NAME)
		.filename_suffix("log")
		.build(log_dir)
		.with_context(|| {
			format!(
				"Failed to create rolling file appender in {}",
				log_dir.display()
			)
		})?;

	let (file_writer, guard) = non_blocking(file_appender);
	LOG_GUARD.set(guard).ok();

	Ok(file_writer)
}

/// Initialize file logging, plus stderr when `LOG_TO_CONSOLE` is set
pub fn init_logging() -> Result<()> {
	dotenv::dotenv().ok();

	let log_level = env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

	let log_dir = get_log_root().join(LOG_COMPONENT_NAME);
	std::fs::create_dir_all(&log_dir)
		.with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

	let file_writer = setup_file_logging(&log_dir)?;

	let log_to_console = env::var("LOG_TO_CONSOLE")
		.map(|v| parse_flag(&v))
		.unwrap_or(DEFAULT_LOG_TO_CONSOLE);

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

	let file_layer = fmt::layer()
		.with_writer(file_writer)
		.with_timer(fmt::time::UtcTime::rfc_3339())
		.with_thread_ids(true)
		.with_target(true)
		.with_ansi(false);

	let console_layer = log_to_console.then(|| {
		fmt::layer()
			.with_writer(std::io::stderr)
			.with_timer(fmt::time::UtcTime::rfc_3339())
			.with_thread_ids(true)
			.with_target(true)
			.with_ansi(true)
	});

	Registry::default()
		.with(filter)
		.with(file_layer)
		.with(console_layer)
		.try_init()
		.context("Failed to install tracing subscriber")?;

	info!(target: "cow", "Log level: {}", log_level);
	info!(target: "cow", "Log directory: {}", log_dir.display());
	if log_to_console {
		info!(target: "cow", "Console output: enabled");
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_console_flag_values() {
		assert!(parse_flag("true"));
		assert!(parse_flag("1"));
		assert!(parse_flag("yes"));
		assert!(!parse_flag("false"));
		assert!(!parse_flag("TRUE"));
		assert!(!parse_flag(""));
	}
}
