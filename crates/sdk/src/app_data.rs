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

//! App data document validation
//!
//! The schema is compiled on first use and kept for the lifetime of the
//! process. Concurrent first calls wait for a single compilation.

use std::sync::OnceLock;

use jsonschema::{Draft, JSONSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::CowError;

const APP_DATA_SCHEMA: &str = include_str!("../schemas/app_data.schema.json");

static VALIDATOR: OnceLock<Result<JSONSchema, String>> = OnceLock::new();

/// Single schema violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrorRecord {
	/// JSON pointer into the validated document
	pub instance_path: String,
	/// JSON pointer into the schema
	pub schema_path: String,
	pub message: String,
}

/// Outcome of [`validate_app_data_document`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
	pub result: bool,
	/// Present only when `result` is false
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub errors: Option<Vec<ValidationErrorRecord>>,
}

fn compile() -> Result<JSONSchema, String> {
	debug!("Compiling app data schema");
	let schema: Value = serde_json::from_str(APP_DATA_SCHEMA).map_err(|e| e.to_string())?;
	JSONSchema::options()
		.with_draft(Draft::Draft7)
		.compile(&schema)
		.map_err(|e| e.to_string())
}

fn validator() -> Result<&'static JSONSchema, CowError> {
	VALIDATOR
		.get_or_init(compile)
		.as_ref()
		.map_err(|e| CowError::AppDataSchema(e.clone()))
}

/// Validate an app data document against the app data schema
pub fn validate_app_data_document(document: &Value) -> Result<ValidationResult, CowError> {
	let validator = validator()?;

	let result = match validator.validate(document) {
		Ok(()) => ValidationResult {
			result: true,
			errors: None,
		},
		Err(errors) => ValidationResult {
			result: false,
			errors: Some(
				errors
					.map(|e| ValidationErrorRecord {
						instance_path: e.instance_path.to_string(),
						schema_path: e.schema_path.to_string(),
						message: e.to_string(),
					})
					.collect(),
			),
		},
	};

	Ok(result)
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_schema_compiles() {
		assert!(validator().is_ok());
	}

	#[test]
	fn test_minimal_document() {
		let validation =
			validate_app_data_document(&json!({ "version": "0.1.0", "metadata": {} })).unwrap();
		assert_eq!(
			validation,
			ValidationResult {
				result: true,
				errors: None
			}
		);
	}

	#[test]
	fn test_result_serializes_without_errors_when_valid() {
		let validation =
			validate_app_data_document(&json!({ "version": "0.1.0", "metadata": {} })).unwrap();
		assert_eq!(serde_json::to_value(&validation).unwrap(), json!({ "result": true }));
	}

	#[test]
	fn test_wrong_types() {
		let validation =
			validate_app_data_document(&json!({ "version": 1, "metadata": [] })).unwrap();
		assert!(!validation.result);
		let errors = validation.errors.unwrap();
		assert!(errors.len() >= 2);
		assert!(errors.iter().any(|e| e.instance_path == "/version"));
		assert!(errors.iter().any(|e| e.instance_path == "/metadata"));
	}

	#[test]
	fn test_non_object_document() {
		let validation = validate_app_data_document(&json!("0.1.0")).unwrap();
		assert!(!validation.result);
		assert!(validation.errors.is_some());
	}
}
