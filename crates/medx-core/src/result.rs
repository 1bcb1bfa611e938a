//! # Validation Diagnostics
//!
//! The uniform result value returned by every pipeline entry point in
//! `medx-schema`. A result is constructed fresh per call, is immutable
//! afterwards, and is never cached or merged across calls.
//!
//! Serialized field names (`instancePath`, `isValid`, ...) are part of
//! the machine-readable CLI output contract.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single validation violation with a machine-actionable location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaError {
    /// JSON Pointer to the offending location within the document.
    /// Empty for violations at the document root.
    pub instance_path: String,
    /// The violated-rule identifier: a structural constraint class
    /// (`required`, `additionalProperties`, `pattern`, `enum`, ...) or a
    /// business-rule name (`uniqueToolNames`, `uniqueIssuers`, ...).
    pub keyword: String,
    /// Human-readable description of the violation.
    pub message: String,
    /// Structured detail, e.g. the offending duplicate value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {} [{}]", self.message, self.keyword)
        } else {
            write!(f, "{}: {} [{}]", self.instance_path, self.message, self.keyword)
        }
    }
}

/// Aggregate outcome of validating one manifest.
///
/// Invariant: `is_valid` holds exactly when `errors` is empty. Use the
/// constructors to preserve it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Whether the manifest satisfied every structural constraint and
    /// every business rule.
    pub is_valid: bool,
    /// All detected violations, structural errors first, in a
    /// deterministic order.
    pub errors: Vec<SchemaError>,
}

impl ValidationResult {
    /// A result with no violations.
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Build a result from an already-ordered error list.
    pub fn from_errors(errors: Vec<SchemaError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid {
            return write!(f, "valid");
        }
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {err}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_result_is_valid_and_empty() {
        let result = ValidationResult::ok();
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn from_errors_flips_validity() {
        let result = ValidationResult::from_errors(vec![SchemaError {
            instance_path: "/name".to_string(),
            keyword: "pattern".to_string(),
            message: "must match pattern \"^[a-z]+$\"".to_string(),
            params: None,
        }]);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn serializes_with_camel_case_wire_names() {
        let result = ValidationResult::from_errors(vec![SchemaError {
            instance_path: "/tools/1/name".to_string(),
            keyword: "uniqueToolNames".to_string(),
            message: "duplicate tool name \"note-tool\"".to_string(),
            params: Some(json!({ "duplicate": "note-tool" })),
        }]);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["isValid"], json!(false));
        assert_eq!(value["errors"][0]["instancePath"], json!("/tools/1/name"));
        assert_eq!(value["errors"][0]["keyword"], json!("uniqueToolNames"));
        assert_eq!(value["errors"][0]["params"]["duplicate"], json!("note-tool"));
    }

    #[test]
    fn params_are_omitted_from_wire_when_absent() {
        let error = SchemaError {
            instance_path: String::new(),
            keyword: "additionalProperties".to_string(),
            message: "must NOT have additional properties".to_string(),
            params: None,
        };
        let value = serde_json::to_value(&error).unwrap();
        assert!(value.get("params").is_none());
    }

    #[test]
    fn display_marks_root_level_errors() {
        let error = SchemaError {
            instance_path: String::new(),
            keyword: "required".to_string(),
            message: "must have required property \"version\"".to_string(),
            params: None,
        };
        assert!(error.to_string().starts_with("(root):"));
    }
}
