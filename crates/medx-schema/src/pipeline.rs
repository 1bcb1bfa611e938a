//! # Validation Pipeline
//!
//! The only entry points callers use. Each pipeline run executes the
//! structural pass and the business-rule pass against the same input —
//! the rule pass is never skipped because the structural pass failed —
//! and concatenates the two error lists, structural first, into one
//! [`ValidationResult`].
//!
//! Calls are synchronous, side-effect free, and never panic on
//! malformed input: a malformed document produces structural errors,
//! not an `Err` or a panic. A document can therefore report a missing
//! field and a duplicate identifier in the same result.

use serde_json::Value;

use medx_core::{ManifestKind, ValidationResult};

use crate::{rules, structural};

/// Validate a document as the given manifest kind.
pub fn validate_manifest(kind: ManifestKind, doc: &Value) -> ValidationResult {
    let mut errors = structural::validate(kind, doc);
    errors.extend(rules::for_kind(kind, doc));
    ValidationResult::from_errors(errors)
}

/// Validate an extension manifest (`manifest.json`).
pub fn validate_extension_manifest(doc: &Value) -> ValidationResult {
    validate_manifest(ManifestKind::Extension, doc)
}

/// Validate a connector integration manifest.
pub fn validate_connector_manifest(doc: &Value) -> ValidationResult {
    validate_manifest(ManifestKind::Connector, doc)
}

/// Validate a publisher marketplace configuration (`publisher.json`).
pub fn validate_publisher_config(doc: &Value) -> ValidationResult {
    validate_manifest(ManifestKind::PublisherConfig, doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn structural_errors_precede_business_rule_errors() {
        // Missing partner-id (structural) and a duplicate issuer
        // (business rule) must surface in the same result, in order.
        let doc = json!({
            "name": "sample-partner",
            "description": "Connector fixture",
            "version": "0.9.9",
            "clinical-application-name": "Test EHR System",
            "server-authentication": [
                {
                    "issuer": "https://login.example.com/oauth2/default",
                    "identity-claim": "azp",
                    "identity-value": ["a"]
                },
                {
                    "issuer": "https://login.example.com/oauth2/default",
                    "identity-claim": "sub",
                    "identity-value": ["b"]
                }
            ],
            "note-sections": {},
            "instance": {}
        });
        let result = validate_connector_manifest(&doc);
        assert!(!result.is_valid);
        let keywords: Vec<&str> = result.errors.iter().map(|e| e.keyword.as_str()).collect();
        let required_pos = keywords.iter().position(|k| *k == "required").unwrap();
        let rule_pos = keywords.iter().position(|k| *k == "uniqueIssuers").unwrap();
        assert!(required_pos < rule_pos);
    }

    #[test]
    fn validation_is_idempotent() {
        let doc = json!({ "name": "test-extension", "tools": [{ "name": "a" }, { "name": "a" }] });
        let first = validate_extension_manifest(&doc);
        let second = validate_extension_manifest(&doc);
        assert_eq!(first, second);
    }

    #[test]
    fn is_valid_holds_exactly_when_no_errors() {
        let doc = json!({});
        let result = validate_publisher_config(&doc);
        assert_eq!(result.is_valid, result.errors.is_empty());
        assert!(!result.is_valid);
    }

    #[test]
    fn non_object_input_is_reported_not_panicked() {
        for doc in [json!(null), json!(42), json!("manifest"), json!([1, 2])] {
            let result = validate_extension_manifest(&doc);
            assert!(!result.is_valid);
            assert!(!result.errors.is_empty());
        }
    }
}
