//! # Structural Validation
//!
//! Evaluates a parsed document against the compiled schema for its
//! manifest kind and reports every violation in one pass — there is no
//! fail-fast mode. Each violated constraint yields exactly one
//! [`SchemaError`] whose `keyword` names the constraint class.
//!
//! A value of the wrong JSON type is reported once at the shallowest
//! point of mismatch; the evaluator does not descend into a subtree
//! whose container type is already wrong.

use jsonschema::error::ValidationErrorKind;
use jsonschema::ValidationError;
use serde_json::{json, Value};

use medx_core::{ManifestKind, SchemaError};

use crate::registry;

/// Validate `doc` against the bundled schema for `kind`.
///
/// Returns the complete, deterministically ordered list of structural
/// violations; empty when the document conforms.
pub fn validate(kind: ManifestKind, doc: &Value) -> Vec<SchemaError> {
    registry::schema_for(kind)
        .iter_errors(doc)
        .map(|err| to_schema_error(&err))
        .collect()
}

fn to_schema_error(err: &ValidationError<'_>) -> SchemaError {
    let (keyword, message, params) = describe(err);
    SchemaError {
        instance_path: err.instance_path.to_string(),
        keyword: keyword.to_string(),
        message,
        params,
    }
}

/// Map a `jsonschema` error onto the stable keyword/message contract.
///
/// Messages for the common constraint classes are rendered in-house so
/// the diagnostic text stays stable across `jsonschema` upgrades; rarer
/// classes fall back to the library's own rendering.
fn describe(err: &ValidationError<'_>) -> (&'static str, String, Option<Value>) {
    match &err.kind {
        ValidationErrorKind::Required { property } => {
            let name = property.as_str().map(str::to_string).unwrap_or_else(|| property.to_string());
            (
                "required",
                format!("must have required property '{name}'"),
                Some(json!({ "missingProperty": name })),
            )
        }
        ValidationErrorKind::AdditionalProperties { unexpected } => (
            "additionalProperties",
            "must NOT have additional properties".to_string(),
            Some(json!({ "additionalProperties": unexpected })),
        ),
        ValidationErrorKind::Pattern { pattern } => (
            "pattern",
            format!("must match pattern \"{pattern}\""),
            Some(json!({ "pattern": pattern })),
        ),
        ValidationErrorKind::Enum { options } => (
            "enum",
            "must be equal to one of the allowed values".to_string(),
            Some(json!({ "allowedValues": options })),
        ),
        ValidationErrorKind::Type { .. } => ("type", err.to_string(), None),
        ValidationErrorKind::MinLength { .. } => ("minLength", err.to_string(), None),
        ValidationErrorKind::MaxLength { .. } => ("maxLength", err.to_string(), None),
        ValidationErrorKind::MinItems { .. } => ("minItems", err.to_string(), None),
        ValidationErrorKind::MaxItems { .. } => ("maxItems", err.to_string(), None),
        ValidationErrorKind::UniqueItems { .. } => ("uniqueItems", err.to_string(), None),
        ValidationErrorKind::Format { .. } => ("format", err.to_string(), None),
        _ => ("schema", err.to_string(), None),
    }
}
