//! # Business Rules
//!
//! Kind-specific semantic checks that a structural schema cannot
//! express: uniqueness across sibling entries and the marketplace
//! region/locale allow-list.
//!
//! Rules run regardless of the structural outcome, best-effort: each
//! rule verifies the shape of the fields it reads before asserting the
//! semantic property, and contributes no finding when its preconditions
//! are unmet — the structural pass has already reported that field.

use std::collections::HashSet;

use serde_json::{json, Value};

use medx_core::{ManifestKind, SchemaError};

/// Region currently accepted by marketplace policy.
const ALLOWED_REGION: &str = "US";
/// Locale currently accepted by marketplace policy.
const ALLOWED_LOCALE: &str = "en-US";

/// Run the business-rule set for `kind` against `doc`.
pub fn for_kind(kind: ManifestKind, doc: &Value) -> Vec<SchemaError> {
    match kind {
        ManifestKind::Extension => unique_tool_names(doc),
        ManifestKind::Connector => unique_issuers(doc),
        ManifestKind::PublisherConfig => region_locale_allow_list(doc),
    }
}

/// Tool names must be unique within one extension manifest
/// (case-sensitive exact match). One error per duplicate entry, located
/// at the duplicate's index.
fn unique_tool_names(doc: &Value) -> Vec<SchemaError> {
    let mut errors = Vec::new();
    let Some(tools) = doc.get("tools").and_then(Value::as_array) else {
        return errors;
    };

    let mut seen: HashSet<&str> = HashSet::new();
    for (idx, tool) in tools.iter().enumerate() {
        let Some(name) = tool.get("name").and_then(Value::as_str) else {
            continue;
        };
        if !seen.insert(name) {
            errors.push(SchemaError {
                instance_path: format!("/tools/{idx}/name"),
                keyword: "uniqueToolNames".to_string(),
                message: format!("duplicate tool name \"{name}\""),
                params: Some(json!({ "duplicate": name })),
            });
        }
    }
    errors
}

/// Issuer URLs must be unique across `server-authentication` entries
/// (exact string compare).
fn unique_issuers(doc: &Value) -> Vec<SchemaError> {
    let mut errors = Vec::new();
    let Some(bindings) = doc.get("server-authentication").and_then(Value::as_array) else {
        return errors;
    };

    let mut seen: HashSet<&str> = HashSet::new();
    for (idx, binding) in bindings.iter().enumerate() {
        let Some(issuer) = binding.get("issuer").and_then(Value::as_str) else {
            continue;
        };
        if !seen.insert(issuer) {
            errors.push(SchemaError {
                instance_path: format!("/server-authentication/{idx}/issuer"),
                keyword: "uniqueIssuers".to_string(),
                message: format!("duplicate server-authentication issuer \"{issuer}\""),
                params: Some(json!({ "duplicate": issuer })),
            });
        }
    }
    errors
}

/// Marketplace allow-list: every region must be `US`, and
/// `defaultLocale` plus every `supportedLocales` entry must be `en-US`.
/// Deliberately narrow policy, not a generic locale validator.
fn region_locale_allow_list(doc: &Value) -> Vec<SchemaError> {
    let mut errors = Vec::new();

    if let Some(regions) = doc.get("regions").and_then(Value::as_array) {
        for (idx, region) in regions.iter().enumerate() {
            let Some(region) = region.as_str() else { continue };
            if region != ALLOWED_REGION {
                errors.push(SchemaError {
                    instance_path: format!("/regions/{idx}"),
                    keyword: "allowedRegions".to_string(),
                    message: format!(
                        "region \"{region}\" is not available; only \"{ALLOWED_REGION}\" is currently supported"
                    ),
                    params: Some(json!({ "region": region })),
                });
            }
        }
    }

    if let Some(locale) = doc.get("defaultLocale").and_then(Value::as_str) {
        if locale != ALLOWED_LOCALE {
            errors.push(SchemaError {
                instance_path: "/defaultLocale".to_string(),
                keyword: "allowedLocales".to_string(),
                message: format!(
                    "locale \"{locale}\" is not available; only \"{ALLOWED_LOCALE}\" is currently supported"
                ),
                params: Some(json!({ "locale": locale })),
            });
        }
    }

    if let Some(locales) = doc.get("supportedLocales").and_then(Value::as_array) {
        for (idx, locale) in locales.iter().enumerate() {
            let Some(locale) = locale.as_str() else { continue };
            if locale != ALLOWED_LOCALE {
                errors.push(SchemaError {
                    instance_path: format!("/supportedLocales/{idx}"),
                    keyword: "allowedLocales".to_string(),
                    message: format!(
                        "locale \"{locale}\" is not available; only \"{ALLOWED_LOCALE}\" is currently supported"
                    ),
                    params: Some(json!({ "locale": locale })),
                });
            }
        }
    }

    errors
}
