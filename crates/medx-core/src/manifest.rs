//! # Typed Manifest Model
//!
//! Serde structs mirroring the manifest wire format. Scaffolding uses
//! them to emit well-formed templates and tests use them to build
//! fixtures; the validation engine deliberately consumes raw
//! `serde_json::Value` so that malformed documents can still be
//! diagnosed instead of failing deserialization.
//!
//! Hyphenated and camelCase wire names (`partner-id`, `tenantId`, ...)
//! are pinned with explicit `#[serde(rename)]` attributes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Third-party extension manifest (`manifest.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionManifest {
    /// Slug identifier; lowercase alphanumerics and hyphens only.
    pub name: String,
    pub description: String,
    /// Semantic version string.
    pub version: String,
    pub auth: AuthBlock,
    /// Tools exposed by the extension. Names must be unique within one
    /// manifest (case-sensitive exact match).
    pub tools: Vec<Tool>,
}

/// Tenant binding for an extension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthBlock {
    /// GUID of the tenant the extension is registered under.
    #[serde(rename = "tenantId")]
    pub tenant_id: String,
}

/// A single tool entry within an extension manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub description: String,
    /// HTTPS endpoint invoked when the tool runs.
    pub endpoint: String,
    pub inputs: Vec<ContentDescriptor>,
    pub outputs: Vec<ContentDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<ToolTrigger>,
}

/// How a tool is started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolTrigger {
    /// Runs automatically when matching content is available.
    AutoRun,
    /// Runs when the user invokes an adaptive-card action.
    AdaptiveCardAction,
}

/// Describes one input or output of a tool.
///
/// `content-type` is the current spelling; `data` is a recognized legacy
/// spelling of the same concept, retained for compatibility. Both are
/// optional and either is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDescriptor {
    pub name: String,
    pub description: String,
    /// MIME-like content type, e.g. `application/vnd.example.note+json`.
    #[serde(rename = "content-type", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Legacy spelling of `content-type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// Clinical-system connector integration manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorManifest {
    pub name: String,
    pub description: String,
    pub version: String,
    /// GUID identifying the integration partner.
    #[serde(rename = "partner-id")]
    pub partner_id: String,
    #[serde(rename = "clinical-application-name")]
    pub clinical_application_name: String,
    /// Trusted token issuers. Issuer URLs must be unique across entries.
    #[serde(rename = "server-authentication")]
    pub server_authentication: Vec<IssuerBinding>,
    /// Mapping from note section key to accepted aliases.
    #[serde(rename = "note-sections")]
    pub note_sections: BTreeMap<String, Vec<String>>,
    /// Nested per-instance configuration. Schema-constrained at the top
    /// level but opaque to business rules, so it stays untyped here.
    pub instance: serde_json::Value,
}

/// One trusted issuer entry under `server-authentication`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuerBinding {
    /// Token issuer URL; unique across the manifest.
    pub issuer: String,
    #[serde(rename = "identity-claim")]
    pub identity_claim: String,
    #[serde(rename = "identity-value")]
    pub identity_values: Vec<String>,
}

/// Publisher marketplace identity (`publisher.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublisherConfig {
    pub publisher_id: String,
    pub publisher_name: String,
    pub website_url: String,
    pub privacy_policy_url: String,
    pub support_url: String,
    pub version: String,
    pub contact_email: String,
    pub offer_id: String,
    /// Currently restricted to `en-US` by marketplace policy.
    pub default_locale: String,
    pub scope: String,
    /// Currently restricted to `["en-US"]` by marketplace policy.
    pub supported_locales: Vec<String>,
    /// Currently restricted to `["US"]` by marketplace policy.
    pub regions: Vec<String>,
}
