//! # medx-schema — Manifest Validation Engine
//!
//! Validates declarative manifests — extension, connector, publisher
//! configuration — before packaging or publication, catching structural
//! errors (missing/extra fields, malformed identifiers, wrong enum
//! values) and semantic errors (duplicate identifiers, disallowed
//! locale/region combinations) with machine-actionable locations.
//!
//! ## Architecture
//!
//! - [`registry`] — one compiled JSON Schema (Draft 2020-12) per
//!   [`ManifestKind`], bundled with the crate and built once.
//! - [`structural`] — complete single-pass schema evaluation.
//! - [`rules`] — kind-specific semantic checks the schema cannot
//!   express, run best-effort over partially invalid documents.
//! - [`pipeline`] — the public entry points; aggregates both passes
//!   into one [`ValidationResult`], structural errors first.
//!
//! ## Concurrency
//!
//! Evaluation is synchronous and side-effect free. The only shared
//! state is the compiled-schema cache, which is write-once and safe for
//! unsynchronized concurrent reads, so batch callers may validate many
//! documents in parallel without locking.

pub mod pipeline;
pub mod registry;
pub mod rules;
pub mod structural;

pub use medx_core::{ManifestKind, SchemaError, ValidationResult};
pub use pipeline::{
    validate_connector_manifest, validate_extension_manifest, validate_manifest,
    validate_publisher_config,
};
