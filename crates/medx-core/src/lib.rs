//! # medx-core — Foundational Types for the medx Toolchain
//!
//! Shared vocabulary for manifest validation and packaging:
//!
//! - [`ManifestKind`] — the closed set of manifest kinds the toolchain
//!   understands (extension, connector, publisher configuration).
//! - [`SchemaError`] / [`ValidationResult`] — the uniform diagnostic
//!   values returned by the validation pipeline in `medx-schema`.
//! - [`manifest`] — the typed manifest data model mirroring the wire
//!   format, used by scaffolding and tests. The validation engine itself
//!   consumes `serde_json::Value`, never these structs.
//!
//! ## Crate Policy
//!
//! - No I/O. Reading and parsing manifest files is the CLI's job.
//! - Wire field names are part of the published manifest contract and
//!   must not change (`partner-id`, `content-type`, `tenantId`, ...).

pub mod error;
pub mod kind;
pub mod manifest;
pub mod result;

pub use error::UnknownKindError;
pub use kind::ManifestKind;
pub use result::{SchemaError, ValidationResult};
