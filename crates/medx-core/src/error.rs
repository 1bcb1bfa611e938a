//! # Error Types
//!
//! Errors raised for caller misuse. Data-quality problems in a manifest
//! are never errors at this level — they are reported as
//! [`SchemaError`](crate::SchemaError) entries in a
//! [`ValidationResult`](crate::ValidationResult).

use thiserror::Error;

/// A manifest-kind string did not name a supported kind.
///
/// This is a programming/invocation error, not a data-quality issue,
/// and is the only condition in the core API that fails hard.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown manifest kind '{kind}'; expected one of: extension, connector, publisher")]
pub struct UnknownKindError {
    /// The unrecognized kind string as supplied by the caller.
    pub kind: String,
}
