//! # medx-cli — CLI for the medx Toolchain
//!
//! Provides the `medx` command-line interface.
//!
//! ## Subcommands
//!
//! - `medx validate <file> --kind <extension|connector|publisher>` —
//!   validate a manifest file; prints diagnostics and exits non-zero
//!   when the manifest is invalid.
//! - `medx init [dir]` — scaffold a new extension project with template
//!   manifests and a placeholder logo.
//! - `medx package [dir]` — validate a project's manifests and stage a
//!   distributable package layout; blocked while any manifest is
//!   invalid.
//!
//! The validation engine itself lives in `medx-schema` and consumes
//! in-memory documents only; all file reading and JSON parsing happens
//! here.

pub mod init;
pub mod package;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Read and parse a JSON manifest file.
///
/// Parse failures are CLI-level errors: the engine only ever sees
/// successfully parsed documents.
pub fn load_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read manifest: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("manifest is not valid JSON: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_document_parses_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.json");
        std::fs::write(&path, br#"{ "name": "test-extension" }"#).unwrap();

        let doc = load_document(&path).unwrap();
        assert_eq!(doc["name"], "test-extension");
    }

    #[test]
    fn load_document_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("cannot read manifest"));
    }

    #[test]
    fn load_document_reports_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, b"{ not json").unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }
}
