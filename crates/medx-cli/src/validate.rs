//! # Validate Subcommand
//!
//! Loads a manifest file, runs the validation pipeline for the selected
//! kind, and renders the result. Exit code 0 means the manifest is
//! valid; 1 means violations were found (or the file could not be
//! loaded).

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};

use medx_core::ManifestKind;
use medx_schema::pipeline;

/// Arguments for `medx validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the manifest JSON file.
    pub manifest: PathBuf,

    /// Manifest kind to validate as.
    #[arg(long, value_enum)]
    pub kind: KindArg,

    /// Emit the validation result as JSON instead of human-readable text.
    #[arg(long)]
    pub json: bool,
}

/// Manifest kind as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Extension,
    Connector,
    Publisher,
}

impl From<KindArg> for ManifestKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Extension => ManifestKind::Extension,
            KindArg::Connector => ManifestKind::Connector,
            KindArg::Publisher => ManifestKind::PublisherConfig,
        }
    }
}

/// Execute `medx validate`.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let doc = crate::load_document(&args.manifest)?;
    let kind = ManifestKind::from(args.kind);
    let result = pipeline::validate_manifest(kind, &doc);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.is_valid {
        println!("{}: valid {kind} manifest", args.manifest.display());
    } else {
        println!(
            "{}: invalid {kind} manifest ({} violation(s))",
            args.manifest.display(),
            result.errors.len()
        );
        for error in &result.errors {
            println!("  {error}");
        }
    }

    Ok(if result.is_valid { 0 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write_manifest(dir: &tempfile::TempDir, value: &serde_json::Value) -> PathBuf {
        let path = dir.path().join("manifest.json");
        std::fs::write(&path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
        path
    }

    #[test]
    fn valid_publisher_config_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(
            &dir,
            &json!({
                "publisherId": "contoso.healthcare",
                "publisherName": "Contoso Healthcare Inc.",
                "websiteUrl": "https://www.contosohealth.com",
                "privacyPolicyUrl": "https://www.contosohealth.com/privacy",
                "supportUrl": "https://www.contosohealth.com/support",
                "version": "0.0.1",
                "contactEmail": "support@contosohealth.com",
                "offerId": "contoso-extension-suite",
                "defaultLocale": "en-US",
                "scope": "Workflow",
                "supportedLocales": ["en-US"],
                "regions": ["US"]
            }),
        );

        let args = ValidateArgs {
            manifest: path,
            kind: KindArg::Publisher,
            json: false,
        };
        assert_eq!(run_validate(&args).unwrap(), 0);
    }

    #[test]
    fn invalid_manifest_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_manifest(&dir, &json!({ "name": "test-extension" }));

        let args = ValidateArgs {
            manifest: path,
            kind: KindArg::Extension,
            json: true,
        };
        assert_eq!(run_validate(&args).unwrap(), 1);
    }

    #[test]
    fn unreadable_manifest_is_a_hard_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = ValidateArgs {
            manifest: dir.path().join("absent.json"),
            kind: KindArg::Extension,
            json: false,
        };
        assert!(run_validate(&args).is_err());
    }
}
