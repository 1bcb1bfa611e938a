//! # Package Subcommand
//!
//! Validates a project's manifests and stages them, together with the
//! assets directory, into a distributable layout under
//! `<output>/<name>-<version>/`. Staging is blocked while any manifest
//! is invalid; the diagnostics are printed and the command exits 1
//! without writing anything.
//!
//! Archival of the staged directory is owned by the marketplace upload
//! tooling, not by this command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use medx_core::{ManifestKind, ValidationResult};
use medx_schema::pipeline;

use crate::init::LOGO_FILENAME;

/// Arguments for `medx package`.
#[derive(Args, Debug)]
pub struct PackageArgs {
    /// Project directory containing manifest.json and publisher.json.
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Output directory for the staged package. Defaults to
    /// `<directory>/dist`.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Execute `medx package`.
pub fn run_package(args: &PackageArgs) -> Result<u8> {
    let dir = &args.directory;
    let manifest_path = dir.join("manifest.json");
    let publisher_path = dir.join("publisher.json");

    let manifest = crate::load_document(&manifest_path)?;
    let publisher = crate::load_document(&publisher_path)?;

    let manifest_result = pipeline::validate_manifest(ManifestKind::Extension, &manifest);
    let publisher_result = pipeline::validate_manifest(ManifestKind::PublisherConfig, &publisher);

    let mut blocked = false;
    for (path, result) in [
        (&manifest_path, &manifest_result),
        (&publisher_path, &publisher_result),
    ] {
        report(path, result);
        blocked |= !result.is_valid;
    }
    if blocked {
        println!();
        println!("Packaging blocked: fix the violations above and retry.");
        return Ok(1);
    }

    // Both documents passed structural validation, so name and version
    // are present strings.
    let name = manifest
        .get("name")
        .and_then(|v| v.as_str())
        .context("manifest.json is missing a name")?;
    let version = manifest
        .get("version")
        .and_then(|v| v.as_str())
        .context("manifest.json is missing a version")?;

    let output_root = args
        .output
        .clone()
        .unwrap_or_else(|| dir.join("dist"));
    let stage_dir = output_root.join(format!("{name}-{version}"));

    std::fs::create_dir_all(&stage_dir)
        .with_context(|| format!("creating package directory: {}", stage_dir.display()))?;

    std::fs::copy(&manifest_path, stage_dir.join("manifest.json"))
        .with_context(|| format!("staging manifest: {}", manifest_path.display()))?;
    std::fs::copy(&publisher_path, stage_dir.join("publisher.json"))
        .with_context(|| format!("staging publisher config: {}", publisher_path.display()))?;

    let assets_dir = dir.join("assets");
    let mut asset_count = 0usize;
    if assets_dir.is_dir() {
        asset_count = copy_dir(&assets_dir, &stage_dir.join("assets"))?;
        if !assets_dir.join(LOGO_FILENAME).exists() {
            tracing::warn!(
                assets = %assets_dir.display(),
                "assets directory has no {LOGO_FILENAME}; the marketplace requires one"
            );
        }
    } else {
        tracing::warn!(
            project = %dir.display(),
            "no assets directory found; staging manifests only"
        );
    }

    println!("Package staged:");
    println!("  name:     {name}");
    println!("  version:  {version}");
    println!("  layout:   {}", stage_dir.display());
    println!("  assets:   {asset_count} file(s)");

    Ok(0)
}

fn report(path: &Path, result: &ValidationResult) {
    if result.is_valid {
        println!("{}: valid", path.display());
    } else {
        println!(
            "{}: invalid ({} violation(s))",
            path.display(),
            result.errors.len()
        );
        for error in &result.errors {
            println!("  {error}");
        }
    }
}

/// Recursively copy a directory, returning the number of files copied.
fn copy_dir(from: &Path, to: &Path) -> Result<usize> {
    std::fs::create_dir_all(to)
        .with_context(|| format!("creating directory: {}", to.display()))?;

    let mut copied = 0usize;
    for entry in std::fs::read_dir(from)
        .with_context(|| format!("reading directory: {}", from.display()))?
    {
        let entry = entry?;
        let source = entry.path();
        let target = to.join(entry.file_name());
        if source.is_dir() {
            copied += copy_dir(&source, &target)?;
        } else {
            std::fs::copy(&source, &target)
                .with_context(|| format!("copying asset: {}", source.display()))?;
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::{run_init, InitArgs};

    fn scaffold(dir: &Path) {
        let args = InitArgs {
            directory: dir.to_path_buf(),
            name: Some("test-extension".to_string()),
            force: false,
            keep_logo: false,
        };
        run_init(&args).unwrap();
    }

    #[test]
    fn valid_project_is_staged_with_assets() {
        let dir = tempfile::tempdir().unwrap();
        scaffold(dir.path());

        let args = PackageArgs {
            directory: dir.path().to_path_buf(),
            output: None,
        };
        assert_eq!(run_package(&args).unwrap(), 0);

        let stage = dir.path().join("dist").join("test-extension-0.1.0");
        assert!(stage.join("manifest.json").is_file());
        assert!(stage.join("publisher.json").is_file());
        assert!(stage.join("assets").join(LOGO_FILENAME).is_file());
    }

    #[test]
    fn invalid_manifest_blocks_packaging() {
        let dir = tempfile::tempdir().unwrap();
        scaffold(dir.path());
        // Corrupt the manifest: drop a required field.
        std::fs::write(
            dir.path().join("manifest.json"),
            br#"{ "name": "test-extension" }"#,
        )
        .unwrap();

        let args = PackageArgs {
            directory: dir.path().to_path_buf(),
            output: None,
        };
        assert_eq!(run_package(&args).unwrap(), 1);
        assert!(!dir.path().join("dist").exists());
    }

    #[test]
    fn custom_output_directory_is_honored() {
        let dir = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        scaffold(dir.path());

        let args = PackageArgs {
            directory: dir.path().to_path_buf(),
            output: Some(out.path().to_path_buf()),
        };
        assert_eq!(run_package(&args).unwrap(), 0);
        assert!(out
            .path()
            .join("test-extension-0.1.0")
            .join("manifest.json")
            .is_file());
    }

    #[test]
    fn missing_manifest_is_a_hard_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = PackageArgs {
            directory: dir.path().to_path_buf(),
            output: None,
        };
        assert!(run_package(&args).is_err());
    }
}
