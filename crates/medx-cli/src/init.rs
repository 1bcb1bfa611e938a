//! # Init Subcommand
//!
//! Scaffolds a new extension project: a template `manifest.json` with a
//! fresh tenant GUID placeholder, a `publisher.json` with the currently
//! supported locale/region defaults, and a placeholder logo under
//! `assets/`. The generated templates validate cleanly, so `medx
//! validate` and `medx package` work on a scaffold out of the box.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;

use medx_core::manifest::{
    AuthBlock, ContentDescriptor, ExtensionManifest, PublisherConfig, Tool,
};

/// Placeholder logo written into new projects. A valid 1x1 PNG; the
/// publisher replaces it with real artwork before packaging.
const PLACEHOLDER_LOGO: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d,
    0x49, 0x48, 0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01,
    0x08, 0x06, 0x00, 0x00, 0x00, 0x1f, 0x15, 0xc4, 0x89, 0x00, 0x00, 0x00,
    0x0d, 0x49, 0x44, 0x41, 0x54, 0x78, 0xda, 0x63, 0x64, 0x60, 0xf8, 0x5f,
    0x0f, 0x00, 0x02, 0x87, 0x01, 0x80, 0xeb, 0x47, 0xba, 0x92, 0x00, 0x00,
    0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

/// Filename of the project logo inside the assets directory.
pub const LOGO_FILENAME: &str = "logo_large.png";

/// Arguments for `medx init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scaffold. Created if it does not exist.
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Extension name (slug). Defaults to the directory name.
    #[arg(long)]
    pub name: Option<String>,

    /// Overwrite existing manifest and publisher files.
    #[arg(long)]
    pub force: bool,

    /// Keep an existing logo instead of restoring the placeholder.
    #[arg(long)]
    pub keep_logo: bool,
}

/// Result of bootstrapping the assets directory.
pub struct AssetBootstrap {
    /// Path of the project logo.
    pub logo_path: PathBuf,
    /// Whether the placeholder was written on this run.
    pub copied: bool,
}

/// Execute `medx init`.
pub fn run_init(args: &InitArgs) -> Result<u8> {
    let dir = &args.directory;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating project directory: {}", dir.display()))?;

    let name = match &args.name {
        Some(name) => name.clone(),
        None => derive_name(dir)?,
    };

    let manifest_path = dir.join("manifest.json");
    let publisher_path = dir.join("publisher.json");
    for path in [&manifest_path, &publisher_path] {
        if path.exists() && !args.force {
            bail!(
                "{} already exists. Use --force to overwrite.",
                path.display()
            );
        }
    }

    write_pretty_json(&manifest_path, &extension_template(&name))?;
    write_pretty_json(&publisher_path, &publisher_template(&name))?;

    let assets = bootstrap_assets(dir, !args.keep_logo)?;

    println!("Project initialized:");
    println!("  name:       {name}");
    println!("  manifest:   {}", manifest_path.display());
    println!("  publisher:  {}", publisher_path.display());
    if assets.copied {
        println!("  logo:       {} (placeholder)", assets.logo_path.display());
        println!();
        println!("Replace the placeholder logo with your own artwork before packaging.");
    } else {
        println!("  logo:       {} (existing, preserved)", assets.logo_path.display());
    }
    println!();
    println!("Next steps:");
    println!("  1. Edit manifest.json and publisher.json");
    println!("  2. Verify:  medx validate manifest.json --kind extension");
    println!("  3. Stage:   medx package {}", dir.display());

    Ok(0)
}

/// Ensure the assets directory exists and holds a logo.
///
/// When `overwrite` is false an existing logo is preserved; otherwise
/// the placeholder is (re)written.
pub fn bootstrap_assets(base_dir: &Path, overwrite: bool) -> Result<AssetBootstrap> {
    let assets_dir = base_dir.join("assets");
    std::fs::create_dir_all(&assets_dir)
        .with_context(|| format!("creating assets directory: {}", assets_dir.display()))?;

    let logo_path = assets_dir.join(LOGO_FILENAME);
    if overwrite || !logo_path.exists() {
        std::fs::write(&logo_path, PLACEHOLDER_LOGO)
            .with_context(|| format!("writing placeholder logo: {}", logo_path.display()))?;
        return Ok(AssetBootstrap {
            logo_path,
            copied: true,
        });
    }

    tracing::debug!(logo = %logo_path.display(), "existing logo preserved");
    Ok(AssetBootstrap {
        logo_path,
        copied: false,
    })
}

/// Derive a slug name from the project directory.
fn derive_name(dir: &Path) -> Result<String> {
    let raw = dir
        .canonicalize()
        .unwrap_or_else(|_| dir.to_path_buf())
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .context("cannot derive an extension name from the directory; pass --name")?;
    let slug = slugify(&raw);
    if slug.is_empty() {
        bail!("directory name '{raw}' yields an empty slug; pass --name");
    }
    Ok(slug)
}

/// Lowercase, map runs of non-alphanumerics to single hyphens, and trim
/// leading/trailing hyphens.
fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut pending_hyphen = false;
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

fn extension_template(name: &str) -> ExtensionManifest {
    ExtensionManifest {
        name: name.to_string(),
        description: "Describe what your extension does.".to_string(),
        version: "0.1.0".to_string(),
        auth: AuthBlock {
            tenant_id: uuid::Uuid::new_v4().to_string(),
        },
        tools: vec![Tool {
            name: "sample-tool".to_string(),
            description: "Describe what this tool does.".to_string(),
            endpoint: "https://example.org/extension/process".to_string(),
            inputs: vec![ContentDescriptor {
                name: "note".to_string(),
                description: "Clinical note payload".to_string(),
                content_type: Some("application/vnd.example.note+json".to_string()),
                data: None,
            }],
            outputs: vec![ContentDescriptor {
                name: "result-card".to_string(),
                description: "Adaptive Card output".to_string(),
                content_type: Some("application/vnd.example.card+json".to_string()),
                data: None,
            }],
            trigger: None,
        }],
    }
}

fn publisher_template(name: &str) -> PublisherConfig {
    PublisherConfig {
        publisher_id: name.to_string(),
        publisher_name: "Your Company Inc.".to_string(),
        website_url: "https://example.org".to_string(),
        privacy_policy_url: "https://example.org/privacy".to_string(),
        support_url: "https://example.org/support".to_string(),
        version: "0.0.1".to_string(),
        contact_email: "support@example.org".to_string(),
        offer_id: format!("{name}-offer"),
        default_locale: "en-US".to_string(),
        scope: "Workflow".to_string(),
        supported_locales: vec!["en-US".to_string()],
        regions: vec!["US".to_string()],
    }
}

fn write_pretty_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut content = serde_json::to_string_pretty(value)
        .with_context(|| format!("serializing template: {}", path.display()))?;
    content.push('\n');
    std::fs::write(path, content)
        .with_context(|| format!("writing template: {}", path.display()))
}
