//! # Schema Registry
//!
//! One compiled structural schema per [`ManifestKind`], built from the
//! JSON Schema documents bundled in this crate's `schemas/` directory
//! (Draft 2020-12). Compilation happens at most once per kind; the
//! resulting validators live for the process lifetime and are safe for
//! unsynchronized concurrent reads.
//!
//! The bundled schemas are versioned artifacts shipped with the tool,
//! not user-supplied input. A schema that fails to parse or compile is
//! a defect in the crate itself, caught by the test suite, so the
//! registry treats it as a fatal invariant violation rather than a
//! recoverable error.

use std::sync::OnceLock;

use jsonschema::Validator;
use serde_json::Value;

use medx_core::ManifestKind;

const EXTENSION_SCHEMA: &str = include_str!("../schemas/extension.schema.json");
const CONNECTOR_SCHEMA: &str = include_str!("../schemas/connector.schema.json");
const PUBLISHER_SCHEMA: &str = include_str!("../schemas/publisher.schema.json");

static EXTENSION_VALIDATOR: OnceLock<Validator> = OnceLock::new();
static CONNECTOR_VALIDATOR: OnceLock<Validator> = OnceLock::new();
static PUBLISHER_VALIDATOR: OnceLock<Validator> = OnceLock::new();

/// Return the compiled validator for a manifest kind.
///
/// Never fails for a supported kind; the kind enum is closed, so every
/// call site is covered by a bundled schema.
pub fn schema_for(kind: ManifestKind) -> &'static Validator {
    match kind {
        ManifestKind::Extension => {
            EXTENSION_VALIDATOR.get_or_init(|| compile(EXTENSION_SCHEMA, kind.schema_name()))
        }
        ManifestKind::Connector => {
            CONNECTOR_VALIDATOR.get_or_init(|| compile(CONNECTOR_SCHEMA, kind.schema_name()))
        }
        ManifestKind::PublisherConfig => {
            PUBLISHER_VALIDATOR.get_or_init(|| compile(PUBLISHER_SCHEMA, kind.schema_name()))
        }
    }
}

/// Return the raw (uncompiled) schema document for a manifest kind.
pub fn raw_schema(kind: ManifestKind) -> Value {
    let source = match kind {
        ManifestKind::Extension => EXTENSION_SCHEMA,
        ManifestKind::Connector => CONNECTOR_SCHEMA,
        ManifestKind::PublisherConfig => PUBLISHER_SCHEMA,
    };
    parse(source, kind.schema_name())
}

fn parse(source: &str, name: &str) -> Value {
    serde_json::from_str(source)
        .unwrap_or_else(|e| panic!("bundled schema {name} is not valid JSON: {e}"))
}

fn compile(source: &str, name: &str) -> Validator {
    let schema = parse(source, name);
    let mut opts = jsonschema::options();
    opts.with_draft(jsonschema::Draft::Draft202012);
    opts.build(&schema)
        .unwrap_or_else(|e| panic!("bundled schema {name} failed to compile: {e}"))
}
