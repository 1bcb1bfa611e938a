//! # Manifest Kinds
//!
//! The closed set of manifest kinds the toolchain validates. Each kind
//! selects exactly one compiled schema and one business-rule set in
//! `medx-schema`; there is no runtime type inspection.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownKindError;

/// A manifest kind supported by the toolchain.
///
/// The set is closed: adding a kind means adding a bundled schema, a
/// rule set, and a pipeline entry point, so new variants are a source
/// change, never a data-driven extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestKind {
    /// Third-party extension manifest (`manifest.json`).
    Extension,
    /// Clinical-system connector integration manifest.
    Connector,
    /// Publisher marketplace identity (`publisher.json`).
    PublisherConfig,
}

impl ManifestKind {
    /// All supported kinds, in pipeline entry-point order.
    pub const ALL: [ManifestKind; 3] = [
        ManifestKind::Extension,
        ManifestKind::Connector,
        ManifestKind::PublisherConfig,
    ];

    /// Filename of the bundled schema for this kind.
    pub fn schema_name(self) -> &'static str {
        match self {
            ManifestKind::Extension => "extension.schema.json",
            ManifestKind::Connector => "connector.schema.json",
            ManifestKind::PublisherConfig => "publisher.schema.json",
        }
    }

    /// Stable lowercase identifier used on the CLI and in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ManifestKind::Extension => "extension",
            ManifestKind::Connector => "connector",
            ManifestKind::PublisherConfig => "publisher",
        }
    }
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ManifestKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "extension" => Ok(ManifestKind::Extension),
            "connector" => Ok(ManifestKind::Connector),
            "publisher" | "publisher-config" => Ok(ManifestKind::PublisherConfig),
            other => Err(UnknownKindError {
                kind: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_names_are_distinct() {
        let names: Vec<&str> = ManifestKind::ALL.iter().map(|k| k.schema_name()).collect();
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }

    #[test]
    fn round_trips_through_str() {
        for kind in ManifestKind::ALL {
            assert_eq!(kind.as_str().parse::<ManifestKind>().unwrap(), kind);
        }
    }

    #[test]
    fn publisher_config_accepts_both_spellings() {
        assert_eq!(
            "publisher-config".parse::<ManifestKind>().unwrap(),
            ManifestKind::PublisherConfig
        );
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = "widget".parse::<ManifestKind>().unwrap_err();
        assert!(err.to_string().contains("widget"));
    }
}
