//! # Action Payloads
//!
//! The data object sent back to the partner when an action is invoked.
//! Which optional fields are populated depends on the card's verb:
//! `append_content` for append-to-note-section, `inputs` and
//! `match_content` for merge-with-note, `clipboard_content` for
//! copy-to-clipboard. Reject and regenerate carry no verb-specific
//! fields. Any further key/value pairs the partner collected are kept
//! in the flattened `mappings`, so round-tripping an unknown payload is
//! lossless.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload attached to a [`CardAction`](crate::CardAction).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ActionData {
    /// Name of the extension tool the action belongs to.
    #[serde(
        rename = "extensionToolName",
        skip_serializing_if = "Option::is_none"
    )]
    pub extension_tool_name: Option<String>,

    /// Content to append to the note section.
    #[serde(rename = "appendContent", skip_serializing_if = "Option::is_none")]
    pub append_content: Option<String>,

    /// Input element ids considered when merging content into the note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<String>>,

    /// Text to target during a merge.
    #[serde(rename = "matchContent", skip_serializing_if = "Option::is_none")]
    pub match_content: Option<String>,

    /// Content to copy to the clipboard.
    #[serde(rename = "clipboardContent", skip_serializing_if = "Option::is_none")]
    pub clipboard_content: Option<String>,

    /// Partner-collected key/value mappings, flattened on the wire.
    #[serde(flatten)]
    pub mappings: BTreeMap<String, Value>,
}
