//! # Card Actions
//!
//! The action definition rendered on an adaptive card. Verbs serialize
//! as camelCase strings on the wire; integer values are not part of the
//! contract.

use serde::{Deserialize, Serialize};

use crate::payload::ActionData;

/// An action rendered on a card surfaced to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardAction {
    /// Display type for the action. Defaults to `Action.Execute`.
    #[serde(rename = "type", default = "default_action_type")]
    pub action_type: String,
    /// Identifier for the action.
    pub id: String,
    /// Display title for the action.
    pub title: String,
    /// What the action does when invoked.
    pub verb: ActionVerb,
    /// Optional payload sent back to the partner on invocation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ActionData>,
}

fn default_action_type() -> String {
    "Action.Execute".to_string()
}

/// Available card action verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionVerb {
    /// Discard the suggested content.
    Reject,
    /// Copy the associated content to the clipboard.
    CopyToClipboard,
    /// Append the associated content to a note section.
    AppendToNoteSection,
    /// Merge the associated content into the note.
    MergeWithNote,
    /// Ask the extension to regenerate its output.
    Regenerate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn verbs_serialize_as_camel_case_strings() {
        assert_eq!(
            serde_json::to_value(ActionVerb::CopyToClipboard).unwrap(),
            json!("copyToClipboard")
        );
        assert_eq!(
            serde_json::to_value(ActionVerb::AppendToNoteSection).unwrap(),
            json!("appendToNoteSection")
        );
    }

    #[test]
    fn integer_verbs_are_rejected() {
        assert!(serde_json::from_value::<ActionVerb>(json!(2)).is_err());
    }

    #[test]
    fn action_type_defaults_when_absent() {
        let action: CardAction = serde_json::from_value(json!({
            "id": "append-1",
            "title": "Append to note",
            "verb": "appendToNoteSection"
        }))
        .unwrap();
        assert_eq!(action.action_type, "Action.Execute");
        assert!(action.data.is_none());
    }
}
