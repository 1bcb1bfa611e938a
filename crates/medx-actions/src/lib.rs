//! # medx-actions — Action Card Data Contracts
//!
//! Serde models for the action cards an extension can surface to the
//! user and the payloads sent back to the partner when an action is
//! invoked. This crate is a pure data-transfer contract: it contains no
//! validation and no business logic, and is versioned independently of
//! the rest of the workspace.

pub mod card;
pub mod payload;

pub use card::{ActionVerb, CardAction};
pub use payload::ActionData;
