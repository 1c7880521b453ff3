//! Manual journal entries and the balance invariant.
//!
//! This module implements the one screen with a real domain rule:
//! - Journal entry and line types
//! - The transient edit buffer (draft)
//! - Commit validation (required fields, then balance)
//! - The editor state machine over the record store
//! - The composed list screen (filter + pagination)
//! - Error types for journal operations

pub mod controller;
pub mod draft;
pub mod error;
pub mod screen;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use controller::{EditorState, EntryController, FormMode};
pub use draft::{EntryDraft, HeaderField, LineField};
pub use error::JournalError;
pub use screen::{JournalFilter, JournalScreen};
pub use types::{EntryTotals, JournalEntry, JournalLine};
pub use validation::{totals_of, validate_draft};
