//! Editor state machine orchestrating drafts, validation, and the store.
//!
//! All screen state lives in one explicit [`EditorState`] value mutated only
//! through named transitions, so every transition is testable without any
//! rendering in the loop.

use jurnal_shared::types::JournalEntryId;

use super::draft::{EntryDraft, HeaderField, LineField};
use super::error::JournalError;
use super::types::{EntryTotals, JournalEntry};
use super::validation::validate_draft;
use crate::store::{InsertOrder, RecordStore};

/// Whether the open form is creating a new entry or editing a stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// A new entry is being drafted.
    Create,
    /// An existing entry is being edited.
    Edit,
}

/// The single state value for the journal screen's modals.
#[derive(Debug, Clone)]
pub enum EditorState {
    /// No modal is open.
    Closed,
    /// The entry form is open over a draft.
    Open {
        /// Create or edit.
        mode: FormMode,
        /// The edit buffer; the single source of truth while open.
        draft: EntryDraft,
        /// The error from the last rejected submit, if any.
        error: Option<JournalError>,
    },
    /// The delete confirmation dialog is open.
    ConfirmingDelete {
        /// The entry the user is about to delete.
        id: JournalEntryId,
    },
}

/// Orchestrates the entry form, validation, and the record store.
///
/// Commits are atomic: a rejected submit leaves both the store and the draft
/// untouched, and cancelling discards the draft without any store mutation.
#[derive(Debug)]
pub struct EntryController {
    store: RecordStore<JournalEntry>,
    state: EditorState,
}

impl Default for EntryController {
    fn default() -> Self {
        Self::new(InsertOrder::Prepend)
    }
}

impl EntryController {
    /// Creates a controller over an empty store.
    #[must_use]
    pub const fn new(insert_order: InsertOrder) -> Self {
        Self {
            store: RecordStore::new(insert_order),
            state: EditorState::Closed,
        }
    }

    /// Returns the current editor state for rendering.
    #[must_use]
    pub const fn state(&self) -> &EditorState {
        &self.state
    }

    /// Returns the committed entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[JournalEntry] {
        self.store.all()
    }

    /// Returns the committed entry with the given id, if present.
    #[must_use]
    pub fn entry(&self, id: JournalEntryId) -> Option<&JournalEntry> {
        self.store.get(id)
    }

    /// Returns true if the entry form is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, EditorState::Open { .. })
    }

    /// Returns the id awaiting delete confirmation, if any.
    #[must_use]
    pub const fn pending_delete(&self) -> Option<JournalEntryId> {
        match self.state {
            EditorState::ConfirmingDelete { id } => Some(id),
            _ => None,
        }
    }

    /// Opens the form in create mode with a fresh draft.
    ///
    /// A no-op (returns `false`) unless the editor is closed.
    pub fn open_create(&mut self) -> bool {
        if !matches!(self.state, EditorState::Closed) {
            return false;
        }
        self.state = EditorState::Open {
            mode: FormMode::Create,
            draft: EntryDraft::create(),
            error: None,
        };
        true
    }

    /// Opens the form in edit mode over a deep copy of the stored entry.
    ///
    /// A no-op (returns `false`) when the editor is not closed or the id is
    /// not in the store.
    pub fn open_edit(&mut self, id: JournalEntryId) -> bool {
        if !matches!(self.state, EditorState::Closed) {
            return false;
        }
        let Some(entry) = self.store.get(id) else {
            return false;
        };
        self.state = EditorState::Open {
            mode: FormMode::Edit,
            draft: EntryDraft::edit(entry),
            error: None,
        };
        true
    }

    /// Closes the form, discarding the draft. The store is never touched;
    /// there is no autosave, however much was edited.
    pub fn cancel(&mut self) {
        if matches!(self.state, EditorState::Open { .. }) {
            self.state = EditorState::Closed;
        }
    }

    /// Validates the draft and commits it to the store.
    ///
    /// On success the form closes and the committed entry's id is returned:
    /// a freshly generated id in create mode, the original id in edit mode.
    /// On failure the form stays open with the error recorded and the draft
    /// byte-for-byte intact.
    ///
    /// # Errors
    ///
    /// `MissingRequiredField` or `Unbalanced` when validation rejects the
    /// draft; `FormNotOpen` when no form is open.
    pub fn submit(&mut self) -> Result<JournalEntryId, JournalError> {
        let EditorState::Open { mode, draft, .. } = &self.state else {
            return Err(JournalError::FormNotOpen);
        };
        let mode = *mode;
        let validation = validate_draft(draft);
        let draft = draft.clone();

        if let Err(err) = validation {
            if let EditorState::Open { error, .. } = &mut self.state {
                *error = Some(err.clone());
            }
            return Err(err);
        }

        let id = draft.id().unwrap_or_else(JournalEntryId::new);
        let entry = draft
            .to_entry(id)
            .ok_or(JournalError::MissingRequiredField { field: "entry_date" })?;

        match mode {
            FormMode::Create => {
                self.store.insert(entry);
            }
            FormMode::Edit => {
                // Absent id means the entry vanished underneath the form
                // (multi-tab scenario); treated as a silent no-op.
                self.store.update(id, entry);
            }
        }
        self.state = EditorState::Closed;
        Ok(id)
    }

    /// Opens the delete confirmation dialog for an entry.
    ///
    /// Holds the id only; a no-op (returns `false`) unless the editor is
    /// closed.
    pub fn request_delete(&mut self, id: JournalEntryId) -> bool {
        if !matches!(self.state, EditorState::Closed) {
            return false;
        }
        self.state = EditorState::ConfirmingDelete { id };
        true
    }

    /// Confirms the pending delete and removes the entry from the store.
    ///
    /// Returns true if a record was actually removed; an id that is already
    /// gone is a silent no-op.
    pub fn confirm_delete(&mut self) -> bool {
        let EditorState::ConfirmingDelete { id } = self.state else {
            return false;
        };
        self.state = EditorState::Closed;
        self.store.delete(id)
    }

    /// Dismisses the delete confirmation without touching the store.
    pub fn cancel_delete(&mut self) {
        if matches!(self.state, EditorState::ConfirmingDelete { .. }) {
            self.state = EditorState::Closed;
        }
    }

    /// Updates one header field of the open draft; a no-op when closed.
    pub fn set_header_field(&mut self, field: HeaderField, raw: &str) -> bool {
        match &mut self.state {
            EditorState::Open { draft, .. } => {
                draft.set_header_field(field, raw);
                true
            }
            _ => false,
        }
    }

    /// Appends a blank line to the open draft; a no-op when closed.
    pub fn add_line(&mut self) -> bool {
        match &mut self.state {
            EditorState::Open { draft, .. } => {
                draft.add_line();
                true
            }
            _ => false,
        }
    }

    /// Removes a line from the open draft; a no-op when closed, out of
    /// range, or down to the last remaining line.
    pub fn remove_line(&mut self, index: usize) -> bool {
        match &mut self.state {
            EditorState::Open { draft, .. } => draft.remove_line(index),
            _ => false,
        }
    }

    /// Updates one line field of the open draft; a no-op when closed or out
    /// of range.
    pub fn set_line_field(&mut self, index: usize, field: LineField, raw: &str) -> bool {
        match &mut self.state {
            EditorState::Open { draft, .. } => draft.set_line_field(index, field, raw),
            _ => false,
        }
    }

    /// Returns the open draft, if any.
    #[must_use]
    pub const fn draft(&self) -> Option<&EntryDraft> {
        match &self.state {
            EditorState::Open { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Returns the open draft's totals, computed fresh.
    #[must_use]
    pub fn totals(&self) -> Option<EntryTotals> {
        self.draft().map(EntryDraft::totals)
    }

    /// Returns the error from the last rejected submit, if the form is open.
    #[must_use]
    pub const fn validation_error(&self) -> Option<&JournalError> {
        match &self.state {
            EditorState::Open { error, .. } => error.as_ref(),
            _ => None,
        }
    }
}
