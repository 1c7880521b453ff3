//! The transient edit buffer for a journal entry.
//!
//! A draft is the single source of truth while a form is open. It is created
//! blank (create mode) or as a deep copy of a stored entry (edit mode) and
//! never aliases the store; nothing reaches the store until the controller
//! commits a validated draft.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use jurnal_shared::types::JournalEntryId;

use super::types::{EntryTotals, JournalEntry, JournalLine};

/// Date format accepted by the entry date field.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Header fields addressable from the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    /// The voucher number.
    EntryNumber,
    /// The entry date, entered as `YYYY-MM-DD`.
    EntryDate,
    /// Who is recording the entry.
    RecordedBy,
    /// The free-text memo.
    Memo,
}

/// Line fields addressable from the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineField {
    /// Free-text account code.
    AccountCode,
    /// Free-text account label.
    AccountName,
    /// Free-text line description.
    Description,
    /// Debit amount; non-numeric input coerces to zero.
    Debit,
    /// Credit amount; non-numeric input coerces to zero.
    Credit,
}

/// In-progress header fields and lines for one journal entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    id: Option<JournalEntryId>,
    /// Voucher number, required at submit time.
    pub entry_number: String,
    /// Entry date, required at submit time; `None` until set to a parseable
    /// date.
    pub entry_date: Option<NaiveDate>,
    /// Who is recording the entry.
    pub recorded_by: String,
    /// Free-text description.
    pub memo: String,
    lines: Vec<JournalLine>,
}

impl EntryDraft {
    /// Starts a new entry: blank header, exactly one blank line.
    #[must_use]
    pub fn create() -> Self {
        Self {
            id: None,
            entry_number: String::new(),
            entry_date: None,
            recorded_by: String::new(),
            memo: String::new(),
            lines: vec![JournalLine::blank()],
        }
    }

    /// Starts editing an existing entry with a deep copy of its header and
    /// lines.
    #[must_use]
    pub fn edit(entry: &JournalEntry) -> Self {
        Self {
            id: Some(entry.id),
            entry_number: entry.entry_number.clone(),
            entry_date: Some(entry.entry_date),
            recorded_by: entry.recorded_by.clone(),
            memo: entry.memo.clone(),
            lines: entry.lines.clone(),
        }
    }

    /// The id of the entry being edited, `None` while creating.
    #[must_use]
    pub const fn id(&self) -> Option<JournalEntryId> {
        self.id
    }

    /// The current lines, in edit order. Always at least one.
    #[must_use]
    pub fn lines(&self) -> &[JournalLine] {
        &self.lines
    }

    /// Updates one header field from raw form input.
    ///
    /// The entry date expects `YYYY-MM-DD`; unparseable input clears it.
    pub fn set_header_field(&mut self, field: HeaderField, raw: &str) {
        match field {
            HeaderField::EntryNumber => self.entry_number = raw.to_string(),
            HeaderField::EntryDate => {
                self.entry_date = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok();
            }
            HeaderField::RecordedBy => self.recorded_by = raw.to_string(),
            HeaderField::Memo => self.memo = raw.to_string(),
        }
    }

    /// Appends one blank line.
    pub fn add_line(&mut self) {
        self.lines.push(JournalLine::blank());
    }

    /// Removes the line at `index`.
    ///
    /// A no-op (returns `false`) when only one line remains or the index is
    /// out of range; a draft never drops below one line.
    pub fn remove_line(&mut self, index: usize) -> bool {
        if self.lines.len() <= 1 || index >= self.lines.len() {
            return false;
        }
        self.lines.remove(index);
        true
    }

    /// Updates one field of one line from raw form input.
    ///
    /// Returns `false` when the index is out of range. Amount fields coerce
    /// non-numeric input to zero and clamp negative input to zero.
    pub fn set_line_field(&mut self, index: usize, field: LineField, raw: &str) -> bool {
        let Some(line) = self.lines.get_mut(index) else {
            return false;
        };
        match field {
            LineField::AccountCode => line.account_code = raw.to_string(),
            LineField::AccountName => line.account_name = raw.to_string(),
            LineField::Description => line.description = raw.to_string(),
            LineField::Debit => line.debit = coerce_amount(raw),
            LineField::Credit => line.credit = coerce_amount(raw),
        }
        true
    }

    /// Returns the totals over the current lines, computed fresh.
    #[must_use]
    pub fn totals(&self) -> EntryTotals {
        EntryTotals::over(&self.lines)
    }

    /// Builds the committed record for this draft under the given id.
    ///
    /// Returns `None` when the entry date is still unset; validation rejects
    /// such drafts before commit.
    #[must_use]
    pub(crate) fn to_entry(&self, id: JournalEntryId) -> Option<JournalEntry> {
        let entry_date = self.entry_date?;
        Some(JournalEntry {
            id,
            display_no: 0,
            entry_number: self.entry_number.clone(),
            entry_date,
            recorded_by: self.recorded_by.clone(),
            memo: self.memo.clone(),
            lines: self.lines.clone(),
        })
    }
}

/// Coerces raw amount input to a non-negative decimal, zero on garbage.
fn coerce_amount(raw: &str) -> Decimal {
    raw.trim()
        .parse::<Decimal>()
        .unwrap_or(Decimal::ZERO)
        .max(Decimal::ZERO)
}
