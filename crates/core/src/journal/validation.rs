//! Commit validation for journal entry drafts.

use super::draft::EntryDraft;
use super::error::JournalError;
use super::types::{EntryTotals, JournalLine};

/// Computes the totals over a line set, treating absent amounts as zero.
#[must_use]
pub fn totals_of(lines: &[JournalLine]) -> EntryTotals {
    EntryTotals::over(lines)
}

/// Decides whether a draft may be committed.
///
/// The required-field check runs first and short-circuits: an incomplete
/// header is reported before balance is evaluated. The balance check uses
/// exact decimal equality, no tolerance.
///
/// # Errors
///
/// Returns `MissingRequiredField` when the entry number or date is empty,
/// `Unbalanced` (carrying both computed sums) when debits and credits differ.
pub fn validate_draft(draft: &EntryDraft) -> Result<(), JournalError> {
    if draft.entry_number.trim().is_empty() {
        return Err(JournalError::MissingRequiredField { field: "entry_number" });
    }
    if draft.entry_date.is_none() {
        return Err(JournalError::MissingRequiredField { field: "entry_date" });
    }

    let totals = totals_of(draft.lines());
    if !totals.is_balanced {
        return Err(JournalError::Unbalanced {
            debit: totals.debit,
            credit: totals.credit,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::draft::{HeaderField, LineField};
    use rust_decimal_macros::dec;

    fn filled_draft() -> EntryDraft {
        let mut draft = EntryDraft::create();
        draft.set_header_field(HeaderField::EntryNumber, "JV-010");
        draft.set_header_field(HeaderField::EntryDate, "2026-04-01");
        draft.set_line_field(0, LineField::Debit, "1000000");
        draft.add_line();
        draft.set_line_field(1, LineField::Credit, "1000000");
        draft
    }

    #[test]
    fn test_balanced_draft_passes() {
        assert!(validate_draft(&filled_draft()).is_ok());
    }

    #[test]
    fn test_unbalanced_draft_carries_both_sums() {
        let mut draft = filled_draft();
        draft.add_line();
        draft.set_line_field(2, LineField::Debit, "500000");

        let err = validate_draft(&draft).unwrap_err();
        assert_eq!(
            err,
            JournalError::Unbalanced {
                debit: dec!(1500000),
                credit: dec!(1000000),
            }
        );
    }

    #[test]
    fn test_missing_entry_number_is_reported_before_balance() {
        let mut draft = filled_draft();
        draft.set_header_field(HeaderField::EntryNumber, "");
        draft.set_line_field(0, LineField::Debit, "999");

        assert_eq!(
            validate_draft(&draft).unwrap_err(),
            JournalError::MissingRequiredField { field: "entry_number" }
        );
    }

    #[test]
    fn test_whitespace_entry_number_counts_as_empty() {
        let mut draft = filled_draft();
        draft.set_header_field(HeaderField::EntryNumber, "   ");
        assert_eq!(
            validate_draft(&draft).unwrap_err(),
            JournalError::MissingRequiredField { field: "entry_number" }
        );
    }

    #[test]
    fn test_missing_date_is_required() {
        let mut draft = filled_draft();
        draft.set_header_field(HeaderField::EntryDate, "not a date");
        assert_eq!(
            validate_draft(&draft).unwrap_err(),
            JournalError::MissingRequiredField { field: "entry_date" }
        );
    }

    #[test]
    fn test_all_zero_lines_are_balanced() {
        let mut draft = EntryDraft::create();
        draft.set_header_field(HeaderField::EntryNumber, "JV-011");
        draft.set_header_field(HeaderField::EntryDate, "2026-04-01");
        assert!(validate_draft(&draft).is_ok());
    }

    #[test]
    fn test_line_with_both_sides_is_permitted() {
        let mut draft = EntryDraft::create();
        draft.set_header_field(HeaderField::EntryNumber, "JV-012");
        draft.set_header_field(HeaderField::EntryDate, "2026-04-02");
        draft.set_line_field(0, LineField::Debit, "300");
        draft.set_line_field(0, LineField::Credit, "300");
        assert!(validate_draft(&draft).is_ok());
    }
}
