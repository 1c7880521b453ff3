//! Journal entry domain types.
//!
//! A manual journal entry is a header plus an ordered list of debit/credit
//! lines. Entries must balance (total debit equals total credit) before they
//! are committed to the store.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use jurnal_shared::types::JournalEntryId;

use crate::store::Record;

/// A committed manual journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier, assigned at creation and never reused.
    pub id: JournalEntryId,
    /// Derived 1-based position in the list screen, maintained by the store.
    #[serde(default)]
    pub display_no: u32,
    /// Human-assigned voucher number. Uniqueness is not enforced.
    pub entry_number: String,
    /// Calendar date of the entry (no time component).
    pub entry_date: NaiveDate,
    /// Who recorded the entry.
    pub recorded_by: String,
    /// Free-text description.
    pub memo: String,
    /// The debit/credit lines, in display and edit order.
    pub lines: Vec<JournalLine>,
}

impl Record for JournalEntry {
    type Id = JournalEntryId;

    fn id(&self) -> JournalEntryId {
        self.id
    }

    fn display_no(&self) -> u32 {
        self.display_no
    }

    fn set_display_no(&mut self, no: u32) {
        self.display_no = no;
    }
}

impl JournalEntry {
    /// Returns the totals over this entry's lines.
    #[must_use]
    pub fn totals(&self) -> EntryTotals {
        EntryTotals::over(&self.lines)
    }
}

/// One debit-or-credit posting within a journal entry.
///
/// A line may carry a debit amount, a credit amount, both, or neither; only
/// the aggregate balance across all lines is enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalLine {
    /// Free-text account code.
    pub account_code: String,
    /// Free-text account label.
    pub account_name: String,
    /// Free-text line description.
    pub description: String,
    /// Non-negative debit amount.
    pub debit: Decimal,
    /// Non-negative credit amount.
    pub credit: Decimal,
}

impl JournalLine {
    /// Creates an empty line with zero amounts.
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// Returns the signed amount (positive for debit, negative for credit).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        self.debit - self.credit
    }
}

/// Aggregate totals over a set of lines.
///
/// Derived on demand, never stored; the balance flag uses exact `Decimal`
/// equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryTotals {
    /// Total debit amount.
    pub debit: Decimal,
    /// Total credit amount.
    pub credit: Decimal,
    /// Whether total debit equals total credit.
    pub is_balanced: bool,
}

impl EntryTotals {
    /// Creates totals from debit and credit sums.
    #[must_use]
    pub fn new(debit: Decimal, credit: Decimal) -> Self {
        Self {
            debit,
            credit,
            is_balanced: debit == credit,
        }
    }

    /// Computes totals over a line set.
    #[must_use]
    pub fn over(lines: &[JournalLine]) -> Self {
        let debit: Decimal = lines.iter().map(|line| line.debit).sum();
        let credit: Decimal = lines.iter().map(|line| line.credit).sum();
        Self::new(debit, credit)
    }

    /// Returns the difference between debits and credits.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        self.debit - self.credit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn line(debit: Decimal, credit: Decimal) -> JournalLine {
        JournalLine {
            debit,
            credit,
            ..JournalLine::blank()
        }
    }

    #[test]
    fn test_totals_balanced() {
        let totals = EntryTotals::over(&[line(dec!(1000), dec!(0)), line(dec!(0), dec!(1000))]);
        assert!(totals.is_balanced);
        assert_eq!(totals.difference(), Decimal::ZERO);
    }

    #[test]
    fn test_totals_unbalanced() {
        let totals = EntryTotals::over(&[line(dec!(1500), dec!(0)), line(dec!(0), dec!(1000))]);
        assert!(!totals.is_balanced);
        assert_eq!(totals.difference(), dec!(500));
    }

    #[test]
    fn test_totals_of_empty_line_set_are_zero_and_balanced() {
        let totals = EntryTotals::over(&[]);
        assert_eq!(totals.debit, Decimal::ZERO);
        assert_eq!(totals.credit, Decimal::ZERO);
        assert!(totals.is_balanced);
    }

    #[test]
    fn test_line_with_both_sides_counts_on_both_totals() {
        let totals = EntryTotals::over(&[line(dec!(250), dec!(250))]);
        assert!(totals.is_balanced);
        assert_eq!(totals.debit, dec!(250));
    }

    #[test]
    fn test_signed_amount() {
        assert_eq!(line(dec!(100), dec!(0)).signed_amount(), dec!(100));
        assert_eq!(line(dec!(0), dec!(40)).signed_amount(), dec!(-40));
        assert_eq!(JournalLine::blank().signed_amount(), Decimal::ZERO);
    }
}
