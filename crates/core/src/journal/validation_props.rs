//! Property tests for the balance invariant.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::draft::{EntryDraft, HeaderField, LineField};
use super::error::JournalError;
use super::validation::validate_draft;

/// Strategy for a non-negative amount with two decimal places.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for a set of (debit, credit) line amounts.
fn line_amounts_strategy(max_len: usize) -> impl Strategy<Value = Vec<(Decimal, Decimal)>> {
    prop::collection::vec((amount_strategy(), amount_strategy()), 1..=max_len)
}

/// Builds a draft with filled header fields and the given line amounts,
/// routed through the raw-input coercion boundary like real form edits.
fn draft_with_lines(amounts: &[(Decimal, Decimal)]) -> EntryDraft {
    let mut draft = EntryDraft::create();
    draft.set_header_field(HeaderField::EntryNumber, "JV-PROP");
    draft.set_header_field(HeaderField::EntryDate, "2026-01-15");

    for (index, (debit, credit)) in amounts.iter().enumerate() {
        if index > 0 {
            draft.add_line();
        }
        draft.set_line_field(index, LineField::Debit, &debit.to_string());
        draft.set_line_field(index, LineField::Credit, &credit.to_string());
    }
    draft
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A draft commits iff its debit and credit sums are exactly equal.
    #[test]
    fn prop_validates_iff_sums_equal(amounts in line_amounts_strategy(12)) {
        let draft = draft_with_lines(&amounts);

        let debit: Decimal = amounts.iter().map(|(d, _)| *d).sum();
        let credit: Decimal = amounts.iter().map(|(_, c)| *c).sum();

        match validate_draft(&draft) {
            Ok(()) => prop_assert_eq!(debit, credit),
            Err(JournalError::Unbalanced { debit: d, credit: c }) => {
                prop_assert_ne!(debit, credit);
                prop_assert_eq!(d, debit);
                prop_assert_eq!(c, credit);
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    /// Mirrored lines (every debit matched by an equal credit) always pass.
    #[test]
    fn prop_mirrored_lines_always_balance(amounts in prop::collection::vec(amount_strategy(), 1..8)) {
        let pairs: Vec<(Decimal, Decimal)> = amounts
            .iter()
            .map(|a| (*a, Decimal::ZERO))
            .chain(amounts.iter().map(|a| (Decimal::ZERO, *a)))
            .collect();
        let draft = draft_with_lines(&pairs);

        prop_assert!(validate_draft(&draft).is_ok());
    }

    /// Any nonzero skew on one side is rejected with both computed sums.
    #[test]
    fn prop_nonzero_skew_is_rejected(
        amounts in prop::collection::vec(amount_strategy(), 1..8),
        skew in 1i64..1_000_000,
    ) {
        let skew = Decimal::new(skew, 2);
        let mut pairs: Vec<(Decimal, Decimal)> = amounts
            .iter()
            .map(|a| (*a, Decimal::ZERO))
            .chain(amounts.iter().map(|a| (Decimal::ZERO, *a)))
            .collect();
        pairs.push((skew, Decimal::ZERO));
        let draft = draft_with_lines(&pairs);

        let expected_debit: Decimal = amounts.iter().copied().sum::<Decimal>() + skew;
        let expected_credit: Decimal = amounts.iter().copied().sum();

        prop_assert_eq!(
            validate_draft(&draft),
            Err(JournalError::Unbalanced {
                debit: expected_debit,
                credit: expected_credit,
            })
        );
    }

    /// An empty entry number is reported before balance is even evaluated.
    #[test]
    fn prop_required_fields_short_circuit_balance(amounts in line_amounts_strategy(6)) {
        let mut draft = draft_with_lines(&amounts);
        draft.set_header_field(HeaderField::EntryNumber, "");

        prop_assert_eq!(
            validate_draft(&draft),
            Err(JournalError::MissingRequiredField { field: "entry_number" })
        );
    }
}
