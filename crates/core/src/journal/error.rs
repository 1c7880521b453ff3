//! Journal error types for validation and editor state errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while editing or committing a journal entry.
///
/// None of these are fatal: every failure returns control to the editor
/// state that triggered it, with the edit buffer intact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JournalError {
    /// A mandatory header field is empty at submit time.
    #[error("Required field is empty: {field}")]
    MissingRequiredField {
        /// The field that was left empty.
        field: &'static str,
    },

    /// Debit and credit totals differ at submit time.
    #[error("Total Debit and Total Kredit must be equal. Debit: {debit}, Kredit: {credit}")]
    Unbalanced {
        /// Total debit amount over the buffer's lines.
        debit: Decimal,
        /// Total credit amount over the buffer's lines.
        credit: Decimal,
    },

    /// A form action was invoked while no entry form was open.
    #[error("No entry form is open")]
    FormNotOpen,
}

impl JournalError {
    /// Returns the stable machine-readable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingRequiredField { .. } => "MISSING_REQUIRED_FIELD",
            Self::Unbalanced { .. } => "UNBALANCED",
            Self::FormNotOpen => "FORM_NOT_OPEN",
        }
    }
}
