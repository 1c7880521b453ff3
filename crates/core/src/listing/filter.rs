//! Composable per-field filter criteria.

use std::fmt;

use chrono::NaiveDate;

type Rule<R> = Box<dyn Fn(&R) -> bool>;

/// A set of independently-active filter rules combined with logical AND.
///
/// Each builder method adds one rule, or no rule at all when its criterion is
/// empty: an empty text box or an unset dropdown never constrains the list.
/// A set with zero rules matches every record.
pub struct FilterSet<R> {
    rules: Vec<Rule<R>>,
}

impl<R> fmt::Debug for FilterSet<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterSet")
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl<R> Default for FilterSet<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> FilterSet<R> {
    /// Creates an empty filter set that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a case-insensitive substring rule over a text field.
    ///
    /// An empty needle is inactive and adds no rule.
    #[must_use]
    pub fn contains<F>(mut self, needle: impl Into<String>, field: F) -> Self
    where
        F: Fn(&R) -> &str + 'static,
    {
        let needle = needle.into().to_lowercase();
        if !needle.is_empty() {
            self.rules
                .push(Box::new(move |record| field(record).to_lowercase().contains(&needle)));
        }
        self
    }

    /// Adds an exact-equality rule over an enum or category field.
    ///
    /// `None` means no selection and adds no rule.
    #[must_use]
    pub fn equals<T, F>(mut self, wanted: Option<T>, field: F) -> Self
    where
        T: PartialEq + 'static,
        F: Fn(&R) -> T + 'static,
    {
        if let Some(wanted) = wanted {
            self.rules.push(Box::new(move |record| field(record) == wanted));
        }
        self
    }

    /// Adds an inclusive date-range rule over a date field.
    ///
    /// A missing bound leaves that side unconstrained; two missing bounds add
    /// no rule.
    #[must_use]
    pub fn date_between<F>(
        mut self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        field: F,
    ) -> Self
    where
        F: Fn(&R) -> NaiveDate + 'static,
    {
        if from.is_some() || to.is_some() {
            self.rules.push(Box::new(move |record| {
                let date = field(record);
                from.is_none_or(|lower| date >= lower) && to.is_none_or(|upper| date <= upper)
            }));
        }
        self
    }

    /// Returns true if the set has no active rules (matches everything).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns true if the record satisfies every active rule.
    #[must_use]
    pub fn matches(&self, record: &R) -> bool {
        self.rules.iter().all(|rule| rule(record))
    }

    /// Scans a sequence and keeps the matching records in their stable order.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [R]) -> Vec<&'a R> {
        records.iter().filter(|record| self.matches(record)).collect()
    }
}
