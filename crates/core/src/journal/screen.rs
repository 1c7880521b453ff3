//! The journal list screen: store scan → filter → page → table.

use chrono::NaiveDate;
use tracing::{debug, info};

use jurnal_shared::AppConfig;
use jurnal_shared::types::{JournalEntryId, PageMeta};

use super::controller::EntryController;
use super::error::JournalError;
use super::types::JournalEntry;
use crate::listing::{FilterSet, ListState, page_of};
use crate::store::InsertOrder;

/// Active filter criteria for the journal list.
///
/// Empty strings and `None` bounds are inactive; every mutation resets the
/// list back to its first page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalFilter {
    /// Substring match over the voucher number.
    pub number: String,
    /// Substring match over who recorded the entry.
    pub recorded_by: String,
    /// Inclusive lower date bound.
    pub from: Option<NaiveDate>,
    /// Inclusive upper date bound.
    pub to: Option<NaiveDate>,
}

impl JournalFilter {
    fn to_filter_set(&self) -> FilterSet<JournalEntry> {
        FilterSet::new()
            .contains(self.number.clone(), |e: &JournalEntry| {
                e.entry_number.as_str()
            })
            .contains(self.recorded_by.clone(), |e: &JournalEntry| {
                e.recorded_by.as_str()
            })
            .date_between(self.from, self.to, |e: &JournalEntry| e.entry_date)
    }
}

/// One journal screen: entry editor plus the filtered, paginated table.
#[derive(Debug)]
pub struct JournalScreen {
    controller: EntryController,
    filter: JournalFilter,
    list: ListState,
}

impl JournalScreen {
    /// Creates a screen with the configured default page size.
    ///
    /// New entries show newest-first, as on the source screens.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            controller: EntryController::new(InsertOrder::Prepend),
            filter: JournalFilter::default(),
            list: ListState::from_config(&config.listing),
        }
    }

    /// Returns the entry editor for form interactions.
    pub fn controller(&mut self) -> &mut EntryController {
        &mut self.controller
    }

    /// Returns the committed entries in display order, unfiltered.
    #[must_use]
    pub fn entries(&self) -> &[JournalEntry] {
        self.controller.entries()
    }

    /// Validates and commits the open draft, logging the outcome.
    ///
    /// # Errors
    ///
    /// Propagates the controller's validation errors; the form stays open
    /// and the draft is preserved.
    pub fn submit(&mut self) -> Result<JournalEntryId, JournalError> {
        match self.controller.submit() {
            Ok(id) => {
                info!(entry_id = %id, "journal entry committed");
                Ok(id)
            }
            Err(err) => {
                debug!(code = err.error_code(), error = %err, "journal submit rejected");
                Err(err)
            }
        }
    }

    /// Confirms the pending delete, logging the outcome.
    pub fn confirm_delete(&mut self) -> bool {
        let pending = self.controller.pending_delete();
        let deleted = self.controller.confirm_delete();
        match (deleted, pending) {
            (true, Some(id)) => info!(entry_id = %id, "journal entry deleted"),
            (false, Some(id)) => debug!(entry_id = %id, "delete target already gone"),
            _ => {}
        }
        deleted
    }

    /// Returns the visible rows and the page metadata for the table footer.
    #[must_use]
    pub fn visible(&self) -> (Vec<&JournalEntry>, PageMeta) {
        let filtered = self.filter.to_filter_set().apply(self.controller.entries());
        let (slice, meta) = page_of(&filtered, &self.list.request());
        (slice.to_vec(), meta)
    }

    /// Returns how many entries survive the active filter.
    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.filter
            .to_filter_set()
            .apply(self.controller.entries())
            .len()
    }

    /// Returns the active filter criteria.
    #[must_use]
    pub const fn filter(&self) -> &JournalFilter {
        &self.filter
    }

    /// Sets the voucher-number filter and resets to the first page.
    pub fn set_number_filter(&mut self, needle: impl Into<String>) {
        self.filter.number = needle.into();
        self.list.reset();
    }

    /// Sets the recorded-by filter and resets to the first page.
    pub fn set_recorded_by_filter(&mut self, needle: impl Into<String>) {
        self.filter.recorded_by = needle.into();
        self.list.reset();
    }

    /// Sets the date-range filter and resets to the first page.
    pub fn set_date_filter(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.filter.from = from;
        self.filter.to = to;
        self.list.reset();
    }

    /// Clears every filter criterion and resets to the first page.
    pub fn clear_filters(&mut self) {
        self.filter = JournalFilter::default();
        self.list.reset();
    }

    /// Returns the current 1-based page number.
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.list.page()
    }

    /// Moves to a page, clamped into the filtered sequence's page range.
    pub fn set_page(&mut self, page: u32) {
        let (_, meta) = self.visible();
        self.list.set_page(page, meta.total_pages);
    }

    /// Changes the page size and resets to the first page.
    pub fn set_per_page(&mut self, per_page: u32) {
        self.list.set_per_page(per_page);
    }
}
