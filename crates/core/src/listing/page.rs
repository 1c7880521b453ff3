//! Page slicing and per-screen paging state.

use jurnal_shared::config::ListingConfig;
use jurnal_shared::types::{PageMeta, PageRequest};

/// Cuts the visible slice out of a filtered sequence.
///
/// Requesting a page past the end yields an empty slice, never a panic;
/// clamping the page number back into range is the caller's job (see
/// [`ListState::set_page`]).
#[must_use]
pub fn page_of<'a, T>(items: &'a [T], request: &PageRequest) -> (&'a [T], PageMeta) {
    let total = u64::try_from(items.len()).unwrap_or(u64::MAX);
    let meta = PageMeta::new(request.page, request.per_page, total);

    let start = usize::try_from(request.offset())
        .unwrap_or(usize::MAX)
        .min(items.len());
    let len = usize::try_from(request.limit()).unwrap_or(usize::MAX);
    let end = start.saturating_add(len).min(items.len());

    (&items[start..end], meta)
}

/// Paging state for one list screen.
///
/// Owns the current [`PageRequest`]; page-size changes and filter changes
/// reset to the first page, and explicit page selection is clamped into
/// `[1, total_pages]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListState {
    request: PageRequest,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            request: PageRequest::default(),
        }
    }
}

impl ListState {
    /// Creates paging state using the configured default page size.
    #[must_use]
    pub fn from_config(config: &ListingConfig) -> Self {
        Self {
            request: PageRequest {
                page: 1,
                per_page: config.default_per_page.max(1),
            },
        }
    }

    /// Returns the current page request.
    #[must_use]
    pub const fn request(&self) -> PageRequest {
        self.request
    }

    /// Returns the current 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.request.page
    }

    /// Returns the current page size.
    #[must_use]
    pub const fn per_page(&self) -> u32 {
        self.request.per_page
    }

    /// Moves to a page, clamped into `[1, total_pages]`.
    pub fn set_page(&mut self, page: u32, total_pages: u32) {
        self.request.page = page.clamp(1, total_pages.max(1));
    }

    /// Changes the page size and resets to the first page.
    pub fn set_per_page(&mut self, per_page: u32) {
        self.request.per_page = per_page.max(1);
        self.request.page = 1;
    }

    /// Resets to the first page; called whenever the filter changes.
    pub fn reset(&mut self) {
        self.request.page = 1;
    }
}
