//! Pagination types for list screens.

use serde::{Deserialize, Serialize};

/// Request parameters for paginated list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-indexed).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Number of items per page.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    10
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl PageRequest {
    /// Calculates the zero-based offset of the first item on this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page)
    }

    /// Returns the maximum number of items on this page.
    #[must_use]
    pub fn limit(&self) -> u64 {
        u64::from(self.per_page)
    }
}

/// Response wrapper for paginated data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items in the current page.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub meta: PageMeta,
}

/// Pagination metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Current page number.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
    /// Total number of items across all pages.
    pub total: u64,
    /// Total number of pages (never less than 1).
    pub total_pages: u32,
}

impl PageMeta {
    /// Creates pagination metadata for a list of `total` items.
    ///
    /// An empty list still has one (empty) page, so `total_pages` is never 0.
    #[must_use]
    pub fn new(page: u32, per_page: u32, total: u64) -> Self {
        let total_pages = if total == 0 || per_page == 0 {
            1
        } else {
            total.div_ceil(u64::from(per_page)).try_into().unwrap_or(u32::MAX)
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
        }
    }

    /// One-based index of the first item visible on this page, 0 when the
    /// page shows nothing.
    #[must_use]
    pub fn display_from(&self) -> u64 {
        let from = u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page) + 1;
        if self.total == 0 || from > self.total {
            0
        } else {
            from
        }
    }

    /// One-based index of the last item visible on this page, 0 when the
    /// page shows nothing.
    #[must_use]
    pub fn display_to(&self) -> u64 {
        if self.display_from() == 0 {
            0
        } else {
            (u64::from(self.page) * u64::from(self.per_page)).min(self.total)
        }
    }

    /// Human-readable range line for the table footer.
    #[must_use]
    pub fn display_range(&self) -> String {
        format!(
            "Showing {} to {} of {} entries",
            self.display_from(),
            self.display_to(),
            self.total
        )
    }
}

impl<T> PageResponse<T> {
    /// Creates a new paginated response.
    #[must_use]
    pub fn new(data: Vec<T>, page: u32, per_page: u32, total: u64) -> Self {
        Self {
            data,
            meta: PageMeta::new(page, per_page, total),
        }
    }
}
