//! One-based page cursor for the recipe listing.
//!
//! The cursor tracks which page the view is on and clamps every movement
//! into the range the latest [`PageMeta`] allows. Legacy responses carry no
//! metadata; the cursor then hides the paging controls and only enforces the
//! one-based floor.

use pagination::{PageMeta, clamp_page};

/// Cursor over a paginated collection.
///
/// Enabled states are derived from the page counts rather than read back
/// from the wire flags, so the cursor stays consistent after it has moved
/// away from the page the metadata was fetched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page: u64,
    meta: Option<PageMeta>,
}

impl PageCursor {
    /// Cursor positioned on the first page with no metadata yet.
    #[must_use]
    pub fn new() -> Self {
        Self { page: 1, meta: None }
    }

    /// Page the cursor currently points at.
    #[must_use]
    pub fn page(&self) -> u64 {
        self.page
    }

    /// Record the metadata of the page that was just fetched.
    ///
    /// The current page is re-clamped against the new page count, so a
    /// cursor left beyond the end of a shrunk collection snaps back to the
    /// last page. `None` marks a legacy response without metadata.
    pub fn apply(&mut self, meta: Option<PageMeta>) {
        if let Some(meta) = &meta {
            self.page = clamp_page(self.page, meta.total_pages);
        }
        self.meta = meta;
    }

    /// Move to `requested`, clamped into the navigable range.
    ///
    /// Returns the page actually selected. Without metadata only the
    /// one-based floor applies.
    pub fn request(&mut self, requested: u64) -> u64 {
        self.page = match &self.meta {
            Some(meta) => clamp_page(requested, meta.total_pages),
            None => requested.max(1),
        };
        self.page
    }

    /// Advance one page, returning the new page when one exists.
    pub fn next(&mut self) -> Option<u64> {
        if !self.next_enabled() {
            return None;
        }
        self.page += 1;
        Some(self.page)
    }

    /// Step back one page, returning the new page when one exists.
    pub fn previous(&mut self) -> Option<u64> {
        if !self.previous_enabled() {
            return None;
        }
        self.page -= 1;
        Some(self.page)
    }

    /// Whether a further page exists after the current one.
    #[must_use]
    pub fn next_enabled(&self) -> bool {
        self.meta
            .as_ref()
            .is_some_and(|meta| self.page < meta.total_pages)
    }

    /// Whether a page exists before the current one.
    #[must_use]
    pub fn previous_enabled(&self) -> bool {
        self.meta.is_some() && self.page > 1
    }

    /// Whether paging controls should be rendered at all.
    ///
    /// Legacy responses carry no metadata, so the listing renders as a
    /// single unpaginated collection.
    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.meta.is_some()
    }

    /// Return to the first page, keeping the last-known metadata.
    pub fn reset(&mut self) {
        self.page = 1;
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new()
    }
}
