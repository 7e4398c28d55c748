//! Page metadata and cursor arithmetic.
//!
//! `PageMeta` mirrors the wire envelope's `meta` object. The invariants are
//! the backend contract: `totalPages` is the ceiling of `total / limit`,
//! `hasNextPage` holds exactly when `page < totalPages`, and
//! `hasPreviousPage` holds exactly when `page > 1`.

use serde::{Deserialize, Serialize};

/// Pagination metadata for one page of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Total number of items in the collection.
    pub total: u64,
    /// One-based page number this metadata describes.
    pub page: u64,
    /// Maximum number of items per page.
    pub limit: u64,
    /// Total number of pages at the current limit.
    pub total_pages: u64,
    /// Whether a page exists after this one.
    pub has_next_page: bool,
    /// Whether a page exists before this one.
    pub has_previous_page: bool,
}

/// Errors raised when constructing [`PageMeta`] from raw counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageMetaError {
    /// The page limit was zero.
    #[error("page limit must be greater than zero")]
    ZeroLimit,
    /// The page number was zero; pages are one-based.
    #[error("page number must be at least one")]
    ZeroPage,
}

impl PageMeta {
    /// Derive consistent metadata from raw counts.
    ///
    /// `total_pages` and the boundary flags are computed rather than
    /// accepted, so a value built here always satisfies the invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PageMetaError::ZeroLimit`] when `limit` is zero and
    /// [`PageMetaError::ZeroPage`] when `page` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagination::PageMeta;
    ///
    /// let meta = PageMeta::try_new(37, 1, 12)?;
    /// assert_eq!(meta.total_pages, 4);
    /// assert!(meta.has_next_page);
    /// assert!(!meta.has_previous_page);
    /// # Ok::<(), pagination::PageMetaError>(())
    /// ```
    pub fn try_new(total: u64, page: u64, limit: u64) -> Result<Self, PageMetaError> {
        if limit == 0 {
            return Err(PageMetaError::ZeroLimit);
        }
        if page == 0 {
            return Err(PageMetaError::ZeroPage);
        }
        let total_pages = total.div_ceil(limit);
        Ok(Self {
            total,
            page,
            limit,
            total_pages,
            has_next_page: page < total_pages,
            has_previous_page: page > 1,
        })
    }

    /// Report whether wire-supplied metadata satisfies the invariants.
    ///
    /// Metadata decoded from a response is returned verbatim to callers;
    /// this check lets adapters log drift without rejecting the page.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.limit != 0
            && self.page != 0
            && self.total_pages == self.total.div_ceil(self.limit)
            && self.has_next_page == (self.page < self.total_pages)
            && self.has_previous_page == (self.page > 1)
    }
}

/// Clamp a requested page number into the navigable range.
///
/// The range is `[1, total_pages]`, widened to `[1, 1]` when the collection
/// reports no pages at all, so a cursor never leaves one-based space.
///
/// # Examples
///
/// ```
/// use pagination::clamp_page;
///
/// assert_eq!(clamp_page(0, 4), 1);
/// assert_eq!(clamp_page(9, 4), 4);
/// assert_eq!(clamp_page(3, 0), 1);
/// ```
#[must_use]
pub fn clamp_page(requested: u64, total_pages: u64) -> u64 {
    requested.clamp(1, total_pages.max(1))
}
