//! Collection query value object and its wire serialisation.
//!
//! One `CollectionQuery` describes one fetch against a paginated collection
//! endpoint. The wire names (`page`, `limit`, `search`, `sortBy`,
//! `sortOrder`) and the omit-empty-search rule are the backend contract.

use std::fmt;

/// Default page size for collection listings.
pub const DEFAULT_PAGE_SIZE: u64 = 12;

/// Field a collection may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Recipe title.
    Title,
    /// Ingredient or category name.
    Name,
    /// Creation timestamp.
    CreatedAt,
    /// Last-update timestamp.
    UpdatedAt,
}

impl SortKey {
    /// Wire value for the `sortBy` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Name => "name",
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
        }
    }
}

/// Direction a sorted collection is returned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest value first.
    Ascending,
    /// Largest value first.
    Descending,
}

impl SortOrder {
    /// Wire value for the `sortOrder` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

/// Sort selection: field plus direction, always sent as a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    /// Field to sort by.
    pub key: SortKey,
    /// Direction to sort in.
    pub order: SortOrder,
}

/// Domain error returned when query values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValidationError {
    /// Page numbers are one-based; zero was supplied.
    ZeroPage,
    /// Limit must allow at least one item per page.
    ZeroLimit,
}

impl fmt::Display for QueryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroPage => write!(f, "page must be at least one"),
            Self::ZeroLimit => write!(f, "limit must be greater than zero"),
        }
    }
}

impl std::error::Error for QueryValidationError {}

/// One fetch request against a paginated collection endpoint.
///
/// ## Invariants
/// - `page >= 1` and `limit > 0`; the builder-style mutators raise
///   out-of-range values to the nearest valid one instead of failing.
/// - An empty `search` is omitted from the wire form entirely.
///
/// # Examples
/// ```
/// use client::domain::{CollectionQuery, SortKey, SortOrder, SortSpec};
///
/// let query = CollectionQuery::default()
///     .with_search("pasta")
///     .with_sort(Some(SortSpec {
///         key: SortKey::Name,
///         order: SortOrder::Ascending,
///     }));
/// let pairs = query.to_pairs();
/// assert!(pairs.contains(&("search", "pasta".to_owned())));
/// assert!(pairs.contains(&("sortOrder", "ASC".to_owned())));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionQuery {
    page: u64,
    limit: u64,
    search: String,
    sort: Option<SortSpec>,
}

impl Default for CollectionQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            search: String::new(),
            sort: None,
        }
    }
}

impl CollectionQuery {
    /// Construct a query with explicit page and limit.
    ///
    /// # Errors
    ///
    /// Returns a [`QueryValidationError`] when `page` or `limit` is zero.
    pub fn try_new(page: u64, limit: u64) -> Result<Self, QueryValidationError> {
        if page == 0 {
            return Err(QueryValidationError::ZeroPage);
        }
        if limit == 0 {
            return Err(QueryValidationError::ZeroLimit);
        }
        Ok(Self {
            page,
            limit,
            search: String::new(),
            sort: None,
        })
    }

    /// One-based page number to fetch.
    #[must_use]
    pub const fn page(&self) -> u64 {
        self.page
    }

    /// Maximum number of items per page.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// Search term, possibly empty.
    #[must_use]
    pub fn search(&self) -> &str {
        self.search.as_str()
    }

    /// Sort selection, when one is requested.
    #[must_use]
    pub const fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    /// Replace the page number, raising zero to one.
    #[must_use]
    pub fn with_page(mut self, page: u64) -> Self {
        self.page = page.max(1);
        self
    }

    /// Replace the page limit, raising zero to one.
    #[must_use]
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Replace the search term.
    #[must_use]
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.to_owned();
        self
    }

    /// Replace the sort selection.
    #[must_use]
    pub fn with_sort(mut self, sort: Option<SortSpec>) -> Self {
        self.sort = sort;
        self
    }

    /// Render the query as wire parameter pairs.
    ///
    /// `search` is omitted when empty; `sortBy`/`sortOrder` travel together
    /// or not at all.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sortBy", sort.key.as_str().to_owned()));
            pairs.push(("sortOrder", sort.order.as_str().to_owned()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 12, QueryValidationError::ZeroPage)]
    #[case(1, 0, QueryValidationError::ZeroLimit)]
    fn rejects_out_of_range_counts(
        #[case] page: u64,
        #[case] limit: u64,
        #[case] expected: QueryValidationError,
    ) {
        let err = CollectionQuery::try_new(page, limit).expect_err("invalid counts must fail");
        assert_eq!(err, expected);
    }

    #[test]
    fn default_targets_the_first_page() {
        let query = CollectionQuery::default();
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), DEFAULT_PAGE_SIZE);
        assert!(query.search().is_empty());
        assert!(query.sort().is_none());
    }

    #[test]
    fn omits_empty_search_from_wire_pairs() {
        let pairs = CollectionQuery::default().to_pairs();
        assert_eq!(
            pairs,
            vec![("page", "1".to_owned()), ("limit", "12".to_owned())]
        );
    }

    #[test]
    fn renders_search_and_sort_pairs() {
        let query = CollectionQuery::default()
            .with_page(3)
            .with_search("pasta")
            .with_sort(Some(SortSpec {
                key: SortKey::Name,
                order: SortOrder::Ascending,
            }));
        assert_eq!(
            query.to_pairs(),
            vec![
                ("page", "3".to_owned()),
                ("limit", "12".to_owned()),
                ("search", "pasta".to_owned()),
                ("sortBy", "name".to_owned()),
                ("sortOrder", "ASC".to_owned()),
            ]
        );
    }

    #[rstest]
    #[case(0, 1)]
    #[case(7, 7)]
    fn mutators_raise_zero_to_the_nearest_valid_value(#[case] page: u64, #[case] expected: u64) {
        let query = CollectionQuery::default().with_page(page);
        assert_eq!(query.page(), expected);
    }

    #[test]
    fn descending_sort_renders_upper_case() {
        let query = CollectionQuery::default().with_sort(Some(SortSpec {
            key: SortKey::CreatedAt,
            order: SortOrder::Descending,
        }));
        let pairs = query.to_pairs();
        assert!(pairs.contains(&("sortBy", "createdAt".to_owned())));
        assert!(pairs.contains(&("sortOrder", "DESC".to_owned())));
    }
}
