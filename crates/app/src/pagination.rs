//! Pagination

use thiserror::Error;

/// Page used when a listing request does not name one.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when a listing request does not name one.
pub const DEFAULT_LIMIT: u32 = 10;

/// Largest page size a single listing may request.
pub const MAX_LIMIT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("page must be at least 1")]
    InvalidPage,

    #[error("limit must be between 1 and {MAX_LIMIT}")]
    InvalidLimit,
}

/// A validated `{page, limit}` window over a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    limit: u32,
}

impl Pagination {
    /// Build a window from optional client-supplied values.
    ///
    /// # Errors
    ///
    /// Returns an error when `page` is zero or `limit` is outside `1..=MAX_LIMIT`.
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Result<Self, PaginationError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        if page == 0 {
            return Err(PaginationError::InvalidPage);
        }

        if limit == 0 || limit > MAX_LIMIT {
            return Err(PaginationError::InvalidLimit);
        }

        Ok(Self { page, limit })
    }

    #[must_use]
    pub const fn page(self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn limit(self) -> u32 {
        self.limit
    }

    /// Number of records to skip: `(page - 1) * limit`.
    #[must_use]
    pub fn offset(self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}
