//! Query string parsing helpers.

use std::str::FromStr;

use hotel_app::{pagination::Pagination, uuids::TypedUuid};

use crate::errors::ApiError;

/// Parse optional raw query values into typed ones.
pub(crate) trait QueryValueExt {
    fn parse_or_400<T: FromStr>(self, name: &str) -> Result<Option<T>, ApiError>;

    fn parse_id_or_400<T>(self) -> Result<Option<TypedUuid<T>>, ApiError>;
}

impl QueryValueExt for Option<String> {
    fn parse_or_400<T: FromStr>(self, name: &str) -> Result<Option<T>, ApiError> {
        self.filter(|value| !value.is_empty())
            .map(|value| value.trim().parse::<T>())
            .transpose()
            .map_err(|_ignored| ApiError::bad_request(format!("invalid {name} query parameter")))
    }

    fn parse_id_or_400<T>(self) -> Result<Option<TypedUuid<T>>, ApiError> {
        self.filter(|value| !value.is_empty())
            .map(|value| TypedUuid::parse(&value))
            .transpose()
            .map_err(|_ignored| ApiError::invalid_id())
    }
}

/// Build a page window from raw `page` and `limit` query values.
pub(crate) fn pagination(
    page: Option<String>,
    limit: Option<String>,
) -> Result<Pagination, ApiError> {
    Pagination::new(page.parse_or_400("page")?, limit.parse_or_400("limit")?)
        .map_err(|error| ApiError::bad_request(error.to_string()))
}
