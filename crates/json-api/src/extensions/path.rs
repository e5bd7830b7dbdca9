//! Path parameter parsing helpers.

use salvo::oapi::extract::PathParam;

use hotel_app::uuids::TypedUuid;

use crate::errors::ApiError;

pub(crate) trait PathIdExt {
    /// Parse a `{id}` segment, answering 400 "invalid id given" when it is not a UUID.
    fn into_id<T>(self) -> Result<TypedUuid<T>, ApiError>;
}

impl PathIdExt for PathParam<String> {
    fn into_id<T>(self) -> Result<TypedUuid<T>, ApiError> {
        TypedUuid::parse(&self.into_inner()).map_err(|_ignored| ApiError::invalid_id())
    }
}
