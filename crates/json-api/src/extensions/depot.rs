//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::Depot;

use hotel_app::auth::Caller;

use crate::errors::ApiError;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError>;

    fn insert_caller(&mut self, caller: Caller);

    /// The caller resolved by the auth middleware.
    fn caller_or_401(&self) -> Result<Caller, ApiError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError> {
        self.obtain::<T>().map_err(|_ignored| ApiError::internal())
    }

    fn insert_caller(&mut self, caller: Caller) {
        self.inject(caller);
    }

    fn caller_or_401(&self) -> Result<Caller, ApiError> {
        self.obtain::<Caller>()
            .copied()
            .map_err(|_ignored| ApiError::unauthorized())
    }
}
