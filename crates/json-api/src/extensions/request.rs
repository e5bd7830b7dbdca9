//! Request body parsing helpers.

use salvo::Request;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::ApiError;

pub(crate) trait RequestExt {
    /// Parse the JSON body, rejecting malformed payloads with the error envelope.
    async fn json_or_400<T: DeserializeOwned>(&mut self) -> Result<T, ApiError>;
}

impl RequestExt for Request {
    async fn json_or_400<T: DeserializeOwned>(&mut self) -> Result<T, ApiError> {
        self.parse_json::<T>().await.map_err(|error| {
            debug!("rejected request body: {error}");

            ApiError::bad_request("invalid JSON body")
        })
    }
}
