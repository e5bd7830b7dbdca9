//! Room Data

use thiserror::Error;

use crate::domain::hotels::records::HotelUuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoomValidationError {
    #[error("size is required")]
    Size,

    #[error("price is out of range")]
    Price,
}

/// New Room Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoom {
    pub hotel_uuid: HotelUuid,
    pub size: String,
    pub price: u64,
}

impl NewRoom {
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn validate(&self) -> Result<(), RoomValidationError> {
        if self.size.trim().is_empty() {
            return Err(RoomValidationError::Size);
        }

        if i64::try_from(self.price).is_err() {
            return Err(RoomValidationError::Price);
        }

        Ok(())
    }
}

/// Exact-match filters for room listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomFilter {
    pub hotel_uuid: Option<HotelUuid>,
    pub size: Option<String>,
}
