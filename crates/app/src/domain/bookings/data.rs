//! Booking Data

use jiff::Timestamp;
use thiserror::Error;

use crate::domain::{
    bookings::availability::Stay, rooms::records::RoomUuid, users::records::UserUuid,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BookingValidationError {
    #[error("cannot book in the past")]
    InPast,

    #[error("fromDate should be before tillDate")]
    EmptyStay,

    #[error("numPersons should be greater than 0")]
    NoPersons,
}

/// New Booking Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub room_uuid: RoomUuid,
    pub user_uuid: UserUuid,
    pub from_date: Timestamp,
    pub till_date: Timestamp,
    pub num_persons: u32,
}

impl NewBooking {
    /// Check the request against the booking invariants as of `now`.
    ///
    /// # Errors
    ///
    /// Returns the first invariant the booking breaks.
    pub fn validate(&self, now: Timestamp) -> Result<(), BookingValidationError> {
        if self.from_date < now || self.till_date < now {
            return Err(BookingValidationError::InPast);
        }

        if self.from_date >= self.till_date {
            return Err(BookingValidationError::EmptyStay);
        }

        if self.num_persons == 0 {
            return Err(BookingValidationError::NoPersons);
        }

        Ok(())
    }

    #[must_use]
    pub const fn stay(&self) -> Stay {
        Stay {
            from: self.from_date,
            till: self.till_date,
        }
    }
}

/// Exact-match filters for booking listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingFilter {
    pub user_uuid: Option<UserUuid>,
    pub room_uuid: Option<RoomUuid>,
}
