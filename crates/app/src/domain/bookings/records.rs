//! Booking Records

use jiff::Timestamp;

use crate::{
    domain::{
        bookings::availability::Stay, rooms::records::RoomUuid, users::records::UserUuid,
    },
    uuids::TypedUuid,
};

/// Booking UUID
pub type BookingUuid = TypedUuid<BookingRecord>;

/// Booking Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRecord {
    pub uuid: BookingUuid,
    pub room_uuid: RoomUuid,

    /// Owner of the booking; never changes.
    pub user_uuid: UserUuid,

    pub from_date: Timestamp,
    pub till_date: Timestamp,
    pub num_persons: u32,
    pub canceled: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl BookingRecord {
    /// Whether the booking still occupies its room.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.canceled
    }

    #[must_use]
    pub const fn stay(&self) -> Stay {
        Stay {
            from: self.from_date,
            till: self.till_date,
        }
    }
}
