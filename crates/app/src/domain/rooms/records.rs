//! Room Records

use jiff::Timestamp;

use crate::{domain::hotels::records::HotelUuid, uuids::TypedUuid};

/// Room UUID
pub type RoomUuid = TypedUuid<RoomRecord>;

/// Room Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRecord {
    pub uuid: RoomUuid,
    pub hotel_uuid: HotelUuid,

    /// Category label such as `small` or `kingsize`.
    pub size: String,

    /// Nightly price in minor currency units.
    pub price: u64,

    pub created_at: Timestamp,
}
