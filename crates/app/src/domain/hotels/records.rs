//! Hotel Records

use jiff::Timestamp;

use crate::{domain::rooms::records::RoomUuid, uuids::TypedUuid};

/// Hotel UUID
pub type HotelUuid = TypedUuid<HotelRecord>;

/// Hotel Record
#[derive(Debug, Clone, PartialEq)]
pub struct HotelRecord {
    pub uuid: HotelUuid,
    pub name: String,
    pub location: String,
    pub rating: u8,

    /// Rooms of this hotel, oldest first.
    pub rooms: Vec<RoomUuid>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
