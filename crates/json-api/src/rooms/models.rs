//! Room Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hotel_app::domain::rooms::records::RoomRecord;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RoomResponse {
    pub id: Uuid,

    /// Size label, e.g. `small`, `normal`, `kingsize`
    pub size: String,

    /// Nightly price in cents
    pub price: u64,

    #[serde(rename = "hotelID")]
    pub hotel_id: Uuid,
}

impl From<RoomRecord> for RoomResponse {
    fn from(room: RoomRecord) -> Self {
        Self {
            id: room.uuid.into_uuid(),
            size: room.size,
            price: room.price,
            hotel_id: room.hotel_uuid.into_uuid(),
        }
    }
}

/// A page of rooms.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RoomsPage {
    pub results: usize,
    pub data: Vec<RoomResponse>,
    pub page: u32,
}
