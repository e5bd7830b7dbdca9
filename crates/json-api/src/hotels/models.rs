//! Hotel Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hotel_app::domain::hotels::records::HotelRecord;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HotelResponse {
    pub id: Uuid,
    pub name: String,
    pub location: String,

    /// Rooms of this hotel, oldest first
    pub rooms: Vec<Uuid>,

    /// Star rating from 1 to 5
    pub rating: u8,
}

impl From<HotelRecord> for HotelResponse {
    fn from(hotel: HotelRecord) -> Self {
        Self {
            id: hotel.uuid.into_uuid(),
            name: hotel.name,
            location: hotel.location,
            rooms: hotel.rooms.into_iter().map(Into::into).collect(),
            rating: hotel.rating,
        }
    }
}

/// A page of hotels.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HotelsPage {
    pub results: usize,
    pub data: Vec<HotelResponse>,
    pub page: u32,
}
