//! Booking Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hotel_app::domain::bookings::records::BookingRecord;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookingResponse {
    pub id: Uuid,

    #[serde(rename = "roomID")]
    pub room_id: Uuid,

    #[serde(rename = "userID")]
    pub user_id: Uuid,

    /// Start of the stay (RFC 3339)
    pub from_date: String,

    /// End of the stay, exclusive (RFC 3339)
    pub till_date: String,

    pub num_persons: u32,
    pub canceled: bool,
}

impl From<BookingRecord> for BookingResponse {
    fn from(booking: BookingRecord) -> Self {
        Self {
            id: booking.uuid.into_uuid(),
            room_id: booking.room_uuid.into_uuid(),
            user_id: booking.user_uuid.into_uuid(),
            from_date: booking.from_date.to_string(),
            till_date: booking.till_date.to_string(),
            num_persons: booking.num_persons,
            canceled: booking.canceled,
        }
    }
}

/// A page of bookings.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookingsPage {
    pub results: usize,
    pub data: Vec<BookingResponse>,
    pub page: u32,
}
