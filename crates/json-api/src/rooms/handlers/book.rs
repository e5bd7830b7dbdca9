//! Book Room Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use hotel_app::domain::{bookings::data::NewBooking, rooms::records::RoomUuid};

use crate::{
    bookings::{errors::into_api_error, models::BookingResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Book Room Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookRoomRequest {
    /// Start of the stay (RFC 3339)
    pub from_date: String,

    /// End of the stay, exclusive (RFC 3339)
    pub till_date: String,

    pub num_persons: u32,
}

fn parse_date(value: &str, field: &str) -> Result<Timestamp, ApiError> {
    value
        .trim()
        .parse::<Timestamp>()
        .map_err(|_ignored| {
            ApiError::bad_request(format!("{field} must be an RFC 3339 timestamp"))
        })
}

/// Book Room Handler
///
/// Books the room for the calling user. Overlapping active bookings are rejected.
#[endpoint(
    tags("rooms"),
    summary = "Book Room",
    security(("api_token" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Booking created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid stay or already booked"),
        (status_code = StatusCode::NOT_FOUND, description = "Room not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<BookingResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.caller_or_401()?;
    let room: RoomUuid = id.into_id()?;
    let request: BookRoomRequest = req.json_or_400().await?;

    let booking = NewBooking {
        room_uuid: room,
        user_uuid: caller.uuid,
        from_date: parse_date(&request.from_date, "fromDate")?,
        till_date: parse_date(&request.till_date, "tillDate")?,
        num_persons: request.num_persons,
    };

    let booking = state
        .app
        .bookings
        .create_booking(booking)
        .await
        .map_err(into_api_error)?;

    res.add_header(LOCATION, format!("/booking/{}", booking.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(booking.into()))
}
