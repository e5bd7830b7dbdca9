//! Get Booking Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use hotel_app::domain::bookings::records::BookingUuid;

use crate::{
    bookings::{errors::into_api_error, models::BookingResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Get Booking Handler
///
/// Owners see their own bookings; admins see all of them.
#[endpoint(
    tags("bookings"),
    summary = "Get Booking",
    security(("api_token" = []))
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<BookingResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.caller_or_401()?;
    let booking: BookingUuid = id.into_id()?;

    let booking = state
        .app
        .bookings
        .get_booking(caller, booking)
        .await
        .map_err(into_api_error)?;

    Ok(Json(booking.into()))
}
