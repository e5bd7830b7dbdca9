//! Cancel Booking Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use hotel_app::domain::bookings::records::BookingUuid;

use crate::{
    bookings::errors::into_api_error,
    errors::{ApiError, Message},
    extensions::*,
    state::State,
};

/// Cancel Booking Handler
///
/// Canceling an already canceled booking succeeds again.
#[endpoint(
    tags("bookings"),
    summary = "Cancel Booking",
    security(("api_token" = []))
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Message>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.caller_or_401()?;
    let booking: BookingUuid = id.into_id()?;

    state
        .app
        .bookings
        .cancel_booking(caller, booking)
        .await
        .map_err(into_api_error)?;

    Ok(Json(Message::success(format!("booking {booking} canceled"))))
}
