//! Booking Index Handler

use std::sync::Arc;

use salvo::{oapi::ToParameters, prelude::*};
use serde::Deserialize;

use hotel_app::domain::bookings::data::BookingFilter;

use crate::{
    bookings::{
        errors::into_api_error,
        models::{BookingResponse, BookingsPage},
    },
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Booking listing filters.
#[derive(Debug, Deserialize, ToParameters)]
#[salvo(parameters(default_parameter_in = Query))]
pub(crate) struct BookingsQuery {
    /// Only bookings made by this user
    #[serde(rename = "userID")]
    user_id: Option<String>,

    /// Page number, starting at 1
    page: Option<String>,

    /// Page size, at most 100
    limit: Option<String>,
}

/// Booking Index Handler
///
/// Admin only. Canceled bookings are included.
#[endpoint(
    tags("admin"),
    summary = "List Bookings",
    security(("api_token" = []))
)]
pub(crate) async fn handler(
    query: BookingsQuery,
    depot: &mut Depot,
) -> Result<Json<BookingsPage>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.caller_or_401()?;
    let pagination = pagination(query.page, query.limit)?;

    let filter = BookingFilter {
        user_uuid: query.user_id.parse_id_or_400()?,
        room_uuid: None,
    };

    let bookings = state
        .app
        .bookings
        .list_bookings(caller, filter, pagination)
        .await
        .map_err(into_api_error)?;

    Ok(Json(BookingsPage {
        results: bookings.len(),
        data: bookings.into_iter().map(BookingResponse::from).collect(),
        page: pagination.page(),
    }))
}
