//! Hotel Rooms Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToParameters, extract::PathParam},
    prelude::*,
};
use serde::Deserialize;

use hotel_app::domain::{hotels::records::HotelUuid, rooms::data::RoomFilter};

use crate::{
    errors::ApiError,
    extensions::*,
    rooms::{
        errors::into_api_error,
        models::{RoomResponse, RoomsPage},
    },
    state::State,
};

/// Hotel room listing filters.
#[derive(Debug, Deserialize, ToParameters)]
#[salvo(parameters(default_parameter_in = Query))]
pub(crate) struct HotelRoomsQuery {
    /// Only rooms with this size label
    size: Option<String>,

    /// Page number, starting at 1
    page: Option<String>,

    /// Page size, at most 100
    limit: Option<String>,
}

/// Hotel Rooms Handler
///
/// An unknown hotel has no rooms, so it yields an empty page rather than a 404.
#[endpoint(
    tags("hotels"),
    summary = "List Hotel Rooms",
    security(("api_token" = []))
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    query: HotelRoomsQuery,
    depot: &mut Depot,
) -> Result<Json<RoomsPage>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let hotel: HotelUuid = id.into_id()?;
    let pagination = pagination(query.page, query.limit)?;

    let filter = RoomFilter {
        hotel_uuid: Some(hotel),
        size: query.size.filter(|size| !size.is_empty()),
    };

    let rooms = state
        .app
        .rooms
        .list_rooms(filter, pagination)
        .await
        .map_err(into_api_error)?;

    Ok(Json(RoomsPage {
        results: rooms.len(),
        data: rooms.into_iter().map(RoomResponse::from).collect(),
        page: pagination.page(),
    }))
}
