//! Room Index Handler

use std::sync::Arc;

use salvo::{oapi::ToParameters, prelude::*};
use serde::Deserialize;

use hotel_app::domain::rooms::data::RoomFilter;

use crate::{
    errors::ApiError,
    extensions::*,
    rooms::{
        errors::into_api_error,
        models::{RoomResponse, RoomsPage},
    },
    state::State,
};

/// Room listing filters.
#[derive(Debug, Deserialize, ToParameters)]
#[salvo(parameters(default_parameter_in = Query))]
pub(crate) struct RoomsQuery {
    /// Only rooms with this size label
    size: Option<String>,

    /// Page number, starting at 1
    page: Option<String>,

    /// Page size, at most 100
    limit: Option<String>,
}

/// Room Index Handler
#[endpoint(
    tags("rooms"),
    summary = "List Rooms",
    security(("api_token" = []))
)]
pub(crate) async fn handler(
    query: RoomsQuery,
    depot: &mut Depot,
) -> Result<Json<RoomsPage>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let pagination = pagination(query.page, query.limit)?;

    let filter = RoomFilter {
        hotel_uuid: None,
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
