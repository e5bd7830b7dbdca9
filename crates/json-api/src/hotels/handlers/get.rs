//! Get Hotel Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use hotel_app::domain::hotels::records::HotelUuid;

use crate::{
    errors::ApiError,
    extensions::*,
    hotels::{errors::into_api_error, models::HotelResponse},
    state::State,
};

/// Get Hotel Handler
#[endpoint(
    tags("hotels"),
    summary = "Get Hotel",
    security(("api_token" = []))
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<HotelResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let hotel: HotelUuid = id.into_id()?;

    let hotel = state
        .app
        .hotels
        .get_hotel(hotel)
        .await
        .map_err(into_api_error)?;

    Ok(Json(hotel.into()))
}
