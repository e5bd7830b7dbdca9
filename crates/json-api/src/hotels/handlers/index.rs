//! Hotel Index Handler

use std::sync::Arc;

use salvo::{oapi::ToParameters, prelude::*};
use serde::Deserialize;

use hotel_app::domain::hotels::data::HotelFilter;

use crate::{
    errors::ApiError,
    extensions::*,
    hotels::{
        errors::into_api_error,
        models::{HotelResponse, HotelsPage},
    },
    state::State,
};

/// Hotel listing filters.
#[derive(Debug, Deserialize, ToParameters)]
#[salvo(parameters(default_parameter_in = Query))]
pub(crate) struct HotelsQuery {
    /// Only hotels with exactly this star rating
    rating: Option<String>,

    /// Page number, starting at 1
    page: Option<String>,

    /// Page size, at most 100
    limit: Option<String>,
}

/// Hotel Index Handler
#[endpoint(
    tags("hotels"),
    summary = "List Hotels",
    security(("api_token" = []))
)]
pub(crate) async fn handler(
    query: HotelsQuery,
    depot: &mut Depot,
) -> Result<Json<HotelsPage>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let pagination = pagination(query.page, query.limit)?;

    let filter = HotelFilter {
        rating: query.rating.parse_or_400("rating")?,
    };

    let hotels = state
        .app
        .hotels
        .list_hotels(filter, pagination)
        .await
        .map_err(into_api_error)?;

    Ok(Json(HotelsPage {
        results: hotels.len(),
        data: hotels.into_iter().map(HotelResponse::from).collect(),
        page: pagination.page(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use hotel_app::{
        domain::{
            hotels::{MockHotelsService, records::HotelUuid},
            rooms::records::RoomUuid,
        },
        pagination::Pagination,
    };

    use crate::test_helpers::{TestState, USER, make_hotel};

    use super::*;

    fn make_service(hotels: MockHotelsService) -> Service {
        TestState::new()
            .hotels(hotels)
            .service_as(USER, Router::with_path("hotel").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_hotels_with_room_ids() -> TestResult {
        let hotel = HotelUuid::new();
        let room = RoomUuid::new();

        let mut hotels = MockHotelsService::new();

        hotels
            .expect_list_hotels()
            .once()
            .withf(|filter, pagination| {
                *filter == HotelFilter::default() && *pagination == Pagination::default()
            })
            .return_once(move |_, _| Ok(vec![make_hotel(hotel, vec![room])]));

        let mut res = TestClient::get("http://example.com/hotel")
            .send(&make_service(hotels))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["results"], 1);
        assert_eq!(body["page"], 1);
        assert_eq!(body["data"][0]["id"], json!(hotel.into_uuid()));
        assert_eq!(body["data"][0]["rooms"], json!([room.into_uuid()]));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_filters_by_rating() -> TestResult {
        let mut hotels = MockHotelsService::new();

        hotels
            .expect_list_hotels()
            .once()
            .withf(|filter, _| filter.rating == Some(4))
            .return_once(|_, _| Ok(vec![]));

        let mut res = TestClient::get("http://example.com/hotel?rating=4")
            .send(&make_service(hotels))
            .await;

        let body: HotelsPage = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.data.is_empty(), "no hotels means an empty page");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_non_numeric_rating_returns_400() -> TestResult {
        let mut hotels = MockHotelsService::new();

        hotels.expect_list_hotels().never();

        let res = TestClient::get("http://example.com/hotel?rating=five")
            .send(&make_service(hotels))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
