//! Get User Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use hotel_app::domain::users::records::UserUuid;

use crate::{
    errors::ApiError,
    extensions::*,
    state::State,
    users::{errors::into_api_error, models::UserResponse},
};

/// Get User Handler
#[endpoint(
    tags("users"),
    summary = "Get User",
    security(("api_token" = []))
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<UserResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user: UserUuid = id.into_id()?;

    let user = state
        .app
        .users
        .get_user(user)
        .await
        .map_err(into_api_error)?;

    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use hotel_app::domain::users::{MockUsersService, UsersServiceError};

    use crate::test_helpers::{TestState, USER, make_user};

    use super::*;

    fn make_service(users: MockUsersService) -> Service {
        TestState::new()
            .users(users)
            .service_as(USER, Router::with_path("user/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_200() -> TestResult {
        let uuid = UserUuid::new();
        let user = make_user(uuid, false);

        let mut users = MockUsersService::new();

        users
            .expect_get_user()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(user));

        let mut res = TestClient::get(format!("http://example.com/user/{uuid}"))
            .send(&make_service(users))
            .await;

        let body: UserResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, uuid.into_uuid());
        assert_eq!(body.email, "james@foo.com");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_user_returns_404() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_get_user()
            .once()
            .return_once(|_| Err(UsersServiceError::NotFound));

        let mut res = TestClient::get(format!("http://example.com/user/{}", UserUuid::new()))
            .send(&make_service(users))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body, json!({ "type": "error", "msg": "user not found" }));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_malformed_id_returns_400() -> TestResult {
        let mut users = MockUsersService::new();

        users.expect_get_user().never();

        let mut res = TestClient::get("http://example.com/user/not-a-uuid")
            .send(&make_service(users))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body, json!({ "type": "error", "msg": "invalid id given" }));

        Ok(())
    }
}
