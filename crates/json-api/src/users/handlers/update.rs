//! Update User Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use hotel_app::domain::users::{data::UserUpdate, records::UserUuid};

use crate::{
    errors::{ApiError, Message},
    extensions::*,
    state::State,
    users::errors::into_api_error,
};

/// Update User Request
///
/// Missing or empty fields leave the stored value unchanged.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<UpdateUserRequest> for UserUpdate {
    fn from(request: UpdateUserRequest) -> Self {
        UserUpdate {
            first_name: request.first_name,
            last_name: request.last_name,
        }
    }
}

/// Update User Handler
///
/// Users may update themselves; admins may update anyone.
#[endpoint(
    tags("users"),
    summary = "Update User",
    security(("api_token" = []))
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<Message>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.caller_or_401()?;
    let user: UserUuid = id.into_id()?;
    let request: UpdateUserRequest = req.json_or_400().await?;

    state
        .app
        .users
        .update_user(caller, user, request.into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(Message::success(format!("user {user} updated"))))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use hotel_app::domain::users::{MockUsersService, UsersServiceError, data::UserValidationError};

    use crate::test_helpers::{ADMIN, TEST_USER_UUID, TestState, USER, make_user};

    use super::*;

    fn make_service(users: MockUsersService, caller: hotel_app::auth::Caller) -> Service {
        TestState::new()
            .users(users)
            .service_as(caller, Router::with_path("user/{id}").put(handler))
    }

    #[tokio::test]
    async fn test_update_self_returns_success_message() -> TestResult {
        let user = make_user(TEST_USER_UUID, false);

        let mut users = MockUsersService::new();

        users
            .expect_update_user()
            .once()
            .withf(|caller, uuid, update| {
                *caller == USER
                    && *uuid == TEST_USER_UUID
                    && *update
                        == UserUpdate {
                            first_name: Some("Jim".to_string()),
                            last_name: None,
                        }
            })
            .return_once(move |_, _, _| Ok(user));

        let mut res = TestClient::put(format!("http://example.com/user/{TEST_USER_UUID}"))
            .json(&json!({ "firstName": "Jim" }))
            .send(&make_service(users, USER))
            .await;

        let body: Message = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body,
            Message::success(format!("user {TEST_USER_UUID} updated"))
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_update_forwards_admin_caller() -> TestResult {
        let user = make_user(TEST_USER_UUID, false);

        let mut users = MockUsersService::new();

        users
            .expect_update_user()
            .once()
            .withf(|caller, uuid, _| *caller == ADMIN && *uuid == TEST_USER_UUID)
            .return_once(move |_, _, _| Ok(user));

        let res = TestClient::put(format!("http://example.com/user/{TEST_USER_UUID}"))
            .json(&json!({ "lastName": "Bar" }))
            .send(&make_service(users, ADMIN))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_someone_else_returns_401() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_update_user()
            .once()
            .return_once(|_, _, _| Err(UsersServiceError::Unauthorized));

        let res = TestClient::put(format!("http://example.com/user/{}", UserUuid::new()))
            .json(&json!({ "firstName": "Jim" }))
            .send(&make_service(users, USER))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_invalid_name_returns_400() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_update_user()
            .once()
            .return_once(|_, _, _| Err(UsersServiceError::Invalid(UserValidationError::FirstName)));

        let mut res = TestClient::put(format!("http://example.com/user/{TEST_USER_UUID}"))
            .json(&json!({ "firstName": "J" }))
            .send(&make_service(users, USER))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body["type"], "error");

        Ok(())
    }
}
