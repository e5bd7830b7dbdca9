//! Register User Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::ToSchema, prelude::*};
use serde::Deserialize;

use hotel_app::domain::users::data::NewUser;

use crate::{
    errors::ApiError,
    extensions::*,
    state::State,
    users::{errors::into_api_error, models::UserResponse},
};

/// Register User Request
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        NewUser {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            password: request.password,
            is_admin: false,
        }
    }
}

/// Register User Handler
///
/// Public sign-up. Admin accounts can only be created with the admin CLI.
#[endpoint(
    tags("users"),
    summary = "Register User",
    responses(
        (status_code = StatusCode::CREATED, description = "User created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid payload or taken email"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<UserResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request: CreateUserRequest = req.json_or_400().await?;

    let user = state
        .app
        .users
        .register_user(request.into())
        .await
        .map_err(into_api_error)?;

    res.add_header(LOCATION, format!("/user/{}", user.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(user.into()))
}
