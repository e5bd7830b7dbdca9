//! Login Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use hotel_app::auth::Credentials;

use crate::{
    auth::into_api_error, errors::ApiError, extensions::*, state::State,
    users::models::UserResponse,
};

/// Login Request
#[derive(Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl From<LoginRequest> for Credentials {
    fn from(request: LoginRequest) -> Self {
        Credentials {
            email: request.email,
            password: request.password,
        }
    }
}

/// Login Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginResponse {
    pub user: UserResponse,

    /// Access token to send in the `X-Api-Token` header
    pub token: String,
}

/// Login Handler
///
/// Exchanges an email and password for an access token.
#[endpoint(tags("auth"), summary = "Authenticate")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<LoginResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request: LoginRequest = req.json_or_400().await?;

    let authenticated = state
        .app
        .auth
        .authenticate(request.into())
        .await
        .map_err(into_api_error)?;

    Ok(Json(LoginResponse {
        user: authenticated.user.into(),
        token: authenticated.token,
    }))
}
