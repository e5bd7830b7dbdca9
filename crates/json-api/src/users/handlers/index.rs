//! User Index Handler

use std::sync::Arc;

use salvo::{oapi::ToParameters, prelude::*};
use serde::Deserialize;

use hotel_app::domain::users::data::UserFilter;

use crate::{
    errors::ApiError,
    extensions::*,
    state::State,
    users::{
        errors::into_api_error,
        models::{UserResponse, UsersPage},
    },
};

/// User listing filters.
#[derive(Debug, Deserialize, ToParameters)]
#[salvo(parameters(default_parameter_in = Query))]
pub(crate) struct UsersQuery {
    /// Only users with exactly this first name
    #[serde(rename = "firstName")]
    first_name: Option<String>,

    /// Page number, starting at 1
    page: Option<String>,

    /// Page size, at most 100
    limit: Option<String>,
}

/// User Index Handler
///
/// Admin only.
#[endpoint(
    tags("admin"),
    summary = "List Users",
    security(("api_token" = []))
)]
pub(crate) async fn handler(
    query: UsersQuery,
    depot: &mut Depot,
) -> Result<Json<UsersPage>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let pagination = pagination(query.page, query.limit)?;

    let filter = UserFilter {
        first_name: query.first_name.filter(|name| !name.is_empty()),
    };

    let users = state
        .app
        .users
        .list_users(filter, pagination)
        .await
        .map_err(into_api_error)?;

    Ok(Json(UsersPage {
        results: users.len(),
        data: users.into_iter().map(UserResponse::from).collect(),
        page: pagination.page(),
    }))
}
