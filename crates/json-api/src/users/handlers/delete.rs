//! Delete User Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use hotel_app::domain::users::records::UserUuid;

use crate::{
    errors::{ApiError, Message},
    extensions::*,
    state::State,
    users::errors::into_api_error,
};

/// Delete User Handler
///
/// Users may delete themselves; admins may delete anyone.
#[endpoint(
    tags("users"),
    summary = "Delete User",
    security(("api_token" = []))
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Message>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let caller = depot.caller_or_401()?;
    let user: UserUuid = id.into_id()?;

    state
        .app
        .users
        .delete_user(caller, user)
        .await
        .map_err(into_api_error)?;

    Ok(Json(Message::success(format!("user {user} deleted"))))
}
