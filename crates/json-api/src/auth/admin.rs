//! Admin-only route guard.

use salvo::prelude::*;
use tracing::warn;

use crate::{auth::middleware::reject, errors::ApiError, extensions::*};

/// Reject callers without the admin role. Must run after the auth middleware.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let caller = match depot.caller_or_401() {
        Ok(caller) => caller,
        Err(error) => {
            reject(res, ctrl, error);

            return;
        }
    };

    if !caller.is_admin {
        warn!(user = %caller.uuid, path = %req.uri().path(), "admin.denied");

        reject(res, ctrl, ApiError::unauthorized());

        return;
    }

    ctrl.call_next(req, depot, res).await;
}
