//! App Router

use salvo::Router;

use crate::{auth, bookings, healthcheck, hotels, rooms, users};

/// All API routes. State injection and request logging are added by the caller.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("auth").post(auth::login::handler))
        .push(Router::with_path("user").post(users::create::handler))
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(
                    Router::with_path("user/{id}")
                        .get(users::get::handler)
                        .put(users::update::handler)
                        .delete(users::delete::handler),
                )
                .push(
                    Router::with_path("hotel")
                        .get(hotels::index::handler)
                        .push(
                            Router::with_path("{id}")
                                .get(hotels::get::handler)
                                .push(Router::with_path("rooms").get(hotels::rooms::handler)),
                        ),
                )
                .push(
                    Router::with_path("room")
                        .get(rooms::index::handler)
                        .push(Router::with_path("{id}/book").post(rooms::book::handler)),
                )
                .push(
                    Router::with_path("booking/{id}")
                        .get(bookings::get::handler)
                        .delete(bookings::cancel::handler),
                )
                .push(
                    Router::with_path("admin")
                        .hoop(auth::admin::handler)
                        .push(Router::with_path("booking").get(bookings::index::handler))
                        .push(Router::with_path("user").get(users::index::handler)),
                ),
        )
}
