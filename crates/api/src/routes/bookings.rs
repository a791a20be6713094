//! Route definitions for the `/bookings` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::bookings;
use crate::state::AppState;

/// Routes mounted at `/bookings`.
///
/// ```text
/// GET    /      -> list (admin)
/// POST   /      -> create (public booking form)
/// GET    /{id}  -> get_by_id (admin)
/// PATCH  /{id}  -> update (admin)
/// DELETE /{id}  -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(bookings::list).post(bookings::create))
        .route(
            "/{id}",
            get(bookings::get_by_id)
                .patch(bookings::update)
                .delete(bookings::delete),
        )
}
