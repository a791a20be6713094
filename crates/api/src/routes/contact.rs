//! Route definitions for the `/contact` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/contact`.
///
/// ```text
/// GET    /      -> list (admin, ?unread=true)
/// POST   /      -> create (public contact form)
/// GET    /{id}  -> get_by_id (admin)
/// PATCH  /{id}  -> update read flag (admin)
/// DELETE /{id}  -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(contact::list).post(contact::create))
        .route(
            "/{id}",
            get(contact::get_by_id)
                .patch(contact::update)
                .delete(contact::delete),
        )
}
