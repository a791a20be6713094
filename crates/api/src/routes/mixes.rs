//! Route definitions for the `/mixes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::mixes;
use crate::state::AppState;

/// Routes mounted at `/mixes`.
///
/// ```text
/// GET    /      -> list (public; admins may pass all=true)
/// POST   /      -> create (admin)
/// GET    /{id}  -> get_by_id (public)
/// PATCH  /{id}  -> update (admin)
/// DELETE /{id}  -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(mixes::list).post(mixes::create))
        .route(
            "/{id}",
            get(mixes::get_by_id).patch(mixes::update).delete(mixes::delete),
        )
}
