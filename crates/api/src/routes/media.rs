//! Route definitions for the `/media` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// Routes mounted at `/media`.
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
        .route("/", get(media::list).post(media::create))
        .route(
            "/{id}",
            get(media::get_by_id).patch(media::update).delete(media::delete),
        )
}
