use axum::routing::post;
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// Routes mounted at `/upload`: `POST /` issues a presigned upload URL.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(upload::authorize))
}
