//! Route definitions for the `/press-kit` singleton.

use axum::routing::get;
use axum::Router;

use crate::handlers::press_kit;
use crate::state::AppState;

/// ```text
/// GET /  -> get (public)
/// PUT /  -> upsert (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(press_kit::get).put(press_kit::upsert))
}
