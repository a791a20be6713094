use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/settings`: `GET /` (public), `PUT /` (admin).
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(settings::get).put(settings::upsert))
}
