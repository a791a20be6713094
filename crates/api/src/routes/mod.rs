pub mod auth;
pub mod bookings;
pub mod contact;
pub mod dashboard;
pub mod events;
pub mod health;
pub mod media;
pub mod mixes;
pub mod press_kit;
pub mod settings;
pub mod upload;

use axum::http::Uri;
use axum::Router;
use falcone_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/login                      login (public)
/// /auth/logout                     logout (admin)
///
/// /bookings                        create (public), list (admin)
/// /bookings/{id}                   get, update, delete (admin)
///
/// /events                          list (public), create (admin)
/// /events/{id}                     get (public), update, delete (admin)
/// /mixes                           list (public), create (admin)
/// /mixes/{id}                      get (public), update, delete (admin)
/// /media                           list (public), create (admin)
/// /media/{id}                      get (public), update, delete (admin)
///
/// /press-kit                       get (public), upsert (admin)
/// /settings                        get (public), upsert (admin)
///
/// /contact                         create (public), list (admin)
/// /contact/{id}                    get, mark read, delete (admin)
///
/// /upload                          presigned upload URL (admin)
/// /dashboard                       summary stats (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/bookings", bookings::router())
        .nest("/events", events::router())
        .nest("/mixes", mixes::router())
        .nest("/media", media::router())
        .nest("/press-kit", press_kit::router())
        .nest("/settings", settings::router())
        .nest("/contact", contact::router())
        .nest("/upload", upload::router())
        .nest("/dashboard", dashboard::router())
        .fallback(not_found)
}

/// JSON 404 for unknown API paths.
async fn not_found(uri: Uri) -> AppError {
    AppError::Core(CoreError::NotFoundBySlug {
        entity: "Route",
        slug: uri.path().to_string(),
    })
}
