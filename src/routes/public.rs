use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Public Router Module
///
/// Read-only content plus the visitor access gate. Nothing here needs a
/// session; the access-code endpoints are how a visitor obtains one.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // Liveness probe.
        .route("/health", get(handlers::health_check))
        // GET /restaurant/info, /menu, /gallery
        // Static site content served from the content repository.
        .route("/restaurant/info", get(handlers::get_restaurant_info))
        .route("/menu", get(handlers::get_menu))
        .route("/gallery", get(handlers::get_gallery))
        // GET /site/settings
        // Lets the frontend decide whether to show the code prompt.
        .route("/site/settings", get(handlers::get_site_settings))
        // POST /access/verify
        // Trades the shared code for a visitor session (or grants freely when unlocked).
        .route("/access/verify", post(handlers::verify_access_code))
        // GET /access/check/{session_id}
        .route(
            "/access/check/{session_id}",
            get(handlers::check_access_session),
        )
}
