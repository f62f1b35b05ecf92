use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// Admin Router Module
///
/// Nested under `/admin`. Login and session check are reachable without a
/// session; every other handler takes the `AdminSession` extractor and
/// answers 401 before doing any work when the bearer token is missing,
/// malformed, unknown or expired.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        // POST /admin/login
        .route("/login", post(handlers::admin_login))
        // GET /admin/check/{session_id}
        .route("/check/{session_id}", get(handlers::check_admin_session))
        // PUT /admin/site/settings
        // Locks or unlocks the visitor gate.
        .route("/site/settings", put(handlers::update_site_settings))
        // GET /admin/menu
        .route("/menu", get(handlers::get_admin_menu))
        // PUT /admin/menu/{category_id}
        // Wholesale replacement of a category's name and items.
        .route("/menu/{category_id}", put(handlers::update_menu_category))
        // POST /admin/menu/{category_id}/items
        .route("/menu/{category_id}/items", post(handlers::add_menu_item))
        // DELETE /admin/menu/{category_id}/items/{item_index}
        .route(
            "/menu/{category_id}/items/{item_index}",
            delete(handlers::delete_menu_item),
        )
        // GET /admin/access-logs
        .route("/access-logs", get(handlers::get_access_logs))
}
