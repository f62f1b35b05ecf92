use crate::{
    AppState,
    auth::{AdminSession, CallerMetadata},
    error::{AppError, Result},
    extract::{ApiJson, ApiPath},
    models::{
        AccessLogEntry, AccessRequest, AccessResponse, ActionResponse, AdminLoginRequest,
        ErrorBody, GalleryItem, HealthStatus, MenuCategory, MenuCategoryUpdate, MenuItem,
        RestaurantInfo, SessionCheck, SettingsUpdateResponse, SiteSettings,
    },
};
use axum::{Json, extract::State};

// --- Public Content ---

/// health_check
///
/// [Public Route] Liveness probe for load balancers.
#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Service is up", body = HealthStatus))
)]
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
    })
}

/// get_restaurant_info
///
/// [Public Route] Name, hero banner, story and contact details.
#[utoipa::path(
    get,
    path = "/api/restaurant/info",
    responses(
        (status = 200, description = "Restaurant information", body = RestaurantInfo),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
pub async fn get_restaurant_info(State(state): State<AppState>) -> Result<Json<RestaurantInfo>> {
    Ok(Json(state.repo.restaurant_info().await?))
}

#[utoipa::path(
    get,
    path = "/api/menu",
    responses(
        (status = 200, description = "Menu categories in display order", body = [MenuCategory]),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
pub async fn get_menu(State(state): State<AppState>) -> Result<Json<Vec<MenuCategory>>> {
    Ok(Json(state.repo.menu().await?))
}

#[utoipa::path(
    get,
    path = "/api/gallery",
    responses(
        (status = 200, description = "Gallery images", body = [GalleryItem]),
        (status = 500, description = "Internal error", body = ErrorBody)
    )
)]
pub async fn get_gallery(State(state): State<AppState>) -> Result<Json<Vec<GalleryItem>>> {
    Ok(Json(state.repo.gallery().await?))
}

/// get_site_settings
///
/// [Public Route] Tells the frontend whether to show the access-code gate.
#[utoipa::path(
    get,
    path = "/api/site/settings",
    responses((status = 200, description = "Current lock status", body = SiteSettings))
)]
pub async fn get_site_settings(State(state): State<AppState>) -> Json<SiteSettings> {
    Json(state.settings.snapshot())
}

// --- Visitor Access ---

/// verify_access_code
///
/// [Public Route] Exchanges the shared access code for a visitor session.
/// A wrong code is a 200 with `success = false`, never an error status.
#[utoipa::path(
    post,
    path = "/api/access/verify",
    request_body = AccessRequest,
    responses((status = 200, description = "Verification outcome", body = AccessResponse))
)]
pub async fn verify_access_code(
    State(state): State<AppState>,
    CallerMetadata(metadata): CallerMetadata,
    ApiJson(payload): ApiJson<AccessRequest>,
) -> Json<AccessResponse> {
    Json(state.gate.verify(&payload.code, metadata))
}

#[utoipa::path(
    get,
    path = "/api/access/check/{session_id}",
    params(("session_id" = String, Path, description = "Visitor session id")),
    responses((status = 200, description = "Session validity", body = SessionCheck))
)]
pub async fn check_access_session(
    State(state): State<AppState>,
    ApiPath(session_id): ApiPath<String>,
) -> Json<SessionCheck> {
    Json(state.gate.check_session(&session_id))
}

// --- Admin Session ---

/// admin_login
///
/// [Public Route] Exchanges the admin password for an admin session id, to
/// be sent back as `Authorization: Bearer <id>`.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = AdminLoginRequest,
    responses((status = 200, description = "Login outcome", body = AccessResponse))
)]
pub async fn admin_login(
    State(state): State<AppState>,
    CallerMetadata(metadata): CallerMetadata,
    ApiJson(payload): ApiJson<AdminLoginRequest>,
) -> Json<AccessResponse> {
    Json(state.admin.login(&payload.password, metadata))
}

#[utoipa::path(
    get,
    path = "/api/admin/check/{session_id}",
    params(("session_id" = String, Path, description = "Admin session id")),
    responses((status = 200, description = "Session validity", body = SessionCheck))
)]
pub async fn check_admin_session(
    State(state): State<AppState>,
    ApiPath(session_id): ApiPath<String>,
) -> Json<SessionCheck> {
    Json(state.admin.check_session(&session_id))
}

// --- Admin Operations ---
//
// Every handler below takes `AdminSession` first, so unauthorized requests
// are turned away before the body is parsed or any store is touched.

/// update_site_settings
///
/// [Admin Route] Locks or unlocks the visitor gate.
#[utoipa::path(
    put,
    path = "/api/admin/site/settings",
    request_body = SiteSettings,
    responses(
        (status = 200, description = "Settings updated", body = SettingsUpdateResponse),
        (status = 401, description = "Missing or invalid admin session", body = ErrorBody)
    )
)]
pub async fn update_site_settings(
    _admin: AdminSession,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SiteSettings>,
) -> Json<SettingsUpdateResponse> {
    let settings = state.settings.set_locked(payload.is_locked);
    tracing::info!(is_locked = settings.is_locked, "site settings updated");

    Json(SettingsUpdateResponse {
        success: true,
        message: "Paramètres mis à jour".to_string(),
        settings,
    })
}

#[utoipa::path(
    get,
    path = "/api/admin/menu",
    responses(
        (status = 200, description = "Full menu", body = [MenuCategory]),
        (status = 401, description = "Missing or invalid admin session", body = ErrorBody)
    )
)]
pub async fn get_admin_menu(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<Vec<MenuCategory>>> {
    Ok(Json(state.repo.menu().await?))
}

/// update_menu_category
///
/// [Admin Route] Replaces a category's name and its whole item list.
#[utoipa::path(
    put,
    path = "/api/admin/menu/{category_id}",
    params(("category_id" = String, Path, description = "Category slug")),
    request_body = MenuCategoryUpdate,
    responses(
        (status = 200, description = "Category replaced", body = ActionResponse),
        (status = 401, description = "Missing or invalid admin session", body = ErrorBody),
        (status = 404, description = "Unknown category", body = ErrorBody)
    )
)]
pub async fn update_menu_category(
    _admin: AdminSession,
    State(state): State<AppState>,
    ApiPath(category_id): ApiPath<String>,
    ApiJson(payload): ApiJson<MenuCategoryUpdate>,
) -> Result<Json<ActionResponse>> {
    state
        .repo
        .replace_category(&category_id, payload.name, payload.items)
        .await?;
    tracing::info!(category = %category_id, "menu category replaced");

    Ok(Json(ActionResponse::ok("Catégorie mise à jour")))
}

#[utoipa::path(
    post,
    path = "/api/admin/menu/{category_id}/items",
    params(("category_id" = String, Path, description = "Category slug")),
    request_body = MenuItem,
    responses(
        (status = 200, description = "Item appended", body = ActionResponse),
        (status = 401, description = "Missing or invalid admin session", body = ErrorBody),
        (status = 404, description = "Unknown category", body = ErrorBody)
    )
)]
pub async fn add_menu_item(
    _admin: AdminSession,
    State(state): State<AppState>,
    ApiPath(category_id): ApiPath<String>,
    ApiJson(item): ApiJson<MenuItem>,
) -> Result<Json<ActionResponse>> {
    state.repo.append_item(&category_id, item).await?;
    tracing::info!(category = %category_id, "menu item added");

    Ok(Json(ActionResponse::ok("Plat ajouté")))
}

/// delete_menu_item
///
/// [Admin Route] Removes the item at `item_index`. An index outside the
/// category is a 404, the same as an unknown category.
#[utoipa::path(
    delete,
    path = "/api/admin/menu/{category_id}/items/{item_index}",
    params(
        ("category_id" = String, Path, description = "Category slug"),
        ("item_index" = i64, Path, description = "Zero-based item position")
    ),
    responses(
        (status = 200, description = "Item removed", body = ActionResponse),
        (status = 401, description = "Missing or invalid admin session", body = ErrorBody),
        (status = 404, description = "Unknown category or index", body = ErrorBody)
    )
)]
pub async fn delete_menu_item(
    _admin: AdminSession,
    State(state): State<AppState>,
    ApiPath((category_id, item_index)): ApiPath<(String, i64)>,
) -> Result<Json<ActionResponse>> {
    let removed = state.repo.remove_item(&category_id, item_index).await?;
    tracing::info!(category = %category_id, item = %removed.name, "menu item removed");

    Ok(Json(ActionResponse::ok("Plat supprimé")))
}

/// get_access_logs
///
/// [Admin Route] Recent access-code attempts, oldest first.
#[utoipa::path(
    get,
    path = "/api/admin/access-logs",
    responses(
        (status = 200, description = "Access log", body = [AccessLogEntry]),
        (status = 401, description = "Missing or invalid admin session", body = ErrorBody)
    )
)]
pub async fn get_access_logs(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> Json<Vec<AccessLogEntry>> {
    Json(state.access_log.entries())
}

/// Fallback for paths outside the API.
pub async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}
