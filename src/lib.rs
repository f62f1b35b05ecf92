use axum::{Router, extract::FromRef, http::HeaderName};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

pub mod access_log;
pub mod auth;
pub mod clock;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod seed;
pub mod session;
pub mod settings;

// Routing split by trust level (public vs admin).
pub mod routes;
use routes::{admin, public};

// --- Public Re-exports ---

pub use access_log::{AccessLog, AccessLogState};
pub use auth::{AccessGate, AccessGateState, AdminAuth, AdminAuthState, AdminSession};
pub use clock::{Clock, ClockState, ManualClock, SystemClock};
pub use config::AppConfig;
pub use error::AppError;
pub use extract::{ApiJson, ApiPath};
pub use repository::{ContentRepository, InMemoryRepository, RepositoryState};
pub use session::{SessionStore, SessionStoreState, TrustDomain};
pub use settings::{SettingsState, SiteSettingsStore};

/// ApiDoc
///
/// OpenAPI document aggregated from the `#[utoipa::path]` handlers and the
/// `ToSchema` models, served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health_check, handlers::get_restaurant_info, handlers::get_menu,
        handlers::get_gallery, handlers::get_site_settings, handlers::verify_access_code,
        handlers::check_access_session, handlers::admin_login, handlers::check_admin_session,
        handlers::update_site_settings, handlers::get_admin_menu, handlers::update_menu_category,
        handlers::add_menu_item, handlers::delete_menu_item, handlers::get_access_logs
    ),
    components(
        schemas(
            models::RestaurantInfo, models::HeroSection, models::AboutSection,
            models::ContactInfo, models::OpeningHours, models::MenuCategory, models::MenuItem,
            models::GalleryItem, models::SiteSettings, models::SettingsUpdateResponse,
            models::AccessRequest, models::AdminLoginRequest, models::AccessResponse,
            models::SessionCheck, models::MenuCategoryUpdate, models::ActionResponse,
            models::AccessLogEntry, models::HealthStatus, models::ErrorBody,
        )
    ),
    tags(
        (name = "les-embruns", description = "Les Embruns restaurant site API")
    )
)]
struct ApiDoc;

/// AppState
///
/// Every store the handlers touch, each behind its own lock. Cloning the
/// state clones handles, never data.
#[derive(Clone)]
pub struct AppState {
    /// Menu, gallery and restaurant info.
    pub repo: RepositoryState,
    /// The site lock flag.
    pub settings: SettingsState,
    /// Visitor sessions and the access-code check.
    pub gate: AccessGateState,
    /// Admin sessions, password check and the bearer-token guard.
    pub admin: AdminAuthState,
    /// Audit trail of access-code attempts.
    pub access_log: AccessLogState,
    /// Configuration the state was built from; `main` reads the bind address
    /// and sweep period from here.
    pub config: AppConfig,
}

impl AppState {
    /// new
    ///
    /// Wires the stores together from configuration: two isolated session
    /// stores (visitor and admin) sharing one clock, the lock flag at its
    /// configured initial value, and the access log.
    pub fn new(config: AppConfig, repo: RepositoryState, clock: ClockState) -> Self {
        let ttl = config.session_ttl();

        let visitor_sessions = Arc::new(SessionStore::new(
            TrustDomain::Visitor,
            ttl,
            clock.clone(),
        ));
        let admin_sessions = Arc::new(SessionStore::new(TrustDomain::Admin, ttl, clock.clone()));

        let settings = Arc::new(SiteSettingsStore::new(config.site_locked));
        let access_log = Arc::new(AccessLog::new(config.access_log_capacity));

        let gate = Arc::new(AccessGate::new(
            visitor_sessions,
            settings.clone(),
            access_log.clone(),
            clock,
            config.access_code.clone(),
        ));
        let admin = Arc::new(AdminAuth::new(admin_sessions, config.admin_password.clone()));

        Self {
            repo,
            settings,
            gate,
            admin,
            access_log,
            config,
        }
    }

    /// Both session stores, for the background sweeper.
    pub fn session_stores(&self) -> Vec<SessionStoreState> {
        vec![self.gate.sessions().clone(), self.admin.sessions().clone()]
    }
}

// --- Axum FromRef Extractor Implementations ---

// Lets the `AdminSession` extractor pull the admin guard out of the state.
impl FromRef<AppState> for AdminAuthState {
    fn from_ref(app_state: &AppState) -> AdminAuthState {
        app_state.admin.clone()
    }
}

/// create_router
///
/// Assembles the API under `/api`, the Swagger UI, and the tracing, request
/// id and CORS layers.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    let x_request_id = HeaderName::from_static("x-request-id");

    let api = Router::new()
        .merge(public::public_routes())
        .nest("/admin", admin::admin_routes());

    let base_router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api)
        .fallback(handlers::not_found)
        .with_state(state);

    base_router
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(
                    x_request_id.clone(),
                    MakeRequestUuid,
                ))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        .layer(cors)
}

/// trace_span_logger
///
/// Builds the per-request span, tagged with the `x-request-id` assigned by
/// `SetRequestIdLayer` so every log line of one request can be correlated.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
