use axum::{
    extract::{ConnectInfo, FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use std::{convert::Infallible, net::SocketAddr, sync::Arc};

use crate::{
    access_log::AccessLogState,
    clock::ClockState,
    error::AppError,
    models::{AccessResponse, SessionCheck},
    session::{SessionMetadata, SessionStoreState},
    settings::SettingsState,
};

const FREE_ACCESS: &str = "Accès libre autorisé";
const ACCESS_GRANTED: &str = "Accès autorisé";
const INVALID_CODE: &str = "Code d'accès invalide";
const ADMIN_GRANTED: &str = "Connexion admin réussie";
const INVALID_PASSWORD: &str = "Mot de passe incorrect";
const NOT_AUTHORIZED: &str = "Non autorisé";
const INVALID_ADMIN_SESSION: &str = "Session admin invalide";

/// AccessGate
///
/// Issues visitor sessions. When the site is unlocked every request is
/// granted; otherwise the submitted code must equal the configured code
/// exactly (plaintext, no normalisation).
///
/// There is no attempt counter or backoff, so the code can be brute-forced.
pub struct AccessGate {
    sessions: SessionStoreState,
    settings: SettingsState,
    access_log: AccessLogState,
    clock: ClockState,
    access_code: String,
}

pub type AccessGateState = Arc<AccessGate>;

impl AccessGate {
    pub fn new(
        sessions: SessionStoreState,
        settings: SettingsState,
        access_log: AccessLogState,
        clock: ClockState,
        access_code: impl Into<String>,
    ) -> Self {
        Self {
            sessions,
            settings,
            access_log,
            clock,
            access_code: access_code.into(),
        }
    }

    pub fn sessions(&self) -> &SessionStoreState {
        &self.sessions
    }

    /// verify
    ///
    /// Checks `code` and, on success, creates a visitor session. A wrong code
    /// creates nothing and is reported through `success = false`.
    pub fn verify(&self, code: &str, metadata: SessionMetadata) -> AccessResponse {
        let response = if !self.settings.is_locked() {
            let session_id = self.sessions.create(metadata.clone());
            AccessResponse::granted(FREE_ACCESS, session_id)
        } else if code == self.access_code {
            let session_id = self.sessions.create(metadata.clone());
            AccessResponse::granted(ACCESS_GRANTED, session_id)
        } else {
            AccessResponse::denied(INVALID_CODE)
        };

        tracing::info!(
            granted = response.success,
            ip = metadata.ip_address.as_deref().unwrap_or("unknown"),
            "access code verification"
        );
        self.access_log.record(
            response.session_id.as_deref(),
            response.success,
            &metadata,
            self.clock.now(),
        );

        response
    }

    pub fn check_session(&self, session_id: &str) -> SessionCheck {
        SessionCheck {
            has_access: self.sessions.is_valid(session_id),
        }
    }
}

/// AdminAuth
///
/// Issues admin sessions against a single configured password and guards
/// every admin-only operation. The password is compared in plaintext; a real
/// credential store would slot in here without changing the wire contract.
pub struct AdminAuth {
    sessions: SessionStoreState,
    password: String,
}

pub type AdminAuthState = Arc<AdminAuth>;

impl AdminAuth {
    pub fn new(sessions: SessionStoreState, password: impl Into<String>) -> Self {
        Self {
            sessions,
            password: password.into(),
        }
    }

    pub fn sessions(&self) -> &SessionStoreState {
        &self.sessions
    }

    pub fn login(&self, password: &str, metadata: SessionMetadata) -> AccessResponse {
        if password == self.password {
            let session_id = self.sessions.create(metadata);
            tracing::info!("admin login succeeded");
            AccessResponse::granted(ADMIN_GRANTED, session_id)
        } else {
            tracing::warn!("admin login rejected");
            AccessResponse::denied(INVALID_PASSWORD)
        }
    }

    pub fn check_session(&self, session_id: &str) -> SessionCheck {
        SessionCheck {
            has_access: self.sessions.is_valid(session_id),
        }
    }

    /// authorize
    ///
    /// Validates a raw `Authorization` header value and returns the admin
    /// session id it carries.
    pub fn authorize(&self, authorization: Option<&str>) -> Result<String, AppError> {
        let token = authorization
            .and_then(bearer_token)
            .ok_or_else(|| AppError::Unauthorized(NOT_AUTHORIZED.to_string()))?;

        if !self.sessions.is_valid(token) {
            return Err(AppError::Unauthorized(INVALID_ADMIN_SESSION.to_string()));
        }
        Ok(token.to_string())
    }
}

/// bearer_token
///
/// Extracts the token from `Bearer <token>`. The scheme is case-sensitive and
/// must be followed by exactly one space; anything else is rejected.
pub fn bearer_token(header_value: &str) -> Option<&str> {
    header_value.strip_prefix("Bearer ")
}

/// AdminSession
///
/// Extractor proving the request carries a live admin session. Because it
/// runs as a `FromRequestParts` extractor, a rejected request never reaches
/// the body or the content store.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub session_id: String,
}

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
    AdminAuthState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let admin = AdminAuthState::from_ref(state);

        // A header that is not valid visible ASCII is treated as absent.
        let authorization = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let session_id = admin.authorize(authorization).inspect_err(|_| {
            tracing::debug!(uri = %parts.uri, "admin request rejected");
        })?;

        Ok(AdminSession { session_id })
    }
}

/// CallerMetadata
///
/// Peer address (when the server was started with connect info) and user
/// agent of the caller. Never rejects.
#[derive(Debug, Clone, Default)]
pub struct CallerMetadata(pub SessionMetadata);

impl<S> FromRequestParts<S> for CallerMetadata
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ip_address = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string());

        let user_agent = parts
            .headers
            .get(header::USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        Ok(CallerMetadata(SessionMetadata {
            ip_address,
            user_agent,
        }))
    }
}
