use chrono::Duration;
use std::env;
use std::str::FromStr;

/// Codes used when nothing is configured outside production.
const LOCAL_DEFAULT_CODE: &str = "2108";

pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;
/// Longest session lifetime accepted from the environment (one year).
pub const MAX_SESSION_TTL_HOURS: i64 = 24 * 365;

/// AppConfig
///
/// Immutable configuration loaded once at startup and shared through the
/// application state.
#[derive(Clone)]
pub struct AppConfig {
    // Runtime environment marker. Controls log format and which secrets are mandatory.
    pub env: Env,
    // Shared numeric code visitors submit while the site is locked.
    pub access_code: String,
    // Password for the admin dashboard.
    pub admin_password: String,
    // Lock state the site starts in.
    pub site_locked: bool,
    // Lifetime of visitor and admin sessions.
    pub session_ttl_hours: i64,
    // Period of the background expiry sweep; 0 leaves expiry purely lazy.
    pub session_sweep_secs: u64,
    // Maximum retained access-log entries; 0 disables the log.
    pub access_log_capacity: usize,
    // Socket address the HTTP server binds to.
    pub bind_addr: String,
}

/// Env
///
/// Defines the runtime context.
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// Safe values for test setup, no environment required.
    fn default() -> Self {
        Self {
            env: Env::Local,
            access_code: LOCAL_DEFAULT_CODE.to_string(),
            admin_password: LOCAL_DEFAULT_CODE.to_string(),
            site_locked: true,
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
            session_sweep_secs: 0,
            access_log_capacity: 1000,
            bind_addr: "0.0.0.0:8001".to_string(),
        }
    }
}

fn parsed_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "ignoring unparsable setting");
            default
        }),
        Err(_) => default,
    }
}

fn session_ttl_hours_from_env() -> i64 {
    let hours = parsed_or("SESSION_TTL_HOURS", DEFAULT_SESSION_TTL_HOURS);
    if ttl_in_range(hours) {
        hours
    } else {
        tracing::warn!(
            value = hours,
            max = MAX_SESSION_TTL_HOURS,
            "SESSION_TTL_HOURS out of range, using default"
        );
        DEFAULT_SESSION_TTL_HOURS
    }
}

fn ttl_in_range(hours: i64) -> bool {
    (1..=MAX_SESSION_TTL_HOURS).contains(&hours)
}

impl AppConfig {
    /// session_ttl
    ///
    /// Session lifetime as a duration. Values outside
    /// `1..=MAX_SESSION_TTL_HOURS` (possible when the struct is built by
    /// hand) fall back to the default so sessions are never born expired.
    pub fn session_ttl(&self) -> Duration {
        let hours = if ttl_in_range(self.session_ttl_hours) {
            self.session_ttl_hours
        } else {
            tracing::warn!(
                value = self.session_ttl_hours,
                "session TTL out of range, using default"
            );
            DEFAULT_SESSION_TTL_HOURS
        };
        Duration::hours(hours)
    }

    /// load
    ///
    /// Reads the configuration from environment variables.
    ///
    /// # Panics
    /// In production, panics when `ACCESS_CODE` or `ADMIN_PASSWORD` is unset so
    /// the service never starts on the well-known development codes.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        let (access_code, admin_password) = match env {
            Env::Production => (
                env::var("ACCESS_CODE").expect("FATAL: ACCESS_CODE must be set in production."),
                env::var("ADMIN_PASSWORD")
                    .expect("FATAL: ADMIN_PASSWORD must be set in production."),
            ),
            Env::Local => (
                env::var("ACCESS_CODE").unwrap_or_else(|_| LOCAL_DEFAULT_CODE.to_string()),
                env::var("ADMIN_PASSWORD").unwrap_or_else(|_| LOCAL_DEFAULT_CODE.to_string()),
            ),
        };

        let defaults = Self::default();
        Self {
            env,
            access_code,
            admin_password,
            site_locked: parsed_or("SITE_LOCKED", defaults.site_locked),
            session_ttl_hours: session_ttl_hours_from_env(),
            session_sweep_secs: parsed_or("SESSION_SWEEP_SECS", defaults.session_sweep_secs),
            access_log_capacity: parsed_or("ACCESS_LOG_CAPACITY", defaults.access_log_capacity),
            bind_addr: env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
        }
    }
}
