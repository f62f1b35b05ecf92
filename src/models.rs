use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Restaurant Content ---

/// HeroSection
///
/// Landing banner shown at the top of the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct HeroSection {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct AboutSection {
    pub title: String,
    pub description: String,
    pub image: String,
}

/// OpeningHours
///
/// Free-form service hours per weekday, e.g. "12h15-13h30, 19h15-21h15" or "Fermé".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct OpeningHours {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct ContactInfo {
    pub phone: String,
    pub address: String,
    pub hours: OpeningHours,
}

/// RestaurantInfo
///
/// Read-only reference data describing the restaurant (GET /api/restaurant/info).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct RestaurantInfo {
    pub name: String,
    pub tagline: String,
    pub location: String,
    pub description: String,
    pub hero: HeroSection,
    pub about: AboutSection,
    pub contact: ContactInfo,
}

/// MenuItem
///
/// A single dish. `price` is a display string ("18€"), never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    #[schema(example = "18€")]
    pub price: String,
}

/// MenuCategory
///
/// A menu section with a stable slug identifier (`entrees`, `plats`, ...).
/// Items keep their insertion order; admin removals address them by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct MenuCategory {
    #[schema(example = "plats")]
    pub id: String,
    pub name: String,
    /// Display position among categories, ascending.
    pub order: i32,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct GalleryItem {
    pub id: String,
    pub image: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub order: i32,
}

// --- Site Settings ---

/// SiteSettings
///
/// Whether visitors must present the access code. Also the request body of
/// PUT /api/admin/site/settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct SiteSettings {
    pub is_locked: bool,
}

/// SettingsUpdateResponse
///
/// Acknowledgement of a settings change, carrying the new snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct SettingsUpdateResponse {
    pub success: bool,
    pub message: String,
    pub settings: SiteSettings,
}

// --- Access Control Payloads ---

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct AccessRequest {
    #[schema(example = "2108")]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct AdminLoginRequest {
    pub password: String,
}

/// AccessResponse
///
/// Outcome of an access-code or admin-password check. A rejected code is a
/// successful HTTP response with `success = false` and no `session_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct AccessResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl AccessResponse {
    pub fn granted(message: &str, session_id: String) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            session_id: Some(session_id),
        }
    }

    pub fn denied(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            session_id: None,
        }
    }
}

/// SessionCheck
///
/// Result of a session lookup. Unknown, malformed and expired ids all yield `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct SessionCheck {
    #[serde(rename = "hasAccess")]
    pub has_access: bool,
}

// --- Admin Payloads ---

/// MenuCategoryUpdate
///
/// Wholesale replacement of a category's name and items.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct MenuCategoryUpdate {
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// Generic acknowledgement for admin mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

impl ActionResponse {
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}

/// AccessLogEntry
///
/// One access-code verification attempt, granted or not.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct AccessLogEntry {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub access_granted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct HealthStatus {
    #[schema(example = "healthy")]
    pub status: String,
}

/// Body of every 401 / 404 / 500 response.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct ErrorBody {
    pub detail: String,
}
