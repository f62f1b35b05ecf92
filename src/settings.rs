use std::sync::{Arc, PoisonError, RwLock};

use crate::models::SiteSettings;

/// SiteSettingsStore
///
/// Process-wide lock flag consulted by every access-code check. Only the
/// admin settings endpoint writes to it.
#[derive(Debug)]
pub struct SiteSettingsStore {
    settings: RwLock<SiteSettings>,
}

pub type SettingsState = Arc<SiteSettingsStore>;

impl SiteSettingsStore {
    pub fn new(is_locked: bool) -> Self {
        Self {
            settings: RwLock::new(SiteSettings { is_locked }),
        }
    }

    pub fn snapshot(&self) -> SiteSettings {
        *self.settings.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_locked(&self) -> bool {
        self.snapshot().is_locked
    }

    /// Replaces the flag and returns the settings as they now stand.
    pub fn set_locked(&self, is_locked: bool) -> SiteSettings {
        let mut settings = self.settings.write().unwrap_or_else(PoisonError::into_inner);
        settings.is_locked = is_locked;
        *settings
    }
}

impl Default for SiteSettingsStore {
    fn default() -> Self {
        Self::new(true)
    }
}
