use chrono::{DateTime, Utc};
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, PoisonError},
};
use uuid::Uuid;

use crate::{models::AccessLogEntry, session::SessionMetadata};

/// AccessLog
///
/// Bounded, in-memory record of access-code attempts. Once `capacity` is
/// reached the oldest entry is dropped. A capacity of zero turns recording off.
#[derive(Debug)]
pub struct AccessLog {
    capacity: usize,
    entries: Mutex<VecDeque<AccessLogEntry>>,
}

pub type AccessLogState = Arc<AccessLog>;

impl AccessLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity.min(1024))),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.capacity > 0
    }

    pub fn record(
        &self,
        session_id: Option<&str>,
        access_granted: bool,
        metadata: &SessionMetadata,
        at: DateTime<Utc>,
    ) {
        if !self.is_enabled() {
            return;
        }

        let entry = AccessLogEntry {
            id: Uuid::new_v4(),
            session_id: session_id.map(str::to_string),
            access_granted,
            ip_address: metadata.ip_address.clone(),
            user_agent: metadata.user_agent.clone(),
            created_at: at,
        };

        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Oldest first.
    pub fn entries(&self) -> Vec<AccessLogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }
}
