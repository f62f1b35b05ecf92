use chrono::{DateTime, Duration, Utc};
use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};
use tokio::{sync::broadcast, task::JoinHandle};
use uuid::Uuid;

use crate::clock::ClockState;

/// TrustDomain
///
/// Sessions live in exactly one domain. Visitor and admin stores are separate
/// instances, so an identifier issued by one is unknown to the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustDomain {
    Visitor,
    Admin,
}

impl fmt::Display for TrustDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrustDomain::Visitor => f.write_str("visitor"),
            TrustDomain::Admin => f.write_str("admin"),
        }
    }
}

/// Where a session request came from. Both fields are best-effort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionMetadata {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// Session
///
/// A time-bounded authorization record. `expires_at` is always
/// `created_at + ttl` of the owning store and is never extended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl Session {
    /// A session is still usable at exactly `expires_at`; it lapses strictly after.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// SessionStore
///
/// In-memory map from opaque session identifier to [`Session`] for one
/// trust domain. Expired entries are evicted lazily on lookup; nothing is
/// removed proactively unless [`SessionStore::purge_expired`] is called
/// (see [`spawn_session_sweeper`]). Without a sweeper the map grows with every
/// session that is created and never looked up again.
pub struct SessionStore {
    domain: TrustDomain,
    ttl: Duration,
    clock: ClockState,
    sessions: Mutex<HashMap<String, Session>>,
}

/// SessionStoreState
///
/// Shared handle to a session store.
pub type SessionStoreState = Arc<SessionStore>;

impl SessionStore {
    pub fn new(domain: TrustDomain, ttl: Duration, clock: ClockState) -> Self {
        debug_assert!(ttl > Duration::zero(), "session ttl must be positive");
        Self {
            domain,
            ttl,
            clock,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn domain(&self) -> TrustDomain {
        self.domain
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Session>> {
        // Every critical section leaves the map consistent, so a poisoned lock is still usable.
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// create
    ///
    /// Issues a new session stamped with the current time and returns its
    /// identifier. Identifiers are random v4 UUIDs (122 bits of entropy); a
    /// collision with a live entry is re-rolled so ids stay unique in the store.
    pub fn create(&self, metadata: SessionMetadata) -> String {
        let created_at = self.clock.now();
        let mut sessions = self.lock();

        let mut id = Uuid::new_v4().to_string();
        while sessions.contains_key(&id) {
            id = Uuid::new_v4().to_string();
        }

        let session = Session {
            id: id.clone(),
            created_at,
            // Saturates instead of overflowing for very long lifetimes.
            expires_at: created_at
                .checked_add_signed(self.ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
            ip_address: metadata.ip_address,
            user_agent: metadata.user_agent,
        };
        sessions.insert(id.clone(), session);

        tracing::debug!(domain = %self.domain, "session created");
        id
    }

    /// get
    ///
    /// Returns the live session for `id`. An expired entry is evicted and
    /// reported as absent.
    pub fn get(&self, id: &str) -> Option<Session> {
        let now = self.clock.now();
        let mut sessions = self.lock();

        let expired = sessions.get(id)?.is_expired_at(now);
        if expired {
            sessions.remove(id);
            tracing::debug!(domain = %self.domain, "expired session evicted");
            return None;
        }
        sessions.get(id).cloned()
    }

    /// Checking validity never refreshes `expires_at`.
    pub fn is_valid(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// purge_expired
    ///
    /// Drops every entry whose expiry has passed and returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired_at(now));
        before - sessions.len()
    }

    /// Number of entries currently held, expired or not.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

/// spawn_session_sweeper
///
/// Background task that purges expired sessions from each store every
/// `period`. Lazy eviction still applies between ticks.
///
/// The task stops when `shutdown` fires (or its sender is dropped), or when
/// the returned handle is aborted.
pub fn spawn_session_sweeper(
    stores: Vec<SessionStoreState>,
    period: std::time::Duration,
    mut shutdown: broadcast::Receiver<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        // The first tick completes immediately.
        ticker.tick().await;
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    for store in &stores {
                        let removed = store.purge_expired();
                        if removed > 0 {
                            tracing::info!(domain = %store.domain(), removed, "swept expired sessions");
                        }
                    }
                }
                _ = shutdown.recv() => {
                    tracing::info!("session sweeper shutting down");
                    return;
                }
            }
        }
    })
}
