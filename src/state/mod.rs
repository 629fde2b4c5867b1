//! Shared server state: the session roster.
//!
//! The roster is the single authoritative collection of live sessions. It is
//! created once at startup and passed by `Arc` to every component that needs
//! it (gateway, command handlers, router) rather than living in a global.

mod session;

pub use session::Session;

use dashmap::DashMap;
use parking_lot::{Mutex, MutexGuard};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// The registry of currently connected sessions.
///
/// Thread safety: lookups and mutations go through the sharded map and may
/// run concurrently from every connection task; `all()` collects a snapshot
/// before iteration so concurrent connects/disconnects never corrupt or skip
/// entries mid-broadcast. No I/O happens under any internal lock.
pub struct Roster {
    sessions: DashMap<u64, Arc<Session>>,
    next_id: AtomicU64,
    /// Serializes `/nick` validate-and-commit so no two sessions can race
    /// their way into the same name.
    rename_lock: Mutex<()>,
}

impl Roster {
    /// Create an empty roster. Session ids start at 1.
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
            next_id: AtomicU64::new(1),
            rename_lock: Mutex::new(()),
        }
    }

    /// Allocate the next session id.
    pub fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Insert a session. No uniqueness check happens here; nickname
    /// uniqueness is enforced by the `/nick` handler before mutation.
    pub fn add(&self, session: Arc<Session>) {
        self.sessions.insert(session.id(), session);
    }

    /// Remove the session with the given id, if present.
    pub fn remove(&self, id: u64) -> Option<Arc<Session>> {
        self.sessions.remove(&id).map(|(_, session)| session)
    }

    /// A point-in-time snapshot of all sessions, independently iterable.
    pub fn all(&self) -> Vec<Arc<Session>> {
        self.sessions.iter().map(|s| s.value().clone()).collect()
    }

    /// Look a session up by id.
    pub fn find_by_id(&self, id: u64) -> Option<Arc<Session>> {
        self.sessions.get(&id).map(|s| s.value().clone())
    }

    /// Look a session up by exact, case-sensitive nickname.
    ///
    /// Sessions without a nickname are not addressable by name.
    pub fn find_by_nick(&self, nick: &str) -> Option<Arc<Session>> {
        if nick.is_empty() {
            return None;
        }
        self.sessions
            .iter()
            .find(|s| s.value().nick() == nick)
            .map(|s| s.value().clone())
    }

    /// Number of connected sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Take the rename lock. Held for the duration of `/nick` validation and
    /// commit; the window is a handful of string comparisons, never I/O.
    pub fn rename_guard(&self) -> MutexGuard<'_, ()> {
        self.rename_lock.lock()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
