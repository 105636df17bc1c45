//! Signed-in student session and role gating
//!
//! The auth provider itself lives elsewhere; this module only consumes it.
//! A [`SessionSource`] answers "who is signed in", and a [`SessionContext`]
//! holds the answer for the rest of the invocation. Observers register with
//! [`SessionContext::subscribe`] and stay registered for as long as they hold
//! the returned [`Subscription`].

pub mod role;

use std::sync::{Arc, Mutex, MutexGuard, Weak};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CampusError, Result};

pub use role::{resolve_role, require_premium, Role, RoleLookup, RoleTable};

/// An authenticated student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: None,
            expires_at: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn expiring_at(mut self, at: DateTime<Utc>) -> Self {
        self.expires_at = Some(at);
        self
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// Where the current session comes from
pub trait SessionSource {
    fn current_session(&self) -> Result<Option<Session>>;
}

/// Session taken from the command line or the environment
#[derive(Debug, Clone, Default)]
pub struct IdentitySource {
    user: Option<String>,
}

impl IdentitySource {
    pub fn new(user: Option<String>) -> Self {
        Self { user }
    }
}

impl SessionSource for IdentitySource {
    /// `user` or `user:email`; blank means signed out
    fn current_session(&self) -> Result<Option<Session>> {
        let Some(raw) = self.user.as_deref().map(str::trim) else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }

        let session = match raw.split_once(':') {
            Some((id, email)) => {
                let id = id.trim();
                if id.is_empty() {
                    return Err(CampusError::invalid_value("user", raw));
                }
                Session::new(id).with_email(email.trim())
            }
            None => Session::new(raw),
        };
        Ok(Some(session))
    }
}

type Listener = Arc<dyn Fn(Option<&Session>) + Send + Sync>;

#[derive(Default)]
struct Shared {
    current: Option<Session>,
    listeners: Vec<(u64, Listener)>,
    next_id: u64,
}

/// Read-only view of the signed-in session, with change notifications
#[derive(Clone, Default)]
pub struct SessionContext {
    shared: Arc<Mutex<Shared>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from a session source
    ///
    /// Expired sessions are treated as signed out.
    pub fn load(source: &dyn SessionSource) -> Result<Self> {
        let context = Self::new();
        let session = source
            .current_session()?
            .filter(|s| !s.is_expired_at(Utc::now()));
        context.set(session);
        Ok(context)
    }

    pub fn current(&self) -> Option<Session> {
        self.lock().current.clone()
    }

    /// The session, or a usage error asking the user to sign in
    pub fn require(&self) -> Result<Session> {
        self.current().ok_or(CampusError::SessionRequired)
    }

    pub fn is_signed_in(&self) -> bool {
        self.lock().current.is_some()
    }

    /// Register a listener called on every session change
    ///
    /// The listener is removed when the returned handle is dropped.
    #[must_use]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Option<&Session>) + Send + Sync + 'static,
    {
        let mut shared = self.lock();
        let id = shared.next_id;
        shared.next_id += 1;
        shared.listeners.push((id, Arc::new(listener)));
        Subscription {
            id,
            shared: Arc::downgrade(&self.shared),
        }
    }

    /// Replace the current session and notify listeners
    pub fn set(&self, session: Option<Session>) {
        let listeners: Vec<Listener> = {
            let mut shared = self.lock();
            shared.current = session.clone();
            shared.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
        };
        debug!(
            signed_in = session.is_some(),
            listeners = listeners.len(),
            "session_changed"
        );
        for listener in listeners {
            listener(session.as_ref());
        }
    }

    pub fn clear(&self) {
        self.set(None);
    }

    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        lock_shared(&self.shared)
    }
}

fn lock_shared(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    // listeners run outside the lock, so poisoning leaves the state consistent
    shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// RAII handle for a session listener
pub struct Subscription {
    id: u64,
    shared: Weak<Mutex<Shared>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            lock_shared(&shared).listeners.retain(|(id, _)| *id != self.id);
        }
    }
}
