use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::session::InferenceSession;

static GLOBAL: OnceLock<SessionRegistry> = OnceLock::new();

/// Process-wide table of named inference sessions.
///
/// Sessions are expensive to build and usually shared across many analysis
/// calls, so they live here under a string key (the model role, e.g.
/// `"operators_det"`). Lifecycle is explicit: created on first use via
/// [`SessionRegistry::global`], torn down with [`SessionRegistry::remove`]
/// or [`SessionRegistry::clear`].
pub struct SessionRegistry {
    sessions: RwLock<HashMap<String, Arc<dyn InferenceSession>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide instance.
    pub fn global() -> &'static SessionRegistry {
        GLOBAL.get_or_init(SessionRegistry::new)
    }

    /// Registers `session` under `name`, replacing any previous entry.
    pub fn register(&self, name: &str, session: Arc<dyn InferenceSession>) {
        log::info!("registering inference session '{name}'");
        self.sessions.write().insert(name.to_string(), session);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn InferenceSession>> {
        self.sessions.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sessions.read().contains_key(name)
    }

    /// Drops the session registered under `name`, returning the handle so
    /// callers still holding work against it can finish.
    pub fn remove(&self, name: &str) -> Option<Arc<dyn InferenceSession>> {
        let removed = self.sessions.write().remove(name);
        if removed.is_some() {
            log::info!("removed inference session '{name}'");
        }
        removed
    }

    /// Tears down every registered session.
    pub fn clear(&self) {
        let mut sessions = self.sessions.write();
        if !sessions.is_empty() {
            log::info!("tearing down {} inference session(s)", sessions.len());
        }
        sessions.clear();
    }

    pub fn names(&self) -> Vec<String> {
        self.sessions.read().keys().cloned().collect()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
