use contracts::shared::catalog::{SelectionState, SelectionUpdate};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

static SESSIONS: Lazy<SessionStore> = Lazy::new(SessionStore::new);

/// Process-wide registry of per-session selection state.
///
/// Sessions are partitioned by id and never shared; within one session,
/// sequential renders observe the last write.
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, SelectionState>>,
}

impl SessionStore {
    fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Snapshot of the session's selection. The first read of an unknown
    /// session populates the full-catalog default.
    pub fn selection(&self, session_id: Uuid) -> SelectionState {
        let mut sessions = self.sessions.lock().expect("session store poisoned");
        sessions.entry(session_id).or_default().clone()
    }

    /// Replace the dimensions present in the update, keep the rest.
    pub fn update(&self, session_id: Uuid, update: SelectionUpdate) -> SelectionState {
        let mut sessions = self.sessions.lock().expect("session store poisoned");
        let state = sessions.entry(session_id).or_default();
        if let Some(items) = update.selected_items {
            state.selected_items = items;
        }
        if let Some(methods) = update.selected_payment_methods {
            state.selected_payment_methods = methods;
        }
        if let Some(seasons) = update.selected_seasons {
            state.selected_seasons = seasons;
        }
        state.clone()
    }
}

pub fn sessions() -> &'static SessionStore {
    &SESSIONS
}
