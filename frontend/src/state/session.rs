use std::{cell::RefCell, rc::Rc};

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{api::User, utils::storage as storage_utils};

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write session: {0}")]
    Write(String),
    #[error("stored session is corrupt: {0}")]
    Corrupt(String),
}

/// Durable backing for the session. Every store mutation goes through here
/// before the in-memory state changes.
pub trait SessionPersistence {
    fn load(&self) -> Result<Option<StoredSession>, SessionError>;
    fn store(&self, session: &StoredSession) -> Result<(), SessionError>;
    fn clear(&self) -> Result<(), SessionError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStoragePersistence;

impl SessionPersistence for LocalStoragePersistence {
    fn load(&self) -> Result<Option<StoredSession>, SessionError> {
        let storage = storage_utils::local_storage().map_err(SessionError::Unavailable)?;
        let token = storage_utils::read_item(&storage, TOKEN_KEY).map_err(SessionError::Unavailable)?;
        let user = storage_utils::read_item(&storage, USER_KEY).map_err(SessionError::Unavailable)?;
        match (token, user) {
            (Some(token), Some(user)) => {
                let user: User = serde_json::from_str(&user)
                    .map_err(|err| SessionError::Corrupt(err.to_string()))?;
                Ok(Some(StoredSession { token, user }))
            }
            _ => Ok(None),
        }
    }

    fn store(&self, session: &StoredSession) -> Result<(), SessionError> {
        let storage = storage_utils::local_storage().map_err(SessionError::Unavailable)?;
        let user_json = serde_json::to_string(&session.user)
            .map_err(|err| SessionError::Write(err.to_string()))?;
        storage_utils::write_item(&storage, TOKEN_KEY, &session.token).map_err(SessionError::Write)?;
        storage_utils::write_item(&storage, USER_KEY, &user_json).map_err(SessionError::Write)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let storage = storage_utils::local_storage().map_err(SessionError::Unavailable)?;
        storage_utils::remove_item(&storage, TOKEN_KEY).map_err(SessionError::Write)?;
        storage_utils::remove_item(&storage, USER_KEY).map_err(SessionError::Write)?;
        Ok(())
    }
}

/// Keeps the record in a shared cell. Clones see the same record, which is how
/// tests simulate a page reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    record: Rc<RefCell<Option<StoredSession>>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Option<StoredSession> {
        self.record.borrow().clone()
    }
}

impl SessionPersistence for MemoryPersistence {
    fn load(&self) -> Result<Option<StoredSession>, SessionError> {
        Ok(self.record.borrow().clone())
    }

    fn store(&self, session: &StoredSession) -> Result<(), SessionError> {
        *self.record.borrow_mut() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.record.borrow_mut() = None;
        Ok(())
    }
}

#[derive(Clone)]
pub struct SessionStore {
    state: RwSignal<Session>,
    persistence: Rc<dyn SessionPersistence>,
}

impl SessionStore {
    /// Builds the store and restores whatever the persistence layer holds.
    pub fn new(persistence: Rc<dyn SessionPersistence>) -> Self {
        let initial = restore(persistence.as_ref(), chrono::Utc::now().timestamp());
        Self {
            state: create_rw_signal(initial),
            persistence,
        }
    }

    /// Browser-backed store; falls back to memory when `localStorage` is
    /// missing (private mode, host builds).
    pub fn browser() -> Self {
        if storage_utils::local_storage().is_ok() {
            Self::new(Rc::new(LocalStoragePersistence))
        } else {
            log::warn!("localStorage unavailable; session will not survive reloads");
            Self::in_memory()
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryPersistence::new()))
    }

    pub fn login(&self, user: User, token: String) -> Result<(), SessionError> {
        let record = StoredSession { token, user };
        self.persistence.store(&record)?;
        log::info!("session started for {} ({})", record.user.email, record.user.role.as_str());
        self.state.set(Session {
            user: Some(record.user),
            token: Some(record.token),
        });
        Ok(())
    }

    /// Replaces the cached user, keeping the current token.
    pub fn update_user(&self, user: User) -> Result<(), SessionError> {
        let token = self
            .token()
            .ok_or_else(|| SessionError::Write("no active session".into()))?;
        self.login(user, token)
    }

    pub fn logout(&self) {
        if let Err(err) = self.persistence.clear() {
            log::error!("failed to clear persisted session: {}", err);
        }
        self.state.set(Session::default());
        log::info!("session cleared");
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(Session::is_authenticated)
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.with(|session| session.user.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.state.with_untracked(|session| session.token.clone())
    }

    pub fn snapshot(&self) -> Session {
        self.state.get_untracked()
    }

    pub fn signal(&self) -> Signal<Session> {
        self.state.into()
    }
}

fn restore(persistence: &dyn SessionPersistence, now: i64) -> Session {
    match persistence.load() {
        Ok(Some(record)) => {
            if token_expired(&record.token, now) {
                log::info!("stored token expired; starting anonymous");
                if let Err(err) = persistence.clear() {
                    log::error!("failed to clear expired session: {}", err);
                }
                return Session::default();
            }
            log::debug!("restored session for {}", record.user.email);
            Session {
                user: Some(record.user),
                token: Some(record.token),
            }
        }
        Ok(None) => Session::default(),
        Err(SessionError::Corrupt(reason)) => {
            log::warn!("discarding stored session: {}", reason);
            if let Err(err) = persistence.clear() {
                log::error!("failed to clear corrupt session: {}", err);
            }
            Session::default()
        }
        Err(err) => {
            log::warn!("could not restore session: {}", err);
            Session::default()
        }
    }
}

fn token_expiry(token: &str) -> Option<i64> {
    let mut parts = token.split('.');
    parts.next()?;
    let payload = parts.next()?;
    let decoded = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let value: Value = serde_json::from_slice(&decoded).ok()?;
    value.get("exp").and_then(Value::as_i64)
}

/// Opaque (non-JWT) tokens carry no expiry and are kept until logout.
pub fn token_expired(token: &str, now: i64) -> bool {
    token_expiry(token).map(|exp| exp <= now).unwrap_or(false)
}

pub fn provide_session(store: SessionStore) {
    provide_context(store);
}

pub fn use_session() -> SessionStore {
    match use_context::<SessionStore>() {
        Some(store) => store,
        None => {
            let store = SessionStore::in_memory();
            provide_context(store.clone());
            store
        }
    }
}
