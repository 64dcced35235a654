//! In-memory session store
//!
//! Same key layout as [`LocalStorage`](super::local_storage::LocalStorage)
//! without touching the filesystem. Used by tests and demos.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::entity::session::SessionRecord;
use crate::domain::repository::SessionStore;
use crate::error::{AuthError, AuthResult};
use crate::infra::local_storage::{SESSION_KEYS, decode_session, encode_session};

#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    items: Arc<RwLock<BTreeMap<String, String>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value of one key
    pub fn item(&self, key: &str) -> Option<String> {
        self.items
            .read()
            .ok()
            .and_then(|items| items.get(key).cloned())
    }

    /// Set a raw key, bypassing the session encoding
    pub fn set_item(&self, key: &str, value: &str) -> AuthResult<()> {
        let mut items = self.items.write().map_err(poisoned)?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> AuthError {
    AuthError::Internal("session store lock poisoned".to_string())
}

impl SessionStore for InMemorySessionStore {
    async fn read(&self) -> AuthResult<Option<SessionRecord>> {
        let items = self.items.read().map_err(poisoned)?;
        Ok(decode_session(&items))
    }

    async fn write(&self, record: &SessionRecord) -> AuthResult<()> {
        let entries = encode_session(record)?;
        let mut items = self.items.write().map_err(poisoned)?;
        for key in SESSION_KEYS {
            items.remove(key);
        }
        for (key, value) in entries {
            items.insert(key.to_string(), value);
        }
        Ok(())
    }

    async fn clear(&self) -> AuthResult<()> {
        let mut items = self.items.write().map_err(poisoned)?;
        for key in SESSION_KEYS {
            items.remove(key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::session::Profile;
    use crate::domain::value_object::Role;
    use crate::infra::local_storage::{AUTH_KEY, USER_KEY};

    #[tokio::test]
    async fn test_write_then_clear() {
        let store = InMemorySessionStore::new();
        let record =
            SessionRecord::signed_in(Role::FleetManager, Profile::new().with("name", "Sam"));

        store.write(&record).await.unwrap();
        assert_eq!(store.item(AUTH_KEY).as_deref(), Some("true"));
        assert_eq!(store.item(USER_KEY).as_deref(), Some(r#"{"name":"Sam"}"#));
        assert_eq!(store.read().await.unwrap(), Some(record));

        store.clear().await.unwrap();
        assert!(SESSION_KEYS.iter().all(|key| store.item(key).is_none()));
        assert_eq!(store.read().await.unwrap(), None);
    }
}
