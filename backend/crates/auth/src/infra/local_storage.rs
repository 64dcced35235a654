//! File-backed key/value storage
//!
//! A flat JSON object of string keys to string values, playing the role of
//! browser local storage. The session lives under three keys that are
//! always written and removed in one file rewrite.

use std::collections::BTreeMap;
use std::io::{ErrorKind as IoErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;
use tokio::sync::Mutex;

use crate::domain::entity::session::{Profile, SessionRecord};
use crate::domain::repository::SessionStore;
use crate::domain::value_object::Role;
use crate::error::{AuthError, AuthResult};

pub const AUTH_KEY: &str = "smartguard-auth";
pub const ROLE_KEY: &str = "smartguard-role";
pub const USER_KEY: &str = "smartguard-user";

pub const SESSION_KEYS: [&str; 3] = [AUTH_KEY, ROLE_KEY, USER_KEY];

/// Stored representation of a session, keyed like the browser did it.
pub(crate) fn encode_session(record: &SessionRecord) -> AuthResult<Vec<(&'static str, String)>> {
    let mut entries = Vec::with_capacity(3);
    if record.authenticated {
        entries.push((AUTH_KEY, "true".to_string()));
    }
    if let Some(role) = record.role {
        entries.push((ROLE_KEY, role.code().to_string()));
    }
    entries.push((USER_KEY, serde_json::to_string(&record.profile)?));
    Ok(entries)
}

/// Any non-empty auth flag counts as signed in. An unreadable profile is
/// treated as empty.
pub(crate) fn decode_session(items: &BTreeMap<String, String>) -> Option<SessionRecord> {
    let flag = items.get(AUTH_KEY).filter(|value| !value.is_empty())?;
    let role_code = items.get(ROLE_KEY).map(String::as_str).unwrap_or("");
    let role = Role::from_code(role_code);
    if role.is_none() {
        tracing::warn!(role = %role_code, "Stored session has an unknown role");
    }
    let profile = match items.get(USER_KEY) {
        Some(raw) => serde_json::from_str::<Profile>(raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Stored profile is not a JSON object");
            Profile::new()
        }),
        None => Profile::new(),
    };
    Some(SessionRecord {
        authenticated: !flag.is_empty(),
        role,
        profile,
    })
}

/// File-backed storage; clones share the same lock.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl LocalStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn get_item(&self, key: &str) -> AuthResult<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.remove(key))
    }

    pub async fn set_item(&self, key: &str, value: &str) -> AuthResult<()> {
        let _guard = self.lock.lock().await;
        let mut items = self.load().await?;
        items.insert(key.to_string(), value.to_string());
        self.persist(&items).await
    }

    pub async fn remove_item(&self, key: &str) -> AuthResult<()> {
        let _guard = self.lock.lock().await;
        let mut items = self.load().await?;
        if items.remove(key).is_some() {
            self.persist(&items).await?;
        }
        Ok(())
    }

    /// Missing file reads as empty storage
    async fn load(&self) -> AuthResult<BTreeMap<String, String>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(BTreeMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == IoErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write to a uniquely named sibling temp file, then rename over the
    /// target. Instances that do not share a lock never collide on the temp
    /// file.
    async fn persist(&self, items: &BTreeMap<String, String>) -> AuthResult<()> {
        let bytes = serde_json::to_vec_pretty(items)?;
        let path = self.path.clone();
        let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => parent.to_path_buf(),
            None => PathBuf::from("."),
        };

        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            std::fs::create_dir_all(&dir)?;
            let mut tmp = NamedTempFile::new_in(&dir)?;
            tmp.write_all(&bytes)?;
            tmp.as_file().sync_all()?;
            tmp.persist(&path).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(|e| AuthError::Internal(format!("storage write task failed: {e}")))??;
        Ok(())
    }
}

impl SessionStore for LocalStorage {
    async fn read(&self) -> AuthResult<Option<SessionRecord>> {
        let _guard = self.lock.lock().await;
        Ok(decode_session(&self.load().await?))
    }

    async fn write(&self, record: &SessionRecord) -> AuthResult<()> {
        let entries = encode_session(record)?;
        let _guard = self.lock.lock().await;
        let mut items = self.load().await?;
        for key in SESSION_KEYS {
            items.remove(key);
        }
        for (key, value) in entries {
            items.insert(key.to_string(), value);
        }
        self.persist(&items).await?;
        tracing::debug!(path = %self.path.display(), "Session written");
        Ok(())
    }

    async fn clear(&self) -> AuthResult<()> {
        let _guard = self.lock.lock().await;
        let mut items = self.load().await?;
        for key in SESSION_KEYS {
            items.remove(key);
        }
        self.persist(&items).await?;
        tracing::debug!(path = %self.path.display(), "Session cleared");
        Ok(())
    }
}
