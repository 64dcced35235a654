//! Session Entity
//!
//! What the session store holds between requests: the auth flag, the
//! role code and the profile the account service returned.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::value_object::{RawPassword, Role};

/// Profile object returned by the account service.
///
/// The schema is owned by the service; only `name` and `email` are read
/// here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile(Map<String, Value>);

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn email(&self) -> Option<&str> {
        self.0.get("email").and_then(Value::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Login credentials handed to the account service
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: RawPassword,
}

/// Authenticated session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    pub authenticated: bool,
    /// `None` when the stored role code is not one we know. Such a session
    /// satisfies no guard.
    pub role: Option<Role>,
    pub profile: Profile,
}

impl SessionRecord {
    pub fn signed_in(role: Role, profile: Profile) -> Self {
        Self {
            authenticated: true,
            role: Some(role),
            profile,
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == Some(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_accessors() {
        let profile = Profile::new()
            .with("name", "Sarah Fleet Manager")
            .with("email", "sarah@abc.co");
        assert_eq!(profile.name(), Some("Sarah Fleet Manager"));
        assert_eq!(profile.email(), Some("sarah@abc.co"));
        assert!(profile.get("organization").is_none());
    }

    #[test]
    fn test_unknown_role_matches_nothing() {
        let record = SessionRecord {
            authenticated: true,
            role: None,
            profile: Profile::new(),
        };
        assert!(Role::ALL.iter().all(|role| !record.has_role(*role)));
        assert!(SessionRecord::signed_in(Role::Driver, Profile::new()).has_role(Role::Driver));
    }
}
