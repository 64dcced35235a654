use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::route::Route;
use crate::error::AuthError;

/// The two kinds of SmartGuard account.
///
/// Serialized with the wire codes the session storage has always used
/// (`"driver"` / `"fleet"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "driver")]
    Driver,
    #[serde(rename = "fleet")]
    FleetManager,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Driver, Role::FleetManager];

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Role::Driver => "driver",
            Role::FleetManager => "fleet",
        }
    }

    /// Parse a wire code; unknown codes yield `None`.
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "driver" => Some(Role::Driver),
            "fleet" => Some(Role::FleetManager),
            _ => None,
        }
    }

    #[inline]
    pub const fn dashboard_route(&self) -> Route {
        Route::Dashboard(*self)
    }

    #[inline]
    pub const fn login_route(&self) -> Route {
        Route::Login(*self)
    }
}

impl FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::from_code(s).ok_or_else(|| AuthError::UnknownRole(s.to_string()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_codes_roundtrip() {
        for role in Role::ALL {
            assert_eq!(Role::from_code(role.code()), Some(role));
        }
        assert_eq!(Role::from_code("admin"), None);
        assert_eq!(Role::from_code("Driver"), None);
    }

    #[test]
    fn test_role_from_str_error() {
        let err = "admin".parse::<Role>().unwrap_err();
        assert!(matches!(err, AuthError::UnknownRole(code) if code == "admin"));
    }

    #[test]
    fn test_role_serde_uses_wire_codes() {
        assert_eq!(serde_json::to_string(&Role::FleetManager).unwrap(), "\"fleet\"");
        let role: Role = serde_json::from_str("\"driver\"").unwrap();
        assert_eq!(role, Role::Driver);
    }

    #[test]
    fn test_role_routes() {
        assert_eq!(Role::Driver.dashboard_route().path(), "/driver");
        assert_eq!(Role::FleetManager.dashboard_route().path(), "/fleet");
        assert_eq!(Role::Driver.login_route().path(), "/driver/login");
    }
}
