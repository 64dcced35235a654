//! Navigation targets
//!
//! Every place a submit, sign-out or guard decision can send the user.
//! Paths are the only thing the HTTP layer sees.

use std::fmt;

use crate::domain::value_object::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Login(Role),
    Dashboard(Role),
}

impl Route {
    pub const fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login(Role::Driver) => "/driver/login",
            Route::Login(Role::FleetManager) => "/fleet/login",
            Route::Dashboard(Role::Driver) => "/driver",
            Route::Dashboard(Role::FleetManager) => "/fleet",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Route::Landing.path(), "/");
        assert_eq!(Route::Login(Role::FleetManager).to_string(), "/fleet/login");
        assert_eq!(Route::Dashboard(Role::Driver).path(), "/driver");
    }
}
