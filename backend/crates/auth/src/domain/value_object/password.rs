//! Password Value Object
//!
//! Two policies exist: the signup/reset policy (length and character
//! classes) and the relaxed login policy (length only).

use std::fmt;
use thiserror::Error;

/// Minimum length for new passwords (signup, reset)
pub const MIN_NEW_PASSWORD_LENGTH: usize = 8;
/// Minimum length accepted on the login forms
pub const MIN_LOGIN_PASSWORD_LENGTH: usize = 6;

/// Why a password field was rejected. The `Display` text is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("Password is required")]
    Missing,
    #[error("Password must be at least {min} characters")]
    TooShort { min: usize },
    #[error(
        "Password must contain at least one uppercase letter, one lowercase letter, and one number"
    )]
    MissingCharacterClass,
}

/// Which rule set applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordPolicy {
    /// Signup and reset: length >= 8 plus lowercase, uppercase and digit
    Strong,
    /// Login: length >= 6, no composition rule
    Login,
}

impl PasswordPolicy {
    pub fn check(self, raw: &str) -> Result<(), PasswordError> {
        if raw.is_empty() {
            return Err(PasswordError::Missing);
        }
        let min = match self {
            PasswordPolicy::Strong => MIN_NEW_PASSWORD_LENGTH,
            PasswordPolicy::Login => MIN_LOGIN_PASSWORD_LENGTH,
        };
        if raw.chars().count() < min {
            return Err(PasswordError::TooShort { min });
        }
        match self {
            PasswordPolicy::Strong if !has_required_classes(raw) => {
                Err(PasswordError::MissingCharacterClass)
            }
            _ => Ok(()),
        }
    }
}

/// `true` iff the password is at least 8 characters long and contains an
/// ASCII lowercase letter, an ASCII uppercase letter and an ASCII digit,
/// in any order.
pub fn is_valid_password(raw: &str) -> bool {
    PasswordPolicy::Strong.check(raw).is_ok()
}

fn has_required_classes(raw: &str) -> bool {
    raw.chars().any(|c| c.is_ascii_lowercase())
        && raw.chars().any(|c| c.is_ascii_uppercase())
        && raw.chars().any(|c| c.is_ascii_digit())
}

/// Password as typed into a form field.
///
/// Kept out of `Debug` output so it never reaches the logs.
#[derive(Clone, PartialEq, Eq)]
pub struct RawPassword(String);

impl RawPassword {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_policy() {
        assert!(!is_valid_password("abcdEFGH"));
        assert!(is_valid_password("abcdEFG1"));
        assert!(is_valid_password("1Aaaaaaa"));
        assert!(!is_valid_password("ABCDEFG1"));
        assert!(!is_valid_password("abcdefg1"));
        assert!(!is_valid_password("aB1"));
        assert!(!is_valid_password(""));
    }

    #[test]
    fn test_strong_policy_error_order() {
        assert_eq!(PasswordPolicy::Strong.check(""), Err(PasswordError::Missing));
        assert_eq!(
            PasswordPolicy::Strong.check("aB1"),
            Err(PasswordError::TooShort { min: 8 })
        );
        assert_eq!(
            PasswordPolicy::Strong.check("abcdefgh"),
            Err(PasswordError::MissingCharacterClass)
        );
    }

    #[test]
    fn test_login_policy_has_no_composition_rule() {
        assert_eq!(PasswordPolicy::Login.check("abcdef"), Ok(()));
        assert_eq!(
            PasswordPolicy::Login.check("abcde"),
            Err(PasswordError::TooShort { min: 6 })
        );
        assert_eq!(
            PasswordError::TooShort { min: 6 }.to_string(),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn test_non_ascii_letters_do_not_count() {
        assert!(!is_valid_password("ÄÖÜäöü12"));
    }

    #[test]
    fn test_debug_redaction() {
        let raw = RawPassword::new("Passw0rd1");
        let debug = format!("{:?}", raw);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("Passw0rd1"));
    }
}
