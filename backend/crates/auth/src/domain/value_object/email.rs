//! Email Value Object
//!
//! Only the loose `<non-space>@<non-space>.<non-space>` shape is checked;
//! real verification belongs to the account service.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Why an email field was rejected. The `Display` text is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Email is required")]
    Missing,
    #[error("Please enter a valid email address")]
    InvalidShape,
}

/// Email address that passed the shape check
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Validate raw input. Only the empty string counts as missing; the
    /// value is stored exactly as typed.
    pub fn parse(raw: &str) -> Result<Self, EmailError> {
        if raw.is_empty() {
            return Err(EmailError::Missing);
        }
        if !is_valid_email(raw) {
            return Err(EmailError::InvalidShape);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// `true` when the input contains `<non-space>@<non-space>.<non-space>`.
pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_SHAPE.is_match(raw)
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("driver.one+tag@fleet.example.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("ab.c"));
        assert!(!is_valid_email("a @b.c"));
        assert!(!is_valid_email("@b.c"));
    }

    #[test]
    fn test_email_parse_errors() {
        assert_eq!(Email::parse(""), Err(EmailError::Missing));
        assert_eq!(Email::parse("   "), Err(EmailError::InvalidShape));
        assert_eq!(Email::parse("a@b"), Err(EmailError::InvalidShape));
        assert_eq!(
            EmailError::InvalidShape.to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_email_kept_verbatim() {
        let email = Email::parse("Jane@Example.COM").unwrap();
        assert_eq!(email.as_str(), "Jane@Example.COM");
    }
}
