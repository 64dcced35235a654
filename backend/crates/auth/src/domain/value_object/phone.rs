//! Phone number pattern
//!
//! Deliberately permissive: digits, whitespace, dashes, parentheses and an
//! optional leading `+`.

use regex::Regex;
use std::sync::LazyLock;

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]+$").expect("phone pattern is valid"));

pub const INVALID_PHONE_MESSAGE: &str = "Please enter a valid phone number";

pub fn is_valid_phone(raw: &str) -> bool {
    PHONE_PATTERN.is_match(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_pattern() {
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(is_valid_phone("5551234567"));
        assert!(is_valid_phone("   "));
        assert!(!is_valid_phone("++15551234"));
        assert!(!is_valid_phone("555-CALL-NOW"));
        assert!(!is_valid_phone("1+555"));
        assert!(!is_valid_phone(""));
    }
}
