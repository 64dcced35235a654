//! Shared Kernel - SmartGuard cross-crate core
//!
//! The smallest vocabulary shared by the `auth` and `dashboard` crates:
//! - Unified error type, error kinds and result alias
//! - Typed identifiers for profiles, contacts and SOS events
//!
//! **Design Principle**: Only include things whose meaning is identical
//! in every SmartGuard domain.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
