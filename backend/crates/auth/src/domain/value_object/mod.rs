//! Value Object Module

pub mod email;
pub mod password;
pub mod phone;
pub mod role;

pub use email::{Email, EmailError, is_valid_email};
pub use password::{PasswordError, PasswordPolicy, RawPassword, is_valid_password};
pub use phone::is_valid_phone;
pub use role::Role;
