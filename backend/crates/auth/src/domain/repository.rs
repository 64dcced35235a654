//! Collaborator Traits
//!
//! Interfaces the application layer is wired against. Implementations
//! live in the infrastructure layer; tests plug in fakes.

use crate::domain::entity::{
    form::FormValues,
    session::{Credentials, Profile, SessionRecord},
};
use crate::domain::value_object::Role;
use crate::error::AuthResult;

/// Session persistence
///
/// The three stored keys are always written and cleared together.
#[trait_variant::make(SessionStore: Send)]
pub trait LocalSessionStore {
    /// Current session, `None` when nobody is signed in
    async fn read(&self) -> AuthResult<Option<SessionRecord>>;

    /// Replace the stored session
    async fn write(&self, record: &SessionRecord) -> AuthResult<()>;

    /// Remove the stored session
    async fn clear(&self) -> AuthResult<()>;
}

/// Account service
///
/// Every method is called at most once per submit. Failures come back as
/// `AuthError::Gateway`.
#[trait_variant::make(AccountGateway: Send)]
pub trait LocalAccountGateway {
    /// Register a new account from the signup form values
    async fn create_account(&self, role: Role, fields: &FormValues) -> AuthResult<Profile>;

    /// Sign in an existing account
    async fn login(&self, role: Role, credentials: &Credentials) -> AuthResult<Profile>;

    /// Send a password reset email
    async fn request_password_reset(&self, email: &str) -> AuthResult<()>;

    /// Set a new password using a reset token
    async fn reset_password(&self, token: &str, new_password: &str) -> AuthResult<()>;
}
