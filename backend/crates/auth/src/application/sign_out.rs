//! Sign Out Use Case
//!
//! Removes the stored session.

use std::sync::Arc;

use crate::domain::repository::SessionStore;
use crate::domain::route::Route;
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: SessionStore + Send + Sync + 'static,
{
    store: Arc<S>,
}

impl<S> SignOutUseCase<S>
where
    S: SessionStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Clear all session keys and return the landing page
    pub async fn execute(&self) -> AuthResult<Route> {
        self.store.clear().await?;
        tracing::info!("User signed out");
        Ok(Route::Landing)
    }
}
