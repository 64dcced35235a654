//! Check Session Use Case
//!
//! Reports who is signed in, if anyone.

use std::sync::Arc;

use crate::domain::entity::session::SessionRecord;
use crate::domain::repository::SessionStore;
use crate::error::AuthResult;

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionStore + Send + Sync + 'static,
{
    store: Arc<S>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> AuthResult<Option<SessionRecord>> {
        let session = self.store.read().await?;
        Ok(session.filter(|record| record.authenticated))
    }
}
