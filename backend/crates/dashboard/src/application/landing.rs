//! Landing Page Use Case

use std::sync::Arc;

use crate::domain::entities::LandingContent;
use crate::domain::repository::FleetRepository;
use crate::error::DashboardResult;

pub struct LandingUseCase<R>
where
    R: FleetRepository + Send + Sync + 'static,
{
    repo: Arc<R>,
}

impl<R> LandingUseCase<R>
where
    R: FleetRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> DashboardResult<LandingContent> {
        self.repo.landing().await
    }
}
