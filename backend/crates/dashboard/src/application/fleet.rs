//! Fleet Dashboard Use Case
//!
//! Overview, roster search and analytics for fleet managers.

use std::sync::Arc;

use crate::application::config::DashboardConfig;
use crate::domain::entities::{FleetAnalytics, FleetOverview, RosterCounts, RosterDriver};
use crate::domain::repository::FleetRepository;
use crate::domain::services::{filter_roster, roster_counts};
use crate::domain::value_objects::{StatusFilter, TimeRange};
use crate::error::DashboardResult;

/// Roster search input
#[derive(Debug, Clone, Default)]
pub struct RosterQuery {
    pub search: String,
    pub filter: StatusFilter,
}

/// Matching rows plus counts over the unfiltered roster
#[derive(Debug, Clone)]
pub struct RosterOutput {
    pub drivers: Vec<RosterDriver>,
    pub counts: RosterCounts,
}

pub struct FleetDashboardUseCase<R>
where
    R: FleetRepository + Send + Sync + 'static,
{
    repo: Arc<R>,
    config: Arc<DashboardConfig>,
}

impl<R> FleetDashboardUseCase<R>
where
    R: FleetRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, config: Arc<DashboardConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn overview(&self) -> DashboardResult<FleetOverview> {
        self.repo.overview().await
    }

    pub async fn roster(&self, query: &RosterQuery) -> DashboardResult<RosterOutput> {
        let all = self.repo.roster().await?;
        let drivers = filter_roster(&all, &query.search, query.filter);

        tracing::debug!(
            search = %query.search,
            matched = drivers.len(),
            total = all.len(),
            "Roster filtered"
        );

        Ok(RosterOutput {
            counts: roster_counts(&all),
            drivers,
        })
    }

    /// `None` falls back to the configured default range
    pub async fn analytics(&self, range: Option<TimeRange>) -> DashboardResult<FleetAnalytics> {
        let range = range.unwrap_or(self.config.default_time_range);
        self.repo.analytics(range).await
    }
}
