//! Driver Help Use Case
//!
//! FAQ and troubleshooting content, plus the contact form. Accepted
//! requests are only kept in the repository; no one is notified.

use std::sync::Arc;

use crate::application::config::DashboardConfig;
use crate::domain::entities::{HelpContent, SupportRequest, SupportTicket};
use crate::domain::repository::DriverRepository;
use crate::domain::services::validate_support_request;
use crate::error::{DashboardError, DashboardResult};

/// Accepted contact form
#[derive(Debug, Clone)]
pub struct SupportOutput {
    pub ticket: SupportTicket,
    pub message: String,
}

pub struct DriverHelpUseCase<R>
where
    R: DriverRepository + Send + Sync + 'static,
{
    repo: Arc<R>,
    config: Arc<DashboardConfig>,
}

impl<R> DriverHelpUseCase<R>
where
    R: DriverRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, config: Arc<DashboardConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn content(&self) -> DashboardResult<HelpContent> {
        self.repo.help().await
    }

    pub async fn contact(&self, request: SupportRequest) -> DashboardResult<SupportOutput> {
        let errors = validate_support_request(&request);
        if !errors.is_empty() {
            return Err(DashboardError::InvalidSupportRequest(errors));
        }

        let ticket = request.into_ticket();
        self.repo.record_support_request(&ticket).await?;

        tracing::info!(
            ticket_id = %ticket.id,
            subject = %ticket.subject,
            "Support request received"
        );

        Ok(SupportOutput {
            ticket,
            message: self.config.support_reply.clone(),
        })
    }
}
