//! API DTOs (Data Transfer Objects)
//!
//! Entities already serialize in the shape the UI reads; this module
//! only holds query strings and the envelopes that add to them.

use chrono::{DateTime, Utc};
use kernel::id::{SosEventId, SupportTicketId};
use serde::{Deserialize, Serialize};

use crate::application::{RosterOutput, SosOutput, SupportOutput};
use crate::domain::entities::{RosterCounts, RosterDriver};

// ============================================================================
// Fleet
// ============================================================================

/// `GET /fleet/drivers?search=&status=`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// `GET /fleet/analytics?range=`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyticsParams {
    #[serde(default)]
    pub range: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterResponse {
    pub drivers: Vec<RosterDriver>,
    pub counts: RosterCounts,
}

impl From<RosterOutput> for RosterResponse {
    fn from(output: RosterOutput) -> Self {
        Self {
            drivers: output.drivers,
            counts: output.counts,
        }
    }
}

// ============================================================================
// Driver
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SosResponse {
    pub id: SosEventId,
    pub activated_at: DateTime<Utc>,
    pub message: String,
}

impl From<SosOutput> for SosResponse {
    fn from(output: SosOutput) -> Self {
        Self {
            id: output.event.id,
            activated_at: output.event.activated_at,
            message: output.message,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportResponse {
    pub id: SupportTicketId,
    pub submitted_at: DateTime<Utc>,
    pub message: String,
}

impl From<SupportOutput> for SupportResponse {
    fn from(output: SupportOutput) -> Self {
        Self {
            id: output.ticket.id,
            submitted_at: output.ticket.submitted_at,
            message: output.message,
        }
    }
}
