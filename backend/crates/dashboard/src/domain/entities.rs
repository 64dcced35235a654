//! Domain Entities
//!
//! Everything the driver and fleet screens display. Serialized field
//! names are the camelCase keys the dashboard UI reads.

use chrono::{DateTime, Utc};
use kernel::id::{EmergencyContactId, SosEventId, SupportTicketId};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AlertLevel, DrowsinessStatus, TimeRange, Trend};

// ============================================================================
// Driver
// ============================================================================

/// Latest drowsiness reading
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrowsinessReading {
    pub status: DrowsinessStatus,
    /// 0-100
    pub level: u8,
    pub last_updated: String,
}

/// One vital sign reading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vital<T> {
    pub value: T,
    pub unit: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vitals {
    pub heart_rate: Vital<u32>,
    pub temperature: Vital<f64>,
    pub blood_pressure: Vital<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub id: u32,
    #[serde(rename = "type")]
    pub level: AlertLevel,
    pub message: String,
    pub time: String,
}

/// Driver home screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverOverview {
    pub drowsiness: DrowsinessReading,
    pub vitals: Vitals,
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmergencyContact {
    pub id: EmergencyContactId,
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

/// Contact as entered, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewEmergencyContact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub relationship: String,
}

impl NewEmergencyContact {
    pub fn into_contact(self) -> EmergencyContact {
        EmergencyContact {
            id: EmergencyContactId::new(),
            name: self.name,
            phone: self.phone,
            relationship: self.relationship,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub sound: bool,
    pub vibration: bool,
    pub email: bool,
    pub sms: bool,
    pub push_notifications: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettings {
    pub data_sharing: bool,
    pub location_tracking: bool,
    pub health_data_sharing: bool,
    pub analytics_sharing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverSettings {
    pub notifications: NotificationSettings,
    pub privacy: PrivacySettings,
    pub language: String,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            notifications: NotificationSettings {
                sound: true,
                vibration: true,
                email: true,
                sms: false,
                push_notifications: true,
            },
            privacy: PrivacySettings {
                data_sharing: false,
                location_tracking: true,
                health_data_sharing: false,
                analytics_sharing: true,
            },
            language: "en".to_string(),
        }
    }
}

/// Emergency SOS activation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SosEvent {
    pub id: SosEventId,
    pub activated_at: DateTime<Utc>,
    /// Name from the session profile, when it has one
    pub driver: Option<String>,
}

impl SosEvent {
    pub fn new(driver: Option<String>) -> Self {
        Self {
            id: SosEventId::new(),
            activated_at: Utc::now(),
            driver,
        }
    }
}

/// Editable driver profile record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DriverProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub license_id: String,
    pub vehicle_id: String,
    pub address: String,
}

// ============================================================================
// Help
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TroubleshootingStep {
    pub step: u32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportChannels {
    pub email: String,
    pub phone: String,
}

/// Help screen content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelpContent {
    pub faqs: Vec<Faq>,
    pub troubleshooting: Vec<TroubleshootingStep>,
    pub support: SupportChannels,
}

/// Contact form as entered, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SupportRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl SupportRequest {
    pub fn into_ticket(self) -> SupportTicket {
        SupportTicket {
            id: SupportTicketId::new(),
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            submitted_at: Utc::now(),
        }
    }
}

/// Accepted contact form submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    pub id: SupportTicketId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

// ============================================================================
// Fleet
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewStat {
    pub label: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetAlert {
    pub id: u32,
    pub driver: String,
    pub vehicle: String,
    #[serde(rename = "type")]
    pub level: AlertLevel,
    pub message: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverStatusRow {
    pub id: u32,
    pub name: String,
    pub vehicle: String,
    pub status: DrowsinessStatus,
    pub location: String,
    pub last_update: String,
}

/// Fleet manager home screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetOverview {
    pub stats: Vec<OverviewStat>,
    pub recent_alerts: Vec<FleetAlert>,
    pub driver_statuses: Vec<DriverStatusRow>,
}

/// One row of the driver roster
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterDriver {
    pub id: u32,
    pub name: String,
    pub vehicle_id: String,
    pub location: String,
    pub drowsiness_status: DrowsinessStatus,
    pub heart_rate: u32,
    pub temperature: f64,
    pub blood_pressure: String,
    pub last_update: String,
    pub alerts: u32,
}

/// Roster size per status, computed over the whole roster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RosterCounts {
    pub total: usize,
    pub safe: usize,
    pub warning: usize,
    pub critical: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrowsinessTrendPoint {
    pub date: String,
    pub safe: u32,
    pub warning: u32,
    pub critical: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetricPoint {
    pub time: String,
    pub heart_rate: u32,
    pub temperature: f64,
    pub blood_pressure: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertShare {
    #[serde(rename = "type")]
    pub category: String,
    pub count: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverPerformance {
    pub driver: String,
    pub safety_score: u32,
    pub alerts: u32,
    pub miles: u32,
}

/// Analytics series for one time window
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetAnalytics {
    pub range: TimeRange,
    pub drowsiness_trends: Vec<DrowsinessTrendPoint>,
    pub health_metrics: Vec<HealthMetricPoint>,
    pub alert_distribution: Vec<AlertShare>,
    pub driver_performance: Vec<DriverPerformance>,
}

// ============================================================================
// Landing
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadlineStat {
    pub label: String,
    pub value: String,
}

/// Public landing page content
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandingContent {
    pub features: Vec<Feature>,
    pub stats: Vec<HeadlineStat>,
}
