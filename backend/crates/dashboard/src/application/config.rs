//! Application Configuration
//!
//! Configuration for the Dashboard application layer.

use crate::domain::value_objects::TimeRange;

/// Dashboard application configuration
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Analytics window when the request names none
    pub default_time_range: TimeRange,
    /// Shown to the driver after an SOS activation
    pub sos_message: String,
    /// Shown to the driver after a help contact form is accepted
    pub support_reply: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_time_range: TimeRange::Week,
            sos_message:
                "Emergency SOS activated! Emergency services will be contacted immediately."
                    .to_string(),
            support_reply: "Thank you for your message. We'll get back to you soon!".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn development() -> Self {
        Self::default()
    }
}
