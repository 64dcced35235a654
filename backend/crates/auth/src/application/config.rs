//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::path::PathBuf;
use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// JSON file backing the session store
    pub storage_path: PathBuf,
    /// Delay of the simulated account service (1 second)
    pub simulated_latency: Duration,
    /// Make every simulated account service call fail
    pub simulate_failure: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("data/smartguard-storage.json"),
            simulated_latency: Duration::from_millis(1000),
            simulate_failure: false,
        }
    }
}

impl AuthConfig {
    /// Create config for development (session file in the temp dir)
    pub fn development() -> Self {
        Self {
            storage_path: std::env::temp_dir().join("smartguard-storage.json"),
            ..Default::default()
        }
    }

    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = path.into();
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = latency;
        self
    }

    pub fn with_failure(mut self, fail: bool) -> Self {
        self.simulate_failure = fail;
        self
    }

    /// Get simulated latency in milliseconds
    pub fn simulated_latency_ms(&self) -> u64 {
        self.simulated_latency.as_millis() as u64
    }
}
