//! Simulated account service
//!
//! Waits a fixed latency and answers with canned data. There is no real
//! identity service behind SmartGuard yet.

use serde_json::json;
use std::time::Duration;

use kernel::id::ProfileId;

use crate::application::config::AuthConfig;
use crate::domain::entity::{
    form::{FormValues, field},
    session::{Credentials, Profile},
};
use crate::domain::repository::AccountGateway;
use crate::domain::value_object::Role;
use crate::error::{AuthError, AuthResult};

/// Whether the simulated calls succeed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GatewayMode {
    #[default]
    Succeed,
    Fail,
}

#[derive(Debug, Clone)]
pub struct SimulatedAccountGateway {
    latency: Duration,
    mode: GatewayMode,
}

impl SimulatedAccountGateway {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            mode: GatewayMode::Succeed,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        let mode = if config.simulate_failure {
            GatewayMode::Fail
        } else {
            GatewayMode::Succeed
        };
        Self::new(config.simulated_latency).with_mode(mode)
    }

    pub fn with_mode(mut self, mode: GatewayMode) -> Self {
        self.mode = mode;
        self
    }

    async fn respond(&self, operation: &str) -> AuthResult<()> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        match self.mode {
            GatewayMode::Succeed => Ok(()),
            GatewayMode::Fail => Err(AuthError::Gateway(format!(
                "simulated {operation} failure"
            ))),
        }
    }
}

impl AccountGateway for SimulatedAccountGateway {
    async fn create_account(&self, role: Role, fields: &FormValues) -> AuthResult<Profile> {
        self.respond("signup").await?;

        let profile = Profile::new()
            .with("id", ProfileId::new().to_string())
            .with("name", fields.get(field::NAME))
            .with("email", fields.get(field::EMAIL))
            .with("role", role.code());

        Ok(match role {
            Role::Driver => profile
                .with("vehicleId", fields.get(field::VEHICLE_ID))
                .with(
                    "emergencyContact",
                    json!({
                        "name": fields.get(field::EMERGENCY_CONTACT_NAME),
                        "phone": fields.get(field::EMERGENCY_CONTACT_PHONE),
                        "relationship": fields.get(field::EMERGENCY_CONTACT_RELATIONSHIP),
                    }),
                ),
            Role::FleetManager => profile
                .with("organization", fields.get(field::ORGANIZATION))
                .with("phone", fields.get(field::PHONE))
                .with("address", fields.get(field::ADDRESS)),
        })
    }

    async fn login(&self, role: Role, credentials: &Credentials) -> AuthResult<Profile> {
        self.respond("login").await?;

        let profile = Profile::new()
            .with("id", ProfileId::new().to_string())
            .with("email", credentials.email.as_str())
            .with("role", role.code());

        Ok(match role {
            Role::Driver => profile
                .with("name", "John Doe")
                .with("vehicleId", "VH987654321"),
            Role::FleetManager => profile
                .with("name", "Sarah Fleet Manager")
                .with("organization", "ABC Transport Co."),
        })
    }

    async fn request_password_reset(&self, email: &str) -> AuthResult<()> {
        self.respond("password reset request").await?;
        tracing::debug!(email = %email, "Simulated reset email sent");
        Ok(())
    }

    async fn reset_password(&self, _token: &str, _new_password: &str) -> AuthResult<()> {
        self.respond("password reset").await
    }
}
