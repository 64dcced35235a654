//! Submission Coordinator
//!
//! Drives one submit of a form: validate, call the account service once,
//! persist the session, hand back where to go next.

use std::sync::Arc;

use crate::application::form_state::{FormState, SubmitPhase};
use crate::application::validator::validate;
use crate::domain::entity::{
    error_map::ErrorMap,
    form::{FormKind, FormValues, field},
    session::{Credentials, SessionRecord},
};
use crate::domain::repository::{AccountGateway, SessionStore};
use crate::domain::route::Route;
use crate::domain::value_object::{RawPassword, Role};
use crate::error::AuthResult;

/// Result of one submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the account service was not called
    Invalid(ErrorMap),
    /// Signed in; the session is already stored
    Navigate(Route),
    /// Password recovery step accepted
    Completed,
    /// Account service or session store failed; carries the banner message
    Failed(String),
    /// A previous submit of this form never finished
    Busy,
}

/// Banner message shown when the submit of `kind` fails
pub const fn failure_message(kind: FormKind) -> &'static str {
    match kind {
        FormKind::DriverSignup | FormKind::FleetSignup => "Signup failed. Please try again.",
        FormKind::Login(_) => "Login failed. Please try again.",
        FormKind::ForgotPassword => "Failed to send reset email. Please try again.",
        FormKind::ResetPassword => "Failed to reset password. Please try again.",
    }
}

pub struct SubmissionCoordinator<G, S>
where
    G: AccountGateway + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    gateway: Arc<G>,
    store: Arc<S>,
}

impl<G, S> SubmissionCoordinator<G, S>
where
    G: AccountGateway + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    pub fn new(gateway: Arc<G>, store: Arc<S>) -> Self {
        Self { gateway, store }
    }

    /// Submit `form`.
    ///
    /// There is no timeout and no retry. If the returned future is dropped
    /// while the account service is being called, the form stays in
    /// `Submitting` and further submits answer `Busy` until `reset()`.
    pub async fn submit(&self, form: &mut FormState) -> SubmitOutcome {
        let kind = form.kind();

        if form.phase() == SubmitPhase::Submitting {
            tracing::warn!(form = kind.as_str(), "Submit refused, previous submit in flight");
            return SubmitOutcome::Busy;
        }

        form.begin_validation();
        let errors = validate(kind, form.values());
        if !errors.is_empty() {
            tracing::debug!(form = kind.as_str(), fields = errors.len(), "Form rejected");
            form.reject(errors.clone());
            return SubmitOutcome::Invalid(errors);
        }

        form.begin_submit();
        match self.dispatch(kind, form.values()).await {
            Ok(outcome) => {
                form.succeed();
                outcome
            }
            Err(e) => {
                e.log();
                let message = failure_message(kind);
                form.fail(message);
                SubmitOutcome::Failed(message.to_string())
            }
        }
    }

    async fn dispatch(&self, kind: FormKind, values: &FormValues) -> AuthResult<SubmitOutcome> {
        match kind {
            FormKind::DriverSignup => self.sign_up(Role::Driver, values).await,
            FormKind::FleetSignup => self.sign_up(Role::FleetManager, values).await,
            FormKind::Login(role) => {
                let credentials = Credentials {
                    email: values.get(field::EMAIL).to_string(),
                    password: RawPassword::new(values.get(field::PASSWORD)),
                };
                let profile = self.gateway.login(role, &credentials).await?;
                tracing::info!(role = %role, "User signed in");
                self.establish(role, SessionRecord::signed_in(role, profile))
                    .await
            }
            FormKind::ForgotPassword => {
                self.gateway
                    .request_password_reset(values.get(field::EMAIL))
                    .await?;
                tracing::info!("Password reset email requested");
                Ok(SubmitOutcome::Completed)
            }
            FormKind::ResetPassword => {
                self.gateway
                    .reset_password(values.get(field::TOKEN), values.get(field::PASSWORD))
                    .await?;
                tracing::info!("Password reset");
                Ok(SubmitOutcome::Completed)
            }
        }
    }

    async fn sign_up(&self, role: Role, values: &FormValues) -> AuthResult<SubmitOutcome> {
        let profile = self.gateway.create_account(role, values).await?;
        tracing::info!(role = %role, "Account created");
        self.establish(role, SessionRecord::signed_in(role, profile))
            .await
    }

    /// Store the session, then produce the navigation target.
    async fn establish(&self, role: Role, record: SessionRecord) -> AuthResult<SubmitOutcome> {
        self.store.write(&record).await?;
        Ok(SubmitOutcome::Navigate(role.dashboard_route()))
    }
}
