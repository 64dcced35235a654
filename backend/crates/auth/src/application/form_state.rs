//! Form State Controller
//!
//! Holds what one form shows: field values, per-field errors, the banner
//! error, the loading flag and where the submit state machine is.

use serde_json::Value;

use crate::domain::entity::{
    error_map::ErrorMap,
    form::{FormKind, FormValues},
};
use crate::error::{AuthError, AuthResult};

/// Submit state machine position
///
/// `Idle → Validating → Idle` on invalid input,
/// `Idle → Validating → Submitting → Succeeded` on success and
/// `… → Submitting → Idle` on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
}

#[derive(Debug, Clone)]
pub struct FormState {
    kind: FormKind,
    values: FormValues,
    errors: ErrorMap,
    general_error: Option<String>,
    loading: bool,
    phase: SubmitPhase,
}

impl FormState {
    pub fn new(kind: FormKind) -> Self {
        Self::with_values(kind, FormValues::for_kind(kind))
    }

    /// Start from values that were already filled in elsewhere
    pub fn with_values(kind: FormKind, values: FormValues) -> Self {
        Self {
            kind,
            values,
            errors: ErrorMap::new(),
            general_error: None,
            loading: false,
            phase: SubmitPhase::Idle,
        }
    }

    /// Update one field. Clears that field's error, and only that one.
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) -> AuthResult<()> {
        if !self.kind.accepts(key) {
            return Err(AuthError::UnknownField(key.to_string()));
        }
        self.values.set(key, value);
        self.errors.remove(key);
        Ok(())
    }

    /// Back to the initial, empty form
    pub fn reset(&mut self) {
        *self = Self::new(self.kind);
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn to_nested_json(&self) -> Value {
        self.values.to_nested_json()
    }

    // Transitions driven by the submission coordinator

    pub(crate) fn begin_validation(&mut self) {
        self.phase = SubmitPhase::Validating;
        self.general_error = None;
    }

    pub(crate) fn reject(&mut self, errors: ErrorMap) {
        self.errors = errors;
        self.phase = SubmitPhase::Idle;
    }

    pub(crate) fn begin_submit(&mut self) {
        self.errors.clear();
        self.loading = true;
        self.phase = SubmitPhase::Submitting;
    }

    pub(crate) fn succeed(&mut self) {
        self.loading = false;
        self.phase = SubmitPhase::Succeeded;
    }

    pub(crate) fn fail(&mut self, message: &str) {
        self.general_error = Some(message.to_string());
        self.loading = false;
        self.phase = SubmitPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::form::field;

    #[test]
    fn test_set_field_clears_only_that_error() {
        let mut form = FormState::new(FormKind::ResetPassword);
        let mut errors = ErrorMap::new();
        errors.insert(field::PASSWORD, "Password is required");
        errors.insert(field::CONFIRM_PASSWORD, "Please confirm your password");
        form.reject(errors);

        form.set_field(field::PASSWORD, "x").unwrap();

        assert!(form.errors().get(field::PASSWORD).is_none());
        assert_eq!(
            form.errors().get(field::CONFIRM_PASSWORD),
            Some("Please confirm your password")
        );
        assert_eq!(form.values().get(field::PASSWORD), "x");
    }

    #[test]
    fn test_set_field_rejects_unknown_key() {
        let mut form = FormState::new(FormKind::ForgotPassword);
        let err = form.set_field("password", "x").unwrap_err();
        assert!(matches!(err, AuthError::UnknownField(key) if key == "password"));
        assert!(!form.values().contains("password"));
    }

    #[test]
    fn test_reset_returns_to_initial_state() {
        let mut form = FormState::new(FormKind::FleetSignup);
        form.set_field(field::ORGANIZATION, "ABC").unwrap();
        form.begin_submit();
        form.fail("Signup failed. Please try again.");

        form.reset();

        assert_eq!(form.values(), &FormValues::for_kind(FormKind::FleetSignup));
        assert!(form.errors().is_empty());
        assert!(form.general_error().is_none());
        assert!(!form.is_loading());
        assert_eq!(form.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn test_nested_field_update() {
        let mut form = FormState::new(FormKind::DriverSignup);
        form.set_field(field::EMERGENCY_CONTACT_NAME, "Bo").unwrap();
        assert_eq!(form.to_nested_json()["emergencyContact"]["name"], "Bo");
    }
}
