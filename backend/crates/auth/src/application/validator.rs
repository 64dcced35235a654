//! Form Validation
//!
//! Pure rule sets, one per form kind. Each field reports only the first
//! rule it fails; the messages are shown to the user verbatim.

use crate::domain::entity::{
    error_map::ErrorMap,
    form::{FormKind, FormValues, field},
};
use crate::domain::value_object::{Email, PasswordPolicy, is_valid_phone, phone};

pub const NAME_REQUIRED: &str = "Full name is required";
pub const CONFIRM_REQUIRED: &str = "Please confirm your password";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
pub const VEHICLE_ID_REQUIRED: &str = "Vehicle ID is required";
pub const ORGANIZATION_REQUIRED: &str = "Organization name is required";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const ADDRESS_REQUIRED: &str = "Address is required";
pub const CONTACT_NAME_REQUIRED: &str = "Emergency contact name is required";
pub const CONTACT_PHONE_REQUIRED: &str = "Emergency contact phone is required";
pub const CONTACT_RELATIONSHIP_REQUIRED: &str = "Relationship to emergency contact is required";

/// Validate `values` against the rules of `kind`.
///
/// An empty map means the form may be submitted.
pub fn validate(kind: FormKind, values: &FormValues) -> ErrorMap {
    let mut errors = ErrorMap::new();

    match kind {
        FormKind::DriverSignup => {
            check_signup_common(values, &mut errors);
            require(values, field::VEHICLE_ID, VEHICLE_ID_REQUIRED, &mut errors);
            errors.merge(validate_emergency_contact(values));
        }
        FormKind::FleetSignup => {
            check_signup_common(values, &mut errors);
            require(values, field::ORGANIZATION, ORGANIZATION_REQUIRED, &mut errors);
            check_phone(values, field::PHONE, PHONE_REQUIRED, &mut errors);
            require(values, field::ADDRESS, ADDRESS_REQUIRED, &mut errors);
        }
        FormKind::Login(_) => {
            check_email(values, &mut errors);
            check_password(values, PasswordPolicy::Login, &mut errors);
        }
        FormKind::ForgotPassword => {
            check_email(values, &mut errors);
        }
        // The token is passed through unvalidated.
        FormKind::ResetPassword => {
            check_password(values, PasswordPolicy::Strong, &mut errors);
            check_confirmation(values, &mut errors);
        }
    }

    errors
}

/// Rules for the three `emergencyContact.*` fields.
pub fn validate_emergency_contact(values: &FormValues) -> ErrorMap {
    let mut errors = ErrorMap::new();
    require(
        values,
        field::EMERGENCY_CONTACT_NAME,
        CONTACT_NAME_REQUIRED,
        &mut errors,
    );
    check_phone(
        values,
        field::EMERGENCY_CONTACT_PHONE,
        CONTACT_PHONE_REQUIRED,
        &mut errors,
    );
    require(
        values,
        field::EMERGENCY_CONTACT_RELATIONSHIP,
        CONTACT_RELATIONSHIP_REQUIRED,
        &mut errors,
    );
    errors
}

fn check_signup_common(values: &FormValues, errors: &mut ErrorMap) {
    require(values, field::NAME, NAME_REQUIRED, errors);
    check_email(values, errors);
    check_password(values, PasswordPolicy::Strong, errors);
    check_confirmation(values, errors);
}

/// Non-blank after trimming
fn require(values: &FormValues, key: &str, message: &str, errors: &mut ErrorMap) {
    if values.get(key).trim().is_empty() {
        errors.insert(key, message);
    }
}

fn check_email(values: &FormValues, errors: &mut ErrorMap) {
    if let Err(e) = Email::parse(values.get(field::EMAIL)) {
        errors.insert(field::EMAIL, e.to_string());
    }
}

fn check_password(values: &FormValues, policy: PasswordPolicy, errors: &mut ErrorMap) {
    if let Err(e) = policy.check(values.get(field::PASSWORD)) {
        errors.insert(field::PASSWORD, e.to_string());
    }
}

/// Byte-for-byte equality with `password`
fn check_confirmation(values: &FormValues, errors: &mut ErrorMap) {
    let confirm = values.get(field::CONFIRM_PASSWORD);
    if confirm.is_empty() {
        errors.insert(field::CONFIRM_PASSWORD, CONFIRM_REQUIRED);
    } else if confirm != values.get(field::PASSWORD) {
        errors.insert(field::CONFIRM_PASSWORD, PASSWORDS_DO_NOT_MATCH);
    }
}

fn check_phone(values: &FormValues, key: &str, missing: &str, errors: &mut ErrorMap) {
    let raw = values.get(key);
    if raw.trim().is_empty() {
        errors.insert(key, missing);
    } else if !is_valid_phone(raw) {
        errors.insert(key, phone::INVALID_PHONE_MESSAGE);
    }
}
