//! Form kinds and field values
//!
//! Field keys are the camelCase names the browser forms used. Nested
//! fields are addressed with one level of dotted keys
//! (`emergencyContact.phone`).

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::domain::value_object::Role;
use crate::error::{AuthError, AuthResult};

/// Field keys
pub mod field {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirmPassword";
    pub const VEHICLE_ID: &str = "vehicleId";
    pub const EMERGENCY_CONTACT_NAME: &str = "emergencyContact.name";
    pub const EMERGENCY_CONTACT_PHONE: &str = "emergencyContact.phone";
    pub const EMERGENCY_CONTACT_RELATIONSHIP: &str = "emergencyContact.relationship";
    pub const ORGANIZATION: &str = "organization";
    pub const PHONE: &str = "phone";
    pub const ADDRESS: &str = "address";
    pub const TOKEN: &str = "token";
    /// Wire key of the non-field banner error
    pub const GENERAL: &str = "general";
}

const DRIVER_SIGNUP_FIELDS: &[&str] = &[
    field::NAME,
    field::EMAIL,
    field::PASSWORD,
    field::CONFIRM_PASSWORD,
    field::VEHICLE_ID,
    field::EMERGENCY_CONTACT_NAME,
    field::EMERGENCY_CONTACT_PHONE,
    field::EMERGENCY_CONTACT_RELATIONSHIP,
];

const FLEET_SIGNUP_FIELDS: &[&str] = &[
    field::NAME,
    field::EMAIL,
    field::PASSWORD,
    field::CONFIRM_PASSWORD,
    field::ORGANIZATION,
    field::PHONE,
    field::ADDRESS,
];

const LOGIN_FIELDS: &[&str] = &[field::EMAIL, field::PASSWORD];
const FORGOT_PASSWORD_FIELDS: &[&str] = &[field::EMAIL];
const RESET_PASSWORD_FIELDS: &[&str] = &[field::PASSWORD, field::CONFIRM_PASSWORD, field::TOKEN];

/// Which form is being filled in. Decides the field set and the rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    DriverSignup,
    FleetSignup,
    Login(Role),
    ForgotPassword,
    ResetPassword,
}

impl FormKind {
    pub const fn signup(role: Role) -> Self {
        match role {
            Role::Driver => FormKind::DriverSignup,
            Role::FleetManager => FormKind::FleetSignup,
        }
    }

    pub const fn fields(&self) -> &'static [&'static str] {
        match self {
            FormKind::DriverSignup => DRIVER_SIGNUP_FIELDS,
            FormKind::FleetSignup => FLEET_SIGNUP_FIELDS,
            FormKind::Login(_) => LOGIN_FIELDS,
            FormKind::ForgotPassword => FORGOT_PASSWORD_FIELDS,
            FormKind::ResetPassword => RESET_PASSWORD_FIELDS,
        }
    }

    /// Role the form signs in as; `None` for the password recovery forms.
    pub const fn role(&self) -> Option<Role> {
        match self {
            FormKind::DriverSignup => Some(Role::Driver),
            FormKind::FleetSignup => Some(Role::FleetManager),
            FormKind::Login(role) => Some(*role),
            FormKind::ForgotPassword | FormKind::ResetPassword => None,
        }
    }

    pub fn accepts(&self, key: &str) -> bool {
        self.fields().contains(&key)
    }

    /// Short name for logs
    pub const fn as_str(&self) -> &'static str {
        match self {
            FormKind::DriverSignup => "driver_signup",
            FormKind::FleetSignup => "fleet_signup",
            FormKind::Login(Role::Driver) => "driver_login",
            FormKind::Login(Role::FleetManager) => "fleet_login",
            FormKind::ForgotPassword => "forgot_password",
            FormKind::ResetPassword => "reset_password",
        }
    }
}

/// Field key to string value. `""` means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    /// Every field of `kind` set to the empty string
    pub fn for_kind(kind: FormKind) -> Self {
        Self(
            kind.fields()
                .iter()
                .map(|key| (key.to_string(), String::new()))
                .collect(),
        )
    }

    /// Value of `key`, `""` when the key is not present
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Build the values of `kind` from a nested JSON object.
    ///
    /// Nested objects are flattened one level into dotted keys. Keys the
    /// form does not have are rejected, as are non-string leaves. Fields
    /// the object omits stay empty.
    pub fn from_nested_json(kind: FormKind, json: &Value) -> AuthResult<Self> {
        let object = json
            .as_object()
            .ok_or_else(|| AuthError::InvalidFieldValue("<root>".to_string()))?;

        let mut values = FormValues::for_kind(kind);
        for (key, value) in object {
            match value {
                Value::Object(inner) => {
                    for (inner_key, inner_value) in inner {
                        let dotted = format!("{key}.{inner_key}");
                        values.assign(kind, dotted, inner_value)?;
                    }
                }
                other => values.assign(kind, key.clone(), other)?,
            }
        }
        Ok(values)
    }

    fn assign(&mut self, kind: FormKind, key: String, value: &Value) -> AuthResult<()> {
        if !kind.accepts(&key) {
            return Err(AuthError::UnknownField(key));
        }
        match value {
            Value::String(s) => {
                self.0.insert(key, s.clone());
                Ok(())
            }
            Value::Null => Ok(()),
            _ => Err(AuthError::InvalidFieldValue(key)),
        }
    }

    /// Render back into a nested JSON object, one level deep.
    pub fn to_nested_json(&self) -> Value {
        let mut root = Map::new();
        for (key, value) in &self.0 {
            match key.split_once('.') {
                Some((outer, inner)) => {
                    let entry = root
                        .entry(outer.to_string())
                        .or_insert_with(|| Value::Object(Map::new()));
                    if let Value::Object(nested) = entry {
                        nested.insert(inner.to_string(), Value::String(value.clone()));
                    }
                }
                None => {
                    root.insert(key.clone(), Value::String(value.clone()));
                }
            }
        }
        Value::Object(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_initial_values_are_empty() {
        let values = FormValues::for_kind(FormKind::FleetSignup);
        assert_eq!(values.iter().count(), 7);
        assert!(values.iter().all(|(_, v)| v.is_empty()));
        assert!(values.contains(field::ORGANIZATION));
        assert!(!values.contains(field::VEHICLE_ID));
    }

    #[test]
    fn test_from_nested_json_flattens_one_level() {
        let values = FormValues::from_nested_json(
            FormKind::DriverSignup,
            &json!({
                "name": "Ann Lee",
                "emergencyContact": { "phone": "555-0100", "name": "Bo" }
            }),
        )
        .unwrap();

        assert_eq!(values.get(field::NAME), "Ann Lee");
        assert_eq!(values.get(field::EMERGENCY_CONTACT_PHONE), "555-0100");
        assert_eq!(values.get(field::EMERGENCY_CONTACT_RELATIONSHIP), "");
    }

    #[test]
    fn test_from_nested_json_rejects_unknown_keys() {
        let err = FormValues::from_nested_json(
            FormKind::Login(Role::Driver),
            &json!({ "email": "a@b.co", "vehicleId": "VH1" }),
        )
        .unwrap_err();
        assert!(matches!(err, AuthError::UnknownField(key) if key == "vehicleId"));

        let err =
            FormValues::from_nested_json(FormKind::ForgotPassword, &json!({ "email": 42 }))
                .unwrap_err();
        assert!(matches!(err, AuthError::InvalidFieldValue(key) if key == "email"));
    }

    #[test]
    fn test_to_nested_json() {
        let mut values = FormValues::for_kind(FormKind::DriverSignup);
        values.set(field::EMERGENCY_CONTACT_RELATIONSHIP, "Spouse");
        let json = values.to_nested_json();
        assert_eq!(json["emergencyContact"]["relationship"], "Spouse");
        assert_eq!(json["emergencyContact"]["name"], "");
        assert_eq!(json["vehicleId"], "");
    }

    #[test]
    fn test_kind_roles() {
        assert_eq!(FormKind::signup(Role::FleetManager), FormKind::FleetSignup);
        assert_eq!(FormKind::Login(Role::Driver).role(), Some(Role::Driver));
        assert_eq!(FormKind::ResetPassword.role(), None);
    }
}
