//! Domain Services
//!
//! Pure functions over roster rows and driver form input.

use auth::application::validator::{
    ADDRESS_REQUIRED, NAME_REQUIRED, PHONE_REQUIRED, VEHICLE_ID_REQUIRED,
    validate_emergency_contact,
};
use auth::domain::value_object::phone::INVALID_PHONE_MESSAGE;
use auth::models::{Email, ErrorMap, FormKind, FormValues, field, is_valid_phone};

use crate::domain::entities::{
    DriverProfile, NewEmergencyContact, RosterCounts, RosterDriver, SupportRequest,
};
use crate::domain::value_objects::{DrowsinessStatus, StatusFilter};

/// Rows whose name or vehicle id contains `search` (case-insensitive) and
/// whose status passes `filter`. An empty search matches every row.
pub fn filter_roster(
    drivers: &[RosterDriver],
    search: &str,
    filter: StatusFilter,
) -> Vec<RosterDriver> {
    let needle = search.to_lowercase();
    drivers
        .iter()
        .filter(|driver| {
            driver.name.to_lowercase().contains(&needle)
                || driver.vehicle_id.to_lowercase().contains(&needle)
        })
        .filter(|driver| filter.matches(driver.drowsiness_status))
        .cloned()
        .collect()
}

pub fn roster_counts(drivers: &[RosterDriver]) -> RosterCounts {
    drivers
        .iter()
        .fold(
            RosterCounts {
                total: drivers.len(),
                ..Default::default()
            },
            |mut counts, driver| {
                match driver.drowsiness_status {
                    DrowsinessStatus::Safe => counts.safe += 1,
                    DrowsinessStatus::Warning => counts.warning += 1,
                    DrowsinessStatus::Critical => counts.critical += 1,
                }
                counts
            },
        )
}

/// Same rules as the emergency contact block of the driver signup form,
/// reported under the contact's own keys (`name`, `phone`, `relationship`).
pub fn validate_contact(contact: &NewEmergencyContact) -> ErrorMap {
    let mut values = FormValues::for_kind(FormKind::DriverSignup);
    values.set(field::EMERGENCY_CONTACT_NAME, contact.name.as_str());
    values.set(field::EMERGENCY_CONTACT_PHONE, contact.phone.as_str());
    values.set(
        field::EMERGENCY_CONTACT_RELATIONSHIP,
        contact.relationship.as_str(),
    );

    validate_emergency_contact(&values)
        .iter()
        .map(|(key, message)| {
            let key = key.strip_prefix("emergencyContact.").unwrap_or(key);
            (key.to_string(), message.to_string())
        })
        .collect()
}

pub const LICENSE_ID_REQUIRED: &str = "License ID is required";
pub const SUPPORT_NAME_REQUIRED: &str = "Name is required";
pub const SUBJECT_REQUIRED: &str = "Subject is required";
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// Every profile field is required; email and phone are shape-checked the
/// way the signup forms check them.
pub fn validate_profile(profile: &DriverProfile) -> ErrorMap {
    let mut errors = ErrorMap::new();
    require(&profile.name, "name", NAME_REQUIRED, &mut errors);
    check_email(&profile.email, &mut errors);
    if profile.phone.trim().is_empty() {
        errors.insert("phone", PHONE_REQUIRED);
    } else if !is_valid_phone(&profile.phone) {
        errors.insert("phone", INVALID_PHONE_MESSAGE);
    }
    require(&profile.license_id, "licenseId", LICENSE_ID_REQUIRED, &mut errors);
    require(&profile.vehicle_id, "vehicleId", VEHICLE_ID_REQUIRED, &mut errors);
    require(&profile.address, "address", ADDRESS_REQUIRED, &mut errors);
    errors
}

/// All four help contact fields are required.
pub fn validate_support_request(request: &SupportRequest) -> ErrorMap {
    let mut errors = ErrorMap::new();
    require(&request.name, "name", SUPPORT_NAME_REQUIRED, &mut errors);
    check_email(&request.email, &mut errors);
    require(&request.subject, "subject", SUBJECT_REQUIRED, &mut errors);
    require(&request.message, "message", MESSAGE_REQUIRED, &mut errors);
    errors
}

fn require(value: &str, key: &str, message: &str, errors: &mut ErrorMap) {
    if value.trim().is_empty() {
        errors.insert(key, message);
    }
}

fn check_email(value: &str, errors: &mut ErrorMap) {
    if let Err(e) = Email::parse(value) {
        errors.insert("email", e.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(id: u32, name: &str, vehicle_id: &str, status: DrowsinessStatus) -> RosterDriver {
        RosterDriver {
            id,
            name: name.to_string(),
            vehicle_id: vehicle_id.to_string(),
            location: "Chicago, IL".to_string(),
            drowsiness_status: status,
            heart_rate: 72,
            temperature: 98.6,
            blood_pressure: "120/80".to_string(),
            last_update: "2 minutes ago".to_string(),
            alerts: 0,
        }
    }

    fn roster() -> Vec<RosterDriver> {
        vec![
            driver(1, "John Doe", "VH123456", DrowsinessStatus::Safe),
            driver(2, "Jane Smith", "VH789012", DrowsinessStatus::Warning),
            driver(3, "Mike Johnson", "VH345678", DrowsinessStatus::Critical),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_vehicle() {
        let by_name = filter_roster(&roster(), "jOhN", StatusFilter::All);
        assert_eq!(
            by_name.iter().map(|d| d.id).collect::<Vec<_>>(),
            vec![1, 3]
        );

        let by_vehicle = filter_roster(&roster(), "vh7890", StatusFilter::All);
        assert_eq!(by_vehicle.len(), 1);
        assert_eq!(by_vehicle[0].name, "Jane Smith");
    }

    #[test]
    fn test_status_filter_combines_with_search() {
        let rows = filter_roster(
            &roster(),
            "john",
            StatusFilter::Only(DrowsinessStatus::Critical),
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 3);
        assert_eq!(filter_roster(&roster(), "", StatusFilter::All).len(), 3);
    }

    #[test]
    fn test_counts_cover_whole_roster() {
        let counts = roster_counts(&roster());
        assert_eq!(
            counts,
            RosterCounts {
                total: 3,
                safe: 1,
                warning: 1,
                critical: 1
            }
        );
    }

    #[test]
    fn test_contact_validation_uses_contact_keys() {
        let errors = validate_contact(&NewEmergencyContact {
            name: "Jane Doe".to_string(),
            phone: "call me".to_string(),
            relationship: " ".to_string(),
        });

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("phone"), Some("Please enter a valid phone number"));
        assert_eq!(
            errors.get("relationship"),
            Some("Relationship to emergency contact is required")
        );
    }

    #[test]
    fn test_profile_requires_every_field() {
        let errors = validate_profile(&DriverProfile {
            email: "john.doe".to_string(),
            phone: "call me".to_string(),
            ..Default::default()
        });

        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get("name"), Some(NAME_REQUIRED));
        assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
        assert_eq!(errors.get("phone"), Some(INVALID_PHONE_MESSAGE));
        assert_eq!(errors.get("licenseId"), Some(LICENSE_ID_REQUIRED));
        assert_eq!(errors.get("vehicleId"), Some(VEHICLE_ID_REQUIRED));
        assert_eq!(errors.get("address"), Some(ADDRESS_REQUIRED));
    }

    #[test]
    fn test_support_request_rejects_blank_subject_and_message() {
        let errors = validate_support_request(&SupportRequest {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            subject: "   ".to_string(),
            message: String::new(),
        });

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("subject"), Some(SUBJECT_REQUIRED));
        assert_eq!(errors.get("message"), Some(MESSAGE_REQUIRED));
    }
}
