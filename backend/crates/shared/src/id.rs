//! Common ID Types
//!
//! Type-safe ID wrappers for SmartGuard records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type SosEventId = Id<markers::SosEvent>;
/// let id = SosEventId::new();
/// assert_eq!(id.to_string().len(), 36);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct Id<T> {
    value: Uuid,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self {
            value: Uuid::new_v4(),
            _marker: PhantomData,
        }
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

/// Marker types for different record IDs
pub mod markers {
    /// Marker for account profiles handed out by the account service
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Profile;

    /// Marker for emergency contacts
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EmergencyContact;

    /// Marker for SOS activations
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SosEvent;

    /// Marker for help requests sent to support
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SupportTicket;
}

pub type ProfileId = Id<markers::Profile>;
pub type EmergencyContactId = Id<markers::EmergencyContact>;
pub type SosEventId = Id<markers::SosEvent>;
pub type SupportTicketId = Id<markers::SupportTicket>;
