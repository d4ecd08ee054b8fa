//! ContactId value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for directory contact IDs.
///
/// Directory rows are keyed by a non-negative numeric id. The gateway never
/// interprets the value beyond that; it is passed through to the collaborators.
///
/// # Example
///
/// ```
/// use contacts_gateway::domain::ContactId;
///
/// let id = ContactId::new(42).unwrap();
/// assert_eq!(id.value(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(i64);

impl ContactId {
    /// Create a new ContactId, validating that it's not negative.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidId` if the provided ID is negative.
    pub fn new(id: i64) -> Result<Self, ValidationError> {
        if id < 0 {
            return Err(ValidationError::InvalidId(id));
        }
        Ok(Self(id))
    }

    /// Get the raw numeric value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<u32> for ContactId {
    fn from(id: u32) -> Self {
        Self(i64::from(id))
    }
}

impl Serialize for ContactId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Deserialize through the validating constructor
impl<'de> Deserialize<'de> for ContactId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = i64::deserialize(deserializer)?;
        ContactId::new(id).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
