//! Contact model representing a directory record.

use crate::domain::{ContactId, PhoneNumber};
use serde::{Deserialize, Serialize};

/// A contact as returned by the directory.
///
/// The gateway never caches or mutates these; every read is a fresh copy
/// owned by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    /// Directory identifier
    pub id: ContactId,

    /// Name shown in call logs and incoming-call screens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Favorite ("starred") flag
    #[serde(default)]
    pub starred: bool,

    /// Phone numbers as stored by the directory (unnormalized)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<String>,
}

impl Contact {
    /// Create a new contact with just an id and name.
    pub fn new(id: ContactId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: Some(display_name.into()),
            starred: false,
            phones: Vec::new(),
        }
    }

    /// Builder-style helper to attach a phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phones.push(phone.into());
        self
    }

    /// All phone numbers that normalize cleanly; malformed entries are skipped.
    pub fn normalized_phones(&self) -> Vec<PhoneNumber> {
        self.phones
            .iter()
            .filter_map(|p| PhoneNumber::normalize(p).ok())
            .collect()
    }

    /// Whether any stored number's digits contain `digits`.
    pub fn has_number_containing(&self, digits: &str) -> bool {
        self.normalized_phones()
            .iter()
            .any(|phone| phone.digits_only().contains(digits))
    }

    /// Whether any stored number reaches the same line as `number`.
    pub fn has_number(&self, number: &PhoneNumber) -> bool {
        self.normalized_phones()
            .iter()
            .any(|phone| phone.matches_loosely(number))
    }
}

/// A field-level change applied to a directory record.
///
/// Only fields set to `Some` are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starred: Option<bool>,
}

impl ContactUpdate {
    pub fn starred(starred: bool) -> Self {
        Self {
            starred: Some(starred),
        }
    }

    /// Apply the change to a contact in place.
    pub fn apply_to(&self, contact: &mut Contact) {
        if let Some(starred) = self.starred {
            contact.starred = starred;
        }
    }
}
