//! Phone accounts resolved for a contact.

use crate::domain::ContactId;
use serde::{Deserialize, Serialize};

/// A phone number associated with exactly one contact.
///
/// Produced fresh by the resolver on every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneAccount {
    pub contact_id: ContactId,
    /// Platform-normalized number, used verbatim as the block list key
    pub number: String,
}

impl PhoneAccount {
    pub fn new(contact_id: ContactId, number: impl Into<String>) -> Self {
        Self {
            contact_id,
            number: number.into(),
        }
    }
}
