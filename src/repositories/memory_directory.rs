use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::{ContactId, PhoneNumber};
use crate::error::CollaboratorResult;
use crate::models::{Contact, ContactUpdate};
use crate::repositories::traits::ContactDirectory;

/// In-process contact directory.
///
/// Records are kept ordered by id so listings are deterministic.
#[derive(Default)]
pub struct InMemoryDirectory {
    contacts: RwLock<BTreeMap<ContactId, Contact>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory pre-populated with contacts.
    pub fn with_contacts(contacts: impl IntoIterator<Item = Contact>) -> Self {
        Self {
            contacts: RwLock::new(contacts.into_iter().map(|c| (c.id, c)).collect()),
        }
    }

    /// Insert or replace a contact.
    pub async fn insert(&self, contact: Contact) {
        self.contacts.write().await.insert(contact.id, contact);
    }

    pub async fn len(&self) -> usize {
        self.contacts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.contacts.read().await.is_empty()
    }
}

#[async_trait]
impl ContactDirectory for InMemoryDirectory {
    async fn query(&self, id: ContactId) -> CollaboratorResult<Vec<Contact>> {
        let contacts = self.contacts.read().await;
        Ok(contacts.get(&id).cloned().into_iter().collect())
    }

    async fn list(&self) -> CollaboratorResult<Vec<Contact>> {
        let contacts = self.contacts.read().await;
        Ok(contacts.values().cloned().collect())
    }

    async fn lookup_by_number(&self, number: &PhoneNumber) -> CollaboratorResult<Option<Contact>> {
        let contacts = self.contacts.read().await;
        Ok(contacts.values().find(|c| c.has_number(number)).cloned())
    }

    async fn update(&self, id: ContactId, changes: &ContactUpdate) -> CollaboratorResult<usize> {
        let mut contacts = self.contacts.write().await;
        match contacts.get_mut(&id) {
            Some(contact) => {
                changes.apply_to(contact);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: ContactId) -> CollaboratorResult<usize> {
        let mut contacts = self.contacts.write().await;
        Ok(usize::from(contacts.remove(&id).is_some()))
    }
}
