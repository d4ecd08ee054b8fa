use async_trait::async_trait;
use contacts_gateway::error::{CollaboratorError, CollaboratorResult};
use contacts_gateway::repositories::ContactDirectory;
use contacts_gateway::{Contact, ContactId, ContactUpdate, PhoneNumber};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact directory for testing.
///
/// Stores contacts in memory, tracks method calls for verification and can
/// be switched into a failing mode.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockDirectory {
    contacts: Arc<Mutex<HashMap<ContactId, Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    failure: Arc<Mutex<Option<CollaboratorError>>>,
}

#[allow(dead_code)]
impl MockDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_contact(&self, contact: Contact) {
        let mut contacts = self.contacts.lock().unwrap();
        contacts.insert(contact.id, contact);
    }

    pub fn contact(&self, id: ContactId) -> Option<Contact> {
        self.contacts.lock().unwrap().get(&id).cloned()
    }

    /// Make every subsequent call fail with `error`.
    pub fn fail_with(&self, error: CollaboratorError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    pub fn total_calls(&self) -> usize {
        self.call_counts.lock().unwrap().values().sum()
    }

    fn track_call(&self, method: &str) -> CollaboratorResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        match self.failure.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ContactDirectory for MockDirectory {
    async fn query(&self, id: ContactId) -> CollaboratorResult<Vec<Contact>> {
        self.track_call("query")?;
        Ok(self.contact(id).into_iter().collect())
    }

    async fn list(&self) -> CollaboratorResult<Vec<Contact>> {
        self.track_call("list")?;
        let contacts = self.contacts.lock().unwrap();
        let mut result: Vec<Contact> = contacts.values().cloned().collect();
        result.sort_by_key(|c| c.id);
        Ok(result)
    }

    async fn lookup_by_number(&self, number: &PhoneNumber) -> CollaboratorResult<Option<Contact>> {
        self.track_call("lookup_by_number")?;
        let contacts = self.contacts.lock().unwrap();
        Ok(contacts.values().find(|c| c.has_number(number)).cloned())
    }

    async fn update(&self, id: ContactId, changes: &ContactUpdate) -> CollaboratorResult<usize> {
        self.track_call("update")?;
        let mut contacts = self.contacts.lock().unwrap();
        Ok(match contacts.get_mut(&id) {
            Some(contact) => {
                changes.apply_to(contact);
                1
            }
            None => 0,
        })
    }

    async fn delete(&self, id: ContactId) -> CollaboratorResult<usize> {
        self.track_call("delete")?;
        let mut contacts = self.contacts.lock().unwrap();
        Ok(usize::from(contacts.remove(&id).is_some()))
    }
}
