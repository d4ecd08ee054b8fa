use async_trait::async_trait;
use contacts_gateway::error::{CollaboratorError, CollaboratorResult};
use contacts_gateway::repositories::PhoneAccountResolver;
use contacts_gateway::{ContactId, PhoneAccount};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Scripted phone account resolver.
///
/// Contacts without a script resolve to `None`. A configured delay lets
/// tests exercise the collaborator timeout.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockAccountResolver {
    accounts: Arc<Mutex<HashMap<ContactId, Vec<PhoneAccount>>>>,
    failure: Arc<Mutex<Option<CollaboratorError>>>,
    delay: Arc<Mutex<Option<Duration>>>,
    calls: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockAccountResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `id` to the given numbers.
    pub fn set_numbers(&self, id: ContactId, numbers: &[&str]) {
        let accounts = numbers.iter().map(|n| PhoneAccount::new(id, *n)).collect();
        self.accounts.lock().unwrap().insert(id, accounts);
    }

    pub fn fail_with(&self, error: CollaboratorError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn delay_by(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl PhoneAccountResolver for MockAccountResolver {
    async fn accounts_for_contact(
        &self,
        id: ContactId,
    ) -> CollaboratorResult<Option<Vec<PhoneAccount>>> {
        *self.calls.lock().unwrap() += 1;

        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let failure = self.failure.lock().unwrap().clone();
        if let Some(error) = failure {
            return Err(error);
        }

        Ok(self.accounts.lock().unwrap().get(&id).cloned())
    }
}
