use async_trait::async_trait;
use contacts_gateway::error::{CollaboratorError, CollaboratorResult};
use contacts_gateway::repositories::NumberBlockList;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock block list keyed by the exact number string.
///
/// Numbers registered with `reject` fail every request.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBlockList {
    blocked: Arc<Mutex<HashSet<String>>>,
    rejected: Arc<Mutex<HashSet<String>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockBlockList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a number blocked without going through the gateway.
    pub fn set_blocked(&self, number: &str, blocked: bool) {
        let mut set = self.blocked.lock().unwrap();
        if blocked {
            set.insert(number.to_string());
        } else {
            set.remove(number);
        }
    }

    pub fn reject(&self, number: &str) {
        self.rejected.lock().unwrap().insert(number.to_string());
    }

    pub fn blocked_numbers(&self) -> Vec<String> {
        let mut numbers: Vec<String> = self.blocked.lock().unwrap().iter().cloned().collect();
        numbers.sort();
        numbers
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str, number: &str) -> CollaboratorResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        if self.rejected.lock().unwrap().contains(number) {
            return Err(CollaboratorError::Rejected(number.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl NumberBlockList for MockBlockList {
    async fn block(&self, number: &str) -> CollaboratorResult<()> {
        self.track_call("block", number)?;
        self.set_blocked(number, true);
        Ok(())
    }

    async fn unblock(&self, number: &str) -> CollaboratorResult<()> {
        self.track_call("unblock", number)?;
        self.set_blocked(number, false);
        Ok(())
    }

    async fn is_blocked(&self, number: &str) -> CollaboratorResult<bool> {
        self.track_call("is_blocked", number)?;
        Ok(self.blocked.lock().unwrap().contains(number))
    }
}

#[allow(dead_code)]
pub fn unavailable() -> CollaboratorError {
    CollaboratorError::Unavailable("backend offline".to_string())
}
