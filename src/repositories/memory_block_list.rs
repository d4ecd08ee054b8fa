use async_trait::async_trait;
use std::collections::HashSet;
use tokio::sync::RwLock;

use crate::domain::PhoneNumber;
use crate::error::CollaboratorResult;
use crate::repositories::traits::NumberBlockList;

/// In-process block list.
///
/// Keys are normalized numbers, so `555-0100` and `5550100` share one entry.
/// Strings that do not normalize are stored verbatim.
#[derive(Default)]
pub struct InMemoryBlockList {
    blocked: RwLock<HashSet<String>>,
}

impl InMemoryBlockList {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(number: &str) -> String {
        PhoneNumber::normalize(number)
            .map(PhoneNumber::into_inner)
            .unwrap_or_else(|_| number.to_string())
    }

    /// Snapshot of every blocked number, sorted.
    pub async fn blocked_numbers(&self) -> Vec<String> {
        let mut numbers: Vec<String> = self.blocked.read().await.iter().cloned().collect();
        numbers.sort();
        numbers
    }
}

#[async_trait]
impl NumberBlockList for InMemoryBlockList {
    async fn block(&self, number: &str) -> CollaboratorResult<()> {
        self.blocked.write().await.insert(Self::key(number));
        Ok(())
    }

    async fn unblock(&self, number: &str) -> CollaboratorResult<()> {
        self.blocked.write().await.remove(&Self::key(number));
        Ok(())
    }

    async fn is_blocked(&self, number: &str) -> CollaboratorResult<bool> {
        Ok(self.blocked.read().await.contains(&Self::key(number)))
    }
}
