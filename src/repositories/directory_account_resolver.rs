use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::ContactId;
use crate::error::CollaboratorResult;
use crate::models::PhoneAccount;
use crate::repositories::traits::{ContactDirectory, PhoneAccountResolver};

/// Phone account resolver backed by a contact directory.
///
/// Each dialable number stored on the contact becomes one account, in
/// normalized form. Unknown contacts resolve to `None`.
pub struct DirectoryAccountResolver {
    directory: Arc<dyn ContactDirectory>,
}

impl DirectoryAccountResolver {
    pub fn new(directory: Arc<dyn ContactDirectory>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl PhoneAccountResolver for DirectoryAccountResolver {
    async fn accounts_for_contact(
        &self,
        id: ContactId,
    ) -> CollaboratorResult<Option<Vec<PhoneAccount>>> {
        let contacts = self.directory.query(id).await?;
        Ok(contacts.into_iter().next().map(|contact| {
            contact
                .normalized_phones()
                .into_iter()
                .map(|phone| PhoneAccount::new(id, phone.into_inner()))
                .collect()
        }))
    }
}
