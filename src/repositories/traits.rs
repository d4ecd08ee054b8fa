use crate::domain::{Capability, ContactId, PhoneNumber};
use crate::error::{CollaboratorResult, NavigationError};
use crate::models::*;
use async_trait::async_trait;

/// The platform contact directory.
///
/// Owns every contact record. Implementations may be backed by a content
/// provider, a database or memory; the gateway only sees this trait.
#[async_trait]
pub trait ContactDirectory: Send + Sync {
    /// Query records matching an id. Zero matches is `Ok(vec![])`.
    async fn query(&self, id: ContactId) -> CollaboratorResult<Vec<Contact>>;

    /// List every record.
    async fn list(&self) -> CollaboratorResult<Vec<Contact>>;

    /// Find the record owning a normalized number.
    async fn lookup_by_number(&self, number: &PhoneNumber) -> CollaboratorResult<Option<Contact>>;

    /// Apply field changes to records matching an id, returning rows changed.
    async fn update(&self, id: ContactId, changes: &ContactUpdate) -> CollaboratorResult<usize>;

    /// Delete records matching an id, returning rows removed.
    async fn delete(&self, id: ContactId) -> CollaboratorResult<usize>;
}

/// Resolves the phone accounts belonging to a contact.
#[async_trait]
pub trait PhoneAccountResolver: Send + Sync {
    /// `Ok(None)` when the resolver has no answer for the contact.
    async fn accounts_for_contact(
        &self,
        id: ContactId,
    ) -> CollaboratorResult<Option<Vec<PhoneAccount>>>;
}

/// Per-number block state.
#[async_trait]
pub trait NumberBlockList: Send + Sync {
    async fn block(&self, number: &str) -> CollaboratorResult<()>;

    async fn unblock(&self, number: &str) -> CollaboratorResult<()>;

    async fn is_blocked(&self, number: &str) -> CollaboratorResult<bool>;
}

/// Host facility that opens views.
///
/// Starting a view is synchronous from the caller's side; the host decides
/// when the view actually appears.
pub trait Navigator: Send + Sync {
    fn start_view(&self, request: ViewRequest) -> Result<(), NavigationError>;
}

/// Answers whether a capability is currently granted.
///
/// Queried on every privileged call so grants may change at runtime.
pub trait CapabilityProvider: Send + Sync {
    fn is_granted(&self, capability: Capability) -> bool;
}
