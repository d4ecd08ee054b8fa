//! Contact gateway service.
//!
//! Translates dialer intents ("block this contact", "text this number") into
//! directory, block list and navigation requests. The gateway holds no
//! contact state: every read and write round-trips to a collaborator.

use crate::config::Config;
use crate::domain::{Capability, ContactId, PhoneNumber};
use crate::error::{CollaboratorError, CollaboratorResult, GatewayError, GatewayResult};
use crate::metrics::{Metrics, OperationTimer};
use crate::models::{BlockOutcome, CallerSurface, Contact, ContactUpdate, ViewRequest, ViewTarget};
use crate::repositories::{
    CapabilityProvider, ContactDirectory, Navigator, NumberBlockList, PhoneAccountResolver,
    StaticCapabilities,
};
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Contact gateway operations.
///
/// Async operations never block the caller; each resolves exactly once.
/// Privileged operations check their capability before touching any
/// collaborator and fail with `GatewayError::PermissionDenied` otherwise.
#[async_trait]
pub trait ContactGateway: Send + Sync {
    /// Fetch the first record matching `id`, or `None` when there is none.
    async fn fetch_contact(&self, id: ContactId) -> GatewayResult<Option<Contact>>;

    /// Delete the record. Requires [`Capability::ModifyDirectory`].
    async fn delete_contact(&self, id: ContactId) -> GatewayResult<()>;

    /// Block every number of the contact. Requires [`Capability::DefaultDialer`].
    ///
    /// Per-number failures are collected in the outcome rather than failing
    /// the call; only a failed account resolution is an error.
    async fn block_contact(&self, id: ContactId) -> GatewayResult<BlockOutcome>;

    /// Unblock every number of the contact.
    async fn unblock_contact(&self, id: ContactId) -> GatewayResult<BlockOutcome>;

    /// Set the favorite flag. Requires [`Capability::ModifyDirectory`].
    async fn toggle_contact_favorite(&self, id: ContactId, is_favorite: bool)
        -> GatewayResult<()>;

    /// True only when the contact has numbers and every one is blocked.
    ///
    /// No accounts, or a failed resolution, yields `false`.
    async fn is_contact_blocked(&self, id: ContactId) -> GatewayResult<bool>;

    /// Every record in the directory. Requires [`Capability::ReadDirectory`].
    async fn list_contacts(&self) -> GatewayResult<Vec<Contact>>;

    /// Records with a number whose digits contain the digits of `fragment`.
    /// Requires [`Capability::ReadDirectory`].
    async fn find_contacts_by_number(&self, fragment: &str) -> GatewayResult<Vec<Contact>>;

    /// Display name for an incoming number.
    ///
    /// Returns `None` without querying when read access is not granted, so
    /// an incoming call never waits on a permission prompt.
    async fn lookup_caller_name(&self, number: &str) -> GatewayResult<Option<String>>;

    /// Open the SMS composer, addressed to the normalized `number` if given.
    fn open_sms_view(&self, number: Option<&str>, surface: CallerSurface) -> GatewayResult<()>;

    /// Open the contact detail view.
    fn open_contact_view(&self, id: ContactId, surface: CallerSurface) -> GatewayResult<()>;

    /// Open contact creation pre-filled with `number`.
    fn open_add_contact_view(&self, number: &str, surface: CallerSurface) -> GatewayResult<()>;

    /// Open the contact edit view.
    fn open_edit_contact_view(&self, id: ContactId, surface: CallerSurface)
        -> GatewayResult<()>;
}

#[derive(Debug, Clone, Copy)]
enum BlockAction {
    Block,
    Unblock,
}

impl BlockAction {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Unblock => "unblock",
        }
    }
}

/// Default implementation of ContactGateway.
pub struct ContactGatewayImpl {
    directory: Arc<dyn ContactDirectory>,
    resolver: Arc<dyn PhoneAccountResolver>,
    block_list: Arc<dyn NumberBlockList>,
    navigator: Arc<dyn Navigator>,
    capabilities: Arc<dyn CapabilityProvider>,
    collaborator_timeout: Duration,
    metrics: Metrics,
}

impl ContactGatewayImpl {
    /// Create a new contact gateway.
    pub fn new(
        directory: Arc<dyn ContactDirectory>,
        resolver: Arc<dyn PhoneAccountResolver>,
        block_list: Arc<dyn NumberBlockList>,
        navigator: Arc<dyn Navigator>,
        capabilities: Arc<dyn CapabilityProvider>,
        collaborator_timeout: Duration,
    ) -> Self {
        Self {
            directory,
            resolver,
            block_list,
            navigator,
            capabilities,
            collaborator_timeout,
            metrics: Metrics::new(),
        }
    }

    /// Create a gateway whose grants and timeout come from `config`.
    pub fn from_config(
        directory: Arc<dyn ContactDirectory>,
        resolver: Arc<dyn PhoneAccountResolver>,
        block_list: Arc<dyn NumberBlockList>,
        navigator: Arc<dyn Navigator>,
        config: &Config,
    ) -> Self {
        Self::new(
            directory,
            resolver,
            block_list,
            navigator,
            Arc::new(StaticCapabilities::new(config.capabilities.clone())),
            config.collaborator_timeout(),
        )
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Fail fast unless `capability` is granted.
    fn require(&self, capability: Capability, operation: &'static str) -> GatewayResult<()> {
        if self.capabilities.is_granted(capability) {
            return Ok(());
        }
        self.metrics.record_permission_denied();
        warn!(operation, %capability, "Permission denied");
        Err(GatewayError::PermissionDenied { capability })
    }

    /// Await a collaborator call under the configured timeout, recording metrics.
    async fn call<T, F>(&self, collaborator: &'static str, fut: F) -> CollaboratorResult<T>
    where
        F: Future<Output = CollaboratorResult<T>> + Send,
        T: Send,
    {
        let timer = OperationTimer::new(self.metrics.clone());
        let result = tokio::time::timeout(self.collaborator_timeout, fut)
            .await
            .unwrap_or(Err(CollaboratorError::Timeout));

        match &result {
            Ok(_) => timer.complete(),
            Err(e) => {
                warn!(collaborator, error = %e, "Collaborator call failed");
                timer.complete_with_error();
            }
        }
        result
    }

    /// Resolve the contact's numbers and apply `action` to each in turn.
    async fn apply_to_accounts(
        &self,
        id: ContactId,
        action: BlockAction,
    ) -> GatewayResult<BlockOutcome> {
        let accounts = self
            .call("phone_account_resolver", self.resolver.accounts_for_contact(id))
            .await?
            .unwrap_or_default();

        let mut outcome = BlockOutcome::default();
        for account in accounts {
            let result = match action {
                BlockAction::Block => {
                    self.call("block_list", self.block_list.block(&account.number))
                        .await
                }
                BlockAction::Unblock => {
                    self.call("block_list", self.block_list.unblock(&account.number))
                        .await
                }
            };
            match result {
                Ok(()) => outcome.applied.push(account.number),
                Err(e) => {
                    warn!(
                        contact_id = %id,
                        number = %account.number,
                        action = action.as_str(),
                        error = %e,
                        "Number not updated"
                    );
                    outcome.failed.push((account.number, e));
                }
            }
        }

        match action {
            BlockAction::Block => self.metrics.record_numbers_blocked(outcome.applied.len()),
            BlockAction::Unblock => self
                .metrics
                .record_numbers_unblocked(outcome.applied.len()),
        }
        info!(
            contact_id = %id,
            action = action.as_str(),
            applied = outcome.applied.len(),
            failed = outcome.failed.len(),
            "Contact numbers updated"
        );
        Ok(outcome)
    }

    fn navigate(&self, target: ViewTarget, surface: CallerSurface) -> GatewayResult<()> {
        let request = ViewRequest::new(target, surface);
        debug!(request = %request, "Starting view");
        self.metrics.record_navigation_request();
        self.navigator.start_view(request).map_err(|e| {
            warn!(error = %e, "Navigation failed");
            GatewayError::from(e)
        })
    }
}

#[async_trait]
impl ContactGateway for ContactGatewayImpl {
    async fn fetch_contact(&self, id: ContactId) -> GatewayResult<Option<Contact>> {
        self.metrics.record_operation();
        debug!(contact_id = %id, "Fetching contact");

        let contacts = self.call("directory", self.directory.query(id)).await?;
        Ok(contacts.into_iter().next())
    }

    async fn delete_contact(&self, id: ContactId) -> GatewayResult<()> {
        self.metrics.record_operation();
        self.require(Capability::ModifyDirectory, "delete_contact")?;

        let removed = self.call("directory", self.directory.delete(id)).await?;
        info!(contact_id = %id, removed, "Contact deleted");
        Ok(())
    }

    async fn block_contact(&self, id: ContactId) -> GatewayResult<BlockOutcome> {
        self.metrics.record_operation();
        self.require(Capability::DefaultDialer, "block_contact")?;

        self.apply_to_accounts(id, BlockAction::Block).await
    }

    async fn unblock_contact(&self, id: ContactId) -> GatewayResult<BlockOutcome> {
        self.metrics.record_operation();

        self.apply_to_accounts(id, BlockAction::Unblock).await
    }

    async fn toggle_contact_favorite(
        &self,
        id: ContactId,
        is_favorite: bool,
    ) -> GatewayResult<()> {
        self.metrics.record_operation();
        self.require(Capability::ModifyDirectory, "toggle_contact_favorite")?;

        let changes = ContactUpdate::starred(is_favorite);
        let updated = self
            .call("directory", self.directory.update(id, &changes))
            .await?;
        info!(contact_id = %id, is_favorite, updated, "Favorite flag written");
        Ok(())
    }

    async fn is_contact_blocked(&self, id: ContactId) -> GatewayResult<bool> {
        self.metrics.record_operation();

        let accounts = match self
            .call("phone_account_resolver", self.resolver.accounts_for_contact(id))
            .await
        {
            Ok(Some(accounts)) if !accounts.is_empty() => accounts,
            Ok(_) => {
                debug!(contact_id = %id, "No accounts resolved; not blocked");
                return Ok(false);
            }
            Err(e) => {
                debug!(contact_id = %id, error = %e, "Resolution failed; not blocked");
                return Ok(false);
            }
        };

        for account in &accounts {
            let blocked = self
                .call("block_list", self.block_list.is_blocked(&account.number))
                .await?;
            if !blocked {
                return Ok(false);
            }
        }
        Ok(true)
    }

    async fn list_contacts(&self) -> GatewayResult<Vec<Contact>> {
        self.metrics.record_operation();
        self.require(Capability::ReadDirectory, "list_contacts")?;

        Ok(self.call("directory", self.directory.list()).await?)
    }

    async fn find_contacts_by_number(&self, fragment: &str) -> GatewayResult<Vec<Contact>> {
        self.metrics.record_operation();
        self.require(Capability::ReadDirectory, "find_contacts_by_number")?;

        let digits = PhoneNumber::normalize(fragment)?.digits_only();
        let contacts = self.call("directory", self.directory.list()).await?;
        let matches: Vec<Contact> = contacts
            .into_iter()
            .filter(|contact| contact.has_number_containing(&digits))
            .collect();

        debug!(fragment, matches = matches.len(), "Matched contacts by number");
        Ok(matches)
    }

    async fn lookup_caller_name(&self, number: &str) -> GatewayResult<Option<String>> {
        self.metrics.record_operation();
        if !self.capabilities.is_granted(Capability::ReadDirectory) {
            debug!("Read access not granted; skipping caller lookup");
            return Ok(None);
        }

        // Withheld callers arrive as labels such as "Private"; keypad mapping
        // would turn those into real-looking numbers.
        if !number.chars().any(|c| c.is_ascii_digit()) {
            debug!("Caller number has no digits; skipping lookup");
            return Ok(None);
        }

        let number = match PhoneNumber::normalize(number) {
            Ok(number) => number,
            Err(e) => {
                debug!(error = %e, "Caller number not dialable; skipping lookup");
                return Ok(None);
            }
        };

        let contact = self
            .call("directory", self.directory.lookup_by_number(&number))
            .await?;
        Ok(contact.and_then(|c| c.display_name))
    }

    fn open_sms_view(&self, number: Option<&str>, surface: CallerSurface) -> GatewayResult<()> {
        self.metrics.record_operation();

        let recipient = number
            .filter(|n| !n.trim().is_empty())
            .map(PhoneNumber::normalize)
            .transpose()?;
        self.navigate(ViewTarget::SmsComposer { recipient }, surface)
    }

    fn open_contact_view(&self, id: ContactId, surface: CallerSurface) -> GatewayResult<()> {
        self.metrics.record_operation();
        self.navigate(ViewTarget::ContactDetail { contact_id: id }, surface)
    }

    fn open_add_contact_view(&self, number: &str, surface: CallerSurface) -> GatewayResult<()> {
        self.metrics.record_operation();
        self.navigate(
            ViewTarget::AddContact {
                phone: number.to_string(),
            },
            surface,
        )
    }

    fn open_edit_contact_view(
        &self,
        id: ContactId,
        surface: CallerSurface,
    ) -> GatewayResult<()> {
        self.metrics.record_operation();
        self.navigate(ViewTarget::EditContact { contact_id: id }, surface)
    }
}
