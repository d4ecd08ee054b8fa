//! Callback-style surface over the async gateway.
//!
//! Hosts that work with completion handlers rather than futures hand a
//! continuation to each call. Every call spawns one task on the supplied
//! runtime and returns immediately; the continuation runs at most once, on
//! that task.

use crate::domain::ContactId;
use crate::error::GatewayResult;
use crate::models::{BlockOutcome, Contact};
use crate::services::ContactGateway;
use futures::future::{BoxFuture, FutureExt};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::warn;

/// Dispatches gateway calls and delivers results to continuations.
///
/// Failure routes:
/// - fetch: the continuation receives `None`
/// - block / unblock: the completion is not invoked and the returned handle
///   resolves to the error, so a missing role surfaces as `PermissionDenied`
/// - blocked check: the continuation receives `false`
#[derive(Clone)]
pub struct CallbackDispatcher {
    gateway: Arc<dyn ContactGateway>,
    runtime: Handle,
}

impl CallbackDispatcher {
    pub fn new(gateway: Arc<dyn ContactGateway>, runtime: Handle) -> Self {
        Self { gateway, runtime }
    }

    /// Use the runtime the caller is currently running on.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn current(gateway: Arc<dyn ContactGateway>) -> Self {
        Self::new(gateway, Handle::current())
    }

    pub fn fetch_contact<F>(&self, id: ContactId, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(Option<Contact>) + Send + 'static,
    {
        let gateway = self.gateway.clone();
        self.runtime.spawn(async move {
            let contact = gateway.fetch_contact(id).await.unwrap_or_else(|e| {
                warn!(contact_id = %id, error = %e, "Fetch failed; delivering no contact");
                None
            });
            callback(contact);
        })
    }

    pub fn block_contact<F>(
        &self,
        id: ContactId,
        on_success: Option<F>,
    ) -> JoinHandle<GatewayResult<BlockOutcome>>
    where
        F: FnOnce() + Send + 'static,
    {
        let gateway = self.gateway.clone();
        let work = async move { gateway.block_contact(id).await }.boxed();
        self.complete_block_request(id, work, on_success)
    }

    pub fn unblock_contact<F>(
        &self,
        id: ContactId,
        on_success: Option<F>,
    ) -> JoinHandle<GatewayResult<BlockOutcome>>
    where
        F: FnOnce() + Send + 'static,
    {
        let gateway = self.gateway.clone();
        let work = async move { gateway.unblock_contact(id).await }.boxed();
        self.complete_block_request(id, work, on_success)
    }

    pub fn get_is_contact_blocked<F>(&self, id: ContactId, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(bool) + Send + 'static,
    {
        let gateway = self.gateway.clone();
        self.runtime.spawn(async move {
            let blocked = gateway.is_contact_blocked(id).await.unwrap_or_else(|e| {
                warn!(contact_id = %id, error = %e, "Blocked check failed; reporting unblocked");
                false
            });
            callback(blocked);
        })
    }

    fn complete_block_request<F>(
        &self,
        id: ContactId,
        work: BoxFuture<'static, GatewayResult<BlockOutcome>>,
        on_success: Option<F>,
    ) -> JoinHandle<GatewayResult<BlockOutcome>>
    where
        F: FnOnce() + Send + 'static,
    {
        self.runtime.spawn(async move {
            let result = work.await;
            match &result {
                Ok(_) => {
                    if let Some(on_success) = on_success {
                        on_success();
                    }
                }
                Err(e) => {
                    warn!(contact_id = %id, error = %e, "Block request failed; completion dropped");
                }
            }
            result
        })
    }
}
