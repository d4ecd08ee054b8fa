use std::collections::HashSet;
use std::sync::Mutex;

use crate::error::NavigationError;
use crate::models::ViewRequest;
use crate::repositories::traits::Navigator;

/// Navigator that records every request instead of opening views.
///
/// Kinds registered with [`RecordingNavigator::without_handler_for`] are
/// refused with `NavigationError::NoHandler`, the way a host with no app for
/// that view would.
#[derive(Default)]
pub struct RecordingNavigator {
    requests: Mutex<Vec<ViewRequest>>,
    unhandled_kinds: HashSet<&'static str>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse every request whose target kind is `kind`.
    pub fn without_handler_for(mut self, kind: &'static str) -> Self {
        self.unhandled_kinds.insert(kind);
        self
    }

    /// Snapshot of the accepted requests, oldest first.
    pub fn requests(&self) -> Vec<ViewRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl Navigator for RecordingNavigator {
    fn start_view(&self, request: ViewRequest) -> Result<(), NavigationError> {
        if self.unhandled_kinds.contains(request.target.kind()) {
            return Err(NavigationError::NoHandler(request.to_string()));
        }

        let mut requests = self
            .requests
            .lock()
            .map_err(|_| NavigationError::Rejected("navigator state poisoned".to_string()))?;
        requests.push(request);
        Ok(())
    }
}
