//! Configurable collaborator mocks shared by the integration tests.

pub mod mock_account_resolver;
pub mod mock_block_list;
pub mod mock_directory;

#[allow(unused_imports)]
pub use mock_account_resolver::MockAccountResolver;
#[allow(unused_imports)]
pub use mock_block_list::{unavailable, MockBlockList};
#[allow(unused_imports)]
pub use mock_directory::MockDirectory;

use contacts_gateway::repositories::{RecordingNavigator, StaticCapabilities};
use contacts_gateway::{CapabilitySet, ContactGatewayImpl};
use std::sync::Arc;
use std::time::Duration;

/// A gateway wired to mocks, with handles to every collaborator.
#[allow(dead_code)]
pub struct Harness {
    pub gateway: Arc<ContactGatewayImpl>,
    pub directory: MockDirectory,
    pub resolver: MockAccountResolver,
    pub block_list: MockBlockList,
    pub navigator: Arc<RecordingNavigator>,
    pub capabilities: Arc<StaticCapabilities>,
}

#[allow(dead_code)]
impl Harness {
    pub fn new(granted: CapabilitySet) -> Self {
        Self::with_navigator(granted, RecordingNavigator::new())
    }

    pub fn with_navigator(granted: CapabilitySet, navigator: RecordingNavigator) -> Self {
        let directory = MockDirectory::new();
        let resolver = MockAccountResolver::new();
        let block_list = MockBlockList::new();
        let navigator = Arc::new(navigator);
        let capabilities = Arc::new(StaticCapabilities::new(granted));

        let gateway = Arc::new(ContactGatewayImpl::new(
            Arc::new(directory.clone()),
            Arc::new(resolver.clone()),
            Arc::new(block_list.clone()),
            navigator.clone(),
            capabilities.clone(),
            Duration::from_millis(200),
        ));

        Self {
            gateway,
            directory,
            resolver,
            block_list,
            navigator,
            capabilities,
        }
    }
}
