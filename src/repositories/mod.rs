mod directory_account_resolver;
mod memory_block_list;
mod memory_directory;
mod recording_navigator;
mod static_capabilities;
mod traits;

pub use directory_account_resolver::DirectoryAccountResolver;
pub use memory_block_list::InMemoryBlockList;
pub use memory_directory::InMemoryDirectory;
pub use recording_navigator::RecordingNavigator;
pub use static_capabilities::StaticCapabilities;
pub use traits::{
    CapabilityProvider, ContactDirectory, Navigator, NumberBlockList, PhoneAccountResolver,
};
