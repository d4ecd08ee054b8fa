use std::sync::RwLock;

use crate::domain::{Capability, CapabilitySet};
use crate::repositories::traits::CapabilityProvider;

/// Capability provider holding an explicit grant set.
///
/// Grants can be changed at runtime, e.g. after the user accepts a prompt.
#[derive(Default)]
pub struct StaticCapabilities {
    granted: RwLock<CapabilitySet>,
}

impl StaticCapabilities {
    pub fn new(granted: CapabilitySet) -> Self {
        Self {
            granted: RwLock::new(granted),
        }
    }

    /// Replace the whole grant set.
    pub fn replace(&self, granted: CapabilitySet) {
        if let Ok(mut current) = self.granted.write() {
            *current = granted;
        }
    }

    pub fn grant(&self, capability: Capability) {
        if let Ok(mut current) = self.granted.write() {
            *current = current.iter().chain([capability]).collect();
        }
    }

    pub fn revoke(&self, capability: Capability) {
        if let Ok(mut current) = self.granted.write() {
            *current = current.iter().filter(|c| *c != capability).collect();
        }
    }
}

impl CapabilityProvider for StaticCapabilities {
    fn is_granted(&self, capability: Capability) -> bool {
        self.granted
            .read()
            .map(|granted| granted.contains(capability))
            .unwrap_or(false)
    }
}
