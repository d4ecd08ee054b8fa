//! Domain value objects and types.
//!
//! Type-safe wrappers for contact ids, phone numbers and capability grants.
//! These value objects validate at construction time so the gateway never
//! forwards malformed input to a collaborator.

pub mod capability;
pub mod contact_id;
pub mod errors;
pub mod phone;

pub use capability::{Capability, CapabilitySet};
pub use contact_id::ContactId;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
