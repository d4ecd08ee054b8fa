//! Application service layer.
//!
//! The gateway contains the only business rules in the crate: capability
//! preconditions, block-state aggregation and navigation request shaping.
//! Everything else is delegated to the collaborators in `repositories`.

mod callbacks;
mod contact_gateway;

pub use callbacks::CallbackDispatcher;
pub use contact_gateway::{ContactGateway, ContactGatewayImpl};
