//! Data models for directory entities and navigation requests.
//!
//! Contacts, phone accounts and block outcomes are produced by collaborators
//! and handed to callers; view requests are handed to the host navigator.

pub mod block_outcome;
pub mod contact;
pub mod navigation;
pub mod phone_account;

pub use block_outcome::BlockOutcome;
pub use contact::{Contact, ContactUpdate};
pub use navigation::{CallerSurface, ViewRequest, ViewTarget};
pub use phone_account::PhoneAccount;
