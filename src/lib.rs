//! Contacts Gateway - a stateless facade between dialer logic and the platform
//! contact directory.
//!
//! The gateway turns high-level intents ("block this contact", "open an SMS
//! to this number") into calls on three external collaborators and a host
//! navigator, checking capability preconditions first.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (contact ids, phone numbers, capabilities)
//! - **models**: Contacts, phone accounts, block outcomes and view requests
//! - **repositories**: Collaborator traits and in-process reference backends
//! - **services**: The gateway itself and its callback-style dispatcher
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **metrics** / **observability**: Counters and tracing setup

pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod services;

// Re-export commonly used types
pub use config::Config;
pub use domain::{Capability, CapabilitySet, ContactId, PhoneNumber, ValidationError};
pub use error::{CollaboratorError, ConfigError, GatewayError, GatewayResult, NavigationError};
pub use metrics::{Metrics, MetricsSummary, OperationTimer};
pub use models::{
    BlockOutcome, CallerSurface, Contact, ContactUpdate, PhoneAccount, ViewRequest, ViewTarget,
};
pub use services::{CallbackDispatcher, ContactGateway, ContactGatewayImpl};
