//! Navigation requests handed to the host.

use crate::domain::{ContactId, PhoneNumber};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of surface issued a navigation request.
///
/// A request coming from anything other than a foreground UI surface must
/// start in a new task, since there is no UI stack to push onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallerSurface {
    /// A visible, navigable UI surface
    Foreground,
    /// A service, receiver or other non-UI context
    Background,
}

impl CallerSurface {
    pub fn requires_new_task(&self) -> bool {
        matches!(self, Self::Background)
    }
}

/// The view to open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewTarget {
    /// SMS composer, optionally pre-addressed
    SmsComposer { recipient: Option<PhoneNumber> },
    /// Contact detail view
    ContactDetail { contact_id: ContactId },
    /// Contact creation view pre-filled with a number
    AddContact { phone: String },
    /// Contact edit view
    EditContact { contact_id: ContactId },
}

impl ViewTarget {
    /// Stable identifier of the target kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SmsComposer { .. } => "sms_composer",
            Self::ContactDetail { .. } => "contact_detail",
            Self::AddContact { .. } => "add_contact",
            Self::EditContact { .. } => "edit_contact",
        }
    }

    /// Payload the host needs to address the view.
    pub fn payload(&self) -> String {
        match self {
            Self::SmsComposer { recipient } => format!(
                "smsto:{}",
                recipient.as_ref().map(PhoneNumber::as_str).unwrap_or_default()
            ),
            Self::ContactDetail { contact_id } | Self::EditContact { contact_id } => {
                contact_id.to_string()
            }
            Self::AddContact { phone } => phone.clone(),
        }
    }
}

/// A single request to the host navigation facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewRequest {
    pub target: ViewTarget,
    /// Start the view as a new independent task
    pub new_task: bool,
}

impl ViewRequest {
    pub fn new(target: ViewTarget, surface: CallerSurface) -> Self {
        Self {
            target,
            new_task: surface.requires_new_task(),
        }
    }
}

impl fmt::Display for ViewRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.target.kind(), self.target.payload())?;
        if self.new_task {
            write!(f, " [new task]")?;
        }
        Ok(())
    }
}
