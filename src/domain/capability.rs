//! Capability grants gating privileged gateway operations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A precondition the host must have granted before a privileged call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Read access to the contact directory.
    ReadDirectory,
    /// Write access to the contact directory.
    ModifyDirectory,
    /// The caller holds the default communication handler role.
    DefaultDialer,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadDirectory => "read_directory",
            Self::ModifyDirectory => "modify_directory",
            Self::DefaultDialer => "default_dialer",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "read_directory" => Ok(Self::ReadDirectory),
            "modify_directory" => Ok(Self::ModifyDirectory),
            "default_dialer" => Ok(Self::DefaultDialer),
            other => Err(format!("Unknown capability: {}", other)),
        }
    }
}

/// An immutable set of granted capabilities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySet(BTreeSet<Capability>);

impl CapabilitySet {
    /// A set granting nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// A set granting every capability.
    pub fn all() -> Self {
        [
            Capability::ReadDirectory,
            Capability::ModifyDirectory,
            Capability::DefaultDialer,
        ]
        .into_iter()
        .collect()
    }

    /// Parse a comma-separated list such as `read_directory,default_dialer`.
    ///
    /// Empty segments are ignored.
    pub fn parse_list(list: &str) -> Result<Self, String> {
        list.split(',')
            .filter(|segment| !segment.trim().is_empty())
            .map(Capability::from_str)
            .collect()
    }

    pub fn contains(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
