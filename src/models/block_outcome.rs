//! Result of fanning a block or unblock request out over a contact's numbers.

use crate::error::CollaboratorError;

/// Which numbers were updated and which failed.
///
/// Per-number failures do not fail the operation as a whole; they are
/// collected here so callers can decide whether to surface them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockOutcome {
    /// Numbers the block list accepted
    pub applied: Vec<String>,
    /// Numbers the block list rejected, with the reason
    pub failed: Vec<(String, CollaboratorError)>,
}

impl BlockOutcome {
    /// True when every resolved number was updated.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Total numbers the request was fanned out to.
    pub fn attempted(&self) -> usize {
        self.applied.len() + self.failed.len()
    }
}
