//! Types shared between the group and user modules

use serde::Serialize;
use strum::Display;

/// Result of a check-then-create call against IAM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EnsureOutcome {
    /// The resource was absent and has been created by this call
    Created,
    /// The resource was already in place; nothing was mutated
    AlreadyExists,
}

impl EnsureOutcome {
    /// Returns `true` if this call performed the create
    #[must_use]
    pub const fn was_created(self) -> bool {
        matches!(self, Self::Created)
    }
}
