//! Serializable record of what a provisioning run did

use iam_access::types::EnsureOutcome;
use serde::Serialize;

/// Outcome of one provisioning run
#[derive(Debug, Serialize)]
pub struct ProvisionSummary {
    /// Group the run provisioned
    pub group_name: String,
    /// Outcome of the group ensure
    pub group: EnsureOutcome,
    /// Outcome of the managed policy attachment
    pub policy_attachment: EnsureOutcome,
    /// One entry per configured user, in configuration order
    pub users: Vec<UserOutcome>,
}

/// Outcome of provisioning a single user
#[derive(Debug, Serialize)]
pub struct UserOutcome {
    /// User this entry describes
    pub user_name: String,
    /// Outcome of the user ensure, absent if it failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<EnsureOutcome>,
    /// Outcome of the membership ensure, absent if it failed or was skipped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership: Option<EnsureOutcome>,
    /// Error that stopped this user's provisioning
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UserOutcome {
    /// Entry for a fully provisioned user
    #[must_use]
    pub fn provisioned(user_name: &str, user: EnsureOutcome, membership: EnsureOutcome) -> Self {
        Self {
            user_name: user_name.to_string(),
            user: Some(user),
            membership: Some(membership),
            error: None,
        }
    }

    /// Entry for a user whose ensure failed; membership was not attempted
    #[must_use]
    pub fn user_failed(user_name: &str, error: String) -> Self {
        Self {
            user_name: user_name.to_string(),
            user: None,
            membership: None,
            error: Some(error),
        }
    }

    /// Entry for a user that exists but could not be added to the group
    #[must_use]
    pub fn membership_failed(user_name: &str, user: EnsureOutcome, error: String) -> Self {
        Self {
            user_name: user_name.to_string(),
            user: Some(user),
            membership: None,
            error: Some(error),
        }
    }

    /// Returns `true` if any step for this user failed
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

impl ProvisionSummary {
    /// Returns `true` if any configured user failed to provision
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.users.iter().any(UserOutcome::is_failure)
    }

    /// Names of the users whose provisioning failed, in configuration order
    #[must_use]
    pub fn failed_user_names(&self) -> Vec<&str> {
        self.users
            .iter()
            .filter(|user| user.is_failure())
            .map(|user| user.user_name.as_str())
            .collect()
    }

    /// Number of mutating calls the run performed
    #[must_use]
    pub fn created_resource_count(&self) -> usize {
        let user_creates = self
            .users
            .iter()
            .flat_map(|user| [user.user, user.membership])
            .flatten()
            .filter(|outcome| outcome.was_created())
            .count();

        usize::from(self.group.was_created())
            + usize::from(self.policy_attachment.was_created())
            + user_creates
    }
}
