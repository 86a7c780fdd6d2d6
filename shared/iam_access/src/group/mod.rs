//! IAM group access
//!
//! A `GroupAccess` is bound to a single group name and covers everything the
//! bootstrap does at group scope: existence, creation, managed policy
//! attachment, and membership.

mod error;

use std::sync::Arc;

use aws_sdk_iam::{error::SdkError, Client as IamClient};
use tracing::debug;

pub use error::{GroupAccessError, GroupAccessResult};

use crate::types::EnsureOutcome;

/// IAM group client bound to one group name
pub struct GroupAccess {
    iam_client: Arc<IamClient>,
    group_name: String,
}

impl GroupAccess {
    /// Creates a new group client
    ///
    /// # Arguments
    ///
    /// * `iam_client` - Pre-configured IAM client
    /// * `group_name` - Name of the group this client manages
    #[must_use]
    pub const fn new(iam_client: Arc<IamClient>, group_name: String) -> Self {
        Self {
            iam_client,
            group_name,
        }
    }

    /// Returns the group name this client is bound to
    #[must_use]
    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    /// Checks whether the group exists
    ///
    /// # Errors
    ///
    /// Returns `GroupAccessError` if the lookup fails for any reason other
    /// than the group being absent
    pub async fn exists(&self) -> GroupAccessResult<bool> {
        match self
            .iam_client
            .get_group()
            .group_name(&self.group_name)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(err) => {
                if matches!(
                    err,
                    SdkError::ServiceError(ref svc) if svc.err().is_no_such_entity_exception()
                ) {
                    Ok(false)
                } else {
                    Err(err.into())
                }
            }
        }
    }

    /// Creates the group if it does not already exist
    ///
    /// # Returns
    ///
    /// Whether the group was created by this call or already in place
    ///
    /// # Errors
    ///
    /// Returns `GroupAccessError` if the lookup or the create fails
    pub async fn ensure_exists(&self) -> GroupAccessResult<EnsureOutcome> {
        if self.exists().await? {
            debug!("IAM group {} already exists", self.group_name);
            return Ok(EnsureOutcome::AlreadyExists);
        }

        match self
            .iam_client
            .create_group()
            .group_name(&self.group_name)
            .send()
            .await
        {
            Ok(_) => Ok(EnsureOutcome::Created),
            Err(err) => {
                // Another writer can win the race between the check and the create
                if matches!(
                    err,
                    SdkError::ServiceError(ref svc) if svc.err().is_entity_already_exists_exception()
                ) {
                    Ok(EnsureOutcome::AlreadyExists)
                } else {
                    Err(err.into())
                }
            }
        }
    }

    /// Lists the ARNs of the managed policies attached to the group
    ///
    /// # Errors
    ///
    /// Returns `GroupAccessError` if the listing fails
    pub async fn attached_policy_arns(&self) -> GroupAccessResult<Vec<String>> {
        let response = self
            .iam_client
            .list_attached_group_policies()
            .group_name(&self.group_name)
            .send()
            .await?;

        Ok(response
            .attached_policies()
            .iter()
            .filter_map(|policy| policy.policy_arn().map(std::string::ToString::to_string))
            .collect())
    }

    /// Attaches a managed policy to the group if it is not already attached
    ///
    /// # Arguments
    ///
    /// * `policy_arn` - ARN of the managed policy to attach
    ///
    /// # Returns
    ///
    /// Whether the attachment was created by this call or already in place
    ///
    /// # Errors
    ///
    /// Returns `GroupAccessError` if the listing or the attach fails
    pub async fn ensure_policy_attached(
        &self,
        policy_arn: &str,
    ) -> GroupAccessResult<EnsureOutcome> {
        let attached = self.attached_policy_arns().await?;
        if attached.iter().any(|arn| arn == policy_arn) {
            debug!(
                "Policy {policy_arn} already attached to group {}",
                self.group_name
            );
            return Ok(EnsureOutcome::AlreadyExists);
        }

        self.iam_client
            .attach_group_policy()
            .group_name(&self.group_name)
            .policy_arn(policy_arn)
            .send()
            .await?;

        Ok(EnsureOutcome::Created)
    }

    /// Lists the user names that are members of the group
    ///
    /// # Errors
    ///
    /// Returns `GroupAccessError` if the lookup fails
    pub async fn member_names(&self) -> GroupAccessResult<Vec<String>> {
        let response = self
            .iam_client
            .get_group()
            .group_name(&self.group_name)
            .send()
            .await?;

        Ok(response
            .users()
            .iter()
            .map(|user| user.user_name().to_string())
            .collect())
    }

    /// Adds a user to the group if they are not already a member
    ///
    /// # Arguments
    ///
    /// * `user_name` - Name of the user to add
    ///
    /// # Returns
    ///
    /// Whether the membership was created by this call or already in place
    ///
    /// # Errors
    ///
    /// Returns `GroupAccessError` if the membership lookup or the add fails
    pub async fn ensure_member(&self, user_name: &str) -> GroupAccessResult<EnsureOutcome> {
        let members = self.member_names().await?;
        if members.iter().any(|name| name == user_name) {
            debug!(
                "User {user_name} is already a member of group {}",
                self.group_name
            );
            return Ok(EnsureOutcome::AlreadyExists);
        }

        self.iam_client
            .add_user_to_group()
            .group_name(&self.group_name)
            .user_name(user_name)
            .send()
            .await?;

        Ok(EnsureOutcome::Created)
    }
}
