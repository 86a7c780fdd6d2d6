//! IAM user access

mod error;

use std::sync::Arc;

use aws_sdk_iam::{error::SdkError, Client as IamClient};
use tracing::debug;

pub use error::{UserAccessError, UserAccessResult};

use crate::types::EnsureOutcome;

/// IAM user client
pub struct UserAccess {
    iam_client: Arc<IamClient>,
}

impl UserAccess {
    /// Creates a new user client
    #[must_use]
    pub const fn new(iam_client: Arc<IamClient>) -> Self {
        Self { iam_client }
    }

    /// Checks whether a user exists
    ///
    /// # Errors
    ///
    /// Returns `UserAccessError` if the lookup fails for any reason other
    /// than the user being absent
    pub async fn exists(&self, user_name: &str) -> UserAccessResult<bool> {
        match self
            .iam_client
            .get_user()
            .user_name(user_name)
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

    /// Creates a user if they do not already exist
    ///
    /// # Returns
    ///
    /// Whether the user was created by this call or already in place
    ///
    /// # Errors
    ///
    /// Returns `UserAccessError` if the lookup or the create fails
    pub async fn ensure_exists(&self, user_name: &str) -> UserAccessResult<EnsureOutcome> {
        if self.exists(user_name).await? {
            debug!("IAM user {user_name} already exists");
            return Ok(EnsureOutcome::AlreadyExists);
        }

        match self
            .iam_client
            .create_user()
            .user_name(user_name)
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
}
