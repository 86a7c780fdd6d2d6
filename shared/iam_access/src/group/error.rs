use aws_sdk_iam::error::SdkError;
use aws_sdk_iam::operation::add_user_to_group::AddUserToGroupError;
use aws_sdk_iam::operation::attach_group_policy::AttachGroupPolicyError;
use aws_sdk_iam::operation::create_group::CreateGroupError;
use aws_sdk_iam::operation::get_group::GetGroupError;
use aws_sdk_iam::operation::list_attached_group_policies::ListAttachedGroupPoliciesError;
use thiserror::Error;

/// Result type alias for group operations
pub type GroupAccessResult<T> = Result<T, GroupAccessError>;

/// Error types for group operations
#[derive(Error, Debug)]
pub enum GroupAccessError {
    /// Error looking up the group
    #[error("Failed to look up IAM group")]
    GetGroup(#[from] SdkError<GetGroupError>),

    /// Error creating the group
    #[error("Failed to create IAM group")]
    CreateGroup(#[from] SdkError<CreateGroupError>),

    /// Error listing the policies attached to the group
    #[error("Failed to list attached group policies")]
    ListAttachedPolicies(#[from] SdkError<ListAttachedGroupPoliciesError>),

    /// Error attaching a managed policy to the group
    #[error("Failed to attach policy to IAM group")]
    AttachPolicy(#[from] SdkError<AttachGroupPolicyError>),

    /// Error adding a user to the group
    #[error("Failed to add user to IAM group")]
    AddUserToGroup(#[from] SdkError<AddUserToGroupError>),
}
