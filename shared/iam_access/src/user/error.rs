use aws_sdk_iam::error::SdkError;
use aws_sdk_iam::operation::create_user::CreateUserError;
use aws_sdk_iam::operation::get_user::GetUserError;
use thiserror::Error;

/// Result type alias for user operations
pub type UserAccessResult<T> = Result<T, UserAccessError>;

/// Error types for user operations
#[derive(Error, Debug)]
pub enum UserAccessError {
    /// Error looking up a user
    #[error("Failed to look up IAM user")]
    GetUser(#[from] SdkError<GetUserError>),

    /// Error creating a user
    #[error("Failed to create IAM user")]
    CreateUser(#[from] SdkError<CreateUserError>),
}
