//! Shared LocalStack helpers for IAM integration tests

#![allow(dead_code)]

use std::sync::Arc;

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_iam::Client as IamClient;

/// Test configuration for LocalStack
pub const LOCALSTACK_ENDPOINT: &str = "http://localhost:4566";
pub const TEST_REGION: &str = "us-east-1";

/// Creates an IAM client pointed at LocalStack
pub async fn localstack_iam_client() -> Arc<IamClient> {
    let credentials = Credentials::from_keys(
        "test", // AWS_ACCESS_KEY_ID
        "test", // AWS_SECRET_ACCESS_KEY
        None,   // no session token
    );
    let config = aws_config::defaults(BehaviorVersion::latest())
        .endpoint_url(LOCALSTACK_ENDPOINT)
        .region(Region::new(TEST_REGION))
        .credentials_provider(credentials)
        .load()
        .await;

    Arc::new(IamClient::new(&config))
}

/// Minimal managed policy document for attachment tests
pub fn test_policy_document() -> String {
    serde_json::json!({
        "Version": "2012-10-17",
        "Statement": [{
            "Effect": "Allow",
            "Action": "iam:GetUser",
            "Resource": "*"
        }]
    })
    .to_string()
}
