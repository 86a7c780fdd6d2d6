//! Environment configuration for different deployment stages

use std::env;
use std::time::Duration;

use aws_config::{retry::RetryConfig, timeout::TimeoutConfig, BehaviorVersion};
use tracing::Level;

/// Managed policy granting the admin group administrator access
const DEFAULT_ADMIN_POLICY_ARN: &str = "arn:aws:iam::aws:policy/AdministratorAccess";

/// Application environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment (uses `LocalStack`)
    Development,
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// # Panics
    ///
    /// Panics if `APP_ENV` contains an invalid value
    #[must_use]
    pub fn from_env() -> Self {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Self::Production,
            "staging" => Self::Staging,
            "development" => Self::Development,
            _ => panic!("Invalid environment: {env}"),
        }
    }

    /// Returns the name of the admin group
    #[must_use]
    pub fn admin_group_name(&self) -> String {
        env::var("ADMIN_GROUP_NAME").unwrap_or_else(|_| "admins".to_string())
    }

    /// Returns the ARN of the managed policy attached to the admin group
    #[must_use]
    pub fn admin_policy_arn(&self) -> String {
        env::var("ADMIN_POLICY_ARN").unwrap_or_else(|_| DEFAULT_ADMIN_POLICY_ARN.to_string())
    }

    /// Returns the admin user names from the comma-separated
    /// `ADMIN_USER_NAMES` environment variable
    ///
    /// # Panics
    ///
    /// Panics if `ADMIN_USER_NAMES` is not set in production or staging
    #[must_use]
    pub fn admin_user_names(&self) -> Vec<String> {
        let raw = match self {
            Self::Production | Self::Staging => env::var("ADMIN_USER_NAMES")
                .expect("ADMIN_USER_NAMES environment variable is not set"),
            Self::Development => {
                env::var("ADMIN_USER_NAMES").unwrap_or_else(|_| "alice,bob".to_string())
            }
        };

        parse_user_names(&raw)
    }

    /// Returns the endpoint URL to use for AWS services
    #[must_use]
    pub const fn override_aws_endpoint_url(&self) -> Option<&str> {
        match self {
            // Regular AWS endpoints for production and staging
            Self::Production | Self::Staging => None,
            // LocalStack endpoint for development
            Self::Development => Some("http://localhost:4566"),
        }
    }

    /// AWS configuration with retry and timeout settings
    pub async fn aws_config(&self) -> aws_config::SdkConfig {
        let retry_config = RetryConfig::standard()
            .with_max_attempts(3)
            .with_initial_backoff(Duration::from_millis(50));

        let timeout_config = TimeoutConfig::builder()
            .operation_timeout(Duration::from_secs(30))
            .build();

        let mut config_builder = aws_config::load_defaults(BehaviorVersion::latest())
            .await
            .to_builder()
            .retry_config(retry_config)
            .timeout_config(timeout_config);

        if let Some(endpoint_url) = self.override_aws_endpoint_url() {
            config_builder = config_builder.endpoint_url(endpoint_url);
        }

        config_builder.build()
    }

    /// AWS IAM service configuration
    pub async fn iam_client_config(&self) -> aws_sdk_iam::Config {
        let aws_config = self.aws_config().await;
        (&aws_config).into()
    }

    #[must_use]
    pub fn tracing_level(&self) -> Level {
        env::var("TRACING_LEVEL")
            .ok()
            .and_then(|val| val.parse::<Level>().ok())
            .unwrap_or(match self {
                Self::Production | Self::Staging => Level::INFO,
                Self::Development => Level::DEBUG,
            })
    }
}

/// Splits a comma-separated user list, dropping surrounding whitespace and
/// empty entries
fn parse_user_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn test_environment_from_env() {
        // Test development (default)
        env::remove_var("APP_ENV");
        assert_eq!(Environment::from_env(), Environment::Development);

        // Test explicit development
        env::set_var("APP_ENV", "development");
        assert_eq!(Environment::from_env(), Environment::Development);

        // Test staging
        env::set_var("APP_ENV", "staging");
        assert_eq!(Environment::from_env(), Environment::Staging);

        // Test production
        env::set_var("APP_ENV", "production");
        assert_eq!(Environment::from_env(), Environment::Production);

        // Cleanup
        env::remove_var("APP_ENV");
    }

    #[test]
    #[serial]
    #[should_panic(expected = "Invalid environment: invalid")]
    fn test_invalid_environment() {
        env::set_var("APP_ENV", "invalid");
        let _ = Environment::from_env();
        env::remove_var("APP_ENV");
    }

    #[test]
    #[serial]
    fn test_admin_group_defaults() {
        env::remove_var("ADMIN_GROUP_NAME");
        env::remove_var("ADMIN_POLICY_ARN");

        let env = Environment::Development;
        assert_eq!(env.admin_group_name(), "admins");
        assert_eq!(
            env.admin_policy_arn(),
            "arn:aws:iam::aws:policy/AdministratorAccess"
        );

        env::set_var("ADMIN_GROUP_NAME", "platform-admins");
        env::set_var("ADMIN_POLICY_ARN", "arn:aws:iam::aws:policy/PowerUserAccess");
        assert_eq!(env.admin_group_name(), "platform-admins");
        assert_eq!(
            env.admin_policy_arn(),
            "arn:aws:iam::aws:policy/PowerUserAccess"
        );

        // Cleanup
        env::remove_var("ADMIN_GROUP_NAME");
        env::remove_var("ADMIN_POLICY_ARN");
    }

    #[test]
    #[serial]
    fn test_admin_user_names_development_default() {
        env::remove_var("ADMIN_USER_NAMES");

        let env = Environment::Development;
        assert_eq!(env.admin_user_names(), vec!["alice", "bob"]);

        env::set_var("ADMIN_USER_NAMES", "carol, dan ,erin");
        assert_eq!(env.admin_user_names(), vec!["carol", "dan", "erin"]);

        // Cleanup
        env::remove_var("ADMIN_USER_NAMES");
    }

    #[test]
    #[serial]
    #[should_panic(expected = "ADMIN_USER_NAMES environment variable is not set")]
    fn test_admin_user_names_required_in_production() {
        env::remove_var("ADMIN_USER_NAMES");
        let _ = Environment::Production.admin_user_names();
    }

    #[test]
    fn test_parse_user_names() {
        assert_eq!(parse_user_names("alice,bob"), vec!["alice", "bob"]);
        assert_eq!(parse_user_names(" alice , bob "), vec!["alice", "bob"]);
        assert_eq!(parse_user_names("alice,,bob,"), vec!["alice", "bob"]);
        assert_eq!(parse_user_names(""), Vec::<String>::new());
        assert_eq!(parse_user_names(" , "), Vec::<String>::new());

        // Duplicates are preserved; the second ensure is a no-op downstream
        assert_eq!(parse_user_names("alice,alice"), vec!["alice", "alice"]);
    }
}
