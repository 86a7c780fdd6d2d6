use crate::types::environment::Environment;

/// Configuration for a provisioning run
#[derive(Debug, Clone)]
pub struct ProvisionerConfig {
    /// Name of the admin group
    pub group_name: String,
    /// ARN of the managed policy attached to the group
    pub policy_arn: String,
    /// Users to create and enroll in the group, in order
    pub user_names: Vec<String>,
}

impl ProvisionerConfig {
    /// Creates a `ProvisionerConfig` from the given environment
    #[must_use]
    pub fn from_environment(env: &Environment) -> Self {
        Self {
            group_name: env.admin_group_name(),
            policy_arn: env.admin_policy_arn(),
            user_names: env.admin_user_names(),
        }
    }
}

impl Default for ProvisionerConfig {
    fn default() -> Self {
        let env = Environment::from_env();
        Self::from_environment(&env)
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn test_from_environment_snapshots_env_vars() {
        env::set_var("ADMIN_GROUP_NAME", "test-admins");
        env::set_var("ADMIN_POLICY_ARN", "arn:aws:iam::aws:policy/PowerUserAccess");
        env::set_var("ADMIN_USER_NAMES", "alice,bob,carol");

        let config = ProvisionerConfig::from_environment(&Environment::Development);
        assert_eq!(config.group_name, "test-admins");
        assert_eq!(config.policy_arn, "arn:aws:iam::aws:policy/PowerUserAccess");
        assert_eq!(config.user_names, vec!["alice", "bob", "carol"]);

        // Cleanup
        env::remove_var("ADMIN_GROUP_NAME");
        env::remove_var("ADMIN_POLICY_ARN");
        env::remove_var("ADMIN_USER_NAMES");
    }
}
