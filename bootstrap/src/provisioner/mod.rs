//! Sequential check-then-create provisioning of the admin group, its policy
//! attachment, the admin users, and their group memberships

pub mod config;
pub mod summary;

use std::sync::Arc;

use aws_sdk_iam::Client as IamClient;
use iam_access::group::GroupAccess;
use iam_access::user::UserAccess;
use tracing::{error, info};

use crate::types::environment::Environment;

use self::config::ProvisionerConfig;
use self::summary::{ProvisionSummary, UserOutcome};

/// Provisions the configured IAM resources in a fixed order
pub struct Provisioner {
    config: ProvisionerConfig,
    groups: GroupAccess,
    users: UserAccess,
}

impl Provisioner {
    /// Creates a provisioner with clients configured for the environment
    pub async fn new(env: &Environment) -> Self {
        let config = ProvisionerConfig::from_environment(env);
        let iam_client = Arc::new(IamClient::from_conf(env.iam_client_config().await));
        Self::with_client(iam_client, config)
    }

    /// Creates a provisioner around a pre-configured IAM client
    #[must_use]
    pub fn with_client(iam_client: Arc<IamClient>, config: ProvisionerConfig) -> Self {
        let groups = GroupAccess::new(iam_client.clone(), config.group_name.clone());
        let users = UserAccess::new(iam_client);

        Self {
            config,
            groups,
            users,
        }
    }

    /// Runs the provisioning phases in order: group, policy attachment,
    /// then per user the user itself and its group membership
    ///
    /// Group-level failures abort the run. Per-user failures are recorded
    /// in the summary and do not stop the remaining users.
    ///
    /// # Errors
    ///
    /// Returns an error if the group cannot be ensured or the managed
    /// policy cannot be attached
    pub async fn run(&self) -> anyhow::Result<ProvisionSummary> {
        info!("Ensuring IAM group {} exists", self.config.group_name);
        let group = self.groups.ensure_exists().await?;
        info!("Group {}: {group}", self.config.group_name);

        info!(
            "Ensuring policy {} is attached to group {}",
            self.config.policy_arn, self.config.group_name
        );
        let policy_attachment = self
            .groups
            .ensure_policy_attached(&self.config.policy_arn)
            .await?;
        info!("Policy attachment: {policy_attachment}");

        let mut users = Vec::with_capacity(self.config.user_names.len());
        for user_name in &self.config.user_names {
            users.push(self.provision_user(user_name).await);
        }

        Ok(ProvisionSummary {
            group_name: self.config.group_name.clone(),
            group,
            policy_attachment,
            users,
        })
    }

    /// Ensures one user exists and is a member of the group
    ///
    /// Failures are captured in the returned entry so the remaining users
    /// still get provisioned.
    async fn provision_user(&self, user_name: &str) -> UserOutcome {
        let user = match self.users.ensure_exists(user_name).await {
            Ok(outcome) => outcome,
            Err(e) => {
                let e = anyhow::Error::new(e);
                error!("Failed to ensure user {user_name} exists: {e:#}");
                return UserOutcome::user_failed(user_name, format!("{e:#}"));
            }
        };
        info!("User {user_name}: {user}");

        match self.groups.ensure_member(user_name).await {
            Ok(membership) => {
                info!("Membership of {user_name} in {}: {membership}", self.config.group_name);
                UserOutcome::provisioned(user_name, user, membership)
            }
            Err(e) => {
                let e = anyhow::Error::new(e);
                error!(
                    "Failed to add user {user_name} to group {}: {e:#}",
                    self.config.group_name
                );
                UserOutcome::membership_failed(user_name, user, format!("{e:#}"))
            }
        }
    }
}
