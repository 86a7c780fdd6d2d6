use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use iam_bootstrap::provisioner::Provisioner;
use iam_bootstrap::types::environment::Environment;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Get environment
    let env = Environment::from_env();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(env.tracing_level().to_string())),
        )
        .init();

    info!("Starting IAM admin bootstrap in {:?} environment", env);

    let provisioner = Provisioner::new(&env).await;
    match provisioner.run().await {
        Ok(summary) => {
            info!("Provisioning summary: {}", serde_json::to_string(&summary)?);

            if summary.has_failures() {
                error!(
                    "Provisioning completed with failures for: {}",
                    summary.failed_user_names().join(", ")
                );
                anyhow::bail!("provisioning completed with per-user failures");
            }

            info!(
                "IAM admin bootstrap complete, {} resource(s) created",
                summary.created_resource_count()
            );
            Ok(())
        }
        Err(e) => {
            error!("Provisioning failed: {e:#}");
            Err(e)
        }
    }
}
