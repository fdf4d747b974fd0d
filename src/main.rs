use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use code_playground::Frontend;
use playground_core::{
    HttpExecutionClient, RunOrchestrator, RunnerConfig, SessionController, SessionState,
    DEFAULT_BASE_URL,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Execution service base URL
    #[arg(short, long, default_value = DEFAULT_BASE_URL)]
    server_url: String,

    /// Bound each run request to this many seconds; unbounded when omitted
    #[arg(long)]
    request_timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = RunnerConfig::new(args.server_url);
    if let Some(secs) = args.request_timeout {
        config = config.with_request_timeout(Duration::from_secs(secs));
    }

    let client = HttpExecutionClient::new(config)?;
    if let Err(e) = client.health().await {
        tracing::warn!("execution service not reachable yet: {}", e);
    }

    let session = Arc::new(Mutex::new(SessionState::default()));
    let orchestrator = RunOrchestrator::new(session, Arc::new(client));
    let (intents, snapshots) = SessionController::spawn(orchestrator).await;

    Frontend::new(intents, snapshots).run().await
}
