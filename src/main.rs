use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ikigai_quiz::analysis::{AnalysisClient, OpenAiProvider};
use ikigai_quiz::config::Config;
use ikigai_quiz::server::{AppState, serve};

#[derive(Parser)]
#[command(name = "ikigaid", about = "Adaptive Ikigai quiz service")]
struct Cli {
    /// Bind host (overrides HOST).
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides PORT).
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ikigai_quiz=info,ikigaid=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let mut config = Config::from_env()?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let provider = Arc::new(OpenAiProvider::new(config.llm.clone())?);
    let analysis = AnalysisClient::new(
        provider,
        config.analysis.fallback_policy,
        config.llm.report_model.clone(),
    );
    let state = AppState {
        analysis: Arc::new(analysis),
    };

    let addr: SocketAddr = config.server.bind_addr().parse().map_err(|e| {
        anyhow::anyhow!("invalid bind address '{}': {e}", config.server.bind_addr())
    })?;
    tracing::info!(
        policy = %config.analysis.fallback_policy,
        model = %config.llm.model,
        report_model = %config.llm.report_model,
        "starting ikigaid"
    );
    serve(addr, state).await?;
    Ok(())
}
