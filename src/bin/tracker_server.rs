use clap::Parser;
use courier_tracker::app::{build_tracker, server::create_router};
use courier_tracker::config::TrackerConfig;
use courier_tracker::utils::logger;
use courier_tracker::utils::validation::{validate_bind_address, Validate};
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(name = "tracker-server")]
#[command(about = "HTTP API for Greek courier tracking")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Override server.bind
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_server_logger();

    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TrackerConfig::from_file(path)?
        }
        None => TrackerConfig::default(),
    };

    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        anyhow::bail!(e.user_friendly_message());
    }

    let addr = validate_bind_address("server.bind", &config.server.bind)?;

    let tracker = Arc::new(build_tracker(&config)?);
    let app = create_router(tracker);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(address = %addr, "🚀 Starting tracker server");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
