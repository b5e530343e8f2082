use anyhow::Context;
use clap::Parser;
use fortune_cookie::server::{app_router, AppState};
use fortune_cookie::utils::{logger, validation::Validate};
use fortune_cookie::{CliConfig, FortuneService, RemoteFortuneClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting fortune-cookie service");

    let config = match cli.load_config().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if cli.verbose {
        tracing::debug!("Service config: {:?}", config);
    }

    let bind_addr = config.server.bind_addr();
    let client = RemoteFortuneClient::new(config.remote.clone());
    if !client.is_configured() {
        tracing::warn!("⚠️ DEDALUS_API_KEY not set, every fortune will come from the fallback bank");
    }

    let app = app_router(AppState::new(FortuneService::new(client)));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    tracing::info!("Listening on {}", bind_addr);
    tracing::info!("  GET  /health      liveness probe");
    tracing::info!("  POST /api/fortune fortune for a question");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
