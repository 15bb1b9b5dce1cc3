use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ticker_snapshot::server::{AppState, ServerConfig, router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    let config = ServerConfig::from_env()?;
    let assembler = config.assembler()?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), %addr, "ticker-snapshot listening");

    axum::serve(listener, router(AppState::new(assembler))).await?;
    Ok(())
}
