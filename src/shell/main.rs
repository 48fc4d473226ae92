use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use freelance_desk::shared::core::primitives::{Sequence, SystemClock};
use freelance_desk::shell::config::AppConfig;
use freelance_desk::shell::graphql::ENDPOINT;
use freelance_desk::shell::http::app;
use freelance_desk::shell::seed::Fixtures;
use freelance_desk::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log))?;
    fmt().with_env_filter(filter).init();

    let fixtures = if config.seed {
        Fixtures::bundled()?
    } else {
        Fixtures::default()
    };
    let log_ids = Arc::new(Sequence::starting_after(fixtures.last_log_id()));
    let stores = fixtures.into_stores();
    stores.set_delay_ms(config.latency_ms);

    let state = AppState::new(&stores, Arc::new(SystemClock), log_ids);

    let addr = config.address();
    tracing::info!(seeded = config.seed, latency_ms = config.latency_ms, "stores ready");
    tracing::info!("GraphQL endpoint: http://{}{}", addr, ENDPOINT);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}
