use delay_core::config::HEALTH_FALLBACK;
use delay_core::DelayConfig;
use delay_server::routes;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    delay_core::telemetry::init();
    if let Err(err) = run().await {
        error!("{err:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = DelayConfig::from_env(HEALTH_FALLBACK)?;
    info!(
        addr = %config.addr,
        min_ms = config.defaults.min_ms,
        max_ms = config.defaults.max_ms,
        "starting configurable delay server"
    );
    delay_server::serve(routes::health_router(config), config.addr).await?;
    Ok(())
}
