use delay_core::config::FIXED_ROUTES_FALLBACK;
use delay_core::DelayConfig;
use delay_server::routes::{self, FIXED_ROUTES};
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
    let config = DelayConfig::from_env(FIXED_ROUTES_FALLBACK)?;
    info!(
        addr = %config.addr,
        min_ms = config.defaults.min_ms,
        max_ms = config.defaults.max_ms,
        "starting fixed-route delay server"
    );
    for route in FIXED_ROUTES {
        info!(
            path = route.path,
            min_ms = route.bounds.min_ms,
            max_ms = route.bounds.max_ms,
            "route registered"
        );
    }
    delay_server::serve(routes::fixed_router(), config.addr).await?;
    Ok(())
}
