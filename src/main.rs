use anyhow::Result;
use temperature_anomaly_dashboard::{api, config, dashboard, telemetry};
use config::Config;
use telemetry::init_tracing;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::load()?;
    init_tracing(cfg.log.format, &cfg.log.filter);

    // Load, summarize and render before binding; any data error aborts here.
    let app_state = dashboard::AppState::new(cfg.clone())?;

    let app = api::router(app_state, &cfg);

    let addr = cfg.server.socket_addr()?;

    if cfg.server.host == "0.0.0.0" {
        warn!("server binding to 0.0.0.0 - dashboard will be reachable from the network");
    }

    info!(%addr, "starting temperature anomaly dashboard");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    warn!("shutdown complete");
    Ok(())
}
