//! HTTP server for the calculators
//!
//! Configured through FINCALC_HOST, FINCALC_PORT and FINCALC_REFERENCE_DIR
//! (see `fincalc::config`). Logging is controlled with RUST_LOG.

use anyhow::Context;
use fincalc::{
    api::{router, AppState},
    config::ServerConfig,
    ReferenceData,
};
use log::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env()?;
    let reference = ReferenceData::load(config.reference_dir.as_deref())
        .context("failed to load reference data")?;

    info!(
        "reference data: {} currencies [{}] (base {}), {} holidays for {} {}",
        reference.rates.len(),
        reference.rates.codes().collect::<Vec<_>>().join(", "),
        reference.rates.base(),
        reference.holidays.holidays().len(),
        reference.holidays.country(),
        reference.holidays.year(),
    );

    let app = router(AppState::new(reference));
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
