//! ASR router binary: configuration, metrics recorder, axum server.

use tracing::info;
use tracing_subscriber::EnvFilter;

use asr_server::{AppState, build_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = asr_settings::get_settings();
    info!(
        granary = %settings.engines.granary_url,
        whisper = %settings.engines.whisper_url,
        riva = %settings.engines.riva_url,
        fallback_enabled = settings.fallback_enabled,
        "starting asr router"
    );

    let metrics_handle = asr_server::metrics::install_recorder();
    let state = AppState::from_settings(&settings, metrics_handle)?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr).await?;
    info!(addr = %settings.bind_addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
