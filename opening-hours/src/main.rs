use std::process::ExitCode;

use opening_hours::config::{OpeningHoursConfig, ServerConfig};
use opening_hours::web::{AppState, create_router};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let server = match ServerConfig::from_env() {
        Ok(server) => server,
        Err(e) => {
            error!(error = %e, "invalid server settings");
            return ExitCode::FAILURE;
        }
    };

    let hours = match OpeningHoursConfig::load(&server.config_path)
        .and_then(OpeningHoursConfig::into_opening_hours)
    {
        Ok(hours) => hours,
        Err(e) => {
            error!(path = %server.config_path.display(), error = %e, "failed to load opening hours");
            return ExitCode::FAILURE;
        }
    };
    info!(
        region = %hours.region,
        timezone = hours.timezone.name(),
        "loaded opening hours"
    );
    if hours.schedule.is_always_closed() {
        warn!("schedule has no complete opening interval; every day reads closed");
    }

    let app = create_router(AppState::new(hours), &server.static_dir);

    let listener = match tokio::net::TcpListener::bind(server.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %server.addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %server.addr, "listening");
    info!("  GET /             - Status page");
    info!("  GET /status       - Status fragment");
    info!("  GET /api/status   - Status as JSON");
    info!("  GET /api/holidays - Statutory holidays");
    info!("  GET /health       - Health check");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
