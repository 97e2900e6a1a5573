//! Guest Worlds skill server entry point.

use std::error::Error;
use std::sync::Arc;

use guestworlds_core::clock::SystemClock;
use guestworlds_skill::config::SkillConfig;
use guestworlds_skill::routes;
use guestworlds_skill::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Guest Worlds skill server");

    // Read configuration from environment.
    let config = SkillConfig::from_env()?;
    let schedule = config.load_schedule()?;
    tracing::info!(
        changeovers = schedule.calendar().len(),
        worlds = schedule.catalog().len(),
        custom_schedule = config.schedule_path.is_some(),
        "schedule ready"
    );

    // Build application state.
    let app_state = AppState::new(Arc::new(SystemClock), Arc::new(schedule));

    // Build router.
    let app = routes::app(app_state);

    // Start server.
    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
