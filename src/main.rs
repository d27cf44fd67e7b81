use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};

use mergington::{logging, web, ActivityStore, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    logging::init_logging();

    let config = AppConfig::from_env()?;
    let activities = config.load_activities()?;
    info!(
        activities = activities.len(),
        seed = ?config.activities_file,
        "activity directory loaded"
    );

    let store = ActivityStore::new(activities);
    let app = web::app(store, &config.static_dir);

    // Retry once on the next port if the configured one is taken.
    let addr = config.socket_addr(config.port)?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback_port = config
                .port
                .checked_add(1)
                .context("no fallback port above 65535")?;
            let fallback = config.socket_addr(fallback_port)?;
            warn!(%addr, %fallback, error = %e, "bind failed, trying fallback port");
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("cannot bind {} or {}", addr, fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("Server running on http://{}", bound_addr);
    info!("Open http://{}{} to manage signups", bound_addr, web::LANDING_PAGE);

    axum::serve(listener, app).await?;
    Ok(())
}
