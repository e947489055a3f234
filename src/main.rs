use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activity_directory::config::Config;
use activity_directory::services::registry::ActivityRegistry;
use activity_directory::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    let registry = match &config.seed_file {
        Some(path) => ActivityRegistry::from_seed_file(path)
            .with_context(|| format!("loading activities from {}", path.display()))?,
        None => ActivityRegistry::seeded(),
    };
    info!(activities = registry.len(), "registry ready");

    let app = web::router(registry, &config.static_dir);

    let listener = match TcpListener::bind(config.bind_addr()).await {
        Ok(l) => l,
        Err(e) => {
            warn!(
                addr = %config.bind_addr(),
                error = %e,
                "bind failed, trying {}",
                config.fallback_bind_addr()
            );
            TcpListener::bind(config.fallback_bind_addr())
                .await
                .with_context(|| format!("binding {}", config.fallback_bind_addr()))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("listening on http://{}", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
