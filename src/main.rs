//! tintd - tinted-text chat server.

use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tintd::config::Config;
use tintd::network::Gateway;
use tintd::router::Router;
use tintd::state::Roster;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let config = Config::load(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "failed to load config");
        e
    })?;

    info!(
        server = %config.server.name,
        listen = %config.listen.address,
        "starting tintd"
    );

    let roster = Arc::new(Roster::new());
    let router = Arc::new(Router::new(Arc::clone(&roster)));

    let gateway = Gateway::bind(config.listen.address, roster, router).await?;
    gateway.run().await
}
