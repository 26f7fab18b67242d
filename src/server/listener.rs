use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::files::FileStore;
use crate::http::connection::{Connection, ConnectionSettings};
use crate::http::router::Router;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen)
        .await
        .with_context(|| format!("failed to bind {}", cfg.listen))?;
    info!("Listening on {}", cfg.listen);

    match &cfg.directory {
        Some(dir) => info!(dir = %dir.display(), "Serving files"),
        None => info!("No directory configured, file routes disabled"),
    }

    let router = Arc::new(Router::new(FileStore::new(cfg.directory.clone())));
    let settings = ConnectionSettings {
        read_timeout: cfg.read_timeout(),
        max_body_size: cfg.max_body_size,
    };

    serve(listener, router, settings).await
}

/// Accepts connections forever, one task per connection.
pub async fn serve(
    listener: TcpListener,
    router: Arc<Router>,
    settings: ConnectionSettings,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener
            .accept()
            .await
            .context("failed to accept connection")?;
        info!("Accepted connection from {}", peer);

        let router = router.clone();
        let settings = settings.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, router, settings);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {:#}", peer, e);
            }
        });
    }
}
