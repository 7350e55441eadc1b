use anyhow::Result;
use tracing_subscriber::EnvFilter;

use endpoints::api;
use endpoints::listener::TcpListener;
use endpoints::server::Server;
use endpoints::service::Service;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let router = api::routes();
    tracing::info!("routes:\n{:?}", router);

    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], 7878));
    let listener = TcpListener::try_bind(addr)?;
    tracing::info!(addr = %listener.local_addr(), "listening");

    Server::new(listener)
        .try_serve_with_graceful_shutdown(Service::new(router), shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install ctrl-c handler");
    }
}
