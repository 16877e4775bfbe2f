use dotenvy::dotenv;
use marketplace::logging::init_tracing;
use marketplace::router::init_router;
use marketplace::state::init_app_state;
use marketplace_config::ServerConfig;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let server_config = ServerConfig::from_env()?;

    // A missing signing secret stops the process here, never per request.
    let state = match init_app_state() {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "refusing to start");
            return Err(e.into());
        }
    };
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(server_config.addr).await?;
    info!(addr = %server_config.addr, "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
    }
}
