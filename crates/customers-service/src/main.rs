//! # Customers Service
//!
//! Serves the pet resource over HTTP.
//!
//! 1. Sets up tracing ([`setup_tracing`]).
//! 2. Loads [`ServiceConfig`] from `CUSTOMERS_CONFIG` and `CUSTOMERS_*` variables.
//! 3. Starts the [`CustomersSystem`] actors.
//! 4. Serves the router until Ctrl-C, then stops the actors.

use customers_service::config::ServiceConfig;
use customers_service::lifecycle::CustomersSystem;
use customers_service::web;
use resource_actor::setup_tracing;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = ServiceConfig::load()?;
    info!(?config, "Starting customers service");

    let system = CustomersSystem::new(&config);
    let app = web::router(system.pet_resource());

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await?;
    info!("Customers service stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
