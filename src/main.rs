//! # Pet Meal Server
//!
//! Starts the actor system and serves the HTTP API until Ctrl+C or SIGTERM.
//!
//! 1. [`setup_tracing`] installs the subscriber (`RUST_LOG` filter).
//! 2. [`Config::load`] reads the `PETMEAL_*` variables.
//! 3. [`PetMealSystem::new`] spawns every actor.
//! 4. The router is served with graceful shutdown, then the system is stopped.

use pet_meal::config::Config;
use pet_meal::http::{self, AppState};
use pet_meal::lifecycle::{setup_tracing, PetMealSystem};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = Config::load()?;
    info!(?config, "Starting pet meal server");

    let system = PetMealSystem::new(&config);
    let app = http::router(AppState::from_system(&system), &config);

    let address = config.address();
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(http::shutdown_signal())
        .await?;

    // The router (and its client clones) is gone once serve returns
    system.shutdown().await?;
    Ok(())
}
