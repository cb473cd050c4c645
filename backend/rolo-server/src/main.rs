pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    auth::{auth::auth, auth_request::AuthRequest, auth_response::AuthResponse},
    contacts::{
        contact_dto::ContactDto,
        contacts::{create_contact, delete_contact, list_contacts, update_contact},
        create_contact_request::CreateContactRequest,
        list_contacts_query::ListContactsQuery,
        update_contact_request::UpdateContactRequest,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
};

use crate::routes::build_router;
use crate::state::AppState;

use rolo_db::Database;

use std::error::Error;

use log::{info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Pick up ROLO_* variables from a local .env, if present
    dotenvy::dotenv().ok();

    // Load and validate configuration; a missing database.url aborts here
    let config = rolo_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = rolo_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting rolo-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Connect once; the handle is the only path to the database
    let database_url = config.database.url()?;
    info!("Connecting to database: {}", database_url);

    let database = Database::connect(database_url).await?;
    info!("Database connection established");

    info!("Running database migrations...");
    database.migrate().await?;
    info!("Migrations complete");

    // Build application state and router
    let app_state = AppState {
        pool: database.pool(),
    };
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Write port discovery file for CLI auto-discovery
    match rolo_config::PortFileInfo::write(actual_addr.port(), &config.server.host) {
        Ok(path) => info!("Port file written: {}", path.display()),
        Err(e) => warn!(
            "Failed to write port file (CLI auto-discovery may not work): {}",
            e
        ),
    }

    // Serve until ctrl-c
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Clean up port discovery file
    if let Err(e) = rolo_config::PortFileInfo::remove() {
        warn!("Failed to remove port file: {}", e);
    }

    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => log::error!("Failed to listen for SIGINT: {}", e),
    }
}
