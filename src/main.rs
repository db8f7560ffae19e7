//! Agenda - Main entry point
//!
//! Loads the contact collection from the configured slot store and serves it
//! to an MCP client over stdio.

use agenda::persistence::PersistenceAdapter;
use agenda::store::ContactStore;
use agenda::{AgendaMcpServer, AgendaService, Config};
use anyhow::Result;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let log_level = config.as_ref().map_or("error", |cfg| cfg.log_level.as_str());
    agenda::logging::init_logging(log_level);

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        storage = ?config.storage,
        data_dir = %config.data_dir.display(),
        "Opening contact storage"
    );

    let persistence = PersistenceAdapter::new(config.slot_store());
    let store = ContactStore::load(persistence);
    info!("Loaded {} contact(s)", store.len());

    let server = AgendaMcpServer::new(AgendaService::new(store));

    info!("Starting MCP server with stdio transport");
    agenda::server::run_server(server).await?;

    info!("Agenda shutdown complete");
    Ok(())
}
