use crate::config::AppConfig;
use crate::data::SEED_PROPERTIES_JSON;
use crate::db::connection::{init_db, Database};
use crate::db::seed::seed_properties_if_empty;
use crate::router::handle_with_page_size;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod data;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("homepulse=info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // Create the database handle and apply the schema
    let db = Database::new(config.db_path.clone());
    if let Err(e) = init_db(&db, &config.schema_path) {
        error!("Database initialization failed: {e}");
        std::process::exit(1);
    }

    if let Err(e) = seed_properties_if_empty(&db, SEED_PROPERTIES_JSON) {
        error!("Seeding listings failed: {e}");
        std::process::exit(1);
    }

    info!(addr = %config.addr, workers = config.max_workers, "starting server");

    let server = Server::bind(&config.addr).max_workers(config.max_workers);
    let page_size = config.page_size;

    let result = server.serve(move |req, _info| {
        match handle_with_page_size(req, &db, page_size) {
            Ok(resp) => resp,
            Err(err) => responses::html_error_response(err),
        }
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
