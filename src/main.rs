//! Server binary — wires config, logging, store, catalog, and HTTP.

use std::sync::Arc;

use filmstore::{http, logging, Catalog, Config, FileStore};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    logging::init();

    let config = Config::from_env();
    tracing::info!(
        db = %config.db_path.display(),
        addr = %config.bind_addr,
        "starting filmstore"
    );

    let catalog = Arc::new(Catalog::new(FileStore::new(&config.db_path)));
    http::serve(catalog, &config.bind_addr).await
}
