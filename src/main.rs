//! Service binary: loads configuration, builds the store and serves HTTP.

use std::error::Error;
use std::sync::Arc;

use tracing::{info, warn};

use payroll_records::api::{AppState, create_router};
use payroll_records::config::{ConfigLoader, StoreBackend};
use payroll_records::logging::init_tracing;
use payroll_records::store::{EmployeeStore, MemoryStore, MySqlStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let loader = match std::env::var("CONFIG_DIR") {
        Ok(dir) => ConfigLoader::load(dir)?,
        Err(_) => ConfigLoader::defaults(),
    }
    .apply_env(|key| std::env::var(key).ok())?;

    init_tracing(loader.logging());

    let database = loader.database();
    let store: Arc<dyn EmployeeStore> = match database.backend {
        StoreBackend::Mysql => {
            let store = MySqlStore::connect_lazy(database);
            if database.ensure_schema {
                // The store may still be starting; requests will report it.
                if let Err(error) = store.ensure_schema().await {
                    warn!(error = %error, "Could not prepare employee schema");
                }
            }
            Arc::new(store)
        }
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
    };

    let state = AppState::new(store, loader.departments().to_vec());
    let app = create_router(state);

    let bind_addr = &loader.server().bind_addr;
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!(
        addr = %bind_addr,
        backend = %database.backend,
        "Payroll records service listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
