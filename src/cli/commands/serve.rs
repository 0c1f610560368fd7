use std::sync::Arc;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::server::{start_server, system_state};
use crate::store::SqliteEventStore;

/// Handle the `serve` subcommand: open the store once, then serve until
/// a shutdown signal arrives.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { bind, port } = cmd {
        let mut cfg = cfg.clone();
        if let Some(b) = bind {
            cfg.bind = b.clone();
        }
        if let Some(p) = port {
            cfg.port = *p;
        }

        let store = Arc::new(SqliteEventStore::open(&cfg.database)?);
        tracing::info!(database = %cfg.database, "event store opened");

        let address = cfg.listen_address();
        let state = system_state(store.clone(), cfg.page_meta());
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        store.record("serve", &address, "Server starting")?;
        let served = runtime.block_on(start_server(&address, state));
        store.record(
            "serve",
            &address,
            match &served {
                Ok(()) => "Server stopped",
                Err(_) => "Server failed",
            },
        )?;
        served?;
    }
    Ok(())
}
