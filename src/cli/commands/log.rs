use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::SqliteEventStore;

/// Handle the `log` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print, limit } = cmd
        && *print
    {
        let store = SqliteEventStore::open(&cfg.database)?;
        let rows = store.recent_log(*limit)?;

        if rows.is_empty() {
            println!("No log entries.");
        }
        for (date, operation, message) in rows {
            println!("{date} | {operation:<8} | {message}");
        }
    }
    Ok(())
}
