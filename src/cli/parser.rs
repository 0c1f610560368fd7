use clap::{Parser, Subcommand};

/// Command-line interface definition for clubevents
#[derive(Parser, Debug)]
#[command(
    name = "clubevents",
    version = env!("CARGO_PKG_VERSION"),
    about = "Club event board: serve the event listing page or print it from the SQLite store",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Serve the event listing over HTTP (GET /events, GET /{locale}/events)
    Serve {
        /// Address to bind (overrides `bind` in the config file)
        #[arg(long)]
        bind: Option<String>,

        /// Port to listen on (overrides `port` in the config file)
        #[arg(long, short)]
        port: Option<u16>,
    },

    /// Print the event listing
    List {
        /// Render the full HTML page instead of terminal text
        #[arg(long, conflicts_with = "json")]
        html: bool,

        /// Print the listing model as JSON
        #[arg(long, conflicts_with = "html")]
        json: bool,

        /// Classify against this instant instead of the current time
        /// (RFC 3339 or YYYY-MM-DD)
        #[arg(long, value_name = "WHEN")]
        now: Option<String>,

        /// Disable ANSI colors in terminal output
        #[arg(long = "no-color")]
        no_color: bool,
    },

    /// Show the configuration file
    Config {
        /// Print the current configuration to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Print the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        /// Maximum number of rows
        #[arg(long, default_value_t = 50)]
        limit: usize,
    },
}
