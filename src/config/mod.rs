use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use crate::view::html::{DEFAULT_DESCRIPTION, DEFAULT_TITLE, PageMeta};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_site_title")]
    pub site_title: String,
    #[serde(default = "default_site_description")]
    pub site_description: String,
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// `tracing_subscriber::EnvFilter` directives; `RUST_LOG` wins when set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    3000
}
fn default_site_title() -> String {
    DEFAULT_TITLE.to_string()
}
fn default_site_description() -> String {
    DEFAULT_DESCRIPTION.to_string()
}
fn default_locale() -> String {
    "en".to_string()
}
fn default_log_filter() -> String {
    "clubevents=info,tower_http=info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            bind: default_bind(),
            port: default_port(),
            site_title: default_site_title(),
            site_description: default_site_description(),
            default_locale: default_locale(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("clubevents")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".clubevents")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("clubevents.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("clubevents.sqlite")
    }

    /// Load configuration from the standard file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let mut cfg: Config = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("invalid configuration: {e}")))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn page_meta(&self) -> PageMeta {
        PageMeta {
            title: self.site_title.clone(),
            description: self.site_description.clone(),
            lang: self.default_locale.clone(),
        }
    }

    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    /// Configuration written by `init`: an existing file keeps every
    /// setting, and only `--db` replaces the database path.
    pub fn for_init(existing: Option<Config>, custom_db: Option<&str>) -> Config {
        let mut config = existing.unwrap_or_else(|| Config {
            database: Self::database_file().to_string_lossy().to_string(),
            ..Config::default()
        });
        if let Some(db) = custom_db {
            config.database = expand_tilde(db).to_string_lossy().to_string();
        }
        config
    }

    /// Initialize configuration and database location.
    ///
    /// Returns the database path that was configured. In test mode the
    /// config file is neither read nor written.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let file = Self::config_file();
        let existing = if !is_test && file.exists() {
            Some(Self::load_from(&file)?)
        } else {
            None
        };

        let config = Self::for_init(existing, custom_db);
        let db_path = expand_tilde(&config.database);

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let mut out = fs::File::create(&file)?;
            out.write_all(config.to_yaml()?.as_bytes())?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
