/// Roster configuration
use crate::error::{AppError, Result};
use roster_catalog::{CatalogConfig, DEFAULT_BASE_URL};
use roster_list::{FetchStrategy, ListOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default config file, read from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RosterConfig {
    #[serde(default = "default_catalog")]
    pub catalog: CatalogSettings,

    #[serde(default = "default_list")]
    pub list: ListSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListSettings {
    #[serde(default = "default_first_id")]
    pub first_id: u32,

    #[serde(default = "default_count")]
    pub count: u32,

    #[serde(default)]
    pub strategy: FetchStrategy,
}

impl RosterConfig {
    /// Load configuration from file and environment.
    ///
    /// An explicit `path` must exist; otherwise `roster.toml` is used when
    /// present. Environment variables prefixed `ROSTER_` override the file,
    /// with `__` between nested keys (e.g. `ROSTER_CATALOG__BASE_URL`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let env = config::Environment::with_prefix("ROSTER")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);

        Self::load_with_env(path, env)
    }

    /// Same as [`load`](Self::load) with a caller-supplied environment source.
    pub fn load_with_env(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(env);

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.catalog.base_url.trim().is_empty() {
            return Err(AppError::Config(
                "Catalog base URL is required (set ROSTER_CATALOG__BASE_URL)".to_string(),
            ));
        }

        self.list_options()
            .validate()
            .map_err(|e| AppError::Config(format!("list: {}", e)))?;

        if self.catalog.timeout_secs == 0 {
            return Err(AppError::Config(
                "catalog.timeout_secs must be at least 1".to_string(),
            ));
        }

        if self.catalog.connect_timeout_secs == 0 {
            return Err(AppError::Config(
                "catalog.connect_timeout_secs must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig::new(self.catalog.base_url.clone()).with_timeouts(
            Duration::from_secs(self.catalog.timeout_secs),
            Duration::from_secs(self.catalog.connect_timeout_secs),
        )
    }

    pub fn list_options(&self) -> ListOptions {
        ListOptions {
            first_id: self.list.first_id,
            count: self.list.count,
            strategy: self.list.strategy,
        }
    }
}

// Default values
fn default_catalog() -> CatalogSettings {
    CatalogSettings {
        base_url: default_base_url(),
        timeout_secs: default_timeout_secs(),
        connect_timeout_secs: default_connect_timeout_secs(),
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_list() -> ListSettings {
    ListSettings {
        first_id: default_first_id(),
        count: default_count(),
        strategy: FetchStrategy::default(),
    }
}

fn default_first_id() -> u32 {
    1
}

fn default_count() -> u32 {
    10
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            list: default_list(),
        }
    }
}
