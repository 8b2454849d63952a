use common::{ClientSettings, DEFAULT_API_BASE_URL, DEFAULT_LOG_LEVEL, DEFAULT_PAGE_SIZE};
use config::{Config, Environment, File, Source};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::error::HostError;
use crate::schemas::AppState;

const CONFIG_FILE: &str = "txdash";
const ENV_PREFIX: &str = "TXDASH";

/// Host configuration, layered as: built-in defaults, optional `txdash.toml`,
/// `TXDASH_*` environment variables. CLI flags are applied on top with
/// [`HostConfig::with_overrides`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    pub bind_address: String,
    pub dist_dir: PathBuf,
    pub api_base_url: String,
    pub page_size: u32,
    pub log_level: String,
    pub report_fetch_errors: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            dist_dir: PathBuf::from("workspace/frontend/dist"),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            report_fetch_errors: true,
        }
    }
}

/// Values given on the command line; `None` keeps the configured value.
#[derive(Debug, Default)]
pub struct ServeOverrides {
    pub bind_address: Option<String>,
    pub dist_dir: Option<PathBuf>,
    pub api_base_url: Option<String>,
    pub page_size: Option<u32>,
}

impl HostConfig {
    /// Load `.env`, then layer the config file and environment over the defaults.
    pub fn load() -> Result<Self, HostError> {
        dotenvy::dotenv().ok();
        Self::from_sources(
            File::with_name(CONFIG_FILE).required(false),
            Environment::with_prefix(ENV_PREFIX).try_parsing(true),
        )
    }

    fn from_sources<F, E>(file: F, env: E) -> Result<Self, HostError>
    where
        F: Source + Send + Sync + 'static,
        E: Source + Send + Sync + 'static,
    {
        let config = Config::builder()
            .add_source(Config::try_from(&HostConfig::default())?)
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize::<HostConfig>()?;
        debug!("Loaded host configuration: {:?}", config);
        Ok(config)
    }

    pub fn with_overrides(mut self, overrides: ServeOverrides) -> Self {
        if let Some(bind_address) = overrides.bind_address {
            self.bind_address = bind_address;
        }
        if let Some(dist_dir) = overrides.dist_dir {
            self.dist_dir = dist_dir;
        }
        if let Some(api_base_url) = overrides.api_base_url {
            self.api_base_url = api_base_url;
        }
        if let Some(page_size) = overrides.page_size {
            self.page_size = page_size;
        }
        self
    }

    /// The part of the configuration the browser receives.
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            api_base_url: self.api_base_url.clone(),
            page_size: self.page_size,
            log_level: self.log_level.clone(),
            report_fetch_errors: self.report_fetch_errors,
        }
        .normalized()
    }

    /// Build the handler state, checking that the bundle directory is usable.
    pub fn app_state(&self) -> Result<AppState, HostError> {
        if !self.dist_dir.join("index.html").is_file() {
            return Err(HostError::MissingBundle(self.dist_dir.clone()));
        }
        Ok(AppState::new(self.client_settings(), self.dist_dir.clone()))
    }
}
