use common::ClientSettings;
use gloo_net::http::Request;
use log::Level;
use web_sys::window;

/// Path on the host that serves [`ClientSettings`] as JSON.
pub const RUNTIME_SETTINGS_PATH: &str = "/runtime-settings.json";

/// Resolved application settings, passed down from [`crate::run_app`].
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub client: ClientSettings,
    /// Log level for wasm-logger
    pub log_level: Level,
    /// Served from localhost
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::from_client(ClientSettings::default())
    }
}

impl AppSettings {
    pub fn from_client(client: ClientSettings) -> Self {
        let log_level = client.log_level.parse::<Level>().unwrap_or(Level::Info);
        Self {
            client,
            log_level,
            debug_mode: false,
        }
    }

    /// Apply overrides from the page location and localStorage.
    pub fn apply_browser_overrides(&mut self) {
        let Some(window) = window() else {
            return;
        };

        if let Ok(hostname) = window.location().hostname() {
            self.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            // In development, use more verbose logging
            if self.debug_mode && self.log_level < Level::Debug {
                self.log_level = Level::Debug;
            }
        }

        let Ok(Some(storage)) = window.local_storage() else {
            return;
        };

        if let Ok(Some(api_base_url)) = storage.get_item("txdash_api_base_url") {
            self.client.api_base_url = api_base_url;
        }

        if let Ok(Some(page_size)) = storage.get_item("txdash_page_size") {
            if let Ok(page_size) = page_size.parse::<u32>() {
                self.client.page_size = page_size;
            }
        }

        if let Ok(Some(log_level)) = storage.get_item("txdash_log_level") {
            if let Ok(level) = log_level.parse::<Level>() {
                self.log_level = level;
            }
        }

        if let Ok(Some(report)) = storage.get_item("txdash_report_fetch_errors") {
            self.client.report_fetch_errors = report.to_lowercase() == "true";
        }

        self.client = self.client.clone().normalized();
    }
}

/// Defaults, then the host's runtime settings, then browser overrides.
pub async fn load_settings() -> AppSettings {
    let client = match Request::get(RUNTIME_SETTINGS_PATH).send().await {
        Ok(response) if response.ok() => response
            .json::<ClientSettings>()
            .await
            .unwrap_or_default(),
        _ => ClientSettings::default(),
    };

    let mut settings = AppSettings::from_client(client.normalized());
    settings.apply_browser_overrides();
    settings
}
