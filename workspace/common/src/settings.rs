use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_PAGE_SIZE: u32 = 5;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings the browser client needs at startup.
///
/// The host serves these as JSON so that the collaborator API's base address
/// can be changed without rebuilding the wasm bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientSettings {
    /// Base address of the collaborator API, without trailing slash
    pub api_base_url: String,
    /// Records per table page
    pub page_size: u32,
    /// One of error, warn, info, debug, trace
    pub log_level: String,
    /// Show a banner when a refresh cycle fails instead of only logging it
    pub report_fetch_errors: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            report_fetch_errors: true,
        }
    }
}

impl ClientSettings {
    /// Strip the trailing slash from the base URL and replace a zero page size.
    pub fn normalized(mut self) -> Self {
        let trimmed = self.api_base_url.trim_end_matches('/');
        if trimmed.len() != self.api_base_url.len() {
            self.api_base_url = trimmed.to_string();
        }
        if self.page_size == 0 {
            warn!("Page size 0 is not usable, falling back to {}", DEFAULT_PAGE_SIZE);
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        self
    }
}
