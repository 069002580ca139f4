use std::path::PathBuf;

use anyhow::{Context, Result};
use dirs::config_dir;

// Base URL of the FlyAwayHub REST API
pub const DEFAULT_API_URL: &str = "https://api.flyawayhub.com/v1";

/// Runtime settings shared by the commands.
#[derive(Debug, Clone)]
pub struct Config {
    /// API base URL, without the resource path
    pub api_url: String,
    /// Directory holding `session.json`
    pub data_dir: PathBuf,
}

impl Config {
    /// Builds the configuration from the command-line overrides, falling back
    /// to `<config dir>/flyawayhub` for the data directory.
    pub fn new(api_url: String, custom_data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match custom_data_dir {
            Some(dir) => dir,
            None => config_dir()
                .context("Failed to find user's config directory")?
                .join("flyawayhub"),
        };

        Ok(Self { api_url, data_dir })
    }

    /// Full URL of an API resource, e.g. `locations/42/suninfo`.
    pub fn api_endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
