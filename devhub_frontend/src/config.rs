use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;

use crate::router::Route;

/// Connection and UX settings for the front-end.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Supabase project URL, e.g. `https://xyz.supabase.co`
    pub supabase_url: String,
    /// Public anon key sent with every request
    pub supabase_anon_key: String,
    pub request_timeout_secs: u64,
    /// How long the creation notice stays up before redirecting
    pub redirect_delay_ms: u64,
    pub start_route: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            supabase_url: "http://127.0.0.1:54321".to_string(),
            supabase_anon_key: String::new(),
            request_timeout_secs: 15,
            redirect_delay_ms: 1500,
            start_route: "/".to_string(),
        }
    }
}

impl FrontendConfig {
    /// Defaults, then the TOML file (if any), then `DEVHUB_*` overrides.
    pub fn load() -> Result<Self> {
        let mut config = match config_file_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        config.apply_overrides(|name| env::var(name).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |name: &str| lookup(name).filter(|raw| !raw.trim().is_empty());

        if let Some(url) = non_empty("DEVHUB_SUPABASE_URL") {
            self.supabase_url = url;
        }
        if let Some(key) = non_empty("DEVHUB_SUPABASE_ANON_KEY") {
            self.supabase_anon_key = key;
        }
        if let Some(raw) = non_empty("DEVHUB_REQUEST_TIMEOUT_SECS") {
            match raw.trim().parse() {
                Ok(secs) => self.request_timeout_secs = secs,
                Err(_) => warn!("ignoring DEVHUB_REQUEST_TIMEOUT_SECS={raw}"),
            }
        }
        if let Some(raw) = non_empty("DEVHUB_REDIRECT_DELAY_MS") {
            match raw.trim().parse() {
                Ok(ms) => self.redirect_delay_ms = ms,
                Err(_) => warn!("ignoring DEVHUB_REDIRECT_DELAY_MS={raw}"),
            }
        }
        if let Some(route) = non_empty("DEVHUB_START_ROUTE") {
            self.start_route = route;
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    pub fn start_route(&self) -> Route {
        Route::parse(&self.start_route)
    }
}

fn config_file_path() -> Option<PathBuf> {
    if let Ok(path) = env::var("DEVHUB_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("devhub").join("config.toml"))
}
