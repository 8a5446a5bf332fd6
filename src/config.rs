//! Configuration handling for the TUI

use crate::api::DEFAULT_BASE_URL;
use crate::state::View;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "PIZZA_API_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PizzaConfig {
    /// Base URL of the order API
    pub api_base_url: Option<String>,
    /// Route to open on startup ("/" or "/order")
    pub start_path: Option<String>,
}

impl PizzaConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "pizza", "pizza-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config dir
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file, defaulting when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: PizzaConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the API base URL: environment, then file, then default
    pub fn api_base_url(&self) -> String {
        self.resolve_api_base_url(std::env::var(API_URL_ENV).ok())
    }

    fn resolve_api_base_url(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|v| !v.is_empty())
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Initial view; unknown paths fall back to the landing page
    pub fn start_view(&self) -> View {
        self.start_path
            .as_deref()
            .and_then(View::from_path)
            .unwrap_or_default()
    }
}
