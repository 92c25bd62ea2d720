//! Configuration handling for the console

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default backend address
pub const DEFAULT_API_URL: &str = "http://localhost:4000";

/// Environment variable that overrides the configured backend address
pub const API_URL_ENV: &str = "COURSE_ADMIN_API_URL";

/// Project directories for config, data and cache files
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "course-admin", "course-admin-tui")
}

/// User configuration for the console
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Backend base URL, without the `/v1` prefix
    pub api_base_url: String,
    /// Public marketplace site, shown on anchor buttons
    pub site_url: String,
    /// HTTP request timeout
    pub request_timeout_secs: u64,
    /// Rows per page in list views
    pub page_size: usize,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            site_url: "http://localhost:3000".to_string(),
            request_timeout_secs: 10,
            page_size: 10,
        }
    }
}

impl AdminConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                serde_json::from_str(&content)?
            }
            _ => Self::default(),
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.api_base_url = url;
        }

        Ok(config)
    }

    /// Write the defaults on first run so there is a file to edit
    pub fn init_file() -> Result<()> {
        match Self::config_path() {
            Some(path) if !path.exists() => Self::default().save(),
            _ => Ok(()),
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Page size never below one row
    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }
}
