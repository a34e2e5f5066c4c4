//! Configuration handling for the forms app

use crate::state::View;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment override for the simulated round-trip
const SUBMIT_DELAY_ENV: &str = "BLOOM_FORMS_SUBMIT_DELAY_MS";

/// Default simulated round-trip
const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormsConfig {
    /// Simulated submission delay in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// Where diagnostic logs go
    pub log_file: Option<PathBuf>,
    /// View to open at start
    pub last_view: Option<View>,
}

impl FormsConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("studio", "bloom", "bloom-forms")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormsConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
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

    /// Submission delay, with the environment taking precedence over the file
    pub fn submit_delay(&self) -> Duration {
        let env_ms = std::env::var(SUBMIT_DELAY_ENV).ok();
        Self::resolve_delay(env_ms.as_deref(), self.submit_delay_ms)
    }

    fn resolve_delay(env_ms: Option<&str>, file_ms: Option<u64>) -> Duration {
        let ms = env_ms
            .and_then(|v| match v.trim().parse::<u64>() {
                Ok(ms) => Some(ms),
                Err(e) => {
                    tracing::warn!("Ignoring invalid {SUBMIT_DELAY_ENV}={v:?}: {e}");
                    None
                }
            })
            .or(file_ms)
            .unwrap_or(DEFAULT_SUBMIT_DELAY_MS);
        Duration::from_millis(ms)
    }

    /// Log file path: configured, else `bloom-forms.log` in the data dir
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            Self::project_dirs().map(|dirs| dirs.data_dir().join("bloom-forms.log"))
        })
    }

    pub fn start_view(&self) -> View {
        self.last_view.unwrap_or_default()
    }
}
