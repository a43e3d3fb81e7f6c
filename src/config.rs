use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::constants::{DEFAULT_LIST_PATH, DEFAULT_MARKER_SEGMENT};

#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    marker: Option<String>,
    list_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) marker: String,
    pub(crate) list_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER_SEGMENT.to_string(),
            list_path: PathBuf::from(DEFAULT_LIST_PATH),
        }
    }
}

impl Config {
    pub(crate) fn load() -> Result<Self> {
        for path in config_paths() {
            if !path.exists() {
                continue;
            }
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            return Self::from_toml_str(&raw)
                .with_context(|| format!("failed to parse config file {}", path.display()));
        }
        Ok(Self::default())
    }

    pub(crate) fn from_toml_str(raw: &str) -> Result<Self> {
        let parsed: PartialConfig = toml::from_str(raw)?;
        let mut config = Self::default();
        if let Some(marker) = parsed.marker
            && !marker.trim().is_empty()
        {
            config.marker = marker;
        }
        if let Some(list_path) = parsed.list_path
            && !list_path.as_os_str().is_empty()
        {
            config.list_path = list_path;
        }
        Ok(config)
    }
}

fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("wtsync").join("config.toml"));
    }
    if let Some(home_dir) = dirs::home_dir() {
        paths.push(home_dir.join(".wtsync.toml"));
    }
    paths
}
