use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{GrocerError, Result};
use crate::rules::Thresholds;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_data_dir_string")]
    pub data_dir: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_expiry_warning_days")]
    pub expiry_warning_days: i64,
    #[serde(default = "default_shelf_life_days")]
    pub default_shelf_life_days: i64,
    #[serde(default = "default_repeat_window_days")]
    pub repeat_window_days: i64,
    #[serde(default = "default_repeat_min_count")]
    pub repeat_min_count: usize,
    #[serde(default = "default_repeat_min_gap_days")]
    pub repeat_min_gap_days: i64,
}

fn default_data_dir_string() -> String {
    default_data_dir().to_string_lossy().to_string()
}

fn default_currency() -> String {
    "LKR".to_string()
}

fn default_expiry_warning_days() -> i64 {
    Thresholds::default().expiry_warning_days
}

fn default_shelf_life_days() -> i64 {
    Thresholds::default().default_shelf_life_days
}

fn default_repeat_window_days() -> i64 {
    Thresholds::default().repeat_window_days
}

fn default_repeat_min_count() -> usize {
    Thresholds::default().repeat_min_count
}

fn default_repeat_min_gap_days() -> i64 {
    Thresholds::default().repeat_min_gap_days
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir_string(),
            currency: default_currency(),
            expiry_warning_days: default_expiry_warning_days(),
            default_shelf_life_days: default_shelf_life_days(),
            repeat_window_days: default_repeat_window_days(),
            repeat_min_count: default_repeat_min_count(),
            repeat_min_gap_days: default_repeat_min_gap_days(),
        }
    }
}

impl Settings {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            expiry_warning_days: self.expiry_warning_days,
            default_shelf_life_days: self.default_shelf_life_days,
            repeat_window_days: self.repeat_window_days,
            repeat_min_count: self.repeat_min_count,
            repeat_min_gap_days: self.repeat_min_gap_days,
        }
    }

    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("store.json")
    }

    pub fn pantry_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("pantry.json")
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("grocer")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Documents")
        .join("grocer")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed settings");
            Settings::default()
        })
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| GrocerError::Settings(e.to_string()))?;
    std::fs::write(settings_path(), format!("{json}\n"))?;
    Ok(())
}

pub fn settings_file_exists() -> bool {
    settings_path().exists()
}

pub fn shellexpand_path(path: &str) -> String {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| PathBuf::from(path))
        .to_string_lossy()
        .to_string()
}
