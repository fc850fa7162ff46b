use crate::core::logic::check_tunables;
use crate::errors::{AppError, AppResult};
use chrono::format::{Item, StrftimeItems};
use crate::models::Coordinate;
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

/// Language of the output table labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Pl,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_location_history")]
    pub location_history: String,
    #[serde(default = "default_points_csv")]
    pub points_csv: String,
    #[serde(default = "default_calendar_file")]
    pub calendar_file: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,
    #[serde(default = "default_center_lon")]
    pub center_lon: f64,
    #[serde(default = "default_radius")]
    pub radius_meters: f64,
    #[serde(default = "default_offset")]
    pub time_offset_hours: i64,
    #[serde(default = "default_min_cluster")]
    pub min_cluster_minutes: f64,
    #[serde(default = "default_marker")]
    pub event_marker: String,
    #[serde(default = "default_language")]
    pub language: Language,
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_location_history() -> String {
    "Records.json".to_string()
}
fn default_points_csv() -> String {
    "outputs.csv".to_string()
}
fn default_calendar_file() -> String {
    "calendar_events.ics".to_string()
}
fn default_output_dir() -> String {
    ".".to_string()
}
fn default_center_lat() -> f64 {
    -90.0
}
fn default_center_lon() -> f64 {
    0.0
}
fn default_radius() -> f64 {
    300.0
}
fn default_offset() -> i64 {
    2
}
fn default_min_cluster() -> f64 {
    0.5
}
fn default_marker() -> String {
    "*".to_string()
}
fn default_language() -> Language {
    Language::En
}
fn default_date_format() -> String {
    "%d.%m.%Y".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location_history: default_location_history(),
            points_csv: default_points_csv(),
            calendar_file: default_calendar_file(),
            output_dir: default_output_dir(),
            center_lat: default_center_lat(),
            center_lon: default_center_lon(),
            radius_meters: default_radius(),
            time_offset_hours: default_offset(),
            min_cluster_minutes: default_min_cluster(),
            event_marker: default_marker(),
            language: default_language(),
            date_format: default_date_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.geotimelog`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".geotimelog")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("geotimelog.conf")
    }

    /// `--config` override or the default location.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom
            .map(crate::utils::path::expand_tilde)
            .unwrap_or_else(Self::config_file)
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        self.center()?;
        check_tunables(
            self.radius_meters,
            self.min_cluster_minutes,
            self.time_offset_hours,
        )
        .map_err(AppError::Config)?;

        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(AppError::Config(format!(
                "date_format '{}' is not a valid strftime pattern",
                self.date_format
            )));
        }
        Ok(())
    }

    pub fn center(&self) -> AppResult<Coordinate> {
        Coordinate::new(self.center_lat, self.center_lon)
            .map_err(|e| AppError::Config(format!("center: {e}")))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write a default configuration file at `path`. An existing file is kept
    /// unless `overwrite` is set.
    pub fn init_at(path: &Path, overwrite: bool) -> AppResult<bool> {
        if path.exists() && !overwrite {
            return Ok(false);
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        fs::write(path, Config::default().to_yaml()?)?;
        success(format!("Config file: {}", path.display()));
        Ok(true)
    }
}
