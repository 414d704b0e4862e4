//! Dashboard configuration.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;

use crate::error::{DashboardError, DashboardResult};

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "dashboard.toml";

static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5002";
static DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
static DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
static DEFAULT_SCHEDULE_PATH: &str = "schedule.json";

// Seattle
const DEFAULT_LATITUDE: f64 = 47.6062;
const DEFAULT_LONGITUDE: f64 = -122.3321;

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 5002))
}

fn default_forecast_url() -> String {
    DEFAULT_FORECAST_URL.to_string()
}

fn default_latitude() -> f64 {
    DEFAULT_LATITUDE
}

fn default_longitude() -> f64 {
    DEFAULT_LONGITUDE
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_schedule_path() -> PathBuf {
    PathBuf::from(DEFAULT_SCHEDULE_PATH)
}

/// Top-level configuration read from `dashboard.toml`.
///
/// Every field has a default, so an empty or missing file yields a
/// working setup that serves Seattle's forecast on port 5002.
#[derive(Deserialize, Clone, Debug)]
pub struct DashboardConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,

    #[serde(default)]
    pub forecast: ForecastConfig,

    #[serde(default)]
    pub schedule: ScheduleConfig,
}

/// Where and how the forecast provider is queried.
#[derive(Deserialize, Clone, Debug)]
pub struct ForecastConfig {
    #[serde(default = "default_forecast_url")]
    pub base_url: String,

    #[serde(default = "default_latitude")]
    pub latitude: f64,

    #[serde(default = "default_longitude")]
    pub longitude: f64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ScheduleConfig {
    #[serde(default = "default_schedule_path")]
    pub path: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            bind_address: default_bind_address(),
            forecast: ForecastConfig::default(),
            schedule: ScheduleConfig::default(),
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        ForecastConfig {
            base_url: default_forecast_url(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig {
            path: default_schedule_path(),
        }
    }
}

impl DashboardConfig {
    /// Load `dashboard.toml` from the working directory, writing a
    /// commented-out default file first if there is none.
    pub fn load() -> DashboardResult<Self> {
        let config_path = PathBuf::from(CONFIG_FILE);

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> DashboardResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| DashboardError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DashboardError::Config(e.to_string()))
    }

    /// Schedule file path with `~` expanded.
    pub fn schedule_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.schedule.path.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DashboardResult<()> {
        let contents = format!(
            "\
# dashboard configuration

# Address the web server listens on:
# bind_address = \"{DEFAULT_BIND_ADDRESS}\"

[forecast]
# base_url = \"{DEFAULT_FORECAST_URL}\"
# latitude = {DEFAULT_LATITUDE}
# longitude = {DEFAULT_LONGITUDE}
# user_agent = \"{DEFAULT_USER_AGENT}\"

[schedule]
# Where schedule entries are stored:
# path = \"{DEFAULT_SCHEDULE_PATH}\"
"
        );

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                DashboardError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DashboardError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
