//! Core of the personal dashboard.
//!
//! - `forecast`: Open-Meteo client reshaped into a simple summary
//! - `schedule`: the schedule list persisted to a JSON file
//! - `config`: `dashboard.toml` loading

pub mod config;
pub mod error;
pub mod forecast;
pub mod schedule;

pub use config::DashboardConfig;
pub use error::{DashboardError, DashboardResult};
pub use forecast::{ForecastClient, ForecastSummary, RainForecast};
pub use schedule::{ScheduleEntry, ScheduleList, ScheduleStore};
