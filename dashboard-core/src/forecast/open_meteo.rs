//! Wire types for the Open-Meteo forecast response.
//!
//! Only the fields the summary reads are decoded. Every field is defaulted so
//! a reply missing `current`, `hourly`, or a single series still decodes.

use serde::Deserialize;
use serde_json::Number;

pub const CURRENT_FIELDS: &str = "temperature_2m,apparent_temperature,precipitation,weather_code";
pub const HOURLY_FIELDS: &str =
    "temperature_2m,apparent_temperature,precipitation_probability,weather_code";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub current: CurrentConditions,
    #[serde(default)]
    pub hourly: HourlySeries,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentConditions {
    #[serde(default)]
    pub temperature_2m: Option<f64>,
    #[serde(default)]
    pub apparent_temperature: Option<f64>,
    /// Precipitation amount over the preceding interval, in mm.
    #[serde(default)]
    pub precipitation: Option<f64>,
    #[serde(default)]
    pub weather_code: Option<i32>,
}

/// Parallel hourly sequences; index `i` of every field is the same hour.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HourlySeries {
    /// ISO 8601 local times, e.g. `2024-05-01T14:00`.
    #[serde(default)]
    pub time: Vec<String>,
    /// Kept as the provider's numbers so they pass through unchanged.
    #[serde(default)]
    pub apparent_temperature: Vec<Number>,
    #[serde(default)]
    pub precipitation_probability: Vec<Number>,
}
