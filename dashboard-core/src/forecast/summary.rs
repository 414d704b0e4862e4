//! Simplified forecast payload served to the dashboard page.

use serde::Serialize;
use serde_json::Number;

use super::open_meteo::ForecastResponse;

/// Probability (percent) above which an hour counts as likely rain.
const RAIN_SOON_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RainForecast {
    #[serde(rename = "No Rain")]
    NoRain,
    #[serde(rename = "Raining")]
    Raining,
    #[serde(rename = "Rain Soon")]
    RainSoon,
}

/// Hourly series for the chart. The three vectors always have equal length.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartData {
    pub time: Vec<String>,
    pub temp: Vec<Number>,
    pub rain: Vec<Number>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSummary {
    pub current_temp: i64,
    pub max_temp: i64,
    pub min_temp: i64,
    pub rain_forecast: RainForecast,
    pub chart_data: ChartData,
}

impl ForecastSummary {
    pub fn from_response(response: &ForecastResponse) -> Self {
        let current = &response.current;
        let hourly = &response.hourly;

        let temps = || hourly.apparent_temperature.iter().filter_map(Number::as_f64);
        let max_temp = temps().reduce(f64::max).unwrap_or(0.0);
        let min_temp = temps().reduce(f64::min).unwrap_or(0.0);

        ForecastSummary {
            current_temp: round(current.apparent_temperature.unwrap_or(0.0)),
            max_temp: round(max_temp),
            min_temp: round(min_temp),
            rain_forecast: rain_forecast(
                current.precipitation.unwrap_or(0.0),
                &hourly.precipitation_probability,
            ),
            chart_data: chart_data(response),
        }
    }
}

/// Current precipitation wins; otherwise any hour in the whole returned
/// window above the threshold, past hours included.
pub fn rain_forecast(current_precipitation: f64, probabilities: &[Number]) -> RainForecast {
    if current_precipitation > 0.0 {
        RainForecast::Raining
    } else if probabilities
        .iter()
        .filter_map(Number::as_f64)
        .any(|p| p > RAIN_SOON_THRESHOLD)
    {
        RainForecast::RainSoon
    } else {
        RainForecast::NoRain
    }
}

/// Time-of-day part of an ISO 8601 timestamp (`2024-05-01T14:00` -> `14:00`).
pub fn time_of_day(timestamp: &str) -> &str {
    timestamp
        .split_once('T')
        .map(|(_, time)| time)
        .unwrap_or(timestamp)
}

fn chart_data(response: &ForecastResponse) -> ChartData {
    let hourly = &response.hourly;
    let len = hourly
        .time
        .len()
        .min(hourly.apparent_temperature.len())
        .min(hourly.precipitation_probability.len());

    ChartData {
        time: hourly.time[..len]
            .iter()
            .map(|t| time_of_day(t).to_string())
            .collect(),
        temp: hourly.apparent_temperature[..len].to_vec(),
        rain: hourly.precipitation_probability[..len].to_vec(),
    }
}

// Half-to-even, so 18.5 rounds to 18 and 19.5 to 20.
fn round(value: f64) -> i64 {
    value.round_ties_even() as i64
}
