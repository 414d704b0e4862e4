//! Forecast client: one Open-Meteo request reshaped into a [`ForecastSummary`].

pub mod open_meteo;
pub mod summary;

use reqwest::Client;

use crate::config::ForecastConfig;
use crate::error::{DashboardError, DashboardResult};
use open_meteo::{CURRENT_FIELDS, ForecastResponse, HOURLY_FIELDS};

pub use summary::{ChartData, ForecastSummary, RainForecast};

/// Fetches the forecast for a fixed coordinate. No timeout, no retry, no
/// caching: every call goes to the provider.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: Client,
    config: ForecastConfig,
}

impl ForecastClient {
    pub fn new(config: ForecastConfig) -> DashboardResult<Self> {
        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { http, config })
    }

    /// Forecast summary, or `None` when the provider can't be reached or
    /// its reply can't be decoded. The cause is logged.
    pub async fn fetch_forecast(&self) -> Option<ForecastSummary> {
        match self.try_fetch().await {
            Ok(summary) => Some(summary),
            Err(e) => {
                tracing::warn!("Weather API error: {}", e);
                None
            }
        }
    }

    pub async fn try_fetch(&self) -> DashboardResult<ForecastSummary> {
        let latitude = self.config.latitude.to_string();
        let longitude = self.config.longitude.to_string();

        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("timezone", "auto"),
                ("current", CURRENT_FIELDS),
                ("hourly", HOURLY_FIELDS),
                ("forecast_days", "1"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DashboardError::UpstreamStatus(response.status().as_u16()));
        }

        let body: ForecastResponse = response.json().await?;
        tracing::debug!(hours = body.hourly.time.len(), "Fetched forecast");

        Ok(ForecastSummary::from_response(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ForecastClient {
        ForecastClient::new(ForecastConfig {
            base_url: format!("{}/v1/forecast", server.uri()),
            ..ForecastConfig::default()
        })
        .unwrap()
    }

    fn sample_body() -> serde_json::Value {
        serde_json::json!({
            "latitude": 47.6,
            "longitude": -122.3,
            "current": {
                "time": "2024-05-01T14:00",
                "temperature_2m": 16.1,
                "apparent_temperature": 14.6,
                "precipitation": 0.0,
                "weather_code": 2
            },
            "hourly": {
                "time": [
                    "2024-05-01T00:00",
                    "2024-05-01T01:00",
                    "2024-05-01T02:00",
                    "2024-05-01T03:00"
                ],
                "temperature_2m": [12.0, 11.5, 11.0, 10.8],
                "apparent_temperature": [15.2, 18.9, 12.1, 11.0],
                "precipitation_probability": [10, 20, 60, 30],
                "weather_code": [2, 2, 61, 3]
            }
        })
    }

    #[tokio::test]
    async fn test_fetch_sends_expected_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "47.6062"))
            .and(query_param("longitude", "-122.3321"))
            .and(query_param("timezone", "auto"))
            .and(query_param("forecast_days", "1"))
            .and(query_param("current", CURRENT_FIELDS))
            .and(query_param("hourly", HOURLY_FIELDS))
            .and(header("user-agent", "Mozilla/5.0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
            .expect(1)
            .mount(&server)
            .await;

        let summary = client_for(&server).fetch_forecast().await.unwrap();

        assert_eq!(summary.current_temp, 15);
        assert_eq!(summary.max_temp, 19);
        assert_eq!(summary.min_temp, 11);
        assert_eq!(summary.rain_forecast, RainForecast::RainSoon);
        assert_eq!(summary.chart_data.time, vec!["00:00", "01:00", "02:00", "03:00"]);
        assert_eq!(
            serde_json::to_value(&summary.chart_data.rain).unwrap(),
            serde_json::json!([10, 20, 60, 30])
        );
    }

    #[tokio::test]
    async fn test_server_error_is_unavailable() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(matches!(
            client.try_fetch().await,
            Err(DashboardError::UpstreamStatus(503))
        ));
        assert!(client.fetch_forecast().await.is_none());
    }

    #[tokio::test]
    async fn test_malformed_body_is_unavailable() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        assert!(client_for(&server).fetch_forecast().await.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_unavailable() {
        let client = ForecastClient::new(ForecastConfig {
            base_url: "http://127.0.0.1:9/v1/forecast".to_string(),
            ..ForecastConfig::default()
        })
        .unwrap();

        assert!(client.fetch_forecast().await.is_none());
    }

    #[tokio::test]
    async fn test_each_call_refetches() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(client.fetch_forecast().await.is_some());
        assert!(client.fetch_forecast().await.is_some());
    }
}
