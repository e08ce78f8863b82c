use anyhow::Result;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

use crate::config::ServiceConfig;
use crate::constants::{CURRENT_FIELDS, DAILY_FIELDS, FORECAST_DAYS, TIMEZONE, USER_AGENT};
use crate::error::WeatherError;
use crate::formatters::build_report;
use crate::locations::{self, LocationEntry};
use crate::models::{OpenMeteoResponse, WeatherReport};

/// Resolves locations and fetches their normalized weather reports
#[derive(Debug, Clone)]
pub struct WeatherService {
    client: Arc<Client>,
    api_base: String,
}

impl WeatherService {
    /// Creates a new WeatherService instance
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Builds the report for `location_id`.
    ///
    /// Unknown ids fail before any request is sent. The provider is called
    /// exactly once; there is no retry.
    pub async fn get_weather_report(&self, location_id: &str) -> Result<WeatherReport, WeatherError> {
        let location = locations::resolve(location_id)?;
        tracing::info!(location_id, city = location.city, "Fetching weather report");

        let forecast = self.fetch_forecast(&location).await?;
        Ok(build_report(&location, forecast))
    }

    /// Makes the Open-Meteo forecast request for a resolved location
    async fn fetch_forecast(&self, location: &LocationEntry) -> Result<OpenMeteoResponse, WeatherError> {
        let url = format!("{}/forecast", self.api_base);
        let query = [
            ("latitude", location.latitude.to_string()),
            ("longitude", location.longitude.to_string()),
            ("current", CURRENT_FIELDS.to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("timezone", TIMEZONE.to_string()),
            ("forecast_days", FORECAST_DAYS.to_string()),
        ];

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(WeatherError::ProviderUnreachable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::ProviderError(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(WeatherError::ProviderUnreachable)?;
        tracing::debug!(bytes = body.len(), "Received forecast response");

        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service_for(base_url: &str) -> WeatherService {
        WeatherService::new(&ServiceConfig {
            api_base: base_url.to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    fn forecast_body() -> serde_json::Value {
        serde_json::json!({
            "current": {
                "temperature_2m": 23.46,
                "relative_humidity_2m": 78,
                "apparent_temperature": 24.91,
                "weather_code": 2,
                "wind_speed_10m": 5.04
            },
            "daily": {
                "time": ["2024-06-01", "2024-06-02"],
                "weather_code": [2, 63],
                "temperature_2m_max": [29.96, 27.3],
                "temperature_2m_min": [21.2, 20.04]
            }
        })
    }

    #[tokio::test]
    async fn test_request_carries_location_and_fixed_parameters() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forecast"))
            .and(query_param("latitude", "29.705"))
            .and(query_param("longitude", "116.001"))
            .and(query_param("current", CURRENT_FIELDS))
            .and(query_param("daily", DAILY_FIELDS))
            .and(query_param("timezone", "Asia/Shanghai"))
            .and(query_param("forecast_days", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let report = service_for(&mock_server.uri())
            .get_weather_report("jiujiang")
            .await
            .unwrap();

        assert_eq!(report.location.city, "九江市");
        assert_eq!(report.current.temperature, 23.5);
        assert_eq!(report.current.weather, "部分多云");
        assert_eq!(report.forecast.len(), 2);
        assert_eq!(report.forecast[1].weather, "中雨");
        assert_eq!(report.forecast[1].min_temp, Some(20.0));
    }

    #[tokio::test]
    async fn test_unknown_location_sends_no_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
            .expect(0)
            .mount(&mock_server)
            .await;

        let err = service_for(&mock_server.uri())
            .get_weather_report("shanghai")
            .await
            .unwrap_err();

        assert!(matches!(err, WeatherError::LocationNotFound(_)));
    }

    #[tokio::test]
    async fn test_provider_status_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&mock_server)
            .await;

        let err = service_for(&mock_server.uri())
            .get_weather_report("nanchang")
            .await
            .unwrap_err();

        match err {
            WeatherError::ProviderError(status) => assert_eq!(status.as_u16(), 503),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_provider_unreachable() {
        // nothing listens on port 1
        let err = service_for("http://127.0.0.1:1")
            .get_weather_report("nanchang")
            .await
            .unwrap_err();

        assert!(matches!(err, WeatherError::ProviderUnreachable(_)));
    }

    #[tokio::test]
    async fn test_unparseable_body_is_malformed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let err = service_for(&mock_server.uri())
            .get_weather_report("nanchang")
            .await
            .unwrap_err();

        assert!(matches!(err, WeatherError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_empty_object_yields_zeroed_report() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&mock_server)
            .await;

        let report = service_for(&mock_server.uri())
            .get_weather_report("leping")
            .await
            .unwrap();

        assert_eq!(report.location.city, "乐平市");
        assert_eq!(report.current.temperature, 0.0);
        assert_eq!(report.current.weather_code, 0);
        assert!(report.forecast.is_empty());
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let base = format!("{}/", mock_server.uri());
        assert!(service_for(&base).get_weather_report("xihu").await.is_ok());
    }
}
