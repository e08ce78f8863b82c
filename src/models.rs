use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Open-Meteo API Models
// ============================================================================
//
// Every container and field is optional: a missing `current` or `daily`
// block reads as empty rather than failing the request.

#[derive(Debug, Default, Deserialize)]
pub struct OpenMeteoResponse {
    pub current: Option<CurrentData>,
    pub daily: Option<DailyData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CurrentData {
    #[serde(rename = "temperature_2m")]
    pub temperature: Option<f64>,
    #[serde(rename = "relative_humidity_2m")]
    pub relative_humidity: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub weather_code: Option<i64>,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: Option<f64>,
}

/// Parallel daily arrays, indexed by position in `time`
#[derive(Debug, Default, Deserialize)]
pub struct DailyData {
    pub time: Option<Vec<String>>,
    pub weather_code: Option<Vec<Option<i64>>>,
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Option<Vec<Option<f64>>>,
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: Option<Vec<Option<f64>>>,
}

impl DailyData {
    pub fn time(&self) -> &[String] {
        self.time.as_deref().unwrap_or_default()
    }

    pub fn weather_code_at(&self, index: usize) -> Option<i64> {
        value_at(&self.weather_code, index)
    }

    pub fn temperature_max_at(&self, index: usize) -> Option<f64> {
        value_at(&self.temperature_max, index)
    }

    pub fn temperature_min_at(&self, index: usize) -> Option<f64> {
        value_at(&self.temperature_min, index)
    }
}

fn value_at<T: Copy>(values: &Option<Vec<Option<T>>>, index: usize) -> Option<T> {
    values.as_ref()?.get(index).copied().flatten()
}

// ============================================================================
// Weather Report Models
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub location: ReportLocation,
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLocation {
    pub province: &'static str,
    pub city: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: i64,
    pub wind_speed: f64,
    pub weather: &'static str,
    pub weather_code: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDay {
    pub date: String,
    pub weather: &'static str,
    pub max_temp: Option<f64>,
    pub min_temp: Option<f64>,
}

/// Location listing served to front ends
#[derive(Debug, Clone, Serialize)]
pub struct LocationList {
    pub province: &'static str,
    pub locations: Vec<crate::locations::LocationEntry>,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetWeatherReportRequest {
    /// Location identifier such as "nanchang" or "jiujiang"
    pub location_id: String,
}
