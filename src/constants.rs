/// User agent string for HTTP requests
pub const USER_AGENT: &str = "jiangxi-weather/0.1.0";

/// Open-Meteo API base URL
pub const OPEN_METEO_API_BASE: &str = "https://api.open-meteo.com/v1";

/// Current-conditions variables requested from Open-Meteo
pub const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,apparent_temperature,weather_code,wind_speed_10m";

/// Daily variables requested from Open-Meteo
pub const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min";

/// Timezone used for the daily buckets
pub const TIMEZONE: &str = "Asia/Shanghai";

/// Number of forecast days requested and returned
pub const FORECAST_DAYS: usize = 5;

/// Province label attached to every report
pub const PROVINCE: &str = "江西省";

/// Location served when the caller does not name one
pub const DEFAULT_LOCATION_ID: &str = "nanchang";

/// Description for weather codes missing from the code table
pub const UNKNOWN_WEATHER: &str = "未知";

/// Body message of every failed weather request
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch weather data";

/// Content type of every JSON response
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
