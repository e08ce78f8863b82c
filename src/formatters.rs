use crate::constants::{FORECAST_DAYS, PROVINCE, UNKNOWN_WEATHER};
use crate::locations::LocationEntry;
use crate::models::{
    CurrentConditions, CurrentData, DailyData, ForecastDay, OpenMeteoResponse, ReportLocation,
    WeatherReport,
};

/// Reshapes an Open-Meteo response into the public report for `location`.
///
/// Absent current values read as 0. Absent daily maxima and minima read as
/// `None`, and so does a daily value of exactly 0.0: the provider's zero and
/// a missing value are not told apart in the forecast.
pub fn build_report(location: &LocationEntry, response: OpenMeteoResponse) -> WeatherReport {
    let current = response.current.unwrap_or_default();
    let daily = response.daily.unwrap_or_default();

    WeatherReport {
        location: ReportLocation {
            province: PROVINCE,
            city: location.city,
        },
        current: format_current(&current),
        forecast: format_forecast(&daily),
    }
}

fn format_current(current: &CurrentData) -> CurrentConditions {
    let weather_code = current.weather_code.unwrap_or(0);

    CurrentConditions {
        temperature: round_to_tenth(current.temperature.unwrap_or(0.0)),
        feels_like: round_to_tenth(current.apparent_temperature.unwrap_or(0.0)),
        humidity: current.relative_humidity.unwrap_or(0.0).round() as i64,
        wind_speed: round_to_tenth(current.wind_speed.unwrap_or(0.0)),
        weather: weather_code_to_description(weather_code),
        weather_code,
    }
}

fn format_forecast(daily: &DailyData) -> Vec<ForecastDay> {
    daily
        .time()
        .iter()
        .take(FORECAST_DAYS)
        .enumerate()
        .map(|(i, date)| ForecastDay {
            date: date.clone(),
            weather: weather_code_to_description(daily.weather_code_at(i).unwrap_or(0)),
            max_temp: present_temperature(daily.temperature_max_at(i)),
            min_temp: present_temperature(daily.temperature_min_at(i)),
        })
        .collect()
}

fn present_temperature(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0).map(round_to_tenth)
}

/// Rounds to one decimal place, ties away from zero (`-2.25` becomes `-2.3`).
pub fn round_to_tenth(value: f64) -> f64 {
    // adding 0.0 turns -0.0 into 0.0
    (value * 10.0).round() / 10.0 + 0.0
}

/// Converts WMO weather code to its Chinese description
pub fn weather_code_to_description(code: i64) -> &'static str {
    match code {
        0 => "晴天",
        1 => "主要晴天",
        2 => "部分多云",
        3 => "阴天",
        45 => "雾",
        48 => "冻雾",
        51 | 61 => "小雨",
        53 | 63 => "中雨",
        55 | 65 => "大雨",
        56 | 66 => "冻雨",
        57 | 67 => "大冻雨",
        71 => "小雪",
        73 => "中雪",
        75 => "大雪",
        77 => "雪粒",
        80 => "阵雨",
        81 => "中阵雨",
        82 => "大阵雨",
        85 => "小阵雪",
        86 => "大阵雪",
        95 => "雷阵雨",
        96 => "雷阵雨伴冰雹",
        99 => "大雷阵雨伴冰雹",
        _ => UNKNOWN_WEATHER,
    }
}
