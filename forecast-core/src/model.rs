use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// Canonical weather category a display client knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCode {
    Sunny,
    LightRain,
    LightSnow,
    LightSleet,
    PartlyCloudy,
    Fog,
    Cloudy,
    ThunderyShowers,
    Unknown,
}

impl WeatherCode {
    pub const fn description(&self) -> &'static str {
        match self {
            WeatherCode::Sunny => "Sunny",
            WeatherCode::LightRain => "Light rain",
            WeatherCode::LightSnow => "Light snow",
            WeatherCode::LightSleet => "Light sleet",
            WeatherCode::PartlyCloudy => "Partly cloudy",
            WeatherCode::Fog => "Fog",
            WeatherCode::Cloudy => "Cloudy",
            WeatherCode::ThunderyShowers => "Thundery showers",
            WeatherCode::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// One normalized observation or forecast slot.
///
/// Optional fields stay `None` when the provider omitted them; no value is
/// ever filled in with a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub time: DateTime<FixedOffset>,
    pub code: WeatherCode,
    pub desc: String,
    pub temp_c: Option<f64>,
    pub feels_like_c: Option<f64>,
    pub chance_of_rain_percent: Option<i32>,
    /// Precipitation rate in meters.
    pub precip_m: Option<f64>,
    pub visible_dist_m: Option<f64>,
    pub windspeed_kmph: Option<f64>,
    pub wind_gust_kmph: Option<f64>,
    /// Degrees in `[0, 360)`.
    pub winddir_degree: Option<u16>,
}

/// A calendar day and its slots in ascending time order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub date: NaiveDate,
    pub slots: Vec<Condition>,
}

impl Day {
    pub fn new(date: NaiveDate) -> Self {
        Self { date, slots: Vec::new() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub latitude: f64,
    pub longitude: f64,
}

/// Everything a display client needs for one location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherData {
    pub current: Condition,
    pub location: String,
    pub geo_location: Option<LatLon>,
    pub forecast: Vec<Day>,
}
