//! Provider payload as decoded from the forecast.io JSON response.
//!
//! Every field is optional: the provider omits whatever it does not know.

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSample {
    /// Unix epoch seconds.
    pub time: Option<f64>,
    pub summary: Option<String>,
    pub icon: Option<String>,
    pub sunrise_time: Option<f64>,
    pub sunset_time: Option<f64>,
    /// Millimeters per hour.
    pub precip_intensity: Option<f64>,
    /// Fraction in `[0, 1]`.
    pub precip_probability: Option<f64>,
    pub temperature: Option<f64>,
    pub temperature_min: Option<f64>,
    pub temperature_max: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_bearing: Option<f64>,
    /// Kilometers.
    pub visibility: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawBlock {
    pub summary: Option<String>,
    pub icon: Option<String>,
    #[serde(default)]
    pub data: Vec<RawSample>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawResponse {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
    #[serde(default)]
    pub currently: RawSample,
    #[serde(default)]
    pub hourly: RawBlock,
}
