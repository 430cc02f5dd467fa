use crate::{
    error::ConditionError,
    model::{Condition, WeatherCode},
    raw::RawSample,
    zone::Zone,
};

/// forecast.io icon names and the code each one maps to.
const ICON_CODES: &[(&str, WeatherCode)] = &[
    ("clear-day", WeatherCode::Sunny),
    ("clear-night", WeatherCode::Sunny),
    ("rain", WeatherCode::LightRain),
    ("snow", WeatherCode::LightSnow),
    ("sleet", WeatherCode::LightSleet),
    ("wind", WeatherCode::PartlyCloudy),
    ("fog", WeatherCode::Fog),
    ("cloudy", WeatherCode::Cloudy),
    ("partly-cloudy-day", WeatherCode::PartlyCloudy),
    ("partly-cloudy-night", WeatherCode::PartlyCloudy),
    ("thunderstorm", WeatherCode::ThunderyShowers),
];

/// Look up a provider icon; anything unmapped is [`WeatherCode::Unknown`].
pub fn classify(icon: Option<&str>) -> WeatherCode {
    icon.and_then(|icon| {
        ICON_CODES
            .iter()
            .find(|(name, _)| *name == icon)
            .map(|(_, code)| *code)
    })
    .unwrap_or(WeatherCode::Unknown)
}

/// Turn one raw sample into a canonical condition in `zone`.
///
/// Only the timestamp is mandatory. Rates, distances and wind values are
/// dropped when the provider reports them negative.
pub fn normalize_condition(sample: &RawSample, zone: Zone) -> Result<Condition, ConditionError> {
    let raw_time = sample.time.ok_or(ConditionError::MissingTime)?;
    if !raw_time.is_finite() {
        return Err(ConditionError::TimeOutOfRange(raw_time));
    }
    let time = zone
        .localize(raw_time as i64)
        .ok_or(ConditionError::TimeOutOfRange(raw_time))?;

    Ok(Condition {
        time,
        code: classify(sample.icon.as_deref()),
        desc: sample.summary.clone().unwrap_or_default(),
        temp_c: sample.temperature,
        feels_like_c: sample.apparent_temperature,
        chance_of_rain_percent: sample.precip_probability.map(|p| (p * 100.0).round() as i32),
        precip_m: non_negative(sample.precip_intensity).map(|mm| mm / 1000.0),
        visible_dist_m: non_negative(sample.visibility).map(|km| km * 1000.0),
        windspeed_kmph: non_negative(sample.wind_speed),
        // not provided by forecast.io
        wind_gust_kmph: None,
        winddir_degree: non_negative(sample.wind_bearing)
            .map(|deg| (deg.trunc() as i64).rem_euclid(360) as u16),
    })
}

fn non_negative(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v >= 0.0)
}
