use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::{fmt::Debug, sync::Arc};
use tracing::{debug, instrument, warn};

use crate::{
    config::Config,
    error::ForecastError,
    merge::merge_today,
    model::{Day, LatLon, WeatherData},
    normalize::normalize_condition,
    partition::partition_days,
    raw::RawResponse,
    zone::Zone,
};

pub mod forecast_io;

pub use forecast_io::ForecastIoSource;

/// Retrieves one decoded provider response for a location string.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    async fn fetch(&self, location: &str) -> Result<RawResponse, ForecastError>;
}

/// Object-safe entry point used by binaries.
#[async_trait]
pub trait WeatherBackend: Send + Sync + Debug {
    async fn fetch(&self, location: &str, numdays: usize) -> Result<WeatherData, ForecastError>;
}

/// Fetches the long-range forecast and today's short-range series
/// concurrently and merges them into one day-bucketed result.
#[derive(Debug)]
pub struct ForecastBackend<S> {
    source: Arc<S>,
    zone: Zone,
}

impl<S: ForecastSource + 'static> ForecastBackend<S> {
    /// `zone` is used for every response that does not name its own.
    pub fn new(source: S, zone: Zone) -> Self {
        Self {
            source: Arc::new(source),
            zone,
        }
    }

    pub async fn fetch_merged(
        &self,
        location: &str,
        numdays: usize,
    ) -> Result<WeatherData, ForecastError> {
        self.fetch_merged_at(location, numdays, Utc::now()).await
    }

    /// Same as [`fetch_merged`](Self::fetch_merged) with an explicit "now"
    /// for the short-range request.
    #[instrument(skip(self), fields(zone = %self.zone))]
    pub async fn fetch_merged_at(
        &self,
        location: &str,
        numdays: usize,
        as_of: DateTime<Utc>,
    ) -> Result<WeatherData, ForecastError> {
        validate_location(location)?;

        let today = (numdays >= 1).then(|| {
            let source = Arc::clone(&self.source);
            let location = format!("{location},{}", as_of.timestamp());
            tokio::spawn(async move { source.fetch(&location).await })
        });

        let resp = match self.source.fetch(location).await {
            Ok(resp) => resp,
            Err(err) => {
                if let Some(handle) = &today {
                    handle.abort();
                }
                return Err(err);
            }
        };

        let today = match today {
            Some(handle) => Some(
                handle
                    .await
                    .map_err(|err| ForecastError::Task(err.to_string()))??,
            ),
            None => None,
        };

        // One zone for both series: the forecast's, else the short-range one's.
        let identifier = resp
            .timezone
            .as_deref()
            .or_else(|| today.as_ref().and_then(|t| t.timezone.as_deref()));
        let zone = self.zone.resolve(identifier);

        let mut data = assemble(location, &resp, numdays, zone)?;
        if let Some(today) = today {
            let history = history_days(&today, zone)?;
            merge_into_first_day(&mut data.forecast, history);
        }

        Ok(data)
    }
}

#[async_trait]
impl<S: ForecastSource + 'static> WeatherBackend for ForecastBackend<S> {
    async fn fetch(&self, location: &str, numdays: usize) -> Result<WeatherData, ForecastError> {
        self.fetch_merged(location, numdays).await
    }
}

/// Construct the forecast.io backend described by `config`.
pub fn backend_from_config(config: &Config) -> Result<Box<dyn WeatherBackend>, ForecastError> {
    let source = ForecastIoSource::from_config(config)?;
    let zone = config.zone()?;
    Ok(Box::new(ForecastBackend::new(source, zone)))
}

/// Accepts `lat,lon` pairs of optionally signed decimal degrees.
pub fn validate_location(location: &str) -> Result<(), ForecastError> {
    match location.split_once(',') {
        Some((lat, lon)) if is_decimal(lat) && is_decimal(lon) => Ok(()),
        _ => Err(ForecastError::InvalidLocation(location.to_string())),
    }
}

fn is_decimal(part: &str) -> bool {
    let unsigned = part.strip_prefix('-').unwrap_or(part);
    let (int, frac) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };

    int.bytes().all(|b| b.is_ascii_digit())
        && frac.is_none_or(|frac| !frac.is_empty() && frac.bytes().all(|b| b.is_ascii_digit()))
}

/// All days of the short-range series; it must yield at least one.
fn history_days(resp: &RawResponse, zone: Zone) -> Result<Vec<Day>, ForecastError> {
    let days = partition_days(&resp.hourly.data, usize::MAX, zone);
    if days.is_empty() {
        return Err(ForecastError::TodayUnavailable);
    }
    Ok(days)
}

fn assemble(
    location: &str,
    resp: &RawResponse,
    numdays: usize,
    zone: Zone,
) -> Result<WeatherData, ForecastError> {
    let (location, geo_location) = match (resp.latitude, resp.longitude) {
        (Some(latitude), Some(longitude)) => (
            format!("{latitude:.6}:{longitude:.6}"),
            Some(LatLon {
                latitude,
                longitude,
            }),
        ),
        _ => {
            warn!(location, "No latitude,longitude in response");
            (location.to_string(), None)
        }
    };

    Ok(WeatherData {
        current: normalize_condition(&resp.currently, zone)?,
        location,
        geo_location,
        forecast: partition_days(&resp.hourly.data, numdays, zone),
    })
}

/// Merge the history of bucket 0's date into bucket 0. Without a forecast
/// bucket the first history day takes its place.
fn merge_into_first_day(forecast: &mut Vec<Day>, history: Vec<Day>) {
    let Some(today) = forecast.first_mut() else {
        forecast.extend(history.into_iter().next());
        return;
    };

    match history.into_iter().find(|day| day.date == today.date) {
        Some(day) => {
            debug!(slots = day.slots.len(), "Merging today's history into forecast");
            let future = std::mem::take(&mut today.slots);
            today.slots = merge_today(day.slots, future);
        }
        None => warn!(date = %today.date, "Short-range series has no data for today"),
    }
}
