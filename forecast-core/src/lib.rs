//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Decoded forecast.io payloads and their normalization into canonical conditions
//! - Partitioning of hourly conditions into calendar days
//! - The concurrent two-request fetch that merges today's history into the forecast
//! - Configuration & credentials handling
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod merge;
pub mod model;
pub mod normalize;
pub mod partition;
pub mod provider;
pub mod raw;
pub mod zone;

pub use config::Config;
pub use error::{ConditionError, ForecastError};
pub use merge::merge_today;
pub use model::{Condition, Day, LatLon, WeatherCode, WeatherData};
pub use normalize::{classify, normalize_condition};
pub use partition::partition_days;
pub use provider::{
    ForecastBackend, ForecastIoSource, ForecastSource, WeatherBackend, backend_from_config,
    validate_location,
};
pub use raw::{RawBlock, RawResponse, RawSample};
pub use zone::Zone;
