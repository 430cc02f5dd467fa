use thiserror::Error;

/// Why a single raw sample could not become a [`Condition`](crate::Condition).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConditionError {
    #[error("the forecast.io response did not provide a time for the weather condition")]
    MissingTime,

    #[error("weather condition time {0} is out of range")]
    TimeOutOfRange(f64),
}

/// Request-level failures; any of these aborts a `fetch_merged` call.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error(
        "No forecast.io API key configured.\n\
         Hint: run `forecast configure` or pass `--api-key`."
    )]
    MissingApiKey,

    #[error(
        "forecast.io only supports latitude,longitude pairs as location; \
         try `40.748,-73.985` instead of `{0}` to get weather for New York"
    )]
    InvalidLocation(String),

    #[error("Unknown timezone '{0}'")]
    InvalidTimezone(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Failed to send request to forecast.io ({location}): {message}")]
    Request { location: String, message: String },

    #[error("forecast.io request ({location}) failed with status {status}: {body}")]
    Status {
        location: String,
        status: u16,
        body: String,
    },

    #[error("Failed to parse forecast.io JSON ({location}): {message}")]
    Decode { location: String, message: String },

    #[error("Could not parse current weather condition: {0}")]
    Condition(#[from] ConditionError),

    #[error("Failed to parse today's weather data: no hourly conditions for today")]
    TodayUnavailable,

    #[error("Background fetch of today's weather data did not complete: {0}")]
    Task(String),
}
