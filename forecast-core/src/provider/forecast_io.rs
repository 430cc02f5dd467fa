use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::{
    config::{Config, DEFAULT_BASE_URL},
    error::ForecastError,
    raw::RawResponse,
};

use super::ForecastSource;

/// HTTP client for the forecast.io forecast endpoint.
#[derive(Debug, Clone)]
pub struct ForecastIoSource {
    api_key: String,
    lang: String,
    base_url: String,
    http: Client,
}

impl ForecastIoSource {
    pub fn new(api_key: String, lang: String) -> Result<Self, ForecastError> {
        Self::build(api_key, lang, DEFAULT_BASE_URL.to_string(), None)
    }

    pub fn from_config(config: &Config) -> Result<Self, ForecastError> {
        Self::build(
            config.api_key()?.to_owned(),
            config.lang.clone(),
            config.base_url.clone(),
            config.timeout(),
        )
    }

    fn build(
        api_key: String,
        lang: String,
        base_url: String,
        timeout: Option<Duration>,
    ) -> Result<Self, ForecastError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ForecastError::Client(e.to_string()))?;

        Ok(Self {
            api_key,
            lang,
            base_url,
            http,
        })
    }

    fn endpoint(&self, location: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.api_key,
            location
        )
    }
}

#[async_trait]
impl ForecastSource for ForecastIoSource {
    #[instrument(skip(self))]
    async fn fetch(&self, location: &str) -> Result<RawResponse, ForecastError> {
        let request_error = |e: reqwest::Error| ForecastError::Request {
            location: location.to_string(),
            message: e.without_url().to_string(),
        };

        let res = self
            .http
            .get(self.endpoint(location))
            .query(&[
                ("units", "ca"),
                ("lang", self.lang.as_str()),
                ("exclude", "minutely,daily,alerts,flags"),
                ("extend", "hourly"),
            ])
            .send()
            .await
            .map_err(request_error)?;

        let status = res.status();
        let body = res.text().await.map_err(request_error)?;
        debug!(status = status.as_u16(), body = %body, "forecast.io response");

        if !status.is_success() {
            return Err(ForecastError::Status {
                location: location.to_string(),
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| ForecastError::Decode {
            location: location.to_string(),
            message: e.to_string(),
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body.to_string(),
    }
}
