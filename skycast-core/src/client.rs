//! HTTP transport and the tiered response decode.
//!
//! One internal routine issues every request and classifies what comes back,
//! in a fixed order: transport failures first, then the empty-body cases by
//! status, then the expected payload, then the vendor error envelope. A
//! non-success status with a well-formed payload body still counts as data;
//! the envelope is never tried before the expected type.

use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::{
    config::ClientConfig,
    dispatch::{self, ObserverSlot, Outcome},
    error::{ApiError, ConfigError},
    model::{ForecastResponse, SearchResults, VendorError, WeatherResponse},
    request::{self, EndpointKind, QuerySpec},
};

/// Async source of vendor payloads.
///
/// `WeatherApi` is the shipped implementation; consumers that want a stub
/// source in tests implement this instead.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_current_weather(&self, query: &QuerySpec) -> Result<WeatherResponse, ApiError>;

    async fn fetch_forecast(
        &self,
        query: &QuerySpec,
        days: u32,
    ) -> Result<ForecastResponse, ApiError>;

    async fn fetch_search(&self, query: &str) -> Result<SearchResults, ApiError>;
}

/// Client for the weatherapi.com v1 API.
///
/// Cheap to clone; clones share the HTTP pool, the observer registration and
/// the delivery task. Construct one per configuration and pass it around;
/// there is no global instance.
#[derive(Debug, Clone)]
pub struct WeatherApi {
    http: Client,
    config: ClientConfig,
    pub(crate) observer: ObserverSlot,
    pub(crate) outcomes: tokio::sync::mpsc::UnboundedSender<Outcome>,
}

impl WeatherApi {
    /// Build a client from explicit configuration.
    ///
    /// Spawns the outcome-delivery task, so this must be called inside a
    /// Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::HttpClient` when the HTTP client cannot be
    /// constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ConfigError::HttpClient)?;

        let observer: ObserverSlot = Arc::new(Mutex::new(None));
        let outcomes = dispatch::spawn_delivery(Arc::clone(&observer));

        Ok(Self {
            http,
            config,
            observer,
            outcomes,
        })
    }

    /// Build a client with the key taken from `WEATHER_API_KEY`.
    ///
    /// # Errors
    ///
    /// Fails when the variable is unset or the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(ClientConfig::from_env()?)
    }

    fn url_for(&self, endpoint: EndpointKind, query: &QuerySpec) -> String {
        request::build_url(&self.config.base_url, endpoint, query, &self.config.api_key)
    }

    /// Issue one GET and classify the exchange.
    async fn issue<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        let res = self.http.get(&url).send().await.map_err(ApiError::Transport)?;
        let status = res.status();
        let body = res.bytes().await.map_err(ApiError::Transport)?;

        if body.is_empty() {
            return Err(if status.is_success() {
                ApiError::EmptyBody
            } else {
                ApiError::Status(status.as_u16())
            });
        }

        decode_body(&body)
    }
}

#[async_trait]
impl WeatherProvider for WeatherApi {
    #[instrument(skip(self))]
    async fn fetch_current_weather(&self, query: &QuerySpec) -> Result<WeatherResponse, ApiError> {
        debug!("fetching current conditions");
        self.issue(self.url_for(EndpointKind::Current, query)).await
    }

    #[instrument(skip(self))]
    async fn fetch_forecast(
        &self,
        query: &QuerySpec,
        days: u32,
    ) -> Result<ForecastResponse, ApiError> {
        debug!("fetching forecast");
        self.issue(self.url_for(EndpointKind::Forecast { days }, query))
            .await
    }

    #[instrument(skip(self))]
    async fn fetch_search(&self, query: &str) -> Result<SearchResults, ApiError> {
        debug!("searching locations");
        let url = request::build_url_raw(
            &self.config.base_url,
            EndpointKind::Search,
            query,
            &self.config.api_key,
        );
        self.issue(url).await
    }
}

/// Tiered decode of a non-empty body.
///
/// The expected payload is always attempted first; only when it fails is the
/// body read as the vendor's `{code, message}` envelope. When neither fits,
/// the expected-payload failure is the one reported.
fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    match serde_json::from_slice::<T>(body) {
        Ok(value) => Ok(value),
        Err(expected_err) => match serde_json::from_slice::<VendorError>(body) {
            Ok(envelope) => Err(ApiError::Vendor {
                code: envelope.code,
                message: envelope.message,
            }),
            Err(_) => {
                debug!(body = %truncate_body(body), "response body matched no known format");
                Err(ApiError::InvalidFormat(expected_err))
            }
        },
    }
}

fn truncate_body(body: &[u8]) -> String {
    const MAX: usize = 200;
    let text = String::from_utf8_lossy(body);
    if text.chars().count() > MAX {
        let cut: String = text.chars().take(MAX).collect();
        format!("{cut}...")
    } else {
        text.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_prefers_the_expected_payload() {
        let body = br#"[{"id":1,"name":"Austin","region":"Texas","country":"United States of America","lat":30.27,"lon":-97.74,"url":"austin"}]"#;
        let results: SearchResults = decode_body(body).expect("expected payload decodes");
        assert_eq!(results[0].name, "Austin");
    }

    #[test]
    fn decode_expected_wins_even_when_the_envelope_would_match() {
        // serde_json::Value accepts anything, including an envelope-shaped
        // body; the expected type must still be tried first.
        let body = br#"{"code":2006,"message":"API key is invalid."}"#;
        let value: serde_json::Value = decode_body(body).expect("expected type tried first");
        assert_eq!(value["code"], 2006);
    }

    #[test]
    fn decode_falls_back_to_the_vendor_envelope() {
        let body = br#"{"code":2006,"message":"API key is invalid."}"#;
        let err = decode_body::<SearchResults>(body).unwrap_err();
        match err {
            ApiError::Vendor { code, message } => {
                assert_eq!(code, 2006);
                assert_eq!(message, "API key is invalid.");
            }
            other => panic!("expected Vendor, got {other:?}"),
        }
    }

    #[test]
    fn decode_reports_the_original_failure_when_nothing_matches() {
        let body = b"<html>502 Bad Gateway</html>";
        let err = decode_body::<WeatherResponse>(body).unwrap_err();
        assert!(matches!(err, ApiError::InvalidFormat(_)));
    }

    #[test]
    fn truncate_keeps_short_bodies_and_cuts_long_ones() {
        assert_eq!(truncate_body(b"short"), "short");
        let long = "x".repeat(300);
        let cut = truncate_body(long.as_bytes());
        assert_eq!(cut.chars().count(), 203);
        assert!(cut.ends_with("..."));
    }
}
