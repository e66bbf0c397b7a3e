//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Wire models for the weatherapi.com v1 payloads, with a fail-closed
//!   condition-code catalog
//! - Pure request construction for the current/forecast/search endpoints
//! - The async client with its tiered response classification
//! - The observer contract outcomes are delivered through
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or
//! services.

pub mod client;
pub mod condition;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod request;

pub use client::{WeatherApi, WeatherProvider};
pub use condition::{ConditionCode, UnknownConditionCode};
pub use config::ClientConfig;
pub use dispatch::{Outcome, WeatherObserver};
pub use error::{ApiError, ConfigError};
pub use model::{
    Astro, Condition, CurrentWeather, Day, Forecast, ForecastDay, ForecastResponse, Hour, Location,
    SearchCompletion, SearchResults, VendorError, WeatherResponse,
};
pub use request::{EndpointKind, QuerySpec};
