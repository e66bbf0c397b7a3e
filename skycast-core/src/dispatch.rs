//! Consumer contract and outcome delivery.
//!
//! Results are routed to a single registered observer. Registration is a
//! one-slot, last-write-wins affair: whoever is registered when a request
//! completes hears about it, regardless of who was registered when it was
//! issued. Delivery happens on one spawned task that drains an outcome
//! channel, so observer calls never run concurrently with each other.

use std::fmt::Debug;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, warn};

use crate::{
    client::{WeatherApi, WeatherProvider},
    error::ApiError,
    model::{ForecastResponse, SearchResults, WeatherResponse},
    request::{EndpointKind, QuerySpec},
};

/// Consumer of request outcomes.
///
/// Exactly one of these methods fires per issued request, exactly once, on
/// the client's delivery task.
pub trait WeatherObserver: Send + Sync + Debug {
    fn on_weather(&self, response: WeatherResponse);
    fn on_forecast(&self, response: ForecastResponse);
    fn on_search_results(&self, results: SearchResults);
    fn on_error(&self, error: ApiError);
}

/// What one issued request produced.
#[derive(Debug)]
pub enum Outcome {
    Weather(WeatherResponse),
    Forecast(ForecastResponse),
    Search(SearchResults),
    Failed(ApiError),
}

pub(crate) type ObserverSlot = Arc<Mutex<Option<Arc<dyn WeatherObserver>>>>;

/// Spawn the delivery task and hand back the sending side of its channel.
pub(crate) fn spawn_delivery(slot: ObserverSlot) -> UnboundedSender<Outcome> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        while let Some(outcome) = rx.recv().await {
            deliver(&slot, outcome);
        }
    });
    tx
}

/// Hand one outcome to whoever is registered right now.
fn deliver(slot: &ObserverSlot, outcome: Outcome) {
    let observer = slot.lock().clone();
    let Some(observer) = observer else {
        debug!("no observer registered; outcome dropped");
        return;
    };
    match outcome {
        Outcome::Weather(response) => observer.on_weather(response),
        Outcome::Forecast(response) => observer.on_forecast(response),
        Outcome::Search(results) => observer.on_search_results(results),
        Outcome::Failed(error) => observer.on_error(error),
    }
}

impl WeatherApi {
    /// Register the consumer that future outcomes go to.
    ///
    /// The slot holds one observer; registering replaces any previous one.
    /// An in-flight request delivers to whoever is registered when it
    /// completes.
    pub fn register_observer(&self, observer: Arc<dyn WeatherObserver>) {
        *self.observer.lock() = Some(observer);
    }

    /// Drop the registered consumer. Later outcomes are discarded.
    pub fn clear_observer(&self) {
        *self.observer.lock() = None;
    }

    fn send_outcome(&self, outcome: Outcome) {
        if self.outcomes.send(outcome).is_err() {
            warn!("delivery task is gone; outcome dropped");
        }
    }

    /// Fetch current conditions for a query, delivering the outcome to the
    /// registered observer. Fire-and-forget: one request, one delivery.
    pub fn current_weather(&self, query: QuerySpec) {
        let client = self.clone();
        tokio::spawn(async move {
            let outcome = match client.fetch_current_weather(&query).await {
                Ok(response) => Outcome::Weather(response),
                Err(error) => Outcome::Failed(error),
            };
            client.send_outcome(outcome);
        });
    }

    /// Fetch a forecast for a query, delivering the outcome to the
    /// registered observer.
    pub fn forecast(&self, query: QuerySpec, days: u32) {
        let client = self.clone();
        tokio::spawn(async move {
            let outcome = match client.fetch_forecast(&query, days).await {
                Ok(response) => Outcome::Forecast(response),
                Err(error) => Outcome::Failed(error),
            };
            client.send_outcome(outcome);
        });
    }

    /// Search locations by free text, delivering the outcome to the
    /// registered observer. The text goes out as typed.
    pub fn search(&self, query: impl Into<String>) {
        let client = self.clone();
        let query = query.into();
        tokio::spawn(async move {
            let outcome = match client.fetch_search(&query).await {
                Ok(results) => Outcome::Search(results),
                Err(error) => Outcome::Failed(error),
            };
            client.send_outcome(outcome);
        });
    }

    pub fn current_weather_for_zip(&self, zip: impl Into<String>) {
        self.current_weather(QuerySpec::zip(zip));
    }

    pub fn current_weather_for_city_state(
        &self,
        city: impl Into<String>,
        state: impl Into<String>,
    ) {
        self.current_weather(QuerySpec::city_state(city, state));
    }

    pub fn current_weather_at(&self, lat: f64, lon: f64) {
        self.current_weather(QuerySpec::coordinates(lat, lon));
    }

    /// One-day forecast for a postal code.
    pub fn forecast_for_zip(&self, zip: impl Into<String>) {
        self.forecast(QuerySpec::zip(zip), EndpointKind::DEFAULT_FORECAST_DAYS);
    }

    /// One-day forecast for a city and state.
    pub fn forecast_for_city_state(&self, city: impl Into<String>, state: impl Into<String>) {
        self.forecast(
            QuerySpec::city_state(city, state),
            EndpointKind::DEFAULT_FORECAST_DAYS,
        );
    }

    /// One-day forecast for a geographic point.
    pub fn forecast_at(&self, lat: f64, lon: f64) {
        self.forecast(
            QuerySpec::coordinates(lat, lon),
            EndpointKind::DEFAULT_FORECAST_DAYS,
        );
    }
}
