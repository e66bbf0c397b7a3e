//! Wire models for the vendor's JSON payloads.
//!
//! Field names mirror the wire verbatim, so none of the structs need serde
//! renames. Everything here is passive: values are produced by decoding and
//! never mutated. `SearchCompletion` additionally serializes because
//! consumers persist chosen locations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::condition::ConditionCode;

/// The place an observation or forecast applies to.
#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub name: String,
    pub region: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub tz_id: String,
    pub localtime_epoch: i64,
    pub localtime: String,
}

impl Location {
    /// The location's local timestamp as a UTC instant.
    #[must_use]
    pub fn localtime_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.localtime_epoch, 0)
    }
}

/// Condition summary attached to current and hourly observations.
///
/// `code` is fail-closed: payloads carrying a code outside the published
/// table do not decode.
#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub text: String,
    pub icon: String,
    pub code: ConditionCode,
}

/// A current-conditions observation.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub last_updated_epoch: i64,
    pub last_updated: String,
    pub temp_c: f64,
    pub temp_f: f64,
    /// Day/night flag as the vendor sends it: 1 for day, 0 for night.
    pub is_day: u8,
    pub condition: Condition,
    pub wind_mph: f64,
    pub wind_kph: f64,
    pub wind_degree: u16,
    pub wind_dir: String,
    pub pressure_mb: f64,
    pub pressure_in: f64,
    pub precip_mm: f64,
    pub precip_in: f64,
    pub humidity: u8,
    pub cloud: u8,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
    pub vis_km: f64,
    pub vis_miles: f64,
    pub uv: f64,
    pub gust_mph: f64,
    pub gust_kph: f64,
}

impl CurrentWeather {
    #[must_use]
    pub fn is_daytime(&self) -> bool {
        self.is_day != 0
    }

    /// Observation timestamp as a UTC instant.
    #[must_use]
    pub fn last_updated_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.last_updated_epoch, 0)
    }
}

/// Payload of `current.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherResponse {
    pub location: Location,
    pub current: CurrentWeather,
}

/// Payload of `forecast.json`: the current conditions plus day-by-day data.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub location: Location,
    pub current: CurrentWeather,
    pub forecast: Forecast,
}

/// The forecast days, in the order the vendor returns them.
#[derive(Debug, Clone, Deserialize)]
pub struct Forecast {
    pub forecastday: Vec<ForecastDay>,
}

/// One forecast day: the daily aggregate, astronomy and the hourly series.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    pub date_epoch: i64,
    pub day: Day,
    pub astro: Astro,
    pub hour: Vec<Hour>,
}

impl ForecastDay {
    /// Midnight of the forecast day as a UTC instant.
    #[must_use]
    pub fn date_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.date_epoch, 0)
    }
}

/// Daily aggregate values.
#[derive(Debug, Clone, Deserialize)]
pub struct Day {
    pub maxtemp_c: f64,
    pub maxtemp_f: f64,
    pub mintemp_c: f64,
    pub mintemp_f: f64,
    pub avgtemp_c: f64,
    pub avgtemp_f: f64,
    pub maxwind_mph: f64,
    pub maxwind_kph: f64,
    pub totalprecip_mm: f64,
    pub totalprecip_in: f64,
    pub avgvis_km: f64,
    pub avgvis_miles: f64,
    pub avghumidity: f64,
    pub daily_will_it_rain: u8,
    pub daily_chance_of_rain: u8,
    pub daily_will_it_snow: u8,
    pub daily_chance_of_snow: u8,
    pub condition: Condition,
    pub uv: f64,
}

/// Astronomy times, kept as the vendor's display strings.
#[derive(Debug, Clone, Deserialize)]
pub struct Astro {
    pub sunrise: String,
    pub sunset: String,
    pub moonrise: String,
    pub moonset: String,
    pub moon_phase: String,
    pub moon_illumination: String,
}

/// One hourly slot of a forecast day.
#[derive(Debug, Clone, Deserialize)]
pub struct Hour {
    pub time_epoch: i64,
    pub time: String,
    pub temp_c: f64,
    pub temp_f: f64,
    pub is_day: u8,
    pub condition: Condition,
    pub wind_mph: f64,
    pub wind_kph: f64,
    pub wind_degree: u16,
    pub wind_dir: String,
    pub pressure_mb: f64,
    pub pressure_in: f64,
    pub precip_mm: f64,
    pub precip_in: f64,
    pub humidity: u8,
    pub cloud: u8,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
    pub windchill_c: f64,
    pub windchill_f: f64,
    pub heatindex_c: f64,
    pub heatindex_f: f64,
    pub dewpoint_c: f64,
    pub dewpoint_f: f64,
    pub will_it_rain: u8,
    pub chance_of_rain: u8,
    pub will_it_snow: u8,
    pub chance_of_snow: u8,
    pub vis_km: f64,
    pub vis_miles: f64,
    pub gust_mph: f64,
    pub gust_kph: f64,
    pub uv: f64,
}

impl Hour {
    #[must_use]
    pub fn is_daytime(&self) -> bool {
        self.is_day != 0
    }

    /// Start of the hourly slot as a UTC instant.
    #[must_use]
    pub fn time_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time_epoch, 0)
    }
}

/// One match from `search.json`.
///
/// Serializes losslessly so consumers can persist chosen locations and feed
/// them back as coordinate queries later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCompletion {
    pub id: i64,
    pub name: String,
    pub region: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub url: String,
}

impl SearchCompletion {
    /// The completion's position as a `(lat, lon)` pair.
    #[must_use]
    pub fn coordinates(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}

/// Payload of `search.json`: matches in vendor order.
pub type SearchResults = Vec<SearchCompletion>;

/// The vendor's error envelope, `{"code": .., "message": ..}`.
///
/// Tried as a decode fallback when a body does not match the expected
/// payload type.
#[derive(Debug, Clone, Deserialize)]
pub struct VendorError {
    pub code: i32,
    pub message: String,
}
