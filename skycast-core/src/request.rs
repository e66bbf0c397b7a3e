//! Request construction for the vendor's three endpoints.
//!
//! Pure string assembly: no I/O, no validation, no failure path. The client
//! hands the finished URL to the transport, which is where parsing and any
//! residual percent-encoding happen.

use crate::model::SearchCompletion;

/// The shape of the `q` parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum QuerySpec {
    /// Postal code, passed through verbatim.
    Zip(String),
    /// City plus state or territory.
    CityState { city: String, state: String },
    /// Geographic point, rendered as `lat,lon`.
    Coordinates { lat: f64, lon: f64 },
}

impl QuerySpec {
    pub fn zip(zip: impl Into<String>) -> Self {
        Self::Zip(zip.into())
    }

    pub fn city_state(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self::CityState {
            city: city.into(),
            state: state.into(),
        }
    }

    #[must_use]
    pub const fn coordinates(lat: f64, lon: f64) -> Self {
        Self::Coordinates { lat, lon }
    }

    /// Render the value of the `q` parameter.
    ///
    /// The city/state join is the literal three-byte token `%20` inserted
    /// between the parts, not the output of a URL encoder; the vendor reads
    /// it as an encoded space. Coordinates use the default `f64` formatting.
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Self::Zip(zip) => zip.clone(),
            Self::CityState { city, state } => format!("{city}%20{state}"),
            Self::Coordinates { lat, lon } => format!("{lat},{lon}"),
        }
    }
}

impl From<&SearchCompletion> for QuerySpec {
    fn from(completion: &SearchCompletion) -> Self {
        Self::Coordinates {
            lat: completion.lat,
            lon: completion.lon,
        }
    }
}

/// The vendor endpoint a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    Current,
    Forecast { days: u32 },
    Search,
}

impl EndpointKind {
    /// Day count used when a forecast caller does not ask for one.
    pub const DEFAULT_FORECAST_DAYS: u32 = 1;

    /// A forecast endpoint with the default day count.
    #[must_use]
    pub const fn forecast() -> Self {
        Self::Forecast {
            days: Self::DEFAULT_FORECAST_DAYS,
        }
    }

    /// Resource name under the API root.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Current => "current.json",
            Self::Forecast { .. } => "forecast.json",
            Self::Search => "search.json",
        }
    }
}

/// Assemble the full request URL for a structured query.
#[must_use]
pub fn build_url(
    base_url: &str,
    endpoint: EndpointKind,
    query: &QuerySpec,
    api_key: &str,
) -> String {
    build_url_raw(base_url, endpoint, &query.encode(), api_key)
}

/// Assemble the full request URL for an already-rendered `q` value.
///
/// Free-text search goes through here with the user's text untouched.
#[must_use]
pub fn build_url_raw(base_url: &str, endpoint: EndpointKind, q: &str, api_key: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let mut url = format!("{base}/{}?key={api_key}&q={q}", endpoint.path());
    if let EndpointKind::Forecast { days } = endpoint {
        url.push_str(&format!("&days={days}&aqi=no&alerts=no"));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.weatherapi.com/v1";

    #[test]
    fn zip_is_passed_through_verbatim() {
        let url = build_url(BASE, EndpointKind::Current, &QuerySpec::zip("78745"), "k1");
        assert_eq!(
            url,
            "https://api.weatherapi.com/v1/current.json?key=k1&q=78745"
        );
    }

    #[test]
    fn city_state_join_is_a_literal_percent20() {
        let query = QuerySpec::city_state("Austin", "TX");
        assert_eq!(query.encode(), "Austin%20TX");

        let url = build_url(BASE, EndpointKind::Current, &query, "k1");
        assert!(url.contains("q=Austin%20TX"), "got {url}");
    }

    #[test]
    fn coordinates_use_default_float_formatting() {
        let query = QuerySpec::coordinates(30.267153, -97.743057);
        assert_eq!(query.encode(), "30.267153,-97.743057");

        // Whole values lose the trailing ".0", like any f64 Display.
        assert_eq!(QuerySpec::coordinates(30.0, -97.5).encode(), "30,-97.5");
    }

    #[test]
    fn forecast_url_carries_days_and_suppression_flags() {
        let url = build_url(
            BASE,
            EndpointKind::Forecast { days: 3 },
            &QuerySpec::zip("78745"),
            "k1",
        );
        assert_eq!(
            url,
            "https://api.weatherapi.com/v1/forecast.json?key=k1&q=78745&days=3&aqi=no&alerts=no"
        );
    }

    #[test]
    fn forecast_defaults_to_one_day() {
        let url = build_url(BASE, EndpointKind::forecast(), &QuerySpec::zip("78745"), "k1");
        assert!(url.contains("&days=1&"), "got {url}");
    }

    #[test]
    fn search_text_is_not_pre_encoded() {
        let url = build_url_raw(BASE, EndpointKind::Search, "Austin TX", "k1");
        assert_eq!(
            url,
            "https://api.weatherapi.com/v1/search.json?key=k1&q=Austin TX"
        );
    }

    #[test]
    fn trailing_slash_on_base_url_is_tolerated() {
        let url = build_url(
            "http://127.0.0.1:9999/v1/",
            EndpointKind::Current,
            &QuerySpec::zip("78745"),
            "k1",
        );
        assert_eq!(url, "http://127.0.0.1:9999/v1/current.json?key=k1&q=78745");
    }

    #[test]
    fn completion_converts_to_coordinate_query() {
        let completion = SearchCompletion {
            id: 1,
            name: "Austin".to_string(),
            region: "Texas".to_string(),
            country: "United States of America".to_string(),
            lat: 30.27,
            lon: -97.74,
            url: "austin".to_string(),
        };
        assert_eq!(
            QuerySpec::from(&completion),
            QuerySpec::Coordinates {
                lat: 30.27,
                lon: -97.74
            }
        );
    }
}
