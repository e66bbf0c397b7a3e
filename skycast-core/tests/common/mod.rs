//! Shared fixtures for the integration suites: vendor-shaped payloads and a
//! client pointed at a mock server.

use serde_json::{Value, json};
use skycast_core::{ClientConfig, WeatherApi};
use wiremock::MockServer;

/// Client wired to the mock server instead of the production API root.
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
pub fn test_client(mock_server: &MockServer) -> WeatherApi {
    let config = ClientConfig {
        timeout_secs: 5,
        ..ClientConfig::new("test-key")
    }
    .with_base_url(mock_server.uri());
    WeatherApi::new(config).expect("failed to create client")
}

fn condition(code: i64, text: &str, icon: u16) -> Value {
    json!({
        "text": text,
        "icon": format!("//cdn.weatherapi.com/weather/64x64/day/{icon}.png"),
        "code": code,
    })
}

fn location() -> Value {
    json!({
        "name": "Austin",
        "region": "Texas",
        "country": "United States of America",
        "lat": 30.27,
        "lon": -97.74,
        "tz_id": "America/Chicago",
        "localtime_epoch": 1_700_000_000_i64,
        "localtime": "2023-11-14 16:13",
    })
}

fn current() -> Value {
    json!({
        "last_updated_epoch": 1_699_999_200_i64,
        "last_updated": "2023-11-14 16:00",
        "temp_c": 24.0,
        "temp_f": 75.2,
        "is_day": 1,
        "condition": condition(1003, "Partly cloudy", 116),
        "wind_mph": 6.9,
        "wind_kph": 11.2,
        "wind_degree": 180,
        "wind_dir": "S",
        "pressure_mb": 1015.0,
        "pressure_in": 29.97,
        "precip_mm": 0.0,
        "precip_in": 0.0,
        "humidity": 55,
        "cloud": 25,
        "feelslike_c": 25.1,
        "feelslike_f": 77.2,
        "vis_km": 16.0,
        "vis_miles": 9.0,
        "uv": 5.0,
        "gust_mph": 10.5,
        "gust_kph": 16.9,
    })
}

fn hour(epoch: i64, time: &str, temp_c: f64) -> Value {
    json!({
        "time_epoch": epoch,
        "time": time,
        "temp_c": temp_c,
        "temp_f": temp_c * 1.8 + 32.0,
        "is_day": 1,
        "condition": condition(1000, "Sunny", 113),
        "wind_mph": 5.6,
        "wind_kph": 9.0,
        "wind_degree": 170,
        "wind_dir": "S",
        "pressure_mb": 1014.0,
        "pressure_in": 29.94,
        "precip_mm": 0.0,
        "precip_in": 0.0,
        "humidity": 51,
        "cloud": 10,
        "feelslike_c": temp_c,
        "feelslike_f": temp_c * 1.8 + 32.0,
        "windchill_c": temp_c,
        "windchill_f": temp_c * 1.8 + 32.0,
        "heatindex_c": temp_c,
        "heatindex_f": temp_c * 1.8 + 32.0,
        "dewpoint_c": 12.3,
        "dewpoint_f": 54.1,
        "will_it_rain": 0,
        "chance_of_rain": 0,
        "will_it_snow": 0,
        "chance_of_snow": 0,
        "vis_km": 10.0,
        "vis_miles": 6.0,
        "gust_mph": 8.1,
        "gust_kph": 13.0,
        "uv": 6.0,
    })
}

fn forecast_day(date: &str, date_epoch: i64) -> Value {
    json!({
        "date": date,
        "date_epoch": date_epoch,
        "day": {
            "maxtemp_c": 27.0,
            "maxtemp_f": 80.6,
            "mintemp_c": 15.0,
            "mintemp_f": 59.0,
            "avgtemp_c": 21.0,
            "avgtemp_f": 69.8,
            "maxwind_mph": 12.5,
            "maxwind_kph": 20.2,
            "totalprecip_mm": 0.1,
            "totalprecip_in": 0.0,
            "avgvis_km": 10.0,
            "avgvis_miles": 6.0,
            "avghumidity": 60.0,
            "daily_will_it_rain": 0,
            "daily_chance_of_rain": 10,
            "daily_will_it_snow": 0,
            "daily_chance_of_snow": 0,
            "condition": condition(1003, "Partly cloudy", 116),
            "uv": 6.0,
        },
        "astro": {
            "sunrise": "06:59 AM",
            "sunset": "05:34 PM",
            "moonrise": "09:12 AM",
            "moonset": "07:28 PM",
            "moon_phase": "Waxing Crescent",
            "moon_illumination": "8",
        },
        "hour": [
            hour(date_epoch + 12 * 3600, &format!("{date} 12:00"), 24.1),
            hour(date_epoch + 13 * 3600, &format!("{date} 13:00"), 24.9),
        ],
    })
}

/// Payload shaped like `current.json` for Austin, Texas.
pub fn sample_current_response() -> Value {
    json!({
        "location": location(),
        "current": current(),
    })
}

/// Payload shaped like `forecast.json` with two days of two hours each.
pub fn sample_forecast_response() -> Value {
    json!({
        "location": location(),
        "current": current(),
        "forecast": {
            "forecastday": [
                forecast_day("2023-11-15", 1_700_006_400),
                forecast_day("2023-11-16", 1_700_092_800),
            ],
        },
    })
}

/// Payload shaped like `search.json` for the query "Austin TX".
pub fn sample_search_response() -> Value {
    json!([
        {
            "id": 2_651_552,
            "name": "Austin",
            "region": "Texas",
            "country": "United States of America",
            "lat": 30.27,
            "lon": -97.74,
            "url": "austin-texas-united-states-of-america",
        },
        {
            "id": 2_651_553,
            "name": "Austin",
            "region": "Minnesota",
            "country": "United States of America",
            "lat": 43.67,
            "lon": -92.97,
            "url": "austin-minnesota-united-states-of-america",
        },
    ])
}
