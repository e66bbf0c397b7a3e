//! Error taxonomy for issued requests and client construction.

use thiserror::Error;

/// Terminal classification of one issued request.
///
/// Every variant ends its request; the client never retries on its own.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The exchange never produced a usable response: connectivity, DNS,
    /// TLS or timeout trouble in the transport.
    #[error("transport failure")]
    Transport(#[source] reqwest::Error),

    /// Empty body together with a non-success status.
    #[error("unexpected status code {0}")]
    Status(u16),

    /// Success status with nothing to decode.
    #[error("response body was empty")]
    EmptyBody,

    /// The vendor rejected the request and said why.
    #[error("vendor error {code}: {message}")]
    Vendor { code: i32, message: String },

    /// The body matched neither the expected payload nor the vendor error
    /// envelope. Carries the expected-payload decode failure as its source.
    #[error("response did not match the expected format")]
    InvalidFormat(#[source] serde_json::Error),
}

/// Startup configuration problems. Unlike `ApiError` these are fatal: a
/// client cannot be built without a key or a working HTTP stack.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("WEATHER_API_KEY is not set; export it with your weatherapi.com key")]
    MissingApiKey,

    #[error("could not build the HTTP client")]
    HttpClient(#[source] reqwest::Error),
}
