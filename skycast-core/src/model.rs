use serde::{Deserialize, Serialize};

/// One parsed weather observation.
///
/// Fields are extracted independently from the API payload: a field the
/// payload lacks stays empty (`None` / empty string) instead of failing
/// the whole reading. String fields carry no backslash characters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub city: String,
    /// `None` when the payload has no country, or an empty one.
    pub country: Option<String>,
    pub temperature_c: Option<f64>,
    /// Extracted alongside the temperature but never rendered.
    pub feels_like_c: Option<f64>,
    pub condition: String,
    pub humidity_pct: Option<f64>,
    pub wind_speed_mps: Option<f64>,
}

/// Transport result of one weather request: the HTTP status and the text
/// handed to the display layer. On a non-200 status the body is a
/// human-readable failure message rather than API JSON.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}
