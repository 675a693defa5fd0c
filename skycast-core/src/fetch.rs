use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::model::RawResponse;

const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org";
const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Network-level failure: the request never produced an HTTP response.
///
/// Responses with non-200 statuses are not errors; see
/// [`WeatherClient::fetch_current`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,
    #[error("could not reach the weather service: {0}")]
    Connect(reqwest::Error),
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_connect() {
            FetchError::Connect(err)
        } else {
            FetchError::Transport(err)
        }
    }
}

/// Client for the OpenWeather current-weather endpoint.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherClient {
    /// Build a client against the public endpoint, with a 10-second
    /// request timeout so a stalled request cannot block forever.
    pub fn new(api_key: String) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            api_key,
            base_url: OPENWEATHER_BASE_URL.to_owned(),
            http,
        })
    }

    #[cfg(test)]
    fn with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            api_key: api_key.to_owned(),
            base_url: base_url.to_owned(),
            http: Client::new(),
        }
    }

    /// Fetch current weather for a city, in metric units.
    ///
    /// On HTTP 200 the returned body is the full response text. On any
    /// other status the body is the failure message
    /// `Failed to fetch weather data. HTTP code: {n}`; failure travels as
    /// data, and rendering passes it through because it is not
    /// `{`-prefixed. Only network-level failures (DNS, refused
    /// connections, timeouts) surface as [`FetchError`].
    pub async fn fetch_current(&self, city: &str) -> Result<RawResponse, FetchError> {
        let url = format!("{}{CURRENT_WEATHER_PATH}", self.base_url);
        tracing::debug!("requesting current weather for {city}");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = res.status();
        if status != StatusCode::OK {
            let error_body = res.text().await.unwrap_or_default();
            tracing::debug!("weather request rejected with {status}: {error_body}");
            return Ok(RawResponse {
                status: status.as_u16(),
                body: format!(
                    "Failed to fetch weather data. HTTP code: {}",
                    status.as_u16()
                ),
            });
        }

        let body = res.text().await?;
        Ok(RawResponse {
            status: status.as_u16(),
            body,
        })
    }
}
