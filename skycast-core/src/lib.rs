//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather fetch client
//! - Tolerant response-to-display formatting
//!
//! It is used by `skycast-cli`, but can also be reused by other front-ends.

pub mod config;
pub mod display;
pub mod fetch;
pub mod model;

pub use config::{API_KEY_ENV, Config};
pub use display::{WeatherDisplay, extract_reading};
pub use fetch::{FetchError, WeatherClient};
pub use model::{RawResponse, WeatherReading};
