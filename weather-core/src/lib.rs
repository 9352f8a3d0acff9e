//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - A generic JSON fetch helper with a typed error
//! - The current-weather lookup by coordinates (OpenWeather)
//! - Shared domain models (coordinates, normalized summary)
//! - On-disk configuration for the API key
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod provider;

pub use config::Config;
pub use error::FetchError;
pub use http::fetch_json;
pub use model::{Coordinates, MainReadings, WeatherSummary};
pub use provider::{ApiKeySource, WeatherProvider, get_weather, openweather::OpenWeatherProvider};
