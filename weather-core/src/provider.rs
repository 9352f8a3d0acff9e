use crate::{Coordinates, FetchError, WeatherSummary, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Environment variable holding the OpenWeather API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Where a provider gets its API key from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeySource {
    /// Read the named environment variable on every request.
    Env(String),
    /// A key fixed when the provider was built.
    Fixed(String),
}

impl ApiKeySource {
    /// Current key, if any. Env-backed sources are re-read on each call.
    pub fn resolve(&self) -> Option<String> {
        match self {
            ApiKeySource::Env(var) => std::env::var(var).ok(),
            ApiKeySource::Fixed(key) => Some(key.clone()),
        }
    }
}

impl Default for ApiKeySource {
    fn default() -> Self {
        ApiKeySource::Env(API_KEY_ENV.to_string())
    }
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get_weather(&self, coordinates: &Coordinates) -> Result<WeatherSummary, FetchError>;
}

/// Current weather for `coordinates` using the default OpenWeather provider.
///
/// The API key comes from `OPENWEATHER_API_KEY`, read at call time.
pub async fn get_weather(coordinates: &Coordinates) -> Result<WeatherSummary, FetchError> {
    default_provider().get_weather(coordinates).await
}

fn default_provider() -> OpenWeatherProvider {
    OpenWeatherProvider::default()
}
