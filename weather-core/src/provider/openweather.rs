use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    error::FetchError,
    http::fetch_json,
    model::{Coordinates, MainReadings, WeatherSummary},
};

use super::{ApiKeySource, WeatherProvider};

/// OpenWeather current-weather endpoint.
pub const CURRENT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    endpoint: String,
    key: ApiKeySource,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(key: ApiKeySource) -> Self {
        Self {
            endpoint: CURRENT_WEATHER_URL.to_string(),
            key,
            http: Client::new(),
        }
    }

    /// Point the provider at another endpoint (a proxy or a mock server).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn key_source(&self) -> &ApiKeySource {
        &self.key
    }

    /// Request URL for `coordinates`, resolving the API key now.
    ///
    /// An absent key is sent empty and left for the provider to reject.
    pub fn request_url(&self, coordinates: &Coordinates) -> Result<Url, FetchError> {
        let key = self.key.resolve().unwrap_or_default();
        build_request_url(&self.endpoint, coordinates, &key)
    }
}

impl Default for OpenWeatherProvider {
    fn default() -> Self {
        Self::new(ApiKeySource::default())
    }
}

/// `endpoint?lat=..&lon=..&units=metric&appid=..`
///
/// Coordinates are written with their shortest round-trip form and no range
/// checks. Accuracy is not part of the query.
pub fn build_request_url(
    endpoint: &str,
    coordinates: &Coordinates,
    api_key: &str,
) -> Result<Url, FetchError> {
    let lat = query_number(coordinates.latitude);
    let lon = query_number(coordinates.longitude);

    let url = Url::parse_with_params(
        endpoint,
        &[
            ("lat", lat.as_str()),
            ("lon", lon.as_str()),
            ("units", "metric"),
            ("appid", api_key),
        ],
    )?;

    Ok(url)
}

/// Shortest round-trip form, with `-0` folded into `0`.
fn query_number(value: f64) -> String {
    if value == 0.0 { "0".to_string() } else { value.to_string() }
}

/// Fields of the current-weather reply that the summary needs. The rest is ignored.
#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    id: u64,
    main: MainReadings,
}

impl From<OwCurrentResponse> for WeatherSummary {
    fn from(res: OwCurrentResponse) -> Self {
        WeatherSummary {
            title: res.name,
            data: res.main,
            id: res.id,
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip_all, fields(lat = coordinates.latitude, lon = coordinates.longitude))]
    async fn get_weather(&self, coordinates: &Coordinates) -> Result<WeatherSummary, FetchError> {
        let url = self.request_url(coordinates)?;
        debug!(endpoint = %self.endpoint, "requesting current weather");

        let parsed: OwCurrentResponse = fetch_json(&self.http, url.as_str()).await?;

        Ok(parsed.into())
    }
}
