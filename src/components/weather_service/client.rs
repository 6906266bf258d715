use super::models::{EventWeather, EventWeatherResponse};
use super::WeatherService;
use crate::components::upstream::{decode_json, endpoint};
use crate::error::{weather_service_error, GatewayResult};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

/// HTTP client for the weather service
#[derive(Debug, Clone)]
pub struct WeatherServiceClient {
    client: Client,
    base_url: Url,
}

impl WeatherServiceClient {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl WeatherService for WeatherServiceClient {
    async fn fetch_event_weather(&self, event_id: &str) -> GatewayResult<Option<EventWeather>> {
        let url = endpoint(&self.base_url, &["event", event_id], weather_service_error)?;

        debug!(%url, "Fetching event weather");

        let response = self.client.get(url).send().await.map_err(|e| {
            weather_service_error(&format!("Failed to fetch weather for event {}: {}", event_id, e))
        })?;

        let body: EventWeatherResponse = decode_json(response, weather_service_error).await?;
        Ok(body.data.weather)
    }
}
