mod client;
pub mod models;

pub use client::WeatherServiceClient;
pub use models::EventWeather;

use crate::error::GatewayResult;
use async_trait::async_trait;

/// Operations the gateway needs from the weather service
#[async_trait]
pub trait WeatherService: Send + Sync {
    /// Fetch the weather summary for an event. `Ok(None)` means the service has no summary yet.
    async fn fetch_event_weather(&self, event_id: &str) -> GatewayResult<Option<EventWeather>>;
}
