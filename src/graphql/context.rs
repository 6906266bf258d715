use crate::components::{
    build_http_client, CalendarService, CalendarServiceClient, WeatherService, WeatherServiceClient,
};
use crate::config::Config;
use crate::error::GatewayResult;
use std::fmt;
use std::sync::Arc;

/// Upstream service handles shared by every resolver.
///
/// Built once at startup and handed to the schema as data. The handles are
/// immutable, so cloning the context only bumps reference counts.
#[derive(Clone)]
pub struct GatewayContext {
    pub calendar: Arc<dyn CalendarService>,
    pub weather: Arc<dyn WeatherService>,
}

impl GatewayContext {
    /// Create a context from arbitrary service implementations
    pub fn new(calendar: Arc<dyn CalendarService>, weather: Arc<dyn WeatherService>) -> Self {
        Self { calendar, weather }
    }

    /// Create a context backed by the HTTP clients described in the config
    pub fn from_config(config: &Config) -> GatewayResult<Self> {
        let client = build_http_client(config.upstream_timeout)?;

        let calendar = CalendarServiceClient::new(client.clone(), config.calendar_service_url.clone());
        let weather = WeatherServiceClient::new(client, config.weather_service_url.clone());

        Ok(Self::new(Arc::new(calendar), Arc::new(weather)))
    }
}

impl fmt::Debug for GatewayContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayContext").finish_non_exhaustive()
    }
}
