// Upstream services the gateway composes
pub mod calendar_service;
pub mod upstream;
pub mod weather_service;

pub use calendar_service::{CalendarService, CalendarServiceClient};
pub use upstream::build_http_client;
pub use weather_service::{WeatherService, WeatherServiceClient};
