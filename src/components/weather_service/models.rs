use serde::{Deserialize, Serialize};

/// Weather summary for an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventWeather {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub temp: String,
}

/// `{ "data": { "weather": {...} | null } }`
#[derive(Debug, Deserialize)]
pub(crate) struct EventWeatherResponse {
    pub data: EventWeatherData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EventWeatherData {
    #[serde(default)]
    pub weather: Option<EventWeather>,
}
