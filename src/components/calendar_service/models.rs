use crate::utils::time::serialize_iso;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Calendar event as returned by the calendar service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

/// Payload sent to the calendar service when creating an event
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub location: Option<String>,
    #[serde(serialize_with = "serialize_iso")]
    pub starts_at: DateTime<Utc>,
    #[serde(serialize_with = "serialize_iso")]
    pub ends_at: DateTime<Utc>,
}

/// Body of the calendar service root endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarServiceDiagnostics {
    #[serde(default)]
    pub version: Option<String>,
}

/// `{ "data": { "events": [...] } }`
#[derive(Debug, Deserialize)]
pub(crate) struct EventListResponse {
    pub data: EventListData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EventListData {
    pub events: Vec<CalendarEvent>,
}

/// `{ "data": { "event": {...} } }`
#[derive(Debug, Deserialize)]
pub(crate) struct EventResponse {
    pub data: EventData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EventData {
    pub event: CalendarEvent,
}
