#![allow(dead_code)]

use async_trait::async_trait;
use calendar_gateway::components::calendar_service::{
    CalendarEvent, CalendarService, CalendarServiceDiagnostics, NewEvent,
};
use calendar_gateway::components::weather_service::{EventWeather, WeatherService};
use calendar_gateway::error::{calendar_service_error, weather_service_error, GatewayResult};
use calendar_gateway::graphql::{build_schema, GatewayContext, GatewaySchema};
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Build a calendar event starting on the given day of May 2021
pub fn may_event(id: &str, title: &str, location: Option<&str>, day: u32) -> CalendarEvent {
    CalendarEvent {
        id: id.to_string(),
        title: title.to_string(),
        location: location.map(str::to_string),
        starts_at: Utc.with_ymd_and_hms(2021, 5, day, 9, 0, 0).unwrap(),
        ends_at: Utc.with_ymd_and_hms(2021, 5, day, 10, 0, 0).unwrap(),
    }
}

/// In-memory calendar service that counts upstream calls
#[derive(Debug, Default)]
pub struct MockCalendarService {
    events: Mutex<Vec<CalendarEvent>>,
    fail: bool,
    pub list_calls: AtomicUsize,
    pub fetch_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub diagnostics_calls: AtomicUsize,
}

impl MockCalendarService {
    /// Create a mock holding the given events
    pub fn with_events(events: Vec<CalendarEvent>) -> Self {
        Self {
            events: Mutex::new(events),
            ..Default::default()
        }
    }

    /// Create a mock whose every call fails like an unreachable service
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn total_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
            + self.fetch_calls.load(Ordering::SeqCst)
            + self.create_calls.load(Ordering::SeqCst)
            + self.diagnostics_calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> GatewayResult<()> {
        if self.fail {
            Err(calendar_service_error("HTTP 500 Internal Server Error - boom"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CalendarService for MockCalendarService {
    async fn list_events(
        &self,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> GatewayResult<Vec<CalendarEvent>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;

        let events = self.events.lock().await;
        Ok(events
            .iter()
            .filter(|e| e.starts_at >= starts_at && e.starts_at < ends_at)
            .cloned()
            .collect())
    }

    async fn fetch_event(&self, id: &str) -> GatewayResult<CalendarEvent> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;

        let events = self.events.lock().await;
        events
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| calendar_service_error("HTTP 500 Internal Server Error - sql: no rows in result set"))
    }

    async fn create_event(&self, event: &NewEvent) -> GatewayResult<CalendarEvent> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;

        let mut events = self.events.lock().await;
        let created = CalendarEvent {
            id: format!("created-{}", events.len() + 1),
            title: event.title.clone(),
            location: event.location.clone(),
            starts_at: event.starts_at,
            ends_at: event.ends_at,
        };
        events.push(created.clone());
        Ok(created)
    }

    async fn fetch_diagnostics(&self) -> GatewayResult<CalendarServiceDiagnostics> {
        self.diagnostics_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;

        Ok(CalendarServiceDiagnostics {
            version: Some("1.0.0".to_string()),
        })
    }
}

/// Weather service answering from a fixed table. Ids missing from the table fail.
#[derive(Debug, Default)]
pub struct MockWeatherService {
    weather: HashMap<String, Option<EventWeather>>,
    pub calls: AtomicUsize,
}

impl MockWeatherService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer with a summary for the event
    pub fn with_weather(mut self, event_id: &str, kind: &str, description: &str, temp: &str) -> Self {
        self.weather.insert(
            event_id.to_string(),
            Some(EventWeather {
                kind: kind.to_string(),
                description: description.to_string(),
                temp: temp.to_string(),
            }),
        );
        self
    }

    /// Answer with `weather: null` for the event
    pub fn without_weather(mut self, event_id: &str) -> Self {
        self.weather.insert(event_id.to_string(), None);
        self
    }
}

#[async_trait]
impl WeatherService for MockWeatherService {
    async fn fetch_event_weather(&self, event_id: &str) -> GatewayResult<Option<EventWeather>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        self.weather
            .get(event_id)
            .cloned()
            .ok_or_else(|| weather_service_error("HTTP 404 Not Found - {}"))
    }
}

/// Build a schema backed by the given mocks
pub fn schema_with(calendar: Arc<MockCalendarService>, weather: Arc<MockWeatherService>) -> GatewaySchema {
    build_schema(GatewayContext::new(calendar, weather))
}
