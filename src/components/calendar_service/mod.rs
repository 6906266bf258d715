mod client;
pub mod models;

pub use client::CalendarServiceClient;
pub use models::{CalendarEvent, CalendarServiceDiagnostics, NewEvent};

use crate::error::GatewayResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Operations the gateway needs from the calendar service
#[async_trait]
pub trait CalendarService: Send + Sync {
    /// List events between two instants
    async fn list_events(
        &self,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> GatewayResult<Vec<CalendarEvent>>;

    /// Fetch a single event by id
    async fn fetch_event(&self, id: &str) -> GatewayResult<CalendarEvent>;

    /// Create an event and return it as stored upstream
    async fn create_event(&self, event: &NewEvent) -> GatewayResult<CalendarEvent>;

    /// Fetch the diagnostics body served at the service root
    async fn fetch_diagnostics(&self) -> GatewayResult<CalendarServiceDiagnostics>;
}
