use super::models::{
    CalendarEvent, CalendarServiceDiagnostics, EventListResponse, EventResponse, NewEvent,
};
use super::CalendarService;
use crate::components::upstream::{decode_json, endpoint};
use crate::error::{calendar_service_error, GatewayResult};
use crate::utils::time::to_iso_string;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::debug;
use url::Url;

/// HTTP client for the calendar service
#[derive(Debug, Clone)]
pub struct CalendarServiceClient {
    client: Client,
    base_url: Url,
}

impl CalendarServiceClient {
    /// Create a new client against the given base URL
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl CalendarService for CalendarServiceClient {
    async fn list_events(
        &self,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> GatewayResult<Vec<CalendarEvent>> {
        let mut url = endpoint(&self.base_url, &["event"], calendar_service_error)?;
        url.query_pairs_mut()
            .append_pair("startsAt", &to_iso_string(&starts_at))
            .append_pair("endsAt", &to_iso_string(&ends_at));

        debug!(%url, "Listing calendar events");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| calendar_service_error(&format!("Failed to list events: {}", e)))?;

        let body: EventListResponse = decode_json(response, calendar_service_error).await?;
        Ok(body.data.events)
    }

    async fn fetch_event(&self, id: &str) -> GatewayResult<CalendarEvent> {
        let url = endpoint(&self.base_url, &["event", id], calendar_service_error)?;

        debug!(%url, "Fetching calendar event");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| calendar_service_error(&format!("Failed to fetch event {}: {}", id, e)))?;

        let body: EventResponse = decode_json(response, calendar_service_error).await?;
        Ok(body.data.event)
    }

    async fn create_event(&self, event: &NewEvent) -> GatewayResult<CalendarEvent> {
        let url = endpoint(&self.base_url, &["event"], calendar_service_error)?;

        debug!(%url, title = %event.title, "Creating calendar event");

        let response = self
            .client
            .post(url)
            .json(event)
            .send()
            .await
            .map_err(|e| calendar_service_error(&format!("Failed to create event: {}", e)))?;

        let body: EventResponse = decode_json(response, calendar_service_error).await?;
        Ok(body.data.event)
    }

    async fn fetch_diagnostics(&self) -> GatewayResult<CalendarServiceDiagnostics> {
        debug!(url = %self.base_url, "Fetching calendar service diagnostics");

        let response = self
            .client
            .get(self.base_url.clone())
            .send()
            .await
            .map_err(|e| calendar_service_error(&format!("Failed to fetch diagnostics: {}", e)))?;

        decode_json(response, calendar_service_error).await
    }
}
