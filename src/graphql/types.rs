use super::context::GatewayContext;
use super::scalar::DateTime;
use crate::components::calendar_service::{CalendarEvent, CalendarServiceDiagnostics};
use crate::components::weather_service::EventWeather;
use async_graphql::{Context, Object, Result};
use tracing::warn;

/// A calendar event, proxied from the calendar service
#[Object(name = "Event")]
impl CalendarEvent {
    async fn id(&self) -> &str {
        &self.id
    }

    async fn title(&self) -> &str {
        &self.title
    }

    async fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    async fn starts_at(&self) -> DateTime {
        DateTime(self.starts_at)
    }

    async fn ends_at(&self) -> DateTime {
        DateTime(self.ends_at)
    }

    /// Weather forecast for the event, or null when the weather service has
    /// nothing for it or cannot be reached
    async fn weather(&self, ctx: &Context<'_>) -> Result<Option<EventWeather>> {
        let context = ctx.data::<GatewayContext>()?;

        // Weather is best-effort enrichment: the failure reason is dropped here
        // so that it never fails the parent event.
        match context.weather.fetch_event_weather(&self.id).await {
            Ok(weather) => Ok(weather),
            Err(e) => {
                warn!(event_id = %self.id, error = %e, "Weather lookup failed, resolving to null");
                Ok(None)
            }
        }
    }
}

#[Object]
impl EventWeather {
    #[graphql(name = "type")]
    async fn kind(&self) -> &str {
        &self.kind
    }

    async fn description(&self) -> &str {
        &self.description
    }

    async fn temp(&self) -> &str {
        &self.temp
    }
}

#[Object]
impl CalendarServiceDiagnostics {
    async fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

/// Health information about the upstream services
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    pub calendar: CalendarServiceDiagnostics,
}

#[Object]
impl Diagnostics {
    async fn calendar(&self) -> &CalendarServiceDiagnostics {
        &self.calendar
    }
}
