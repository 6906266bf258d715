use super::context::GatewayContext;
use super::inputs::{EventInput, EventsInput};
use super::types::Diagnostics;
use crate::components::calendar_service::CalendarEvent;
use crate::error::Error;
use async_graphql::{Context, ErrorExtensions, Object, Result};
use tracing::error;

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Diagnostics reported by the upstream services
    async fn diagnostics(&self, ctx: &Context<'_>) -> Result<Diagnostics> {
        let context = ctx.data::<GatewayContext>()?;

        let calendar = context
            .calendar
            .fetch_diagnostics()
            .await
            .map_err(upstream_failure)?;

        Ok(Diagnostics { calendar })
    }

    /// Events between two instants, in the order the calendar service returns them
    async fn events(&self, ctx: &Context<'_>, input: EventsInput) -> Result<Vec<CalendarEvent>> {
        let context = ctx.data::<GatewayContext>()?;

        context
            .calendar
            .list_events(input.starts_at.0, input.ends_at.0)
            .await
            .map_err(upstream_failure)
    }

    /// A single event by id
    async fn event(&self, ctx: &Context<'_>, input: EventInput) -> Result<CalendarEvent> {
        let context = ctx.data::<GatewayContext>()?;

        context
            .calendar
            .fetch_event(&input.id)
            .await
            .map_err(upstream_failure)
    }
}

/// Log an upstream failure and convert it into a GraphQL error
pub(crate) fn upstream_failure(e: Error) -> async_graphql::Error {
    error!("Upstream request failed: {}", e);
    e.extend()
}
