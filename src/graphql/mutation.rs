use super::context::GatewayContext;
use super::inputs::CreateEventInput;
use super::query::upstream_failure;
use crate::components::calendar_service::CalendarEvent;
use async_graphql::{Context, ErrorExtensions, Object, Result};
use tracing::{info, warn};

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create an event in the calendar service.
    ///
    /// The input is validated before anything is sent upstream. There is no
    /// idempotency key, so retrying a failed call may create a duplicate.
    async fn create_event(&self, ctx: &Context<'_>, input: CreateEventInput) -> Result<CalendarEvent> {
        let context = ctx.data::<GatewayContext>()?;

        let new_event = input.validate().map_err(|e| {
            warn!("Rejected createEvent input: {}", e);
            e.extend()
        })?;

        let event = context
            .calendar
            .create_event(&new_event)
            .await
            .map_err(upstream_failure)?;

        info!(event_id = %event.id, "Created event");
        Ok(event)
    }
}
