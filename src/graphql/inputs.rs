use super::scalar::DateTime;
use crate::components::calendar_service::NewEvent;
use crate::error::{validation_error, GatewayResult};
use async_graphql::InputObject;

#[derive(Debug, Clone, InputObject)]
pub struct CreateEventInput {
    pub title: String,
    pub location: Option<String>,
    pub starts_at: DateTime,
    pub ends_at: DateTime,
}

impl CreateEventInput {
    /// Check the input and turn it into the calendar service payload.
    ///
    /// Date-times are already checked by the `DateTime` scalar during input
    /// coercion. Event ordering is left to the calendar service.
    pub fn validate(self) -> GatewayResult<NewEvent> {
        if self.title.is_empty() {
            return Err(validation_error("title", "must not be empty"));
        }

        if let Some(location) = &self.location {
            if location.is_empty() {
                return Err(validation_error("location", "must not be empty when provided"));
            }
        }

        Ok(NewEvent {
            title: self.title,
            location: self.location,
            starts_at: self.starts_at.0,
            ends_at: self.ends_at.0,
        })
    }
}

#[derive(Debug, Clone, InputObject)]
pub struct EventsInput {
    pub starts_at: DateTime,
    pub ends_at: DateTime,
}

#[derive(Debug, Clone, InputObject)]
pub struct EventInput {
    pub id: String,
}
