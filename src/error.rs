use async_graphql::ErrorExtensions;
use miette::Diagnostic;
use thiserror::Error;

/// Main error type for the gateway
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(calendar_gateway::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(calendar_gateway::config))]
    Config(String),

    #[error("Calendar service error: {0}")]
    #[diagnostic(code(calendar_gateway::calendar_service))]
    CalendarService(String),

    #[error("Weather service error: {0}")]
    #[diagnostic(code(calendar_gateway::weather_service))]
    WeatherService(String),

    #[error("Invalid value for `{field}`: {message}")]
    #[diagnostic(code(calendar_gateway::validation))]
    Validation { field: &'static str, message: String },

    #[error(transparent)]
    #[diagnostic(code(calendar_gateway::io))]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    #[diagnostic(code(calendar_gateway::other))]
    Other(String),
}

/// Type alias for Result with our Error type
pub type GatewayResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create calendar service errors
pub fn calendar_service_error(message: &str) -> Error {
    Error::CalendarService(message.to_string())
}

/// Helper to create weather service errors
pub fn weather_service_error(message: &str) -> Error {
    Error::WeatherService(message.to_string())
}

/// Helper to create input validation errors
pub fn validation_error(field: &'static str, message: &str) -> Error {
    Error::Validation {
        field,
        message: message.to_string(),
    }
}

impl ErrorExtensions for Error {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| match self {
            Error::Validation { field, .. } => {
                e.set("code", "BAD_USER_INPUT");
                e.set("field", *field);
            }
            Error::CalendarService(_) => {
                e.set("code", "UPSTREAM_ERROR");
                e.set("service", "calendar");
            }
            Error::WeatherService(_) => {
                e.set("code", "UPSTREAM_ERROR");
                e.set("service", "weather");
            }
            _ => e.set("code", "INTERNAL_SERVER_ERROR"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_extensions() {
        let err = validation_error("title", "must not be empty").extend();
        assert_eq!(err.message, "Invalid value for `title`: must not be empty");

        let extensions = err.extensions.expect("extensions are set");
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("BAD_USER_INPUT"))
        );
        assert_eq!(
            extensions.get("field"),
            Some(&async_graphql::Value::from("title"))
        );
    }

    #[test]
    fn test_upstream_error_extensions() {
        let err = calendar_service_error("HTTP 500").extend();
        let extensions = err.extensions.expect("extensions are set");
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("UPSTREAM_ERROR"))
        );
        assert_eq!(
            extensions.get("service"),
            Some(&async_graphql::Value::from("calendar"))
        );
    }
}
