use crate::error::{Error, GatewayResult};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Build the HTTP client shared by the upstream service clients
pub fn build_http_client(timeout: Option<Duration>) -> GatewayResult<Client> {
    let mut builder = Client::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder
        .build()
        .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))
}

/// Append path segments to a service base URL, percent-encoding each one
pub fn endpoint(base: &Url, segments: &[&str], make_error: fn(&str) -> Error) -> GatewayResult<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| make_error(&format!("Base URL cannot carry a path: {}", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Check the response status and decode its JSON body
pub async fn decode_json<T>(response: Response, make_error: fn(&str) -> Error) -> GatewayResult<T>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let url = response.url().clone();

    if !status.is_success() {
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response".to_string());
        return Err(make_error(&format!(
            "{} returned HTTP {} - {}",
            url,
            status,
            upstream_message(&error_body)
        )));
    }

    debug!(%url, %status, "Upstream request succeeded");

    response
        .json::<T>()
        .await
        .map_err(|e| make_error(&format!("Failed to parse response from {}: {}", url, e)))
}

/// Pull the `error` message out of an upstream error body, falling back to the raw body
fn upstream_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::calendar_service_error;

    #[test]
    fn test_endpoint_keeps_base_path() {
        let base = Url::parse("http://calendar:8080/api/").unwrap();
        let url = endpoint(&base, &["event", "42"], calendar_service_error).unwrap();
        assert_eq!(url.as_str(), "http://calendar:8080/api/event/42");

        let base = Url::parse("http://calendar:8080/").unwrap();
        let url = endpoint(&base, &["event"], calendar_service_error).unwrap();
        assert_eq!(url.as_str(), "http://calendar:8080/event");
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let base = Url::parse("http://calendar/").unwrap();
        let url = endpoint(&base, &["event", "a/b c"], calendar_service_error).unwrap();
        assert_eq!(url.as_str(), "http://calendar/event/a%2Fb%20c");
    }

    #[test]
    fn test_upstream_message() {
        assert_eq!(upstream_message(r#"{"error":"no such event"}"#), "no such event");
        assert_eq!(upstream_message("bad gateway\n"), "bad gateway");
        assert_eq!(upstream_message(r#"{"status":500}"#), r#"{"status":500}"#);
    }
}
