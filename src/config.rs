use crate::error::{config_error, env_error, GatewayResult};
use dotenvy::dotenv;
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use url::Url;

/// Default port the gateway listens on
pub const DEFAULT_PORT: u16 = 4000;

/// Default address the gateway binds to
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Main configuration structure for the gateway
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the calendar service
    pub calendar_service_url: Url,
    /// Base URL of the weather service
    pub weather_service_url: Url,
    /// Address to bind the HTTP server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Optional request timeout for upstream calls. `None` keeps the HTTP client defaults.
    pub upstream_timeout: Option<Duration>,
}

impl Config {
    /// Load configuration from the environment, reading `.env` first if it exists
    pub fn load() -> GatewayResult<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> GatewayResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let calendar_service = lookup("CALENDAR_SERVICE").ok_or_else(|| env_error("CALENDAR_SERVICE"))?;
        let weather_service = lookup("WEATHER_SERVICE").ok_or_else(|| env_error("WEATHER_SERVICE"))?;

        let calendar_service_url = parse_base_url("CALENDAR_SERVICE", &calendar_service)?;
        let weather_service_url = parse_base_url("WEATHER_SERVICE", &weather_service)?;

        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|_| config_error(&format!("Invalid PORT value: {}", port)))?,
            None => DEFAULT_PORT,
        };

        let host = lookup("HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
            .parse::<IpAddr>()
            .map_err(|e| config_error(&format!("Invalid HOST value: {}", e)))?;

        let upstream_timeout = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(secs) => {
                let secs = secs
                    .parse::<u64>()
                    .map_err(|_| config_error(&format!("Invalid UPSTREAM_TIMEOUT_SECS value: {}", secs)))?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Config {
            calendar_service_url,
            weather_service_url,
            host,
            port,
            upstream_timeout,
        })
    }

    /// Socket address the server should listen on
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Parse a service base URL, making sure relative joins stay under its path
pub fn parse_base_url(var: &str, value: &str) -> GatewayResult<Url> {
    let mut url = Url::parse(value)
        .map_err(|e| config_error(&format!("Invalid {} URL '{}': {}", var, value, e)))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(config_error(&format!("{} must be an http(s) base URL", var)));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
