use crate::config::Config;
use crate::error::Error;
use crate::graphql::{build_schema, GatewayContext};
use crate::server::{router, GRAPHQL_PATH};
use crate::shutdown::shutdown_signal;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug,hyper=warn,reqwest=warn")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the gateway configuration
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => {
            info!(
                calendar_service = %config.calendar_service_url,
                weather_service = %config.weather_service_url,
                "Loaded configuration"
            );
            Ok(config)
        }
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Build the schema and serve it until a shutdown signal arrives
pub async fn start_server(config: Config) -> miette::Result<()> {
    let context = GatewayContext::from_config(&config)?;
    let app = router(build_schema(context));

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(Error::from)?;

    info!("GraphQL API ready at http://{}{}", addr, GRAPHQL_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(Error::from)?;

    info!("GraphQL gateway stopped");
    Ok(())
}
