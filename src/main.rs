use calendar_gateway::startup;
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting calendar GraphQL gateway");

    // Load configuration
    let config = startup::load_config()?;

    // Serve the gateway
    startup::start_server(config).await
}
