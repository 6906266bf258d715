use crate::graphql::GatewaySchema;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Path the GraphQL endpoint and playground are served on
pub const GRAPHQL_PATH: &str = "/";

/// Build the HTTP router serving the schema
pub fn router(schema: GatewaySchema) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphql_playground).post(graphql_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        // The calendar frontend calls the gateway from the browser
        .layer(CorsLayer::permissive())
        .with_state(schema)
}

/// GraphQL request handler
async fn graphql_handler(State(schema): State<GatewaySchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// GraphiQL playground handler
async fn graphql_playground() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Liveness probe
async fn health_handler() -> &'static str {
    "OK"
}
