//! GraphQL schema composing the calendar and weather services.

pub mod context;
pub mod inputs;
pub mod mutation;
pub mod query;
pub mod scalar;
pub mod types;

use async_graphql::{EmptySubscription, Schema, SchemaBuilder};

pub use context::GatewayContext;
pub use mutation::MutationRoot;
pub use query::QueryRoot;

/// GraphQL schema type
pub type GatewaySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Schema builder without any data attached
pub fn schema_builder() -> SchemaBuilder<QueryRoot, MutationRoot, EmptySubscription> {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
}

/// Build the schema with the upstream services resolvers will use
pub fn build_schema(context: GatewayContext) -> GatewaySchema {
    schema_builder().data(context).finish()
}

/// Schema definition language for the gateway schema
pub fn schema_sdl() -> String {
    schema_builder().finish().sdl()
}
