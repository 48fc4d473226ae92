// Composition root.
//
// - Read config from the environment.
// - Seed the in-memory stores from the bundled fixtures.
// - Wire the stores into the use case handlers and expose them over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod seed;
pub mod state;
