//! Chalkboard backend application: router construction, response
//! envelope, error mapping and shared state. The binary entrypoint lives
//! in `main.rs`; the pieces are exported here so integration tests can
//! drive the router directly.

pub mod error;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
