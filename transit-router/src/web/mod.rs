//! Web layer for the transit router.
//!
//! Provides HTTP endpoints for bus and stop statistics, route queries and
//! replacing the loaded network.

mod cache;
mod dto;
mod routes;
mod state;

pub use cache::RouteCache;
pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, Snapshot};
