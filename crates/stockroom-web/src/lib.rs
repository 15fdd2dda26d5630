//! # stockroom-web
//!
//! HTTP layer for Stockroom built on Axum.
//!
//! Provides the route table, form DTOs, handlers, server-rendered HTML
//! views, request logging middleware, and error-to-page mapping.

pub mod app;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod urls;
pub mod views;

pub use app::{build_state, run_server};
pub use router::build_router;
pub use state::AppState;
