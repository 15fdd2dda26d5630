//! Route definitions for the Stockroom web UI.
//!
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor. Every response is a rendered HTML page or
//! a redirect to one of the GET routes.

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(category_routes())
        .merge(item_routes())
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Category pages: list, detail, create, update, delete.
fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::category::list))
        .route(
            "/create",
            get(handlers::category::create_form).post(handlers::category::create_submit),
        )
        .route("/category/{id}", get(handlers::category::detail))
        .route(
            "/category/{id}/update",
            get(handlers::category::update_form).post(handlers::category::update_submit),
        )
        .route(
            "/category/{id}/delete",
            get(handlers::category::delete_form).post(handlers::category::delete_submit),
        )
}

/// Item pages: detail, create (nested under a category), update, delete.
fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/category/item/{id}", get(handlers::item::detail))
        .route(
            "/category/{id}/create",
            get(handlers::item::create_form).post(handlers::item::create_submit),
        )
        .route(
            "/category/item/{id}/update",
            get(handlers::item::update_form).post(handlers::item::update_submit),
        )
        .route(
            "/category/item/{id}/delete",
            get(handlers::item::delete_form).post(handlers::item::delete_submit),
        )
}
