//! Application state shared across all handlers.

use std::sync::Arc;

use stockroom_service::category::CategoryService;
use stockroom_service::item::ItemService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Category use cases.
    pub categories: Arc<CategoryService>,
    /// Item use cases.
    pub items: Arc<ItemService>,
}
