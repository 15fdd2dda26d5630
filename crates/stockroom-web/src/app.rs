//! Application wiring — repositories, services, state, and the server loop.

use std::sync::Arc;

use sqlx::PgPool;

use stockroom_core::config::AppConfig;
use stockroom_core::error::AppError;
use stockroom_core::result::AppResult;
use stockroom_database::repositories::category::CategoryRepository;
use stockroom_database::repositories::item::ItemRepository;
use stockroom_service::category::CategoryService;
use stockroom_service::item::ItemService;

use crate::router::build_router;
use crate::state::AppState;

/// Construct the application state from a database pool.
///
/// Repositories and services are built here, once, and shared across all
/// request handlers through `AppState`.
pub fn build_state(pool: PgPool) -> AppState {
    let category_repo = Arc::new(CategoryRepository::new(pool.clone()));
    let item_repo = Arc::new(ItemRepository::new(pool));

    let categories = Arc::new(CategoryService::new(
        Arc::clone(&category_repo),
        Arc::clone(&item_repo),
    ));
    let items = Arc::new(ItemService::new(item_repo, category_repo));

    AppState { categories, items }
}

/// Run the Stockroom server until a shutdown signal arrives.
pub async fn run_server(config: &AppConfig, pool: PgPool) -> AppResult<()> {
    let state = build_state(pool);
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Stockroom server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Stockroom server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
