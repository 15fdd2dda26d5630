//! Maps domain `AppError` to rendered HTML responses.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use stockroom_core::error::{AppError, ErrorKind};

use crate::views;

/// Wrapper that renders an [`AppError`] as an HTML error page.
///
/// Handlers return `Result<_, PageError>` so the `?` operator converts
/// domain errors into pages at the route boundary.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = match self.0.kind {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Database | ErrorKind::Configuration | ErrorKind::Internal => {
                tracing::error!(error = %self.0, "Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Html(views::error_page(status, &self.0.message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = PageError(AppError::not_found("Category not found")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_maps_to_500() {
        let response = PageError(AppError::database("connection lost")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
