//! Category page handlers.

use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use uuid::Uuid;

use stockroom_service::category::{CategoryDeletion, CategoryInput, CategoryOutcome};

use crate::error::PageError;
use crate::forms::{CategoryDeleteBody, CategoryFormBody};
use crate::state::AppState;
use crate::urls;
use crate::views;

/// GET /
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let categories = state.categories.list().await?;
    Ok(Html(views::category_list(&categories)))
}

/// GET /category/{id}
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, PageError> {
    let (category, items) = state.categories.detail(id).await?;
    Ok(Html(views::category_detail(&category, &items)))
}

/// GET /create
pub async fn create_form() -> Html<String> {
    Html(views::category_form(
        "Create Category",
        &CategoryInput::default(),
        &[],
    ))
}

/// POST /create
pub async fn create_submit(
    State(state): State<AppState>,
    Form(form): Form<CategoryFormBody>,
) -> Result<Response, PageError> {
    match state.categories.create(&form.into_fields()).await? {
        CategoryOutcome::Saved(category) => {
            Ok(Redirect::to(&urls::category_url(category.id)).into_response())
        }
        CategoryOutcome::Invalid { input, errors } => {
            Ok(Html(views::category_form("Create Category", &input, &errors)).into_response())
        }
    }
}

/// GET /category/{id}/update
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, PageError> {
    let category = state.categories.get(id).await?;
    let input = CategoryInput {
        name: category.name,
        description: category.description,
    };
    Ok(Html(views::category_form("Update Category", &input, &[])))
}

/// POST /category/{id}/update
pub async fn update_submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<CategoryFormBody>,
) -> Result<Response, PageError> {
    match state.categories.update(id, &form.into_fields()).await? {
        CategoryOutcome::Saved(category) => {
            Ok(Redirect::to(&urls::category_url(category.id)).into_response())
        }
        CategoryOutcome::Invalid { input, errors } => {
            Ok(Html(views::category_form("Update Category", &input, &errors)).into_response())
        }
    }
}

/// GET /category/{id}/delete
pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, PageError> {
    match state.categories.delete_view(id).await? {
        Some((category, items)) => {
            Ok(Html(views::category_delete(&category, &items)).into_response())
        }
        None => Ok(Redirect::to(urls::CATEGORY_LIST).into_response()),
    }
}

/// POST /category/{id}/delete
pub async fn delete_submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<CategoryDeleteBody>,
) -> Result<Response, PageError> {
    match state.categories.delete(id, form.category_id).await? {
        CategoryDeletion::Deleted => Ok(Redirect::to(urls::CATEGORY_LIST).into_response()),
        CategoryDeletion::Blocked { category, items } => {
            Ok(Html(views::category_delete(&category, &items)).into_response())
        }
    }
}
