//! Item page handlers.

use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use uuid::Uuid;

use stockroom_service::item::{ItemInput, ItemOutcome};

use crate::error::PageError;
use crate::forms::{ItemFormBody, ItemUpdateBody};
use crate::state::AppState;
use crate::urls;
use crate::views;

/// GET /category/item/{id}
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, PageError> {
    let (item, category) = state.items.detail(id).await?;
    Ok(Html(views::item_detail(&item, &category)))
}

/// GET /category/{id}/create
///
/// The owning category id is carried by the URL the form posts back to,
/// not by a form field.
pub async fn create_form(Path(_id): Path<Uuid>) -> Html<String> {
    Html(views::item_form(
        "Create Item",
        &ItemInput::default(),
        None,
        &[],
    ))
}

/// POST /category/{id}/create
pub async fn create_submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<ItemFormBody>,
) -> Result<Response, PageError> {
    match state.items.create(id, &form.into_fields()).await? {
        ItemOutcome::Saved(item) => Ok(Redirect::to(&urls::item_url(item.id)).into_response()),
        ItemOutcome::Invalid { input, errors } => {
            Ok(Html(views::item_form("Create Item", &input, None, &errors)).into_response())
        }
    }
}

/// GET /category/item/{id}/update
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, PageError> {
    let item = state.items.get(id).await?;
    let input = ItemInput::from_item(&item);
    Ok(Html(views::item_form(
        "Update Item",
        &input,
        Some(item.category_id),
        &[],
    )))
}

/// POST /category/item/{id}/update
pub async fn update_submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<ItemUpdateBody>,
) -> Result<Response, PageError> {
    let category_id = form.category_id;
    match state
        .items
        .update(id, category_id, &form.into_fields())
        .await?
    {
        ItemOutcome::Saved(item) => Ok(Redirect::to(&urls::item_url(item.id)).into_response()),
        ItemOutcome::Invalid { input, errors } => Ok(Html(views::item_form(
            "Update Item",
            &input,
            Some(category_id),
            &errors,
        ))
        .into_response()),
    }
}

/// GET /category/item/{id}/delete
pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, PageError> {
    match state.items.delete_view(id).await? {
        Some(item) => Ok(Html(views::item_delete(&item)).into_response()),
        None => Ok(Redirect::to(urls::CATEGORY_LIST).into_response()),
    }
}

/// POST /category/item/{id}/delete
pub async fn delete_submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, PageError> {
    match state.items.delete(id).await? {
        Some(category_id) => {
            Ok(Redirect::to(&urls::category_url(category_id)).into_response())
        }
        None => Ok(Redirect::to(urls::CATEGORY_LIST).into_response()),
    }
}
