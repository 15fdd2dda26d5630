//! Server-rendered HTML views.
//!
//! One function per page, sharing a minimal layout. Text values are
//! already markup-escaped at sanitization time; raw numeric inputs are
//! escaped here before being re-rendered into form attributes.

use std::fmt::Write;

use axum::http::StatusCode;
use uuid::Uuid;

use stockroom_entity::category::Category;
use stockroom_entity::item::Item;
use stockroom_service::category::CategoryInput;
use stockroom_service::item::ItemInput;
use stockroom_service::validation::{FieldError, escape_markup};

use crate::urls;

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n{body}</body>\n</html>\n"
    )
}

fn error_list(errors: &[FieldError]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let mut html = String::from("<ul class=\"errors\">\n");
    for error in errors {
        let _ = writeln!(html, "<li>{}</li>", error.message);
    }
    html.push_str("</ul>\n");
    html
}

/// The category list page.
pub fn category_list(categories: &[Category]) -> String {
    let mut body = String::from("<ul>\n");
    for category in categories {
        let _ = writeln!(
            body,
            "<li><a href=\"{}\">{}</a></li>",
            urls::category_url(category.id),
            category.name
        );
    }
    body.push_str("</ul>\n<p><a href=\"/create\">Create new category</a></p>\n");
    layout("Categories List", &body)
}

/// The category detail page, with the items it owns.
pub fn category_detail(category: &Category, items: &[Item]) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h2>{}</h2>", category.name);
    let _ = writeln!(body, "<p>{}</p>", category.description);
    body.push_str("<h3>Items</h3>\n<ul>\n");
    for item in items {
        let _ = writeln!(
            body,
            "<li><a href=\"{}\">{}</a></li>",
            urls::item_url(item.id),
            item.name
        );
    }
    body.push_str("</ul>\n");
    let _ = writeln!(
        body,
        "<p><a href=\"{base}/create\">Create new item</a> | \
         <a href=\"{base}/update\">Update category</a> | \
         <a href=\"{base}/delete\">Delete category</a></p>",
        base = urls::category_url(category.id)
    );
    layout("Category Details", &body)
}

/// The category create/update form, re-filled with sanitized values and
/// the collected errors on a rejected submission.
pub fn category_form(title: &str, input: &CategoryInput, errors: &[FieldError]) -> String {
    let mut body = error_list(errors);
    body.push_str("<form method=\"post\">\n");
    let _ = writeln!(
        body,
        "<label>Category Name: <input type=\"text\" name=\"categoryName\" value=\"{}\"></label>",
        input.name
    );
    let _ = writeln!(
        body,
        "<label>Description: <input type=\"text\" name=\"description\" value=\"{}\"></label>",
        input.description
    );
    body.push_str("<button type=\"submit\">Submit</button>\n</form>\n");
    layout(title, &body)
}

/// The category delete confirmation page. Deletion is blocked while the
/// listed items still reference the category.
pub fn category_delete(category: &Category, items: &[Item]) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h2>{}</h2>", category.name);
    if items.is_empty() {
        body.push_str("<p>Delete this category?</p>\n<form method=\"post\">\n");
        let _ = writeln!(
            body,
            "<input type=\"hidden\" name=\"categoryId\" value=\"{}\">",
            category.id
        );
        body.push_str("<button type=\"submit\">Delete</button>\n</form>\n");
    } else {
        body.push_str(
            "<p>Delete the following items before deleting this category:</p>\n<ul>\n",
        );
        for item in items {
            let _ = writeln!(
                body,
                "<li><a href=\"{}\">{}</a></li>",
                urls::item_url(item.id),
                item.name
            );
        }
        body.push_str("</ul>\n");
    }
    layout("Delete Category", &body)
}

/// The item detail page, with its resolved category.
pub fn item_detail(item: &Item, category: &Category) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h2>{}</h2>", item.name);
    let _ = writeln!(body, "<p>{}</p>", item.description.as_deref().unwrap_or(""));
    let _ = writeln!(
        body,
        "<p>Category: <a href=\"{}\">{}</a></p>",
        urls::category_url(category.id),
        category.name
    );
    let _ = writeln!(body, "<p>Price: {}</p>", item.price);
    let _ = writeln!(body, "<p>Quantity: {}</p>", item.quantity);
    let _ = writeln!(
        body,
        "<p><a href=\"{base}/update\">Update item</a> | \
         <a href=\"{base}/delete\">Delete item</a></p>",
        base = urls::item_url(item.id)
    );
    layout("Item Details", &body)
}

/// The item create/update form. The update variant carries the current
/// category id as a hidden `categoryID` field; on create the owning
/// category is implied by the URL the form posts back to.
pub fn item_form(
    title: &str,
    input: &ItemInput,
    category_id: Option<Uuid>,
    errors: &[FieldError],
) -> String {
    let mut body = error_list(errors);
    body.push_str("<form method=\"post\">\n");
    let _ = writeln!(
        body,
        "<label>Item Name: <input type=\"text\" name=\"itemName\" value=\"{}\"></label>",
        input.name
    );
    let _ = writeln!(
        body,
        "<label>Description: <input type=\"text\" name=\"description\" value=\"{}\"></label>",
        input.description
    );
    let _ = writeln!(
        body,
        "<label>Price: <input type=\"text\" name=\"price\" value=\"{}\"></label>",
        escape_markup(&input.price)
    );
    let _ = writeln!(
        body,
        "<label>Quantity: <input type=\"text\" name=\"quantity\" value=\"{}\"></label>",
        escape_markup(&input.quantity)
    );
    if let Some(category_id) = category_id {
        let _ = writeln!(
            body,
            "<input type=\"hidden\" name=\"categoryID\" value=\"{category_id}\">"
        );
    }
    body.push_str("<button type=\"submit\">Submit</button>\n</form>\n");
    layout(title, &body)
}

/// The item delete confirmation page.
pub fn item_delete(item: &Item) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h2>{}</h2>", item.name);
    body.push_str(
        "<p>Delete this item?</p>\n<form method=\"post\">\n\
         <button type=\"submit\">Delete</button>\n</form>\n",
    );
    layout("Delete Item", &body)
}

/// The error page rendered for propagated failures.
pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!("<p>{} — {}</p>\n", status.as_u16(), escape_markup(message));
    layout("Error", &body)
}
