//! Item entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A priced, quantified inventory record belonging to exactly one category.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Item {
    /// Unique item identifier, generated by the database at insert.
    pub id: Uuid,
    /// Item name, unique among all items (application-level check).
    pub name: String,
    /// Optional item description.
    pub description: Option<String>,
    /// The owning category. Not enforced by a foreign key: the reference
    /// may dangle after a concurrent category deletion and is only
    /// resolved at read time.
    pub category_id: Uuid,
    /// Unit price.
    pub price: f64,
    /// Stock quantity, at least 1 at creation.
    pub quantity: i32,
}

/// Data required to create a new item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItem {
    /// Item name.
    pub name: String,
    /// Optional item description.
    pub description: Option<String>,
    /// The owning category id.
    pub category_id: Uuid,
    /// Unit price.
    pub price: f64,
    /// Stock quantity.
    pub quantity: i32,
}
