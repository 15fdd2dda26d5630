//! Category entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A named grouping that owns zero or more items.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Unique category identifier, generated by the database at insert.
    pub id: Uuid,
    /// Category name, unique among all categories (application-level check).
    pub name: String,
    /// Category description.
    pub description: String,
}

/// Data required to create a new category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategory {
    /// Category name.
    pub name: String,
    /// Category description.
    pub description: String,
}
