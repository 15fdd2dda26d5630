//! Canonical paths for the rendered pages.
//!
//! Derived URLs are pure functions of the entity identifier rather than
//! methods on the entities themselves.

use uuid::Uuid;

/// Path of the category list page.
pub const CATEGORY_LIST: &str = "/";

/// Canonical path of a category's detail page.
pub fn category_url(id: Uuid) -> String {
    format!("/category/{id}")
}

/// Canonical path of an item's detail page.
pub fn item_url(id: Uuid) -> String {
    format!("/category/item/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_paths() {
        let id = Uuid::nil();
        assert_eq!(
            category_url(id),
            "/category/00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            item_url(id),
            "/category/item/00000000-0000-0000-0000-000000000000"
        );
    }
}
