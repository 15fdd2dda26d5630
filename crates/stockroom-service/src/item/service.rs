//! Item CRUD operations with name uniqueness checks and category resolution.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use stockroom_core::error::AppError;
use stockroom_core::result::AppResult;
use stockroom_database::repositories::category::CategoryRepository;
use stockroom_database::repositories::item::ItemRepository;
use stockroom_entity::category::Category;
use stockroom_entity::item::{CreateItem, Item};

use crate::validation::{Check, FieldError, RuleSet, sanitize};

/// Raw fields of an item create/update submission.
#[derive(Debug, Clone, Default)]
pub struct ItemFields {
    /// The `itemName` form field.
    pub name: String,
    /// The `description` form field.
    pub description: String,
    /// The `price` form field, raw text.
    pub price: String,
    /// The `quantity` form field, raw text.
    pub quantity: String,
}

/// Sanitized item form values, re-rendered into the form on failure.
#[derive(Debug, Clone, Default)]
pub struct ItemInput {
    /// Trimmed and escaped name.
    pub name: String,
    /// Trimmed and escaped description.
    pub description: String,
    /// Trimmed price text. Numbers are not markup-escaped.
    pub price: String,
    /// Trimmed quantity text.
    pub quantity: String,
}

impl ItemInput {
    fn from_fields(fields: &ItemFields) -> Self {
        Self {
            name: sanitize(&fields.name),
            description: sanitize(&fields.description),
            price: fields.price.trim().to_string(),
            quantity: fields.quantity.trim().to_string(),
        }
    }

    /// Pre-fill values from a persisted item, for the update form.
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone().unwrap_or_default(),
            price: item.price.to_string(),
            quantity: item.quantity.to_string(),
        }
    }

    fn record(&self) -> [(&'static str, &str); 4] {
        [
            ("itemName", self.name.as_str()),
            ("description", self.description.as_str()),
            ("price", self.price.as_str()),
            ("quantity", self.quantity.as_str()),
        ]
    }

    fn to_create(&self, category_id: Uuid) -> AppResult<CreateItem> {
        let price = self
            .price
            .parse::<f64>()
            .map_err(|_| AppError::validation("Price must be a numeric value."))?;
        let quantity = self
            .quantity
            .parse::<i32>()
            .map_err(|_| AppError::validation("Quantity must be a positive integer."))?;
        Ok(CreateItem {
            name: self.name.clone(),
            description: Some(self.description.clone()),
            category_id,
            price,
            quantity,
        })
    }
}

/// Result of an item create or update submission.
#[derive(Debug)]
pub enum ItemOutcome {
    /// The item was persisted; redirect to its detail page.
    Saved(Item),
    /// Validation rejected the submission; re-render the form.
    Invalid {
        /// Sanitized values to re-fill the form with.
        input: ItemInput,
        /// All collected field errors, in rule order.
        errors: Vec<FieldError>,
    },
}

fn item_rules() -> RuleSet {
    RuleSet::new(vec![
        ("itemName", Check::NotEmpty, "Item Name must be specified."),
        (
            "itemName",
            Check::LettersDigitsSpaces,
            "Item Name must contain only letters, numbers, or spaces.",
        ),
        ("description", Check::NotEmpty, "Description must be specified."),
        (
            "description",
            Check::LettersDigitsSpaces,
            "Description must contain only letters, numbers, or spaces.",
        ),
        ("price", Check::Decimal, "Price must be a numeric value."),
        ("quantity", Check::IntegerAtLeast(1), "Quantity must be a positive integer."),
    ])
}

/// Manages item detail, create, update, and delete use cases.
#[derive(Debug, Clone)]
pub struct ItemService {
    /// Item repository.
    items: Arc<ItemRepository>,
    /// Category repository, for resolving the owning category.
    categories: Arc<CategoryRepository>,
}

impl ItemService {
    /// Creates a new item service.
    pub fn new(items: Arc<ItemRepository>, categories: Arc<CategoryRepository>) -> Self {
        Self { items, categories }
    }

    /// Gets an item by ID, failing when it does not exist.
    pub async fn get(&self, id: Uuid) -> AppResult<Item> {
        self.items
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Item not found"))
    }

    /// Gets an item and resolves its owning category.
    ///
    /// The two lookups fail with distinct messages: a missing item and a
    /// dangling category reference are different 404s.
    pub async fn detail(&self, id: Uuid) -> AppResult<(Item, Category)> {
        let item = self.get(id).await?;
        let category = self
            .categories
            .find_by_id(item.category_id)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found"))?;
        Ok((item, category))
    }

    /// Validates and persists a new item under the given category.
    ///
    /// The owning category id comes from the URL path and is not checked
    /// for existence.
    pub async fn create(&self, category_id: Uuid, fields: &ItemFields) -> AppResult<ItemOutcome> {
        let input = ItemInput::from_fields(fields);
        let mut errors = item_rules().check(&input.record());

        if errors.is_empty() {
            if self.items.find_by_name(&input.name).await?.is_some() {
                errors.push(FieldError {
                    field: "itemName",
                    message: "Item with the same name already exists.".to_string(),
                    value: input.name.clone(),
                });
            } else {
                let item = self.items.create(&input.to_create(category_id)?).await?;
                info!(item_id = %item.id, name = %item.name, "Item created");
                return Ok(ItemOutcome::Saved(item));
            }
        }

        Ok(ItemOutcome::Invalid { input, errors })
    }

    /// Validates and persists an update to an existing item.
    ///
    /// The owning category id comes from the submitted form body, allowing
    /// re-assignment, and is not checked for existence. No uniqueness
    /// re-check runs on this path.
    pub async fn update(
        &self,
        id: Uuid,
        category_id: Uuid,
        fields: &ItemFields,
    ) -> AppResult<ItemOutcome> {
        let input = ItemInput::from_fields(fields);
        let errors = item_rules().check(&input.record());

        if !errors.is_empty() {
            return Ok(ItemOutcome::Invalid { input, errors });
        }

        let item = self.items.update(id, &input.to_create(category_id)?).await?;
        info!(item_id = %item.id, name = %item.name, "Item updated");
        Ok(ItemOutcome::Saved(item))
    }

    /// Fetches an item for the delete confirmation view.
    ///
    /// Returns `None` when the item does not exist; the caller redirects
    /// to the list view instead of erroring.
    pub async fn delete_view(&self, id: Uuid) -> AppResult<Option<Item>> {
        self.items.find_by_id(id).await
    }

    /// Deletes an item, returning the owning category id for the redirect.
    ///
    /// Returns `None` when the item does not exist; the caller redirects
    /// to the list view.
    pub async fn delete(&self, id: Uuid) -> AppResult<Option<Uuid>> {
        let Some(item) = self.items.find_by_id(id).await? else {
            return Ok(None);
        };
        let category_id = item.category_id;
        self.items.delete(id).await?;
        info!(item_id = %id, category_id = %category_id, "Item deleted");
        Ok(Some(category_id))
    }
}
