//! Category CRUD operations with name uniqueness and dependent-item checks.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use stockroom_core::error::AppError;
use stockroom_core::result::AppResult;
use stockroom_database::repositories::category::CategoryRepository;
use stockroom_database::repositories::item::ItemRepository;
use stockroom_entity::category::{Category, CreateCategory};
use stockroom_entity::item::Item;

use crate::validation::{Check, FieldError, RuleSet, sanitize};

/// Raw text fields of a category create/update submission.
#[derive(Debug, Clone, Default)]
pub struct CategoryFields {
    /// The `categoryName` form field.
    pub name: String,
    /// The `description` form field.
    pub description: String,
}

/// Sanitized category form values, re-rendered into the form on failure.
#[derive(Debug, Clone, Default)]
pub struct CategoryInput {
    /// Trimmed and escaped name.
    pub name: String,
    /// Trimmed and escaped description.
    pub description: String,
}

impl CategoryInput {
    fn from_fields(fields: &CategoryFields) -> Self {
        Self {
            name: sanitize(&fields.name),
            description: sanitize(&fields.description),
        }
    }

    fn record(&self) -> [(&'static str, &str); 2] {
        [
            ("categoryName", self.name.as_str()),
            ("description", self.description.as_str()),
        ]
    }
}

/// Result of a category create or update submission.
#[derive(Debug)]
pub enum CategoryOutcome {
    /// The category was persisted; redirect to its detail page.
    Saved(Category),
    /// Validation rejected the submission; re-render the form.
    Invalid {
        /// Sanitized values to re-fill the form with.
        input: CategoryInput,
        /// All collected field errors, in rule order.
        errors: Vec<FieldError>,
    },
}

/// Result of a category delete submission.
#[derive(Debug)]
pub enum CategoryDeletion {
    /// The category is gone; redirect to the list page.
    Deleted,
    /// Items still reference the category; re-render the confirmation.
    Blocked {
        /// The category that was not deleted.
        category: Category,
        /// The items blocking deletion.
        items: Vec<Item>,
    },
}

fn category_rules() -> RuleSet {
    RuleSet::new(vec![
        ("categoryName", Check::NotEmpty, "Category Name must be specified."),
        (
            "categoryName",
            Check::LettersDigitsSpaces,
            "Category Name must contain only letters, numbers, or spaces.",
        ),
        ("description", Check::NotEmpty, "Description must be specified."),
        (
            "description",
            Check::LettersDigitsSpaces,
            "Description must contain only letters, numbers, or spaces.",
        ),
    ])
}

/// Manages category list, detail, create, update, and delete use cases.
#[derive(Debug, Clone)]
pub struct CategoryService {
    /// Category repository.
    categories: Arc<CategoryRepository>,
    /// Item repository, for dependent-item lookups.
    items: Arc<ItemRepository>,
}

impl CategoryService {
    /// Creates a new category service.
    pub fn new(categories: Arc<CategoryRepository>, items: Arc<ItemRepository>) -> Self {
        Self { categories, items }
    }

    /// Lists all categories ordered by name.
    pub async fn list(&self) -> AppResult<Vec<Category>> {
        self.categories.find_all().await
    }

    /// Gets a category by ID, failing when it does not exist.
    pub async fn get(&self, id: Uuid) -> AppResult<Category> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found"))
    }

    /// Gets a category and its items, fetched concurrently.
    pub async fn detail(&self, id: Uuid) -> AppResult<(Category, Vec<Item>)> {
        let (category, items) = tokio::try_join!(
            self.categories.find_by_id(id),
            self.items.find_by_category(id),
        )?;
        let category = category.ok_or_else(|| AppError::not_found("Category not found"))?;
        Ok((category, items))
    }

    /// Validates and persists a new category.
    ///
    /// The duplicate-name lookup runs only once field validation passes,
    /// and a hit is reported as one more field error rather than a fault.
    pub async fn create(&self, fields: &CategoryFields) -> AppResult<CategoryOutcome> {
        let input = CategoryInput::from_fields(fields);
        let mut errors = category_rules().check(&input.record());

        if errors.is_empty() {
            if self.categories.find_by_name(&input.name).await?.is_some() {
                errors.push(FieldError {
                    field: "categoryName",
                    message: "Category with the same name already exists.".to_string(),
                    value: input.name.clone(),
                });
            } else {
                let category = self
                    .categories
                    .create(&CreateCategory {
                        name: input.name.clone(),
                        description: input.description.clone(),
                    })
                    .await?;
                info!(category_id = %category.id, name = %category.name, "Category created");
                return Ok(CategoryOutcome::Saved(category));
            }
        }

        Ok(CategoryOutcome::Invalid { input, errors })
    }

    /// Validates and persists an update to an existing category.
    ///
    /// The identifier is never changed, and no uniqueness re-check runs
    /// on this path.
    pub async fn update(&self, id: Uuid, fields: &CategoryFields) -> AppResult<CategoryOutcome> {
        let input = CategoryInput::from_fields(fields);
        let errors = category_rules().check(&input.record());

        if !errors.is_empty() {
            return Ok(CategoryOutcome::Invalid { input, errors });
        }

        let category = self
            .categories
            .update(
                id,
                &CreateCategory {
                    name: input.name.clone(),
                    description: input.description.clone(),
                },
            )
            .await?;
        info!(category_id = %category.id, name = %category.name, "Category updated");
        Ok(CategoryOutcome::Saved(category))
    }

    /// Fetches a category and its items for the delete confirmation view.
    ///
    /// Returns `None` when the category does not exist; the caller
    /// redirects to the list view instead of erroring.
    pub async fn delete_view(&self, id: Uuid) -> AppResult<Option<(Category, Vec<Item>)>> {
        let (category, items) = tokio::try_join!(
            self.categories.find_by_id(id),
            self.items.find_by_category(id),
        )?;
        Ok(category.map(|category| (category, items)))
    }

    /// Deletes a category unless items still reference it.
    ///
    /// `id` addresses the confirmation re-fetch (URL path); `target` is the
    /// id the delete statement is keyed off (the `categoryId` form field).
    pub async fn delete(&self, id: Uuid, target: Uuid) -> AppResult<CategoryDeletion> {
        let (category, items) = tokio::try_join!(
            self.categories.find_by_id(id),
            self.items.find_by_category(id),
        )?;

        if !items.is_empty() {
            let category =
                category.ok_or_else(|| AppError::not_found("Category not found"))?;
            return Ok(CategoryDeletion::Blocked { category, items });
        }

        self.categories.delete(target).await?;
        info!(category_id = %target, "Category deleted");
        Ok(CategoryDeletion::Deleted)
    }
}
