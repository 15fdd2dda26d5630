//! # stockroom-service
//!
//! Business logic service layer for Stockroom. Each service orchestrates
//! repositories to implement application-level use cases: form validation,
//! name-uniqueness checks, dependent-record checks, and persistence.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod category;
pub mod item;
pub mod validation;

pub use category::{
    CategoryDeletion, CategoryFields, CategoryInput, CategoryOutcome, CategoryService,
};
pub use item::{ItemFields, ItemInput, ItemOutcome, ItemService};
pub use validation::FieldError;
