//! Category use cases.

pub mod service;

pub use service::{
    CategoryDeletion, CategoryFields, CategoryInput, CategoryOutcome, CategoryService,
};
