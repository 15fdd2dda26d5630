//! Item use cases.

pub mod service;

pub use service::{ItemFields, ItemInput, ItemOutcome, ItemService};
