//! Repository implementations for the Stockroom entities.

pub mod category;
pub mod item;

pub use category::CategoryRepository;
pub use item::ItemRepository;
