//! # stockroom-entity
//!
//! Domain entity models for Stockroom. Every struct in this crate
//! represents a database table row or a creation payload. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod category;
pub mod item;
