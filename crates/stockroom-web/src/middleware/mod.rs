//! Router middleware.

pub mod logging;
