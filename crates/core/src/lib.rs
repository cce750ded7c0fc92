// Maitre Core - Domain Logic
// NO terminal or argument-parsing dependencies (hexagonal split)

pub mod application;
pub mod domain;
pub mod error;

pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
