//! `stockroom-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no terminal or storage concerns).

pub mod entity;
pub mod error;
pub mod validation;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use validation::{DATE_FORMAT, is_valid_date, parse_date, parse_integer, parse_non_negative};
pub use value_object::ValueObject;
