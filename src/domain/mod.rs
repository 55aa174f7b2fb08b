//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod sorting;

pub use entities::*;
pub use error::DomainError;
pub use sorting::{bubble_sort_by, sort_ascending, sort_descending, SortStrategy};
