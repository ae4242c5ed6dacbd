//! Pure data structures: the [`Product`] entity and its create/patch DTOs.

pub mod product;

pub use product::*;
