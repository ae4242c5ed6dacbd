//! # Product Repository
//!
//! Sole authority over the product collection and identity assignment.
//!
//! The repository is implemented as an actor: [`ProductRepository`] owns the
//! backing `Vec<Product>` and the identity counter, and processes
//! [`RepositoryRequest`] messages sequentially in its own tokio task. Callers
//! hold a cloneable [`RepositoryClient`] and never touch the collection
//! directly.
//!
//! ## Concurrency model
//!
//! Every mutation is routed through the one serializing task, so operations
//! run to completion one at a time and no message can observe a half-applied
//! write. No `Mutex` or `RwLock` is needed: exclusive ownership of the store
//! lives inside the task.
//!
//! ## Not-found is an outcome, not an exception
//!
//! `get` returns `Option<Product>`; absence is a normal result. `update` and
//! `delete` report [`RepositoryError::NotFound`] so the HTTP layer can map it
//! to a 404, distinct from the channel faults that map to a 500.

mod actor;
mod client;
mod error;
mod message;

pub use actor::ProductRepository;
pub use client::RepositoryClient;
pub use error::RepositoryError;
pub use message::{RepositoryRequest, Response};

/// Creates a new repository actor and its client.
///
/// The actor must be started with [`ProductRepository::run`], typically via
/// `tokio::spawn`; see [`crate::lifecycle::ProductSystem`].
pub fn new() -> (ProductRepository, RepositoryClient) {
    ProductRepository::new(32)
}
