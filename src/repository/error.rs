//! Repository error type.

use thiserror::Error;

/// Errors surfaced by repository operations.
///
/// `NotFound` is the only business outcome; the channel variants occur when
/// the actor task is gone and a request cannot be delivered or answered. The
/// HTTP layer maps `NotFound` to 404 and everything else to a generic 500.
#[derive(Debug, Error, PartialEq)]
pub enum RepositoryError {
    /// No product with the given id exists.
    #[error("product {0} not found")]
    NotFound(u64),

    /// The actor's request channel is closed.
    #[error("repository actor closed")]
    ActorClosed,

    /// The actor dropped the response channel without replying.
    #[error("repository actor dropped response channel")]
    ActorDropped,
}
