//! Message types exchanged between the client and the actor.

use tokio::sync::oneshot;

use crate::model::{Product, ProductCreate, ProductPatch};
use crate::repository::RepositoryError;

/// One-shot response channel carried inside every request.
pub type Response<T> = oneshot::Sender<Result<T, RepositoryError>>;

/// A request to the repository actor.
///
/// The variants mirror the five repository operations. Each carries a
/// `respond_to` sender so the actor can reply directly to the caller that
/// issued the request.
#[derive(Debug)]
pub enum RepositoryRequest {
    /// Full ordered listing. Always succeeds; an empty Vec is a valid result.
    List {
        respond_to: Response<Vec<Product>>,
    },
    /// Lookup by id. Absence is `Ok(None)`, never an error.
    Get {
        id: u64,
        respond_to: Response<Option<Product>>,
    },
    /// Allocate the next id, append the record, reply with the new product.
    Create {
        params: ProductCreate,
        respond_to: Response<Product>,
    },
    /// Field-level merge into an existing record.
    Update {
        id: u64,
        patch: ProductPatch,
        respond_to: Response<Product>,
    },
    /// Remove a record, preserving the relative order of the rest.
    Delete { id: u64, respond_to: Response<()> },
}
