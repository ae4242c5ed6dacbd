//! Cloneable handle for sending requests to the repository actor.

use tokio::sync::{mpsc, oneshot};
use tracing::instrument;

use crate::model::{Product, ProductCreate, ProductPatch};
use crate::repository::error::RepositoryError;
use crate::repository::message::RepositoryRequest;

/// Client half of the repository actor.
///
/// Cheap to clone; every clone talks to the same actor task. When the last
/// clone is dropped the actor's receive loop ends and the task shuts down.
#[derive(Clone)]
pub struct RepositoryClient {
    sender: mpsc::Sender<RepositoryRequest>,
}

impl RepositoryClient {
    pub fn new(sender: mpsc::Sender<RepositoryRequest>) -> Self {
        Self { sender }
    }

    /// Full listing in insertion order.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RepositoryRequest::List { respond_to })
            .await
            .map_err(|_| RepositoryError::ActorClosed)?;
        response.await.map_err(|_| RepositoryError::ActorDropped)?
    }

    /// Fetch by id; `Ok(None)` when no record matches.
    #[instrument(skip(self))]
    pub async fn get(&self, id: u64) -> Result<Option<Product>, RepositoryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RepositoryRequest::Get { id, respond_to })
            .await
            .map_err(|_| RepositoryError::ActorClosed)?;
        response.await.map_err(|_| RepositoryError::ActorDropped)?
    }

    /// Create a record; the actor assigns the id and returns the product.
    #[instrument(skip(self, params))]
    pub async fn create(&self, params: ProductCreate) -> Result<Product, RepositoryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RepositoryRequest::Create { params, respond_to })
            .await
            .map_err(|_| RepositoryError::ActorClosed)?;
        response.await.map_err(|_| RepositoryError::ActorDropped)?
    }

    /// Merge a patch into an existing record and return the updated state.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: u64, patch: ProductPatch) -> Result<Product, RepositoryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RepositoryRequest::Update {
                id,
                patch,
                respond_to,
            })
            .await
            .map_err(|_| RepositoryError::ActorClosed)?;
        response.await.map_err(|_| RepositoryError::ActorDropped)?
    }

    /// Delete by id. The identity counter is unaffected.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: u64) -> Result<(), RepositoryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RepositoryRequest::Delete { id, respond_to })
            .await
            .map_err(|_| RepositoryError::ActorClosed)?;
        response.await.map_err(|_| RepositoryError::ActorDropped)?
    }
}
