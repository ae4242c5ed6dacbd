//! The repository actor: owns the collection and the identity counter.

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::model::{Product, ProductCreate, ProductPatch};
use crate::repository::client::RepositoryClient;
use crate::repository::error::RepositoryError;
use crate::repository::message::RepositoryRequest;

/// The actor that exclusively owns the product collection.
///
/// The store is a `Vec` rather than a map: the listing contract is insertion
/// order, lookups are a linear scan on id equality, and deletion preserves
/// the relative order of the survivors. `next_id` starts at 1, advances on
/// every successful create and never moves backwards, so ids are unique for
/// the lifetime of the process even across deletes.
pub struct ProductRepository {
    receiver: mpsc::Receiver<RepositoryRequest>,
    store: Vec<Product>,
    next_id: u64,
}

impl ProductRepository {
    /// Creates the actor and its client.
    ///
    /// `buffer_size` is the capacity of the request channel; senders wait
    /// when it is full.
    pub fn new(buffer_size: usize) -> (Self, RepositoryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
            next_id: 1,
        };
        (actor, RepositoryClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// Requests are processed strictly one at a time, which is what makes
    /// the unlocked `store` and `next_id` safe under concurrent callers.
    pub async fn run(mut self) {
        info!("Repository started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RepositoryRequest::List { respond_to } => {
                    debug!(size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                RepositoryRequest::Get { id, respond_to } => {
                    let item = self.store.iter().find(|p| p.id == id).cloned();
                    debug!(id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                RepositoryRequest::Create { params, respond_to } => {
                    debug!(?params, "Create");
                    let id = self.next_id;
                    self.next_id += 1;

                    let product = Product::new(id, params.name, params.quantity, params.price);
                    self.store.push(product.clone());
                    info!(id, size = self.store.len(), "Created");
                    let _ = respond_to.send(Ok(product));
                }
                RepositoryRequest::Update {
                    id,
                    patch,
                    respond_to,
                } => {
                    debug!(id, ?patch, "Update");
                    if let Some(item) = self.store.iter_mut().find(|p| p.id == id) {
                        apply_patch(item, patch);
                        info!(id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(id, "Not found");
                        let _ = respond_to.send(Err(RepositoryError::NotFound(id)));
                    }
                }
                RepositoryRequest::Delete { id, respond_to } => {
                    debug!(id, "Delete");
                    if let Some(index) = self.store.iter().position(|p| p.id == id) {
                        // Vec::remove shifts the tail left, keeping order.
                        self.store.remove(index);
                        info!(id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(id, "Not found");
                        let _ = respond_to.send(Err(RepositoryError::NotFound(id)));
                    }
                }
            }
        }

        info!(size = self.store.len(), "Repository shut down");
    }
}

/// Merges a patch into an existing record, field by field.
///
/// Only `Some` fields overwrite; the id is never touched.
fn apply_patch(product: &mut Product, patch: ProductPatch) {
    if let Some(name) = patch.name {
        product.name = name;
    }
    if let Some(quantity) = patch.quantity {
        product.quantity = quantity;
    }
    if let Some(price) = patch.price {
        product.price = price;
    }
}
