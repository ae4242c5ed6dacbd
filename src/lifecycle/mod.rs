//! # Lifecycle & Orchestration
//!
//! Starts the repository actor, hands out its client, and coordinates a
//! graceful shutdown. Also owns tracing setup and the demo seed catalog.

pub mod tracing;

pub use self::tracing::setup_tracing;

use ::tracing::info;
use tokio::task::JoinHandle;

use crate::model::ProductCreate;
use crate::repository::{self, RepositoryClient, RepositoryError};

/// The runtime orchestrator for the product service.
///
/// Owns the repository actor's task handle and the client the HTTP layer
/// clones from. Constructing a `ProductSystem` per test gives each test a
/// fully isolated collection and identity counter; there is no ambient
/// global state anywhere.
pub struct ProductSystem {
    /// Client for the repository actor.
    pub repository: RepositoryClient,

    /// Task handle for the running actor, used for graceful shutdown.
    handle: JoinHandle<()>,
}

impl ProductSystem {
    /// Spawns the repository actor and returns the running system.
    pub fn new() -> Self {
        let (actor, repository) = repository::new();
        let handle = tokio::spawn(actor.run());
        Self { repository, handle }
    }

    /// Gracefully shuts the system down.
    ///
    /// Dropping the client closes the request channel; the actor drains any
    /// queued messages, logs its final state and exits. Errors only if the
    /// actor task panicked.
    pub async fn shutdown(self) -> Result<(), tokio::task::JoinError> {
        info!("Shutting down system");
        drop(self.repository);
        self.handle.await
    }
}

impl Default for ProductSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Seeds the three-record demo catalog through the regular create path,
/// yielding ids 1 through 3 and leaving the counter at 4.
pub async fn seed_demo_catalog(repository: &RepositoryClient) -> Result<(), RepositoryError> {
    let seed = [
        ("Notebook Dell", 10.0, 3500.0),
        ("Mouse Logitech", 25.0, 120.0),
        ("Teclado Mecânico", 15.0, 450.0),
    ];
    for (name, quantity, price) in seed {
        repository
            .create(ProductCreate {
                name: name.to_string(),
                quantity,
                price,
            })
            .await?;
    }
    info!("Seeded demo catalog");
    Ok(())
}
