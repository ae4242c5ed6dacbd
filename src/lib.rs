//! # Product Service
//!
//! A REST API over a single in-memory collection of product records: list,
//! fetch-by-id, create, partial-update and delete.
//!
//! ## Architecture
//!
//! The collection is never shared: it is exclusively owned by a repository
//! actor, a tokio task that processes requests sequentially off an mpsc
//! channel. Routing every mutation through that one serializing task gives
//! the same atomicity a single-threaded runtime would, without a `Mutex`.
//!
//! The layers, in dependency order:
//!
//! - [`model`]: the [`Product`](model::Product) entity and its DTOs.
//! - [`repository`]: the actor owning the collection and the identity
//!   counter, plus the cloneable [`RepositoryClient`](repository::RepositoryClient).
//! - [`api`]: axum handlers mapping repository outcomes to status codes and
//!   fixed JSON bodies, with create-shape validation at the boundary.
//! - [`lifecycle`]: orchestration ([`ProductSystem`](lifecycle::ProductSystem)),
//!   graceful shutdown, demo seeding and tracing setup.
//!
//! ## Identity rules
//!
//! Ids are positive integers assigned by the repository from a monotonically
//! increasing counter. The counter advances on every successful create and is
//! untouched by deletes, so an id is never reused within a process lifetime.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run        # listens on $PORT, default 3000
//! cargo test
//! ```

pub mod api;
pub mod lifecycle;
pub mod model;
pub mod repository;
