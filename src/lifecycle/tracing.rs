//! Tracing initialization.
//!
//! Structured logging via the `tracing` crate, filtered by `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run    # lifecycle and mutation events
//! RUST_LOG=debug cargo run   # full request payloads
//! ```

/// Initializes the global subscriber. Call once, at process start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths add noise; the fields carry the context.
        .compact()
        .init();
}
