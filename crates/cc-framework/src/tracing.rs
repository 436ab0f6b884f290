//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate for
//! a whole process: controllers, typed clients and actor operations all log
//! through it.
//!
//! ## What Gets Traced
//!
//! - **Controller lifecycle**: startup and shutdown, with the final store size
//! - **Remote calls**: every request at `debug`, mutations at `info`
//! - **Rejections**: `warn` with the resource kind, guid and error
//! - **Operations**: one span per actor operation, step failures at `debug`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Mutations only
//! RUST_LOG=info cargo run
//!
//! # Every remote call, with queries and guids
//! RUST_LOG=debug cargo run
//!
//! # Filter to one crate
//! RUST_LOG=cf_actor=debug cargo run
//! ```
//!
//! The compact format hides module paths (`with_target(false)`); every event
//! carries a `kind` field instead.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
