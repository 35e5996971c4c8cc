//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! The subscriber uses a compact format without the module prefix
//! (`with_target(false)`) and reads its filter from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run     # created / transition / shutdown events
//! RUST_LOG=debug cargo run    # every request, plus registry-level details
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup with the configured capacity, shutdown with final counts
//! - **Operations**: each create / cancel / deliver with the order id and the resulting
//!   in-progress count
//! - **Errors**: rejected operations at `warn`, with the error rendered as `error=...`
//! - **Client Calls**: `#[instrument]` spans named after the client method
//!
//! With `RUST_LOG=info` a short session looks like:
//!
//! ```text
//! INFO Actor started capacity=5
//! INFO Created id=order_1 in_progress=1
//! INFO Transition ok id=order_1 outcome="Delivered" in_progress=0
//! WARN Transition failed id=order_1 outcome="Cancelled" error=Order order_1 cannot be cancelled: already delivered
//! INFO Shutdown orders=1 in_progress=0 delivered=1
//! ```
//!
//! The actor runs in its own task, so its lines are not nested under the client spans.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
