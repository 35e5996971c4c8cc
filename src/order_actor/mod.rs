//! # Order Actor
//!
//! Runs an [`OrderRegistry`](crate::registry::OrderRegistry) inside its own Tokio task
//! so that it can be shared across tasks without locks.
//!
//! ## Structure
//!
//! - [`message`] - [`OrderRequest`], one variant per registry operation
//! - [`actor`] - [`OrderActor`], the event loop that owns the registry
//! - [`error`] - [`OrderError`], registry errors plus channel failures
//! - [`mock`] - [`mock::MockOrderActor`] for testing callers in isolation
//! - [`new()`] - Factory function that creates the actor and client

pub mod actor;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::*;
pub use error::*;
pub use message::*;

use crate::clients::OrderClient;
use crate::config::RegistryConfig;

/// Creates a new Order actor and its client.
pub fn new(config: &RegistryConfig) -> (OrderActor, OrderClient) {
    OrderActor::new(config)
}
