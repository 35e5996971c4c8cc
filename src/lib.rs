//! # Order Registry
//!
//! > **A capacity-bounded order lifecycle tracker.**
//!
//! Orders move through a three-state lifecycle:
//!
//! ```text
//! InProgress ──► Cancelled
//!      │
//!      └──────► Delivered
//! ```
//!
//! The registry caps how many orders may be in progress at once and reports two
//! metrics: the current in-progress count and the average delivery latency
//! (`delivery_time - creation_time`) over all delivered orders.
//!
//! ## 🏗️ Layers
//!
//! ### 1. The Core ([`registry`])
//! [`OrderRegistry`](registry::OrderRegistry) is a plain synchronous struct holding
//! the state machine and the capacity accounting. Errors are a typed taxonomy,
//! [`RegistryError`](registry::RegistryError), with a fieldless
//! [`ErrorKind`](registry::ErrorKind) for branching.
//!
//! ### 2. The Actor ([`order_actor`])
//! [`OrderActor`](order_actor::OrderActor) owns one registry inside a Tokio task and
//! handles requests sequentially, so creation's capacity check and increment can never
//! interleave with another request.
//!
//! ### 3. The Interface ([`clients`])
//! [`OrderClient`](clients::OrderClient) is the cloneable async handle: one method per
//! registry operation.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`OrderSystem`](lifecycle::OrderSystem) spawns the actor from a
//! [`RegistryConfig`](config::RegistryConfig) and shuts it down gracefully.
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use order_registry::registry::{ErrorKind, OrderRegistry};
//!
//! let mut registry = OrderRegistry::new(2);
//! let first = registry.create_order(0.0).unwrap();
//! let second = registry.create_order(1.0).unwrap();
//! assert_eq!(registry.create_order(2.0).unwrap_err().kind(), ErrorKind::CapacityExceeded);
//!
//! registry.cancel_order(first).unwrap();
//! registry.deliver_order(second, 4.0).unwrap();
//! assert_eq!(registry.get_in_progress_count(), 0);
//! assert_eq!(registry.get_average_delivery_time().unwrap(), 3.0);
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod registry;
