//! # System Lifecycle
//!
//! Starts and stops the Order actor and initializes logging.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` after the queue drains
//! 3. **Actor logs final state** - order, in-progress and delivered counts
//! 4. **Await completion** - [`OrderSystem::shutdown`] waits for the task to finish
//!
//! Requests already queued when the last client is dropped are still processed.

pub mod order_system;
pub mod tracing;

pub use order_system::*;
pub use tracing::*;
