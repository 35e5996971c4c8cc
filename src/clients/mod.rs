//! Type-safe wrappers around the order actor's message channel.

pub mod order_client;

pub use order_client::*;
