//! Pure data structures for orders and their lifecycle states.

pub mod order;

pub use order::*;
