use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Lifecycle state of an order.
///
/// ```text
///              ┌────────────┐
///              │ InProgress │
///              └─────┬──────┘
///          ┌─────────┴─────────┐
///          ▼                   ▼
///    ┌───────────┐       ┌───────────┐
///    │ Cancelled │       │ Delivered │
///    └───────────┘       └───────────┘
///     (terminal)          (terminal)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    InProgress,
    Cancelled,
    Delivered,
}

impl OrderStatus {
    /// Returns true once the order can no longer change state.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Cancelled | OrderStatus::Delivered)
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Delivered => "delivered",
        };
        f.write_str(s)
    }
}

/// Represents a customer order tracked by the [`OrderRegistry`](crate::registry::OrderRegistry).
///
/// Orders are only ever created by the registry, which assigns the [`OrderId`] and
/// the initial [`OrderStatus::InProgress`] status. Callers receive clones, never
/// references into the registry's storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    pub creation_time: f64,
}

impl Order {
    /// Creates a new in-progress Order.
    ///
    /// # Arguments
    /// * `id` - Unique identifier allocated by the registry
    /// * `creation_time` - Caller-supplied timestamp, already validated as finite and non-negative
    pub fn new(id: OrderId, creation_time: f64) -> Self {
        Self {
            id,
            status: OrderStatus::InProgress,
            creation_time,
        }
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == OrderStatus::InProgress
    }
}
