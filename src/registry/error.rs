//! Error types for the order registry.

use crate::model::{OrderId, OrderStatus};
use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur during registry operations.
///
/// Every failing call leaves the registry exactly as it was before the call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistryError {
    /// A caller-supplied value is outside its domain.
    #[error("Invalid {field}: {value}")]
    InvalidInput { field: &'static str, value: f64 },

    /// Creation attempted while the in-progress limit is reached.
    #[error("Out of capacity: {in_progress}/{capacity} orders in progress")]
    CapacityExceeded { capacity: usize, in_progress: usize },

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// The order is already in a terminal state.
    #[error("Order {id} cannot be {attempted}: already {current}")]
    InvalidTransition {
        id: OrderId,
        current: OrderStatus,
        attempted: OrderStatus,
    },

    /// A metric was requested before any qualifying data exists.
    #[error("No data: {0}")]
    NoData(&'static str),
}

/// Fieldless discriminant of [`RegistryError`] for programmatic branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    CapacityExceeded,
    NotFound,
    InvalidTransition,
    NoData,
}

impl RegistryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::InvalidInput { .. } => ErrorKind::InvalidInput,
            RegistryError::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
            RegistryError::NotFound(_) => ErrorKind::NotFound,
            RegistryError::InvalidTransition { .. } => ErrorKind::InvalidTransition,
            RegistryError::NoData(_) => ErrorKind::NoData,
        }
    }
}
