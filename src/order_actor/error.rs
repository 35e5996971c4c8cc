//! Error types for the Order actor.

use crate::registry::{ErrorKind, RegistryError};
use thiserror::Error;

/// Errors returned by [`OrderClient`](crate::clients::OrderClient).
///
/// Registry failures pass through unchanged; the remaining variants describe the
/// channel between client and actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The registry rejected the operation.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The actor has stopped and no longer accepts requests.
    #[error("Actor closed")]
    ActorClosed,

    /// The actor accepted the request but never answered it.
    #[error("Actor dropped response channel")]
    ActorDropped,
}

impl OrderError {
    /// The registry error kind, if the registry produced this error.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            OrderError::Registry(e) => Some(e.kind()),
            OrderError::ActorClosed | OrderError::ActorDropped => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderId;

    #[test]
    fn test_registry_error_converts() {
        let err: OrderError = RegistryError::NotFound(OrderId(2)).into();
        assert_eq!(err.kind(), Some(ErrorKind::NotFound));
        assert_eq!(err.to_string(), "Order not found: order_2");
    }

    #[test]
    fn test_channel_errors_have_no_kind() {
        assert_eq!(OrderError::ActorClosed.kind(), None);
        assert_eq!(OrderError::ActorDropped.kind(), None);
    }
}
