//! # Order Messages
//!
//! The request type sent from [`OrderClient`](crate::clients::OrderClient) to
//! [`OrderActor`](super::OrderActor). There is one variant per registry operation;
//! each carries a one-shot channel for the reply.

use crate::model::{Order, OrderId};
use crate::registry::RegistryResult;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<RegistryResult<T>>;

#[derive(Debug)]
pub enum OrderRequest {
    Create {
        creation_time: f64,
        respond_to: Response<OrderId>,
    },
    Cancel {
        id: OrderId,
        respond_to: Response<()>,
    },
    Deliver {
        id: OrderId,
        delivery_time: f64,
        respond_to: Response<()>,
    },
    Get {
        id: OrderId,
        respond_to: Response<Option<Order>>,
    },
    InProgressCount {
        respond_to: Response<usize>,
    },
    AverageDeliveryTime {
        respond_to: Response<f64>,
    },
    Capacity {
        respond_to: Response<usize>,
    },
}
