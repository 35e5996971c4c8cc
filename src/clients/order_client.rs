//! # Order Client
//!
//! Provides a high-level async API for interacting with the
//! [`OrderActor`](crate::order_actor::OrderActor). Each method sends one
//! [`OrderRequest`] and waits for the actor's reply.
use crate::model::{Order, OrderId};
use crate::order_actor::{OrderError, OrderRequest, Response};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
///
/// Cheap to clone: it holds only the channel sender. The actor stops once every
/// clone has been dropped.
#[derive(Clone, Debug)]
pub struct OrderClient {
    sender: mpsc::Sender<OrderRequest>,
}

impl OrderClient {
    pub fn new(sender: mpsc::Sender<OrderRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn create_order(&self, creation_time: f64) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        self.request(|respond_to| OrderRequest::Create {
            creation_time,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: OrderId) -> Result<(), OrderError> {
        debug!("Sending request");
        self.request(|respond_to| OrderRequest::Cancel { id, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn deliver_order(&self, id: OrderId, delivery_time: f64) -> Result<(), OrderError> {
        debug!("Sending request");
        self.request(|respond_to| OrderRequest::Deliver {
            id,
            delivery_time,
            respond_to,
        })
        .await
    }

    /// Fetch a snapshot of an order by ID.
    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        self.request(|respond_to| OrderRequest::Get { id, respond_to })
            .await
    }

    pub async fn get_in_progress_count(&self) -> Result<usize, OrderError> {
        self.request(|respond_to| OrderRequest::InProgressCount { respond_to })
            .await
    }

    pub async fn get_average_delivery_time(&self) -> Result<f64, OrderError> {
        self.request(|respond_to| OrderRequest::AverageDeliveryTime { respond_to })
            .await
    }

    pub async fn capacity(&self) -> Result<usize, OrderError> {
        self.request(|respond_to| OrderRequest::Capacity { respond_to })
            .await
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(Response<T>) -> OrderRequest,
    ) -> Result<T, OrderError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| OrderError::ActorClosed)?;
        let result = response.await.map_err(|_| OrderError::ActorDropped)?;
        Ok(result?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_closed_channel_reports_actor_closed() {
        let (sender, receiver) = mpsc::channel(1);
        drop(receiver);
        let client = OrderClient::new(sender);

        let err = client.create_order(0.0).await.unwrap_err();
        assert_eq!(err, OrderError::ActorClosed);
    }

    #[tokio::test]
    async fn test_dropped_responder_reports_actor_dropped() {
        let (sender, mut receiver) = mpsc::channel(1);
        let client = OrderClient::new(sender);

        let server = tokio::spawn(async move {
            // Receive and drop without answering.
            let _ = receiver.recv().await;
        });

        let err = client.get_in_progress_count().await.unwrap_err();
        assert_eq!(err, OrderError::ActorDropped);
        server.await.unwrap();
    }
}
