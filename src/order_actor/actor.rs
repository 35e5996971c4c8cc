//! # Order Actor Server
//!
//! This module defines the `OrderActor`, the task that owns the [`OrderRegistry`].
//! It implements the "Server" side of the Actor Model, processing messages
//! sequentially and ensuring exclusive access to the registry.

use crate::clients::OrderClient;
use crate::config::RegistryConfig;
use crate::model::OrderId;
use crate::order_actor::message::OrderRequest;
use crate::registry::{OrderRegistry, RegistryResult};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that owns one [`OrderRegistry`].
///
/// # Concurrency Model
/// Any number of cloned [`OrderClient`]s may send requests at the same time, but the
/// actor handles them one at a time in arrival order. The capacity check and the
/// counter increment in `create_order` therefore run as one unit, and
/// `in_progress_count` can never exceed the configured capacity. No `Mutex` is needed
/// because the registry is owned by this task alone.
///
/// # Usage Pattern
///
/// 1. **Create**: Call `OrderActor::new()` to get the `actor` (server) and `client` (interface).
/// 2. **Run**: Spawn the actor's run loop in a background task.
/// 3. **Stop**: Drop every client; the loop exits once the channel is closed.
///
/// ```rust
/// use order_registry::config::RegistryConfig;
/// use order_registry::order_actor::OrderActor;
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = OrderActor::new(&RegistryConfig::with_capacity(2));
///     let handle = tokio::spawn(actor.run());
///
///     let id = client.create_order(0.0).await.unwrap();
///     client.deliver_order(id, 1.5).await.unwrap();
///     assert_eq!(client.get_average_delivery_time().await.unwrap(), 1.5);
///
///     drop(client);
///     handle.await.unwrap();
/// }
/// ```
pub struct OrderActor {
    receiver: mpsc::Receiver<OrderRequest>,
    registry: OrderRegistry,
}

impl OrderActor {
    /// Creates a new `OrderActor` and its associated `OrderClient`.
    ///
    /// `config.buffer_size` bounds the channel; when it is full, client calls wait
    /// until there is space. A zero `buffer_size` (rejected by
    /// [`RegistryConfig::validate`]) is raised to 1 here.
    pub fn new(config: &RegistryConfig) -> (Self, OrderClient) {
        let (sender, receiver) = mpsc::channel(config.buffer_size.max(1));
        let actor = Self {
            receiver,
            registry: OrderRegistry::new(config.capacity),
        };
        (actor, OrderClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        info!(capacity = self.registry.capacity(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg);
        }

        info!(
            orders = self.registry.orders().len(),
            in_progress = self.registry.get_in_progress_count(),
            delivered = self.registry.delivered_count(),
            "Shutdown"
        );
    }

    fn handle(&mut self, msg: OrderRequest) {
        match msg {
            OrderRequest::Create {
                creation_time,
                respond_to,
            } => {
                debug!(creation_time, "Create");
                let result = self.registry.create_order(creation_time);
                match &result {
                    Ok(id) => info!(
                        %id,
                        in_progress = self.registry.get_in_progress_count(),
                        "Created"
                    ),
                    Err(e) => warn!(creation_time, error = %e, "Create failed"),
                }
                let _ = respond_to.send(result);
            }
            OrderRequest::Cancel { id, respond_to } => {
                debug!(%id, "Cancel");
                let result = self.registry.cancel_order(id);
                self.log_transition(id, "Cancelled", &result);
                let _ = respond_to.send(result);
            }
            OrderRequest::Deliver {
                id,
                delivery_time,
                respond_to,
            } => {
                debug!(%id, delivery_time, "Deliver");
                let result = self.registry.deliver_order(id, delivery_time);
                self.log_transition(id, "Delivered", &result);
                let _ = respond_to.send(result);
            }
            OrderRequest::Get { id, respond_to } => {
                let item = self.registry.get_order(id);
                debug!(%id, found = item.is_some(), "Get");
                let _ = respond_to.send(Ok(item));
            }
            OrderRequest::InProgressCount { respond_to } => {
                let _ = respond_to.send(Ok(self.registry.get_in_progress_count()));
            }
            OrderRequest::AverageDeliveryTime { respond_to } => {
                let result = self.registry.get_average_delivery_time();
                debug!(ok = result.is_ok(), "AverageDeliveryTime");
                let _ = respond_to.send(result);
            }
            OrderRequest::Capacity { respond_to } => {
                let _ = respond_to.send(Ok(self.registry.capacity()));
            }
        }
    }

    fn log_transition(&self, id: OrderId, outcome: &str, result: &RegistryResult<()>) {
        match result {
            Ok(()) => info!(
                %id,
                outcome,
                in_progress = self.registry.get_in_progress_count(),
                "Transition ok"
            ),
            Err(e) => warn!(%id, outcome, error = %e, "Transition failed"),
        }
    }
}
