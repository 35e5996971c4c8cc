use crate::clients::OrderClient;
use crate::config::RegistryConfig;
use crate::order_actor::OrderError;
use tracing::{error, info};

/// The runtime orchestrator for the order registry.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the Order actor
/// - **Configuration**: Building the actor from a [`RegistryConfig`]
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new(&RegistryConfig::with_capacity(5));
///
/// let id = system.order_client.create_order(0.0).await?;
/// system.order_client.deliver_order(id, 2.5).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Task handle for the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl OrderSystem {
    /// Creates the Order actor and spawns it on the current Tokio runtime.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime.
    pub fn new(config: &RegistryConfig) -> Self {
        let (order_actor, order_client) = crate::order_actor::new(config);
        let handle = tokio::spawn(order_actor.run());

        info!(
            capacity = config.capacity,
            buffer_size = config.buffer_size,
            "Order system started"
        );

        Self {
            order_client,
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops this system's client, which closes the channel once every other clone is
    /// gone too, then waits for the actor task to finish. Clones still held elsewhere
    /// keep the actor alive and this call waits for them.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(OrderError::ActorDropped)` if the actor task panicked
    pub async fn shutdown(self) -> Result<(), OrderError> {
        info!("Shutting down system...");

        drop(self.order_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(OrderError::ActorDropped);
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
