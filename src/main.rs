//! # Order Registry Demo
//!
//! Starts an [`OrderSystem`] from the environment (`ORDER_REGISTRY_CAPACITY`,
//! `ORDER_REGISTRY_BUFFER_SIZE`) and replays a short order history, logging the
//! resulting metrics.

use order_registry::config::RegistryConfig;
use order_registry::lifecycle::{setup_tracing, OrderSystem};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = RegistryConfig::from_env().map_err(|e| e.to_string())?;
    info!(capacity = config.capacity, "Starting order registry demo");

    let system = OrderSystem::new(&config);
    let client = system.order_client.clone();

    let span = tracing::info_span!("order_history");
    let history = async {
        let first = client.create_order(0.0).await?;
        let second = client.create_order(1.0).await?;
        client.cancel_order(first).await?;
        client.deliver_order(second, 4.5).await?;

        let third = client.create_order(2.0).await?;
        let fourth = client.create_order(3.0).await?;
        client.cancel_order(fourth).await?;
        client.deliver_order(third, 4.5).await?;

        for t in [4.0, 5.0, 6.0] {
            client.create_order(t).await?;
        }

        // Rejected: already cancelled.
        if let Err(e) = client.cancel_order(first).await {
            info!(error = %e, "Second cancel rejected as expected");
        }

        let in_progress = client.get_in_progress_count().await?;
        let average = client.get_average_delivery_time().await?;
        Ok::<_, order_registry::order_actor::OrderError>((in_progress, average))
    }
    .instrument(span)
    .await;

    match history {
        Ok((in_progress, average)) => {
            info!(in_progress, average_delivery_time = average, "Order history replayed")
        }
        Err(e) => error!(error = %e, "Order history failed"),
    }

    drop(client);
    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Application completed successfully");
    Ok(())
}
