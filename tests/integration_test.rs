use order_registry::config::RegistryConfig;
use order_registry::lifecycle::OrderSystem;
use order_registry::model::{OrderId, OrderStatus};
use order_registry::order_actor::OrderError;
use order_registry::registry::{ErrorKind, RegistryError};

/// Full end-to-end test through the running actor.
#[tokio::test]
async fn test_full_order_system_integration() {
    let system = OrderSystem::new(&RegistryConfig::with_capacity(5));
    let client = &system.order_client;

    assert_eq!(client.capacity().await.unwrap(), 5);

    let first = client.create_order(0.0).await.expect("Failed to create order");
    let second = client.create_order(1.0).await.expect("Failed to create order");
    client.cancel_order(first).await.expect("Failed to cancel");
    client.deliver_order(second, 4.5).await.expect("Failed to deliver");

    let third = client.create_order(2.0).await.unwrap();
    let fourth = client.create_order(3.0).await.unwrap();
    client.cancel_order(fourth).await.unwrap();
    client.deliver_order(third, 4.5).await.unwrap();

    for t in [4.0, 5.0, 6.0] {
        client.create_order(t).await.unwrap();
    }

    assert_eq!(client.get_in_progress_count().await.unwrap(), 3);
    assert_eq!(client.get_average_delivery_time().await.unwrap(), 3.0);

    let delivered = client
        .get_order(second)
        .await
        .expect("Failed to get order")
        .expect("Order not found");
    assert_eq!(delivered.status, OrderStatus::Delivered);
    assert_eq!(delivered.creation_time, 1.0);

    let cancelled = client.get_order(first).await.unwrap().unwrap();
    assert_eq!(cancelled.status, OrderStatus::Cancelled);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_errors_pass_through_unchanged() {
    let system = OrderSystem::new(&RegistryConfig::with_capacity(1));
    let client = &system.order_client;

    let err = client.create_order(-1.0).await.unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::InvalidInput));

    let id = client.create_order(0.0).await.unwrap();
    let err = client.create_order(1.0).await.unwrap_err();
    assert_eq!(
        err,
        OrderError::Registry(RegistryError::CapacityExceeded {
            capacity: 1,
            in_progress: 1
        })
    );

    let missing = OrderId(99);
    let err = client.deliver_order(missing, 1.0).await.unwrap_err();
    assert_eq!(err, OrderError::Registry(RegistryError::NotFound(missing)));

    client.cancel_order(id).await.unwrap();
    let err = client.cancel_order(id).await.unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::InvalidTransition));

    let err = client.get_average_delivery_time().await.unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::NoData));

    assert!(client.get_order(missing).await.unwrap().is_none());

    system.shutdown().await.unwrap();
}

/// Concurrent creations through cloned clients must never exceed capacity.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creation_respects_capacity() {
    let capacity = 8;
    let system = OrderSystem::new(&RegistryConfig::with_capacity(capacity));

    let mut handles = vec![];
    for i in 0..50 {
        let client = system.order_client.clone();
        handles.push(tokio::spawn(async move { client.create_order(i as f64).await }));
    }

    let mut successful = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successful += 1,
            Err(e) => {
                assert_eq!(e.kind(), Some(ErrorKind::CapacityExceeded));
                rejected += 1;
            }
        }
    }

    assert_eq!(successful, capacity, "Exactly `capacity` creations should succeed");
    assert_eq!(rejected, 50 - capacity);
    assert_eq!(
        system.order_client.get_in_progress_count().await.unwrap(),
        capacity
    );

    system.shutdown().await.unwrap();
}

/// Concurrent deliveries of the same order: exactly one wins.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_deliveries_apply_once() {
    let system = OrderSystem::new(&RegistryConfig::with_capacity(1));
    let id = system.order_client.create_order(0.0).await.unwrap();

    let mut handles = vec![];
    for i in 0..10 {
        let client = system.order_client.clone();
        handles.push(tokio::spawn(async move {
            client.deliver_order(id, 1.0 + i as f64).await
        }));
    }

    let mut delivered = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => delivered += 1,
            Err(e) => assert_eq!(e.kind(), Some(ErrorKind::InvalidTransition)),
        }
    }

    assert_eq!(delivered, 1);
    assert_eq!(system.order_client.get_in_progress_count().await.unwrap(), 0);
    assert!(system.order_client.get_average_delivery_time().await.is_ok());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_client_fails_when_actor_is_gone() {
    let (actor, client) = order_registry::order_actor::new(&RegistryConfig::default());
    drop(actor);

    let err = client.create_order(0.0).await.unwrap_err();
    assert_eq!(err, OrderError::ActorClosed);
}
