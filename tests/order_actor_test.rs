use order_registry::clients::OrderClient;
use order_registry::model::{Order, OrderId, OrderStatus};
use order_registry::order_actor::mock::MockOrderActor;
use order_registry::order_actor::OrderError;
use order_registry::registry::{ErrorKind, RegistryError};

/// Caller under test: places an order and delivers it immediately, then reports the
/// average latency.
async fn place_and_deliver(
    client: &OrderClient,
    creation_time: f64,
    delivery_time: f64,
) -> Result<f64, OrderError> {
    let id = client.create_order(creation_time).await?;
    client.deliver_order(id, delivery_time).await?;
    client.get_average_delivery_time().await
}

/// Mocked actor: tests the caller's flow without a real registry.
#[tokio::test]
async fn test_place_and_deliver_with_mocked_actor() {
    let mut mock = MockOrderActor::new();
    mock.expect_create().return_ok(OrderId(1));
    mock.expect_deliver(OrderId(1)).return_ok(());
    mock.expect_average_delivery_time().return_ok(2.0);

    let client = mock.client();
    let average = place_and_deliver(&client, 1.0, 3.0).await.unwrap();
    assert_eq!(average, 2.0);

    mock.verify();
}

#[tokio::test]
async fn test_capacity_error_stops_the_flow() {
    let mut mock = MockOrderActor::new();
    mock.expect_create().return_err(RegistryError::CapacityExceeded {
        capacity: 5,
        in_progress: 5,
    });

    let client = mock.client();
    let err = place_and_deliver(&client, 1.0, 3.0).await.unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::CapacityExceeded));

    // No deliver or average request may follow a failed create.
    mock.verify();
}

#[tokio::test]
async fn test_get_order_with_mocked_actor() {
    let mut mock = MockOrderActor::new();
    let order = Order {
        id: OrderId(3),
        status: OrderStatus::Cancelled,
        creation_time: 2.0,
    };
    mock.expect_get(OrderId(3)).return_ok(Some(order.clone()));
    mock.expect_in_progress_count().return_ok(0);

    let client = mock.client();
    assert_eq!(client.get_order(OrderId(3)).await.unwrap(), Some(order));
    assert_eq!(client.get_in_progress_count().await.unwrap(), 0);

    mock.verify();
}
