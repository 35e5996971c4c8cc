//! # Mock Order Actor
//!
//! Utilities for testing code that depends on an [`OrderClient`] without running a
//! real registry.
//!
//! Create a [`MockOrderActor`], script the replies with the `expect_*` builders, hand
//! [`MockOrderActor::client`] to the code under test, then call
//! [`MockOrderActor::verify`].
//!
//! ```rust
//! use order_registry::model::OrderId;
//! use order_registry::order_actor::mock::MockOrderActor;
//! use order_registry::registry::RegistryError;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockOrderActor::new();
//!     mock.expect_create().return_ok(OrderId(1));
//!     mock.expect_cancel(OrderId(1)).return_err(RegistryError::NotFound(OrderId(1)));
//!
//!     let client = mock.client();
//!     assert_eq!(client.create_order(0.0).await.unwrap(), OrderId(1));
//!     assert!(client.cancel_order(OrderId(1)).await.is_err());
//!
//!     mock.verify();
//! }
//! ```

use crate::clients::OrderClient;
use crate::model::{Order, OrderId};
use crate::order_actor::message::OrderRequest;
use crate::registry::RegistryResult;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

/// Represents an expected request to the mock actor and the reply to send back.
#[derive(Debug)]
enum Expectation {
    Create {
        response: RegistryResult<OrderId>,
    },
    Cancel {
        id: OrderId,
        response: RegistryResult<()>,
    },
    Deliver {
        id: OrderId,
        response: RegistryResult<()>,
    },
    Get {
        id: OrderId,
        response: RegistryResult<Option<Order>>,
    },
    InProgressCount {
        response: RegistryResult<usize>,
    },
    AverageDeliveryTime {
        response: RegistryResult<f64>,
    },
    Capacity {
        response: RegistryResult<usize>,
    },
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    mismatches: Vec<String>,
}

type Shared = Arc<Mutex<MockState>>;

fn lock(state: &Shared) -> MutexGuard<'_, MockState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A stand-in for [`OrderActor`](super::OrderActor) that answers from a script.
///
/// Requests are matched against expectations in FIFO order. A request that does not
/// match the next expectation (wrong operation or wrong id) is recorded as a mismatch
/// and its reply channel is dropped, so the caller sees
/// [`OrderError::ActorDropped`](super::OrderError::ActorDropped).
pub struct MockOrderActor {
    client: OrderClient,
    state: Shared,
    _handle: tokio::task::JoinHandle<()>,
}

impl MockOrderActor {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<OrderRequest>(100);
        let state: Shared = Arc::new(Mutex::new(MockState::default()));
        let task_state = state.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&task_state).expectations.pop_front();

                match (request, expectation) {
                    (
                        OrderRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        OrderRequest::Cancel { id, respond_to },
                        Some(Expectation::Cancel {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        OrderRequest::Deliver { id, respond_to, .. },
                        Some(Expectation::Deliver {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        OrderRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        OrderRequest::InProgressCount { respond_to },
                        Some(Expectation::InProgressCount { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        OrderRequest::AverageDeliveryTime { respond_to },
                        Some(Expectation::AverageDeliveryTime { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        OrderRequest::Capacity { respond_to },
                        Some(Expectation::Capacity { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (request, expectation) => {
                        lock(&task_state).mismatches.push(format!(
                            "unexpected request {:?}, expected {:?}",
                            request, expectation
                        ));
                    }
                }
            }
        });

        Self {
            client: OrderClient::new(sender),
            state,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> OrderClient {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<OrderId> {
        self.builder(|response| Expectation::Create { response })
    }

    pub fn expect_cancel(&mut self, id: OrderId) -> ExpectationBuilder<()> {
        self.builder(move |response| Expectation::Cancel { id, response })
    }

    pub fn expect_deliver(&mut self, id: OrderId) -> ExpectationBuilder<()> {
        self.builder(move |response| Expectation::Deliver { id, response })
    }

    pub fn expect_get(&mut self, id: OrderId) -> ExpectationBuilder<Option<Order>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    pub fn expect_in_progress_count(&mut self) -> ExpectationBuilder<usize> {
        self.builder(|response| Expectation::InProgressCount { response })
    }

    pub fn expect_average_delivery_time(&mut self) -> ExpectationBuilder<f64> {
        self.builder(|response| Expectation::AverageDeliveryTime { response })
    }

    pub fn expect_capacity(&mut self) -> ExpectationBuilder<usize> {
        self.builder(|response| Expectation::Capacity { response })
    }

    /// Verifies that all expectations were met and no unexpected request arrived.
    pub fn verify(&self) {
        let state = lock(&self.state);
        if !state.mismatches.is_empty() {
            panic!("Mock received unexpected requests: {:?}", state.mismatches);
        }
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }

    fn builder<T>(
        &self,
        wrap: impl FnOnce(RegistryResult<T>) -> Expectation + Send + 'static,
    ) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            wrap: Box::new(wrap),
            state: self.state.clone(),
        }
    }
}

impl Default for MockOrderActor {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder that records the reply for one expected request.
pub struct ExpectationBuilder<T> {
    wrap: Box<dyn FnOnce(RegistryResult<T>) -> Expectation + Send>,
    state: Shared,
}

impl<T> ExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return a registry error.
    pub fn return_err(self, error: crate::registry::RegistryError) {
        self.push(Err(error));
    }

    fn push(self, response: RegistryResult<T>) {
        let expectation = (self.wrap)(response);
        lock(&self.state).expectations.push_back(expectation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order_actor::OrderError;
    use crate::registry::{ErrorKind, RegistryError};

    #[tokio::test]
    async fn test_scripted_replies_in_order() {
        let mut mock = MockOrderActor::new();
        mock.expect_create().return_ok(OrderId(9));
        mock.expect_in_progress_count().return_ok(1);
        mock.expect_average_delivery_time()
            .return_err(RegistryError::NoData("no orders delivered yet"));

        let client = mock.client();
        assert_eq!(client.create_order(3.0).await.unwrap(), OrderId(9));
        assert_eq!(client.get_in_progress_count().await.unwrap(), 1);
        let err = client.get_average_delivery_time().await.unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::NoData));

        mock.verify();
    }

    #[tokio::test]
    async fn test_capacity_reply() {
        let mut mock = MockOrderActor::new();
        mock.expect_capacity().return_ok(5);

        let client = mock.client();
        assert_eq!(client.capacity().await.unwrap(), 5);

        mock.verify();
    }

    #[tokio::test]
    async fn test_wrong_id_drops_reply() {
        let mut mock = MockOrderActor::new();
        mock.expect_deliver(OrderId(1)).return_ok(());

        let client = mock.client();
        let err = client.deliver_order(OrderId(2), 5.0).await.unwrap_err();
        assert_eq!(err, OrderError::ActorDropped);
    }

    #[tokio::test]
    #[should_panic(expected = "remaining")]
    async fn test_verify_reports_unmet_expectations() {
        let mut mock = MockOrderActor::new();
        mock.expect_cancel(OrderId(1)).return_ok(());
        mock.verify();
    }
}
