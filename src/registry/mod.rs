//! # Order Registry
//!
//! The synchronous core of the crate: a capacity-bounded, in-memory collection of
//! orders with a per-order state machine and two aggregate metrics.
//!
//! ## Invariants
//!
//! - `in_progress` always equals the number of orders whose status is
//!   [`OrderStatus::InProgress`]. It is adjusted in the same call that changes a status,
//!   never recomputed, so [`OrderRegistry::get_in_progress_count`] is O(1).
//! - `in_progress <= capacity`.
//! - One delivery duration is recorded per order that reached
//!   [`OrderStatus::Delivered`], in delivery order.
//! - Orders are never removed and ids are never reused.
//!
//! Every operation validates fully before mutating anything, so an `Err` leaves the
//! registry untouched.
//!
//! The registry is not synchronized. For shared access, own it from a single task
//! (see [`OrderActor`](crate::order_actor::OrderActor)).

pub mod error;

pub use error::*;

use crate::model::{Order, OrderId, OrderStatus};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct OrderRegistry {
    capacity: usize,
    orders: Vec<Order>,
    index: HashMap<OrderId, usize>,
    in_progress: usize,
    delivery_durations: Vec<f64>,
    next_id: u64,
}

impl OrderRegistry {
    /// Creates an empty registry allowing at most `capacity` in-progress orders.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            orders: Vec::new(),
            index: HashMap::new(),
            in_progress: 0,
            delivery_durations: Vec::new(),
            next_id: 1,
        }
    }

    /// Registers a new in-progress order and returns its id.
    ///
    /// # Errors
    /// * [`RegistryError::InvalidInput`] if `creation_time` is negative, NaN or infinite.
    /// * [`RegistryError::CapacityExceeded`] if `capacity` orders are already in progress.
    pub fn create_order(&mut self, creation_time: f64) -> RegistryResult<OrderId> {
        if !creation_time.is_finite() || creation_time < 0.0 {
            return Err(RegistryError::InvalidInput {
                field: "creation_time",
                value: creation_time,
            });
        }
        if self.in_progress >= self.capacity {
            return Err(RegistryError::CapacityExceeded {
                capacity: self.capacity,
                in_progress: self.in_progress,
            });
        }

        let id = OrderId::from(self.next_id);
        self.next_id += 1;
        self.index.insert(id, self.orders.len());
        self.orders.push(Order::new(id, creation_time));
        self.in_progress += 1;

        debug!(%id, creation_time, in_progress = self.in_progress, "order created");
        Ok(id)
    }

    /// Moves an in-progress order to [`OrderStatus::Cancelled`].
    pub fn cancel_order(&mut self, id: OrderId) -> RegistryResult<()> {
        let slot = self.in_progress_slot(id, OrderStatus::Cancelled)?;
        self.orders[slot].status = OrderStatus::Cancelled;
        self.in_progress -= 1;

        debug!(%id, in_progress = self.in_progress, "order cancelled");
        Ok(())
    }

    /// Moves an in-progress order to [`OrderStatus::Delivered`] and records
    /// `delivery_time - creation_time` as its delivery duration.
    ///
    /// A `delivery_time` earlier than the order's creation time is accepted and
    /// produces a negative duration. A `delivery_time` that is non-finite, or whose
    /// duration overflows to infinity, is rejected with [`RegistryError::InvalidInput`].
    pub fn deliver_order(&mut self, id: OrderId, delivery_time: f64) -> RegistryResult<()> {
        let slot = self.in_progress_slot(id, OrderStatus::Delivered)?;
        let duration = delivery_time - self.orders[slot].creation_time;
        if !duration.is_finite() {
            return Err(RegistryError::InvalidInput {
                field: "delivery_time",
                value: delivery_time,
            });
        }

        self.orders[slot].status = OrderStatus::Delivered;
        self.delivery_durations.push(duration);
        self.in_progress -= 1;

        debug!(%id, duration, in_progress = self.in_progress, "order delivered");
        Ok(())
    }

    pub fn get_in_progress_count(&self) -> usize {
        self.in_progress
    }

    /// Arithmetic mean of all recorded delivery durations.
    ///
    /// # Errors
    /// [`RegistryError::NoData`] until at least one order has been delivered.
    pub fn get_average_delivery_time(&self) -> RegistryResult<f64> {
        if self.delivery_durations.is_empty() {
            return Err(RegistryError::NoData("no orders delivered yet"));
        }
        let count = self.delivery_durations.len() as f64;
        let total: f64 = self.delivery_durations.iter().sum();
        if total.is_finite() {
            return Ok(total / count);
        }
        // The sum of finite durations overflowed; scale each term first.
        Ok(self.delivery_durations.iter().map(|d| d / count).sum())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of one order.
    pub fn get_order(&self, id: OrderId) -> Option<Order> {
        self.index.get(&id).map(|&slot| self.orders[slot].clone())
    }

    /// All orders ever created, in creation order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Recorded delivery durations, in delivery order.
    pub fn delivery_durations(&self) -> &[f64] {
        &self.delivery_durations
    }

    pub fn delivered_count(&self) -> usize {
        self.delivery_durations.len()
    }

    // Resolves `id` to its storage slot, rejecting unknown ids and terminal orders.
    fn in_progress_slot(&self, id: OrderId, attempted: OrderStatus) -> RegistryResult<usize> {
        let slot = *self.index.get(&id).ok_or(RegistryError::NotFound(id))?;
        let current = self.orders[slot].status;
        if current != OrderStatus::InProgress {
            return Err(RegistryError::InvalidTransition {
                id,
                current,
                attempted,
            });
        }
        Ok(slot)
    }
}
