//! Transport units (pods): capacity-bounded vehicles following a fixed route.

use tc_core::{NodeId, PodId};

/// A pod travelling along a fixed sequence of stops, one edge per day.
///
/// A route whose first and last stops coincide is **cyclic**: once the pod
/// reaches the final index it continues from index 0 (the same node).  A
/// non-cyclic pod stops moving at its last stop until the month resets it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransportUnit {
    pub id: PodId,
    route: Vec<NodeId>,
    current: usize,
    capacity: u32,
    /// Free seats left on the current departure.
    pub remaining_capacity: u32,
}

impl TransportUnit {
    /// Create a pod at the start of `route`.  Stops beyond `max_len` can
    /// never be reached within a month and are dropped.
    pub fn new(id: PodId, mut route: Vec<NodeId>, max_len: usize, capacity: u32) -> Self {
        route.truncate(max_len);
        Self { id, route, current: 0, capacity, remaining_capacity: capacity }
    }

    pub fn route(&self) -> &[NodeId] {
        &self.route
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// The stop the pod is currently at.
    #[inline]
    pub fn current_stop(&self) -> Option<NodeId> {
        self.route.get(self.current).copied()
    }

    /// The stop the pod will travel to next, if any.
    #[inline]
    pub fn next_stop(&self) -> Option<NodeId> {
        self.route.get(self.current + 1).copied()
    }

    #[inline]
    pub fn is_cyclic(&self) -> bool {
        self.route.len() > 1 && self.route.first() == self.route.last()
    }

    /// Move the route pointer one stop forward, wrapping cyclic routes.
    pub fn advance(&mut self) {
        self.current += 1;
        if self.current + 1 == self.route.len() && self.is_cyclic() {
            self.current = 0;
        }
    }

    /// Restore all seats (called on every departure and at month start).
    #[inline]
    pub fn reset_capacity(&mut self) {
        self.remaining_capacity = self.capacity;
    }

    /// Return the pod to the first stop of its route.
    #[inline]
    pub fn reset_position(&mut self) {
        self.current = 0;
    }

    /// Take one seat; returns `false` if the pod is full.
    #[inline]
    pub fn board(&mut self) -> bool {
        if self.remaining_capacity == 0 {
            return false;
        }
        self.remaining_capacity -= 1;
        true
    }
}
