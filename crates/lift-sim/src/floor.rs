//! Per-floor waiting areas.
//!
//! A floor is passive storage: two FIFO queues of waiting passenger IDs, one
//! per travel direction.  It never initiates anything — the simulation spawns
//! passengers into it and elevators drain the queues through the mutable
//! references exposed here.

use std::collections::VecDeque;

use lift_core::{PassengerId, Tick};

use crate::PassengerStore;

/// One floor of the building.
pub struct Floor {
    number: usize,
    up: VecDeque<PassengerId>,
    down: VecDeque<PassengerId>,
}

impl Floor {
    /// Create the floor at index `number`.
    pub fn new(number: usize) -> Self {
        Self {
            number,
            up: VecDeque::new(),
            down: VecDeque::new(),
        }
    }

    /// This floor's index.
    #[inline]
    pub fn number(&self) -> usize {
        self.number
    }

    /// Spawn a passenger on this floor bound for `destination`.
    ///
    /// The passenger joins the up queue when the destination lies above this
    /// floor, the down queue when below.  A destination equal to this floor
    /// is a self-trip: nothing is enqueued and no record is allocated.
    /// Arrival order within each queue is preserved — first arrived is first
    /// boarded.
    pub fn spawn(
        &mut self,
        store: &mut PassengerStore,
        start_tick: Tick,
        destination: usize,
    ) -> Option<PassengerId> {
        if destination == self.number {
            return None;
        }
        let id = store.spawn(start_tick, self.number, destination);
        if destination > self.number {
            self.up.push_back(id);
        } else {
            self.down.push_back(id);
        }
        Some(id)
    }

    /// Passengers waiting to travel upward, mutable for elevator boarding.
    #[inline]
    pub fn up_queue(&mut self) -> &mut VecDeque<PassengerId> {
        &mut self.up
    }

    /// Passengers waiting to travel downward, mutable for elevator boarding.
    #[inline]
    pub fn down_queue(&mut self) -> &mut VecDeque<PassengerId> {
        &mut self.down
    }

    /// Total passengers waiting on this floor, both directions.
    #[inline]
    pub fn waiting(&self) -> usize {
        self.up.len() + self.down.len()
    }
}
