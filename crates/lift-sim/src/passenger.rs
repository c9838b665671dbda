//! Passenger arrival records and their append-only store.
//!
//! A passenger is immutable once created: the record captures where and when
//! it appeared and where it wants to go.  Everything else about a passenger's
//! journey (which queue it waits in, which elevator carries it) lives in the
//! floor and elevator containers that hold its [`PassengerId`].
//!
//! Identity is the store slot, not the field values — two passengers spawned
//! with identical fields are distinct entries, which is what the per-run
//! wait-time map keys on.

use lift_core::{PassengerId, Tick};

/// One passenger's arrival facts.  Never mutated after [`PassengerStore::spawn`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PassengerRecord {
    /// Tick at which the passenger appeared on its floor.
    pub start_tick: Tick,
    /// Floor index the passenger appeared on.
    pub origin: usize,
    /// Floor index the passenger wants to reach.  Never equals `origin`;
    /// self-trips are filtered out before a record is allocated.
    pub destination: usize,
}

/// Append-only storage of every passenger spawned during a run.
///
/// IDs are allocated densely in spawn order, so `id.index()` addresses the
/// backing `Vec` directly.
#[derive(Default)]
pub struct PassengerStore {
    records: Vec<PassengerRecord>,
}

impl PassengerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a record and return its ID.
    pub fn spawn(&mut self, start_tick: Tick, origin: usize, destination: usize) -> PassengerId {
        let id = PassengerId(self.records.len() as u32);
        self.records.push(PassengerRecord {
            start_tick,
            origin,
            destination,
        });
        id
    }

    /// Look up a record by ID.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this store.
    #[inline]
    pub fn get(&self, id: PassengerId) -> &PassengerRecord {
        &self.records[id.index()]
    }

    /// Total passengers spawned so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
