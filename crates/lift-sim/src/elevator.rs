//! The elevator dispatch state machine.
//!
//! # State
//!
//! An elevator is a direction flag plus four queues:
//!
//! | queue       | contents                         | ordering              |
//! |-------------|----------------------------------|-----------------------|
//! | `up`        | onboard, boarded while bound up  | min by destination    |
//! | `down`      | onboard, boarded while bound down| min by destination    |
//! | `stop_up`   | pending hall stops above         | min by floor          |
//! | `stop_down` | pending hall stops below         | min by floor          |
//!
//! All four are min-heaps under the same ascending comparator.  For
//! `stop_down` that means the elevator runs toward the numerically *lowest*
//! pending stop while descending and can coast past nearer pending stops
//! above its target; those entries are consumed only when the current floor
//! later happens to equal them.  This asymmetry is part of the dispatch
//! policy being measured — see
//! `tests::elevator::down_stops_target_lowest_pending_floor_first`.
//!
//! # Movement
//!
//! [`Elevator::travel`] advances at most [`TRAVEL_SPAN`] floors per tick
//! toward the head of the active stop heap.  With no pending stops in the
//! active direction the elevator flips its direction flag and runs toward
//! the boundary — note the flip happens *before* the boundary run, so an
//! upward elevator with nothing left to do arrives at the top already marked
//! as going down.  A stuck guard forces one extra step whenever the computed
//! floor equals the starting floor, so a tick's `travel()` moves the car
//! (the guard clamps at floor 1 on the way down, floor `floors - 1` up).
//!
//! The guard's floor-1 clamp has one blind spot: in a 2-floor building the
//! top floor IS floor 1, so a car sitting at the top heading up with no
//! stops flips and stays put for that tick.  The stall never lasts more
//! than one consecutive tick — the flip means the next `travel` descends.
//! Part of the dispatch policy being measured, like the `stop_down`
//! ordering; see
//! `tests::elevator::two_floor_building_stalls_one_tick_at_the_top`.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use lift_core::PassengerId;

use crate::PassengerStore;

/// Maximum floors covered by one `travel()` step.
pub const TRAVEL_SPAN: usize = 5;

// ── Boarded ───────────────────────────────────────────────────────────────────

/// Onboard heap entry: a passenger keyed by destination floor.
///
/// Explicit key struct instead of ordering `PassengerRecord` itself — the
/// destination ordering exists only for heap placement, never for passenger
/// identity.  Field order matters: `destination` first so the derived `Ord`
/// compares by destination, with the ID as an arbitrary tiebreaker.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
struct Boarded {
    destination: usize,
    passenger: PassengerId,
}

// ── Elevator ──────────────────────────────────────────────────────────────────

/// A single elevator car and its dispatch state.
pub struct Elevator {
    current_floor: usize,
    going_up: bool,
    /// Building height; floors are indexed `0..floors`.
    floors: usize,
    /// Onboard limit across both direction queues.  `None` = unbounded.
    capacity: Option<usize>,
    up: BinaryHeap<Reverse<Boarded>>,
    down: BinaryHeap<Reverse<Boarded>>,
    stop_up: BinaryHeap<Reverse<usize>>,
    stop_down: BinaryHeap<Reverse<usize>>,
}

impl Elevator {
    /// Create an idle elevator: floor 1, bound upward, no stops, nobody
    /// onboard.
    pub fn new(floors: usize, capacity: Option<usize>) -> Self {
        Self {
            current_floor: 1,
            going_up: true,
            floors,
            capacity,
            up: BinaryHeap::new(),
            down: BinaryHeap::new(),
            stop_up: BinaryHeap::new(),
            stop_down: BinaryHeap::new(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn current_floor(&self) -> usize {
        self.current_floor
    }

    #[inline]
    pub fn is_going_up(&self) -> bool {
        self.going_up
    }

    /// Passengers currently onboard, both direction queues.
    #[inline]
    pub fn onboard_count(&self) -> usize {
        self.up.len() + self.down.len()
    }

    /// `true` while boarding another passenger would not exceed capacity.
    #[inline]
    pub fn has_space(&self) -> bool {
        match self.capacity {
            Some(cap) => self.onboard_count() < cap,
            None => true,
        }
    }

    /// Pending hall stops above the boarding floor at request time.
    #[inline]
    pub fn pending_up_stops(&self) -> usize {
        self.stop_up.len()
    }

    /// Pending hall stops below the boarding floor at request time.
    #[inline]
    pub fn pending_down_stops(&self) -> usize {
        self.stop_down.len()
    }

    // ── Operations ────────────────────────────────────────────────────────

    /// Test helper: place the car at `floor` heading in the given direction.
    #[cfg(test)]
    pub(crate) fn place(&mut self, floor: usize, going_up: bool) {
        self.current_floor = floor;
        self.going_up = going_up;
    }

    /// Commit to visiting `floor`.
    ///
    /// Floors above the current position go into `stop_up`, floors below
    /// into `stop_down`; a request for the current floor is a no-op.
    /// Duplicate entries are harmless — arrival drains all matching entries.
    pub fn request_stop(&mut self, floor: usize) {
        if floor > self.current_floor {
            self.stop_up.push(Reverse(floor));
        } else if floor < self.current_floor {
            self.stop_down.push(Reverse(floor));
        }
    }

    /// Board passengers from a floor queue, FIFO, until the queue empties or
    /// capacity is reached.
    ///
    /// Each boarded passenger is classified against the *current* floor:
    /// destination strictly above → `up` heap, otherwise → `down` heap.
    /// Boarding also retires the head of the matching stop heap when it
    /// equals the passenger's origin floor — the stop being serviced right
    /// now counts as fulfilled once somebody from it boards.
    pub fn load(&mut self, waiting: &mut VecDeque<PassengerId>, passengers: &PassengerStore) {
        while self.has_space() {
            let Some(id) = waiting.pop_front() else { break };
            let record = passengers.get(id);
            let entry = Boarded {
                destination: record.destination,
                passenger: id,
            };
            if record.destination > self.current_floor {
                self.up.push(Reverse(entry));
                if self.stop_up.peek() == Some(&Reverse(record.origin)) {
                    self.stop_up.pop();
                }
            } else {
                self.down.push(Reverse(entry));
                if self.stop_down.peek() == Some(&Reverse(record.origin)) {
                    self.stop_down.pop();
                }
            }
        }
    }

    /// Discharge passengers whose destination is the current floor.
    ///
    /// Only the direction queue matching the current travel direction is
    /// drained; an opposite-direction passenger who happens to share the
    /// floor stays onboard until the elevator passes this floor in their
    /// direction.  Calling `unload` again without an intervening
    /// `load`/`travel` returns nothing.
    pub fn unload(&mut self) -> Vec<PassengerId> {
        let heap = if self.going_up { &mut self.up } else { &mut self.down };
        let mut leaving = Vec::new();
        while let Some(&Reverse(entry)) = heap.peek() {
            if entry.destination != self.current_floor {
                break;
            }
            heap.pop();
            leaving.push(entry.passenger);
        }
        leaving
    }

    /// Advance one step.
    ///
    /// Moves up to [`TRAVEL_SPAN`] floors toward the head of the active stop
    /// heap, or — with no pending stops in the active direction — flips the
    /// direction flag and runs toward the boundary.  The stuck guard then
    /// forces one extra step if the position did not change, and finally all
    /// stop entries equal to the new floor are drained: arrival consumes the
    /// stop whether or not anyone boards there.
    pub fn travel(&mut self) {
        let prev = self.current_floor;

        if self.going_up {
            if let Some(&Reverse(target)) = self.stop_up.peek() {
                self.current_floor = (self.current_floor + TRAVEL_SPAN).min(target);
            } else {
                self.going_up = false;
                self.current_floor = (self.current_floor + TRAVEL_SPAN).min(self.floors - 1);
            }
        } else if let Some(&Reverse(target)) = self.stop_down.peek() {
            self.current_floor = self.current_floor.saturating_sub(TRAVEL_SPAN).max(target);
        } else {
            self.going_up = true;
            self.current_floor = self.current_floor.saturating_sub(TRAVEL_SPAN);
        }

        // Stuck guard: boundary arithmetic can leave the position unchanged
        // (e.g. already at the top with no up stops).  Push one more step in
        // the possibly-just-flipped direction.  The downward clamp is floor
        // 1, not 0.
        if self.current_floor == prev {
            if self.going_up {
                self.current_floor = (self.current_floor + TRAVEL_SPAN).min(self.floors - 1);
            } else {
                self.current_floor = self.current_floor.saturating_sub(TRAVEL_SPAN).max(1);
            }
        }

        while self.stop_up.peek() == Some(&Reverse(self.current_floor)) {
            self.stop_up.pop();
        }
        while self.stop_down.peek() == Some(&Reverse(self.current_floor)) {
            self.stop_down.pop();
        }
    }
}
