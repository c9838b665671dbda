//! The `Sim` struct and its tick loop.

use lift_core::{PassengerId, SimConfig, SimRng, Tick};
use rustc_hash::FxHashMap;

use crate::{Elevator, Floor, PassengerStore, SimObserver, SimResult, WaitStats};

/// The main simulation runner.
///
/// `Sim` owns all run state: the floor list, the elevator list, the
/// passenger store, the RNG, and the wait-time map.  Floors and elevators
/// are created once at construction and live for the whole run; passengers
/// are spawned lazily by the arrival draw and flow floor queue → onboard
/// heap → wait-time map.
///
/// Each tick runs three phases (see the crate docs): spawn, route, serve.
/// Everything is single-threaded and sequential; with a fixed seed two runs
/// of the same configuration are identical.
pub struct Sim {
    /// Global configuration.  Mutable between `run_ticks` calls — tests use
    /// this to cut off arrivals and let the building drain.
    pub config: SimConfig,

    /// The tick about to be processed.
    pub current_tick: Tick,

    /// Single source of randomness for the whole run.
    pub rng: SimRng,

    /// One waiting area per floor, index 0 at the bottom.
    pub floors: Vec<Floor>,

    /// Elevators, served in list order within each tick.
    pub elevators: Vec<Elevator>,

    /// Every passenger spawned so far.
    pub passengers: PassengerStore,

    /// Wait recorded at first delivery: `delivery_tick - start_tick`.
    pub wait_times: FxHashMap<PassengerId, u64>,
}

impl Sim {
    /// Validate `config` and build the building.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;

        let floors = (0..config.floors).map(Floor::new).collect();
        let elevators = (0..config.elevators)
            .map(|_| Elevator::new(config.floors, config.capacity))
            .collect();

        Ok(Self {
            rng: SimRng::new(config.seed),
            current_tick: Tick::ZERO,
            floors,
            elevators,
            passengers: PassengerStore::new(),
            wait_times: FxHashMap::default(),
            config,
        })
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`, then aggregate and
    /// return the wait-time statistics.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> WaitStats {
        while self.current_tick < self.config.end_tick() {
            self.step(observer);
        }
        let stats = WaitStats::from_waits(self.wait_times.values().copied());
        observer.on_sim_end(self.current_tick, &stats);
        stats
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping; no final statistics are
    /// emitted.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    /// Aggregate the statistics recorded so far without advancing time.
    pub fn stats(&self) -> WaitStats {
        WaitStats::from_waits(self.wait_times.values().copied())
    }

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.current_tick;
        observer.on_tick_start(now);
        let (spawned, delivered) = self.process_tick(now);
        observer.on_tick_end(now, spawned, delivered);
        self.current_tick = now + 1;
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self, now: Tick) -> (usize, usize) {
        // ── Phase 1: spawn arrivals ───────────────────────────────────────
        //
        // One independent draw per floor.  A floor that draws a hit is
        // recorded as "requested" even when the spawned trip turned out to
        // be a self-trip and got dropped — the hall call still happened.
        let num_floors = self.floors.len();
        let mut requested: Vec<usize> = Vec::new();
        let mut spawned = 0usize;

        for f in 0..num_floors {
            let draw: f64 = self.rng.random();
            if draw < self.config.arrival_probability {
                // Destination drawn uniformly from 1..floors: the bottom
                // floor is never a destination.
                let destination = self.rng.gen_range(1..num_floors);
                if self.floors[f]
                    .spawn(&mut self.passengers, now, destination)
                    .is_some()
                {
                    spawned += 1;
                }
                requested.push(f);
            }
        }

        // ── Phase 2: route hall calls ─────────────────────────────────────
        //
        // A call is forwarded only when it lies strictly ahead in the
        // elevator's direction of travel; calls behind it are dropped for
        // this elevator and rely on a later re-request or direction change.
        for elevator in &mut self.elevators {
            for &floor in &requested {
                if elevator.is_going_up() && floor > elevator.current_floor() {
                    elevator.request_stop(floor);
                } else if !elevator.is_going_up() && floor < elevator.current_floor() {
                    elevator.request_stop(floor);
                }
            }
        }

        // ── Phase 3: serve ────────────────────────────────────────────────
        //
        // Strictly in list order; a later elevator sees the floor queues as
        // mutated by the earlier ones this tick.
        let mut delivered = 0usize;
        for i in 0..self.elevators.len() {
            let elevator = &mut self.elevators[i];

            let floor = &mut self.floors[elevator.current_floor()];
            let waiting = if elevator.is_going_up() {
                floor.up_queue()
            } else {
                floor.down_queue()
            };
            elevator.load(waiting, &self.passengers);

            elevator.travel();

            // Delivery is judged against the floor reached *after* travel.
            for id in elevator.unload() {
                let start = self.passengers.get(id).start_tick;
                // First recording wins; a passenger is only delivered once,
                // so this guard is purely protective.
                self.wait_times.entry(id).or_insert_with(|| now.since(start));
                delivered += 1;
            }
        }

        (spawned, delivered)
    }
}
