//! Shared dispatch core: trip timing arithmetic and the greedy bay loop
//!
//! Both the fleet-size solver and the schedule builder drive the same
//! dispatch rule: of the lorries back at the bay soonest, load the
//! lowest-numbered one, and never let the bay idle while a lorry is ready.

use crate::model::{FleetParameters, JobParameters};

/// Slack allowed past the window deadline, in hours. Absorbs float rounding
/// in the cumulative phase sums; a load ending within this of the deadline
/// still counts as on time.
pub const DEADLINE_EPS: f64 = 1e-4;

/// Whether a load finishing at `load_end` (hours) makes the `window` cutoff.
pub fn within_deadline(load_end: f64, window_hours: f64) -> bool {
    load_end <= window_hours + DEADLINE_EPS
}

/// Per-trip durations derived from one job/fleet pairing, all in hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripTiming {
    /// Loads needed to shift the whole quantity
    pub trips_required: u32,
    /// One-way travel
    pub travel_hours: f64,
    /// Loading at the bay
    pub load_hours: f64,
    /// Tipping at the far end
    pub tip_hours: f64,
    /// Full cycle: load + out + tip + back
    pub cycle_hours: f64,
    /// The working window the loads must fit
    pub window_hours: f64,
}

impl TripTiming {
    /// Derive the timing table, or `None` when the scenario is degenerate
    /// (non-positive capacity, speed, window, or load duration). Degenerate
    /// means unconfigured, not erroneous; callers report an all-zero plan.
    pub fn for_job(job: &JobParameters, fleet: &FleetParameters) -> Option<Self> {
        if fleet.capacity_tonnes <= 0.0
            || fleet.speed_mph <= 0.0
            || job.window_hours <= 0.0
            || job.load_minutes <= 0.0
        {
            return None;
        }

        let trips_required = (job.tonnes / fleet.capacity_tonnes).ceil() as u32;
        let travel_hours = job.haul_miles / fleet.speed_mph;
        let load_hours = job.load_minutes / 60.0;
        let tip_hours = fleet.tip_minutes / 60.0;

        Some(Self {
            trips_required,
            travel_hours,
            load_hours,
            tip_hours,
            cycle_hours: 2.0 * travel_hours + load_hours + tip_hours,
            window_hours: job.window_hours,
        })
    }
}

/// The bay slot handed to one lorry for one load
#[derive(Debug, Clone, Copy)]
pub struct LoadSlot {
    pub lorry: u32,
    pub start: f64,
    pub end: f64,
}

/// Mutable state of one dispatch run: when each lorry is next back at the
/// bay, and when the bay itself frees up. Allocated fresh per run.
#[derive(Debug)]
pub struct DispatchState {
    next_free: Vec<f64>,
    bay_free: f64,
}

impl DispatchState {
    pub fn new(lorries: u32) -> Self {
        Self {
            next_free: vec![0.0; lorries as usize],
            bay_free: 0.0,
        }
    }

    /// Dispatch the next load and advance the clock.
    ///
    /// Picks the lorry with the earliest next-free time; ties go to the
    /// lowest index (first one found in the scan). The load waits for both
    /// the lorry and the bay, and the lorry is busy for the rest of its
    /// cycle once loaded.
    pub fn next_load(&mut self, timing: &TripTiming) -> LoadSlot {
        let mut lorry = 0usize;
        for (i, &free) in self.next_free.iter().enumerate() {
            if free < self.next_free[lorry] {
                lorry = i;
            }
        }

        let start = self.next_free[lorry].max(self.bay_free);
        let end = start + timing.load_hours;
        self.bay_free = end;
        self.next_free[lorry] = end + timing.travel_hours + timing.tip_hours + timing.travel_hours;

        LoadSlot {
            lorry: lorry as u32,
            start,
            end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing() -> TripTiming {
        TripTiming {
            trips_required: 4,
            travel_hours: 0.5,
            load_hours: 0.25,
            tip_hours: 0.25,
            cycle_hours: 1.5,
            window_hours: 8.0,
        }
    }

    #[test]
    fn test_deadline_tolerance_boundary() {
        // Exactly at window + eps is accepted, one more eps is rejected
        assert!(within_deadline(3.0 + DEADLINE_EPS, 3.0));
        assert!(!within_deadline(3.0 + 2.0 * DEADLINE_EPS, 3.0));
        assert!(within_deadline(2.9999, 3.0));
    }

    #[test]
    fn test_trips_required_rounds_up() {
        let job = JobParameters::new(300.0, 20.0, 3.0, 10.0);
        let fleet = FleetParameters {
            capacity_tonnes: 20.0,
            speed_mph: 31.0,
            tip_minutes: 5.0,
        };
        let t = TripTiming::for_job(&job, &fleet).unwrap();
        assert_eq!(t.trips_required, 15);

        let job = JobParameters::new(301.0, 20.0, 3.0, 10.0);
        let t = TripTiming::for_job(&job, &fleet).unwrap();
        assert_eq!(t.trips_required, 16);
    }

    #[test]
    fn test_degenerate_inputs_have_no_timing() {
        let job = JobParameters::new(300.0, 20.0, 3.0, 10.0);
        let fleet = FleetParameters::default();
        assert!(TripTiming::for_job(&job, &fleet).is_some());

        let mut f = fleet.clone();
        f.capacity_tonnes = 0.0;
        assert!(TripTiming::for_job(&job, &f).is_none());

        let mut f = fleet.clone();
        f.speed_mph = 0.0;
        assert!(TripTiming::for_job(&job, &f).is_none());

        let mut j = job.clone();
        j.window_hours = 0.0;
        assert!(TripTiming::for_job(&j, &fleet).is_none());

        let mut j = job.clone();
        j.load_minutes = -1.0;
        assert!(TripTiming::for_job(&j, &fleet).is_none());
    }

    #[test]
    fn test_cycle_is_sum_of_phases() {
        let t = timing();
        assert!((t.cycle_hours - (2.0 * t.travel_hours + t.load_hours + t.tip_hours)).abs() < 1e-12);
    }

    #[test]
    fn test_bay_serializes_loads() {
        // Two lorries, both free at 0: the bay forces the second load to
        // wait for the first to clear it.
        let t = timing();
        let mut state = DispatchState::new(2);
        let a = state.next_load(&t);
        let b = state.next_load(&t);
        assert_eq!(a.lorry, 0);
        assert_eq!(b.lorry, 1);
        assert_eq!(a.start, 0.0);
        assert!((a.end - 0.25).abs() < 1e-12);
        assert!((b.start - a.end).abs() < 1e-12);
    }

    #[test]
    fn test_tie_break_prefers_lowest_index() {
        let t = timing();
        let mut state = DispatchState::new(3);
        // All three free at 0.0: lorry 0 must win the tie
        let slot = state.next_load(&t);
        assert_eq!(slot.lorry, 0);
        // 1 and 2 still tied at 0.0: lorry 1 next
        let slot = state.next_load(&t);
        assert_eq!(slot.lorry, 1);
    }

    #[test]
    fn test_single_lorry_waits_for_its_cycle() {
        let t = timing();
        let mut state = DispatchState::new(1);
        let first = state.next_load(&t);
        let second = state.next_load(&t);
        // Back after load end + out + tip + back = 0.25 + 1.25
        assert!((second.start - (first.end + 2.0 * t.travel_hours + t.tip_hours)).abs() < 1e-12);
    }
}
