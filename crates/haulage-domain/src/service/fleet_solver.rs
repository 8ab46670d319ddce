//! Minimum fleet size search
//!
//! Greedy earliest-available dispatch against a single shared loading bay,
//! tried at every fleet size from one upward. Feasibility only improves with
//! more lorries, so the first size whose loads all make the window cutoff is
//! the minimum. When no size up to the ceiling works, the same dispatch loop
//! reports what the ceiling fleet could still achieve and how long the full
//! job would actually take.

use haulage_types::{FleetSize, SimulationResult};

use crate::model::{FleetParameters, JobParameters};
use crate::service::dispatch::{within_deadline, DispatchState, TripTiming};

/// Fleet sizes are searched up to at least this many lorries. Together with
/// the trip count this bounds the search while still covering the
/// one-trip-per-lorry extreme.
const SEARCH_FLOOR: u32 = 50;

/// Find the smallest fleet that gets every load started in time.
///
/// Infeasibility is a normal outcome, reported in the result rather than as
/// an error; degenerate inputs (non-positive capacity, speed, window, or
/// load duration) yield the all-zero result.
pub fn solve_fleet(job: &JobParameters, fleet: &FleetParameters) -> SimulationResult {
    let Some(timing) = TripTiming::for_job(job, fleet) else {
        return SimulationResult::default();
    };

    let total_value = job.tonnes * job.price_per_tonne;
    let ceiling = timing.trips_required.max(SEARCH_FLOOR);

    for lorries in 1..=ceiling {
        if fits_window(lorries, &timing) {
            return SimulationResult {
                fleet_size: FleetSize::Lorries(lorries),
                total_trips: timing.trips_required,
                round_trip_secs: timing.cycle_hours * 3600.0,
                trips_per_lorry: f64::from(timing.trips_required) / f64::from(lorries),
                total_value,
                total_fleet_cost: f64::from(lorries) * job.cost_per_lorry,
                achievable_tonnes: None,
                achievable_value: None,
                required_hours: None,
            };
        }
    }

    // Nothing fits. Report what the ceiling fleet could still load in the
    // window, and how long the full job would take at that size.
    let achievable_tonnes = f64::from(loads_within_window(ceiling, &timing)) * fleet.capacity_tonnes;
    let completion = completion_time(ceiling, &timing);

    SimulationResult {
        fleet_size: FleetSize::Infeasible,
        total_trips: timing.trips_required,
        round_trip_secs: timing.cycle_hours * 3600.0,
        trips_per_lorry: 0.0,
        total_value,
        total_fleet_cost: 0.0,
        achievable_tonnes: Some(achievable_tonnes),
        achievable_value: Some(achievable_tonnes * job.price_per_tonne),
        required_hours: (completion > timing.window_hours).then_some(completion),
    }
}

/// Can this many lorries start every required load before the deadline?
fn fits_window(lorries: u32, timing: &TripTiming) -> bool {
    let mut state = DispatchState::new(lorries);
    for _ in 0..timing.trips_required {
        let slot = state.next_load(timing);
        if !within_deadline(slot.end, timing.window_hours) {
            return false;
        }
    }
    true
}

/// How many loads this many lorries can finish before the deadline, with no
/// cap on the trip count.
fn loads_within_window(lorries: u32, timing: &TripTiming) -> u32 {
    let mut state = DispatchState::new(lorries);
    let mut admitted = 0u32;
    loop {
        let slot = state.next_load(timing);
        if !within_deadline(slot.end, timing.window_hours) {
            return admitted;
        }
        admitted += 1;
    }
}

/// Load-end time of the final required trip with the deadline ignored: the
/// window this fleet size would actually need.
fn completion_time(lorries: u32, timing: &TripTiming) -> f64 {
    let mut state = DispatchState::new(lorries);
    let mut last_end = 0.0;
    for _ in 0..timing.trips_required {
        last_end = state.next_load(timing).end;
    }
    last_end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_a() -> (JobParameters, FleetParameters) {
        let job = JobParameters::new(300.0, 20.0, 3.0, 10.0).with_pricing(12.0, 350.0);
        let fleet = FleetParameters {
            capacity_tonnes: 20.0,
            speed_mph: 31.0,
            tip_minutes: 5.0,
        };
        (job, fleet)
    }

    #[test]
    fn test_feasible_scenario_golden() {
        let (job, fleet) = scenario_a();
        let result = solve_fleet(&job, &fleet);

        assert_eq!(result.fleet_size, FleetSize::Lorries(8));
        assert_eq!(result.total_trips, 15);
        // cycle = 2 * 20/31 + 10/60 + 5/60
        let cycle = 2.0 * 20.0 / 31.0 + 10.0 / 60.0 + 5.0 / 60.0;
        assert!((result.round_trip_secs - cycle * 3600.0).abs() < 1e-6);
        assert!((result.trips_per_lorry - 15.0 / 8.0).abs() < 1e-12);
        assert!((result.total_value - 3600.0).abs() < 1e-9);
        assert!((result.total_fleet_cost - 8.0 * 350.0).abs() < 1e-9);
        assert!(result.achievable_tonnes.is_none());
        assert!(result.required_hours.is_none());
    }

    #[test]
    fn test_returned_size_is_minimum() {
        let (job, fleet) = scenario_a();
        let timing = TripTiming::for_job(&job, &fleet).unwrap();
        assert!(!fits_window(7, &timing));
        assert!(fits_window(8, &timing));
    }

    #[test]
    fn test_feasibility_monotone_in_fleet_size() {
        let (job, fleet) = scenario_a();
        let timing = TripTiming::for_job(&job, &fleet).unwrap();
        let mut seen_feasible = false;
        for n in 1..=20 {
            let feasible = fits_window(n, &timing);
            if seen_feasible {
                assert!(feasible, "feasibility lost going from n-1 to n={}", n);
            }
            seen_feasible |= feasible;
        }
        assert!(seen_feasible);
    }

    #[test]
    fn test_conservation_of_trips() {
        let (job, fleet) = scenario_a();
        let result = solve_fleet(&job, &fleet);
        let n = f64::from(result.fleet_size.lorries().unwrap());
        assert!((result.trips_per_lorry * n - f64::from(result.total_trips)).abs() < 1e-9);
    }

    #[test]
    fn test_infeasible_scenario_fallbacks() {
        // Scenario A squeezed into half an hour: only 3 loads clear the bay
        let (mut job, fleet) = scenario_a();
        job.window_hours = 0.5;
        let result = solve_fleet(&job, &fleet);

        assert_eq!(result.fleet_size, FleetSize::Infeasible);
        assert_eq!(result.total_trips, 15);
        assert_eq!(result.trips_per_lorry, 0.0);
        assert_eq!(result.total_fleet_cost, 0.0);
        // Value still reports the full target
        assert!((result.total_value - 3600.0).abs() < 1e-9);

        let achievable = result.achievable_tonnes.unwrap();
        assert!((achievable - 60.0).abs() < 1e-9);
        assert!(achievable < 300.0);
        assert!((result.achievable_value.unwrap() - 60.0 * 12.0).abs() < 1e-9);

        // 15 bay-serialized loads at 10 min each
        let required = result.required_hours.unwrap();
        assert!((required - 2.5).abs() < 1e-9);
        assert!(required > job.window_hours);
    }

    #[test]
    fn test_achievable_counts_whole_loads_exactly() {
        // 15 min loads into a 1 h window: load ends land on 0.25, 0.5,
        // 0.75, 1.0 and the fifth overshoots, so exactly 4 loads x 10 t.
        let job = JobParameters::new(100.0, 15.0, 1.0, 15.0);
        let fleet = FleetParameters {
            capacity_tonnes: 10.0,
            speed_mph: 30.0,
            tip_minutes: 15.0,
        };
        let result = solve_fleet(&job, &fleet);
        assert_eq!(result.fleet_size, FleetSize::Infeasible);
        assert_eq!(result.achievable_tonnes, Some(40.0));
    }

    #[test]
    fn test_degenerate_inputs_zeroed() {
        let (job, fleet) = scenario_a();

        let mut f = fleet.clone();
        f.capacity_tonnes = 0.0;
        let result = solve_fleet(&job, &f);
        assert_eq!(result.fleet_size, FleetSize::Lorries(0));
        assert_eq!(result.total_trips, 0);
        assert_eq!(result.total_value, 0.0);
        assert!(result.achievable_tonnes.is_none());

        let mut f = fleet.clone();
        f.speed_mph = 0.0;
        assert_eq!(solve_fleet(&job, &f).fleet_size, FleetSize::Lorries(0));

        let mut j = job.clone();
        j.window_hours = 0.0;
        assert_eq!(solve_fleet(&j, &fleet).fleet_size, FleetSize::Lorries(0));

        let mut j = job.clone();
        j.load_minutes = 0.0;
        assert_eq!(solve_fleet(&j, &fleet).fleet_size, FleetSize::Lorries(0));
    }

    #[test]
    fn test_one_load_one_lorry() {
        // A single trip that fits: one lorry is enough
        let job = JobParameters::new(15.0, 10.0, 8.0, 20.0);
        let fleet = FleetParameters::default();
        let result = solve_fleet(&job, &fleet);
        assert_eq!(result.fleet_size, FleetSize::Lorries(1));
        assert_eq!(result.total_trips, 1);
        assert_eq!(result.trips_per_lorry, 1.0);
    }

    #[test]
    fn test_required_time_omitted_when_window_suffices() {
        // Degenerate-free infeasible cases always overshoot the window, but
        // the guard is strict: a completion exactly at the window would not
        // be reported. Exercise the feasible path's None directly.
        let (job, fleet) = scenario_a();
        assert!(solve_fleet(&job, &fleet).required_hours.is_none());
    }
}
