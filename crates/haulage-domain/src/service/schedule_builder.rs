//! Per-lorry timeline reconstruction
//!
//! Re-runs the solver's dispatch loop at a fixed fleet size, keeping the
//! full phase breakdown of every trip instead of just the scalar clock.
//! The output drives timeline rendering.

use haulage_types::{FleetSize, LorryTimeline, PhaseKind, Trip, TripPhase};

use crate::model::{FleetParameters, JobParameters};
use crate::service::dispatch::{DispatchState, TripTiming};

/// Expand the dispatch schedule for `fleet_size` lorries into per-lorry,
/// per-phase timelines.
///
/// Returns one entry per lorry, ordered by id, even for lorries that never
/// get a load. Empty when the fleet size is infeasible or zero, or the
/// scenario is degenerate. Each lorry's dangling final return leg is
/// trimmed: once its last load is tipped the day is done.
pub fn build_timelines(
    job: &JobParameters,
    fleet: &FleetParameters,
    fleet_size: FleetSize,
) -> Vec<LorryTimeline> {
    let Some(lorries) = fleet_size.lorries().filter(|&n| n > 0) else {
        return Vec::new();
    };
    let Some(timing) = TripTiming::for_job(job, fleet) else {
        return Vec::new();
    };

    let mut timelines: Vec<LorryTimeline> = (0..lorries)
        .map(|lorry_id| LorryTimeline {
            lorry_id,
            trips: Vec::new(),
        })
        .collect();

    let mut state = DispatchState::new(lorries);
    for _ in 0..timing.trips_required {
        let slot = state.next_load(&timing);
        timelines[slot.lorry as usize]
            .trips
            .push(expand_trip(slot.start, &timing));
    }

    for timeline in &mut timelines {
        trim_final_return(timeline);
    }

    timelines
}

/// Time-axis maximum a renderer needs: the latest phase end rounded up to a
/// whole hour, or the requested window if that is larger.
pub fn chart_extent(timelines: &[LorryTimeline], window_hours: f64) -> f64 {
    let latest = timelines
        .iter()
        .flat_map(|t| t.trips.iter())
        .flat_map(|trip| trip.phases.iter())
        .map(|phase| phase.end)
        .fold(0.0f64, f64::max);
    latest.ceil().max(window_hours)
}

/// Lay one trip's four phases end to end from the load start.
fn expand_trip(load_start: f64, timing: &TripTiming) -> Trip {
    let mut phases = Vec::with_capacity(4);
    let mut clock = load_start;
    for (kind, length) in [
        (PhaseKind::Loading, timing.load_hours),
        (PhaseKind::OutboundTravel, timing.travel_hours),
        (PhaseKind::Tipping, timing.tip_hours),
        (PhaseKind::ReturnTravel, timing.travel_hours),
    ] {
        phases.push(TripPhase {
            start: clock,
            end: clock + length,
            kind,
        });
        clock += length;
    }
    Trip { phases }
}

fn trim_final_return(timeline: &mut LorryTimeline) {
    if let Some(last_trip) = timeline.trips.last_mut() {
        if last_trip.phases.last().map(|p| p.kind) == Some(PhaseKind::ReturnTravel) {
            last_trip.phases.pop();
        }
    }
}
