//! Plain-text plan report

use haulage_domain::model::{FleetParameters, JobParameters};
use haulage_types::SimulationResult;

/// Render a solve outcome as a human-readable report.
pub fn plan_report(
    job: &JobParameters,
    fleet: &FleetParameters,
    result: &SimulationResult,
) -> String {
    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("                Haulage Plan Report               \n");
    report.push_str("==================================================\n\n");

    report.push_str("[Job]\n");
    report.push_str(&format!("  Material:          {:.1} t\n", job.tonnes));
    report.push_str(&format!("  One-way haul:      {:.1} miles\n", job.haul_miles));
    report.push_str(&format!(
        "  Working window:    {:.1} h from {}\n",
        job.window_hours,
        job.day_start.format("%H:%M")
    ));
    report.push_str(&format!("  Loading time:      {:.0} min\n", job.load_minutes));
    report.push('\n');

    report.push_str("[Fleet]\n");
    report.push_str(&format!("  Lorry capacity:    {:.1} t\n", fleet.capacity_tonnes));
    report.push_str(&format!("  Average speed:     {:.1} mph\n", fleet.speed_mph));
    report.push_str(&format!("  Tipping time:      {:.0} min\n", fleet.tip_minutes));
    report.push('\n');

    match result.fleet_size.lorries() {
        Some(lorries) => {
            report.push_str("[Plan]\n");
            report.push_str(&format!("  Lorries needed:    {}\n", lorries));
            report.push_str(&format!("  Total trips:       {}\n", result.total_trips));
            report.push_str(&format!(
                "  Trips per lorry:   {:.1}\n",
                result.trips_per_lorry
            ));
            report.push_str(&format!(
                "  Round trip:        {:.0} min\n",
                result.round_trip_secs / 60.0
            ));
            if job.price_per_tonne > 0.0 {
                report.push_str(&format!(
                    "  Material value:    \u{a3}{:.2}\n",
                    result.total_value
                ));
            }
            if job.cost_per_lorry > 0.0 {
                report.push_str(&format!(
                    "  Fleet cost:        \u{a3}{:.2}\n",
                    result.total_fleet_cost
                ));
            }
        }
        None => {
            report.push_str("[Plan - NOT ACHIEVABLE IN WINDOW]\n");
            report.push_str(&format!(
                "  Total trips:       {} (required)\n",
                result.total_trips
            ));
            if let Some(achievable) = result.achievable_tonnes {
                report.push_str(&format!(
                    "  Achievable:        {:.1} t of {:.1} t\n",
                    achievable, job.tonnes
                ));
                report.push_str(&format!(
                    "  Shortfall:         {:.1} t\n",
                    job.tonnes - achievable
                ));
            }
            if job.price_per_tonne > 0.0 {
                if let Some(value) = result.achievable_value {
                    report.push_str(&format!("  Achievable value:  \u{a3}{:.2}\n", value));
                }
            }
            if let Some(required) = result.required_hours {
                report.push_str(&format!(
                    "  Window needed:     {:.1} h (requested {:.1} h)\n",
                    required, job.window_hours
                ));
            }
        }
    }

    report.push_str("\n==================================================\n");
    report
}
