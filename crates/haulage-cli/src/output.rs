//! Output formatting module

use chrono::{Duration, NaiveTime};
use haulage_domain::model::JobParameters;
use haulage_domain::service::chart_extent;
use haulage_types::{LorryTimeline, OutputFormat, Result, SimulationResult};
use serde::Serialize;

pub fn output_result(output_format: OutputFormat, result: &SimulationResult) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(result)?;
        println!("{}", content);
    } else {
        // Table format
        println!("\nFleet Sizing Result");
        println!("===================");

        match result.fleet_size.lorries() {
            Some(lorries) => {
                println!("Lorries needed:  {}", lorries);
                println!("Total trips:     {}", result.total_trips);
                println!("Trips per lorry: {:.1}", result.trips_per_lorry);
                println!("Round trip:      {:.0} min", result.round_trip_secs / 60.0);
                if result.total_value > 0.0 {
                    println!("Material value:  \u{a3}{:.2}", result.total_value);
                }
                if result.total_fleet_cost > 0.0 {
                    println!("Fleet cost:      \u{a3}{:.2}", result.total_fleet_cost);
                }
            }
            None => {
                println!("Lorries needed:  not achievable in window");
                println!("Total trips:     {} (required)", result.total_trips);
                if let Some(achievable) = result.achievable_tonnes {
                    println!("Achievable:      {:.1} t", achievable);
                }
                if let Some(value) = result.achievable_value {
                    if value > 0.0 {
                        println!("Achievable value: \u{a3}{:.2}", value);
                    }
                }
                if let Some(required) = result.required_hours {
                    println!("Window needed:   {:.1} h", required);
                }
            }
        }
    }

    Ok(())
}

/// JSON shape handed to a timeline renderer
#[derive(Serialize)]
struct TimelineOutput<'a> {
    chart_extent_hours: f64,
    lorries: &'a [LorryTimeline],
}

pub fn output_timeline(
    output_format: OutputFormat,
    job: &JobParameters,
    timelines: &[LorryTimeline],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let output = TimelineOutput {
            chart_extent_hours: chart_extent(timelines, job.window_hours),
            lorries: timelines,
        };
        let content = serde_json::to_string_pretty(&output)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nBay Schedule");
    println!("============");
    if timelines.is_empty() {
        println!("(no lorries scheduled)");
        return Ok(());
    }
    for timeline in timelines {
        println!("Lorry {}", timeline.lorry_id + 1);
        if timeline.trips.is_empty() {
            println!("  (no trips)");
            continue;
        }
        for (i, trip) in timeline.trips.iter().enumerate() {
            let phases: Vec<String> = trip
                .phases
                .iter()
                .map(|p| {
                    format!(
                        "{} {}-{}",
                        p.kind.label(),
                        clock(job.day_start, p.start),
                        clock(job.day_start, p.end)
                    )
                })
                .collect();
            println!("  Trip {}: {}", i + 1, phases.join(" | "));
        }
    }

    Ok(())
}

/// Wall-clock label for an hours-since-start offset
fn clock(day_start: NaiveTime, hours: f64) -> String {
    let offset = Duration::seconds((hours * 3600.0).round() as i64);
    let (time, _) = day_start.overflowing_add_signed(offset);
    time.format("%H:%M").to_string()
}
