//! Command handlers

use crate::cli::{Cli, Commands, JobArgs};
use crate::output::{output_result, output_timeline};
use haulage_app::config::Config;
use haulage_app::report::plan_report;
use haulage_app::scenario::Scenario;
use haulage_domain::model::{FleetParameters, JobParameters};
use haulage_domain::service::{build_timelines, solve_fleet};
use haulage_types::{Error, Result};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let config = Config::load()?;
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Plan { job, report } => {
            let (job, fleet) = resolve_inputs(job, &config)?;
            if cli.verbose {
                eprintln!(
                    "Solving: {:.1} t, {:.1} mi each way, {:.1} h window, {} t lorries at {} mph",
                    job.tonnes, job.haul_miles, job.window_hours, fleet.capacity_tonnes, fleet.speed_mph
                );
            }

            let result = solve_fleet(&job, &fleet);
            output_result(format, &result)?;

            if report {
                println!("{}", plan_report(&job, &fleet, &result));
            }
        }

        Commands::Timeline { job } => {
            let (job, fleet) = resolve_inputs(job, &config)?;
            let result = solve_fleet(&job, &fleet);

            if !result.fleet_size.is_feasible() {
                println!("Plan is not achievable in the window - no timeline to show.");
                println!("{}", plan_report(&job, &fleet, &result));
                return Ok(());
            }

            let timelines = build_timelines(&job, &fleet, result.fleet_size);
            output_timeline(format, &job, &timelines)?;
        }

        Commands::Config {
            show,
            set_capacity,
            set_speed,
            set_tip_minutes,
            set_start,
            set_format,
            reset,
        } => {
            let mut config = config;
            let mut changed = false;

            if reset {
                config = Config::default();
                changed = true;
            }
            if let Some(capacity) = set_capacity {
                config.fleet.capacity_tonnes = capacity;
                changed = true;
            }
            if let Some(speed) = set_speed {
                config.fleet.speed_mph = speed;
                changed = true;
            }
            if let Some(tip) = set_tip_minutes {
                config.fleet.tip_minutes = tip;
                changed = true;
            }
            if let Some(start) = set_start {
                config.day_start = start;
                changed = true;
            }
            if let Some(format) = set_format {
                config.output_format = format;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("Configuration saved.");
            }
            if show || !changed {
                println!("{}", config);
            }
        }
    }

    Ok(())
}

/// Merge scenario file, CLI flags, and config defaults into one job/fleet
/// pairing. Flags win over the file; the file's fleet block wins over the
/// configured defaults.
fn resolve_inputs(args: JobArgs, config: &Config) -> Result<(JobParameters, FleetParameters)> {
    let (mut job, mut fleet) = match &args.scenario {
        Some(path) => Scenario::load(path)?.resolve(config),
        None => {
            let tonnes = args.tonnes.ok_or(Error::MissingParameter("--tonnes"))?;
            let miles = args.miles.ok_or(Error::MissingParameter("--miles"))?;
            let window = args.window.ok_or(Error::MissingParameter("--window"))?;
            let load = args
                .load_minutes
                .ok_or(Error::MissingParameter("--load-minutes"))?;
            (
                JobParameters::new(tonnes, miles, window, load).with_day_start(config.day_start),
                config.fleet.clone(),
            )
        }
    };

    if let Some(tonnes) = args.tonnes {
        job.tonnes = tonnes;
    }
    if let Some(miles) = args.miles {
        job.haul_miles = miles;
    }
    if let Some(window) = args.window {
        job.window_hours = window;
    }
    if let Some(load) = args.load_minutes {
        job.load_minutes = load;
    }
    if let Some(start) = args.start {
        job.day_start = start;
    }
    if let Some(price) = args.price {
        job.price_per_tonne = price;
    }
    if let Some(cost) = args.lorry_cost {
        job.cost_per_lorry = cost;
    }
    if let Some(capacity) = args.capacity {
        fleet.capacity_tonnes = capacity;
    }
    if let Some(speed) = args.speed {
        fleet.speed_mph = speed;
    }
    if let Some(tip) = args.tip_minutes {
        fleet.tip_minutes = tip;
    }

    Ok((job, fleet))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_args() -> JobArgs {
        JobArgs {
            scenario: None,
            tonnes: None,
            miles: None,
            window: None,
            load_minutes: None,
            start: None,
            price: None,
            lorry_cost: None,
            capacity: None,
            speed: None,
            tip_minutes: None,
        }
    }

    #[test]
    fn test_missing_core_flags_rejected() {
        let config = Config::default();
        let err = resolve_inputs(bare_args(), &config).unwrap_err();
        assert!(matches!(err, Error::MissingParameter("--tonnes")));
    }

    #[test]
    fn test_flags_build_job_with_config_fleet() {
        let config = Config::default();
        let mut args = bare_args();
        args.tonnes = Some(300.0);
        args.miles = Some(20.0);
        args.window = Some(3.0);
        args.load_minutes = Some(10.0);
        args.speed = Some(31.0);

        let (job, fleet) = resolve_inputs(args, &config).unwrap();
        assert_eq!(job.tonnes, 300.0);
        assert_eq!(job.day_start, config.day_start);
        assert_eq!(fleet.capacity_tonnes, config.fleet.capacity_tonnes);
        // Flag override beats the configured default
        assert_eq!(fleet.speed_mph, 31.0);
    }
}
