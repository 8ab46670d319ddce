//! Planning services

pub mod dispatch;
pub mod fleet_solver;
pub mod schedule_builder;

pub use dispatch::{within_deadline, TripTiming, DEADLINE_EPS};
pub use fleet_solver::solve_fleet;
pub use schedule_builder::{build_timelines, chart_extent};
