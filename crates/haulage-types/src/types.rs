//! Result and timeline types shared across the planner

use serde::{Deserialize, Serialize};

/// Fleet size verdict: a finite lorry count, or no count up to the search
/// ceiling makes the plan fit the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FleetSize {
    Lorries(u32),
    Infeasible,
}

impl FleetSize {
    pub fn lorries(&self) -> Option<u32> {
        match self {
            FleetSize::Lorries(n) => Some(*n),
            FleetSize::Infeasible => None,
        }
    }

    pub fn is_feasible(&self) -> bool {
        matches!(self, FleetSize::Lorries(_))
    }
}

impl Default for FleetSize {
    fn default() -> Self {
        FleetSize::Lorries(0)
    }
}

impl std::fmt::Display for FleetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FleetSize::Lorries(n) => write!(f, "{}", n),
            FleetSize::Infeasible => write!(f, "infeasible"),
        }
    }
}

/// Outcome of a fleet-size solve.
///
/// The achievable/required fields are populated only for infeasible plans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Minimum fleet size, or the infeasible verdict
    pub fleet_size: FleetSize,
    /// Round trips needed to shift the full quantity
    pub total_trips: u32,
    /// One full cycle (load + out + tip + back) in seconds
    pub round_trip_secs: f64,
    /// Average trips per lorry (0 when infeasible)
    pub trips_per_lorry: f64,
    /// Material value of the full target quantity
    pub total_value: f64,
    /// Fleet cost at the returned size (0 when infeasible)
    pub total_fleet_cost: f64,
    /// Tonnage the ceiling fleet can still load before the deadline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievable_tonnes: Option<f64>,
    /// Value of the achievable tonnage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievable_value: Option<f64>,
    /// Window length that would make the full plan fit, when longer than the
    /// requested window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_hours: Option<f64>,
}

/// One phase of a lorry's round trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhaseKind {
    Loading,
    OutboundTravel,
    Tipping,
    ReturnTravel,
}

impl PhaseKind {
    pub fn label(&self) -> &'static str {
        match self {
            PhaseKind::Loading => "load",
            PhaseKind::OutboundTravel => "out",
            PhaseKind::Tipping => "tip",
            PhaseKind::ReturnTravel => "back",
        }
    }
}

/// A half-open slice of a lorry's day, in hours since the window start
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripPhase {
    pub start: f64,
    pub end: f64,
    pub kind: PhaseKind,
}

/// One round trip: loading, outbound travel, tipping, return travel.
/// The return leg may be absent on a lorry's final trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trip {
    pub phases: Vec<TripPhase>,
}

/// Everything one lorry does over the day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LorryTimeline {
    pub lorry_id: u32,
    pub trips: Vec<Trip>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fleet_size_accessors() {
        assert_eq!(FleetSize::Lorries(4).lorries(), Some(4));
        assert_eq!(FleetSize::Infeasible.lorries(), None);
        assert!(FleetSize::Lorries(1).is_feasible());
        assert!(!FleetSize::Infeasible.is_feasible());
        assert_eq!(FleetSize::default(), FleetSize::Lorries(0));
    }

    #[test]
    fn test_phase_kind_serde_names() {
        let json = serde_json::to_string(&PhaseKind::OutboundTravel).unwrap();
        assert_eq!(json, "\"outbound-travel\"");
        let json = serde_json::to_string(&PhaseKind::ReturnTravel).unwrap();
        assert_eq!(json, "\"return-travel\"");
    }

    #[test]
    fn test_default_result_is_zeroed() {
        let result = SimulationResult::default();
        assert_eq!(result.fleet_size, FleetSize::Lorries(0));
        assert_eq!(result.total_trips, 0);
        assert_eq!(result.round_trip_secs, 0.0);
        assert_eq!(result.total_value, 0.0);
        assert!(result.achievable_tonnes.is_none());
        assert!(result.required_hours.is_none());
    }
}
