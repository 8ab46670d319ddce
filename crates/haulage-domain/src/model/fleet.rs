//! Fleet parameter definitions

use serde::{Deserialize, Serialize};

/// Properties shared by every lorry in the pool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetParameters {
    /// Payload per lorry (t)
    pub capacity_tonnes: f64,
    /// Average road speed (mph)
    pub speed_mph: f64,
    /// Time to tip a full load (minutes)
    pub tip_minutes: f64,
}

impl Default for FleetParameters {
    fn default() -> Self {
        Self {
            capacity_tonnes: 20.0,
            speed_mph: 30.0,
            tip_minutes: 5.0,
        }
    }
}
