//! Job parameter definitions

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

fn default_day_start() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).unwrap()
}

/// One day's haulage job: shift a quantity of material from the loading site
/// to the tip within the working window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobParameters {
    /// Material quantity to shift (t)
    pub tonnes: f64,
    /// One-way distance to the tip (miles)
    pub haul_miles: f64,
    /// Working window: every load must finish by this many hours in
    pub window_hours: f64,
    /// Time to load one lorry at the bay (minutes)
    pub load_minutes: f64,
    /// Clock time the window opens
    #[serde(default = "default_day_start")]
    pub day_start: NaiveTime,
    /// Sale price of the material (per tonne)
    #[serde(default)]
    pub price_per_tonne: f64,
    /// Day-rate cost of one lorry
    #[serde(default)]
    pub cost_per_lorry: f64,
}

impl JobParameters {
    pub fn new(tonnes: f64, haul_miles: f64, window_hours: f64, load_minutes: f64) -> Self {
        Self {
            tonnes,
            haul_miles,
            window_hours,
            load_minutes,
            day_start: default_day_start(),
            price_per_tonne: 0.0,
            cost_per_lorry: 0.0,
        }
    }

    pub fn with_pricing(mut self, price_per_tonne: f64, cost_per_lorry: f64) -> Self {
        self.price_per_tonne = price_per_tonne;
        self.cost_per_lorry = cost_per_lorry;
        self
    }

    pub fn with_day_start(mut self, day_start: NaiveTime) -> Self {
        self.day_start = day_start;
        self
    }
}
