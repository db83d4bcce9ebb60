use crate::{DeveloperRole, Seniority};

use serde::{Deserialize, Serialize};

pub const HIGH_UTILIZATION_PERCENT: f64 = 70.0;
pub const OVERLOADED_UTILIZATION_PERCENT: f64 = 90.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    pub id: String,
    pub name: String,
    pub role: DeveloperRole,
    pub seniority: Seniority,
    /// Weekly capacity in hours
    pub weekly_hours: u32,
    /// Hours already committed
    pub allocated_hours: u32,
    #[serde(default)]
    pub projects: Vec<String>,
}

impl Developer {
    pub fn new(
        id: String,
        name: String,
        role: DeveloperRole,
        seniority: Seniority,
        weekly_hours: u32,
    ) -> Self {
        Self {
            id,
            name,
            role,
            seniority,
            weekly_hours,
            allocated_hours: 0,
            projects: Vec::new(),
        }
    }

    /// Allocated hours as a percentage of capacity. Zero capacity yields 0.
    pub fn utilization(&self) -> f64 {
        if self.weekly_hours == 0 {
            return 0.0;
        }
        f64::from(self.allocated_hours) / f64::from(self.weekly_hours) * 100.0
    }

    pub fn utilization_level(&self) -> UtilizationLevel {
        UtilizationLevel::from_percent(self.utilization())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UtilizationLevel {
    Low,
    High,
    Overloaded,
}

impl UtilizationLevel {
    pub fn from_percent(percent: f64) -> Self {
        if percent >= OVERLOADED_UTILIZATION_PERCENT {
            Self::Overloaded
        } else if percent >= HIGH_UTILIZATION_PERCENT {
            Self::High
        } else {
            Self::Low
        }
    }
}
