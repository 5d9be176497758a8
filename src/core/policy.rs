//! Policy constants behind the payroll projection and the risk rules.
//! Defaults are the site's standing rules; the config file may override them.

use crate::models::LabourStatus;
use serde::{Deserialize, Serialize};

/// Fraction of the daily rate a worker is expected to cost today, by status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenceWeights {
    pub present: f64,
    pub standby: f64,
    pub leave: f64,
    pub absent: f64,
}

impl Default for PresenceWeights {
    fn default() -> Self {
        Self {
            present: 1.0,
            standby: 0.5,
            leave: 0.0,
            absent: 0.0,
        }
    }
}

impl PresenceWeights {
    pub fn weight(&self, status: LabourStatus) -> f64 {
        match status {
            LabourStatus::Present => self.present,
            LabourStatus::Standby => self.standby,
            LabourStatus::Leave => self.leave,
            LabourStatus::Absent => self.absent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    pub weights: PresenceWeights,
    pub working_days_per_week: u32,
    /// Share of the contract budget the projected spend may reach before
    /// the exposure flag is raised.
    pub budget_exposure_ratio: f64,
    /// Workers on leave at or above which the crew counts as short.
    pub short_crew_leave_threshold: usize,
    /// Deductions strictly above which a review is suggested.
    pub deduction_review_above: usize,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            weights: PresenceWeights::default(),
            working_days_per_week: 6,
            budget_exposure_ratio: 0.4,
            short_crew_leave_threshold: 2,
            deduction_review_above: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_match_site_rules() {
        let w = PresenceWeights::default();
        assert_eq!(w.weight(LabourStatus::Present), 1.0);
        assert_eq!(w.weight(LabourStatus::Standby), 0.5);
        assert_eq!(w.weight(LabourStatus::Leave), 0.0);
        assert_eq!(w.weight(LabourStatus::Absent), 0.0);
    }

    #[test]
    fn partial_yaml_keeps_remaining_defaults() {
        let p: Policy = serde_yaml::from_str("budget_exposure_ratio: 0.5\n").unwrap();
        assert_eq!(p.budget_exposure_ratio, 0.5);
        assert_eq!(p.working_days_per_week, 6);
        assert_eq!(p.weights, PresenceWeights::default());
    }
}
