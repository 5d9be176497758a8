//! Advisory output of the derivation engine: risk flags and suggested actions.

use crate::utils::formatting::{money, plural};
use serde::Serialize;
use std::fmt;

/// A derived, human-readable warning. Purely advisory.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RiskFlag {
    ShortCrew {
        on_leave: usize,
    },
    BudgetExposure {
        projected_spend: f64,
        budget: f64,
        limit: f64,
        days_remaining: i64,
    },
    AttendanceFollowUp {
        absences: usize,
    },
}

impl RiskFlag {
    pub fn code(&self) -> &'static str {
        match self {
            RiskFlag::ShortCrew { .. } => "short_crew",
            RiskFlag::BudgetExposure { .. } => "budget_exposure",
            RiskFlag::AttendanceFollowUp { .. } => "attendance_follow_up",
        }
    }
}

impl fmt::Display for RiskFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskFlag::ShortCrew { on_leave } => write!(
                f,
                "Crew running short: {} on leave today",
                plural(*on_leave, "worker", "workers")
            ),
            RiskFlag::BudgetExposure {
                projected_spend,
                budget,
                limit,
                days_remaining,
            } => write!(
                f,
                "Budget exposure: projected spend {} over the remaining {} exceeds the {} limit on a {} budget",
                money(*projected_spend),
                plural(*days_remaining as usize, "day", "days"),
                money(*limit),
                money(*budget)
            ),
            RiskFlag::AttendanceFollowUp { absences } => write!(
                f,
                "Attendance follow-up: {} logged as absent",
                plural(*absences, "record", "records")
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SuggestedAction {
    Redeploy { standby: usize },
    ReviewDeductions { deductions: usize },
    CoordinationBrief,
}

impl SuggestedAction {
    pub fn code(&self) -> &'static str {
        match self {
            SuggestedAction::Redeploy { .. } => "redeploy",
            SuggestedAction::ReviewDeductions { .. } => "review_deductions",
            SuggestedAction::CoordinationBrief => "coordination_brief",
        }
    }
}

impl fmt::Display for SuggestedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestedAction::Redeploy { standby } => write!(
                f,
                "Redeploy {} on standby to an active work front",
                plural(*standby, "worker", "workers")
            ),
            SuggestedAction::ReviewDeductions { deductions } => write!(
                f,
                "Review {} before the next payout",
                plural(*deductions, "deduction", "deductions")
            ),
            SuggestedAction::CoordinationBrief => {
                f.write_str("Generate a coordination brief for the site team")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_crew_message_names_the_count() {
        let flag = RiskFlag::ShortCrew { on_leave: 3 };
        assert_eq!(flag.to_string(), "Crew running short: 3 workers on leave today");
    }

    #[test]
    fn redeploy_message_pluralizes() {
        assert!(
            SuggestedAction::Redeploy { standby: 1 }
                .to_string()
                .contains("1 worker on standby")
        );
        assert!(
            SuggestedAction::Redeploy { standby: 2 }
                .to_string()
                .contains("2 workers on standby")
        );
    }
}
