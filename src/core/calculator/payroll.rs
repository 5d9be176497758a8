//! Payroll projection and headcount aggregates.

use super::crew::CrewScope;
use crate::core::policy::PresenceWeights;
use crate::models::{LabourStatus, Payment, Worker};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Totals {
    pub daily_spend: f64,
    pub total_payments: f64,
    pub present_count: usize,
    pub off_count: usize,
    pub on_leave: usize,
    pub on_standby: usize,
    pub crew_health_pct: u32,
}

/// Expected cost of today's crew: daily rate weighted by current status.
pub fn daily_spend(crew: &[&Worker], weights: &PresenceWeights) -> f64 {
    crew.iter()
        .map(|w| w.daily_rate * weights.weight(w.status))
        .sum()
}

pub fn total_payments(payments: &[&Payment]) -> f64 {
    payments.iter().map(|p| p.amount).sum()
}

pub fn count_status(crew: &[&Worker], status: LabourStatus) -> usize {
    crew.iter().filter(|w| w.status == status).count()
}

/// Present share of the target headcount, in whole percent.
///
/// Without a usable target (no contractor, or a target of 0) the crew itself
/// is the target.
pub fn crew_health_pct(present: usize, crew_size: usize, target: Option<u32>) -> u32 {
    if crew_size == 0 {
        return 0;
    }
    let target = match target {
        Some(t) if t > 0 => t as f64,
        _ => crew_size as f64,
    };
    (present as f64 / target * 100.0).round() as u32
}

pub fn calculate_totals(scope: &CrewScope<'_>, weights: &PresenceWeights) -> Totals {
    let present_count = scope.crew.iter().filter(|w| w.status.is_present()).count();
    let target = scope.contractor.map(|c| c.crew_size_target);

    Totals {
        daily_spend: daily_spend(&scope.crew, weights),
        total_payments: total_payments(&scope.payments),
        present_count,
        off_count: scope.crew.len() - present_count,
        on_leave: count_status(&scope.crew, LabourStatus::Leave),
        on_standby: count_status(&scope.crew, LabourStatus::Standby),
        crew_health_pct: crew_health_pct(present_count, scope.crew.len(), target),
    }
}
