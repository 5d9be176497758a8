//! Risk flags. Each rule is evaluated independently and appended in a fixed
//! order: short crew, budget exposure, attendance follow-up.

use super::crew::CrewScope;
use super::payroll::Totals;
use crate::core::policy::Policy;
use crate::models::{Contractor, LabourStatus, RiskFlag};
use chrono::NaiveDate;

/// Spend at the current daily rate for a full working week.
pub fn weekly_burn(daily_spend: f64, policy: &Policy) -> f64 {
    daily_spend * policy.working_days_per_week as f64
}

/// Budget exposure for the remaining contract period, if it crosses the
/// policy limit. Contracts ending today or earlier are not evaluated.
pub fn budget_exposure(
    contractor: &Contractor,
    daily_spend: f64,
    today: NaiveDate,
    policy: &Policy,
) -> Option<RiskFlag> {
    let days_remaining = contractor.days_remaining(today);
    if days_remaining <= 0 {
        return None;
    }

    let weeks_remaining = days_remaining as f64 / policy.working_days_per_week as f64;
    let projected_spend = weekly_burn(daily_spend, policy) * weeks_remaining;
    let limit = contractor.budget * policy.budget_exposure_ratio;

    (projected_spend > limit).then_some(RiskFlag::BudgetExposure {
        projected_spend,
        budget: contractor.budget,
        limit,
        days_remaining,
    })
}

pub fn derive_risks(
    scope: &CrewScope<'_>,
    totals: &Totals,
    today: NaiveDate,
    policy: &Policy,
) -> Vec<RiskFlag> {
    let mut risks = Vec::new();

    if totals.on_leave >= policy.short_crew_leave_threshold {
        risks.push(RiskFlag::ShortCrew {
            on_leave: totals.on_leave,
        });
    }

    if let Some(contractor) = scope.contractor
        && let Some(flag) = budget_exposure(contractor, totals.daily_spend, today, policy)
    {
        risks.push(flag);
    }

    let absences = scope
        .attendance
        .iter()
        .filter(|a| a.presence == LabourStatus::Absent)
        .count();
    if absences > 0 {
        risks.push(RiskFlag::AttendanceFollowUp { absences });
    }

    risks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::payroll::calculate_totals;
    use crate::models::{AttendanceRecord, Worker};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contractor(budget: f64, end: NaiveDate) -> Contractor {
        Contractor {
            id: "c-1".into(),
            name: "Ravi Kumar".into(),
            company: "RK Structures".into(),
            scope: "Frame".into(),
            budget,
            start_date: day(2026, 1, 1),
            end_date: end,
            crew_size_target: 10,
            notes: None,
        }
    }

    fn worker(id: &str, status: LabourStatus) -> Worker {
        Worker {
            id: id.into(),
            name: id.into(),
            trade: "Helper".into(),
            daily_rate: 1000.0,
            status,
            phone: None,
            contractor_id: "c-1".into(),
        }
    }

    fn absent_record(worker_id: &str) -> AttendanceRecord {
        AttendanceRecord {
            id: format!("a-{worker_id}"),
            worker_id: worker_id.into(),
            date: day(2026, 10, 16),
            hours_worked: 0.0,
            presence: LabourStatus::Absent,
            remarks: None,
            site: "Tower B".into(),
        }
    }

    #[test]
    fn budget_boundary() {
        let today = day(2026, 10, 1);
        let c = contractor(100_000.0, day(2026, 10, 31));
        let policy = Policy::default();
        assert_eq!(c.days_remaining(today), 30);

        // 6000 per week over 5 weeks = 30000, under the 40000 limit
        assert_eq!(budget_exposure(&c, 1000.0, today, &policy), None);

        // 9000 per week over 5 weeks = 45000
        assert_eq!(
            budget_exposure(&c, 1500.0, today, &policy),
            Some(RiskFlag::BudgetExposure {
                projected_spend: 45_000.0,
                budget: 100_000.0,
                limit: 40_000.0,
                days_remaining: 30,
            })
        );
    }

    #[test]
    fn finished_contract_is_not_evaluated() {
        let c = contractor(1.0, day(2026, 10, 1));
        let policy = Policy::default();
        assert_eq!(budget_exposure(&c, 99_999.0, day(2026, 10, 1), &policy), None);
        assert_eq!(budget_exposure(&c, 99_999.0, day(2026, 11, 1), &policy), None);
    }

    #[test]
    fn short_crew_needs_two_on_leave() {
        let policy = Policy::default();
        let today = day(2026, 10, 1);

        let two = [worker("a", LabourStatus::Leave), worker("b", LabourStatus::Leave)];
        let scope = CrewScope {
            crew: two.iter().collect(),
            ..Default::default()
        };
        let totals = calculate_totals(&scope, &policy.weights);
        assert_eq!(
            derive_risks(&scope, &totals, today, &policy),
            vec![RiskFlag::ShortCrew { on_leave: 2 }]
        );

        let one = [worker("a", LabourStatus::Leave)];
        let scope = CrewScope {
            crew: one.iter().collect(),
            ..Default::default()
        };
        let totals = calculate_totals(&scope, &policy.weights);
        assert!(derive_risks(&scope, &totals, today, &policy).is_empty());
    }

    #[test]
    fn one_follow_up_flag_for_many_absences() {
        let policy = Policy::default();
        let records = [absent_record("a"), absent_record("b")];
        let scope = CrewScope {
            attendance: records.iter().collect(),
            ..Default::default()
        };
        let totals = Totals::default();
        assert_eq!(
            derive_risks(&scope, &totals, day(2026, 10, 1), &policy),
            vec![RiskFlag::AttendanceFollowUp { absences: 2 }]
        );
    }

    #[test]
    fn flags_keep_fixed_order() {
        let policy = Policy::default();
        let today = day(2026, 10, 1);
        let c = contractor(10_000.0, day(2026, 12, 31));
        let crew = [
            worker("a", LabourStatus::Leave),
            worker("b", LabourStatus::Leave),
            worker("c", LabourStatus::Present),
        ];
        let records = [absent_record("a")];
        let scope = CrewScope {
            contractor: Some(&c),
            crew: crew.iter().collect(),
            attendance: records.iter().collect(),
            payments: Vec::new(),
        };
        let totals = calculate_totals(&scope, &policy.weights);

        let codes: Vec<&str> = derive_risks(&scope, &totals, today, &policy)
            .iter()
            .map(|r| r.code())
            .collect();
        assert_eq!(
            codes,
            vec!["short_crew", "budget_exposure", "attendance_follow_up"]
        );
    }
}
