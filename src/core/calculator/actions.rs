use super::crew::CrewScope;
use super::payroll::Totals;
use crate::core::policy::Policy;
use crate::models::SuggestedAction;

/// Suggested next steps, in fixed order. The coordination brief is always
/// offered last.
pub fn derive_actions(scope: &CrewScope<'_>, totals: &Totals, policy: &Policy) -> Vec<SuggestedAction> {
    let mut actions = Vec::new();

    if totals.on_standby > 0 {
        actions.push(SuggestedAction::Redeploy {
            standby: totals.on_standby,
        });
    }

    let deductions = scope
        .payments
        .iter()
        .filter(|p| p.category.is_deduction())
        .count();
    if deductions > policy.deduction_review_above {
        actions.push(SuggestedAction::ReviewDeductions { deductions });
    }

    actions.push(SuggestedAction::CoordinationBrief);
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Payment, PaymentCategory};
    use chrono::NaiveDate;

    fn deduction(id: &str) -> Payment {
        Payment {
            id: id.into(),
            worker_id: "w-1".into(),
            amount: 200.0,
            date: NaiveDate::from_ymd_opt(2026, 10, 10).unwrap(),
            category: PaymentCategory::Deduction,
            note: None,
        }
    }

    #[test]
    fn brief_is_always_suggested() {
        let actions = derive_actions(&CrewScope::default(), &Totals::default(), &Policy::default());
        assert_eq!(actions, vec![SuggestedAction::CoordinationBrief]);
    }

    #[test]
    fn standby_triggers_redeploy_first() {
        let totals = Totals {
            on_standby: 3,
            ..Default::default()
        };
        let actions = derive_actions(&CrewScope::default(), &totals, &Policy::default());
        assert_eq!(
            actions,
            vec![
                SuggestedAction::Redeploy { standby: 3 },
                SuggestedAction::CoordinationBrief
            ]
        );
    }

    #[test]
    fn deduction_review_needs_more_than_one() {
        let one = [deduction("p-1")];
        let scope = CrewScope {
            payments: one.iter().collect(),
            ..Default::default()
        };
        assert_eq!(
            derive_actions(&scope, &Totals::default(), &Policy::default()).len(),
            1
        );

        let two = [deduction("p-1"), deduction("p-2")];
        let scope = CrewScope {
            payments: two.iter().collect(),
            ..Default::default()
        };
        assert_eq!(
            derive_actions(&scope, &Totals::default(), &Policy::default())[0],
            SuggestedAction::ReviewDeductions { deductions: 2 }
        );
    }
}
