use crate::core::calculator::{actions, crew, payroll, risk};
use crate::core::policy::Policy;
use crate::models::Dashboard;
use crate::store::Snapshot;
use chrono::NaiveDate;

pub struct Core;

impl Core {
    /// Derive the dashboard for the snapshot's current selection.
    ///
    /// Pure: the same snapshot, day and policy always give the same result.
    pub fn build_dashboard(snapshot: &Snapshot<'_>, today: NaiveDate, policy: &Policy) -> Dashboard {
        let scope = crew::build_scope(snapshot);
        let totals = payroll::calculate_totals(&scope, &policy.weights);
        let risks = risk::derive_risks(&scope, &totals, today, policy);
        let actions = actions::derive_actions(&scope, &totals, policy);

        Dashboard {
            today,
            selected_contractor_id: snapshot.selected_contractor_id.map(str::to_string),
            contractor_name: scope.contractor.map(|c| c.name.clone()),
            crew_ids: scope.crew.iter().map(|w| w.id.clone()).collect(),
            crew_size: scope.crew.len(),
            present_count: totals.present_count,
            off_count: totals.off_count,
            on_leave: totals.on_leave,
            on_standby: totals.on_standby,
            daily_spend: totals.daily_spend,
            weekly_burn: scope
                .contractor
                .map(|_| risk::weekly_burn(totals.daily_spend, policy)),
            total_payments: totals.total_payments,
            crew_health_pct: totals.crew_health_pct,
            attendance_in_scope: scope.attendance.len(),
            payments_in_scope: scope.payments.len(),
            risks,
            actions,
        }
    }
}
