//! Plain-text coordination brief for the site team.

use crate::config::Config;
use crate::models::{Dashboard, LabourStatus, Worker};
use crate::store::Snapshot;
use crate::utils::formatting::currency;
use textwrap::Options;

fn bullet(text: &str, width: usize) -> String {
    let opts = Options::new(width)
        .initial_indent("- ")
        .subsequent_indent("  ");
    textwrap::fill(text, opts)
}

fn names_with_status(crew: &[&Worker], status: LabourStatus) -> Vec<String> {
    crew.iter()
        .filter(|w| w.status == status)
        .map(|w| format!("{} ({})", w.name, w.trade))
        .collect()
}

/// Compose the brief from an already derived dashboard.
pub fn compose(dashboard: &Dashboard, snapshot: &Snapshot<'_>, cfg: &Config) -> String {
    let width = cfg.brief_width;
    let crew: Vec<&Worker> = dashboard
        .crew_ids
        .iter()
        .filter_map(|id| snapshot.worker(id))
        .collect();

    let mut lines = vec![
        format!(
            "Coordination brief: {} ({})",
            cfg.site,
            dashboard.today.format("%a %d %b %Y")
        ),
        format!("Scope: {}", dashboard.scope_label()),
        String::new(),
        format!(
            "Headcount: {} present of {} ({} off), crew health {}%",
            dashboard.present_count,
            dashboard.crew_size,
            dashboard.off_count,
            dashboard.crew_health_pct
        ),
        format!(
            "Projected payroll today: {}",
            currency(&cfg.currency, dashboard.daily_spend)
        ),
    ];

    if let Some(burn) = dashboard.weekly_burn {
        lines.push(format!("Weekly burn: {}", currency(&cfg.currency, burn)));
    }

    lines.push(format!(
        "Payments logged: {} across {} entries",
        currency(&cfg.currency, dashboard.total_payments),
        dashboard.payments_in_scope
    ));

    for (label, status) in [("On leave", LabourStatus::Leave), ("On standby", LabourStatus::Standby)] {
        let names = names_with_status(&crew, status);
        if !names.is_empty() {
            lines.push(textwrap::fill(
                &format!("{label}: {}", names.join(", ")),
                Options::new(width).subsequent_indent("  "),
            ));
        }
    }

    lines.push(String::new());
    if dashboard.risks.is_empty() {
        lines.push("Risks: none flagged".to_string());
    } else {
        lines.push("Risks:".to_string());
        for r in &dashboard.risks {
            lines.push(bullet(&r.to_string(), width));
        }
    }

    lines.push(String::new());
    lines.push("Next steps:".to_string());
    for a in &dashboard.actions {
        lines.push(bullet(&a.to_string(), width));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::logic::Core;
    use crate::store::RecordStore;
    use crate::store::ids::SequentialIds;
    use chrono::NaiveDate;

    fn brief_for(selected: Option<&str>) -> String {
        let cfg = Config::default();
        let mut store = RecordStore::seeded(Box::new(SequentialIds::new("n")));
        store.set_selected_contractor(selected);
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let d = Core::build_dashboard(&store.snapshot(), today, &cfg.policy);
        compose(&d, &store.snapshot(), &cfg)
    }

    #[test]
    fn brief_lists_headcount_and_people() {
        let text = brief_for(Some("c-1"));
        assert!(text.contains("Scope: Ravi Kumar"));
        assert!(text.contains("Headcount: 2 present of 3 (1 off), crew health 17%"));
        assert!(text.contains("Projected payroll today: ₹10,600"));
        assert!(text.contains("On standby: Deepak Yadav (Helper)"));
        assert!(!text.contains("On leave"));
    }

    #[test]
    fn brief_without_risks_says_so() {
        let text = brief_for(Some("unknown-id"));
        assert!(text.contains("Risks: none flagged"));
        assert!(text.contains("- Generate a coordination brief"));
    }

    #[test]
    fn long_bullets_wrap_within_width() {
        let text = brief_for(Some("c-1"));
        assert!(text.lines().all(|l| l.chars().count() <= 72));
    }
}
