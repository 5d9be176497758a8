//! Text views over the store and the derived dashboard.

use crate::config::Config;
use crate::models::{AttendanceRecord, Contractor, Dashboard, Payment, Worker};
use crate::store::Snapshot;
use crate::utils::colors::{RESET, color_for_health, colorize_optional};
use crate::utils::formatting::{bold, currency, describe_status, plural};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

fn worker_label(snapshot: &Snapshot<'_>, worker_id: &str) -> String {
    match snapshot.worker(worker_id) {
        Some(w) => w.name.clone(),
        None => format!("unknown ({worker_id})"),
    }
}

fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

/// One-line digest, used after every change in a session.
pub fn summary_line(d: &Dashboard, symbol: &str) -> String {
    format!(
        "crew {} | present {} | spend {}/day | health {}% | {}",
        d.crew_size,
        d.present_count,
        currency(symbol, d.daily_spend),
        d.crew_health_pct,
        plural(d.risks.len(), "risk", "risks")
    )
}

pub fn render_dashboard(d: &Dashboard, cfg: &Config, details: bool) -> String {
    let sep = cfg.separator_char.repeat(60);
    let mut out = Vec::new();

    out.push(bold(&format!(
        "=== {} | {} ({}) ===",
        cfg.site,
        d.scope_label(),
        d.today.format("%Y-%m-%d")
    )));
    out.push(format!(
        "Crew: {} | Present: {} | Off: {} | Health: {}{}%{}",
        d.crew_size,
        d.present_count,
        d.off_count,
        color_for_health(d.crew_health_pct),
        d.crew_health_pct,
        RESET
    ));

    let mut spend = format!("Daily spend: {}", currency(&cfg.currency, d.daily_spend));
    if let Some(burn) = d.weekly_burn {
        spend.push_str(&format!(" | Weekly burn: {}", currency(&cfg.currency, burn)));
    }
    out.push(spend);
    out.push(format!(
        "Payments: {} ({}) | Attendance records: {}",
        currency(&cfg.currency, d.total_payments),
        plural(d.payments_in_scope, "entry", "entries"),
        d.attendance_in_scope
    ));
    out.push(sep.clone());

    if !d.has_risks() {
        out.push("✅ No risks flagged".to_string());
    } else {
        for r in &d.risks {
            out.push(format!("⚠️  {r}"));
        }
    }
    out.push(sep);

    for (i, a) in d.actions.iter().enumerate() {
        out.push(format!("{}. {a}", i + 1));
    }

    if details {
        out.push(String::new());
        out.push(format!(
            "On leave: {} | On standby: {}",
            d.on_leave, d.on_standby
        ));
        out.push(format!("Crew ids: {}", d.crew_ids.join(", ")));
    }

    out.join("\n")
}

pub fn render_crew(crew: &[&Worker], symbol: &str) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 38),
        Column::new("Name", 18),
        Column::new("Trade", 14),
        Column::new("Rate", 10),
        Column::new("Status", 8),
        Column::new("Contractor", 10),
        Column::new("Phone", 16),
    ]);

    for w in crew {
        table.add_row(vec![
            w.id.clone(),
            w.name.clone(),
            w.trade.clone(),
            currency(symbol, w.daily_rate),
            describe_status(w.status).to_string(),
            w.contractor_id.clone(),
            opt(&w.phone),
        ]);
    }

    table.render()
}

pub fn render_contractors(
    contractors: &[Contractor],
    selected: Option<&str>,
    symbol: &str,
    today: NaiveDate,
) -> String {
    let mut table = Table::new(vec![
        Column::new("", 1),
        Column::new("ID", 6),
        Column::new("Name", 16),
        Column::new("Company", 20),
        Column::new("Budget", 12),
        Column::new("Period", 25),
        Column::new("Target", 6),
        Column::new("Days left", 9),
    ]);

    for c in contractors {
        let marker = if selected == Some(c.id.as_str()) { "*" } else { "" };
        table.add_row(vec![
            marker.to_string(),
            c.id.clone(),
            c.name.clone(),
            c.company.clone(),
            currency(symbol, c.budget),
            c.period_str(),
            c.crew_size_target.to_string(),
            c.days_remaining(today).to_string(),
        ]);
    }

    let mut out = table.render();
    for c in contractors {
        if let Some(notes) = &c.notes {
            out.push_str(&format!("{}: {}\n", c.id, colorize_optional(notes)));
        }
    }
    out
}

pub fn render_attendance(records: &[&AttendanceRecord], snapshot: &Snapshot<'_>) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 38),
        Column::new("Date", 10),
        Column::new("Worker", 18),
        Column::new("Hours", 5),
        Column::new("Presence", 8),
        Column::new("Site", 12),
        Column::new("Remarks", 20),
    ]);

    for a in records {
        table.add_row(vec![
            a.id.clone(),
            a.date_str(),
            worker_label(snapshot, &a.worker_id),
            format!("{:.1}", a.hours_worked),
            a.presence.to_string(),
            a.site.clone(),
            opt(&a.remarks),
        ]);
    }

    table.render()
}

pub fn render_payments(payments: &[&Payment], snapshot: &Snapshot<'_>, symbol: &str) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 38),
        Column::new("Date", 10),
        Column::new("Worker", 18),
        Column::new("Category", 9),
        Column::new("Amount", 10),
        Column::new("Note", 20),
    ]);

    for p in payments {
        table.add_row(vec![
            p.id.clone(),
            p.date_str(),
            worker_label(snapshot, &p.worker_id),
            p.category.to_string(),
            currency(symbol, p.amount),
            opt(&p.note),
        ]);
    }

    table.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::logic::Core;
    use crate::store::RecordStore;
    use crate::store::ids::SequentialIds;

    #[test]
    fn crew_view_shows_status_labels_without_escapes() {
        let store = RecordStore::seeded(Box::new(SequentialIds::new("n")));
        let snap = store.snapshot();
        let crew: Vec<&Worker> = snap.workers.iter().collect();
        let out = render_crew(&crew, "₹");
        assert!(out.contains("Standby"));
        assert!(out.contains("Leave"));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn summary_line_reads_naturally() {
        let store = RecordStore::seeded(Box::new(SequentialIds::new("n")));
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let d = Core::build_dashboard(&store.snapshot(), today, &Config::default().policy);
        assert_eq!(
            summary_line(&d, "₹"),
            "crew 4 | present 2 | spend ₹10,600/day | health 50% | 1 risk"
        );
    }

    #[test]
    fn attendance_view_names_unknown_workers() {
        let mut store = RecordStore::seeded(Box::new(SequentialIds::new("n")));
        store
            .add_attendance(crate::models::NewAttendance {
                worker_id: "w-77".into(),
                date: NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
                hours_worked: 4.0,
                presence: crate::models::LabourStatus::Present,
                remarks: None,
                site: "Gate".into(),
            })
            .unwrap();
        let snap = store.snapshot();
        let records: Vec<&AttendanceRecord> = snap.attendance.iter().collect();
        let out = render_attendance(&records, &snap);
        assert!(out.contains("unknown (w-77)"));
        assert!(out.contains("Arun Das"));
    }
}
