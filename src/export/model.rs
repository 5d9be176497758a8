// src/export/model.rs

use crate::models::{AttendanceRecord, Dashboard, Payment, Worker};
use crate::store::Snapshot;
use serde::Serialize;

/// Flat rows for CSV / JSON. Foreign keys are resolved to names where the
/// referenced worker still exists.
#[derive(Serialize, Clone, Debug)]
pub struct WorkerExport {
    pub id: String,
    pub name: String,
    pub trade: String,
    pub daily_rate: f64,
    pub status: String,
    pub phone: String,
    pub contractor_id: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct AttendanceExport {
    pub id: String,
    pub date: String,
    pub worker_id: String,
    pub worker_name: String,
    pub hours_worked: f64,
    pub presence: String,
    pub site: String,
    pub remarks: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct PaymentExport {
    pub id: String,
    pub date: String,
    pub worker_id: String,
    pub worker_name: String,
    pub category: String,
    pub amount: f64,
    pub note: String,
}

/// `metric,value` rows: the CSV shape of a dashboard.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MetricExport {
    pub metric: String,
    pub value: String,
}

fn name_of(snapshot: &Snapshot<'_>, worker_id: &str) -> String {
    snapshot
        .worker(worker_id)
        .map(|w| w.name.clone())
        .unwrap_or_default()
}

pub(crate) fn worker_row(w: &Worker) -> WorkerExport {
    WorkerExport {
        id: w.id.clone(),
        name: w.name.clone(),
        trade: w.trade.clone(),
        daily_rate: w.daily_rate,
        status: w.status.to_string(),
        phone: w.phone.clone().unwrap_or_default(),
        contractor_id: w.contractor_id.clone(),
    }
}

pub(crate) fn attendance_row(a: &AttendanceRecord, snapshot: &Snapshot<'_>) -> AttendanceExport {
    AttendanceExport {
        id: a.id.clone(),
        date: a.date_str(),
        worker_id: a.worker_id.clone(),
        worker_name: name_of(snapshot, &a.worker_id),
        hours_worked: a.hours_worked,
        presence: a.presence.to_string(),
        site: a.site.clone(),
        remarks: a.remarks.clone().unwrap_or_default(),
    }
}

pub(crate) fn payment_row(p: &Payment, snapshot: &Snapshot<'_>) -> PaymentExport {
    PaymentExport {
        id: p.id.clone(),
        date: p.date_str(),
        worker_id: p.worker_id.clone(),
        worker_name: name_of(snapshot, &p.worker_id),
        category: p.category.to_string(),
        amount: p.amount,
        note: p.note.clone().unwrap_or_default(),
    }
}

pub(crate) fn dashboard_metrics(d: &Dashboard) -> Vec<MetricExport> {
    let mut rows = vec![
        ("today", d.today.format("%Y-%m-%d").to_string()),
        ("scope", d.scope_label()),
        ("crew_size", d.crew_size.to_string()),
        ("present_count", d.present_count.to_string()),
        ("off_count", d.off_count.to_string()),
        ("on_leave", d.on_leave.to_string()),
        ("on_standby", d.on_standby.to_string()),
        ("daily_spend", d.daily_spend.to_string()),
        (
            "weekly_burn",
            d.weekly_burn.map(|b| b.to_string()).unwrap_or_default(),
        ),
        ("total_payments", d.total_payments.to_string()),
        ("crew_health_pct", d.crew_health_pct.to_string()),
    ];

    let mut out: Vec<MetricExport> = rows
        .into_iter()
        .map(|(metric, value)| MetricExport {
            metric: metric.to_string(),
            value,
        })
        .collect();

    // one row per flag, keyed by its stable code
    out.extend(d.risks.iter().map(|r| MetricExport {
        metric: format!("risk.{}", r.code()),
        value: r.to_string(),
    }));
    out.extend(d.actions.iter().map(|a| MetricExport {
        metric: format!("action.{}", a.code()),
        value: a.to_string(),
    }));

    out
}
