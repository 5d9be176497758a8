// src/export/logic.rs

use crate::core::calculator::crew::build_scope;
use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_parent, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{attendance_row, dashboard_metrics, payment_row, worker_row};
use crate::export::{ExportFormat, ExportTarget};
use crate::models::Dashboard;
use crate::store::Snapshot;
use crate::ui::messages::warning;
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the current selection's crew, scoped logs, or dashboard.
    ///
    /// Collections are exported as rows (one per record); the dashboard is
    /// exported whole as JSON, or as `metric,value` rows as CSV.
    pub fn export(
        snapshot: &Snapshot<'_>,
        dashboard: &Dashboard,
        target: ExportTarget,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_parent(path)?;
        ensure_writable(path, force)?;

        let scope = build_scope(snapshot);

        match target {
            ExportTarget::Crew => {
                let rows: Vec<_> = scope.crew.iter().map(|w| worker_row(w)).collect();
                if rows.is_empty() {
                    warning("No workers in the current selection.");
                }
                Self::write_rows(&rows, format, path)
            }
            ExportTarget::Attendance => {
                let rows: Vec<_> = scope
                    .attendance
                    .iter()
                    .map(|a| attendance_row(a, snapshot))
                    .collect();
                Self::write_rows(&rows, format, path)
            }
            ExportTarget::Payments => {
                let rows: Vec<_> = scope
                    .payments
                    .iter()
                    .map(|p| payment_row(p, snapshot))
                    .collect();
                Self::write_rows(&rows, format, path)
            }
            ExportTarget::Dashboard => match format {
                ExportFormat::Json => export_json(dashboard, path),
                ExportFormat::Csv => export_csv(&dashboard_metrics(dashboard), path),
            },
        }
    }

    fn write_rows<T: serde::Serialize>(rows: &[T], format: ExportFormat, path: &Path) -> AppResult<()> {
        match format {
            ExportFormat::Csv => export_csv(rows, path),
            ExportFormat::Json => export_json(rows, path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::logic::Core;
    use crate::core::policy::Policy;
    use crate::store::RecordStore;
    use crate::store::ids::SequentialIds;
    use chrono::NaiveDate;
    use std::{env, fs};

    fn export_to(name: &str, target: ExportTarget, format: ExportFormat, selected: Option<&str>) -> String {
        let mut store = RecordStore::seeded(Box::new(SequentialIds::new("n")));
        store.set_selected_contractor(selected);
        let snap = store.snapshot();
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let d = Core::build_dashboard(&snap, today, &Policy::default());

        let path = env::temp_dir().join(format!("sitecrew_unit_{name}.{}", format.as_str()));
        fs::remove_file(&path).ok();
        ExportLogic::export(&snap, &d, target, format, &path, false).unwrap();
        fs::read_to_string(&path).unwrap()
    }

    #[test]
    fn crew_csv_has_header_and_scoped_rows() {
        let out = export_to("crew", ExportTarget::Crew, ExportFormat::Csv, Some("c-1"));
        let mut lines = out.lines();
        assert_eq!(
            lines.next().unwrap(),
            "id,name,trade,daily_rate,status,phone,contractor_id"
        );
        assert_eq!(lines.count(), 3);
        assert!(!out.contains("Imran Shaikh"));
    }

    #[test]
    fn payments_json_resolves_worker_names() {
        let out = export_to("payments", ExportTarget::Payments, ExportFormat::Json, None);
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v.as_array().unwrap().len(), 2);
        assert_eq!(v[0]["worker_name"], "Deepak Yadav");
        assert_eq!(v[1]["category"], "deduction");
    }

    #[test]
    fn dashboard_json_keeps_typed_risks() {
        let out = export_to("dash", ExportTarget::Dashboard, ExportFormat::Json, Some("c-1"));
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["daily_spend"], 10600.0);
        assert_eq!(v["risks"][0]["kind"], "budget_exposure");
        assert_eq!(v["actions"][0]["kind"], "redeploy");
    }

    #[test]
    fn dashboard_csv_is_metric_rows() {
        let out = export_to("dash_csv", ExportTarget::Dashboard, ExportFormat::Csv, None);
        assert!(out.starts_with("metric,value\n"));
        assert!(out.contains("daily_spend,10600\n"));
        assert!(out.contains("crew_health_pct,50\n"));
        assert!(out.contains("risk.attendance_follow_up,Attendance follow-up: 1 record logged as absent\n"));
        assert!(out.contains("action.coordination_brief,"));
    }
}
