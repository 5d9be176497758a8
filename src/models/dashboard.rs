use super::insight::{RiskFlag, SuggestedAction};
use chrono::NaiveDate;
use serde::Serialize;

/// View-ready aggregates for the current selection, recomputed from scratch
/// on every store change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub today: NaiveDate,
    pub selected_contractor_id: Option<String>,
    pub contractor_name: Option<String>, // None when the selection does not resolve
    pub crew_ids: Vec<String>,
    pub crew_size: usize,
    pub present_count: usize,
    pub off_count: usize,
    pub on_leave: usize,
    pub on_standby: usize,
    pub daily_spend: f64,
    pub weekly_burn: Option<f64>,
    pub total_payments: f64,
    pub crew_health_pct: u32,
    pub attendance_in_scope: usize,
    pub payments_in_scope: usize,
    pub risks: Vec<RiskFlag>,
    pub actions: Vec<SuggestedAction>,
}

impl Dashboard {
    pub fn has_risks(&self) -> bool {
        !self.risks.is_empty()
    }

    pub fn scope_label(&self) -> String {
        match (&self.contractor_name, &self.selected_contractor_id) {
            (Some(name), _) => name.clone(),
            (None, Some(id)) => format!("unknown contractor '{id}'"),
            (None, None) => "all contractors".to_string(),
        }
    }
}
