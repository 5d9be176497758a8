//! Crew resolution and scoped logs.

use crate::models::{AttendanceRecord, Contractor, Payment, Worker};
use crate::store::Snapshot;
use std::collections::HashSet;

/// Everything the aggregates are computed over for the current selection.
#[derive(Debug, Clone, Default)]
pub struct CrewScope<'a> {
    /// Selected contractor, when the selection resolves to one.
    pub contractor: Option<&'a Contractor>,
    pub crew: Vec<&'a Worker>,
    pub attendance: Vec<&'a AttendanceRecord>,
    pub payments: Vec<&'a Payment>,
}

/// Workers of the selected contractor, or every worker when nothing is
/// selected. An unknown selection matches nobody.
pub fn resolve_crew<'a>(snapshot: &Snapshot<'a>) -> Vec<&'a Worker> {
    match snapshot.selected_contractor_id {
        Some(selected) => snapshot
            .workers
            .iter()
            .filter(|w| w.contractor_id == selected)
            .collect(),
        None => snapshot.workers.iter().collect(),
    }
}

pub fn build_scope<'a>(snapshot: &Snapshot<'a>) -> CrewScope<'a> {
    let crew = resolve_crew(snapshot);
    let ids: HashSet<&str> = crew.iter().map(|w| w.id.as_str()).collect();

    let attendance = snapshot
        .attendance
        .iter()
        .filter(|a| ids.contains(a.worker_id.as_str()))
        .collect();
    let payments = snapshot
        .payments
        .iter()
        .filter(|p| ids.contains(p.worker_id.as_str()))
        .collect();

    CrewScope {
        contractor: snapshot.selected_contractor(),
        crew,
        attendance,
        payments,
    }
}
