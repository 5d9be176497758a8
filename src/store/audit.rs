use chrono::{DateTime, Local};
use serde::Serialize;

/// One line of the internal log: a successful mutation.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEntry {
    pub seq: usize,
    pub at: DateTime<Local>,
    pub operation: String,
    pub target: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    pub fn record(&mut self, operation: &str, target: &str, message: &str) {
        self.entries.push(AuditEntry {
            seq: self.entries.len() + 1,
            at: Local::now(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
    }

    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }
}
