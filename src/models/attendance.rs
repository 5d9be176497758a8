use super::labour_status::LabourStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub worker_id: String,
    pub date: NaiveDate,
    pub hours_worked: f64,
    pub presence: LabourStatus, // the only field patched after creation
    pub remarks: Option<String>,
    pub site: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAttendance {
    pub worker_id: String,
    pub date: NaiveDate,
    pub hours_worked: f64,
    pub presence: LabourStatus,
    pub remarks: Option<String>,
    pub site: String,
}

impl NewAttendance {
    pub fn with_id(self, id: String) -> AttendanceRecord {
        AttendanceRecord {
            id,
            worker_id: self.worker_id,
            date: self.date,
            hours_worked: self.hours_worked,
            presence: self.presence,
            remarks: self.remarks,
            site: self.site,
        }
    }
}

impl AttendanceRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
