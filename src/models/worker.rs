use super::labour_status::LabourStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: String,
    pub name: String,
    pub trade: String,
    pub daily_rate: f64,
    pub status: LabourStatus, // today's presence outside the attendance log
    pub phone: Option<String>,
    pub contractor_id: String, // not enforced, may dangle
}

/// Worker fields supplied by a caller; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorker {
    pub name: String,
    pub trade: String,
    pub daily_rate: f64,
    pub status: LabourStatus,
    pub phone: Option<String>,
    pub contractor_id: String,
}

impl NewWorker {
    pub fn with_id(self, id: String) -> Worker {
        Worker {
            id,
            name: self.name,
            trade: self.trade,
            daily_rate: self.daily_rate,
            status: self.status,
            phone: self.phone,
            contractor_id: self.contractor_id,
        }
    }
}
