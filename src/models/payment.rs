use super::payment_category::PaymentCategory;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub worker_id: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: PaymentCategory,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    pub worker_id: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: PaymentCategory,
    pub note: Option<String>,
}

impl NewPayment {
    pub fn with_id(self, id: String) -> Payment {
        Payment {
            id,
            worker_id: self.worker_id,
            amount: self.amount,
            date: self.date,
            category: self.category,
            note: self.note,
        }
    }
}

impl Payment {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
