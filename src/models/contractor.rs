use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A contracting firm engaged on site. Contractors are never mutated once
/// created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contractor {
    pub id: String,
    pub name: String,
    pub company: String,
    pub scope: String,
    pub budget: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub crew_size_target: u32,
    pub notes: Option<String>,
}

impl Contractor {
    /// Calendar days from `today` to the contract end date. Negative once the
    /// contract has run past its end date.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.end_date - today).num_days()
    }

    pub fn period_str(&self) -> String {
        format!(
            "{} → {}",
            self.start_date.format("%Y-%m-%d"),
            self.end_date.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contractor(end: NaiveDate) -> Contractor {
        Contractor {
            id: "c-9".into(),
            name: "Test".into(),
            company: "Test Co".into(),
            scope: "Scaffolding".into(),
            budget: 1000.0,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end_date: end,
            crew_size_target: 4,
            notes: None,
        }
    }

    #[test]
    fn days_remaining_can_go_negative() {
        let c = contractor(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        let before = NaiveDate::from_ymd_opt(2026, 2, 20).unwrap();
        let after = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();

        assert_eq!(c.days_remaining(before), 9);
        assert_eq!(c.days_remaining(c.end_date), 0);
        assert_eq!(c.days_remaining(after), -3);
    }
}
