use serde::{Deserialize, Serialize};
use std::fmt;

/// Presence of a worker on site, either as the worker's current status or as
/// the presence logged on an attendance record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabourStatus {
    Present,
    Absent,
    Leave,
    Standby,
}

impl LabourStatus {
    pub const ALL: [LabourStatus; 4] = [
        LabourStatus::Present,
        LabourStatus::Absent,
        LabourStatus::Leave,
        LabourStatus::Standby,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LabourStatus::Present => "present",
            LabourStatus::Absent => "absent",
            LabourStatus::Leave => "leave",
            LabourStatus::Standby => "standby",
        }
    }

    /// Helper: convert input code from CLI (full name or first letter, any case)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "present" | "p" => Some(LabourStatus::Present),
            "absent" | "a" => Some(LabourStatus::Absent),
            "leave" | "l" => Some(LabourStatus::Leave),
            "standby" | "s" => Some(LabourStatus::Standby),
            _ => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, LabourStatus::Present)
    }
}

impl fmt::Display for LabourStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_short_codes() {
        assert_eq!(LabourStatus::from_code("Present"), Some(LabourStatus::Present));
        assert_eq!(LabourStatus::from_code("s"), Some(LabourStatus::Standby));
        assert_eq!(LabourStatus::from_code(" LEAVE "), Some(LabourStatus::Leave));
        assert_eq!(LabourStatus::from_code("sick"), None);
    }

    #[test]
    fn every_status_parses_back_from_its_name() {
        for status in LabourStatus::ALL {
            assert_eq!(LabourStatus::from_code(status.as_str()), Some(status));
        }
    }
}
