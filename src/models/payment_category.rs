use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentCategory {
    Advance,
    Material,
    Bonus,
    Deduction,
}

impl PaymentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentCategory::Advance => "advance",
            PaymentCategory::Material => "material",
            PaymentCategory::Bonus => "bonus",
            PaymentCategory::Deduction => "deduction",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "advance" => Some(PaymentCategory::Advance),
            "material" => Some(PaymentCategory::Material),
            "bonus" => Some(PaymentCategory::Bonus),
            "deduction" => Some(PaymentCategory::Deduction),
            _ => None,
        }
    }

    pub fn is_deduction(&self) -> bool {
        matches!(self, PaymentCategory::Deduction)
    }
}

impl fmt::Display for PaymentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
