//! Validation of caller-supplied values. The store itself accepts anything;
//! the CLI and the session check input here before mutating.

use crate::errors::{AppError, AppResult};
use crate::models::{LabourStatus, PaymentCategory};

pub fn parse_status(raw: &str) -> AppResult<LabourStatus> {
    LabourStatus::from_code(raw).ok_or_else(|| {
        AppError::InvalidStatus(format!(
            "'{raw}'. Use one of: present, absent, leave, standby"
        ))
    })
}

pub fn parse_category(raw: &str) -> AppResult<PaymentCategory> {
    PaymentCategory::from_code(raw).ok_or_else(|| {
        AppError::InvalidCategory(format!(
            "'{raw}'. Use one of: advance, material, bonus, deduction"
        ))
    })
}

/// Finite and not negative.
pub fn non_negative(value: f64, label: &str) -> AppResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(AppError::InvalidAmount(format!(
            "{label} must be zero or more, got {value}"
        )))
    }
}

pub fn parse_non_negative(raw: &str, label: &str) -> AppResult<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidAmount(format!("{label} is not a number: '{raw}'")))?;
    non_negative(value, label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_and_nan_are_rejected() {
        assert!(non_negative(-0.5, "hours").is_err());
        assert!(non_negative(f64::NAN, "hours").is_err());
        assert_eq!(non_negative(0.0, "hours").unwrap(), 0.0);
    }

    #[test]
    fn parse_reports_the_bad_text() {
        let err = parse_non_negative("ten", "amount").unwrap_err();
        assert!(err.to_string().contains("'ten'"));
        assert_eq!(parse_non_negative(" 12.5 ", "amount").unwrap(), 12.5);
    }

    #[test]
    fn unknown_status_lists_choices() {
        let err = parse_status("sick").unwrap_err();
        assert!(matches!(err, AppError::InvalidStatus(_)));
        assert!(err.to_string().contains("standby"));
        assert!(parse_category("tips").is_err());
    }
}
