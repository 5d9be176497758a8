//! Formatting utilities used for CLI and export outputs.

use crate::models::LabourStatus;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Amount with thousands separators, decimals only when there are cents.
///
/// `10600.0` → `10,600`, `1234.5` → `1,234.50`
pub fn money(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let rounded = (amount.abs() * 100.0).round() / 100.0;

    let mut whole = rounded.trunc() as u64;
    let mut cents = ((rounded - whole as f64) * 100.0).round() as u64;
    if cents >= 100 {
        whole += 1;
        cents = 0;
    }

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if cents == 0 {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{cents:02}")
    }
}

/// Same as [`money`] with the configured currency symbol in front.
pub fn currency(symbol: &str, amount: f64) -> String {
    format!("{}{}", symbol, money(amount))
}

/// `1 worker`, `2 workers`
pub fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}

/// Restituisce l'etichetta leggibile dello stato.
/// Usata nelle tabelle della crew e in eventuali output human-readable.
pub fn describe_status(status: LabourStatus) -> &'static str {
    match status {
        LabourStatus::Present => "Present",
        LabourStatus::Standby => "Standby",
        LabourStatus::Leave => "Leave",
        LabourStatus::Absent => "Absent",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(money(0.0), "0");
        assert_eq!(money(950.0), "950");
        assert_eq!(money(10600.0), "10,600");
        assert_eq!(money(1_234_567.0), "1,234,567");
    }

    #[test]
    fn money_keeps_cents_and_sign() {
        assert_eq!(money(1234.5), "1,234.50");
        assert_eq!(money(-2500.0), "-2,500");
        assert_eq!(money(0.999), "1");
    }

    #[test]
    fn plural_picks_form_by_count() {
        assert_eq!(plural(1, "day", "days"), "1 day");
        assert_eq!(plural(0, "day", "days"), "0 days");
        assert_eq!(plural(12, "day", "days"), "12 days");
    }

    #[test]
    fn status_labels_are_plain_text() {
        assert_eq!(describe_status(LabourStatus::Standby), "Standby");
        assert!(!describe_status(LabourStatus::Leave).contains('\x1b'));
    }
}
