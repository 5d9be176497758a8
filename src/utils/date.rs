use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse an optional `YYYY-MM-DD` argument, falling back to `default`.
pub fn parse_date_or(s: Option<&str>, default: NaiveDate) -> Result<NaiveDate, String> {
    match s {
        Some(raw) => parse_date(raw).ok_or_else(|| raw.to_string()),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_or_uses_default_only_when_absent() {
        let d = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        assert_eq!(parse_date_or(None, d), Ok(d));
        assert_eq!(
            parse_date_or(Some("2026-11-02"), d),
            Ok(NaiveDate::from_ymd_opt(2026, 11, 2).unwrap())
        );
        assert_eq!(parse_date_or(Some("02/11/2026"), d), Err("02/11/2026".into()));
    }
}
