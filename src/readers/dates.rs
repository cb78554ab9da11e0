use super::types::RawCell;
use chrono::{Days, NaiveDate};

const TEXT_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Largest serial a spreadsheet can hold (9999-12-31).
const MAX_SERIAL: f64 = 2_958_465.0;

/// Parse a calendar date from either a text cell or a spreadsheet serial.
pub fn parse_date(cell: &RawCell) -> Option<NaiveDate> {
    match cell {
        RawCell::Empty => None,
        RawCell::Text(s) => parse_date_text(s),
        RawCell::Number(n) => date_from_serial(*n),
        RawCell::Date(d) => Some(*d),
    }
}

pub fn parse_date_text(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in TEXT_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    // ISO date-time: keep the date part
    if s.len() > 10 && matches!(s.as_bytes()[10], b'T' | b' ') {
        return s
            .get(..10)
            .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok());
    }

    None
}

/// Spreadsheet day serial (1899-12-30 epoch); the time-of-day fraction is dropped.
pub fn date_from_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || !(1.0..=MAX_SERIAL).contains(&serial) {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_days(Days::new(serial.floor() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn text_formats() {
        assert_eq!(parse_date_text("2024-01-03"), Some(ymd(2024, 1, 3)));
        assert_eq!(parse_date_text("2024/01/03"), Some(ymd(2024, 1, 3)));
        assert_eq!(parse_date_text("01/03/2024"), Some(ymd(2024, 1, 3)));
        assert_eq!(parse_date_text(" 2024-12-31 "), Some(ymd(2024, 12, 31)));
    }

    #[test]
    fn datetime_keeps_date() {
        assert_eq!(parse_date_text("2024-02-29T15:00:00Z"), Some(ymd(2024, 2, 29)));
        assert_eq!(parse_date_text("2024-02-29 09:30"), Some(ymd(2024, 2, 29)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_date_text(""), None);
        assert_eq!(parse_date_text("tomorrow"), None);
        assert_eq!(parse_date_text("2024-02-30"), None);
        assert_eq!(parse_date_text("45293"), None);
    }

    #[test]
    fn serials() {
        assert_eq!(date_from_serial(45292.0), Some(ymd(2024, 1, 1)));
        // afternoon check-in on the same day
        assert_eq!(date_from_serial(45293.625), Some(ymd(2024, 1, 2)));
        assert_eq!(date_from_serial(0.0), None);
        assert_eq!(date_from_serial(f64::NAN), None);
        assert_eq!(date_from_serial(1e12), None);
    }

    #[test]
    fn serial_and_text_agree() {
        let text = parse_date(&RawCell::Text("2024-07-15".into()));
        let serial = parse_date(&RawCell::Number(45488.0));
        assert_eq!(text, serial);
        assert_eq!(parse_date(&RawCell::Empty), None);
    }
}
