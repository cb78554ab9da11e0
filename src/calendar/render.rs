use crate::calendar::days::DayRange;
use crate::calendar::occupancy::{DayOccupancy, MonthSummary};
use crate::models::SourcedBooking;
use chrono::{Datelike, Month, Months, NaiveDate};
use std::fmt::Write;
use std::sync::Arc;

const BAR_WIDTH: usize = 31;

/// `DD-MM-YYYY`, the format shown to staff
pub fn format_day(day: NaiveDate) -> String {
    day.format("%d-%m-%Y").to_string()
}

fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map_or("?", |m| m.name())
}

/// Twelve Sunday-first month grids, one marker per day.
pub fn render_year(occupancy: &DayOccupancy, year: i32) -> String {
    let mut out = String::new();
    for month in 1..=12 {
        out.push_str(&render_month(occupancy, year, month));
        out.push('\n');
    }
    out.push_str(". vacant  A Airbnb  B Booking  ! overbooked\n");
    out
}

/// Every day of one calendar month, `None` for an invalid month.
pub fn month_range(year: i32, month: u32) -> Option<DayRange> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    Some(DayRange::new(first, last))
}

pub fn render_month(occupancy: &DayOccupancy, year: i32, month: u32) -> String {
    let mut out = String::new();
    let Some(days) = month_range(year, month) else {
        return out;
    };

    let _ = writeln!(out, "{} {}", month_name(month), year);
    out.push_str("Su  Mo  Tu  We  Th  Fr  Sa\n");

    let offset = NaiveDate::from_ymd_opt(year, month, 1)
        .map_or(0, |first| first.weekday().num_days_from_sunday() as usize);
    out.push_str(&"    ".repeat(offset));

    for day in days {
        let _ = write!(out, "{:>2}{} ", day.day(), occupancy.classify(day).marker());
        if day.weekday().num_days_from_sunday() == 6 {
            out.truncate(out.trim_end().len());
            out.push('\n');
        }
    }
    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}

/// Text bars of occupied days per month, overbooked share marked with `!`.
pub fn render_month_bars(summaries: &[MonthSummary]) -> String {
    let mut out = String::new();
    for s in summaries {
        let name = month_name(s.month);
        let occupied = s.occupied_days.min(BAR_WIDTH);
        let overbooked = s.overbooked_days.min(occupied);
        let _ = writeln!(
            out,
            "{:<3} |{}{}{} {:>2} ({} overbooked)",
            &name[..name.len().min(3)],
            "!".repeat(overbooked),
            "#".repeat(occupied - overbooked),
            " ".repeat(BAR_WIDTH - occupied),
            s.occupied_days,
            s.overbooked_days
        );
    }
    out
}

/// One bar per day from [`DayOccupancy::day_counts`]; `!` once a day holds
/// more than one booking.
pub fn render_day_bars(counts: &[(NaiveDate, usize)]) -> String {
    let mut out = String::new();
    for (day, n) in counts {
        let mark = if *n > 1 { "!" } else { "#" };
        let _ = writeln!(out, "{:>2} |{} {}", day.day(), mark.repeat(*n), n);
    }
    out
}

/// Booking details for one day.
pub fn describe_day(day: NaiveDate, bookings: &[Arc<SourcedBooking>]) -> String {
    let mut out = format!("Bookings on {}\n", format_day(day));
    if bookings.is_empty() {
        out.push_str("No bookings for this date.\n");
        return out;
    }
    for b in bookings {
        let r = &b.record;
        let _ = writeln!(
            out,
            "{} (Guest: {}, Rooms: {}, Persons: {}, Amount: {:.2}, Source: {})",
            r.property, r.guest_name, r.rooms, r.persons, r.amount, b.source
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingRecord;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_grid_layout() {
        let airbnb = vec![BookingRecord::new("A", ymd(2024, 1, 1), ymd(2024, 1, 3))];
        let booking = vec![BookingRecord::new("B", ymd(2024, 1, 2), ymd(2024, 1, 2))];
        let occ = DayOccupancy::unify(&airbnb, &booking);

        let text = render_month(&occ, 2024, 1);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "January 2024");
        // 2024-01-01 is a Monday: one blank cell before it
        assert_eq!(lines[2], "     1A  2!  3A  4.  5.  6.");
        assert_eq!(lines.last().copied(), Some("28. 29. 30. 31."));
    }

    #[test]
    fn year_has_twelve_months() {
        let text = render_year(&DayOccupancy::default(), 2024);
        assert!(text.contains("January 2024"));
        assert!(text.contains("December 2024"));
        assert!(text.contains("29.")); // leap February
    }

    #[test]
    fn bars() {
        let summaries = vec![MonthSummary {
            month: 2,
            occupied_days: 4,
            overbooked_days: 1,
        }];
        let text = render_month_bars(&summaries);
        assert!(text.starts_with("Feb |!###"));
        assert!(text.trim_end().ends_with("4 (1 overbooked)"));
    }

    #[test]
    fn day_bars_for_a_month() {
        let airbnb = vec![BookingRecord::new("A", ymd(2024, 2, 27), ymd(2024, 3, 1))];
        let booking = vec![BookingRecord::new("B", ymd(2024, 2, 28), ymd(2024, 2, 28))];
        let occ = DayOccupancy::unify(&airbnb, &booking);

        let feb = month_range(2024, 2).unwrap();
        assert_eq!(feb.len(), 29);
        let text = render_day_bars(&occ.day_counts(feb));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 29);
        assert_eq!(lines[0], " 1 | 0");
        assert_eq!(lines[26], "27 |# 1");
        assert_eq!(lines[27], "28 |!! 2");
        assert_eq!(lines[28], "29 |# 1");

        assert!(month_range(2024, 13).is_none());
    }

    #[test]
    fn day_details() {
        let mut r = BookingRecord::new("Loft", ymd(2024, 3, 1), ymd(2024, 3, 2));
        r.guest_name = "Ana".into();
        r.amount = 120.0;
        let b = Arc::new(SourcedBooking {
            source: crate::models::Source::Booking,
            record: r,
        });
        let text = describe_day(ymd(2024, 3, 1), &[b]);
        assert_eq!(
            text,
            "Bookings on 01-03-2024\nLoft (Guest: Ana, Rooms: 0, Persons: 0, Amount: 120.00, Source: Booking)\n"
        );

        let empty = describe_day(ymd(2024, 3, 5), &[]);
        assert!(empty.ends_with("No bookings for this date.\n"));
    }
}
