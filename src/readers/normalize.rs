use super::dates::parse_date;
use super::types::{ColumnMap, RawCell};
use crate::models::{BookingRecord, SkipReason};

/// Map one positional row onto a booking record.
///
/// Rows without usable dates are rejected; gaps in optional fields fall back
/// to empty text or zero.
pub fn normalize_row(row: &[RawCell], cols: &ColumnMap) -> Result<BookingRecord, SkipReason> {
    if row.iter().all(RawCell::is_blank) {
        return Err(SkipReason::BlankRow);
    }

    let property = required(row, cols.property, "property")?;
    let check_in_cell = required(row, cols.check_in, "check-in")?;
    let check_out_cell = required(row, cols.check_out, "check-out")?;

    let check_in = parse_date(check_in_cell).ok_or_else(|| SkipReason::InvalidDate {
        field: "check-in",
        value: check_in_cell.to_text(),
    })?;
    let check_out = parse_date(check_out_cell).ok_or_else(|| SkipReason::InvalidDate {
        field: "check-out",
        value: check_out_cell.to_text(),
    })?;
    if check_out < check_in {
        return Err(SkipReason::CheckOutBeforeCheckIn { check_in, check_out });
    }

    let text = |idx: Option<usize>| idx.and_then(|i| row.get(i)).map(RawCell::to_text).unwrap_or_default();
    let cell = |idx: Option<usize>| idx.and_then(|i| row.get(i)).unwrap_or(&RawCell::Empty);

    Ok(BookingRecord {
        property: property.to_text(),
        check_in,
        check_out,
        guest_name: text(cols.guest_name),
        rooms: parse_count(cell(cols.rooms)),
        persons: parse_count(cell(cols.persons)),
        amount: parse_amount(cell(cols.amount)),
        check_in_time: text(cols.check_in_time),
        check_out_time: text(cols.check_out_time),
        payment_method: text(cols.payment_method),
        hotel_id: text(cols.hotel_id),
    })
}

fn required<'a>(row: &'a [RawCell], idx: usize, column: &'static str) -> Result<&'a RawCell, SkipReason> {
    row.get(idx).ok_or(SkipReason::MissingColumn { column })
}

/// Leading whole number of the cell, 0 when there is none.
pub fn parse_count(cell: &RawCell) -> u32 {
    match cell {
        RawCell::Number(n) if n.is_finite() && *n > 0.0 => n.trunc().min(u32::MAX as f64) as u32,
        RawCell::Text(s) => {
            let s = s.trim();
            let s = s.strip_prefix('+').unwrap_or(s);
            let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
            digits
                .parse::<u64>()
                .map(|n| n.min(u32::MAX as u64) as u32)
                .unwrap_or(0)
        }
        _ => 0,
    }
}

/// Leading decimal number of the cell, 0.0 when there is none or it is negative.
pub fn parse_amount(cell: &RawCell) -> f64 {
    let value = match cell {
        RawCell::Number(n) => *n,
        RawCell::Text(s) => leading_decimal(s.trim()).unwrap_or(0.0),
        RawCell::Empty | RawCell::Date(_) => 0.0,
    };
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn leading_decimal(s: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }
    s[..end].parse().ok()
}
