use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform a booking was exported from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Source {
    Airbnb,
    Booking,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Airbnb => write!(f, "Airbnb"),
            Source::Booking => write!(f, "Booking"),
        }
    }
}

/// Canonical booking data model, independent of the export schema
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingRecord {
    pub property: String,
    /// First occupied day
    pub check_in: NaiveDate,
    /// Last occupied day, counted inclusively when expanding into days
    pub check_out: NaiveDate,
    pub guest_name: String,
    pub rooms: u32,
    pub persons: u32,
    pub amount: f64,
    pub check_in_time: String,
    pub check_out_time: String,
    pub payment_method: String,
    pub hotel_id: String,
}

impl BookingRecord {
    /// Record with only the required fields set; optional fields take their defaults.
    pub fn new(property: impl Into<String>, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            property: property.into(),
            check_in,
            check_out,
            guest_name: String::new(),
            rooms: 0,
            persons: 0,
            amount: 0.0,
            check_in_time: String::new(),
            check_out_time: String::new(),
            payment_method: String::new(),
            hotel_id: String::new(),
        }
    }
}

/// A booking after unification: the record plus the platform it came from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourcedBooking {
    pub source: Source,
    #[serde(flatten)]
    pub record: BookingRecord,
}

/// Why a raw row produced no booking record
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    #[error("blank row")]
    BlankRow,
    #[error("missing column: {column}")]
    MissingColumn { column: &'static str },
    #[error("invalid {field} date: {value:?}")]
    InvalidDate { field: &'static str, value: String },
    #[error("check-out {check_out} is before check-in {check_in}")]
    CheckOutBeforeCheckIn {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_has_defaults() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let r = BookingRecord::new("UnitA", d, d);
        assert_eq!(r.property, "UnitA");
        assert_eq!(r.rooms, 0);
        assert_eq!(r.amount, 0.0);
        assert!(r.guest_name.is_empty());
    }

    #[test]
    fn sourced_booking_serializes_flat() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let b = SourcedBooking {
            source: Source::Booking,
            record: BookingRecord::new("UnitB", d, d),
        };
        let json = serde_json::to_value(&b).unwrap();
        assert_eq!(json["source"], "Booking");
        assert_eq!(json["property"], "UnitB");
        assert_eq!(json["check_in"], "2024-03-01");
    }

    #[test]
    fn skip_reason_messages() {
        let reason = SkipReason::InvalidDate {
            field: "check-in",
            value: "".into(),
        };
        assert_eq!(reason.to_string(), "invalid check-in date: \"\"");
        assert_eq!(SkipReason::BlankRow.to_string(), "blank row");
    }
}
