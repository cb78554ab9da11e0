use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which export layout the columns follow
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SchemaVariant {
    /// property, check-in, check-out
    PropertyOnly,
    /// property, check-in, check-out, check-in time, check-out time, client, payment method
    CheckTimes,
    /// 21-column guest/financial export
    #[default]
    FullGuest,
}

impl SchemaVariant {
    pub fn columns(&self) -> ColumnMap {
        match self {
            SchemaVariant::PropertyOnly => ColumnMap {
                property: 0,
                check_in: 1,
                check_out: 2,
                ..ColumnMap::EMPTY
            },
            SchemaVariant::CheckTimes => ColumnMap {
                property: 0,
                check_in: 1,
                check_out: 2,
                check_in_time: Some(3),
                check_out_time: Some(4),
                guest_name: Some(5),
                payment_method: Some(6),
                ..ColumnMap::EMPTY
            },
            // reservation no, invoice no, booked on, arrival, departure, booker,
            // guest, rooms, persons, room nights, commission %, original amount,
            // final amount, commission, status, request, currency, hotel id,
            // property name, city, country
            SchemaVariant::FullGuest => ColumnMap {
                property: 18,
                check_in: 3,
                check_out: 4,
                guest_name: Some(6),
                rooms: Some(7),
                persons: Some(8),
                amount: Some(11),
                hotel_id: Some(17),
                ..ColumnMap::EMPTY
            },
        }
    }
}

impl FromStr for SchemaVariant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "property-only" => Ok(SchemaVariant::PropertyOnly),
            "check-times" => Ok(SchemaVariant::CheckTimes),
            "full-guest" => Ok(SchemaVariant::FullGuest),
            other => anyhow::bail!("unknown schema variant: {other}"),
        }
    }
}

/// Column positions of each canonical field within a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub property: usize,
    pub check_in: usize,
    pub check_out: usize,
    pub guest_name: Option<usize>,
    pub rooms: Option<usize>,
    pub persons: Option<usize>,
    pub amount: Option<usize>,
    pub check_in_time: Option<usize>,
    pub check_out_time: Option<usize>,
    pub payment_method: Option<usize>,
    pub hotel_id: Option<usize>,
}

impl ColumnMap {
    const EMPTY: ColumnMap = ColumnMap {
        property: 0,
        check_in: 0,
        check_out: 0,
        guest_name: None,
        rooms: None,
        persons: None,
        amount: None,
        check_in_time: None,
        check_out_time: None,
        payment_method: None,
        hotel_id: None,
    };
}

/// One cell of an input row, before any field interpretation
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Empty,
    Text(String),
    Number(f64),
    /// Calendar date already resolved by the workbook (epoch included)
    Date(NaiveDate),
}

impl RawCell {
    pub fn is_blank(&self) -> bool {
        match self {
            RawCell::Empty => true,
            RawCell::Text(s) => s.trim().is_empty(),
            RawCell::Number(_) | RawCell::Date(_) => false,
        }
    }

    /// Cell as display text; whole numbers lose their fractional part.
    pub fn to_text(&self) -> String {
        match self {
            RawCell::Empty => String::new(),
            RawCell::Text(s) => s.trim().to_string(),
            RawCell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            RawCell::Number(n) => n.to_string(),
            RawCell::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Cells of one input row, in column order
pub type RawRow = Vec<RawCell>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_from_str() {
        assert_eq!("property-only".parse::<SchemaVariant>().unwrap(), SchemaVariant::PropertyOnly);
        assert_eq!(" Check-Times ".parse::<SchemaVariant>().unwrap(), SchemaVariant::CheckTimes);
        assert_eq!("full-guest".parse::<SchemaVariant>().unwrap(), SchemaVariant::FullGuest);
        assert!("airbnb".parse::<SchemaVariant>().is_err());
    }

    #[test]
    fn full_guest_layout() {
        let cols = SchemaVariant::FullGuest.columns();
        assert_eq!(cols.check_in, 3);
        assert_eq!(cols.check_out, 4);
        assert_eq!(cols.property, 18);
        assert_eq!(cols.amount, Some(11));
        assert_eq!(cols.check_in_time, None);
    }

    #[test]
    fn cell_text() {
        assert_eq!(RawCell::Number(3.0).to_text(), "3");
        assert_eq!(RawCell::Number(2.5).to_text(), "2.5");
        assert_eq!(RawCell::Text("  Casa Azul ".into()).to_text(), "Casa Azul");
        assert!(RawCell::Text("   ".into()).is_blank());
        assert!(!RawCell::Number(0.0).is_blank());

        let date = RawCell::Date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(date.to_text(), "2024-01-02");
        assert!(!date.is_blank());
    }
}
