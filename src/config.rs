use crate::readers::SchemaVariant;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::PathBuf;

/// Runtime settings, from `BOOKING_CALENDAR_*` environment variables
/// with the two export paths overridable as positional arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub airbnb_path: PathBuf,
    pub booking_path: PathBuf,
    pub schema: SchemaVariant,
    pub year: i32,
    pub property: Option<String>,
    pub day: Option<NaiveDate>,
    pub cleaner_phone: Option<String>,
    pub output: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_lookup(|key| std::env::var(key).ok(), &args)
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>, args: &[String]) -> Result<Self> {
        let airbnb_path = args
            .first()
            .cloned()
            .or_else(|| var("BOOKING_CALENDAR_AIRBNB"))
            .context("Please select the Airbnb export (argument 1 or BOOKING_CALENDAR_AIRBNB)")?;
        let booking_path = args
            .get(1)
            .cloned()
            .or_else(|| var("BOOKING_CALENDAR_BOOKING"))
            .context("Please select the Booking.com export (argument 2 or BOOKING_CALENDAR_BOOKING)")?;

        let schema = match var("BOOKING_CALENDAR_SCHEMA") {
            Some(s) => s.parse()?,
            None => SchemaVariant::default(),
        };
        let year = match var("BOOKING_CALENDAR_YEAR") {
            Some(s) => s
                .trim()
                .parse()
                .with_context(|| format!("Invalid BOOKING_CALENDAR_YEAR: {s}"))?,
            None => 2024,
        };
        let day = match var("BOOKING_CALENDAR_DAY") {
            Some(s) => Some(
                NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                    .with_context(|| format!("Invalid BOOKING_CALENDAR_DAY: {s}"))?,
            ),
            None => None,
        };

        Ok(Self {
            airbnb_path: airbnb_path.into(),
            booking_path: booking_path.into(),
            schema,
            year,
            property: var("BOOKING_CALENDAR_PROPERTY").filter(|s| !s.trim().is_empty()),
            day,
            cleaner_phone: var("BOOKING_CALENDAR_CLEANER_PHONE").filter(|s| !s.trim().is_empty()),
            output: var("BOOKING_CALENDAR_OUTPUT")
                .unwrap_or_else(|| "occupancy.json".into())
                .into(),
        })
    }
}
