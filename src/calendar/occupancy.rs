use crate::calendar::days::DayRange;
use crate::models::{BookingRecord, Source, SourcedBooking};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Stays longer than this still get indexed, but are reported.
const LONG_STAY_DAYS: usize = 366;

/// Occupancy state of a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayStatus {
    Vacant,
    SingleSource(Source),
    /// Two or more bookings, whatever platforms they came from
    Overbooked,
}

impl DayStatus {
    /// One-character calendar marker
    pub fn marker(&self) -> char {
        match self {
            DayStatus::Vacant => '.',
            DayStatus::SingleSource(Source::Airbnb) => 'A',
            DayStatus::SingleSource(Source::Booking) => 'B',
            DayStatus::Overbooked => '!',
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayStatus::Vacant => write!(f, "none"),
            DayStatus::SingleSource(source) => write!(f, "{source}"),
            DayStatus::Overbooked => write!(f, "Overbooking"),
        }
    }
}

/// Per-month totals for the dashboard bars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthSummary {
    pub month: u32,
    pub occupied_days: usize,
    pub overbooked_days: usize,
}

/// Day → bookings active that day, in unification order.
///
/// Built in one pass by [`DayOccupancy::unify`] and never patched afterwards;
/// a reload builds a new value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DayOccupancy {
    days: BTreeMap<NaiveDate, Vec<Arc<SourcedBooking>>>,
}

impl DayOccupancy {
    /// Tag both exports with their platform and expand every stay into days.
    /// Airbnb bookings go first in every bucket.
    pub fn unify(airbnb: &[BookingRecord], booking: &[BookingRecord]) -> Self {
        let tagged = airbnb
            .iter()
            .map(|r| (Source::Airbnb, r))
            .chain(booking.iter().map(|r| (Source::Booking, r)));

        let mut occupancy = Self::default();
        for (source, record) in tagged {
            let entry = Arc::new(SourcedBooking {
                source,
                record: record.clone(),
            });
            occupancy.insert(entry);
        }

        debug!(
            "Unified {} Airbnb and {} Booking records into {} days",
            airbnb.len(),
            booking.len(),
            occupancy.days.len()
        );
        occupancy
    }

    fn insert(&mut self, entry: Arc<SourcedBooking>) {
        let stay = DayRange::new(entry.record.check_in, entry.record.check_out);
        if stay.len() > LONG_STAY_DAYS {
            warn!(
                "Unusually long {} stay at {:?}: {} to {} ({} days)",
                entry.source,
                entry.record.property,
                entry.record.check_in,
                entry.record.check_out,
                stay.len()
            );
        }
        for day in stay {
            self.days.entry(day).or_default().push(Arc::clone(&entry));
        }
    }

    /// Bookings active on `day`, empty when vacant.
    pub fn records_on(&self, day: NaiveDate) -> &[Arc<SourcedBooking>] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn classify(&self, day: NaiveDate) -> DayStatus {
        match self.records_on(day) {
            [] => DayStatus::Vacant,
            [only] => DayStatus::SingleSource(only.source),
            _ => DayStatus::Overbooked,
        }
    }

    /// Occupied days in date order.
    pub fn days(&self) -> impl Iterator<Item = (NaiveDate, &[Arc<SourcedBooking>])> {
        self.days.iter().map(|(day, bookings)| (*day, bookings.as_slice()))
    }

    pub fn occupied_days(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Same index restricted to one property; days left empty disappear.
    pub fn filtered(&self, property: &str) -> Self {
        let days = self
            .days
            .iter()
            .filter_map(|(day, bookings)| {
                let kept: Vec<_> = bookings
                    .iter()
                    .filter(|b| b.record.property == property)
                    .cloned()
                    .collect();
                (!kept.is_empty()).then_some((*day, kept))
            })
            .collect();
        Self { days }
    }

    /// Distinct property names across every indexed booking.
    pub fn property_names(&self) -> BTreeSet<String> {
        property_names(self.days.values().flatten().map(|b| &b.record))
    }

    /// Booking count for every day of `range`, vacant days included.
    pub fn day_counts(&self, range: DayRange) -> Vec<(NaiveDate, usize)> {
        range
            .iter()
            .map(|day| (day, self.records_on(day).len()))
            .collect()
    }

    /// Occupied and overbooked day totals for each month of `year`.
    pub fn month_summaries(&self, year: i32) -> Vec<MonthSummary> {
        let mut summaries: Vec<MonthSummary> = (1..=12)
            .map(|month| MonthSummary {
                month,
                occupied_days: 0,
                overbooked_days: 0,
            })
            .collect();

        for (day, bookings) in self.days() {
            if day.year() != year {
                continue;
            }
            let summary = &mut summaries[day.month0() as usize];
            summary.occupied_days += 1;
            if bookings.len() > 1 {
                summary.overbooked_days += 1;
            }
        }
        summaries
    }
}

/// Sorted, de-duplicated property names, for the property filter.
pub fn property_names<'a>(records: impl IntoIterator<Item = &'a BookingRecord>) -> BTreeSet<String> {
    records.into_iter().map(|r| r.property.clone()).collect()
}

/// `YYYY-MM-DD` key used for the index in exported JSON.
pub fn day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}
