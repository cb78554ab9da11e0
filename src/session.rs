use crate::calendar::DayOccupancy;
use crate::error::LoadError;
use crate::models::{BookingRecord, Source};
use crate::readers::BookingReader;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

/// Everything produced by one successful load
#[derive(Debug, Clone, Default)]
pub struct LoadedCalendar {
    pub airbnb: Vec<BookingRecord>,
    pub booking: Vec<BookingRecord>,
    pub occupancy: DayOccupancy,
    pub skipped_rows: usize,
}

impl LoadedCalendar {
    pub fn property_names(&self) -> BTreeSet<String> {
        crate::calendar::property_names(self.airbnb.iter().chain(&self.booking))
    }
}

/// Holds the current calendar and runs loads one at a time.
///
/// A failed load leaves the previous calendar in place; a successful one
/// replaces it wholesale.
#[derive(Default)]
pub struct BookingSession {
    loading: Mutex<()>,
    current: RwLock<Arc<LoadedCalendar>>,
}

impl BookingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn current(&self) -> Arc<LoadedCalendar> {
        self.current.read().await.clone()
    }

    /// Read both exports and rebuild the occupancy index.
    /// Rejected with [`LoadError::AlreadyLoading`] while another load runs.
    pub async fn load(
        &self,
        airbnb: &dyn BookingReader,
        booking: &dyn BookingReader,
    ) -> Result<Arc<LoadedCalendar>, LoadError> {
        let _guard = self.loading.try_lock().map_err(|_| {
            warn!("Load requested while another is in progress");
            LoadError::AlreadyLoading
        })?;

        let airbnb_outcome = airbnb.read().await.map_err(|error| LoadError::Read {
            platform: Source::Airbnb,
            error,
        })?;
        let booking_outcome = booking.read().await.map_err(|error| LoadError::Read {
            platform: Source::Booking,
            error,
        })?;

        let occupancy = DayOccupancy::unify(&airbnb_outcome.records, &booking_outcome.records);
        let loaded = Arc::new(LoadedCalendar {
            skipped_rows: airbnb_outcome.skipped.len() + booking_outcome.skipped.len(),
            airbnb: airbnb_outcome.records,
            booking: booking_outcome.records,
            occupancy,
        });

        info!(
            "Loaded {} {} and {} {} bookings covering {} days ({} rows skipped)",
            loaded.airbnb.len(),
            airbnb.format_name(),
            loaded.booking.len(),
            booking.format_name(),
            loaded.occupancy.occupied_days(),
            loaded.skipped_rows
        );

        *self.current.write().await = Arc::clone(&loaded);
        Ok(loaded)
    }
}
