pub mod days;
pub mod occupancy;
pub mod render;

pub use days::DayRange;
pub use occupancy::{day_key, property_names, DayOccupancy, DayStatus, MonthSummary};
