//! Merges Airbnb and Booking.com reservation exports into a per-day
//! occupancy index and flags days booked more than once.
//!
//! - [`readers`] — export files → canonical [`models::BookingRecord`]s
//! - [`calendar`] — day expansion, occupancy index and queries, text rendering
//! - [`session`] — serialized loads with wholesale replacement
//! - [`notify`] — cleaning-staff WhatsApp link

pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod readers;
pub mod session;
