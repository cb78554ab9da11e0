use crate::calendar::render::format_day;
use crate::models::SourcedBooking;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::sync::Arc;
use url::Url;

/// Message asking the cleaning staff to prepare the day's properties.
/// `None` when nothing is booked that day.
pub fn cleaning_message(day: NaiveDate, bookings: &[Arc<SourcedBooking>]) -> Option<String> {
    if bookings.is_empty() {
        return None;
    }
    let properties: Vec<&str> = bookings.iter().map(|b| b.record.property.as_str()).collect();
    Some(format!(
        "Hello! Please clean the following properties on {}:\n{}",
        format_day(day),
        properties.join("\n")
    ))
}

/// WhatsApp deep link carrying the cleaning message for `day`.
pub fn cleaning_link(phone: &str, day: NaiveDate, bookings: &[Arc<SourcedBooking>]) -> Result<Option<Url>> {
    let Some(message) = cleaning_message(day, bookings) else {
        return Ok(None);
    };

    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        anyhow::bail!("phone number has no digits: {phone:?}");
    }

    let mut link = Url::parse(&format!("https://wa.me/{digits}")).context("Failed to build WhatsApp link")?;
    link.query_pairs_mut().append_pair("text", &message);
    Ok(Some(link))
}
