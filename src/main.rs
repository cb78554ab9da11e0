use anyhow::Context;
use chrono::Datelike;
use booking_calendar::calendar::render::{
    describe_day, format_day, month_range, render_day_bars, render_month_bars, render_year,
};
use booking_calendar::calendar::day_key;
use booking_calendar::config::Config;
use booking_calendar::notify;
use booking_calendar::readers::{CsvReader, SpreadsheetReader};
use booking_calendar::session::BookingSession;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("📅 Booking Calendar - Airbnb + Booking.com");
    info!("==========================================");

    let config = Config::from_env()?;
    info!("Schema: {:?}, year: {}", config.schema, config.year);

    let airbnb = CsvReader::new(&config.airbnb_path, config.schema);
    let booking = SpreadsheetReader::new(&config.booking_path, config.schema);

    let session = BookingSession::new();
    let loaded = session.load(&airbnb, &booking).await?;

    let names = loaded.property_names();
    info!("🏠 {} properties: {}", names.len(), names.iter().cloned().collect::<Vec<_>>().join(", "));

    let occupancy = match &config.property {
        Some(property) => {
            if !names.contains(property) {
                warn!("No bookings for property {:?}", property);
            }
            loaded.occupancy.filtered(property)
        }
        None => loaded.occupancy.clone(),
    };

    println!("{}", render_year(&occupancy, config.year));
    println!("{}", render_month_bars(&occupancy.month_summaries(config.year)));

    if let Some(day) = config.day {
        if let Some(month) = month_range(day.year(), day.month()) {
            println!("{}", render_day_bars(&occupancy.day_counts(month)));
        }

        let bookings = occupancy.records_on(day);
        println!("{}", describe_day(day, bookings));
        info!("{} is {}", day_key(day), occupancy.classify(day));

        if let Some(phone) = &config.cleaner_phone {
            match notify::cleaning_link(phone, day, bookings)? {
                Some(link) => println!("WhatsApp: {link}"),
                None => info!("Nothing to clean on {}", format_day(day)),
            }
        }
    }

    let json = serde_json::to_string_pretty(&occupancy)?;
    tokio::fs::write(&config.output, json)
        .await
        .with_context(|| format!("Failed to write {}", config.output.display()))?;
    info!("💾 Saved occupancy for {} days to {}", occupancy.occupied_days(), config.output.display());

    Ok(())
}
