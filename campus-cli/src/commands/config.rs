use anyhow::Result;
use campus_core::config::CampusConfig;
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    let config_path = CampusConfig::config_path()?;
    let config = CampusConfig::load()?;
    let location = config.weather.location();
    let catalog = config.event_catalog()?;

    println!("{}", "Paths".bold());
    println!("  Config:   {}", config_path.display());
    println!();
    println!("{}", "Weather".bold());
    println!(
        "  Location: {} ({}, {})",
        location.label, location.latitude, location.longitude
    );
    println!("  Units:    {}", location.temperature_unit.symbol());
    println!("  Timezone: {}", location.timezone);
    println!("  Endpoint: {}", config.weather.base_url);
    println!();
    println!("{}", "Events".bold());
    for (day, entry) in catalog.entries() {
        println!("  {:>2}  {} {}", day, entry.name, entry.time.dimmed());
    }

    Ok(())
}
