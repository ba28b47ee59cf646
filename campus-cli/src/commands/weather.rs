use anyhow::Result;
use campus_core::config::WeatherConfig;

use crate::render::Render;
use crate::utils::tui::create_spinner;

pub async fn run(config: &WeatherConfig) -> Result<()> {
    let client = config.client()?;
    let location = config.location();

    let spinner = create_spinner("Loading weather forecast...");
    let report = client.report(&location).await;
    spinner.finish_and_clear();

    println!("{}", report.render());

    Ok(())
}
