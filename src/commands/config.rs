use std::path::Path;

use anyhow::Result;
use eventfinder_core::config::EventFinderConfig;
use owo_colors::OwoColorize;

pub fn run(config: &EventFinderConfig, calendar: Option<&Path>) -> Result<()> {
    let config_path = EventFinderConfig::config_path()?;
    let calendar_path = super::calendar_path(config, calendar);

    println!("{}", "Paths".bold());
    println!("  Config:    {}", config_path.display());
    println!("  Calendar:  {}", calendar_path.display());

    println!("{}", "Matching".bold());
    println!("  Scorer:    {:?}", config.scorer);
    println!("  Limit:     {}", config.match_limit);
    println!(
        "  Timezone:  {}",
        config.timezone.as_deref().unwrap_or("(local)")
    );

    Ok(())
}
