use crate::cli::Args;
use ice_scraper::calendar::write_calendar;
use ice_scraper::config::Config;
use ice_scraper::config::paths::resolve_config_path;
use ice_scraper::error::AppError;
use ice_scraper::schedule::processors::{format_source_date, format_source_time};
use ice_scraper::schedule::{DocumentSource, ScheduleEvent, fetch_events};
use std::path::Path;
use tracing::{info, warn};

/// Handles the --list-config command.
pub async fn handle_list_config_command(config_path: Option<&str>) -> Result<(), AppError> {
    let path = resolve_config_path(config_path);
    let config = Config::load(config_path).await?;
    config.display(&path);
    Ok(())
}

/// Handles the --init command.
///
/// Writes the example configuration to the resolved config path. An existing
/// file is left untouched and reported as an error.
pub async fn handle_init_command(config_path: Option<&str>) -> Result<(), AppError> {
    let path = resolve_config_path(config_path);
    if Path::new(&path).exists() {
        return Err(AppError::config_error(format!(
            "Configuration file already exists at {path}"
        )));
    }

    Config::example().save_to_path(&path).await?;
    info!("Wrote example configuration to {path}");
    println!("Example configuration written to {path}");
    println!("Edit team, location and both schedule sources before the first run.");
    Ok(())
}

/// Performs one scrape: fetch both pages, print the events and write the
/// calendar.
///
/// Source failures only cost the affected schedule kind. Failing to write
/// the calendar is fatal.
pub async fn handle_run_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let source = DocumentSource::new(config)?;
    let events = fetch_events(&source, config).await?;

    for event in &events {
        println!("{}", report_line(event));
    }

    if events.is_empty() {
        warn!("No events found for {}; {} not written", config.team, config.ics_file);
        return Ok(());
    }

    if args.dry_run {
        info!("Dry run, skipping write of {} events", events.len());
        return Ok(());
    }

    write_calendar(&config.ics_file, &events).await
}

/// One console line per event: title, start and rink.
pub fn report_line(event: &ScheduleEvent) -> String {
    format!(
        "{:<24} - {} {} on {}",
        event.title,
        format_source_date(&event.start),
        format_source_time(&event.start),
        event.location_detail
    )
}
