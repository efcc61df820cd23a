use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Hockey rink schedule scraper
///
/// Collects the configured team's practices and games from the rink's
/// schedule pages and writes them to an iCalendar file that calendar
/// clients can import or subscribe to.
///
/// Without flags, one run is performed: both pages are fetched, matching
/// events are printed and the calendar file is replaced.
#[derive(Parser, Debug)]
#[command(author = "J Graham", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Configuration file to use instead of the default location.
    /// Files ending in .json are read in the older JSON layout.
    #[arg(long = "config", short = 'c', help_heading = "Configuration")]
    pub config: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Write an example configuration file to the config location and exit.
    /// An existing file is never overwritten.
    #[arg(long = "init", help_heading = "Configuration")]
    pub init: bool,

    /// Print the extracted events without writing the calendar file.
    #[arg(long = "dry-run", short = 'n')]
    pub dry_run: bool,

    /// Enable debug output. Logs are also written to the terminal at debug level.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
