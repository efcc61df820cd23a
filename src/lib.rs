//! Hockey rink schedule scraper library
//!
//! This library extracts one team's practices and games from a rink's
//! schedule pages and serializes them as iCalendar events.
//!
//! # Examples
//!
//! ```rust,no_run
//! use ice_scraper::calendar::write_calendar;
//! use ice_scraper::config::Config;
//! use ice_scraper::error::AppError;
//! use ice_scraper::schedule::{DocumentSource, fetch_events};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     // Load and validate the configuration
//!     let config = Config::load(None).await?;
//!
//!     // Fetch both schedule pages and extract the team's events
//!     let source = DocumentSource::new(&config)?;
//!     let events = fetch_events(&source, &config).await?;
//!
//!     for event in &events {
//!         println!("{} at {}", event.title, event.start);
//!     }
//!
//!     // Write the calendar
//!     write_calendar(&config.ics_file, &events).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod calendar;
pub mod config;
pub mod constants;
pub mod error;
pub mod schedule;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use calendar::{build_calendar, write_calendar};
pub use config::Config;
pub use error::AppError;
pub use schedule::{EventKind, ScheduleEvent, fetch_events};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
