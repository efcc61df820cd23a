//! Application-wide constants and configuration values
//!
//! This module centralizes the magic strings and numbers of the scraper:
//! markup conventions of the rink pages, HTTP behaviour and file names.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// User agent sent with every schedule request
pub const USER_AGENT: &str = concat!("ice_scraper/", env!("CARGO_PKG_VERSION"));

/// Every event is booked for one hour; the pages only carry a start time.
pub const EVENT_DURATION_MINUTES: i64 = 60;

/// Retry behaviour for transient HTTP failures
pub mod retry {
    /// Attempts after the first request
    pub const MAX_RETRIES: u32 = 3;

    /// First backoff delay, doubled on every retry
    pub const INITIAL_BACKOFF_MS: u64 = 250;
}

/// Markup conventions of the practice page
pub mod practice {
    /// Attribute holding the matchup, e.g. "Sharks vs Wolves"
    pub const TITLE_ATTR: &str = "title";

    /// Attribute holding date, time range and location separated by breaks
    pub const CONTENT_ATTR: &str = "data-content";

    /// Label in front of the rink name
    pub const LOCATION_LABEL: &str = "Location:";

    /// Suffix appended to practice titles
    pub const KIND_SUFFIX: &str = "prac";
}

/// Markup conventions of the game page
pub mod games {
    /// Column positions (0-based) within a visible schedule row
    pub const DATE_COLUMN: usize = 0;
    pub const TIME_COLUMN: usize = 1;
    pub const HOME_COLUMN: usize = 2;
    pub const AWAY_COLUMN: usize = 3;
    pub const RINK_COLUMN: usize = 4;

    /// Separator between start and end of the time range
    pub const TIME_RANGE_SEPARATOR: char = '-';

    /// Suffix appended to game titles
    pub const KIND_SUFFIX: &str = "game";
}

/// Separator between the two teams of a matchup
pub const MATCHUP_SEPARATOR: &str = " vs ";

/// Default file names
pub mod files {
    /// Directory name under the platform config dir
    pub const APP_DIR: &str = "ice_scraper";

    /// Config file name
    pub const CONFIG_FILE: &str = "config.toml";

    /// Log file name
    pub const LOG_FILE: &str = "ice_scraper.log";
}

/// Environment variable names
pub mod env_vars {
    pub const CONFIG_PATH: &str = "ICE_SCRAPER_CONFIG";
    pub const TEAM: &str = "ICE_SCRAPER_TEAM";
    pub const ICS_FILE: &str = "ICE_SCRAPER_ICS_FILE";
    pub const LOG_FILE: &str = "ICE_SCRAPER_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "ICE_SCRAPER_HTTP_TIMEOUT";
}
