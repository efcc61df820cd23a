use crate::constants::{EVENT_DURATION_MINUTES, games, practice};
use chrono::{Duration, NaiveDateTime};
use std::fmt;

/// Which page an event was scraped from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Practice,
    Game,
}

impl EventKind {
    /// Short label used in the parenthesized title suffix.
    pub fn suffix(&self) -> &'static str {
        match self {
            EventKind::Practice => practice::KIND_SUFFIX,
            EventKind::Game => games::KIND_SUFFIX,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// A normalized calendar entry for the configured team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEvent {
    /// "<Team A> vs <Team B> (<kind>)"
    pub title: String,
    pub kind: EventKind,
    /// Floating local time at the rink, seconds always zero
    pub start: NaiveDateTime,
    /// Rink or sheet label as scraped, e.g. "North Pole"
    pub location_detail: String,
    /// Street address of the arena, same for every event of a run
    pub location_address: String,
}

impl ScheduleEvent {
    /// Builds an event from an already display-formatted matchup.
    pub fn new(
        kind: EventKind,
        matchup: &str,
        start: NaiveDateTime,
        location_detail: impl Into<String>,
        location_address: impl Into<String>,
    ) -> Self {
        ScheduleEvent {
            title: format!("{matchup} ({})", kind.suffix()),
            kind,
            start,
            location_detail: location_detail.into(),
            location_address: location_address.into(),
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::minutes(EVENT_DURATION_MINUTES)
    }

    pub fn end(&self) -> NaiveDateTime {
        self.start + self.duration()
    }

    /// Key used when duplicate events are dropped.
    pub fn dedupe_key(&self) -> (&str, NaiveDateTime) {
        (&self.title, self.start)
    }
}

/// Read-only settings every parser needs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractContext {
    /// Team name as configured; compared case-insensitively
    pub team: String,
    /// Arena address copied into every event
    pub location_address: String,
}

impl ExtractContext {
    pub fn new(team: impl Into<String>, location_address: impl Into<String>) -> Self {
        ExtractContext {
            team: team.into(),
            location_address: location_address.into(),
        }
    }
}
