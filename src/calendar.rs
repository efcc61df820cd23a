//! iCalendar output for extracted events.

use crate::error::AppError;
use crate::schedule::ScheduleEvent;
use icalendar::{Calendar, Component, Event, EventLike};
use std::collections::HashMap;
use tracing::{info, instrument};

/// Builds one `VEVENT` per event, in input order.
///
/// Start and end are floating times; the rink publishes local times without
/// a zone and calendar clients show them as-is. Every event gets its own
/// UID, even when duplicates were kept.
pub fn build_calendar(events: &[ScheduleEvent]) -> Calendar {
    let mut calendar = Calendar::new();
    let mut seen: HashMap<String, usize> = HashMap::new();
    for event in events {
        let base = event_uid(event);
        let count = seen.entry(base.clone()).or_insert(0);
        *count += 1;
        let uid = match *count {
            1 => base,
            n => base.replacen('@', &format!("-{n}@"), 1),
        };
        calendar.push(to_vevent(event, &uid));
    }
    calendar
}

fn to_vevent(event: &ScheduleEvent, uid: &str) -> Event {
    Event::new()
        .uid(uid)
        .summary(&event.title)
        .description(&event.location_detail)
        .location(&event.location_address)
        .starts(event.start)
        .ends(event.end())
        .done()
}

/// Stable identifier so re-imports update events instead of duplicating them.
fn event_uid(event: &ScheduleEvent) -> String {
    format!(
        "{}-{}-{}-{}@{}",
        event.kind,
        event.start.format("%Y%m%dT%H%M%S"),
        slug(&event.title),
        slug(&event.location_detail),
        crate::NAME
    )
}

/// Lowercase alphanumerics joined by single dashes.
fn slug(text: &str) -> String {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Serializes the events and writes them to `path`, replacing any old file.
///
/// # Errors
/// * `AppError::Io` - The file could not be written
#[instrument(skip(events), fields(events = events.len()))]
pub async fn write_calendar(path: &str, events: &[ScheduleEvent]) -> Result<(), AppError> {
    let calendar = build_calendar(events);
    tokio::fs::write(path, calendar.to_string()).await?;
    info!("Wrote {} events to {path}", events.len());
    Ok(())
}
