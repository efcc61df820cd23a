//! Practice page parser.
//!
//! The practice page is a calendar grid; every booked slot is an element whose
//! `title` holds the matchup and whose `data-content` holds the date, the time
//! range and the rink separated by line breaks.

use crate::constants::practice::{CONTENT_ATTR, LOCATION_LABEL, TITLE_ATTR};
use crate::error::AppError;
use crate::schedule::models::{EventKind, ExtractContext, ScheduleEvent};
use crate::schedule::parsers::query::ScheduleQuery;
use crate::schedule::processors::{format_matchup, matches_practice, normalize, split_matchup};
use scraper::{ElementRef, Html};
use tracing::{debug, warn};

/// Line break spellings seen inside `data-content`.
const BREAKS: [&str; 6] = ["<br />", "<br/>", "<br>", "<BR />", "<BR/>", "<BR>"];

/// Extracts the configured team's practices in document order.
///
/// Nodes without schedule attributes and nodes for other teams are skipped.
/// Malformed nodes for the team are logged and skipped. Calling this again
/// on the same document yields the same sequence.
pub fn extract<'a>(
    document: &'a Html,
    query: &'a ScheduleQuery,
    context: &'a ExtractContext,
) -> impl Iterator<Item = ScheduleEvent> + 'a {
    document
        .select(query.selector())
        .filter_map(move |node| match parse_node(node, context) {
            Ok(event) => event,
            Err(e) => {
                warn!("Skipping practice entry: {e}");
                None
            }
        })
}

/// Returns `Ok(None)` for nodes that are not the team's practices.
fn parse_node(
    node: ElementRef<'_>,
    context: &ExtractContext,
) -> Result<Option<ScheduleEvent>, AppError> {
    let element = node.value();
    let (title, content) = match (element.attr(TITLE_ATTR), element.attr(CONTENT_ATTR)) {
        (None, None) => return Ok(None),
        (Some(title), _) if !matches_practice(title, &context.team) => {
            debug!("Practice '{title}' is for another team");
            return Ok(None);
        }
        (Some(title), Some(content)) => (title, content),
        (Some(title), None) => return Err(AppError::format_error("practice details", title)),
        (None, Some(content)) => return Err(AppError::format_error("practice title", content)),
    };

    let (first, second) = split_matchup(title)?;

    let details = split_details(content);
    let [date, time, location, ..] = details.as_slice() else {
        return Err(AppError::format_error("practice details", content));
    };

    let start = normalize(date, time)?;
    let rink = strip_location_label(location);

    Ok(Some(ScheduleEvent::new(
        EventKind::Practice,
        &format_matchup(first, second),
        start,
        rink,
        context.location_address.as_str(),
    )))
}

/// Splits `data-content` into its non-empty, trimmed lines.
pub fn split_details(content: &str) -> Vec<String> {
    BREAKS
        .iter()
        .fold(content.to_string(), |acc, br| acc.replace(br, "\n"))
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// "Location: North Pole" -> "North Pole". Text without the label is kept.
pub fn strip_location_label(raw: &str) -> &str {
    let raw = raw.trim();
    raw.strip_prefix(LOCATION_LABEL).unwrap_or(raw).trim()
}
