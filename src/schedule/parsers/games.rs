//! Game page parser.
//!
//! The game page is a table where each game occupies a visible row followed
//! by a hidden metadata row. Only the odd (1-indexed) rows are read; the
//! visible row carries date, time range, home team, away team and rink in
//! its first five cells, each wrapped in a `div`.

use crate::constants::games::{AWAY_COLUMN, DATE_COLUMN, HOME_COLUMN, RINK_COLUMN, TIME_COLUMN};
use crate::error::AppError;
use crate::schedule::models::{EventKind, ExtractContext, ScheduleEvent};
use crate::schedule::parsers::query::ScheduleQuery;
use crate::schedule::processors::{format_matchup, matches_game, normalize};
use scraper::{ElementRef, Html};
use tracing::{debug, warn};

/// Cell values of one visible schedule row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRow {
    /// 1-indexed position among the rows of its table body
    pub position: usize,
    pub date: String,
    pub time: Option<String>,
    pub home: Option<String>,
    pub away: Option<String>,
    pub rink: Option<String>,
}

impl GameRow {
    /// Reads the cells of a row. Returns `None` when the date cell is empty,
    /// which marks the end of the populated schedule.
    pub fn read(position: usize, row: ElementRef<'_>) -> Option<Self> {
        let cells: Vec<Option<String>> = child_elements(row)
            .filter(|cell| matches!(cell.value().name(), "td" | "th"))
            .map(cell_text)
            .collect();
        let column = |index: usize| cells.get(index).cloned().flatten();

        Some(GameRow {
            position,
            date: column(DATE_COLUMN)?,
            time: column(TIME_COLUMN),
            home: column(HOME_COLUMN),
            away: column(AWAY_COLUMN),
            rink: column(RINK_COLUMN),
        })
    }

    /// Returns `Ok(None)` when neither side is the configured team.
    pub fn into_event(self, context: &ExtractContext) -> Result<Option<ScheduleEvent>, AppError> {
        let home = self.home.as_deref().unwrap_or_default();
        let away = self.away.as_deref().unwrap_or_default();
        if !matches_game(home, away, &context.team) {
            debug!("Row {} ({home} vs {away}) is for another team", self.position);
            return Ok(None);
        }
        if home.is_empty() || away.is_empty() {
            return Err(AppError::format_error(
                format!("row {} teams", self.position),
                format!("{home} vs {away}"),
            ));
        }

        let time = self.time.as_deref().ok_or_else(|| {
            AppError::format_error(format!("row {} time", self.position), "")
        })?;
        let start = normalize(&self.date, time)?;
        let rink = self.rink.as_deref().ok_or_else(|| {
            AppError::format_error(format!("row {} rink", self.position), "")
        })?;

        Ok(Some(ScheduleEvent::new(
            EventKind::Game,
            &format_matchup(home, away),
            start,
            rink,
            context.location_address.as_str(),
        )))
    }
}

/// Extracts the configured team's games in row order.
///
/// Even-positioned rows are never read. The pass ends at the first visible
/// row without a date, even if more rows follow. Malformed rows for the team
/// are logged and skipped. Calling this again on the same document yields
/// the same sequence.
pub fn extract<'a>(
    document: &'a Html,
    query: &'a ScheduleQuery,
    context: &'a ExtractContext,
) -> impl Iterator<Item = ScheduleEvent> + 'a {
    document
        .select(query.selector())
        .flat_map(visible_rows)
        .map_while(|(position, row)| {
            let parsed = GameRow::read(position, row);
            if parsed.is_none() {
                debug!("Row {position} has no date, end of schedule");
            }
            parsed
        })
        .filter_map(move |row| {
            let position = row.position;
            match row.into_event(context) {
                Ok(event) => event,
                Err(e) => {
                    warn!("Skipping game row {position}: {e}");
                    None
                }
            }
        })
}

/// Odd-positioned (1-indexed) rows of a selected table body, with their
/// positions. A selected `table` contributes the rows of its bodies.
fn visible_rows<'a>(container: ElementRef<'a>) -> impl Iterator<Item = (usize, ElementRef<'a>)> {
    table_rows(container)
        .into_iter()
        .enumerate()
        .map(|(index, row)| (index + 1, row))
        .filter(|(position, _)| position % 2 == 1)
}

fn table_rows(container: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let bodies: Vec<ElementRef<'_>> = if container.value().name() == "table" {
        child_elements(container)
            .filter(|child| child.value().name() == "tbody")
            .collect()
    } else {
        vec![container]
    };

    bodies
        .into_iter()
        .flat_map(|body| child_elements(body).filter(|child| child.value().name() == "tr"))
        .collect()
}

fn child_elements(parent: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    parent.children().filter_map(ElementRef::wrap)
}

/// Trimmed text of the cell's first `div`, or of the cell itself when it has
/// none. Blank text counts as no value.
fn cell_text(cell: ElementRef<'_>) -> Option<String> {
    let source = cell
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == "div")
        .unwrap_or(cell);
    let text = source.text().collect::<String>();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
