use crate::config::Config;
use crate::error::AppError;
use crate::schedule::models::{EventKind, ExtractContext, ScheduleEvent};
use crate::schedule::parsers::{ScheduleQuery, games, practice};
use crate::schedule::processors::format_canonical;
use crate::schedule::source::DocumentSource;
use scraper::Html;
use std::collections::HashSet;
use tracing::{debug, error, info, instrument};

/// Runs both parsers with one run's configuration.
#[derive(Debug, Clone)]
pub struct ScheduleAggregator {
    practice_query: ScheduleQuery,
    game_query: ScheduleQuery,
    context: ExtractContext,
    dedupe: bool,
}

impl ScheduleAggregator {
    /// Compiles the configured queries.
    ///
    /// # Errors
    /// * `AppError::InvalidQuery` - A query is not a valid CSS selector
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Ok(ScheduleAggregator {
            practice_query: ScheduleQuery::parse(&config.practice.query)?,
            game_query: ScheduleQuery::parse(&config.games.query)?,
            context: config.extract_context(),
            dedupe: config.dedupe,
        })
    }

    /// Extracts practices, then games, into one list.
    ///
    /// A missing document (its page could not be fetched) contributes no
    /// events; the other kind is still extracted. Practices keep their page
    /// order and precede games, which keep their table order.
    #[instrument(skip_all, fields(team = %self.context.team))]
    pub fn build(
        &self,
        practice_doc: Option<&Html>,
        game_doc: Option<&Html>,
    ) -> Vec<ScheduleEvent> {
        let mut events = Vec::new();

        if let Some(document) = practice_doc {
            events.extend(practice::extract(document, &self.practice_query, &self.context));
        }
        let practice_count = events.len();

        if let Some(document) = game_doc {
            events.extend(games::extract(document, &self.game_query, &self.context));
        }
        let game_count = events.len() - practice_count;

        info!("Extracted {practice_count} practices and {game_count} games");

        if self.dedupe {
            let before = events.len();
            events = dedupe_events(events);
            debug!("Dropped {} duplicate events", before - events.len());
        }

        for event in &events {
            debug!("{} at {}", event.title, format_canonical(&event.start));
        }

        events
    }
}

/// Builds the merged event list for one run.
pub fn build(
    practice_doc: Option<&Html>,
    game_doc: Option<&Html>,
    config: &Config,
) -> Result<Vec<ScheduleEvent>, AppError> {
    Ok(ScheduleAggregator::new(config)?.build(practice_doc, game_doc))
}

/// Fetches both schedule pages concurrently and extracts the run's events.
///
/// A page that cannot be fetched is logged and skipped; the other page is
/// still used. Only an invalid query fails the whole call.
#[instrument(skip_all, fields(team = %config.team))]
pub async fn fetch_events(
    source: &DocumentSource,
    config: &Config,
) -> Result<Vec<ScheduleEvent>, AppError> {
    let aggregator = ScheduleAggregator::new(config)?;

    let (practice_body, game_body) = tokio::join!(
        source.fetch(&config.practice.url),
        source.fetch(&config.games.url)
    );

    let practice_doc = parse_body(EventKind::Practice, practice_body);
    let game_doc = parse_body(EventKind::Game, game_body);

    Ok(aggregator.build(practice_doc.as_ref(), game_doc.as_ref()))
}

fn parse_body(kind: EventKind, body: Result<String, AppError>) -> Option<Html> {
    match body {
        Ok(body) => Some(Html::parse_document(&body)),
        Err(e) => {
            error!("Skipping {kind} schedule: {e}");
            None
        }
    }
}

/// Keeps the first event of every (title, start) pair, preserving order.
pub fn dedupe_events(events: Vec<ScheduleEvent>) -> Vec<ScheduleEvent> {
    let mut seen = HashSet::new();
    events
        .into_iter()
        .filter(|event| {
            let (title, start) = event.dedupe_key();
            seen.insert((title.to_string(), start))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::{GamePageBuilder, PracticePageBuilder, test_config};

    fn practice_page() -> Html {
        PracticePageBuilder::new()
            .practice("Sharks vs Wolves", "Mon Mar 10, 2025", "6:00 PM - 7:00 PM", "North Pole")
            .practice("Hawks vs Wolves", "Tue Mar 11, 2025", "6:00 PM - 7:00 PM", "North Pole")
            .parse()
    }

    fn game_page() -> Html {
        GamePageBuilder::new()
            .game("Wed Apr 02, 2025", "7:30 PM - 8:30 PM", "Sharks", "Hawks", "South Pole")
            .parse()
    }

    #[test]
    fn test_practices_precede_games() {
        let config = test_config("sharks");
        let practice = practice_page();
        let games = game_page();

        let events = build(Some(&practice), Some(&games), &config).unwrap();
        let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EventKind::Practice, EventKind::Game]);
        assert_eq!(events[0].title, "Sharks Vs Wolves (prac)");
        assert_eq!(events[1].title, "Sharks Vs Hawks (game)");
        assert!(
            events
                .iter()
                .all(|e| e.location_address == config.location)
        );
    }

    #[test]
    fn test_missing_document_only_costs_its_kind() {
        let config = test_config("sharks");
        let games = game_page();

        let events = build(None, Some(&games), &config).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::Game);

        let practice = practice_page();
        let events = build(Some(&practice), None, &config).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::Practice);
    }

    #[test]
    fn test_no_matches_is_empty_not_error() {
        let config = test_config("Penguins");
        let practice = practice_page();
        let games = game_page();

        let events = build(Some(&practice), Some(&games), &config).unwrap();
        assert!(events.is_empty());
        assert!(build(None, None, &config).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_query_is_rejected() {
        let mut config = test_config("sharks");
        config.games.query = "tbody[".to_string();
        assert!(matches!(
            ScheduleAggregator::new(&config),
            Err(AppError::InvalidQuery { .. })
        ));
    }

    #[test]
    fn test_dedupe_is_opt_in() {
        let page = PracticePageBuilder::new()
            .practice("Sharks vs Wolves", "Mon Mar 10, 2025", "6:00 PM - 7:00 PM", "North Pole")
            .practice("SHARKS vs wolves", "Mon Mar 10, 2025", "6:00 PM - 7:00 PM", "South Pole")
            .parse();

        let mut config = test_config("sharks");
        assert_eq!(build(Some(&page), None, &config).unwrap().len(), 2);

        config.dedupe = true;
        let events = build(Some(&page), None, &config).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].location_detail, "North Pole");
    }

    #[test]
    fn test_dedupe_keeps_distinct_starts() {
        let page = PracticePageBuilder::new()
            .practice("Sharks vs Wolves", "Mon Mar 10, 2025", "6:00 PM - 7:00 PM", "North Pole")
            .practice("Sharks vs Wolves", "Mon Mar 10, 2025", "7:00 PM - 8:00 PM", "North Pole")
            .parse();
        let mut config = test_config("sharks");
        config.dedupe = true;

        assert_eq!(build(Some(&page), None, &config).unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unreachable_pages_yield_no_events() {
        let mut config = test_config("sharks");
        config.http_timeout_seconds = 1;
        config.practice.url = "http://127.0.0.1:9/practice".to_string();
        config.games.url = "http://127.0.0.1:9/games".to_string();
        let source = DocumentSource::new(&config).unwrap();

        let events = fetch_events(&source, &config).await.unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_build_is_idempotent() {
        let config = test_config("sharks");
        let aggregator = ScheduleAggregator::new(&config).unwrap();
        let practice = practice_page();
        let games = game_page();

        assert_eq!(
            aggregator.build(Some(&practice), Some(&games)),
            aggregator.build(Some(&practice), Some(&games))
        );
    }
}
