//! Builders for schedule pages shaped like the rink's markup.

use crate::config::{Config, ProxyConfig, SourceConfig};
use scraper::Html;

/// Query matching the cells of a page built by [`PracticePageBuilder`]
pub const PRACTICE_QUERY: &str = "table.calendar td";

/// Query matching the body of a page built by [`GamePageBuilder`]
pub const GAME_QUERY: &str = "table#schedule > tbody";

/// Escapes text for a double-quoted attribute or element content.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Builds a practice calendar: one table row of cells, booked cells carrying
/// `title` and `data-content`.
#[derive(Debug, Default, Clone)]
pub struct PracticePageBuilder {
    cells: Vec<String>,
}

impl PracticePageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a booked slot the way the rink renders it.
    pub fn practice(self, matchup: &str, date: &str, time: &str, rink: &str) -> Self {
        let content = format!("{date}<br>{time}<br>Location: {rink}");
        let cell = format!(
            r#"<td class="booked" title="{}" data-content="{}">{}</td>"#,
            escape_html(matchup),
            escape_html(&content),
            escape_html(matchup)
        );
        self.raw_cell(&cell)
    }

    /// Adds a free slot without schedule attributes.
    pub fn empty_cell(self) -> Self {
        self.raw_cell("<td>&nbsp;</td>")
    }

    pub fn raw_cell(mut self, html: &str) -> Self {
        self.cells.push(html.to_string());
        self
    }

    pub fn build(&self) -> String {
        format!(
            "<html><body><table class=\"calendar\"><tbody><tr>{}</tr></tbody></table></body></html>",
            self.cells.concat()
        )
    }

    pub fn parse(&self) -> Html {
        Html::parse_document(&self.build())
    }
}

/// Builds a game table: every game is a visible row followed by a hidden
/// row that repeats the same data.
#[derive(Debug, Default, Clone)]
pub struct GamePageBuilder {
    rows: Vec<String>,
}

impl GamePageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a visible game row and its hidden twin.
    pub fn game(self, date: &str, time: &str, home: &str, away: &str, rink: &str) -> Self {
        let cells: String = [date, time, home, away, rink]
            .iter()
            .map(|value| format!("<td><div>{}</div></td>", escape_html(value)))
            .collect();
        self.raw_row(&format!("<tr class=\"game\">{cells}</tr>"))
            .raw_row(&format!("<tr class=\"details\" style=\"display:none\">{cells}</tr>"))
    }

    /// Adds an empty visible row and its hidden twin, like the padding at
    /// the end of the rink's table.
    pub fn blank_game(self) -> Self {
        let cells = "<td><div></div></td>".repeat(5);
        self.raw_row(&format!("<tr class=\"game\">{cells}</tr>"))
            .raw_row(&format!("<tr class=\"details\" style=\"display:none\">{cells}</tr>"))
    }

    pub fn raw_row(mut self, html: &str) -> Self {
        self.rows.push(html.to_string());
        self
    }

    pub fn build(&self) -> String {
        format!(
            "<html><body><table id=\"schedule\"><thead><tr><th>Date</th><th>Time</th>\
             <th>Home</th><th>Away</th><th>Rink</th></tr></thead><tbody>{}</tbody></table></body></html>",
            self.rows.concat()
        )
    }

    pub fn parse(&self) -> Html {
        Html::parse_document(&self.build())
    }
}

/// A valid configuration pointing at pages built by the builders above.
pub fn test_config(team: &str) -> Config {
    Config {
        team: team.to_string(),
        location: "2305 N Arena Way, Gilbert, AZ".to_string(),
        ics_file: "test.ics".to_string(),
        http_timeout_seconds: crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
        dedupe: false,
        log_file_path: None,
        proxies: ProxyConfig::default(),
        practice: SourceConfig {
            url: "https://rink.example.com/practice".to_string(),
            query: PRACTICE_QUERY.to_string(),
        },
        games: SourceConfig {
            url: "https://rink.example.com/games".to_string(),
            query: GAME_QUERY.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    #[test]
    fn test_practice_attributes_round_trip_through_html() {
        let page = PracticePageBuilder::new()
            .practice("Sharks vs Wolves", "Mon Mar 10, 2025", "6:00 PM", "North Pole")
            .parse();
        let selector = Selector::parse("td.booked").unwrap();
        let cell = page.select(&selector).next().unwrap();
        assert_eq!(cell.value().attr("title"), Some("Sharks vs Wolves"));
        assert_eq!(
            cell.value().attr("data-content"),
            Some("Mon Mar 10, 2025<br>6:00 PM<br>Location: North Pole")
        );
    }

    #[test]
    fn test_game_page_has_two_rows_per_game() {
        let page = GamePageBuilder::new()
            .game("Wed Apr 02, 2025", "7:30 PM", "Sharks", "Hawks", "South Pole")
            .blank_game()
            .parse();
        let selector = Selector::parse("table#schedule > tbody > tr").unwrap();
        assert_eq!(page.select(&selector).count(), 4);
    }
}
