use crate::error::AppError;
use scraper::Selector;
use std::fmt;

/// A compiled CSS query locating schedule fragments in a page.
#[derive(Debug, Clone)]
pub struct ScheduleQuery {
    source: String,
    selector: Selector,
}

impl ScheduleQuery {
    /// Compiles a configured query string.
    ///
    /// # Errors
    /// * `AppError::InvalidQuery` - The string is empty or not a valid CSS selector
    pub fn parse(query: &str) -> Result<Self, AppError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(AppError::invalid_query(query, "query cannot be empty"));
        }
        let selector =
            Selector::parse(trimmed).map_err(|e| AppError::invalid_query(query, e.to_string()))?;
        Ok(ScheduleQuery {
            source: trimmed.to_string(),
            selector,
        })
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for ScheduleQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
