//! Team filtering and display formatting.
//!
//! Matching always works on the text as scraped; `titlecase` output is for
//! display only and never fed back into a comparison.

use crate::constants::MATCHUP_SEPARATOR;
use crate::error::AppError;

/// Practice filter: the configured team appears anywhere in the raw matchup,
/// ignoring case.
///
/// # Examples
/// ```
/// use ice_scraper::schedule::processors::matches_practice;
///
/// assert!(matches_practice("SHARKS vs Wolves", "sharks"));
/// assert!(!matches_practice("Hawks vs Wolves", "sharks"));
/// ```
pub fn matches_practice(candidate: &str, team: &str) -> bool {
    let team = team.trim().to_lowercase();
    !team.is_empty() && candidate.to_lowercase().contains(&team)
}

/// Game filter: the configured team equals the home or the away team,
/// ignoring case and surrounding whitespace.
pub fn matches_game(home: &str, away: &str, team: &str) -> bool {
    let team = team.trim().to_lowercase();
    !team.is_empty()
        && [home, away]
            .iter()
            .any(|side| side.trim().to_lowercase() == team)
}

/// Capitalizes the first letter of every word and lowercases the rest.
///
/// A word starts after any character that is not a letter, so "o'neil"
/// becomes "O'Neil" and "st-laurent" becomes "St-Laurent".
///
/// # Examples
/// ```
/// use ice_scraper::schedule::processors::titlecase;
///
/// assert_eq!(titlecase("home team"), "Home Team");
/// assert_eq!(titlecase("ICE DOGS"), "Ice Dogs");
/// ```
pub fn titlecase(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for c in name.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Splits "<Team A> vs <Team B>" into its two trimmed team names.
///
/// The separator is matched case-insensitively and must occur exactly once
/// with a non-empty team on each side.
pub fn split_matchup(raw: &str) -> Result<(&str, &str), AppError> {
    let lowered = raw.to_ascii_lowercase();
    let mut hits = lowered.match_indices(MATCHUP_SEPARATOR);
    let (Some((index, _)), None) = (hits.next(), hits.next()) else {
        return Err(AppError::format_error("matchup", raw));
    };

    let first = raw[..index].trim();
    let second = raw[index + MATCHUP_SEPARATOR.len()..].trim();
    if first.is_empty() || second.is_empty() {
        return Err(AppError::format_error("matchup", raw));
    }
    Ok((first, second))
}

/// Display form of a matchup, e.g. ("SHARKS ", "hawks") -> "Sharks Vs Hawks".
pub fn format_matchup(first: &str, second: &str) -> String {
    titlecase(&format!(
        "{}{MATCHUP_SEPARATOR}{}",
        first.trim(),
        second.trim()
    ))
}
