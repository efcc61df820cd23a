pub mod date_time;
pub mod team_matching;

// Re-export date/time normalization
pub use date_time::{
    format_canonical, format_source_date, format_source_time, normalize, parse_date,
    parse_start_time,
};

// Re-export team filtering and formatting
pub use team_matching::{format_matchup, matches_game, matches_practice, split_matchup, titlecase};
