//! Schedule extraction: page retrieval, parsing and normalization.

pub mod aggregator;
pub mod models;
pub mod parsers;
pub mod processors;
pub mod source;

pub use aggregator::{ScheduleAggregator, build, fetch_events};
pub use models::{EventKind, ExtractContext, ScheduleEvent};
pub use source::DocumentSource;
