pub mod games;
pub mod practice;
pub mod query;

pub use games::GameRow;
pub use query::ScheduleQuery;
