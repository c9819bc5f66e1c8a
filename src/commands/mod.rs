//! Command implementations

pub mod check;
pub mod daily;
pub mod session;
pub mod simple;
pub mod stats;
pub mod validate;

pub use check::{CheckResult, check_guess};
pub use daily::{DailyInfo, daily_info};
pub use session::Session;
pub use simple::run_simple;
pub use stats::{StatsReport, collect_stats};
pub use validate::{ValidationReport, validate_lists, validation_progress_bar};
