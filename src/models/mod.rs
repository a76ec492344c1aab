pub mod active_session;
pub mod calendar;
pub mod rate_config;
pub mod work_day;

pub use active_session::ActiveSession;
pub use calendar::{CalendarCell, DayClass};
pub use rate_config::RateConfig;
pub use work_day::WorkDayRecord;
