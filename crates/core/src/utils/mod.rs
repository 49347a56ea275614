pub mod format_utils;
pub mod time_utils;

pub use format_utils::{format_grouped, round_half_up};
pub use time_utils::{parse_year_month, year_month_of, Clock, ManualClock, SystemClock};
