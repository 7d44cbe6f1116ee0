// Date utility functions

use chrono::{DateTime, Local};

/// Milliseconds in one 24-hour period.
pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Whole 24-hour periods between `now` and `target`, floored, clamped at zero.
///
/// Partial days do not count: 12 hours before the target is still 0 days.
pub fn whole_days_until(now: DateTime<Local>, target: DateTime<Local>) -> i64 {
    let time_left = target.timestamp_millis() - now.timestamp_millis();
    if time_left <= 0 {
        return 0;
    }
    time_left / MILLIS_PER_DAY
}
