//! Unix-second helpers and display formatting. All calendar math is UTC.

use chrono::{DateTime, NaiveDate, Utc};

pub const HOUR_SECS: i64 = 3_600;
pub const DAY_SECS: i64 = 86_400;

/// Current wall-clock time. Only the host-facing layer should call this.
pub fn now_unix() -> i64 {
    Utc::now().timestamp()
}

/// Unix seconds for a UTC calendar time. Invalid dates map to the epoch.
pub fn utc_timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> i64 {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or_default()
}

/// Timestamps outside chrono's representable range map to the epoch.
fn to_datetime(ts: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(ts, 0).unwrap_or_default()
}

/// Calendar date of a timestamp.
pub fn date_of(ts: i64) -> NaiveDate {
    to_datetime(ts).date_naive()
}

/// `ts` shifted back by whole days, saturating at `i64::MIN`.
pub fn days_before(ts: i64, days: i64) -> i64 {
    ts.saturating_sub(days.saturating_mul(DAY_SECS))
}

/// e.g. `Dec 15, 2023 09:30`. Unrepresentable timestamps render as the epoch.
pub fn format_date_time(ts: i64) -> String {
    to_datetime(ts).format("%b %-d, %Y %H:%M").to_string()
}

/// "Today at HH:MM", "Yesterday at HH:MM", otherwise "YYYY-MM-DD at HH:MM".
///
/// Unrepresentable timestamps (beyond roughly ±262,000 years) render as the
/// epoch, `1970-01-01 at 00:00`.
pub fn format_relative(ts: i64, now: i64) -> String {
    let when = to_datetime(ts);
    let time = when.format("%H:%M");
    let today = date_of(now);
    let date = when.date_naive();

    if date == today {
        format!("Today at {time}")
    } else if today.pred_opt() == Some(date) {
        format!("Yesterday at {time}")
    } else {
        format!("{} at {time}", date.format("%Y-%m-%d"))
    }
}
