use super::record::AttendanceRecord;
use crate::error::RecordError;

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

/// Hours up to this many in a single day are regular, the rest is overtime.
pub const REGULAR_HOURS_PER_DAY: f64 = 8.0;

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];

pub fn parse_clock_time(value: &str) -> Result<NaiveTime, RecordError> {
    let trimmed = value.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| RecordError::MalformedTime(value.to_string()))
}

/// Total hours worked on `reference_date` according to `record`.
///
/// A non-zero precomputed `work_hours` is returned as is (floored at zero).
/// Otherwise the duration is derived from the clock times anchored on `reference_date`:
/// a check-out earlier than the check-in falls on the next day, a missing
/// check-out on the day of `now` runs until `now`, and a missing check-out
/// on any other day yields zero. The result is never negative.
pub fn compute_daily_hours(
    record: &AttendanceRecord,
    reference_date: NaiveDate,
    now: NaiveDateTime,
) -> f64 {
    if let Some(hours) = record.work_hours {
        if hours != 0. {
            return hours.max(0.);
        }
    }

    let Some(check_in_time) = record.check_in_time else {
        return 0.;
    };
    let check_in = reference_date.and_time(check_in_time);

    let check_out = match record.check_out_time {
        Some(check_out_time) => {
            let check_out = reference_date.and_time(check_out_time);
            if check_out_time < check_in_time {
                // overnight shift
                match check_out.checked_add_days(Days::new(1)) {
                    Some(next_day) => next_day,
                    None => return 0.,
                }
            } else {
                check_out
            }
        }
        None if now.date() == reference_date => now,
        None => return 0.,
    };

    let millis = (check_out - check_in).num_milliseconds();
    if millis <= 0 {
        return 0.;
    }
    millis as f64 / 3_600_000.
}

pub fn split_regular_overtime(total_hours: f64) -> (f64, f64) {
    let regular = total_hours.min(REGULAR_HOURS_PER_DAY);
    let overtime = (total_hours - REGULAR_HOURS_PER_DAY).max(0.);
    (regular, overtime)
}
