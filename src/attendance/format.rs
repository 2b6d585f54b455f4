use super::hours::compute_daily_hours;
use super::record::{AggregateSummary, AttendanceRecord, DerivedDayStat};

use chrono::NaiveDateTime;
use serde::Serialize;

/// Length of the standard working day used for the progress bar (9 to 6).
pub const STANDARD_SHIFT_MINUTES: u32 = 540;

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.).round() / 10.
}

pub fn format_hours(hours: f64) -> String {
    let total_minutes = (hours.max(0.) * 60.).round() as u64;
    format!("{}h {}m", total_minutes / 60, total_minutes % 60)
}

impl DerivedDayStat {
    pub fn rounded(&self) -> Self {
        Self {
            date: self.date,
            regular_hours: round_one_decimal(self.regular_hours),
            overtime_hours: round_one_decimal(self.overtime_hours),
            total_hours: round_one_decimal(self.total_hours),
        }
    }
}

impl AggregateSummary {
    pub fn rounded(&self) -> Self {
        Self {
            total_work_hours: round_one_decimal(self.total_work_hours),
            total_overtime_hours: round_one_decimal(self.total_overtime_hours),
            ..*self
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShiftProgress {
    pub hours: u32,
    pub minutes: u32,
    pub percent: u32,
}

/// Elapsed time of a record's shift as of `now`, for the live clock-in card.
pub fn shift_progress(record: &AttendanceRecord, now: NaiveDateTime) -> ShiftProgress {
    let elapsed_hours = compute_daily_hours(record, record.work_date, now);
    if elapsed_hours <= 0. {
        return ShiftProgress::default();
    }

    // back to whole milliseconds first so exact minutes don't floor to the one before
    let elapsed_minutes = ((elapsed_hours * 3_600_000.).round() as u64 / 60_000) as u32;
    let percent = (elapsed_minutes as f64 / STANDARD_SHIFT_MINUTES as f64 * 100.).round() as u32;
    ShiftProgress {
        hours: elapsed_minutes / 60,
        minutes: elapsed_minutes % 60,
        percent: percent.min(100),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attendance::record::StatusCode;
    use chrono::{NaiveDate, NaiveTime};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(8.), 8.);
        assert_eq!(round_one_decimal(2.46), 2.5);
        assert_eq!(round_one_decimal(4.783333), 4.8);
        assert_eq!(round_one_decimal(0.04), 0.);
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(0.), "0h 0m");
        assert_eq!(format_hours(10.5), "10h 30m");
        assert_eq!(format_hours(46.25), "46h 15m");
        assert_eq!(format_hours(7.999), "8h 0m");
        assert_eq!(format_hours(-1.), "0h 0m");
    }

    #[test]
    fn test_rounded_stats() {
        let stat = DerivedDayStat {
            date: date(2024, 5, 9),
            regular_hours: 8.,
            overtime_hours: 1.2833333,
            total_hours: 9.2833333,
        };
        let rounded = stat.rounded();
        assert_eq!(rounded.date, stat.date);
        assert_eq!(rounded.regular_hours, 8.);
        assert_eq!(rounded.overtime_hours, 1.3);
        assert_eq!(rounded.total_hours, 9.3);

        let summary = AggregateSummary {
            work_days: 3,
            total_work_hours: 25.04,
            total_overtime_hours: 1.06,
            used_leave_days: 1,
        }
        .rounded();
        assert_eq!(summary.work_days, 3);
        assert_eq!(summary.total_work_hours, 25.);
        assert_eq!(summary.total_overtime_hours, 1.1);
        assert_eq!(summary.used_leave_days, 1);
    }

    #[test]
    fn test_shift_progress_while_clocked_in() {
        let today = date(2024, 5, 9);
        let record = AttendanceRecord::new(today, StatusCode::Normal).with_times(time(9, 0), None);

        let progress = shift_progress(&record, today.and_time(time(13, 30)));
        assert_eq!(
            progress,
            ShiftProgress {
                hours: 4,
                minutes: 30,
                percent: 50
            }
        );
    }

    #[test]
    fn test_shift_progress_caps_at_full() {
        let today = date(2024, 5, 9);
        let record = AttendanceRecord::new(today, StatusCode::Overtime)
            .with_times(time(8, 0), Some(time(20, 15)));

        let progress = shift_progress(&record, today.and_time(time(21, 0)));
        assert_eq!(progress.hours, 12);
        assert_eq!(progress.minutes, 15);
        assert_eq!(progress.percent, 100);
    }

    #[test]
    fn test_shift_progress_counts_every_minute_exactly() {
        let today = date(2024, 5, 9);
        let record = AttendanceRecord::new(today, StatusCode::Normal).with_times(time(0, 0), None);

        for elapsed in 1..24 * 60 {
            let now = today.and_time(time(elapsed / 60, elapsed % 60));
            let progress = shift_progress(&record, now);
            assert_eq!(
                progress.hours * 60 + progress.minutes,
                elapsed,
                "{progress:?} at {now}"
            );
        }
    }

    #[test]
    fn test_shift_progress_before_check_in() {
        let today = date(2024, 5, 9);
        let record = AttendanceRecord::new(today, StatusCode::Normal).with_times(time(9, 0), None);

        assert_eq!(
            shift_progress(&record, today.and_time(time(8, 0))),
            ShiftProgress::default()
        );
    }
}
