use super::hours::{compute_daily_hours, parse_clock_time, split_regular_overtime};
use super::record::{
    AggregateSummary, AttendanceRecord, DerivedDayStat, RawAttendanceRecord, StatusCode,
    StatusCount,
};
use super::window::WindowBounds;
use crate::error::RecordError;
use std::{
    collections::{BTreeMap, HashMap},
    io::BufReader,
    path::Path,
};

use anyhow::{Context, Error};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

pub fn read_records(path: &Path) -> Result<Vec<AttendanceRecord>, Error> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.to_string_lossy()))?;

    let reader = BufReader::new(file);
    let raw_records: Vec<RawAttendanceRecord> = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse attendance records in {}", path.display()))?;

    let total = raw_records.len();
    let records: Vec<AttendanceRecord> = raw_records
        .iter()
        .filter_map(|raw| match validate_record(raw) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(error = %err, "skipping attendance record");
                None
            }
        })
        .collect();

    debug!(total, kept = records.len(), "read attendance records");
    Ok(records)
}

// a bad clock time clears both times instead of rejecting the row
pub fn validate_record(raw: &RawAttendanceRecord) -> Result<AttendanceRecord, RecordError> {
    let work_date = NaiveDate::parse_from_str(raw.work_date.trim(), "%Y-%m-%d")
        .map_err(|_| RecordError::MalformedDate(raw.work_date.clone()))?;

    let check_in = raw.check_in_time.as_deref().map(parse_clock_time).transpose();
    let check_out = raw.check_out_time.as_deref().map(parse_clock_time).transpose();

    let (check_in_time, check_out_time) = match (check_in, check_out) {
        (Ok(check_in), Ok(check_out)) => (check_in, check_out),
        (Err(err), _) | (_, Err(err)) => {
            warn!(%work_date, error = %err, "ignoring clock times");
            (None, None)
        }
    };

    Ok(AttendanceRecord {
        work_date,
        check_in_time,
        check_out_time,
        status_code: raw.status_code,
        work_hours: raw.work_hours,
    })
}

pub fn aggregate_window(
    records: &[AttendanceRecord],
    bounds: WindowBounds,
    now: NaiveDateTime,
) -> AggregateSummary {
    let mut summary = AggregateSummary::default();

    for record in records
        .iter()
        .filter(|record| bounds.contains(record.work_date))
    {
        if record.status_code.is_work_day() {
            summary.work_days += 1;
        }
        if record.status_code.is_leave() {
            summary.used_leave_days += 1;
        }

        let total_hours = compute_daily_hours(record, record.work_date, now);
        let (_, overtime) = split_regular_overtime(total_hours);
        summary.total_work_hours += total_hours;
        summary.total_overtime_hours += overtime;
    }

    debug!(
        start = %bounds.start,
        end = %bounds.end,
        work_days = summary.work_days,
        "aggregated attendance window"
    );
    summary
}

/// One stat per requested day, in the order given. Days without a record are zero.
pub fn build_daily_series(
    records: &[AttendanceRecord],
    days: &[NaiveDate],
    now: NaiveDateTime,
) -> Vec<DerivedDayStat> {
    let by_date: HashMap<NaiveDate, &AttendanceRecord> = records
        .iter()
        .map(|record| (record.work_date, record))
        .collect();

    days.iter()
        .map(|&date| {
            let total_hours = by_date
                .get(&date)
                .map(|record| compute_daily_hours(record, date, now))
                .unwrap_or(0.);
            day_stat(date, total_hours)
        })
        .collect()
}

pub fn build_trend_series(
    records: &[AttendanceRecord],
    now: NaiveDateTime,
) -> Vec<DerivedDayStat> {
    let mut worked: Vec<&AttendanceRecord> = records
        .iter()
        .filter(|record| record.work_hours.is_some() || record.check_in_time.is_some())
        .collect();
    worked.sort_by_key(|record| record.work_date);

    worked
        .into_iter()
        .map(|record| {
            day_stat(
                record.work_date,
                compute_daily_hours(record, record.work_date, now),
            )
        })
        .collect()
}

pub fn status_breakdown(records: &[AttendanceRecord]) -> Vec<StatusCount> {
    let mut counts: BTreeMap<StatusCode, u32> = BTreeMap::new();
    for record in records {
        *counts.entry(record.status_code).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(status, count)| StatusCount { status, count })
        .collect()
}

fn day_stat(date: NaiveDate, total_hours: f64) -> DerivedDayStat {
    let (regular_hours, overtime_hours) = split_regular_overtime(total_hours);
    DerivedDayStat {
        date,
        regular_hours,
        overtime_hours,
        total_hours,
    }
}
