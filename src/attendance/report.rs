use super::aggregate::{aggregate_window, build_daily_series, status_breakdown};
use super::record::{AggregateSummary, AttendanceRecord, DerivedDayStat, StatusCount};
use super::window::{Window, WindowBounds};

use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct AttendanceReport {
    pub window: WindowBounds,
    pub summary: AggregateSummary,
    pub daily: Vec<DerivedDayStat>,
    pub statuses: Vec<StatusCount>,
}

impl AttendanceReport {
    pub fn build(records: &[AttendanceRecord], window: Window, now: NaiveDateTime) -> Self {
        let bounds = window.bounds();
        // status_breakdown counts whatever it is given
        let in_window: Vec<AttendanceRecord> = records
            .iter()
            .filter(|record| bounds.contains(record.work_date))
            .cloned()
            .collect();

        Self {
            window: bounds,
            summary: aggregate_window(records, bounds, now).rounded(),
            daily: build_daily_series(records, &window.days(), now)
                .iter()
                .map(DerivedDayStat::rounded)
                .collect(),
            statuses: status_breakdown(&in_window),
        }
    }
}
