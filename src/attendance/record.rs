use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawAttendanceRecord {
    pub work_date: String,
    #[serde(default)]
    pub check_in_time: Option<String>,
    #[serde(default)]
    pub check_out_time: Option<String>,
    pub status_code: StatusCode,
    #[serde(default)]
    pub work_hours: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCode {
    Normal,
    Late,
    Absent,
    Vacation,
    Overtime,
    EarlyLeave,
    #[serde(other)]
    Unknown,
}

impl StatusCode {
    pub fn is_work_day(self) -> bool {
        matches!(
            self,
            StatusCode::Normal | StatusCode::Late | StatusCode::Overtime
        )
    }

    pub fn is_leave(self) -> bool {
        self == StatusCode::Vacation
    }
}

/// A validated attendance row. `work_date` is unique per employee within a query window.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRecord {
    pub work_date: NaiveDate,
    pub check_in_time: Option<NaiveTime>,
    pub check_out_time: Option<NaiveTime>,
    pub status_code: StatusCode,
    pub work_hours: Option<f64>,
}

impl AttendanceRecord {
    pub fn new(work_date: NaiveDate, status_code: StatusCode) -> Self {
        Self {
            work_date,
            check_in_time: None,
            check_out_time: None,
            status_code,
            work_hours: None,
        }
    }

    pub fn with_times(mut self, check_in: NaiveTime, check_out: Option<NaiveTime>) -> Self {
        self.check_in_time = Some(check_in);
        self.check_out_time = check_out;
        self
    }

    pub fn with_work_hours(mut self, hours: f64) -> Self {
        self.work_hours = Some(hours);
        self
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DerivedDayStat {
    pub date: NaiveDate,
    pub regular_hours: f64,
    pub overtime_hours: f64,
    pub total_hours: f64,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSummary {
    pub work_days: u32,
    pub total_work_hours: f64,
    pub total_overtime_hours: f64,
    pub used_leave_days: u32,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: StatusCode,
    pub count: u32,
}

/// Leave balances as reported by the backend, which owns accrual.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LeaveBalance {
    #[serde(rename = "totalLeave", default)]
    pub total: Option<f64>,
    #[serde(rename = "usedLeave", default)]
    pub used: Option<f64>,
    #[serde(rename = "remainingLeave", default)]
    pub remaining: Option<f64>,
}

impl LeaveBalance {
    // total - used only when the backend left remaining out
    pub fn remaining(&self) -> Option<f64> {
        self.remaining.or_else(|| match (self.total, self.used) {
            (Some(total), Some(used)) => Some(total - used),
            _ => None,
        })
    }
}
