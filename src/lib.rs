pub mod attendance;
pub mod config;
pub mod error;
pub mod time;

pub use attendance::aggregate::{
    aggregate_window, build_daily_series, build_trend_series, read_records, status_breakdown,
    validate_record,
};
pub use attendance::format::{format_hours, round_one_decimal, shift_progress, ShiftProgress};
pub use attendance::hours::{compute_daily_hours, split_regular_overtime, REGULAR_HOURS_PER_DAY};
pub use attendance::report::AttendanceReport;
pub use attendance::record::{
    AggregateSummary, AttendanceRecord, DerivedDayStat, LeaveBalance, RawAttendanceRecord,
    StatusCode, StatusCount,
};
pub use attendance::window::{Window, WindowBounds};
pub use error::RecordError;
