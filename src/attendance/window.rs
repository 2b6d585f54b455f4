use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    Day(NaiveDate),
    /// ISO week, Monday through Sunday.
    Week(NaiveDate),
    Month(NaiveDate),
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowBounds {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Window {
    pub fn parse(kind: &str, anchor: NaiveDate) -> Option<Self> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "day" => Some(Window::Day(anchor)),
            "week" => Some(Window::Week(anchor)),
            "month" => Some(Window::Month(anchor)),
            _ => None,
        }
    }

    pub fn bounds(&self) -> WindowBounds {
        match *self {
            Window::Day(day) => WindowBounds {
                start: day,
                end: day,
            },
            Window::Week(day) => {
                let start = start_of_week(day);
                WindowBounds {
                    start,
                    end: start.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX),
                }
            }
            Window::Month(day) => month_bounds(day),
        }
    }

    pub fn days(&self) -> Vec<NaiveDate> {
        let WindowBounds { start, end } = self.bounds();
        start.iter_days().take_while(|day| *day <= end).collect()
    }
}

impl WindowBounds {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

fn start_of_week(day: NaiveDate) -> NaiveDate {
    day.checked_sub_days(Days::new(day.weekday().num_days_from_monday() as u64))
        .unwrap_or(NaiveDate::MIN)
}

fn month_bounds(day: NaiveDate) -> WindowBounds {
    let first = day.with_day(1).unwrap_or(day);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next_month| next_month.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    WindowBounds {
        start: first,
        end: last,
    }
}
