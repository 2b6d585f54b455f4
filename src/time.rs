//! Wall-clock access. Aggregation functions take `now` as an argument and never call these.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

pub fn now_in_timezone(tz: &Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(tz)
}

pub fn local_now(tz: &Tz) -> NaiveDateTime {
    now_in_timezone(tz).naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_in_timezone_returns_datetime_in_tz() {
        let tz = chrono_tz::Asia::Seoul;
        assert_eq!(now_in_timezone(&tz).timezone(), tz);
    }

    #[test]
    fn local_now_is_close_to_utc_in_utc_zone() {
        let diff = (local_now(&chrono_tz::UTC) - Utc::now().naive_utc())
            .num_seconds()
            .abs();
        assert!(diff < 2, "Difference should be less than 2 seconds");
    }

    #[test]
    fn local_now_follows_zone_offset() {
        let seoul = local_now(&chrono_tz::Asia::Seoul);
        let utc = local_now(&chrono_tz::UTC);
        let offset_minutes = (seoul - utc).num_minutes();
        assert!((539..=541).contains(&offset_minutes), "{offset_minutes}");
    }
}
