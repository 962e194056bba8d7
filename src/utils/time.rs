use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn to_rfc3339(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Combines an interview's date and start time into a UTC instant. Wall-clock
/// times are treated as UTC; the automation service localizes downstream.
pub fn interview_start(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interview_start_combines_date_and_time() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let time = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
        let start = interview_start(date, time);
        assert_eq!(to_rfc3339(start), "2026-03-14T09:30:00+00:00");
    }
}
