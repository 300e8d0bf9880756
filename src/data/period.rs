//! Calendar quarter arithmetic for the quarterly views.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};

use crate::core::error::{DashError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Quarter number (1..=4) of a date
pub fn quarter_of(date: NaiveDate) -> u32 {
    date.month0() / 3 + 1
}

/// Last calendar day of the quarter containing `date`
pub fn quarter_end(date: NaiveDate) -> NaiveDate {
    let last_month = quarter_of(date) * 3;
    let first_of_last_month = date
        .with_day(1)
        .and_then(|d| d.with_month(last_month))
        .unwrap_or(date);
    first_of_last_month
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// First calendar day of the quarter following the one containing `date`
pub fn next_quarter_start(date: NaiveDate) -> Option<NaiveDate> {
    quarter_end(date).succ_opt()
}

/// Period label such as `2021Q3`
pub fn quarter_label(date: NaiveDate) -> String {
    format!("{}Q{}", date.year(), quarter_of(date))
}

/// Canonical string form of a period value, used as the dropdown value
pub fn period_value(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a date or timestamp as written in the datasets and dropdown values.
///
/// Time-of-day parts are dropped.
pub fn parse_period_value(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Ok(date);
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|datetime| datetime.date())
        .ok_or_else(|| {
            DashError::InvalidArgument(format!(
                "'{value}' is not a date. Expected YYYY-MM-DD or YYYY-MM-DD HH:MM:SS."
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_quarter_of() {
        assert_eq!(quarter_of(date(2021, 1, 1)), 1);
        assert_eq!(quarter_of(date(2021, 3, 31)), 1);
        assert_eq!(quarter_of(date(2021, 4, 1)), 2);
        assert_eq!(quarter_of(date(2021, 9, 30)), 3);
        assert_eq!(quarter_of(date(2021, 12, 31)), 4);
    }

    #[test]
    fn test_quarter_end() {
        assert_eq!(quarter_end(date(2021, 2, 15)), date(2021, 3, 31));
        assert_eq!(quarter_end(date(2021, 4, 30)), date(2021, 6, 30));
        assert_eq!(quarter_end(date(2021, 8, 31)), date(2021, 9, 30));
        assert_eq!(quarter_end(date(2021, 12, 1)), date(2021, 12, 31));
        assert_eq!(quarter_end(date(2020, 1, 31)), date(2020, 3, 31));
    }

    #[test]
    fn test_next_quarter_start() {
        assert_eq!(next_quarter_start(date(2021, 11, 5)), Some(date(2022, 1, 1)));
        assert_eq!(next_quarter_start(date(2021, 1, 5)), Some(date(2021, 4, 1)));
    }

    #[test]
    fn test_quarter_label() {
        assert_eq!(quarter_label(date(2021, 9, 30)), "2021Q3");
        assert_eq!(quarter_label(date(1999, 1, 1)), "1999Q1");
    }

    #[test]
    fn test_parse_period_value_formats() {
        assert_eq!(parse_period_value("2021-03-31").unwrap(), date(2021, 3, 31));
        assert_eq!(
            parse_period_value("2021-03-31 00:00:00").unwrap(),
            date(2021, 3, 31)
        );
        assert_eq!(
            parse_period_value(" 2021-06-30T12:30:00 ").unwrap(),
            date(2021, 6, 30)
        );
    }

    #[test]
    fn test_parse_period_value_rejects_garbage() {
        let err = parse_period_value("2021Q1").unwrap_err();
        assert!(matches!(err, DashError::InvalidArgument(_)));
        assert!(parse_period_value("").is_err());
        assert!(parse_period_value("2021-13-01").is_err());
    }

    #[test]
    fn test_period_value_round_trip() {
        let d = date(2022, 12, 31);
        assert_eq!(parse_period_value(&period_value(d)).unwrap(), d);
    }
}
