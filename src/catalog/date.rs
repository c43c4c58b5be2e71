//! # Date Normalizer
//!
//! Best-effort canonicalization of loosely formatted dates to `YYYY/MM/DD`.
//!
//! ## Algorithm
//!
//! 1. `-` and `.` separators are rewritten to `/`
//! 2. Candidate formats are tried in a fixed priority order:
//!    year-month-day, year-day-month, day-month-year, month-day-year
//! 3. The first format that yields a valid calendar date wins
//! 4. If none does, the raw input is returned unchanged
//!
//! Years must have exactly four digits; months and days one or two.
//!
//! ## Ambiguity
//!
//! `"03/04/2024"` is read as 3 April (day-month-year outranks
//! month-day-year). The order is kept for compatibility with existing
//! catalogs and is a candidate for an explicit locale parameter.

use chrono::NaiveDate;

/// Canonical output format.
const CANONICAL: &str = "%Y/%m/%d";

/// Component order of a candidate date format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    YearMonthDay,
    YearDayMonth,
    DayMonthYear,
    MonthDayYear,
}

impl DateOrder {
    /// Candidate formats, highest priority first.
    pub const PRIORITY: [DateOrder; 4] = [
        DateOrder::YearMonthDay,
        DateOrder::YearDayMonth,
        DateOrder::DayMonthYear,
        DateOrder::MonthDayYear,
    ];

    /// Interpret three `/`-separated components under this order.
    pub fn parse(self, parts: [&str; 3]) -> Option<NaiveDate> {
        let [a, b, c] = parts;
        let (year, month, day) = match self {
            DateOrder::YearMonthDay => (a, b, c),
            DateOrder::YearDayMonth => (a, c, b),
            DateOrder::DayMonthYear => (c, b, a),
            DateOrder::MonthDayYear => (c, a, b),
        };

        let year = component(year, 4, 4)?;
        let month = component(month, 1, 2)?;
        let day = component(day, 1, 2)?;
        if year == 0 {
            return None;
        }
        NaiveDate::from_ymd_opt(year as i32, month, day)
    }
}

/// Parse an all-digit component of `min..=max` digits.
fn component(s: &str, min: usize, max: usize) -> Option<u32> {
    if s.len() < min || s.len() > max || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Resolve `raw` to a calendar date using the priority order.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let unified = raw.replace(['-', '.'], "/");
    let mut split = unified.split('/');
    let parts = [split.next()?, split.next()?, split.next()?];
    if split.next().is_some() {
        return None;
    }

    DateOrder::PRIORITY
        .iter()
        .find_map(|order| order.parse(parts))
}

/// Normalize a date string to `YYYY/MM/DD`.
///
/// Empty input gives an empty string; unrecognized input is returned as-is.
pub fn normalize_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    match parse_date(raw) {
        Some(date) => date.format(CANONICAL).to_string(),
        None => {
            tracing::debug!(raw, "date left as entered");
            raw.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_month_day_wins() {
        assert_eq!(normalize_date("2024-5-6"), "2024/05/06");
        assert_eq!(normalize_date("2024.05.06"), "2024/05/06");
        assert_eq!(normalize_date("2024/12/31"), "2024/12/31");
    }

    #[test]
    fn test_year_day_month_fallback() {
        // Month 25 is invalid, so the second format applies.
        assert_eq!(normalize_date("2024/25/12"), "2024/12/25");
    }

    #[test]
    fn test_day_month_year_before_month_day_year() {
        assert_eq!(normalize_date("03/04/2024"), "2024/04/03");
        assert_eq!(normalize_date("6.5.2024"), "2024/05/06");
    }

    #[test]
    fn test_month_day_year_last_resort() {
        assert_eq!(normalize_date("12/25/2024"), "2024/12/25");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_date(""), "");
    }

    #[test]
    fn test_pass_through() {
        assert_eq!(normalize_date("not-a-date"), "not-a-date");
        assert_eq!(normalize_date("2024"), "2024");
        assert_eq!(normalize_date("Spring 2024"), "Spring 2024");
        assert_eq!(normalize_date("2024/02/30"), "2024/02/30");
        assert_eq!(normalize_date("24/5/6"), "24/5/6");
        assert_eq!(normalize_date("2024/5/6/7"), "2024/5/6/7");
    }

    #[test]
    fn test_pass_through_keeps_original_separators() {
        assert_eq!(normalize_date("2024-99-99"), "2024-99-99");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "",
            "2024-5-6",
            "03/04/2024",
            "12/25/2024",
            "2024/25/12",
            "not-a-date",
            "2024-99-99",
            " 2024-01-01",
            "c. 1890",
        ];
        for input in inputs {
            let once = normalize_date(input);
            assert_eq!(normalize_date(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(
            DateOrder::PRIORITY,
            [
                DateOrder::YearMonthDay,
                DateOrder::YearDayMonth,
                DateOrder::DayMonthYear,
                DateOrder::MonthDayYear,
            ]
        );
    }

    #[test]
    fn test_parse_date_leap_day() {
        assert_eq!(
            parse_date("29-02-2024"),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(parse_date("29-02-2023"), None);
    }
}
