use chrono::{Datelike, Local, Months, NaiveDate};

use crate::errors::{Error, Result};

/// The calendar date "today" in the server's local timezone.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Builds the first day of `year`/`month`, rejecting impossible months.
pub fn month_start(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| Error::invalid_input(format!("Invalid year/month: {year}-{month:02}")))
}

/// Inclusive `[first, last]` calendar days of `year`/`month`.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    let first = month_start(year, month)?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| Error::invalid_input(format!("Month out of range: {year}-{month:02}")))?;
    Ok((first, last))
}

/// Moves `date` back by `months` calendar months, clamping the day where needed.
pub fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

/// "YYYY-MM" label used to bucket expenses and key budgets.
pub fn month_label(year: i32, month: u32) -> String {
    format!("{year:04}-{month:02}")
}

/// "YYYY-MM" label for the month containing `date`.
pub fn month_label_of(date: NaiveDate) -> String {
    month_label(date.year(), date.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn month_bounds_respects_leap_years() {
        assert_eq!(month_bounds(2024, 2).unwrap(), (d(2024, 2, 1), d(2024, 2, 29)));
        assert_eq!(month_bounds(2025, 2).unwrap(), (d(2025, 2, 1), d(2025, 2, 28)));
        assert_eq!(month_bounds(2025, 12).unwrap().1, d(2025, 12, 31));
        assert_eq!(month_bounds(1900, 2).unwrap().1, d(1900, 2, 28));
        assert_eq!(month_bounds(2000, 2).unwrap().1, d(2000, 2, 29));
    }

    #[test]
    fn month_bounds_rejects_bad_months() {
        assert!(month_bounds(2025, 0).is_err());
        assert!(month_bounds(2025, 13).is_err());
    }

    #[test]
    fn months_before_crosses_year_boundary() {
        assert_eq!(months_before(d(2025, 2, 1), 5), d(2024, 9, 1));
        assert_eq!(months_before(d(2025, 3, 31), 1), d(2025, 2, 28));
    }

    #[test]
    fn labels_are_zero_padded() {
        assert_eq!(month_label(2025, 2), "2025-02");
        assert_eq!(month_label_of(d(2024, 11, 17)), "2024-11");
        assert_eq!(first_of_month(d(2024, 11, 17)), d(2024, 11, 1));
    }
}
