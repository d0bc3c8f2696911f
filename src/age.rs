//! age.rs
//!
//! Human age as a calendar difference:
//!     "X years, Y months, Z days"
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python's
//! relativedelta), so the calendar-aware borrowing rules live here.
//!
//! This logic handles:
//!   • month underflow (borrowing from years)
//!   • day underflow (borrowing from the month before `today`)
//!   • leap years
//!   • varying month lengths

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Age {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl Age {
    /// Calendar difference from `birthdate` to `today`.
    ///
    /// `birthdate` must not be after `today`; the validator rejects such
    /// dates before they get here.
    pub fn between(birthdate: NaiveDate, today: NaiveDate) -> Self {
        debug_assert!(birthdate <= today, "birth date {birthdate} is after {today}");

        let mut years = today.year() - birthdate.year();
        let mut months = today.month() as i32 - birthdate.month() as i32;
        let mut days = today.day() as i32 - birthdate.day() as i32;

        // Fix day underflow
        if days < 0 {
            months -= 1;

            // A borrowed month shorter than the birth day (31 Jan -> 1 Mar)
            // counts as ending on its last day, so `days` never goes negative.
            let (prev_year, prev_month) = previous_month(today.year(), today.month());
            let borrowed = days_in_month(prev_year, prev_month).max(birthdate.day());
            days += borrowed as i32;
        }

        // Fix month underflow
        if months < 0 {
            years -= 1;
            months += 12;
        }

        Self {
            years,
            months,
            days,
        }
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} year{}, {} month{}, {} day{}",
            self.years,
            plural(self.years),
            self.months,
            plural(self.months),
            self.days,
            plural(self.days)
        )
    }
}

fn plural(n: i32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Returns number of days in a given year/month (handles leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // should never occur but keeps function total
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
