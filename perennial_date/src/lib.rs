// Copyright 2026 the Perennial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Perennial Date: calendar-day values and date arithmetic.
//!
//! This crate provides the value type the rest of Perennial is built on:
//! [`CalendarDay`], a time-of-day-free calendar date, plus the conversions a
//! month-grid UI needs:
//!
//! - Strict parsing of `YYYY-MM-DD` strings with overflow rejection (a day
//!   that does not exist in its month is rejected, never rolled forward).
//! - [`DateKey`], an integer encoding that is unique per calendar day and
//!   whose ordering matches chronological ordering, enabling O(1) map lookup
//!   and cheap comparisons.
//! - O(1) day arithmetic via civil-date/day-count conversion, and month
//!   arithmetic that lands on day 1 of the target month so it can never
//!   overflow into day counts.
//! - Sunday-first [`Weekday`] queries for grid alignment.
//!
//! All functions are total over their documented input shapes: parsing and
//! validation failures are reported as `None`, never panics.
//!
//! ## Minimal example
//!
//! ```rust
//! use perennial_date::CalendarDay;
//!
//! let day = CalendarDay::parse("2024-02-29").unwrap();
//! assert_eq!(day.date_key(), 20240229);
//!
//! // Day 31 does not exist in April: rejected, not rolled into May.
//! assert!(CalendarDay::parse("2024-04-31").is_none());
//!
//! // Month arithmetic always lands on day 1.
//! let next = day.add_months(1);
//! assert_eq!((next.year(), next.month(), next.day()), (2024, 2, 1));
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod civil;

pub use civil::{days_in_month, is_leap_year};

/// Integer encoding of a calendar day: `year * 10000 + (month + 1) * 100 + day`.
///
/// Two [`CalendarDay`] values are equal iff their date keys are equal, and
/// date-key ordering matches chronological ordering. The encoding is dense
/// enough for hashing and map lookup while staying human-readable in debug
/// output (`2024-03-05` encodes as `20240305`).
pub type DateKey = i32;

/// Day of the week, indexed Sunday-first to match grid-column conventions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Weekday {
    /// Index 0.
    Sunday,
    /// Index 1.
    Monday,
    /// Index 2.
    Tuesday,
    /// Index 3.
    Wednesday,
    /// Index 4.
    Thursday,
    /// Index 5.
    Friday,
    /// Index 6.
    Saturday,
}

impl Weekday {
    /// Returns the Sunday-first index in `0..=6`.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    /// Returns the weekday for a Sunday-first index, or `None` outside `0..=6`.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        Some(match index {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            6 => Self::Saturday,
            _ => return None,
        })
    }
}

/// A calendar day in the proleptic Gregorian calendar, with no time-of-day.
///
/// The month is 0-based (`0` is January), matching grid-cell indexing; the
/// rendered and parsed text forms are 1-based. Values are validated at
/// construction, so every `CalendarDay` in circulation names a real date.
///
/// Derived ordering compares `(year, month, day)` lexicographically, which is
/// chronological order and agrees with [`CalendarDay::date_key`] ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDay {
    /// Creates a day from a year, 0-based month, and 1-based day-of-month.
    ///
    /// Returns `None` when the month is outside `0..=11` or the day does not
    /// exist in that month (leap years accounted for).
    #[must_use]
    pub const fn new(year: i32, month: u8, day: u8) -> Option<Self> {
        if month > 11 {
            return None;
        }
        if day == 0 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// Parses a strict `YYYY-MM-DD` string.
    ///
    /// Leading and trailing ASCII whitespace is ignored; anything else that
    /// deviates from the four-two-two digit pattern fails. The numeric fields
    /// are then validated like [`CalendarDay::new`], so `"2024-02-30"` is
    /// `None` rather than silently becoming March 1st.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let s = input.trim().as_bytes();
        if s.len() != 10 || s[4] != b'-' || s[7] != b'-' {
            return None;
        }
        let digits = |range: core::ops::Range<usize>| -> Option<i32> {
            let mut value = 0_i32;
            for &b in &s[range] {
                if !b.is_ascii_digit() {
                    return None;
                }
                value = value * 10 + i32::from(b - b'0');
            }
            Some(value)
        };
        let year = digits(0..4)?;
        let month = digits(5..7)?;
        let day = digits(8..10)?;
        if !(1..=12).contains(&month) {
            return None;
        }
        Self::new(year, (month - 1) as u8, day as u8)
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the 0-based month (`0` is January).
    #[must_use]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the 1-based day of the month.
    #[must_use]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Returns the integer [`DateKey`] for this day.
    #[must_use]
    pub const fn date_key(self) -> DateKey {
        self.year * 10_000 + (self.month as i32 + 1) * 100 + self.day as i32
    }

    /// Reconstructs a day from a [`DateKey`], validating the encoded fields.
    #[must_use]
    pub const fn from_date_key(key: DateKey) -> Option<Self> {
        let year = key.div_euclid(10_000);
        let rest = key.rem_euclid(10_000);
        let month = rest / 100;
        let day = rest % 100;
        if month < 1 || month > 12 {
            return None;
        }
        Self::new(year, (month - 1) as u8, day as u8)
    }

    /// Returns the number of days since the Unix epoch (1970-01-01 is 0).
    #[must_use]
    pub const fn to_unix_days(self) -> i64 {
        civil::days_from_civil(self.year, self.month as u32 + 1, self.day as u32)
    }

    /// Returns the day for a count of days since the Unix epoch.
    #[must_use]
    pub const fn from_unix_days(days: i64) -> Self {
        let (year, month, day) = civil::civil_from_days(days);
        Self {
            year,
            month: (month - 1) as u8,
            day: day as u8,
        }
    }

    /// Returns the day of the week.
    #[must_use]
    pub const fn weekday(self) -> Weekday {
        // 1970-01-01 was a Thursday (Sunday-first index 4).
        match (self.to_unix_days() + 4).rem_euclid(7) {
            0 => Weekday::Sunday,
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            _ => Weekday::Saturday,
        }
    }

    /// Returns this day shifted by `delta` calendar days.
    #[must_use]
    pub const fn add_days(self, delta: i64) -> Self {
        Self::from_unix_days(self.to_unix_days() + delta)
    }

    /// Returns day 1 of the month `delta` months away.
    ///
    /// Month arithmetic deliberately lands on the first of the target month,
    /// so it can never overflow into a day count the target month lacks.
    #[must_use]
    pub const fn add_months(self, delta: i32) -> Self {
        let total = self.year * 12 + self.month as i32 + delta;
        Self {
            year: total.div_euclid(12),
            month: total.rem_euclid(12) as u8,
            day: 1,
        }
    }

    /// Returns day 1 of this day's month.
    #[must_use]
    pub const fn start_of_month(self) -> Self {
        Self {
            year: self.year,
            month: self.month,
            day: 1,
        }
    }
}

impl core::fmt::Display for CalendarDay {
    /// Renders `YYYY-MM-DD`; for valid input strings this is the exact
    /// inverse of [`CalendarDay::parse`].
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year,
            self.month + 1,
            self.day
        )
    }
}
