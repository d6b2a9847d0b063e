// Copyright 2026 the Perennial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Festival name tables: lunar-keyed and solar-keyed Chinese festivals plus
//! common international observances.
//!
//! The tables are lookups, not policy: precedence between categories and
//! host-supplied overrides live in the [`crate::Annotator`].

use perennial_date::CalendarDay;

use crate::lunar::{LunarDay, lunar_from_solar};

/// Returns the Chinese festival tied to a lunar date, if any.
///
/// Leap-month days never match; the festival belongs to the regular month.
#[must_use]
pub fn chinese_lunar_festival(day: &LunarDay) -> Option<&'static str> {
    if day.leap {
        return None;
    }
    Some(match (day.month, day.day) {
        (1, 1) => "春节",
        (1, 15) => "元宵节",
        (5, 5) => "端午节",
        (7, 7) => "七夕",
        (8, 15) => "中秋节",
        (9, 9) => "重阳节",
        (12, 8) => "腊八节",
        (12, 23) => "小年",
        _ => return None,
    })
}

/// Returns 除夕 for the last day of a lunar year.
///
/// The last lunar month has 29 or 30 days, so the eve is detected by looking
/// one day ahead rather than by a fixed date.
#[must_use]
pub fn chinese_new_year_eve(day: CalendarDay) -> Option<&'static str> {
    let lunar = lunar_from_solar(day)?;
    if lunar.leap || lunar.month != 12 || !(29..=30).contains(&lunar.day) {
        return None;
    }
    let next = lunar_from_solar(day.add_days(1))?;
    (next.month == 1 && next.day == 1).then_some("除夕")
}

/// Returns the Chinese observance tied to a solar date, if any.
#[must_use]
pub fn chinese_solar_festival(day: CalendarDay) -> Option<&'static str> {
    let month = day.month() + 1;
    if month == 4 && day.day() == qingming_day(day.year()) {
        return Some("清明节");
    }
    Some(match (month, day.day()) {
        (1, 1) => "元旦",
        (5, 1) => "劳动节",
        (10, 1) => "国庆节",
        _ => return None,
    })
}

/// Returns the international observance tied to a solar date, if any.
#[must_use]
pub fn international_festival(day: CalendarDay) -> Option<&'static str> {
    Some(match (day.month() + 1, day.day()) {
        (2, 14) => "情人节",
        (3, 8) => "妇女节",
        (4, 1) => "愚人节",
        (10, 31) => "万圣节",
        (12, 25) => "圣诞节",
        _ => return None,
    })
}

/// Approximates the April day of 清明 for a year.
///
/// Century-coefficient formula: `floor(y * 0.2422 + base) - floor((y - 1) / 4)`
/// with `y = year % 100` and base 4.81 from 2000 on, 5.59 before. Accurate to
/// within a day over the tabulated lunar range.
#[must_use]
pub fn qingming_day(year: i32) -> u8 {
    let y = f64::from(year.rem_euclid(100));
    let base = if year >= 2000 { 4.81 } else { 5.59 };
    let term = (y * 0.2422 + base) as i32;
    let correction = (year.rem_euclid(100) - 1).div_euclid(4);
    (term - correction) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> CalendarDay {
        CalendarDay::parse(s).unwrap()
    }

    #[test]
    fn lunar_festivals_by_date() {
        let new_year = lunar_from_solar(day("2024-02-10")).unwrap();
        assert_eq!(chinese_lunar_festival(&new_year), Some("春节"));

        let mid_autumn = lunar_from_solar(day("2024-09-17")).unwrap();
        assert_eq!(chinese_lunar_festival(&mid_autumn), Some("中秋节"));

        let plain = lunar_from_solar(day("2024-03-20")).unwrap();
        assert_eq!(chinese_lunar_festival(&plain), None);
    }

    #[test]
    fn new_year_eve_looks_one_day_ahead() {
        assert_eq!(chinese_new_year_eve(day("2024-02-09")), Some("除夕"));
        assert_eq!(chinese_new_year_eve(day("2025-01-28")), Some("除夕"));
        assert_eq!(chinese_new_year_eve(day("2024-02-10")), None);
        assert_eq!(chinese_new_year_eve(day("2024-06-15")), None);
    }

    #[test]
    fn solar_festivals_by_date() {
        assert_eq!(chinese_solar_festival(day("2024-01-01")), Some("元旦"));
        assert_eq!(chinese_solar_festival(day("2024-05-01")), Some("劳动节"));
        assert_eq!(chinese_solar_festival(day("2024-10-01")), Some("国庆节"));
        assert_eq!(chinese_solar_festival(day("2024-07-07")), None);

        assert_eq!(international_festival(day("2024-12-25")), Some("圣诞节"));
        assert_eq!(international_festival(day("2024-02-14")), Some("情人节"));
        assert_eq!(international_festival(day("2024-12-24")), None);
    }

    #[test]
    fn qingming_approximation() {
        // The formula's own outputs for recent years.
        assert_eq!(qingming_day(2023), 5);
        assert_eq!(qingming_day(2024), 5);
        assert_eq!(qingming_day(1999), 5);
        assert_eq!(
            chinese_solar_festival(day("2023-04-05")),
            Some("清明节")
        );
        assert_eq!(chinese_solar_festival(day("2023-04-06")), None);
    }
}
