// Copyright 2026 the Perennial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-day annotation resolution with caching and category precedence.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use perennial_date::{CalendarDay, DateKey};

use crate::festival;
use crate::lunar::lunar_from_solar;

// Annotation is deterministic per date, so the cache never invalidates on
// time; it is cleared wholesale when it outgrows the working set of a few
// displayed grids or when the custom-holiday table changes.
const CACHE_CAP: usize = 512;

/// Which category supplied a cell's sub-label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubKind {
    /// No sub-label.
    #[default]
    None,
    /// A Chinese festival or a host-supplied holiday.
    Chinese,
    /// An international observance.
    International,
    /// The plain lunar day label.
    Lunar,
}

/// A named holiday, host-supplied or computed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Holiday {
    /// Display name.
    pub name: String,
    /// Optional renderer-interpreted accent color.
    pub color: Option<String>,
}

impl Holiday {
    /// Creates a holiday with no accent color.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: String::from(name),
            color: None,
        }
    }

    /// Creates a holiday with an accent color.
    #[must_use]
    pub fn with_color(name: &str, color: &str) -> Self {
        Self {
            name: String::from(name),
            color: Some(String::from(color)),
        }
    }
}

/// Everything the renderer may show under a day number.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DayAnnotation {
    /// Chinese festivals (or host-supplied holidays, which take their place).
    pub chinese: Vec<Holiday>,
    /// International observances; only computed when no Chinese entry won.
    pub international: Vec<Holiday>,
    /// The lunar day label, empty when disabled or out of range.
    pub lunar_label: String,
    /// The single sub-label to display, empty when there is none.
    pub sub_label: String,
    /// The category the sub-label came from.
    pub sub_kind: SubKind,
    /// Accent color for the sub-label, from the first colored entry of the
    /// winning category.
    pub sub_color: Option<String>,
}

/// Cached per-day annotation resolver.
///
/// Resolution is a pure function of the day (given the configured custom
/// holidays), so results are memoized by date key. The resolver runs inline
/// during pointer moves; a hit is one hash lookup.
///
/// Category precedence for the displayed sub-label: a host-supplied holiday
/// for the date wins outright, then computed Chinese festivals, then
/// international observances, then the plain lunar day label. Entries join
/// with " / " only within the winning category, never across categories.
#[derive(Clone, Debug)]
pub struct Annotator {
    show_lunar: bool,
    show_holidays: bool,
    custom: HashMap<DateKey, Vec<Holiday>>,
    cache: HashMap<DateKey, DayAnnotation>,
}

impl Annotator {
    /// Creates a resolver with both label sources enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::with_toggles(true, true)
    }

    /// Creates a resolver with the given source toggles.
    ///
    /// `show_lunar` gates the lunar day label; `show_holidays` gates both
    /// festival categories (custom holidays included).
    #[must_use]
    pub fn with_toggles(show_lunar: bool, show_holidays: bool) -> Self {
        Self {
            show_lunar,
            show_holidays,
            custom: HashMap::new(),
            cache: HashMap::new(),
        }
    }

    /// Replaces the host-supplied holiday table and drops cached results.
    pub fn set_custom_holidays<I>(&mut self, holidays: I)
    where
        I: IntoIterator<Item = (CalendarDay, Holiday)>,
    {
        self.custom.clear();
        for (day, holiday) in holidays {
            self.custom.entry(day.date_key()).or_default().push(holiday);
        }
        self.cache.clear();
    }

    /// Resolves the annotation for `day`, memoized by date key.
    pub fn resolve(&mut self, day: CalendarDay) -> &DayAnnotation {
        let key = day.date_key();
        if !self.cache.contains_key(&key) {
            if self.cache.len() >= CACHE_CAP {
                self.cache.clear();
            }
            let annotation = self.compute(day);
            self.cache.insert(key, annotation);
        }
        &self.cache[&key]
    }

    fn compute(&self, day: CalendarDay) -> DayAnnotation {
        let lunar = lunar_from_solar(day);

        let chinese = if !self.show_holidays {
            Vec::new()
        } else if let Some(custom) = self.custom.get(&day.date_key()) {
            custom.clone()
        } else {
            let mut entries = Vec::new();
            let lunar_name = lunar
                .as_ref()
                .and_then(festival::chinese_lunar_festival)
                .or_else(|| festival::chinese_new_year_eve(day));
            if let Some(name) = lunar_name {
                entries.push(Holiday::new(name));
            }
            if let Some(name) = festival::chinese_solar_festival(day) {
                entries.push(Holiday::new(name));
            }
            entries
        };

        let international = if self.show_holidays && chinese.is_empty() {
            festival::international_festival(day)
                .map(|name| alloc::vec![Holiday::new(name)])
                .unwrap_or_default()
        } else {
            Vec::new()
        };

        let lunar_label = if self.show_lunar {
            lunar.map(|l| l.label()).unwrap_or_default()
        } else {
            String::new()
        };

        let (sub_label, sub_kind, sub_color) = if !chinese.is_empty() {
            (
                join_names(&chinese),
                SubKind::Chinese,
                first_color(&chinese),
            )
        } else if !international.is_empty() {
            (
                join_names(&international),
                SubKind::International,
                first_color(&international),
            )
        } else if !lunar_label.is_empty() {
            (lunar_label.clone(), SubKind::Lunar, None)
        } else {
            (String::new(), SubKind::None, None)
        };

        DayAnnotation {
            chinese,
            international,
            lunar_label,
            sub_label,
            sub_kind,
            sub_color,
        }
    }
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new()
    }
}

fn join_names(entries: &[Holiday]) -> String {
    let mut out = String::new();
    for entry in entries {
        if entry.name.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push_str(" / ");
        }
        out.push_str(&entry.name);
    }
    out
}

fn first_color(entries: &[Holiday]) -> Option<String> {
    entries.iter().find_map(|e| e.color.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> CalendarDay {
        CalendarDay::parse(s).unwrap()
    }

    #[test]
    fn chinese_festival_wins_over_lunar_label() {
        let mut annotator = Annotator::new();
        let annotation = annotator.resolve(day("2024-02-10"));
        assert_eq!(annotation.sub_label, "春节");
        assert_eq!(annotation.sub_kind, SubKind::Chinese);
        // The lunar label is still reported alongside.
        assert_eq!(annotation.lunar_label, "正月");
    }

    #[test]
    fn international_fills_in_when_no_chinese_entry() {
        let mut annotator = Annotator::new();
        let annotation = annotator.resolve(day("2024-12-25"));
        assert_eq!(annotation.sub_label, "圣诞节");
        assert_eq!(annotation.sub_kind, SubKind::International);
    }

    #[test]
    fn plain_days_fall_back_to_the_lunar_label() {
        let mut annotator = Annotator::new();
        let annotation = annotator.resolve(day("2024-12-24"));
        assert_eq!(annotation.sub_kind, SubKind::Lunar);
        assert!(!annotation.sub_label.is_empty());
        assert_eq!(annotation.sub_label, annotation.lunar_label);
    }

    #[test]
    fn custom_holiday_wins_outright() {
        let mut annotator = Annotator::new();
        annotator.set_custom_holidays([(
            day("2024-02-10"),
            Holiday::with_color("发布日", "crimson"),
        )]);

        let annotation = annotator.resolve(day("2024-02-10"));
        assert_eq!(annotation.sub_label, "发布日");
        assert_eq!(annotation.sub_kind, SubKind::Chinese);
        assert_eq!(annotation.sub_color.as_deref(), Some("crimson"));
    }

    #[test]
    fn multiple_entries_join_within_a_category() {
        let mut annotator = Annotator::new();
        let d = day("2024-06-01");
        annotator.set_custom_holidays([
            (d, Holiday::new("儿童节")),
            (d, Holiday::new("开园日")),
        ]);

        let annotation = annotator.resolve(d);
        assert_eq!(annotation.sub_label, "儿童节 / 开园日");
    }

    #[test]
    fn solar_observance_lands_in_the_chinese_category() {
        let mut annotator = Annotator::new();
        let annotation = annotator.resolve(day("2024-10-01"));
        assert_eq!(annotation.sub_label, "国庆节");
        assert_eq!(annotation.sub_kind, SubKind::Chinese);
        assert_eq!(annotation.chinese.len(), 1);
        assert!(annotation.international.is_empty());
    }

    #[test]
    fn toggles_suppress_their_sources() {
        let mut lunar_only = Annotator::with_toggles(true, false);
        let annotation = lunar_only.resolve(day("2024-02-10"));
        assert!(annotation.chinese.is_empty());
        assert_eq!(annotation.sub_kind, SubKind::Lunar);
        assert_eq!(annotation.sub_label, "正月");

        let mut bare = Annotator::with_toggles(false, false);
        let annotation = bare.resolve(day("2024-02-10"));
        assert_eq!(annotation.sub_kind, SubKind::None);
        assert!(annotation.sub_label.is_empty());
    }

    #[test]
    fn resolution_is_cached_and_stable() {
        let mut annotator = Annotator::new();
        let first = annotator.resolve(day("2024-02-10")).clone();
        let second = annotator.resolve(day("2024-02-10")).clone();
        assert_eq!(first, second);
    }

    #[test]
    fn out_of_range_days_resolve_empty() {
        let mut annotator = Annotator::new();
        let annotation = annotator.resolve(day("1899-06-15"));
        assert!(annotation.lunar_label.is_empty());
        assert!(annotation.chinese.is_empty());
        assert_eq!(annotation.sub_kind, SubKind::None);
    }
}
