// Copyright 2026 the Perennial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Perennial Grid: fixed-shape month-grid construction.
//!
//! A month view in Perennial is always a rectangle of [`GRID_CELLS`] cells —
//! six full weeks of seven days — regardless of how many days the displayed
//! month has or which weekday it starts on. Leading and trailing cells belong
//! to the adjacent months and are flagged rather than removed, so cell count
//! and adjacency are stable across navigation: cell `i + 1` is always exactly
//! one calendar day after cell `i`, and cell `i ± 7` is the same weekday in
//! the neighboring week.
//!
//! The crate also defines [`CellFlags`], the bit set the panel layer uses to
//! describe per-cell derived view state to a renderer, and a week-label
//! rotation helper for configurable week starts.
//!
//! ## Minimal example
//!
//! ```rust
//! use perennial_date::{CalendarDay, Weekday};
//! use perennial_grid::{GRID_CELLS, build_grid, in_month};
//!
//! // February 2024 starts on a Thursday; with a Sunday week start the grid
//! // begins on the preceding Sunday, January 28th.
//! let month = CalendarDay::parse("2024-02-01").unwrap();
//! let grid = build_grid(month, Weekday::Sunday);
//!
//! assert_eq!(grid.len(), GRID_CELLS);
//! assert_eq!(grid[0], CalendarDay::parse("2024-01-28").unwrap());
//! assert!(!in_month(grid[0], month));
//! assert_eq!(grid[28], CalendarDay::parse("2024-02-29").unwrap());
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

use perennial_date::{CalendarDay, Weekday};

/// Days per grid row.
pub const DAYS_PER_WEEK: usize = 7;

/// Week rows per grid.
pub const GRID_WEEKS: usize = 6;

/// Total cells in a month grid.
pub const GRID_CELLS: usize = DAYS_PER_WEEK * GRID_WEEKS;

bitflags::bitflags! {
    /// Derived view state for one grid cell.
    ///
    /// These flags are computed by the panel layer once per render pass;
    /// renderers map them onto styling and may treat `HIDDEN` cells as empty
    /// placeholders (the cell stays in the array so the grid keeps its fixed
    /// shape).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct CellFlags: u16 {
        /// The cell's day belongs to the displayed panel month.
        const IN_MONTH = 1 << 0;
        /// The cell's day equals the host-supplied "today".
        const TODAY = 1 << 1;
        /// The cell's day is the committed selection.
        const SELECTED = 1 << 2;
        /// The day is outside the min/max bounds or rejected by the host's
        /// disabled-day predicate.
        const DISABLED = 1 << 3;
        /// A single-day mark exists at this day.
        const SINGLE_MARK = 1 << 4;
        /// A range mark exists at this day.
        const RANGE_MARK = 1 << 5;
        /// The day lies inside the live drag-preview span.
        const DRAG_PREVIEW = 1 << 6;
        /// The range-mark highlight continues into the previous cell of the
        /// same displayed row.
        const RANGE_LINKS_PREV = 1 << 7;
        /// The range-mark highlight continues into the next cell of the same
        /// displayed row.
        const RANGE_LINKS_NEXT = 1 << 8;
        /// The drag-preview highlight continues into the previous cell of
        /// the same displayed row.
        const DRAG_LINKS_PREV = 1 << 9;
        /// The drag-preview highlight continues into the next cell of the
        /// same displayed row.
        const DRAG_LINKS_NEXT = 1 << 10;
        /// Out-of-month cell while outside days are not shown; renderers
        /// leave the slot blank.
        const HIDDEN = 1 << 11;
    }
}

/// Builds the 42-cell grid for the month containing `panel_month`.
///
/// The grid's top-left cell is found by stepping back from the first of the
/// month to the most recent `week_start` (possibly the first itself); the
/// remaining cells are the 41 consecutive days that follow. The result
/// therefore always covers the whole month, is gap-free, and contains each
/// date key exactly once.
#[must_use]
pub fn build_grid(panel_month: CalendarDay, week_start: Weekday) -> [CalendarDay; GRID_CELLS] {
    let first = panel_month.start_of_month();
    let offset = (i64::from(first.weekday().index()) + 7 - i64::from(week_start.index())) % 7;
    let top_left = first.add_days(-offset);
    core::array::from_fn(|i| top_left.add_days(i as i64))
}

/// Returns `true` if `day` falls inside the month containing `panel_month`.
#[must_use]
pub fn in_month(day: CalendarDay, panel_month: CalendarDay) -> bool {
    day.year() == panel_month.year() && day.month() == panel_month.month()
}

/// Returns the grid column (`0..7`) for a cell index.
#[must_use]
pub const fn column_of(index: usize) -> usize {
    index % DAYS_PER_WEEK
}

/// Rotates Sunday-first week labels so index 0 is the configured week start.
#[must_use]
pub fn rotate_week_labels<T: Clone>(labels: &[T; DAYS_PER_WEEK], week_start: Weekday) -> [T; DAYS_PER_WEEK] {
    let shift = week_start.index() as usize;
    core::array::from_fn(|i| labels[(i + shift) % DAYS_PER_WEEK].clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> CalendarDay {
        CalendarDay::parse(s).unwrap()
    }

    #[test]
    fn grid_is_consecutive_for_every_week_start() {
        for start_index in 0..7 {
            let week_start = Weekday::from_index(start_index).unwrap();
            for month in ["2024-02-11", "2024-12-01", "2023-02-03", "2021-08-19"] {
                let grid = build_grid(day(month), week_start);
                assert_eq!(grid.len(), GRID_CELLS);
                assert_eq!(grid[0].weekday(), week_start);
                for i in 0..GRID_CELLS - 1 {
                    assert_eq!(grid[i].add_days(1), grid[i + 1]);
                }
            }
        }
    }

    #[test]
    fn grid_covers_the_whole_month() {
        let month = day("2024-02-01");
        let grid = build_grid(month, Weekday::Monday);
        let in_count = grid.iter().filter(|&&d| in_month(d, month)).count();
        assert_eq!(in_count, 29);
    }

    #[test]
    fn leap_february_with_sunday_start() {
        let grid = build_grid(day("2024-02-01"), Weekday::Sunday);
        assert_eq!(grid[0], day("2024-01-28"));
        assert_eq!(grid[0].weekday(), Weekday::Sunday);
        assert_eq!(grid[28], day("2024-02-29"));
        assert_eq!(grid[GRID_CELLS - 1], day("2024-03-09"));
    }

    #[test]
    fn month_starting_on_week_start_keeps_leading_row_in_month() {
        // April 2024 starts on a Monday; with a Monday week start the first
        // cell is April 1st itself.
        let grid = build_grid(day("2024-04-15"), Weekday::Monday);
        assert_eq!(grid[0], day("2024-04-01"));
    }

    #[test]
    fn date_keys_are_unique() {
        let grid = build_grid(day("2024-05-01"), Weekday::Sunday);
        for i in 0..GRID_CELLS {
            for j in i + 1..GRID_CELLS {
                assert_ne!(grid[i].date_key(), grid[j].date_key());
            }
        }
    }

    #[test]
    fn week_labels_rotate() {
        let labels = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
        let rotated = rotate_week_labels(&labels, Weekday::Monday);
        assert_eq!(rotated, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        let unchanged = rotate_week_labels(&labels, Weekday::Sunday);
        assert_eq!(unchanged, labels);
    }
}
