// Copyright 2026 the Perennial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panel construction inputs: behavior configuration and state ownership.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use perennial_date::{CalendarDay, Weekday};
use perennial_festival::Holiday;
use perennial_marks::Mark;

/// Host-supplied predicate rejecting individual days.
pub type DisabledPredicate = Box<dyn Fn(CalendarDay) -> bool>;

/// What a single click (or unmoved drag) does to the clicked day's mark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarkBehavior {
    /// Insert a single mark, or remove the existing one.
    #[default]
    Toggle,
    /// Always (re)place the single mark at the clicked day.
    Add,
}

/// Who owns a piece of panel state.
///
/// Resolved once at construction: both variants carry the initial value and
/// the panel keeps a single internal source of truth either way. The
/// distinction is the host's contract — an `External` owner listens for the
/// corresponding [`crate::PanelEvent`] and re-injects through the panel's
/// setters, an `Owned` value just lives in the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control<T> {
    /// The host owns the value and re-injects on change events.
    External(T),
    /// The panel owns the value; the argument is the initial state.
    Owned(T),
}

impl<T> Control<T> {
    /// Unwraps the initial value.
    pub fn into_inner(self) -> T {
        match self {
            Self::External(value) | Self::Owned(value) => value,
        }
    }
}

impl<T: Default> Default for Control<T> {
    fn default() -> Self {
        Self::Owned(T::default())
    }
}

/// Initial state for the three owned/controlled panel values.
#[derive(Debug, Default)]
pub struct PanelInit<C = ()> {
    /// The committed selection.
    pub selected: Control<Option<CalendarDay>>,
    /// The mark list (normalized on adoption).
    pub marks: Control<Vec<Mark<C>>>,
    /// The displayed month; `None` falls back to the selection's month, then
    /// to today's.
    pub month: Control<Option<CalendarDay>>,
}

/// Behavior configuration, resolved once at panel construction.
pub struct PanelConfig {
    /// First column of the grid.
    pub week_start: Weekday,
    /// Days strictly before this one are disabled.
    pub min: Option<CalendarDay>,
    /// Days strictly after this one are disabled.
    pub max: Option<CalendarDay>,
    /// Additional host-side day rejection.
    pub disabled: Option<DisabledPredicate>,
    /// Whether interactions may create or remove marks.
    pub markable: bool,
    /// Color for marks created by interaction.
    pub mark_color: String,
    /// Toggle or add semantics for single marks.
    pub mark_behavior: MarkBehavior,
    /// Whether a press-sweep-release gesture marks a range.
    pub drag_to_mark: bool,
    /// Whether out-of-month cells are rendered (they stay in the grid
    /// regardless, for layout stability).
    pub show_outside_days: bool,
    /// Whether "today" is highlighted.
    pub show_today: bool,
    /// Whether lunar day labels are shown.
    pub show_lunar: bool,
    /// Whether festival/holiday labels are shown.
    pub show_holidays: bool,
    /// The host's notion of the current day; the panel has no clock.
    pub today: Option<CalendarDay>,
    /// Host-supplied holidays, which win over computed festivals.
    pub holidays: Vec<(CalendarDay, Holiday)>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            week_start: Weekday::Sunday,
            min: None,
            max: None,
            disabled: None,
            markable: false,
            mark_color: String::from("var(--primary-border)"),
            mark_behavior: MarkBehavior::Toggle,
            drag_to_mark: true,
            show_outside_days: true,
            show_today: true,
            show_lunar: true,
            show_holidays: true,
            today: None,
            holidays: Vec::new(),
        }
    }
}

impl core::fmt::Debug for PanelConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PanelConfig")
            .field("week_start", &self.week_start)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("disabled", &self.disabled.is_some())
            .field("markable", &self.markable)
            .field("mark_color", &self.mark_color)
            .field("mark_behavior", &self.mark_behavior)
            .field("drag_to_mark", &self.drag_to_mark)
            .field("show_outside_days", &self.show_outside_days)
            .field("show_today", &self.show_today)
            .field("show_lunar", &self.show_lunar)
            .field("show_holidays", &self.show_holidays)
            .field("today", &self.today)
            .field("holidays", &self.holidays)
            .finish()
    }
}
