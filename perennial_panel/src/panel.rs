// Copyright 2026 the Perennial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The month-panel controller.

use alloc::vec;
use alloc::vec::Vec;

use perennial_date::{CalendarDay, DateKey};
use perennial_event_state::drag::{DragOutcome, MarkDrag};
use perennial_festival::Annotator;
use perennial_grid::{CellFlags, GRID_CELLS, build_grid, column_of, in_month};
use perennial_marks::{Mark, MarkLookup, MarkSet, MarkVariant};

use crate::config::{MarkBehavior, PanelConfig, PanelInit};
use crate::events::{NavDirection, PanelEvent};
use crate::view::CellView;

// Shown when the host supplies neither a month, a selection, nor today.
const FALLBACK_MONTH: CalendarDay = match CalendarDay::new(1970, 0, 1) {
    Some(day) => day,
    None => panic!("fallback month is a valid date"),
};

/// The one logical writer behind a month-grid UI.
///
/// A `CalendarPanel` owns the displayed month, the committed selection, the
/// mark store, the drag gesture, and the annotation cache, and turns host
/// input (clicks, resolved pointer events, navigation, re-injected state)
/// into change events plus a 42-cell derived view.
///
/// Mutating methods return the [`PanelEvent`]s the call produced; the panel
/// never invokes host callbacks. All state lives in this instance — there is
/// no cross-instance sharing, and the single writer at any moment is the
/// current user gesture.
///
/// `C` is the mark payload type, `()` when marks are plain colors.
#[derive(Debug)]
pub struct CalendarPanel<C = ()> {
    config: PanelConfig,
    month: CalendarDay,
    grid: [CalendarDay; GRID_CELLS],
    selected: Option<CalendarDay>,
    marks: MarkSet<C>,
    drag: MarkDrag<i64>,
    annotator: Annotator,
    revision: u64,
}

impl<C: Clone> CalendarPanel<C> {
    /// Creates a panel from behavior configuration and initial state.
    ///
    /// The initial month falls back from the explicit value to the
    /// selection's month, then to today's, then to the Unix epoch month.
    #[must_use]
    pub fn new(config: PanelConfig, init: PanelInit<C>) -> Self {
        let selected = init.selected.into_inner();
        let month = init
            .month
            .into_inner()
            .or(selected)
            .or(config.today)
            .unwrap_or(FALLBACK_MONTH)
            .start_of_month();

        let mut annotator = Annotator::with_toggles(config.show_lunar, config.show_holidays);
        annotator.set_custom_holidays(config.holidays.iter().cloned());

        Self {
            grid: build_grid(month, config.week_start),
            month,
            selected,
            marks: MarkSet::from_marks(init.marks.into_inner()),
            drag: MarkDrag::default(),
            annotator,
            config,
            revision: 0,
        }
    }

    /// Returns day 1 of the displayed month.
    #[must_use]
    pub fn month(&self) -> CalendarDay {
        self.month
    }

    /// Returns the committed selection.
    #[must_use]
    pub fn selected(&self) -> Option<CalendarDay> {
        self.selected
    }

    /// Returns the normalized mark list.
    #[must_use]
    pub fn marks(&self) -> &[Mark<C>] {
        self.marks.marks()
    }

    /// Returns the behavior configuration.
    #[must_use]
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Returns the 42 days of the displayed grid, top-left first.
    ///
    /// Hosts use this to map hit-tested cell indices back to days.
    #[must_use]
    pub fn grid(&self) -> &[CalendarDay; GRID_CELLS] {
        &self.grid
    }

    /// Returns the grid day with the given key, if currently displayed.
    #[must_use]
    pub fn day_for_key(&self, key: DateKey) -> Option<CalendarDay> {
        self.grid.iter().copied().find(|d| d.date_key() == key)
    }

    /// Returns the panel's revision counter; bumped on every state change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Renders the displayed month as `YYYY-MM`.
    #[must_use]
    pub fn month_label(&self) -> alloc::string::String {
        alloc::format!("{:04}-{:02}", self.month.year(), self.month.month() + 1)
    }

    /// Returns `true` if `day` is outside the min/max bounds or rejected by
    /// the host's predicate.
    #[must_use]
    pub fn is_disabled(&self, day: CalendarDay) -> bool {
        let key = day.date_key();
        if let Some(min) = self.config.min
            && key < min.date_key()
        {
            return true;
        }
        if let Some(max) = self.config.max
            && key > max.date_key()
        {
            return true;
        }
        if let Some(predicate) = &self.config.disabled
            && predicate(day)
        {
            return true;
        }
        false
    }

    /// Displays the month containing `month`.
    ///
    /// No-op (and no events) when that month is already displayed.
    pub fn set_month(&mut self, month: CalendarDay) -> Vec<PanelEvent<C>> {
        let month = month.start_of_month();
        if month == self.month {
            return Vec::new();
        }
        let direction = if month > self.month {
            NavDirection::Forward
        } else {
            NavDirection::Backward
        };
        self.month = month;
        self.grid = build_grid(month, self.config.week_start);
        self.bump();
        vec![PanelEvent::MonthChanged { month, direction }]
    }

    /// Navigates one month forward.
    pub fn next_month(&mut self) -> Vec<PanelEvent<C>> {
        self.set_month(self.month.add_months(1))
    }

    /// Navigates one month backward.
    pub fn prev_month(&mut self) -> Vec<PanelEvent<C>> {
        self.set_month(self.month.add_months(-1))
    }

    /// Re-injects or programmatically moves the selection.
    ///
    /// Unlike a click commit, setting the value it already has produces no
    /// event.
    pub fn set_selected(&mut self, day: Option<CalendarDay>) -> Vec<PanelEvent<C>> {
        if day == self.selected {
            return Vec::new();
        }
        self.selected = day;
        self.bump();
        vec![PanelEvent::SelectionChanged(day)]
    }

    /// Re-injects an externally owned mark list, normalizing it.
    pub fn set_marks(&mut self, marks: Vec<Mark<C>>) -> Vec<PanelEvent<C>> {
        self.marks.replace(marks);
        self.bump();
        vec![PanelEvent::MarksChanged(self.marks.marks().to_vec())]
    }

    /// Removes all marks at the given days.
    pub fn clear_marks<I>(&mut self, days: I) -> Vec<PanelEvent<C>>
    where
        I: IntoIterator<Item = CalendarDay>,
    {
        if !self.marks.clear(days) {
            return Vec::new();
        }
        self.bump();
        vec![PanelEvent::MarksChanged(self.marks.marks().to_vec())]
    }

    /// Picks a day with a plain click.
    ///
    /// For hosts that don't run the drag gesture (not markable, or
    /// drag-to-mark off). Disabled days are ignored. Commits the selection
    /// and, when markable, applies the configured mark behavior.
    pub fn click(&mut self, day: CalendarDay) -> Vec<PanelEvent<C>> {
        if self.is_disabled(day) {
            return Vec::new();
        }
        let mut events = self.commit_pick(day);
        if self.config.markable {
            events.extend(self.apply_mark_behavior(day));
        }
        events
    }

    /// Starts a drag session at `day` for the captured pointer.
    ///
    /// Returns `false` — and starts nothing — when the panel is not in
    /// drag-to-mark mode, the day is disabled, or a session is already
    /// active.
    pub fn pointer_down(&mut self, pointer: i64, day: CalendarDay) -> bool {
        if !self.config.markable || !self.config.drag_to_mark {
            return false;
        }
        if self.is_disabled(day) {
            return false;
        }
        self.drag.on_down(pointer, day)
    }

    /// Feeds a pointer move with the grid cell it resolved to, if any.
    ///
    /// Returns the live preview span; pass `None` when the pointer left the
    /// grid (the previous cell is retained).
    pub fn pointer_move(
        &mut self,
        pointer: i64,
        day: Option<CalendarDay>,
    ) -> Option<(DateKey, DateKey)> {
        self.drag.on_move(pointer, day)
    }

    /// Finalizes the drag session on release.
    ///
    /// An unmoved session commits its day as the selection and applies the
    /// single-mark behavior; a moved session batch-inserts range marks over
    /// the swept span, skipping disabled and already-range-marked days, and
    /// reports the batch in one [`PanelEvent::Marked`].
    pub fn pointer_up(&mut self, pointer: i64) -> Vec<PanelEvent<C>> {
        match self.drag.on_up(pointer) {
            None => Vec::new(),
            Some(DragOutcome::Click(day)) => {
                let mut events = self.commit_pick(day);
                events.extend(self.apply_mark_behavior(day));
                events
            }
            Some(DragOutcome::Range { start, end }) => self.mark_range(start, end),
        }
    }

    /// Finalizes the drag session on cancellation, identically to release.
    pub fn pointer_cancel(&mut self, pointer: i64) -> Vec<PanelEvent<C>> {
        self.pointer_up(pointer)
    }

    /// Returns the live drag-preview span, if the gesture has moved.
    #[must_use]
    pub fn drag_preview(&self) -> Option<(DateKey, DateKey)> {
        self.drag.preview()
    }

    /// Returns `true` while a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Builds the derived view for every grid cell.
    ///
    /// Always exactly [`GRID_CELLS`] entries, in grid order. Per-cell work is
    /// O(1): mark facts come from a prebuilt key index and annotations from
    /// the resolver cache.
    pub fn cells(&mut self) -> Vec<CellView> {
        let grid = self.grid;
        let lookup = MarkLookup::build(&self.marks);
        let preview = self.drag.preview();
        let in_preview =
            |key: DateKey| preview.is_some_and(|(lo, hi)| key >= lo && key <= hi);

        let mut cells = Vec::with_capacity(GRID_CELLS);
        for (i, &day) in grid.iter().enumerate() {
            let key = day.date_key();
            let inside = in_month(day, self.month);

            if !self.config.show_outside_days && !inside {
                cells.push(CellView::bare(day, CellFlags::HIDDEN));
                continue;
            }

            let mut flags = CellFlags::empty();
            flags.set(CellFlags::IN_MONTH, inside);
            flags.set(CellFlags::DISABLED, self.is_disabled(day));
            flags.set(CellFlags::SELECTED, self.selected == Some(day));
            flags.set(
                CellFlags::TODAY,
                self.config.show_today && self.config.today == Some(day),
            );

            let summary = lookup.get(key);
            let single_color = summary.and_then(|s| s.single_color.clone());
            let range_color = summary.and_then(|s| s.range_color.clone());
            let has_range = summary.is_some_and(|s| s.has_range);
            flags.set(CellFlags::SINGLE_MARK, single_color.is_some());
            flags.set(CellFlags::RANGE_MARK, has_range);
            flags.set(CellFlags::DRAG_PREVIEW, in_preview(key));

            // Highlight continuity within the displayed row; rows never link
            // across their ends.
            let col = column_of(i);
            if col != 0 {
                let prev_key = grid[i - 1].date_key();
                let prev_range = lookup.get(prev_key).is_some_and(|s| s.has_range);
                flags.set(CellFlags::RANGE_LINKS_PREV, has_range && prev_range);
                flags.set(
                    CellFlags::DRAG_LINKS_PREV,
                    in_preview(key) && in_preview(prev_key),
                );
            }
            if col != perennial_grid::DAYS_PER_WEEK - 1 {
                let next_key = grid[i + 1].date_key();
                let next_range = lookup.get(next_key).is_some_and(|s| s.has_range);
                flags.set(CellFlags::RANGE_LINKS_NEXT, has_range && next_range);
                flags.set(
                    CellFlags::DRAG_LINKS_NEXT,
                    in_preview(key) && in_preview(next_key),
                );
            }

            let annotation = self.annotator.resolve(day);
            cells.push(CellView {
                day,
                key,
                flags,
                single_color,
                range_color,
                mark_colors: summary
                    .map(|s| s.all_colors.clone())
                    .unwrap_or_default(),
                sub_label: annotation.sub_label.clone(),
                sub_kind: annotation.sub_kind,
                sub_color: annotation.sub_color.clone(),
            });
        }
        cells
    }

    fn commit_pick(&mut self, day: CalendarDay) -> Vec<PanelEvent<C>> {
        self.selected = Some(day);
        self.bump();
        vec![PanelEvent::SelectionChanged(Some(day))]
    }

    fn apply_mark_behavior(&mut self, day: CalendarDay) -> Vec<PanelEvent<C>> {
        if !self.config.markable {
            return Vec::new();
        }
        let mut events = Vec::new();
        let inserted = match self.config.mark_behavior {
            MarkBehavior::Toggle => self.marks.toggle_single(day, &self.config.mark_color),
            MarkBehavior::Add => {
                self.marks.add_single(day, &self.config.mark_color);
                true
            }
        };
        self.bump();
        events.push(PanelEvent::MarksChanged(self.marks.marks().to_vec()));
        if inserted {
            events.push(PanelEvent::Marked {
                variant: MarkVariant::Single,
                days: vec![day],
            });
        }
        events
    }

    fn mark_range(&mut self, a: CalendarDay, b: CalendarDay) -> Vec<PanelEvent<C>> {
        let (from, to) = if a <= b { (a, b) } else { (b, a) };
        let mut candidates = Vec::new();
        let mut day = from;
        loop {
            if !self.is_disabled(day) {
                candidates.push(day);
            }
            if day == to {
                break;
            }
            day = day.add_days(1);
        }

        let added = self.marks.add_range(candidates, &self.config.mark_color);
        if added.is_empty() {
            return Vec::new();
        }
        self.bump();
        vec![
            PanelEvent::MarksChanged(self.marks.marks().to_vec()),
            PanelEvent::Marked {
                variant: MarkVariant::Range,
                days: added,
            },
        ]
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
