// Copyright 2026 the Perennial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-mark state machine: classify a press–move–release gesture over
//! grid cells as a plain click or a range sweep.
//!
//! ## Usage
//!
//! 1) Start a session with [`MarkDrag::on_down`] when the pointer presses an
//!    enabled cell (the caller gates disabled cells).
//! 2) On each move event, resolve the pointer to a grid cell and call
//!    [`MarkDrag::on_move`]. Pass `None` when the pointer leaves the grid;
//!    the last resolved cell is retained so a live preview never flickers.
//! 3) Finish with [`MarkDrag::on_up`] or [`MarkDrag::on_cancel`] — both run
//!    the same finalize step and return the gesture's [`DragOutcome`].
//!
//! Only one session is tracked at a time, keyed by the pointer id captured
//! at press; events from other pointers are ignored while it is active. The
//! session is destroyed unconditionally at finalize — a dangling session
//! after `pointercancel` would wedge the interaction.
//!
//! ## Minimal example
//!
//! ```rust
//! use perennial_date::CalendarDay;
//! use perennial_event_state::drag::{DragOutcome, MarkDrag};
//!
//! let mut drag = MarkDrag::<i64>::default();
//! let day = CalendarDay::parse("2024-03-05").unwrap();
//!
//! // A session that never leaves its starting cell is a click.
//! drag.on_down(1, day);
//! assert_eq!(drag.on_up(1), Some(DragOutcome::Click(day)));
//! assert!(!drag.is_active());
//! ```

use perennial_date::{CalendarDay, DateKey};

/// Where a drag session currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    /// No session is active.
    Idle,
    /// The pointer is down but has not yet left the starting cell.
    Pressed,
    /// The pointer has visited a cell other than the starting one.
    Dragging,
}

/// What a finished gesture amounted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// The session never moved off its starting cell (or returned to it):
    /// treat as a plain pick of that day.
    Click(CalendarDay),
    /// The session swept from `start` to `end`, in gesture order — `end` may
    /// precede `start` chronologically. Callers iterate the inclusive range
    /// between them and apply their own exclusion policy.
    Range {
        /// The cell the press started on.
        start: CalendarDay,
        /// The last cell the pointer resolved to.
        end: CalendarDay,
    },
}

#[derive(Clone, Copy, Debug)]
struct Session<P> {
    pointer: P,
    start: CalendarDay,
    current: CalendarDay,
    moved: bool,
}

/// Tracks one drag-to-mark gesture over grid cells.
///
/// Generic over the host's pointer-id type `P` (a browser `pointerId`, a
/// winit `DeviceId`, a touch index, …).
#[derive(Clone, Copy, Debug)]
pub struct MarkDrag<P = i64> {
    session: Option<Session<P>>,
}

impl<P> Default for MarkDrag<P> {
    fn default() -> Self {
        Self { session: None }
    }
}

impl<P> MarkDrag<P>
where
    P: Copy + PartialEq,
{
    /// Begins a session at `day`, capturing `pointer`.
    ///
    /// Returns `false` without starting anything if a session is already
    /// active (a second pointer pressing mid-gesture does not steal it).
    pub fn on_down(&mut self, pointer: P, day: CalendarDay) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(Session {
            pointer,
            start: day,
            current: day,
            moved: false,
        });
        true
    }

    /// Feeds a pointer move, with the grid cell it resolved to (if any).
    ///
    /// Moves from other pointers are ignored. A `None` resolution (the
    /// pointer left the grid) retains the last known cell. Returns the live
    /// preview span after the move, like [`MarkDrag::preview`].
    pub fn on_move(&mut self, pointer: P, day: Option<CalendarDay>) -> Option<(DateKey, DateKey)> {
        if let Some(session) = &mut self.session
            && session.pointer == pointer
            && let Some(day) = day
        {
            session.current = day;
            if day.date_key() != session.start.date_key() {
                session.moved = true;
            }
        }
        self.preview()
    }

    /// Finalizes the session on pointer release.
    ///
    /// Releases from other pointers are ignored (the session stays active).
    /// A session that never left its starting cell — or returned to it —
    /// yields [`DragOutcome::Click`]; otherwise [`DragOutcome::Range`] with
    /// the raw gesture endpoints. The session is destroyed either way.
    pub fn on_up(&mut self, pointer: P) -> Option<DragOutcome> {
        let session = self.session.as_ref()?;
        if session.pointer != pointer {
            return None;
        }
        let session = self.session.take()?;
        if !session.moved || session.start.date_key() == session.current.date_key() {
            Some(DragOutcome::Click(session.start))
        } else {
            Some(DragOutcome::Range {
                start: session.start,
                end: session.current,
            })
        }
    }

    /// Finalizes the session on gesture interruption.
    ///
    /// Cancellation runs the exact same finalize step as a release; leaving
    /// the session dangling would be a correctness bug.
    pub fn on_cancel(&mut self, pointer: P) -> Option<DragOutcome> {
        self.on_up(pointer)
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        match &self.session {
            None => DragPhase::Idle,
            Some(session) if session.moved => DragPhase::Dragging,
            Some(_) => DragPhase::Pressed,
        }
    }

    /// Returns `true` while a session is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Returns the pointer id captured by the active session.
    #[must_use]
    pub fn active_pointer(&self) -> Option<P> {
        self.session.as_ref().map(|s| s.pointer)
    }

    /// Returns the live preview span as an ordered `(min, max)` key pair.
    ///
    /// `None` while idle and while the pointer sits on its starting cell —
    /// including a sweep that came back to it — so hosts can highlight
    /// exactly the days a release would affect.
    #[must_use]
    pub fn preview(&self) -> Option<(DateKey, DateKey)> {
        let session = self.session.as_ref()?;
        let start = session.start.date_key();
        let current = session.current.date_key();
        if start == current {
            return None;
        }
        Some((start.min(current), start.max(current)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> CalendarDay {
        CalendarDay::parse(s).unwrap()
    }

    #[test]
    fn fresh_machine_is_idle() {
        let drag = MarkDrag::<i64>::default();
        assert_eq!(drag.phase(), DragPhase::Idle);
        assert!(!drag.is_active());
        assert_eq!(drag.active_pointer(), None);
        assert_eq!(drag.preview(), None);
    }

    #[test]
    fn down_starts_a_pressed_session() {
        let mut drag = MarkDrag::default();
        assert!(drag.on_down(1_i64, day("2024-03-05")));
        assert_eq!(drag.phase(), DragPhase::Pressed);
        assert_eq!(drag.active_pointer(), Some(1));
        assert_eq!(drag.preview(), None);
    }

    #[test]
    fn second_down_does_not_steal_the_session() {
        let mut drag = MarkDrag::default();
        drag.on_down(1_i64, day("2024-03-05"));
        assert!(!drag.on_down(2, day("2024-03-09")));
        assert_eq!(drag.active_pointer(), Some(1));
    }

    #[test]
    fn move_to_another_cell_enters_dragging_with_ordered_preview() {
        let mut drag = MarkDrag::default();
        drag.on_down(1_i64, day("2024-03-10"));

        // Sweeping backward still yields a (min, max) ordered preview.
        let preview = drag.on_move(1, Some(day("2024-03-05")));
        assert_eq!(drag.phase(), DragPhase::Dragging);
        assert_eq!(preview, Some((20240305, 20240310)));
    }

    #[test]
    fn foreign_pointer_moves_are_ignored() {
        let mut drag = MarkDrag::default();
        drag.on_down(1_i64, day("2024-03-05"));
        drag.on_move(2, Some(day("2024-03-09")));
        assert_eq!(drag.phase(), DragPhase::Pressed);
        assert_eq!(drag.preview(), None);
    }

    #[test]
    fn unresolved_move_retains_the_last_cell() {
        let mut drag = MarkDrag::default();
        drag.on_down(1_i64, day("2024-03-05"));
        drag.on_move(1, Some(day("2024-03-08")));

        // Pointer leaves the grid: the preview must not flicker away.
        let preview = drag.on_move(1, None);
        assert_eq!(preview, Some((20240305, 20240308)));

        assert_eq!(
            drag.on_up(1),
            Some(DragOutcome::Range {
                start: day("2024-03-05"),
                end: day("2024-03-08"),
            })
        );
    }

    #[test]
    fn unmoved_session_finalizes_as_click() {
        let mut drag = MarkDrag::default();
        drag.on_down(1_i64, day("2024-03-05"));
        assert_eq!(drag.on_up(1), Some(DragOutcome::Click(day("2024-03-05"))));
        assert_eq!(drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn sweep_that_returns_to_start_is_a_click() {
        let mut drag = MarkDrag::default();
        drag.on_down(1_i64, day("2024-03-05"));
        drag.on_move(1, Some(day("2024-03-08")));
        drag.on_move(1, Some(day("2024-03-05")));

        assert_eq!(drag.preview(), None);
        assert_eq!(drag.on_up(1), Some(DragOutcome::Click(day("2024-03-05"))));
    }

    #[test]
    fn foreign_pointer_release_keeps_the_session_alive() {
        let mut drag = MarkDrag::default();
        drag.on_down(1_i64, day("2024-03-05"));
        assert_eq!(drag.on_up(2), None);
        assert!(drag.is_active());
    }

    #[test]
    fn cancel_finalizes_exactly_like_release() {
        let start = day("2024-03-05");
        let end = day("2024-03-07");

        let mut released = MarkDrag::default();
        released.on_down(1_i64, start);
        released.on_move(1, Some(end));

        let mut cancelled = released;
        assert_eq!(released.on_up(1), cancelled.on_cancel(1));
        assert!(!cancelled.is_active());
    }

    #[test]
    fn finalize_on_idle_machine_is_none() {
        let mut drag = MarkDrag::<i64>::default();
        assert_eq!(drag.on_up(1), None);
        assert_eq!(drag.on_cancel(1), None);
    }

    #[test]
    fn events_after_finalize_are_ignored() {
        let mut drag = MarkDrag::default();
        drag.on_down(1_i64, day("2024-03-05"));
        drag.on_up(1);

        assert_eq!(drag.on_move(1, Some(day("2024-03-09"))), None);
        assert_eq!(drag.on_up(1), None);
        assert_eq!(drag.phase(), DragPhase::Idle);
    }
}
