// Copyright 2026 the Perennial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change notifications returned by mutating panel operations.

use alloc::vec::Vec;

use perennial_date::CalendarDay;
use perennial_marks::{Mark, MarkVariant};

/// Which way a month navigation went, for hosts that animate transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavDirection {
    /// Toward later months.
    Forward,
    /// Toward earlier months.
    Backward,
}

/// One observable state change.
///
/// Mutating panel methods return the events their call produced, in order.
/// Hosts that own a piece of state (see [`crate::Control`]) watch for the
/// matching event and re-inject; others may simply re-render.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelEvent<C = ()> {
    /// The committed selection changed (fires on every commit, including
    /// re-picking the same day).
    SelectionChanged(Option<CalendarDay>),
    /// The mark list changed; carries the full normalized list.
    MarksChanged(Vec<Mark<C>>),
    /// Marks were created by one discrete user action — a single click-mark
    /// or one batched range sweep. Fires at most once per gesture.
    Marked {
        /// Single for click marks, range for sweeps.
        variant: MarkVariant,
        /// The days that actually gained a mark.
        days: Vec<CalendarDay>,
    },
    /// The displayed month changed.
    MonthChanged {
        /// Day 1 of the new panel month.
        month: CalendarDay,
        /// Navigation direction relative to the previous month.
        direction: NavDirection,
    },
}
