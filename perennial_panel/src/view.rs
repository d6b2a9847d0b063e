// Copyright 2026 the Perennial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The derived per-cell view snapshot handed to renderers.

use alloc::string::String;

use perennial_date::{CalendarDay, DateKey};
use perennial_festival::SubKind;
use perennial_grid::CellFlags;
use smallvec::SmallVec;

/// One grid cell, fully resolved for rendering.
///
/// A render pass gets exactly 42 of these from
/// [`crate::CalendarPanel::cells`]; everything a renderer needs is inline so
/// it never reaches back into panel state mid-pass. Cells flagged
/// [`CellFlags::HIDDEN`] carry only their day and flags.
#[derive(Clone, Debug)]
pub struct CellView {
    /// The cell's calendar day.
    pub day: CalendarDay,
    /// The day's date key.
    pub key: DateKey,
    /// Derived state flags.
    pub flags: CellFlags,
    /// Color of the single mark at this day, if any.
    pub single_color: Option<String>,
    /// Color of the range mark at this day, if any.
    pub range_color: Option<String>,
    /// Every mark color at this day, in mark-list order.
    pub mark_colors: SmallVec<[String; 2]>,
    /// The sub-label shown under the day number, empty when none.
    pub sub_label: String,
    /// Which category supplied the sub-label.
    pub sub_kind: SubKind,
    /// Accent color for the sub-label.
    pub sub_color: Option<String>,
}

impl CellView {
    pub(crate) fn bare(day: CalendarDay, flags: CellFlags) -> Self {
        Self {
            day,
            key: day.date_key(),
            flags,
            single_color: None,
            range_color: None,
            mark_colors: SmallVec::new(),
            sub_label: String::new(),
            sub_kind: SubKind::None,
            sub_color: None,
        }
    }
}
