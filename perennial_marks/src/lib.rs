// Copyright 2026 the Perennial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Perennial Marks: the single/range mark store behind a month grid.
//!
//! A [`Mark`] attaches a color (and optionally a host-defined payload) to one
//! calendar day, in one of two variants: a standalone single-day mark or one
//! day of a contiguous range highlight. The store, [`MarkSet`], keeps the
//! list **normalized**: at most one `Single` and independently at most one
//! `Range` mark per date key. Duplicate `(date key, variant)` pairs collapse
//! to the last-inserted mark while the list keeps its first-occurrence order,
//! so normalization is idempotent and iteration order is stable.
//!
//! The store mirrors common calendar gestures rather than generic set
//! algebra: toggle a single mark, unconditionally (re)place one, batch-insert
//! a dragged range, clear a set of days, or adopt an externally supplied list
//! wholesale. Mutations report what actually changed — the range insert
//! returns the newly marked days so callers can emit one batched
//! notification, and a revision counter bumps only on semantic change so
//! observers get a cheap "anything new?" probe.
//!
//! The store does not know how days are laid out or which gesture produced a
//! mutation; callers map user input onto these operations and decide what to
//! do with the reported changes.
//!
//! ## Minimal example
//!
//! ```rust
//! use perennial_date::CalendarDay;
//! use perennial_marks::MarkSet;
//!
//! let mut marks = MarkSet::<()>::new();
//! let day = CalendarDay::parse("2024-03-05").unwrap();
//!
//! // Toggle is its own inverse.
//! assert!(marks.toggle_single(day, "gold"));
//! assert!(marks.has_single(day));
//! assert!(!marks.toggle_single(day, "gold"));
//! assert!(marks.is_empty());
//!
//! // Range insertion reports only the days that were actually added.
//! let days: Vec<_> = (0..3).map(|i| day.add_days(i)).collect();
//! let added = marks.add_range(days.iter().copied(), "teal");
//! assert_eq!(added.len(), 3);
//! let again = marks.add_range(days.iter().copied(), "teal");
//! assert!(again.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use perennial_date::{CalendarDay, DateKey};
use smallvec::SmallVec;

/// The two kinds of mark a day can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkVariant {
    /// A standalone mark on one day.
    Single,
    /// One day of a contiguous range highlight.
    Range,
}

/// A mark attached to one calendar day.
///
/// `C` is a host-chosen payload rendered inside the mark slot (a glyph, a
/// badge description, …); the store never interprets it. Stores that don't
/// need payloads use `Mark<()>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mark<C = ()> {
    /// The day the mark is attached to.
    pub day: CalendarDay,
    /// Single or range.
    pub variant: MarkVariant,
    /// Renderer-interpreted color string.
    pub color: String,
    /// Optional host payload for the mark slot.
    pub content: Option<C>,
}

impl<C> Mark<C> {
    /// Creates a single-day mark.
    #[must_use]
    pub fn single(day: CalendarDay, color: &str) -> Self {
        Self {
            day,
            variant: MarkVariant::Single,
            color: String::from(color),
            content: None,
        }
    }

    /// Creates a range mark for one day of a highlight.
    #[must_use]
    pub fn range(day: CalendarDay, color: &str) -> Self {
        Self {
            day,
            variant: MarkVariant::Range,
            color: String::from(color),
            content: None,
        }
    }

    /// Attaches a payload to the mark.
    #[must_use]
    pub fn with_content(mut self, content: C) -> Self {
        self.content = Some(content);
        self
    }

    fn slot_key(&self) -> (DateKey, MarkVariant) {
        (self.day.date_key(), self.variant)
    }
}

/// Collapses duplicate `(date key, variant)` pairs, keeping the last mark.
///
/// The surviving list is ordered by the first occurrence of each pair, so a
/// later duplicate updates a mark "in place" instead of moving it to the
/// back. The function is idempotent: normalizing a normalized list returns
/// it unchanged.
#[must_use]
pub fn normalize<C>(marks: Vec<Mark<C>>) -> Vec<Mark<C>> {
    let mut slots: Vec<Option<Mark<C>>> = Vec::with_capacity(marks.len());
    let mut seen: HashMap<(DateKey, MarkVariant), usize> = HashMap::with_capacity(marks.len());
    for mark in marks {
        match seen.entry(mark.slot_key()) {
            hashbrown::hash_map::Entry::Occupied(entry) => {
                slots[*entry.get()] = Some(mark);
            }
            hashbrown::hash_map::Entry::Vacant(entry) => {
                entry.insert(slots.len());
                slots.push(Some(mark));
            }
        }
    }
    slots.into_iter().flatten().collect()
}

/// A normalized collection of calendar marks plus a revision counter.
///
/// All mutating operations keep the normalization invariant by construction,
/// so the stored list never needs a full re-normalization pass. The revision
/// is bumped only when the list actually changes; no-op calls (toggling a
/// mark on and off counts as two changes, but clearing days that carry no
/// marks counts as none) leave it untouched.
#[derive(Clone, Debug, Default)]
pub struct MarkSet<C = ()> {
    marks: Vec<Mark<C>>,
    revision: u64,
}

impl<C> MarkSet<C> {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            marks: Vec::new(),
            revision: 0,
        }
    }

    /// Creates a store from an arbitrary mark list, normalizing it.
    #[must_use]
    pub fn from_marks(marks: Vec<Mark<C>>) -> Self {
        Self {
            marks: normalize(marks),
            revision: 0,
        }
    }

    /// Returns the normalized marks in stable order.
    #[must_use]
    pub fn marks(&self) -> &[Mark<C>] {
        &self.marks
    }

    /// Returns the number of stored marks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if no marks are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns the current revision counter.
    ///
    /// Monotonically increasing and local to this store; bumped once per
    /// mutating call that changed the contents.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the single mark at `day`, if any.
    #[must_use]
    pub fn single_at(&self, day: CalendarDay) -> Option<&Mark<C>> {
        self.find(day.date_key(), MarkVariant::Single)
            .map(|idx| &self.marks[idx])
    }

    /// Returns the range mark at `day`, if any.
    #[must_use]
    pub fn range_at(&self, day: CalendarDay) -> Option<&Mark<C>> {
        self.find(day.date_key(), MarkVariant::Range)
            .map(|idx| &self.marks[idx])
    }

    /// Returns `true` if a single mark exists at `day`.
    #[must_use]
    pub fn has_single(&self, day: CalendarDay) -> bool {
        self.find(day.date_key(), MarkVariant::Single).is_some()
    }

    /// Returns `true` if a range mark exists at `day`.
    #[must_use]
    pub fn has_range(&self, day: CalendarDay) -> bool {
        self.find(day.date_key(), MarkVariant::Range).is_some()
    }

    /// Replaces the contents with an externally supplied list, normalizing.
    ///
    /// Used for re-injection by hosts that own the mark list. Always counts
    /// as a change (the store does not require payloads to be comparable, so
    /// it cannot detect an identical re-injection).
    pub fn replace(&mut self, marks: Vec<Mark<C>>) {
        self.marks = normalize(marks);
        self.bump();
    }

    /// Toggles the single mark at `day`.
    ///
    /// Returns `true` if a mark was inserted, `false` if the existing one was
    /// removed.
    pub fn toggle_single(&mut self, day: CalendarDay, color: &str) -> bool {
        if let Some(idx) = self.find(day.date_key(), MarkVariant::Single) {
            self.marks.remove(idx);
            self.bump();
            false
        } else {
            self.marks.push(Mark::single(day, color));
            self.bump();
            true
        }
    }

    /// Unconditionally places a single mark at `day`.
    ///
    /// Under the normalization invariant this is "replace the single mark at
    /// that key": an existing mark is overwritten in place (keeping its list
    /// position), otherwise a new one is appended. Hosts that want repeated
    /// additions to accumulate visually must differentiate the payload
    /// upstream.
    pub fn add_single(&mut self, day: CalendarDay, color: &str) {
        let mark = Mark::single(day, color);
        if let Some(idx) = self.find(day.date_key(), MarkVariant::Single) {
            self.marks[idx] = mark;
        } else {
            self.marks.push(mark);
        }
        self.bump();
    }

    /// Inserts a range mark for each day not already range-marked.
    ///
    /// Returns the days that actually gained a mark, in iteration order, so
    /// callers can emit a single batched notification. Days already carrying
    /// a range mark (including duplicates within `days` itself) are skipped.
    pub fn add_range<I>(&mut self, days: I, color: &str) -> Vec<CalendarDay>
    where
        I: IntoIterator<Item = CalendarDay>,
    {
        let mut added = Vec::new();
        for day in days {
            if self.find(day.date_key(), MarkVariant::Range).is_none() {
                self.marks.push(Mark::range(day, color));
                added.push(day);
            }
        }
        if !added.is_empty() {
            self.bump();
        }
        added
    }

    /// Removes all marks (either variant) at any of the given days.
    ///
    /// Returns `true` if anything was removed.
    pub fn clear<I>(&mut self, days: I) -> bool
    where
        I: IntoIterator<Item = CalendarDay>,
    {
        let keys: HashSet<DateKey> = days.into_iter().map(CalendarDay::date_key).collect();
        if keys.is_empty() {
            return false;
        }
        let before = self.marks.len();
        self.marks.retain(|m| !keys.contains(&m.day.date_key()));
        if self.marks.len() == before {
            return false;
        }
        self.bump();
        true
    }

    fn find(&self, key: DateKey, variant: MarkVariant) -> Option<usize> {
        self.marks
            .iter()
            .position(|m| m.variant == variant && m.day.date_key() == key)
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// Per-day mark facts for one render pass.
#[derive(Clone, Debug, Default)]
pub struct DaySummary {
    /// Color of the single mark at this day, if one exists.
    pub single_color: Option<String>,
    /// `true` if the single mark carries a host payload.
    pub has_content: bool,
    /// `true` if a range mark covers this day.
    pub has_range: bool,
    /// Color of the range mark at this day, if one exists.
    pub range_color: Option<String>,
    /// Every mark color at this day, in list order.
    pub all_colors: SmallVec<[String; 2]>,
}

/// Date-key index over a [`MarkSet`], built once per render pass.
///
/// Grid assembly touches every cell, so per-day lookups have to be O(1);
/// building the index is one pass over the (typically tiny) mark list.
#[derive(Clone, Debug, Default)]
pub struct MarkLookup {
    by_key: HashMap<DateKey, DaySummary>,
}

impl MarkLookup {
    /// Builds the index from the store's current contents.
    #[must_use]
    pub fn build<C>(set: &MarkSet<C>) -> Self {
        let mut by_key: HashMap<DateKey, DaySummary> = HashMap::new();
        for mark in set.marks() {
            let summary = by_key.entry(mark.day.date_key()).or_default();
            summary.all_colors.push(mark.color.clone());
            match mark.variant {
                MarkVariant::Single => {
                    summary.single_color = Some(mark.color.clone());
                    summary.has_content = mark.content.is_some();
                }
                MarkVariant::Range => {
                    summary.has_range = true;
                    summary.range_color = Some(mark.color.clone());
                }
            }
        }
        Self { by_key }
    }

    /// Returns the summary for a date key, if any mark exists there.
    #[must_use]
    pub fn get(&self, key: DateKey) -> Option<&DaySummary> {
        self.by_key.get(&key)
    }
}
