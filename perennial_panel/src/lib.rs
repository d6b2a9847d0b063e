// Copyright 2026 the Perennial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Perennial Panel: the month-panel controller.
//!
//! This crate composes the Perennial building blocks — date values, the
//! 42-cell grid, the mark store, the drag state machine, and the annotation
//! resolver — into [`CalendarPanel`], the single stateful object behind a
//! month-grid UI.
//!
//! The panel is renderer-agnostic. A host rendering layer:
//!
//! 1. Constructs the panel from a [`PanelConfig`] and [`PanelInit`] (state
//!    ownership is declared per value with [`Control`] and resolved once; the
//!    panel keeps one internal source of truth either way).
//! 2. Feeds user input: [`CalendarPanel::click`] for plain picking, or the
//!    `pointer_down` / `pointer_move` / `pointer_up` / `pointer_cancel`
//!    sequence for drag-to-mark, with pointer positions already resolved to
//!    grid cells by the host's hit testing.
//! 3. Collects the returned [`PanelEvent`]s — selection commits, normalized
//!    mark lists, one batched mark notification per gesture, month changes —
//!    and re-injects externally owned values through the setters.
//! 4. Renders [`CalendarPanel::cells`]: 42 [`CellView`]s carrying flags,
//!    mark colors, and festival/lunar sub-labels.
//!
//! Everything runs synchronously on the caller's thread; nothing blocks, and
//! the only gesture state is the drag session between a press and its
//! release.
//!
//! ## Minimal example
//!
//! ```rust
//! use perennial_date::CalendarDay;
//! use perennial_panel::{CalendarPanel, PanelConfig, PanelEvent, PanelInit};
//!
//! let config = PanelConfig {
//!     markable: true,
//!     ..PanelConfig::default()
//! };
//! let mut panel = CalendarPanel::<()>::new(config, PanelInit::default());
//!
//! let start = CalendarDay::parse("2024-03-05").unwrap();
//! let end = CalendarDay::parse("2024-03-08").unwrap();
//!
//! // One drag, one batched mark event covering the swept days.
//! panel.pointer_down(1, start);
//! panel.pointer_move(1, Some(end));
//! let events = panel.pointer_up(1);
//! assert!(matches!(
//!     &events[..],
//!     [PanelEvent::MarksChanged(_), PanelEvent::Marked { days, .. }] if days.len() == 4
//! ));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod events;
mod panel;
mod view;

pub use config::{Control, DisabledPredicate, MarkBehavior, PanelConfig, PanelInit};
pub use events::{NavDirection, PanelEvent};
pub use panel::CalendarPanel;
pub use view::CellView;
