// Copyright 2026 the Perennial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Perennial Event State: pointer-gesture state machines for calendar grids.
//!
//! This crate provides small, focused state machines for grid interactions
//! that require stateful tracking across multiple events:
//!
//! - [`drag`]: Track a press–move–release gesture over grid cells and
//!   classify it as a plain click or a range sweep.
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: it handles one interaction pattern.
//! - **Stateful but simple**: it tracks just enough state to compute the
//!   gesture's outcome.
//! - **Integration-friendly**: it works with any event routing or hit-testing
//!   scheme, and is generic over the host's pointer-id type.
//!
//! The crate does not assume any particular UI framework or event system.
//! Hosts resolve raw pointer positions to grid cells themselves (hit-testing
//! is layout knowledge the core doesn't have) and feed the resolved cells in;
//! the machines answer with transitions and outcomes the host interprets —
//! they know nothing about marks, selections, or disabled days.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use perennial_date::CalendarDay;
//! use perennial_event_state::drag::{DragOutcome, MarkDrag};
//!
//! let mut drag = MarkDrag::<i64>::default();
//! let start = CalendarDay::parse("2024-03-05").unwrap();
//! let end = CalendarDay::parse("2024-03-08").unwrap();
//!
//! // Press on a cell, sweep to another, release.
//! drag.on_down(7, start);
//! drag.on_move(7, Some(end));
//! let outcome = drag.on_up(7);
//! assert_eq!(outcome, Some(DragOutcome::Range { start, end }));
//! ```
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

pub mod drag;
