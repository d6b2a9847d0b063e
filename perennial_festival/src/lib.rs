// Copyright 2026 the Perennial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Perennial Festival: per-day lunar and festival annotation.
//!
//! A month grid often shows a small sub-label under each day number: the
//! lunar day, a festival name, or a host-defined holiday. This crate
//! computes that annotation:
//!
//! - [`lunar`]: table-driven Chinese lunisolar conversion for 1900–2100 and
//!   traditional day/month labels.
//! - [`festival`]: lunar-keyed and solar-keyed Chinese festival tables,
//!   international observances, and the 清明 day approximation.
//! - [`Annotator`]: the cached resolver that composes the sources with a
//!   fixed precedence — host-supplied holidays win outright, then Chinese
//!   festivals, then international observances, then the plain lunar label.
//!
//! Annotation is deterministic per date and cheap on a cache hit, so hosts
//! can resolve inline while handling pointer moves; there is no debouncing
//! anywhere in this stack.
//!
//! ## Minimal example
//!
//! ```rust
//! use perennial_date::CalendarDay;
//! use perennial_festival::{Annotator, SubKind};
//!
//! let mut annotator = Annotator::new();
//! let new_year = CalendarDay::parse("2024-02-10").unwrap();
//!
//! let annotation = annotator.resolve(new_year);
//! assert_eq!(annotation.sub_label, "春节");
//! assert_eq!(annotation.sub_kind, SubKind::Chinese);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod annotate;
pub mod festival;
pub mod lunar;

pub use annotate::{Annotator, DayAnnotation, Holiday, SubKind};
