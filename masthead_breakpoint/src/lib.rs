// Copyright 2026 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=masthead_breakpoint --heading-base-level=0

//! Masthead Breakpoint: named viewport-width thresholds.
//!
//! This crate answers one question: which named size thresholds does the
//! current viewport satisfy? It is the breakpoint-observer half of the
//! Masthead navigation stack, but it has no navigation knowledge of its own
//! and can back any responsive component.
//!
//! - [`Breakpoints`] is the set of named thresholds (`SM` … `XXL`).
//! - [`Scale`] maps each name to a minimum viewport width and computes a
//!   [snapshot](Scale::snapshot) for a given viewport size.
//! - [`Watcher`] retains the last snapshot and reports a new one only when
//!   the matched set actually changed, so consumers see edges rather than a
//!   stream of identical sets.
//!
//! Snapshots are value types with no history; recompute on every viewport
//! change and hand changes to whoever is listening. Delivery is synchronous
//! and infallible; there is no callback registry here, the host owns the
//! resize loop and calls [`Watcher::update`] from it.
//!
//! # Example
//!
//! ```rust
//! use masthead_breakpoint::{Breakpoints, Scale, Watcher};
//! use kurbo::Size;
//!
//! let scale = Scale::default();
//! let snap = scale.snapshot(Size::new(1024.0, 768.0));
//! assert!(snap.contains(Breakpoints::MD | Breakpoints::LG));
//! assert!(!snap.contains(Breakpoints::XL));
//!
//! // Edge detection: only genuine set changes are reported.
//! let mut watcher = Watcher::new(scale);
//! assert_eq!(watcher.update(Size::new(1024.0, 768.0)), Some(snap));
//! assert_eq!(watcher.update(Size::new(1030.0, 768.0)), None);
//! assert_eq!(
//!     watcher.update(Size::new(360.0, 640.0)),
//!     Some(Breakpoints::empty()),
//! );
//! ```
//!
//! ## Float semantics
//!
//! Viewport widths are assumed finite (no NaNs). A width exactly at a
//! threshold matches it, mirroring CSS `min-width` media queries.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use bitflags::bitflags;
use kurbo::Size;

bitflags! {
    /// Named viewport-width thresholds currently matched.
    ///
    /// A set of these is a breakpoint snapshot: `MD | LG` means the viewport
    /// is at least as wide as both the `md` and `lg` thresholds of the
    /// [`Scale`] in use. The empty set means the viewport is below every
    /// threshold.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Breakpoints: u8 {
        /// Small; phones in landscape under the default scale.
        const SM  = 0b0000_0001;
        /// Medium; the threshold that gates overlay notifications in the nav.
        const MD  = 0b0000_0010;
        /// Large; the threshold separating compact from full navigation.
        const LG  = 0b0000_0100;
        /// Extra large.
        const XL  = 0b0000_1000;
        /// Double extra large.
        const XXL = 0b0001_0000;
    }
}

/// One threshold of a [`Scale`]: a named mark and its minimum width in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    /// The mark this step contributes to a snapshot. Usually a single flag.
    pub mark: Breakpoints,
    /// Minimum viewport width (inclusive) at which the mark matches.
    pub min_width: f64,
}

/// An ordered name→minimum-width table.
///
/// The default scale uses the token values the navigation components were
/// designed against: sm 576, md 768, lg 992, xl 1200, xxl 1440. Hosts with
/// their own design tokens can supply any table via [`Scale::new`]; steps
/// are independent, so overlapping or unsorted tables are fine.
#[derive(Clone, Debug, PartialEq)]
pub struct Scale {
    steps: Vec<Step>,
}

impl Default for Scale {
    fn default() -> Self {
        Self::new(alloc::vec![
            Step { mark: Breakpoints::SM, min_width: 576.0 },
            Step { mark: Breakpoints::MD, min_width: 768.0 },
            Step { mark: Breakpoints::LG, min_width: 992.0 },
            Step { mark: Breakpoints::XL, min_width: 1200.0 },
            Step { mark: Breakpoints::XXL, min_width: 1440.0 },
        ])
    }
}

impl Scale {
    /// Create a scale from an arbitrary step table.
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// The step table.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Compute the set of thresholds matched by `viewport`.
    ///
    /// Only the width participates; a threshold matches when
    /// `viewport.width >= min_width`.
    pub fn snapshot(&self, viewport: Size) -> Breakpoints {
        let mut out = Breakpoints::empty();
        for step in &self.steps {
            if viewport.width >= step.min_width {
                out |= step.mark;
            }
        }
        out
    }
}

/// Retains the last snapshot and reports only genuine changes.
///
/// A fresh watcher holds the empty set, so the first [`update`](Self::update)
/// for any viewport matching at least one threshold reports a change.
/// [`matches`](Self::matches) always returns the current set, changed or not,
/// which is what a late subscriber should read at attachment time.
#[derive(Clone, Debug)]
pub struct Watcher {
    scale: Scale,
    current: Breakpoints,
}

impl Watcher {
    /// Create a watcher over `scale` with an empty current set.
    pub fn new(scale: Scale) -> Self {
        Self {
            scale,
            current: Breakpoints::empty(),
        }
    }

    /// The set matched by the most recent viewport.
    pub fn matches(&self) -> Breakpoints {
        self.current
    }

    /// The scale in use.
    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    /// Recompute the snapshot for `viewport`.
    ///
    /// Returns `Some(new_set)` when the matched set differs from the previous
    /// one, `None` otherwise. The retained set is updated either way.
    pub fn update(&mut self, viewport: Size) -> Option<Breakpoints> {
        let next = self.scale.snapshot(viewport);
        if next == self.current {
            return None;
        }
        self.current = next;
        Some(next)
    }
}
