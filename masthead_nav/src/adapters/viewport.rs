// Copyright 2026 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter helpers for Masthead Breakpoint.
//!
//! ## Feature
//!
//! Enable with `viewport_adapter`.
//!
//! ## Notes
//!
//! These helpers feed raw viewport sizes through a
//! [`Watcher`](masthead_breakpoint::Watcher) so the coordinator only hears
//! about genuine snapshot changes. Hosts with their own media-query
//! facility can skip this and call
//! [`Nav::breakpoint_changed`](crate::coordinator::Nav::breakpoint_changed)
//! directly.

use alloc::vec::Vec;

use kurbo::Size;
use masthead_breakpoint::{Breakpoints, Scale, Watcher};

use crate::coordinator::Nav;
use crate::types::Effect;

/// Drives a coordinator from viewport resize events.
#[derive(Clone, Debug)]
pub struct ViewportDriver {
    watcher: Watcher,
}

impl ViewportDriver {
    /// Create a driver over `scale` with an empty current snapshot.
    pub fn new(scale: Scale) -> Self {
        Self {
            watcher: Watcher::new(scale),
        }
    }

    /// The set matched by the most recent viewport.
    pub fn matches(&self) -> Breakpoints {
        self.watcher.matches()
    }

    /// Push the driver's current snapshot into `nav` unconditionally.
    ///
    /// Call once at attachment so the coordinator starts from the real
    /// viewport rather than the empty set.
    pub fn sync<E: Copy + Eq>(&self, nav: &mut Nav<E>) -> Vec<Effect<E>> {
        nav.breakpoint_changed(self.watcher.matches())
    }

    /// Handle a viewport resize.
    ///
    /// Forwards to [`Nav::breakpoint_changed`] only when the matched set
    /// changed; a resize within the same breakpoint band is free.
    pub fn resize<E: Copy + Eq>(&mut self, nav: &mut Nav<E>, viewport: Size) -> Vec<Effect<E>> {
        match self.watcher.update(viewport) {
            Some(snapshot) => nav.breakpoint_changed(snapshot),
            None => Vec::new(),
        }
    }
}
