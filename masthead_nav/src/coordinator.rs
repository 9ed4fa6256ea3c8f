// Copyright 2026 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinator implementation.
//!
//! ## Overview
//!
//! Owns the registered dropdown units, arbitrates expand-requests, and keeps
//! mobile-menu/overlay state consistent with the breakpoint snapshot.
//! Every handler is a synchronous, run-to-completion transition returning
//! the effects the host should apply, in order.
//!
//! ## Invariants
//!
//! - At most one unit is expanded after any handler returns.
//! - The overlay is open only while a unit is expanded, or while the mobile
//!   menu holds an expanded dropdown; [`NavState`] makes other combinations
//!   unrepresentable.
//! - Handlers tolerate an empty unit list and silently ignore unknown or
//!   stale unit ids.
//!
//! ## See Also
//!
//! [`dropdown`](crate::dropdown) for the per-unit contract, and
//! [`adapters::viewport`](crate::adapters) for feeding resize events through
//! the breakpoint watcher.

use alloc::vec::Vec;

use masthead_breakpoint::Breakpoints;

use crate::dropdown::Dropdown;
use crate::types::{
    Effect, ExpandRequest, FocusDestination, FocusTarget, NavState, OverlayToggle, SlotLookup,
    UnitId,
};

/// The navigation coordinator.
///
/// ## Usage
///
/// - Construct with [`Nav::new`], or [`Nav::with_matches`] when the current
///   breakpoint snapshot is already known at attachment.
/// - Register each dropdown with [`Nav::attach`] as it enters the document
///   and remove it with [`Nav::detach`] as it leaves; the coordinator owns
///   this registration list and never re-walks the document.
/// - Feed it events as they happen ([`Nav::handle_expand_request`],
///   [`Nav::toggle_mobile_menu`], [`Nav::handle_overlay_click`],
///   [`Nav::handle_focusout`], [`Nav::handle_escape`],
///   [`Nav::breakpoint_changed`]) and apply the returned effects.
/// - Read derived state through [`Nav::state`], [`Nav::overlay_open`],
///   [`Nav::mobile_menu_expanded`], and [`Nav::compact`].
pub struct Nav<E> {
    slots: Vec<Option<Dropdown<E>>>,
    // Last generation per slot (persists across frees).
    generations: Vec<u32>,
    free_list: Vec<usize>,
    // Units in document order; index-addressable via `open`.
    order: Vec<UnitId>,
    state: NavState,
    breakpoints: Breakpoints,
}

impl<E> core::fmt::Debug for Nav<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Nav")
            .field("units", &self.order.len())
            .field("state", &self.state)
            .field("breakpoints", &self.breakpoints)
            .finish_non_exhaustive()
    }
}

impl<E: Copy + Eq> Default for Nav<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Copy + Eq> Nav<E> {
    /// Create a coordinator with no units and an empty breakpoint snapshot.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            order: Vec::new(),
            state: NavState::Idle,
            breakpoints: Breakpoints::empty(),
        }
    }

    /// Create a coordinator seeded with the current breakpoint snapshot.
    pub fn with_matches(matches: Breakpoints) -> Self {
        let mut nav = Self::new();
        nav.breakpoints = matches;
        nav
    }

    /// Register a unit, discovering its trigger and menu from `slots`.
    ///
    /// Units are addressed by the returned id and, for [`Nav::open`], by
    /// their attachment order.
    pub fn attach(&mut self, slots: &impl SlotLookup<E>) -> UnitId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx] + 1;
            self.generations[idx] = generation;
            #[allow(
                clippy::cast_possible_truncation,
                reason = "UnitId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            self.slots.push(None);
            self.generations.push(1);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "UnitId uses 32-bit indices by design."
            )]
            ((self.slots.len() - 1) as u32, 1)
        };
        let id = UnitId::new(idx, generation);
        self.slots[id.idx()] = Some(Dropdown::wire(id, slots));
        self.order.push(id);
        id
    }

    /// Remove a unit. No state survives detachment.
    ///
    /// If the detached unit was the expanded one, the coordinator resettles;
    /// the overlay closes rather than pointing at a dead unit.
    pub fn detach(&mut self, id: UnitId) {
        if !self.is_alive(id) {
            return;
        }
        self.slots[id.idx()] = None;
        self.free_list.push(id.idx());
        self.order.retain(|u| *u != id);
        self.settle(self.state.mobile_menu_expanded());
    }

    /// Whether `id` refers to a currently registered unit.
    pub fn is_alive(&self, id: UnitId) -> bool {
        self.unit(id).is_some()
    }

    /// Number of registered units.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no units are registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Registered unit ids in document order.
    pub fn ids(&self) -> &[UnitId] {
        &self.order
    }

    /// Borrow a registered unit.
    pub fn unit(&self, id: UnitId) -> Option<&Dropdown<E>> {
        let unit = self.slots.get(id.idx())?.as_ref()?;
        if unit.id() != id {
            return None;
        }
        Some(unit)
    }

    /// Formulate the expand-request a user activation of `id` stands for.
    ///
    /// Returns `None` for unknown, stale, or inert units.
    pub fn request_toggle(&self, id: UnitId) -> Option<ExpandRequest> {
        self.unit(id)?.request_toggle()
    }

    /// The current state.
    pub fn state(&self) -> NavState {
        self.state
    }

    /// The latest breakpoint snapshot.
    pub fn matches(&self) -> Breakpoints {
        self.breakpoints
    }

    /// Whether the navigation is in compact (mobile) layout.
    pub fn compact(&self) -> bool {
        !self.breakpoints.contains(Breakpoints::LG)
    }

    /// Whether the overlay is shown.
    pub fn overlay_open(&self) -> bool {
        self.state.overlay_open()
    }

    /// Whether the mobile menu is expanded.
    pub fn mobile_menu_expanded(&self) -> bool {
        self.state.mobile_menu_expanded()
    }

    /// The expanded unit, if any.
    pub fn expanded(&self) -> Option<UnitId> {
        self.state.expanded_unit()
    }

    /// Apply a new breakpoint snapshot.
    ///
    /// Entering compact layout with a dropdown open forces the mobile menu
    /// open above it; leaving compact layout forces the mobile menu closed
    /// and lets the overlay track expansion. Unit state is preserved either
    /// way, so no reflections are produced.
    pub fn breakpoint_changed(&mut self, matches: Breakpoints) -> Vec<Effect<E>> {
        self.breakpoints = matches;
        let mobile = self.compact() && self.expanded_in_order().is_some();
        self.settle(mobile);
        Vec::new()
    }

    /// Arbitrate a unit's expand-request.
    ///
    /// Closes every unit, then, for an expand, assigns `expanded = true`
    /// to the requester, keeping at most one unit expanded. When the
    /// snapshot contains `md`, the overlay-change notification carrying the
    /// requested state is appended. Requests from unknown or stale units
    /// are ignored.
    pub fn handle_expand_request(&mut self, request: ExpandRequest) -> Vec<Effect<E>> {
        if !self.is_alive(request.toggle) {
            return Vec::new();
        }
        let mobile = self.state.mobile_menu_expanded();
        let mut out = Vec::new();
        self.close_all(&mut out);
        if request.expanded
            && let Some(unit) = self.unit_mut(request.toggle)
        {
            out.extend(unit.set_expanded(true));
        }
        if self.breakpoints.contains(Breakpoints::MD) {
            out.push(Effect::OverlayChange {
                open: request.expanded,
                toggle: OverlayToggle::Unit(request.toggle),
            });
        }
        self.settle(mobile);
        out
    }

    /// Flip the mobile menu and notify the overlay of the new value.
    ///
    /// An expanded dropdown stays expanded across the flip.
    pub fn toggle_mobile_menu(&mut self) -> Vec<Effect<E>> {
        let mobile = !self.state.mobile_menu_expanded();
        self.settle(mobile);
        alloc::vec![Effect::OverlayChange {
            open: mobile,
            toggle: OverlayToggle::MenuButton,
        }]
    }

    /// An activation landed on the overlay scrim.
    ///
    /// Closes every unit and the overlay; below `md` the mobile menu closes
    /// too.
    pub fn handle_overlay_click(&mut self) -> Vec<Effect<E>> {
        let mut out = Vec::new();
        self.close_all(&mut out);
        let mobile =
            self.state.mobile_menu_expanded() && self.breakpoints.contains(Breakpoints::MD);
        self.settle(mobile);
        out
    }

    /// Focus moved; `destination` is the host's classification of where.
    ///
    /// Only a genuine departure (an element outside the navigation
    /// subtree) closes anything. Focus staying within, or landing nowhere,
    /// leaves state untouched.
    pub fn handle_focusout(&mut self, destination: FocusDestination) -> Vec<Effect<E>> {
        match destination {
            FocusDestination::Within | FocusDestination::Lost => Vec::new(),
            FocusDestination::Outside => {
                let mobile = self.state.mobile_menu_expanded()
                    && !self.breakpoints.contains(Breakpoints::MD);
                let mut out = Vec::new();
                self.close_all(&mut out);
                self.settle(mobile);
                out
            }
        }
    }

    /// Escape was pressed inside the navigation.
    ///
    /// At `md` and above, the mobile menu closes and focus returns to the
    /// mobile menu button; below, focus returns to the expanded unit's
    /// trigger, if any. Every unit and the overlay close in both cases.
    pub fn handle_escape(&mut self) -> Vec<Effect<E>> {
        let mut out = Vec::new();
        let mut mobile = self.state.mobile_menu_expanded();
        if self.breakpoints.contains(Breakpoints::MD) {
            mobile = false;
            out.push(Effect::Focus(FocusTarget::MenuButton));
        } else if let Some(id) = self.expanded_in_order()
            && let Some(trigger) = self.unit(id).and_then(Dropdown::trigger)
        {
            out.push(Effect::Focus(FocusTarget::Element(trigger)));
        }
        self.close_all(&mut out);
        self.settle(mobile);
        out
    }

    /// Public API: open the unit at `index` (attachment order).
    ///
    /// Closes every unit first, then expands the addressed unit and focuses
    /// its trigger. Out of range is a logged error and a no-op.
    pub fn open(&mut self, index: usize) -> Vec<Effect<E>> {
        let Some(&id) = self.order.get(index) else {
            log::error!(
                "no dropdown at index {index} (navigation has {})",
                self.order.len()
            );
            return Vec::new();
        };
        let mobile = self.state.mobile_menu_expanded();
        let mut out = Vec::new();
        self.close_all(&mut out);
        if let Some(unit) = self.unit_mut(id) {
            out.extend(unit.set_expanded(true));
            if let Some(trigger) = unit.trigger() {
                out.push(Effect::Focus(FocusTarget::Element(trigger)));
            }
        }
        self.settle(mobile);
        out
    }

    /// Public API: close every unit unconditionally. Idempotent.
    pub fn close(&mut self) -> Vec<Effect<E>> {
        let mut out = Vec::new();
        self.close_all(&mut out);
        self.settle(self.state.mobile_menu_expanded());
        out
    }

    // --- internals ---

    fn unit_mut(&mut self, id: UnitId) -> Option<&mut Dropdown<E>> {
        let unit = self.slots.get_mut(id.idx())?.as_mut()?;
        if unit.id() != id {
            return None;
        }
        Some(unit)
    }

    fn close_all(&mut self, out: &mut Vec<Effect<E>>) {
        let order = self.order.clone();
        for id in order {
            if let Some(unit) = self.unit_mut(id) {
                out.extend(unit.set_expanded(false));
            }
        }
    }

    /// The expanded unit re-derived from the units themselves.
    fn expanded_in_order(&self) -> Option<UnitId> {
        self.order
            .iter()
            .copied()
            .find(|id| self.unit(*id).is_some_and(Dropdown::expanded))
    }

    /// Re-derive the state variant from the live units and `mobile`.
    fn settle(&mut self, mobile: bool) {
        self.state = match (mobile, self.expanded_in_order()) {
            (false, None) => NavState::Idle,
            (false, Some(u)) => NavState::DropdownOpen(u),
            (true, None) => NavState::MobileMenuOpen,
            (true, Some(u)) => NavState::MobileMenuWithDropdown(u),
        };
    }
}
