// Copyright 2026 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the navigation protocol: ids, slots, roles, events, effects, and state.
//!
//! ## Overview
//!
//! These types describe the navigation core's inputs and outputs.
//! They are referenced by the [`coordinator`](crate::coordinator) and
//! [`dropdown`](crate::dropdown) modules and used by host glue that applies
//! effects to a live document.

use alloc::vec::Vec;
use thiserror::Error;

/// Identifier for a dropdown unit owned by a coordinator.
///
/// This is a small, copyable handle that stays stable across events but
/// becomes invalid when the unit detaches.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On attach, a fresh slot is allocated; reuse of a freed slot increments
///   its generation, producing a new, distinct `UnitId`.
/// - On detach, the slot is freed; any `UnitId` still pointing at it is now
///   stale and is silently ignored by every handler.
///
/// Stale ids never alias a different live unit because the generation must
/// match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct UnitId(pub(crate) u32, pub(crate) u32);

impl UnitId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Named slots a host can populate with children.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Slot {
    /// A dropdown's trigger slot; expects one element with [`Role::Trigger`].
    Link,
    /// A dropdown's menu slot; expects one element with [`Role::Menu`].
    Menu,
    /// Top-level navigation items (secondary variant's container).
    Nav,
    /// Call-to-action items (secondary variant's container).
    Cta,
}

/// Role marker declared by a slotted child.
///
/// Units dispatch on this tag instead of on the child's concrete type, so
/// any host element can participate by declaring the right role.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Role {
    /// An activatable trigger (a link or button).
    Trigger,
    /// A menu panel whose visibility follows the unit's expanded state.
    Menu,
}

/// Slot/child discovery provided by the host.
///
/// The returned sequence preserves document order. Discovery runs at
/// attachment; the core never walks the document afterwards.
pub trait SlotLookup<E> {
    /// Ordered elements assigned to `slot`, each with its declared role.
    fn slotted(&self, slot: Slot) -> Vec<(E, Role)>;
}

/// A unit's request to become the sole expanded unit, or to close.
///
/// Formulated by [`Dropdown::request_toggle`](crate::dropdown::Dropdown::request_toggle)
/// and consumed by
/// [`Nav::handle_expand_request`](crate::coordinator::Nav::handle_expand_request).
/// The unit does not mutate its own state; the coordinator assigns
/// authoritative state in response.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ExpandRequest {
    /// The state the unit is asking for.
    pub expanded: bool,
    /// The requesting unit.
    pub toggle: UnitId,
}

/// The secondary-nav variant's request event. Same semantics as
/// [`ExpandRequest`] under that family's historical `change` name.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SectionChange {
    /// The state the unit is asking for.
    pub expanded: bool,
    /// The requesting unit.
    pub toggle: UnitId,
}

/// What originated an overlay-change notification.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OverlayToggle {
    /// A dropdown unit's expand-request.
    Unit(UnitId),
    /// The mobile menu button.
    MenuButton,
}

/// Where a focus effect should land.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FocusTarget<E> {
    /// The mobile menu button owned by the navigation bar itself.
    MenuButton,
    /// A discovered host element (a unit's trigger link).
    Element(E),
}

/// Where focus went when it left a focused element inside the navigation.
///
/// The host classifies the raw focusout target: a descendant of the
/// navigation subtree is `Within`, an element elsewhere in the document is
/// `Outside`, and a null target (focus moved to a non-focusable area or out
/// of the document) is `Lost`. Only `Outside` triggers a transition.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FocusDestination {
    /// Focus stayed inside the navigation subtree.
    Within,
    /// Focus moved to an element outside the navigation subtree.
    Outside,
    /// Focus moved to no element at all.
    Lost,
}

/// A single side effect for the host to apply, in order.
///
/// Handlers on [`Nav`](crate::coordinator::Nav) return these instead of
/// touching the document themselves; applying them is the host's whole job.
/// The first two reflect unit state onto discovered elements (the trigger's
/// expanded indicator and the menu's visibility), `Focus` moves keyboard
/// focus, `OverlayChange` is the public overlay-change notification, and
/// `ItemExpanded` is the secondary container's expand marker.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Effect<E> {
    /// Reflect expanded state onto a unit's trigger element.
    TriggerExpanded {
        /// The trigger element discovered at attachment.
        trigger: E,
        /// The new expanded state.
        expanded: bool,
    },
    /// Show or hide a unit's menu element.
    MenuVisible {
        /// The menu element discovered at attachment.
        menu: E,
        /// The new visibility.
        visible: bool,
    },
    /// Move keyboard focus.
    Focus(FocusTarget<E>),
    /// The overlay's visibility should change.
    OverlayChange {
        /// Whether the overlay should be shown.
        open: bool,
        /// What originated the change.
        toggle: OverlayToggle,
    },
    /// Flip the expand marker on a secondary container item.
    ItemExpanded {
        /// The slotted nav/CTA item.
        element: E,
        /// The new marker state.
        expanded: bool,
    },
}

/// The coordinator's state, one legal combination per variant.
///
/// The four booleans of the interaction model (`overlayOpen`,
/// `mobileMenuExpanded`, per-unit `expanded`, `compact`) admit combinations
/// that must never occur; this variant makes them unrepresentable. `compact`
/// is not part of the state; it is a pure function of the breakpoint
/// snapshot.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NavState {
    /// Nothing expanded, overlay closed, mobile menu closed.
    Idle,
    /// Exactly one unit expanded with the overlay behind it.
    DropdownOpen(UnitId),
    /// The mobile menu is expanded with no dropdown inside it.
    MobileMenuOpen,
    /// The mobile menu is expanded with one dropdown expanded underneath.
    MobileMenuWithDropdown(UnitId),
}

impl NavState {
    /// Whether the overlay is shown in this state.
    pub fn overlay_open(self) -> bool {
        matches!(self, Self::DropdownOpen(_) | Self::MobileMenuWithDropdown(_))
    }

    /// Whether the mobile menu is expanded in this state.
    pub fn mobile_menu_expanded(self) -> bool {
        matches!(self, Self::MobileMenuOpen | Self::MobileMenuWithDropdown(_))
    }

    /// The expanded unit, if any.
    pub fn expanded_unit(self) -> Option<UnitId> {
        match self {
            Self::DropdownOpen(u) | Self::MobileMenuWithDropdown(u) => Some(u),
            Self::Idle | Self::MobileMenuOpen => None,
        }
    }
}

/// Wiring faults detected when a unit attaches.
///
/// These are markup configuration errors in the surrounding document, not
/// transient faults: the unit logs the fault and stays permanently inert so
/// the page keeps rendering.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum WireError {
    /// The link slot held no element with [`Role::Trigger`].
    #[error("dropdown link slot expects an element with the trigger role")]
    MissingTrigger,
    /// The menu slot held no element with [`Role::Menu`].
    #[error("dropdown menu slot expects an element with the menu role")]
    MissingMenu,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_derivations_match_the_table() {
        let u = UnitId::new(0, 1);
        let rows = [
            (NavState::Idle, false, false, None),
            (NavState::DropdownOpen(u), true, false, Some(u)),
            (NavState::MobileMenuOpen, false, true, None),
            (NavState::MobileMenuWithDropdown(u), true, true, Some(u)),
        ];
        for (state, overlay, mobile, expanded) in rows {
            assert_eq!(state.overlay_open(), overlay, "overlay for {state:?}");
            assert_eq!(state.mobile_menu_expanded(), mobile, "mobile for {state:?}");
            assert_eq!(state.expanded_unit(), expanded, "expanded for {state:?}");
        }
    }

    #[test]
    fn stale_generations_are_distinct_ids() {
        assert_ne!(UnitId::new(3, 1), UnitId::new(3, 2));
        assert_eq!(UnitId::new(3, 2).idx(), 3);
    }

    #[test]
    fn wire_errors_name_the_slot() {
        use alloc::string::ToString;
        assert!(WireError::MissingTrigger.to_string().contains("link slot"));
        assert!(WireError::MissingMenu.to_string().contains("menu slot"));
    }
}
