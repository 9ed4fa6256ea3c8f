// Copyright 2026 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The secondary-nav variant: same dropdown arbitration, leaner chrome.
//!
//! This family predates the full navigation bar. Its dropdowns speak the
//! same protocol under the historical `change` event name
//! ([`SectionChange`]), and instead of a breakpoint-aware overlay machine
//! its container has a single menu button that flips an expand marker on
//! every slotted nav/CTA item at once.

use alloc::vec::Vec;

use crate::dropdown::Dropdown;
use crate::types::{Effect, SectionChange, Slot, SlotLookup, UnitId};

/// Coordinator for the secondary navigation family.
///
/// Units attach in document order and are arbitrated exactly like the main
/// bar's: at most one expanded, authoritative state assigned here. There is
/// no overlay and no breakpoint coupling; the container menu toggle is the
/// only extra moving part.
pub struct SecondaryNav<E> {
    units: Vec<Dropdown<E>>,
    /// Nav/CTA items controlled by the container menu button.
    items: Vec<E>,
    menu_expanded: bool,
}

impl<E> core::fmt::Debug for SecondaryNav<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SecondaryNav")
            .field("units", &self.units.len())
            .field("items", &self.items.len())
            .field("menu_expanded", &self.menu_expanded)
            .finish_non_exhaustive()
    }
}

impl<E: Copy + Eq> SecondaryNav<E> {
    /// Build the container, collecting the nav/CTA items its menu button
    /// controls.
    pub fn new(container: &impl SlotLookup<E>) -> Self {
        let mut items: Vec<E> = container
            .slotted(Slot::Nav)
            .into_iter()
            .map(|(element, _)| element)
            .collect();
        items.extend(
            container
                .slotted(Slot::Cta)
                .into_iter()
                .map(|(element, _)| element),
        );
        Self {
            units: Vec::new(),
            items,
            menu_expanded: false,
        }
    }

    /// Register a dropdown, discovering its trigger and menu from `slots`.
    pub fn attach(&mut self, slots: &impl SlotLookup<E>) -> UnitId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "UnitId uses 32-bit indices by design."
        )]
        let id = UnitId::new(self.units.len() as u32, 1);
        self.units.push(Dropdown::wire(id, slots));
        id
    }

    /// Number of registered units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether no units are registered.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Whether the container menu is expanded.
    pub fn menu_expanded(&self) -> bool {
        self.menu_expanded
    }

    /// The expanded unit, if any.
    pub fn expanded(&self) -> Option<UnitId> {
        self.units
            .iter()
            .find(|unit| unit.expanded())
            .map(Dropdown::id)
    }

    /// Formulate the change event a user activation of `id` stands for.
    pub fn request_change(&self, id: UnitId) -> Option<SectionChange> {
        let request = self.unit(id)?.request_toggle()?;
        Some(SectionChange {
            expanded: request.expanded,
            toggle: request.toggle,
        })
    }

    /// Arbitrate a dropdown's change event: close all, then open the
    /// requester if it asked to expand. Unknown sources are ignored.
    pub fn handle_change(&mut self, change: SectionChange) -> Vec<Effect<E>> {
        if self.unit(change.toggle).is_none() {
            return Vec::new();
        }
        let mut out = Vec::new();
        for unit in &mut self.units {
            out.extend(unit.set_expanded(false));
        }
        if change.expanded
            && let Some(unit) = self.unit_mut(change.toggle)
        {
            out.extend(unit.set_expanded(true));
        }
        out
    }

    /// Flip the container menu, flipping the expand marker on every
    /// registered nav/CTA item.
    pub fn toggle_menu(&mut self) -> Vec<Effect<E>> {
        self.menu_expanded = !self.menu_expanded;
        let expanded = self.menu_expanded;
        self.items
            .iter()
            .map(|&element| Effect::ItemExpanded { element, expanded })
            .collect()
    }

    fn unit(&self, id: UnitId) -> Option<&Dropdown<E>> {
        self.units.get(id.idx()).filter(|unit| unit.id() == id)
    }

    fn unit_mut(&mut self, id: UnitId) -> Option<&mut Dropdown<E>> {
        self.units.get_mut(id.idx()).filter(|unit| unit.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;
    use alloc::vec;

    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    struct El(u32);

    struct Container;

    impl SlotLookup<El> for Container {
        fn slotted(&self, slot: Slot) -> Vec<(El, Role)> {
            match slot {
                Slot::Nav => vec![(El(100), Role::Trigger), (El(101), Role::Trigger)],
                Slot::Cta => vec![(El(102), Role::Trigger)],
                Slot::Link | Slot::Menu => Vec::new(),
            }
        }
    }

    struct Item(u32, u32);

    impl SlotLookup<El> for Item {
        fn slotted(&self, slot: Slot) -> Vec<(El, Role)> {
            match slot {
                Slot::Link => vec![(El(self.0), Role::Trigger)],
                Slot::Menu => vec![(El(self.1), Role::Menu)],
                Slot::Nav | Slot::Cta => Vec::new(),
            }
        }
    }

    #[test]
    fn change_moves_the_single_expansion() {
        let mut nav = SecondaryNav::new(&Container);
        let a = nav.attach(&Item(1, 2));
        let b = nav.attach(&Item(3, 4));

        let _ = nav.handle_change(nav.request_change(a).unwrap());
        assert_eq!(nav.expanded(), Some(a));

        let effects = nav.handle_change(nav.request_change(b).unwrap());
        assert_eq!(nav.expanded(), Some(b));
        assert!(effects.contains(&Effect::MenuVisible {
            menu: El(2),
            visible: false,
        }));
        assert!(effects.contains(&Effect::MenuVisible {
            menu: El(4),
            visible: true,
        }));
    }

    #[test]
    fn collapse_change_leaves_nothing_expanded() {
        let mut nav = SecondaryNav::new(&Container);
        let a = nav.attach(&Item(1, 2));
        let _ = nav.handle_change(nav.request_change(a).unwrap());
        let _ = nav.handle_change(nav.request_change(a).unwrap());
        assert_eq!(nav.expanded(), None);
    }

    #[test]
    fn unknown_source_is_ignored() {
        let mut nav = SecondaryNav::new(&Container);
        let _ = nav.attach(&Item(1, 2));
        let effects = nav.handle_change(SectionChange {
            expanded: true,
            toggle: UnitId::new(7, 1),
        });
        assert!(effects.is_empty());
        assert_eq!(nav.expanded(), None);
    }

    #[test]
    fn menu_toggle_flips_every_item() {
        let mut nav: SecondaryNav<El> = SecondaryNav::new(&Container);
        let effects = nav.toggle_menu();
        assert!(nav.menu_expanded());
        assert_eq!(
            effects,
            vec![
                Effect::ItemExpanded {
                    element: El(100),
                    expanded: true,
                },
                Effect::ItemExpanded {
                    element: El(101),
                    expanded: true,
                },
                Effect::ItemExpanded {
                    element: El(102),
                    expanded: true,
                },
            ]
        );

        let effects = nav.toggle_menu();
        assert!(!nav.menu_expanded());
        assert!(
            effects
                .iter()
                .all(|e| matches!(e, Effect::ItemExpanded { expanded: false, .. }))
        );
    }
}
