// Copyright 2026 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropdown units: a trigger/menu pair with a single authoritative `expanded` bit.
//!
//! ## Overview
//!
//! A unit discovers its trigger and menu among the host's slotted children at
//! attachment and reflects its `expanded` state onto them through effects.
//! It never assigns its own state in response to activation: user activation
//! produces an [`ExpandRequest`] for a coordinator to arbitrate, which keeps
//! two units from ever believing they are independently expanded.
//!
//! A unit whose required children are missing is a markup configuration
//! error; it logs a warning once and stays permanently inert.

use alloc::vec::Vec;

use crate::types::{Effect, ExpandRequest, Role, Slot, SlotLookup, UnitId, WireError};

/// One expandable top-level navigation item.
///
/// Created by a coordinator's `attach`, destroyed by `detach`; no state
/// survives detachment. The unit holds references to its trigger and menu
/// elements, never ownership: the host keeps the document, the unit keeps
/// handles.
#[derive(Clone, Debug)]
pub struct Dropdown<E> {
    id: UnitId,
    expanded: bool,
    wiring: Wiring<E>,
}

#[derive(Copy, Clone, Debug)]
enum Wiring<E> {
    Wired { trigger: E, menu: E },
    Inert(WireError),
}

impl<E: Copy + Eq> Dropdown<E> {
    /// Discover the trigger and menu among `slots` and build the unit.
    ///
    /// The first link-slot child declaring [`Role::Trigger`] and the first
    /// menu-slot child declaring [`Role::Menu`] are taken. If either is
    /// absent the fault is logged and the unit is inert: it never leaves
    /// `expanded = false` and formulates no requests.
    pub(crate) fn wire(id: UnitId, slots: &impl SlotLookup<E>) -> Self {
        let trigger = slots
            .slotted(Slot::Link)
            .into_iter()
            .find(|(_, role)| *role == Role::Trigger)
            .map(|(element, _)| element);
        let menu = slots
            .slotted(Slot::Menu)
            .into_iter()
            .find(|(_, role)| *role == Role::Menu)
            .map(|(element, _)| element);
        let wiring = match (trigger, menu) {
            (Some(trigger), Some(menu)) => Wiring::Wired { trigger, menu },
            (None, _) => Wiring::Inert(WireError::MissingTrigger),
            (_, None) => Wiring::Inert(WireError::MissingMenu),
        };
        if let Wiring::Inert(fault) = wiring {
            log::warn!("dropdown {id:?} left inert: {fault}");
        }
        Self {
            id,
            expanded: false,
            wiring,
        }
    }

    /// The unit's identity.
    pub fn id(&self) -> UnitId {
        self.id
    }

    /// Current authoritative state.
    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// Whether the unit failed wiring and will never expand.
    pub fn is_inert(&self) -> bool {
        matches!(self.wiring, Wiring::Inert(_))
    }

    /// The wiring fault, if the unit is inert.
    pub fn wire_error(&self) -> Option<WireError> {
        match self.wiring {
            Wiring::Inert(fault) => Some(fault),
            Wiring::Wired { .. } => None,
        }
    }

    /// The discovered trigger element, if wired.
    pub fn trigger(&self) -> Option<E> {
        match self.wiring {
            Wiring::Wired { trigger, .. } => Some(trigger),
            Wiring::Inert(_) => None,
        }
    }

    /// The discovered menu element, if wired.
    pub fn menu(&self) -> Option<E> {
        match self.wiring {
            Wiring::Wired { menu, .. } => Some(menu),
            Wiring::Inert(_) => None,
        }
    }

    /// Formulate the request a user activation stands for.
    ///
    /// Returns `{expanded: !expanded, toggle: id}` without mutating the
    /// unit; the coordinator assigns the authoritative state. Inert units
    /// return `None`.
    pub fn request_toggle(&self) -> Option<ExpandRequest> {
        match self.wiring {
            Wiring::Wired { .. } => Some(ExpandRequest {
                expanded: !self.expanded,
                toggle: self.id,
            }),
            Wiring::Inert(_) => None,
        }
    }

    /// Authoritative setter, coordinator-only.
    ///
    /// No-op when the value is unchanged or the unit is inert, so redundant
    /// assignments produce no effects. On change, returns the paired
    /// reflections for the trigger's expanded indicator and the menu's
    /// visibility.
    pub(crate) fn set_expanded(&mut self, value: bool) -> Vec<Effect<E>> {
        let Wiring::Wired { trigger, menu } = self.wiring else {
            return Vec::new();
        };
        if value == self.expanded {
            return Vec::new();
        }
        self.expanded = value;
        alloc::vec![
            Effect::TriggerExpanded {
                trigger,
                expanded: value,
            },
            Effect::MenuVisible {
                menu,
                visible: value,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    struct El(u32);

    struct Item {
        link: Vec<(El, Role)>,
        menu: Vec<(El, Role)>,
    }

    impl Item {
        fn wired(link: u32, menu: u32) -> Self {
            Self {
                link: vec![(El(link), Role::Trigger)],
                menu: vec![(El(menu), Role::Menu)],
            }
        }
    }

    impl SlotLookup<El> for Item {
        fn slotted(&self, slot: Slot) -> Vec<(El, Role)> {
            match slot {
                Slot::Link => self.link.clone(),
                Slot::Menu => self.menu.clone(),
                Slot::Nav | Slot::Cta => Vec::new(),
            }
        }
    }

    fn unit(item: &Item) -> Dropdown<El> {
        Dropdown::wire(UnitId::new(0, 1), item)
    }

    #[test]
    fn wiring_takes_first_child_with_matching_role() {
        let item = Item {
            // A stray menu-role child in the link slot must not become the trigger.
            link: vec![(El(9), Role::Menu), (El(1), Role::Trigger)],
            menu: vec![(El(2), Role::Menu)],
        };
        let d = unit(&item);
        assert!(!d.is_inert());
        assert_eq!(d.trigger(), Some(El(1)));
        assert_eq!(d.menu(), Some(El(2)));
    }

    #[test]
    fn expand_produces_one_reflection_pair() {
        let item = Item::wired(1, 2);
        let mut d = unit(&item);
        let effects = d.set_expanded(true);
        assert_eq!(
            effects,
            vec![
                Effect::TriggerExpanded {
                    trigger: El(1),
                    expanded: true,
                },
                Effect::MenuVisible {
                    menu: El(2),
                    visible: true,
                },
            ]
        );
        assert!(d.expanded());
    }

    #[test]
    fn redundant_assignment_produces_no_effects() {
        let item = Item::wired(1, 2);
        let mut d = unit(&item);
        assert_eq!(d.set_expanded(true).len(), 2);
        assert!(d.set_expanded(true).is_empty());
        assert_eq!(d.set_expanded(false).len(), 2);
        assert!(d.set_expanded(false).is_empty());
    }

    #[test]
    fn request_toggle_flips_without_mutating() {
        let item = Item::wired(1, 2);
        let mut d = unit(&item);
        let req = d.request_toggle().unwrap();
        assert!(req.expanded);
        assert_eq!(req.toggle, d.id());
        // The unit itself did not move.
        assert!(!d.expanded());

        let _ = d.set_expanded(true);
        assert!(!d.request_toggle().unwrap().expanded);
    }

    #[test]
    fn missing_trigger_leaves_unit_inert() {
        let item = Item {
            link: Vec::new(),
            menu: vec![(El(2), Role::Menu)],
        };
        let mut d = unit(&item);
        assert!(d.is_inert());
        assert_eq!(d.wire_error(), Some(WireError::MissingTrigger));
        assert!(d.request_toggle().is_none());
        // Inert units never transition away from collapsed.
        assert!(d.set_expanded(true).is_empty());
        assert!(!d.expanded());
    }

    #[test]
    fn missing_menu_leaves_unit_inert() {
        let item = Item {
            link: vec![(El(1), Role::Trigger)],
            menu: Vec::new(),
        };
        let d = unit(&item);
        assert_eq!(d.wire_error(), Some(WireError::MissingMenu));
        assert_eq!(d.trigger(), None);
    }
}
