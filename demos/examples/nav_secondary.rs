// Copyright 2026 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The secondary-nav variant.
//!
//! Same dropdown arbitration under the `change` event name, plus the
//! container menu button flipping every nav/CTA item at once.
//!
//! Run:
//! - `cargo run -p masthead_demos --example nav_secondary`

use masthead_nav::secondary::SecondaryNav;
use masthead_nav::types::{Role, Slot, SlotLookup};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct El(u32);

struct Container;

impl SlotLookup<El> for Container {
    fn slotted(&self, slot: Slot) -> Vec<(El, Role)> {
        match slot {
            Slot::Nav => vec![(El(10), Role::Trigger), (El(11), Role::Trigger)],
            Slot::Cta => vec![(El(12), Role::Trigger)],
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

fn main() {
    let mut nav = SecondaryNav::new(&Container);
    let a = nav.attach(&Item(1, 2));
    let b = nav.attach(&Item(3, 4));

    let out = nav.handle_change(nav.request_change(a).unwrap());
    println!("== Change A ==");
    for e in &out {
        println!("  {e:?}");
    }

    // B takes over; A closes in the same sequence.
    let out = nav.handle_change(nav.request_change(b).unwrap());
    println!("== Change B ==");
    for e in &out {
        println!("  {e:?}");
    }
    assert_eq!(nav.expanded(), Some(b));

    let out = nav.toggle_menu();
    println!("== Menu toggle ==");
    for e in &out {
        println!("  {e:?}");
    }
    assert!(nav.menu_expanded());
}
