// Copyright 2026 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinator basics.
//!
//! This minimal example attaches three dropdowns, arbitrates a couple of
//! expand-requests, and prints the effect sequences a host would apply.
//!
//! Run:
//! - `cargo run -p masthead_demos --example nav_basics`

use masthead_breakpoint::Breakpoints;
use masthead_nav::coordinator::Nav;
use masthead_nav::types::{Effect, OverlayToggle, Role, Slot, SlotLookup};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct El(u32);

struct Item {
    link: El,
    menu: El,
}

impl SlotLookup<El> for Item {
    fn slotted(&self, slot: Slot) -> Vec<(El, Role)> {
        match slot {
            Slot::Link => vec![(self.link, Role::Trigger)],
            Slot::Menu => vec![(self.menu, Role::Menu)],
            Slot::Nav | Slot::Cta => Vec::new(),
        }
    }
}

fn main() {
    // Desktop snapshot: md and lg both matched.
    let mut nav: Nav<El> =
        Nav::with_matches(Breakpoints::SM | Breakpoints::MD | Breakpoints::LG);

    let a = nav.attach(&Item { link: El(1), menu: El(2) });
    let b = nav.attach(&Item { link: El(3), menu: El(4) });
    let _c = nav.attach(&Item { link: El(5), menu: El(6) });

    // Click A's trigger.
    let out = nav.handle_expand_request(nav.request_toggle(a).unwrap());
    println!("== Expand A ==");
    for e in &out {
        println!("  {e:?}");
    }
    assert_eq!(nav.expanded(), Some(a));
    assert!(nav.overlay_open());

    // Click B's trigger: A closes before B opens, in one effect sequence.
    let out = nav.handle_expand_request(nav.request_toggle(b).unwrap());
    println!("== Expand B ==");
    for e in &out {
        println!("  {e:?}");
    }
    assert_eq!(nav.expanded(), Some(b));
    assert!(matches!(
        out.last(),
        Some(Effect::OverlayChange {
            open: true,
            toggle: OverlayToggle::Unit(_),
        })
    ));

    // Escape closes everything; at md and above, focus returns to the
    // mobile menu button.
    let out = nav.handle_escape();
    println!("== Escape ==");
    for e in &out {
        println!("  {e:?}");
    }
    assert_eq!(nav.expanded(), None);
    assert!(!nav.overlay_open());
}
