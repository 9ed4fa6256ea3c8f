// Copyright 2026 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive transitions from viewport resizes.
//!
//! This example drives resize events through the viewport adapter and shows
//! an open dropdown surviving the shrink into compact layout under the
//! mobile menu.
//!
//! Run:
//! - `cargo run -p masthead_demos --example nav_breakpoints`

use kurbo::Size;
use masthead_breakpoint::Scale;
use masthead_nav::adapters::viewport::ViewportDriver;
use masthead_nav::coordinator::Nav;
use masthead_nav::types::{NavState, Role, Slot, SlotLookup};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct El(u32);

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
    let mut driver = ViewportDriver::new(Scale::default());
    let mut nav: Nav<El> = Nav::new();
    let a = nav.attach(&Item(1, 2));

    // Seed from a desktop viewport, then open A.
    let _ = driver.resize(&mut nav, Size::new(1280.0, 800.0));
    let _ = nav.handle_expand_request(nav.request_toggle(a).unwrap());
    println!("desktop: {:?}", nav.state());
    assert_eq!(nav.state(), NavState::DropdownOpen(a));

    // A resize within the same band is free.
    let _ = driver.resize(&mut nav, Size::new(1250.0, 800.0));

    // Shrinking below lg forces the mobile menu open above the dropdown.
    let _ = driver.resize(&mut nav, Size::new(800.0, 600.0));
    println!("tablet:  {:?}", nav.state());
    assert_eq!(nav.state(), NavState::MobileMenuWithDropdown(a));
    assert!(nav.compact());

    // Growing back drops the mobile menu; the overlay tracks the expansion.
    let _ = driver.resize(&mut nav, Size::new(1440.0, 900.0));
    println!("desktop: {:?}", nav.state());
    assert_eq!(nav.state(), NavState::DropdownOpen(a));
    assert!(nav.overlay_open());
}
