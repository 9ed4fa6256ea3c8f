// Copyright 2026 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=masthead_nav --heading-base-level=0

//! Masthead Nav: a deterministic, `no_std` interaction core for site navigation.
//!
//! ## Overview
//!
//! This crate coordinates a navigation bar's dropdowns, mobile menu button,
//! and overlay across responsive breakpoints. It does not render, lay out,
//! or touch a document. Instead, feed it events (activations, focus moves,
//! key presses, breakpoint changes) and it returns a deterministic sequence
//! of [`Effect`](crate::types::Effect)s you apply to your document, plus
//! derived state you can read back at any time.
//!
//! ## Pieces
//!
//! - [`Dropdown`](crate::dropdown::Dropdown): one expandable nav item. It
//!   discovers a trigger and a menu among the host's slotted children (by
//!   [`Role`](crate::types::Role) marker, not concrete type), formulates
//!   expand-requests on activation, and reflects authoritative state back
//!   onto both children.
//! - [`Nav`](crate::coordinator::Nav): the coordinator. It owns the
//!   registered units and a single [`NavState`](crate::types::NavState)
//!   variant, so "two dropdowns expanded" or "overlay open over nothing"
//!   cannot be expressed, let alone reached.
//! - [`SecondaryNav`](crate::secondary::SecondaryNav): the leaner secondary
//!   family, sharing the unit protocol under its historical `change` event
//!   name.
//! - [`adapters::viewport`](crate::adapters): feature-gated glue from raw
//!   viewport sizes to breakpoint change events.
//!
//! ## Arbitration
//!
//! A unit never assigns its own `expanded`: activation produces an
//! [`ExpandRequest`](crate::types::ExpandRequest), the coordinator closes
//! everything, grants the request, and hands back the reflections. Handlers
//! run to completion on the host's single event thread, so the at-most-one
//! invariant can never be observed violated between the close and the grant.
//!
//! ## Example
//!
//! ```
//! use masthead_breakpoint::Breakpoints;
//! use masthead_nav::coordinator::Nav;
//! use masthead_nav::types::{Effect, Role, Slot, SlotLookup};
//!
//! // The host's element handle; anything Copy + Eq works.
//! #[derive(Copy, Clone, Debug, Eq, PartialEq)]
//! struct El(u32);
//!
//! struct Item {
//!     link: El,
//!     menu: El,
//! }
//!
//! impl SlotLookup<El> for Item {
//!     fn slotted(&self, slot: Slot) -> Vec<(El, Role)> {
//!         match slot {
//!             Slot::Link => vec![(self.link, Role::Trigger)],
//!             Slot::Menu => vec![(self.menu, Role::Menu)],
//!             _ => Vec::new(),
//!         }
//!     }
//! }
//!
//! let mut nav: Nav<El> = Nav::with_matches(
//!     Breakpoints::SM | Breakpoints::MD | Breakpoints::LG,
//! );
//! let a = nav.attach(&Item { link: El(1), menu: El(2) });
//! let _b = nav.attach(&Item { link: El(3), menu: El(4) });
//!
//! // A user activates A's trigger: the unit formulates a request and the
//! // coordinator arbitrates it.
//! let request = nav.request_toggle(a).unwrap();
//! let effects = nav.handle_expand_request(request);
//!
//! assert_eq!(nav.expanded(), Some(a));
//! assert!(nav.overlay_open());
//! assert_eq!(effects.len(), 3); // trigger + menu reflections, overlay notice
//! assert!(matches!(effects[2], Effect::OverlayChange { open: true, .. }));
//! ```
//!
//! ## Host glue sketch
//!
//! The host owns the document and the event loop. Its whole job is to
//! classify raw events, call the matching handler, and apply the returned
//! effects in order:
//!
//! ```no_run
//! use masthead_nav::coordinator::Nav;
//! use masthead_nav::types::{Effect, FocusTarget};
//!
//! # #[derive(Copy, Clone, Eq, PartialEq)] struct El(u32);
//! /// Apply one effect to the live document.
//! fn apply(effect: &Effect<El>) {
//!     match effect {
//!         // set the trigger's expanded indicator (e.g. aria-expanded)
//!         Effect::TriggerExpanded { .. } => {}
//!         // show or hide the menu panel
//!         Effect::MenuVisible { .. } => {}
//!         Effect::Focus(FocusTarget::MenuButton) => { /* focus the button */ }
//!         Effect::Focus(FocusTarget::Element(_e)) => { /* focus `_e` */ }
//!         Effect::OverlayChange { .. } => { /* show or hide the scrim */ }
//!         Effect::ItemExpanded { .. } => { /* secondary container marker */ }
//!     }
//! }
//!
//! fn on_escape(nav: &mut Nav<El>) {
//!     for effect in nav.handle_escape() {
//!         apply(&effect);
//!     }
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod coordinator;
pub mod dropdown;
pub mod secondary;
pub mod types;
