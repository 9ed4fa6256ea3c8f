// Copyright 2026 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with other Masthead crates.
//!
//! Enabled via feature flags to keep the core small and `no_std` by default.

#[cfg(feature = "viewport_adapter")]
pub mod viewport;
