// SPDX-FileCopyrightText: 2026 Costscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for costscope tests.
//!
//! Fixtures are plain text (TOML and CSV) rather than constructed values so
//! this crate depends on nothing but the core types. The cost crate can then
//! use it from its own unit tests without ending up with two copies of its
//! own types.

pub mod fixtures;

pub use fixtures::{
    SAMPLE_CATALOG_TOML, SAMPLE_PROFILES_CSV, SampleSources, customer1, idle_profile,
};

/// Relative float comparison, with an absolute floor for values near zero.
pub fn approx_eq(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1e-3);
    (a - b).abs() <= 1e-9 * scale
}

/// Assert two cost figures agree up to floating-point rounding.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        approx_eq(actual, expected),
        "expected {expected}, got {actual}"
    );
}
