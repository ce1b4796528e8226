//! Common test infrastructure for tailmatch integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fixtures;

pub use fixtures::*;

use std::cell::Cell;
use tailmatch::services::{ColorDistance, PerceptualDistance};

/// Distance engine wrapper that counts how often it is called.
pub struct CountingDistance<D = PerceptualDistance> {
    inner: D,
    calls: Cell<usize>,
}

impl CountingDistance {
    pub fn new() -> Self {
        Self::wrap(PerceptualDistance::new())
    }
}

impl<D: ColorDistance> CountingDistance<D> {
    pub fn wrap(inner: D) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<D: ColorDistance> ColorDistance for CountingDistance<D> {
    fn distance(&self, a: &str, b: &str) -> f64 {
        self.calls.set(self.calls.get() + 1);
        self.inner.distance(a, b)
    }
}
