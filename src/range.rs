/// Inclusive integer intervals and uniform sampling within them.
use std::fmt;

use rand::RngExt;

/// An inclusive `low..=high` interval. Hue intervals may start below zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Range {
    pub low: i32,
    pub high: i32,
}

impl Range {
    pub const fn new(low: i32, high: i32) -> Self {
        Self { low, high }
    }

    /// A single-value interval.
    pub const fn exact(value: i32) -> Self {
        Self::new(value, value)
    }

    pub const fn contains(&self, value: i32) -> bool {
        value >= self.low && value <= self.high
    }

    /// Draw a value uniformly from `low..=high`.
    ///
    /// Callers must keep the bounds ordered; an inverted interval is a bug in
    /// the resolver, not bad input.
    pub fn sample<R: RngExt + ?Sized>(&self, rng: &mut R) -> i32 {
        debug_assert!(
            self.low <= self.high,
            "inverted range {}..={}",
            self.low,
            self.high
        );
        rng.random_range(self.low..=self.high)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.low, self.high)
    }
}
