//! # Random Source
//!
//! The engine never owns randomness. Every draw goes through a
//! [`RandomSource`] handed in by the caller, so the host decides the sequence
//! and tests can script it.
//!
//! Any `rand::Rng` is a `RandomSource`. [`SequenceRandom`] replays a fixed
//! list of draws.

use rand::Rng;

/// Largest value [`SequenceRandom`] will hand out.
const ONE_BELOW: f64 = 1.0 - f64::EPSILON;

/// Uniform draws used by the engine.
pub trait RandomSource {
    /// Returns a uniform value in `[0, 1)`.
    fn next_double(&mut self) -> f64;

    /// Returns a uniform integer in `[min, max_exclusive)`.
    ///
    /// Returns `min` when the range is empty. A draw is still taken, so the
    /// number of draws never depends on the configured range.
    fn next_int(&mut self, min: i32, max_exclusive: i32) -> i32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn next_double(&mut self) -> f64 {
        self.gen::<f64>()
    }

    #[inline]
    fn next_int(&mut self, min: i32, max_exclusive: i32) -> i32 {
        if max_exclusive <= min {
            self.next_double();
            min
        } else {
            self.gen_range(min..max_exclusive)
        }
    }
}

/// Replays a fixed sequence of unit draws.
///
/// Integer draws consume one unit value and scale it onto the range, so a
/// single list describes the whole call sequence. The list wraps around when
/// exhausted; an empty list always draws `0.0`.
#[derive(Clone, Debug, Default)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: usize,
    draws: usize,
}

impl SequenceRandom {
    /// Creates a source replaying `values`, each clamped into `[0, 1)`.
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().map(|v| v.clamp(0.0, ONE_BELOW)).collect(),
            cursor: 0,
            draws: 0,
        }
    }

    /// Number of draws taken so far.
    #[must_use]
    pub const fn draws(&self) -> usize {
        self.draws
    }

    fn next_unit(&mut self) -> f64 {
        self.draws += 1;
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

impl RandomSource for SequenceRandom {
    fn next_double(&mut self) -> f64 {
        self.next_unit()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn next_int(&mut self, min: i32, max_exclusive: i32) -> i32 {
        let unit = self.next_unit();
        if max_exclusive <= min {
            return min;
        }
        let span = f64::from(max_exclusive) - f64::from(min);
        let offset = (unit * span).floor() as i64;
        (i64::from(min) + offset).min(i64::from(max_exclusive) - 1) as i32
    }
}
