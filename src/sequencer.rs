// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Ready-made [`Sequencer`] implementations for common value domains.

use crate::sequence::Sequencer;
use num_traits::PrimInt;
use ordered_float::OrderedFloat;
use std::time::{Duration, SystemTime};

/// A [`Sequencer`] over primitive integers that advances by a fixed
/// positive step.
///
/// # Examples
///
/// ```rust
/// # use spanset::sequence::Sequencer;
/// # use spanset::sequencer::StepSequencer;
///
/// let sequencer = StepSequencer::new(3u32);
/// assert_eq!(sequencer.next(&4), 7);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct StepSequencer<T: PrimInt> {
    step: T,
}

impl<T: PrimInt> StepSequencer<T> {
    /// Creates a new `StepSequencer` advancing by `step`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not strictly positive.
    #[inline]
    pub fn new(step: T) -> Self {
        assert!(step > T::zero(), "step must be strictly positive");
        Self { step }
    }

    /// Creates a new `StepSequencer` advancing by `step`, returning `None`
    /// if `step` is not strictly positive.
    #[inline]
    pub fn try_new(step: T) -> Option<Self> {
        (step > T::zero()).then(|| Self { step })
    }

    /// Returns the step of this sequencer.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }
}

impl<T: PrimInt> Sequencer<T> for StepSequencer<T> {
    #[inline]
    fn next(&self, current: &T) -> T {
        *current + self.step
    }
}

/// A [`Sequencer`] over totally ordered floats that advances by a fixed
/// positive step.
///
/// # Examples
///
/// ```rust
/// # use ordered_float::OrderedFloat;
/// # use spanset::sequence::Sequencer;
/// # use spanset::sequencer::FloatSequencer;
///
/// let sequencer = FloatSequencer::new(0.5);
/// assert_eq!(sequencer.next(&OrderedFloat(1.0)), OrderedFloat(1.5));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FloatSequencer {
    step: OrderedFloat<f64>,
}

impl FloatSequencer {
    /// Creates a new `FloatSequencer` advancing by `step`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not finite or not strictly positive.
    #[inline]
    pub fn new(step: f64) -> Self {
        assert!(
            step.is_finite() && step > 0.0,
            "step must be finite and strictly positive"
        );
        Self {
            step: OrderedFloat(step),
        }
    }

    /// Creates a new `FloatSequencer` advancing by `step`, returning
    /// `None` if `step` is not finite or not strictly positive.
    #[inline]
    pub fn try_new(step: f64) -> Option<Self> {
        (step.is_finite() && step > 0.0).then(|| Self {
            step: OrderedFloat(step),
        })
    }

    /// Returns the step of this sequencer.
    #[inline]
    pub fn step(&self) -> f64 {
        self.step.into_inner()
    }
}

impl Sequencer<OrderedFloat<f64>> for FloatSequencer {
    #[inline]
    fn next(&self, current: &OrderedFloat<f64>) -> OrderedFloat<f64> {
        *current + self.step
    }
}

/// A [`Sequencer`] over [`SystemTime`] that advances by a fixed non-zero
/// duration.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TimeSequencer {
    step: Duration,
}

impl TimeSequencer {
    /// Creates a new `TimeSequencer` advancing by `step`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    #[inline]
    pub fn new(step: Duration) -> Self {
        assert!(!step.is_zero(), "step must be non-zero");
        Self { step }
    }

    /// Creates a new `TimeSequencer` advancing by `step`, returning `None`
    /// if `step` is zero.
    #[inline]
    pub fn try_new(step: Duration) -> Option<Self> {
        (!step.is_zero()).then(|| Self { step })
    }

    /// Returns the step of this sequencer.
    #[inline]
    pub fn step(&self) -> Duration {
        self.step
    }
}

impl Sequencer<SystemTime> for TimeSequencer {
    #[inline]
    fn next(&self, current: &SystemTime) -> SystemTime {
        *current + self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::Bound;
    use crate::interval::Interval;

    #[test]
    fn test_step_sequencer_next() {
        let sequencer = StepSequencer::new(5i64);
        assert_eq!(sequencer.next(&-3), 2);
        assert_eq!(sequencer.next(&2), 7);
    }

    #[test]
    #[should_panic(expected = "strictly positive")]
    fn test_step_sequencer_zero_step() {
        let _ = StepSequencer::new(0u8);
    }

    #[test]
    #[should_panic(expected = "strictly positive")]
    fn test_step_sequencer_negative_step() {
        let _ = StepSequencer::new(-1i32);
    }

    #[test]
    fn test_step_sequencer_try_new() {
        assert!(StepSequencer::try_new(0i32).is_none());
        assert!(StepSequencer::try_new(-4i32).is_none());
        assert_eq!(StepSequencer::try_new(4i32).map(|s| s.step()), Some(4));
    }

    #[test]
    fn test_float_sequencer_next() {
        let sequencer = FloatSequencer::new(0.25);
        assert_eq!(sequencer.next(&OrderedFloat(1.0)), OrderedFloat(1.25));
    }

    #[test]
    #[should_panic(expected = "finite and strictly positive")]
    fn test_float_sequencer_nan_step() {
        let _ = FloatSequencer::new(f64::NAN);
    }

    #[test]
    fn test_float_sequencer_try_new() {
        assert!(FloatSequencer::try_new(0.0).is_none());
        assert!(FloatSequencer::try_new(f64::INFINITY).is_none());
        assert_eq!(FloatSequencer::try_new(0.5).map(|s| s.step()), Some(0.5));
    }

    #[test]
    fn test_float_sequence_over_interval() {
        let iv = Interval::new(
            Bound::closed(OrderedFloat(0.0)),
            Bound::opened(OrderedFloat(1.0)),
        );
        let values: Vec<OrderedFloat<f64>> =
            iv.sequence(FloatSequencer::new(0.25)).iter().collect();
        assert_eq!(
            values,
            vec![
                OrderedFloat(0.0),
                OrderedFloat(0.25),
                OrderedFloat(0.5),
                OrderedFloat(0.75)
            ]
        );
    }

    #[test]
    fn test_time_sequencer_next() {
        let sequencer = TimeSequencer::new(Duration::from_secs(60));
        let start = SystemTime::UNIX_EPOCH;
        assert_eq!(sequencer.next(&start), start + Duration::from_secs(60));
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_time_sequencer_zero_step() {
        let _ = TimeSequencer::new(Duration::ZERO);
    }

    #[test]
    fn test_time_sequence_over_interval() {
        let start = SystemTime::UNIX_EPOCH;
        let end = start + Duration::from_secs(3600);
        let iv = Interval::new(Bound::closed(start), Bound::opened(end));
        let hits: Vec<SystemTime> = iv
            .sequence(TimeSequencer::new(Duration::from_secs(1200)))
            .iter()
            .collect();
        assert_eq!(
            hits,
            vec![
                start,
                start + Duration::from_secs(1200),
                start + Duration::from_secs(2400)
            ]
        );
    }
}
