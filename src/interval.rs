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

//! Single continuous intervals.

use crate::bound::Bound;
use crate::error::{GapError, NoBoundError};
use crate::range::{fmt_segments, Range};
use crate::segment::Segment;
use crate::sequence::{Sequence, Sequencer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A range made of at most one continuous interval.
///
/// An interval is built from two bounds; if the upper bound's value is not
/// greater than the lower bound's one, or the values are equal and at
/// least one side is open, the interval is empty. Every empty interval is
/// equal to every other empty interval, whatever values it was built from.
///
/// Interval-specific algebra (`gap`, `expand_to`, `closure`, `interior`,
/// partitioning) lives here; the general range algebra is available
/// through the same methods `Range` offers and behaves as if the interval
/// were a single-segment range.
///
/// # Examples
///
/// ```rust
/// # use spanset::bound::Bound;
/// # use spanset::interval::Interval;
///
/// let interval = Interval::new(Bound::closed(2), Bound::opened(12));
/// assert!(interval.contains(&2));
/// assert!(!interval.contains(&12));
/// assert_eq!(interval.to_string(), "[2, 12[");
///
/// assert!(Interval::new(Bound::closed(3), Bound::closed(-3)).is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Interval<E> {
    // `None` iff the interval is empty; a held segment is never empty.
    segment: Option<Segment<E>>,
}

impl<E: Ord + Clone> Interval<E> {
    /// Creates a new interval between the given bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset::bound::Bound;
    /// # use spanset::interval::Interval;
    ///
    /// let interval = Interval::new(Bound::opened(0), Bound::closed(15));
    /// assert_eq!(interval.to_string(), "]0, 15]");
    /// ```
    pub fn new(lower: Bound<E>, upper: Bound<E>) -> Self {
        Self::wrap(Some(Segment::new(lower, upper)))
    }

    /// Creates the empty interval.
    #[inline]
    pub fn empty() -> Self {
        Self { segment: None }
    }

    /// Creates the degenerate interval `[value, value]` holding exactly
    /// one value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset::interval::Interval;
    ///
    /// let point = Interval::degenerate(7);
    /// assert!(point.contains(&7));
    /// assert!(!point.contains(&8));
    /// ```
    pub fn degenerate(value: E) -> Self {
        Self {
            segment: Some(Segment::new(
                Bound::closed(value.clone()),
                Bound::closed(value),
            )),
        }
    }

    pub(crate) fn from_segment(segment: Segment<E>) -> Self {
        Self::wrap(Some(segment))
    }

    pub(crate) fn into_segment(self) -> Option<Segment<E>> {
        self.segment
    }

    fn wrap(segment: Option<Segment<E>>) -> Self {
        Self {
            segment: segment.filter(|s| !s.is_empty()),
        }
    }

    /// Returns `true` if this interval contains no value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segment.is_none()
    }

    /// Returns the lower bound, or [`NoBoundError`] if the interval is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset::bound::Bound;
    /// # use spanset::interval::Interval;
    ///
    /// let interval = Interval::new(Bound::closed(2), Bound::opened(12));
    /// assert_eq!(interval.lower_bound(), Ok(&Bound::closed(2)));
    /// assert!(Interval::<i32>::empty().lower_bound().is_err());
    /// ```
    pub fn lower_bound(&self) -> Result<&Bound<E>, NoBoundError> {
        self.segment
            .as_ref()
            .map(Segment::lower)
            .ok_or(NoBoundError)
    }

    /// Returns the upper bound, or [`NoBoundError`] if the interval is
    /// empty.
    pub fn upper_bound(&self) -> Result<&Bound<E>, NoBoundError> {
        self.segment
            .as_ref()
            .map(Segment::upper)
            .ok_or(NoBoundError)
    }

    /// Returns `true` if this interval contains the given value.
    pub fn contains(&self, value: &E) -> bool {
        self.segment
            .as_ref()
            .is_some_and(|segment| segment.contains(value))
    }

    /// Returns the intersection of the two intervals; empty if they do not
    /// intersect.
    pub fn intersection(&self, other: &Interval<E>) -> Interval<E> {
        match (&self.segment, &other.segment) {
            (Some(own), Some(arg)) => Self::wrap(own.intersection(arg)),
            _ => Interval::empty(),
        }
    }

    /// Returns the smallest interval filling the space between the two
    /// intervals; empty if they intersect or touch.
    ///
    /// A boundary adjacent to a closed endpoint becomes open in the gap,
    /// and vice versa.
    ///
    /// # Errors
    ///
    /// [`GapError::EmptyReceiver`] if this interval is empty,
    /// [`GapError::EmptyArgument`] if the given one is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset::bound::Bound;
    /// # use spanset::interval::Interval;
    ///
    /// let a = Interval::new(Bound::opened(0), Bound::closed(9));
    /// let b = Interval::new(Bound::opened(11), Bound::closed(20));
    /// let gap = a.gap(&b).unwrap();
    /// assert_eq!(gap.to_string(), "]9, 11]");
    /// ```
    pub fn gap(&self, other: &Interval<E>) -> Result<Interval<E>, GapError> {
        let own = self.segment.as_ref().ok_or(GapError::EmptyReceiver)?;
        let arg = other.segment.as_ref().ok_or(GapError::EmptyArgument)?;
        Ok(Self::wrap(own.gap(arg)))
    }

    /// Returns the smallest interval containing both this interval and the
    /// given value. An empty interval expands to the degenerate interval
    /// at `value`; the added endpoint is always closed.
    pub fn expand_to(&self, value: E) -> Interval<E> {
        match &self.segment {
            Some(segment) => Interval {
                segment: Some(segment.expand_to(value)),
            },
            None => Interval::degenerate(value),
        }
    }

    /// Returns the smallest closed interval containing this one.
    pub fn closure(&self) -> Interval<E> {
        match &self.segment {
            Some(segment) => Interval {
                segment: Some(segment.closure()),
            },
            None => Interval::empty(),
        }
    }

    /// Returns the largest open interval contained in this one. The
    /// interior of a degenerate interval is empty.
    pub fn interior(&self) -> Interval<E> {
        match &self.segment {
            Some(segment) => Self::wrap(Some(segment.interior())),
            None => Interval::empty(),
        }
    }

    /// Returns whether this interval starts exactly where the given one
    /// ends, with no value in between and no overlap. Empty intervals are
    /// never consecutive to anything.
    pub fn is_consecutive_to(&self, other: &Interval<E>) -> bool {
        match (&self.segment, &other.segment) {
            (Some(own), Some(arg)) => own.is_consecutive_to(arg),
            _ => false,
        }
    }

    /// Returns whether the given intervals exactly partition this one: no
    /// gaps, no overlaps, nothing outside. A non-empty interval is never
    /// partitioned by a collection containing an empty interval; an empty
    /// interval is partitioned only by all-empty intervals.
    ///
    /// # Panics
    ///
    /// Panics if `parts` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset::bound::Bound;
    /// # use spanset::interval::Interval;
    ///
    /// let whole = Interval::new(Bound::closed(1), Bound::closed(40));
    /// let parts = [
    ///     Interval::new(Bound::closed(1), Bound::opened(20)),
    ///     Interval::new(Bound::closed(20), Bound::closed(30)),
    ///     Interval::new(Bound::opened(30), Bound::closed(40)),
    /// ];
    /// assert!(whole.is_partitioned_by(&parts));
    /// ```
    pub fn is_partitioned_by(&self, parts: &[Interval<E>]) -> bool {
        assert!(!parts.is_empty(), "at least one interval is required");
        let own = match &self.segment {
            Some(own) => own,
            None => return parts.iter().all(Interval::is_empty),
        };
        let mut segments = Vec::with_capacity(parts.len());
        for part in parts {
            match &part.segment {
                Some(segment) => segments.push(segment.clone()),
                None => return false,
            }
        }
        own.is_partitioned_by(&segments)
    }

    /// Returns this interval as a general range.
    pub fn to_range(&self) -> Range<E> {
        Range::from(self.clone())
    }

    /// Returns `true` if the given range is a subset of this interval.
    pub fn includes(&self, other: &Range<E>) -> bool {
        self.to_range().includes(other)
    }

    /// Returns `true` if this interval shares at least one value with the
    /// given range.
    pub fn intersects(&self, other: &Range<E>) -> bool {
        self.to_range().intersects(other)
    }

    /// Returns the intersection of this interval with a general range.
    /// Unlike [`Interval::intersection`], the result may consist of
    /// several intervals.
    pub fn intersection_range(&self, other: &Range<E>) -> Range<E> {
        self.to_range().intersection(other)
    }

    /// Returns the union of this interval with the given range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset::bound::Bound;
    /// # use spanset::interval::Interval;
    ///
    /// let a = Interval::new(Bound::closed(2), Bound::opened(12));
    /// let b = Interval::new(Bound::opened(15), Bound::closed(20));
    /// let union = a.union(&b.to_range());
    /// assert_eq!(union.to_string(), "[2, 12[ U ]15, 20]");
    /// ```
    pub fn union(&self, other: &Range<E>) -> Range<E> {
        self.to_range().union(other)
    }

    /// Returns this interval with every value of the given range removed.
    pub fn subtraction(&self, other: &Range<E>) -> Range<E> {
        self.to_range().subtraction(other)
    }

    /// Decomposes this interval; the list holds the interval itself, empty
    /// or not.
    pub fn split(&self) -> Vec<Interval<E>> {
        vec![self.clone()]
    }

    /// Returns a lazy sequence discretizing this interval with the given
    /// sequencer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset::bound::Bound;
    /// # use spanset::interval::Interval;
    /// # use spanset::sequencer::StepSequencer;
    ///
    /// let interval = Interval::new(Bound::opened(0), Bound::closed(15));
    /// let values: Vec<i32> = interval.sequence(StepSequencer::new(3)).iter().collect();
    /// assert_eq!(values, vec![3, 6, 9, 12, 15]);
    /// ```
    pub fn sequence<S: Sequencer<E>>(&self, sequencer: S) -> Sequence<E, S> {
        self.to_range().sequence(sequencer)
    }
}

impl<E: Ord> PartialEq for Interval<E> {
    fn eq(&self, other: &Self) -> bool {
        self.segment == other.segment
    }
}

impl<E: Ord> Eq for Interval<E> {}

impl<E: Ord + Clone> PartialEq<Range<E>> for Interval<E> {
    fn eq(&self, other: &Range<E>) -> bool {
        match &self.segment {
            Some(segment) => other.segments() == std::slice::from_ref(segment),
            None => other.is_empty(),
        }
    }
}

impl<E: Ord + Hash> Hash for Interval<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.segment.hash(state);
    }
}

impl<E: Ord + Clone> Default for Interval<E> {
    #[inline]
    fn default() -> Self {
        Interval::empty()
    }
}

impl<E: Ord + fmt::Display> fmt::Display for Interval<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.segment {
            Some(segment) => fmt_segments(std::slice::from_ref(segment), f),
            None => fmt_segments::<E>(&[], f),
        }
    }
}
