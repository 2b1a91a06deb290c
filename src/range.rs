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

//! Ranges: finite unions of intervals.

use crate::canonical::canonicalize;
use crate::interval::Interval;
use crate::segment::Segment;
use crate::sequence::{Sequence, Sequencer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{BitAnd, BitOr, Sub};

/// A set of values over a totally-ordered domain, represented as a finite
/// union of intervals.
///
/// A range always holds its segments in canonical form: sorted, pairwise
/// disjoint, non-consecutive and non-empty. Canonical form is the unique
/// normal form of a union of intervals, so structural equality of two
/// ranges is set equality. Ranges are immutable; every operation returns a
/// new range.
///
/// # Examples
///
/// ```rust
/// # use spanset::bound::Bound;
/// # use spanset::interval::Interval;
/// # use spanset::range::Range;
///
/// let a = Range::from(Interval::new(Bound::closed(0), Bound::opened(10)));
/// let b = Range::from(Interval::new(Bound::closed(5), Bound::closed(20)));
/// let union = a.union(&b);
/// assert!(union.contains(&15));
/// assert_eq!(union.to_string(), "[0, 20]");
/// ```
#[derive(Clone, Debug)]
pub struct Range<E> {
    segments: Vec<Segment<E>>,
}

impl<E: Ord + Clone> Range<E> {
    /// Creates the empty range.
    ///
    /// The empty range contains nothing, is included in every range,
    /// includes only empty ranges, unions to the other operand unchanged,
    /// and intersects and subtracts to itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset::range::Range;
    ///
    /// let empty = Range::<i32>::empty();
    /// assert!(empty.is_empty());
    /// assert!(!empty.contains(&0));
    /// ```
    #[inline]
    pub fn empty() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    pub(crate) fn from_segments(segments: Vec<Segment<E>>) -> Self {
        Self {
            segments: canonicalize(segments),
        }
    }

    pub(crate) fn segments(&self) -> &[Segment<E>] {
        &self.segments
    }

    /// Returns `true` if this range contains no value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns `true` if this range contains the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset::bound::Bound;
    /// # use spanset::interval::Interval;
    /// # use spanset::range::Range;
    ///
    /// let range = Range::from(Interval::new(Bound::closed(2), Bound::opened(12)));
    /// assert!(range.contains(&2));
    /// assert!(!range.contains(&12));
    /// ```
    pub fn contains(&self, value: &E) -> bool {
        self.segments.iter().any(|segment| segment.contains(value))
    }

    /// Returns `true` if the given range is a subset of this one.
    ///
    /// The empty range is included by every range and includes only empty
    /// ranges.
    pub fn includes(&self, other: &Range<E>) -> bool {
        if self.is_empty() {
            return other.is_empty();
        }
        other.segments.iter().all(|needle| {
            self.segments
                .iter()
                .any(|segment| segment.includes(needle))
        })
    }

    /// Returns `true` if the two ranges share at least one value.
    pub fn intersects(&self, other: &Range<E>) -> bool {
        self.segments.iter().any(|segment| {
            other
                .segments
                .iter()
                .any(|candidate| segment.intersects(candidate))
        })
    }

    /// Returns the intersection of the two ranges.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset::bound::Bound;
    /// # use spanset::interval::Interval;
    /// # use spanset::range::Range;
    ///
    /// let a = Range::from(Interval::new(Bound::closed(0), Bound::opened(10)));
    /// let b = Range::from(Interval::new(Bound::closed(5), Bound::closed(20)));
    /// assert_eq!(a.intersection(&b).to_string(), "[5, 10[");
    /// ```
    pub fn intersection(&self, other: &Range<E>) -> Range<E> {
        let mut result = Vec::new();
        for segment in &self.segments {
            for candidate in &other.segments {
                if let Some(intersection) = segment.intersection(candidate) {
                    result.push(intersection);
                }
            }
        }
        Range::from_segments(result)
    }

    /// Returns the union of the two ranges.
    pub fn union(&self, other: &Range<E>) -> Range<E> {
        let mut result = self.segments.clone();
        result.extend(other.segments.iter().cloned());
        Range::from_segments(result)
    }

    /// Returns this range with every value of `other` removed.
    ///
    /// Runs a fixed-point loop: find a segment of the current result that
    /// still intersects a subtrahend segment, replace it by its pairwise
    /// subtraction pieces, re-canonicalize, and repeat. Every pass removes
    /// one pairwise intersection and never introduces a new one, so the
    /// loop terminates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset::bound::Bound;
    /// # use spanset::interval::Interval;
    /// # use spanset::range::Range;
    ///
    /// let base = Range::from(Interval::new(Bound::closed(0), Bound::closed(10)));
    /// let hole = Range::from(Interval::new(Bound::opened(3), Bound::opened(6)));
    /// assert_eq!(base.subtraction(&hole).to_string(), "[0, 3] U [6, 10]");
    /// ```
    pub fn subtraction(&self, other: &Range<E>) -> Range<E> {
        if other.is_empty() {
            return self.clone();
        }
        let mut result = self.segments.clone();
        while let Some((index, subtrahend)) = find_intersecting(&result, &other.segments) {
            let segment = result.remove(index);
            result.extend(segment.subtraction(&other.segments[subtrahend]));
            result = canonicalize(result);
        }
        Range { segments: result }
    }

    /// Decomposes this range into its intervals, in ascending order.
    ///
    /// A wholly empty range yields a single-element list containing the
    /// empty interval, so the result is never an empty list.
    pub fn split(&self) -> Vec<Interval<E>> {
        if self.is_empty() {
            return vec![Interval::empty()];
        }
        self.segments
            .iter()
            .map(|segment| Interval::from_segment(segment.clone()))
            .collect()
    }

    /// Returns a lazy sequence discretizing this range with the given
    /// sequencer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset::bound::Bound;
    /// # use spanset::interval::Interval;
    /// # use spanset::range::Range;
    /// # use spanset::sequencer::StepSequencer;
    ///
    /// let range = Range::from(Interval::new(Bound::opened(0), Bound::closed(15)));
    /// let values: Vec<i32> = range.sequence(StepSequencer::new(3)).iter().collect();
    /// assert_eq!(values, vec![3, 6, 9, 12, 15]);
    /// ```
    pub fn sequence<S: Sequencer<E>>(&self, sequencer: S) -> Sequence<E, S> {
        Sequence::new(self.segments.clone(), sequencer)
    }
}

/// Locates a (result segment, subtrahend segment) pair that still
/// intersects, if any.
fn find_intersecting<E: Ord>(
    segments: &[Segment<E>],
    subtrahend: &[Segment<E>],
) -> Option<(usize, usize)> {
    for (i, segment) in segments.iter().enumerate() {
        for (j, candidate) in subtrahend.iter().enumerate() {
            if segment.intersects(candidate) {
                return Some((i, j));
            }
        }
    }
    None
}

impl<E: Ord> PartialEq for Range<E> {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl<E: Ord> Eq for Range<E> {}

impl<E: Ord + Clone> PartialEq<Interval<E>> for Range<E> {
    fn eq(&self, other: &Interval<E>) -> bool {
        other == self
    }
}

impl<E: Ord + Hash> Hash for Range<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.segments.hash(state);
    }
}

impl<E: Ord + Clone> From<Interval<E>> for Range<E> {
    fn from(interval: Interval<E>) -> Self {
        // A single non-empty segment is already canonical.
        Range {
            segments: interval.into_segment().into_iter().collect(),
        }
    }
}

impl<E: Ord + Clone> FromIterator<Interval<E>> for Range<E> {
    fn from_iter<I: IntoIterator<Item = Interval<E>>>(iter: I) -> Self {
        Range::from_segments(
            iter.into_iter()
                .filter_map(Interval::into_segment)
                .collect(),
        )
    }
}

impl<E: Ord + Clone> BitAnd for &Range<E> {
    type Output = Range<E>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<E: Ord + Clone> BitOr for &Range<E> {
    type Output = Range<E>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<E: Ord + Clone> Sub for &Range<E> {
    type Output = Range<E>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtraction(rhs)
    }
}

impl<E: Ord + Clone> Default for Range<E> {
    #[inline]
    fn default() -> Self {
        Range::empty()
    }
}

impl<E: Ord + fmt::Display> fmt::Display for Range<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_segments(&self.segments, f)
    }
}

/// Renders a canonical segment list: the Unicode empty-set character for
/// an empty list, otherwise the segments joined by `" U "` in ascending
/// order.
pub(crate) fn fmt_segments<E: fmt::Display>(
    segments: &[Segment<E>],
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    match segments.split_first() {
        None => write!(f, "\u{2205}"),
        Some((first, rest)) => {
            write!(f, "{first}")?;
            for segment in rest {
                write!(f, " U {segment}")?;
            }
            Ok(())
        }
    }
}
