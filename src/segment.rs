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

//! The continuous-interval primitive underlying `Interval` and `Range`.
//!
//! A `Segment` owns all boundary-comparison logic: a lower-role open bound
//! compares strictly greater than its own value, an upper-role open bound
//! strictly smaller. Everything else in the crate reduces to segment
//! algebra over canonical segment lists.

use crate::bound::Bound;
use crate::canonical::{are_consecutive, canonicalize};
use smallvec::{smallvec, SmallVec};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// One continuous interval built from two bounds.
///
/// A segment is empty iff its upper value is smaller than its lower value,
/// or the values are equal and at least one side is open. All empty
/// segments compare equal and sort before every non-empty segment.
#[derive(Clone, Debug)]
pub(crate) struct Segment<E> {
    lower: Bound<E>,
    upper: Bound<E>,
}

impl<E: Ord> Segment<E> {
    pub(crate) fn new(lower: Bound<E>, upper: Bound<E>) -> Self {
        Self { lower, upper }
    }

    pub(crate) fn lower(&self) -> &Bound<E> {
        &self.lower
    }

    pub(crate) fn upper(&self) -> &Bound<E> {
        &self.upper
    }

    /// Lower-role comparison of this segment's lower bound against a value.
    /// An open bound is strictly greater than its own value.
    fn cmp_lower(&self, value: &E) -> Ordering {
        match self.lower.value().cmp(value) {
            Ordering::Equal if self.lower.is_opened() => Ordering::Greater,
            ord => ord,
        }
    }

    /// Upper-role comparison of this segment's upper bound against a value.
    /// An open bound is strictly smaller than its own value.
    fn cmp_upper(&self, value: &E) -> Ordering {
        match self.upper.value().cmp(value) {
            Ordering::Equal if self.upper.is_opened() => Ordering::Less,
            ord => ord,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        match self.upper.value().cmp(self.lower.value()) {
            Ordering::Less => true,
            Ordering::Equal => self.lower.is_opened() || self.upper.is_opened(),
            Ordering::Greater => false,
        }
    }

    /// Returns whether this segment contains the given value.
    pub(crate) fn contains(&self, value: &E) -> bool {
        self.cmp_lower(value) != Ordering::Greater && self.cmp_upper(value) != Ordering::Less
    }

    /// Returns whether this segment includes the given one as a subset.
    /// Every segment includes the empty segment; the empty segment includes
    /// only empty segments.
    pub(crate) fn includes(&self, other: &Segment<E>) -> bool {
        if self.is_empty() {
            return other.is_empty();
        }
        if other.is_empty() {
            return true;
        }
        (self.contains(other.lower.value()) || self.lower == other.lower)
            && (self.contains(other.upper.value()) || self.upper == other.upper)
    }

    /// Returns whether this segment shares at least one value with the
    /// given one. Empty segments intersect nothing.
    pub(crate) fn intersects(&self, other: &Segment<E>) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        if self.includes(other) || other.includes(self) {
            return true;
        }
        if self.cmp(other) == Ordering::Less {
            self.contains(other.lower.value()) && other.contains(self.upper.value())
        } else {
            self.contains(other.upper.value()) && other.contains(self.lower.value())
        }
    }

    /// Returns whether this segment starts exactly where `other` ends,
    /// with no value in between and no overlap. The test is directional:
    /// the receiver is the later of the two. Two open touching bounds are
    /// not consecutive, the touching value itself separates them.
    pub(crate) fn is_consecutive_to(&self, other: &Segment<E>) -> bool {
        if self.is_empty() || other.is_empty() || self.intersects(other) {
            return false;
        }
        if other.upper.is_opened() && self.lower.is_opened() {
            return false;
        }
        self.lower.value() == other.upper.value()
    }
}

impl<E: Ord + Clone> Segment<E> {
    /// Returns the intersection of this segment with the given one, or
    /// `None` if they do not intersect.
    pub(crate) fn intersection(&self, other: &Segment<E>) -> Option<Segment<E>> {
        if !self.intersects(other) {
            return None;
        }
        if self.includes(other) {
            return Some(other.clone());
        }
        if other.includes(self) {
            return Some(self.clone());
        }
        if self.cmp(other) == Ordering::Greater {
            Some(Segment::new(self.lower.clone(), other.upper.clone()))
        } else {
            Some(Segment::new(other.lower.clone(), self.upper.clone()))
        }
    }

    /// Returns the union of this segment with the given one: a single
    /// merged segment when they overlap or touch, both segments in sorted
    /// order otherwise. Neither operand may be empty.
    pub(crate) fn union(&self, other: &Segment<E>) -> SmallVec<[Segment<E>; 2]> {
        debug_assert!(!self.is_empty() && !other.is_empty());
        let touching = self.intersects(other)
            || self.is_consecutive_to(other)
            || other.is_consecutive_to(self);
        if !touching {
            return if self.cmp(other) == Ordering::Greater {
                smallvec![other.clone(), self.clone()]
            } else {
                smallvec![self.clone(), other.clone()]
            };
        }
        let merged = if self.includes(other) {
            self.clone()
        } else if other.includes(self) {
            other.clone()
        } else if self.cmp(other) == Ordering::Greater {
            Segment::new(other.lower.clone(), self.upper.clone())
        } else {
            Segment::new(self.lower.clone(), other.upper.clone())
        };
        smallvec![merged]
    }

    /// Subtracts the given segment from this one, yielding 0, 1 or 2
    /// pieces. Boundaries carved out of the interior carry the opposite
    /// openness of the touching bound of `other`.
    pub(crate) fn subtraction(&self, other: &Segment<E>) -> Vec<Segment<E>> {
        if other.includes(self) {
            return Vec::new();
        }
        let mut pieces: SmallVec<[Segment<E>; 2]> = SmallVec::new();
        if !self.intersects(other) {
            pieces.push(self.clone());
        } else if self.includes(other) {
            pieces.push(Segment::new(self.lower.clone(), other.lower.toggled()));
            pieces.push(Segment::new(other.upper.toggled(), self.upper.clone()));
        } else if self.cmp(other) == Ordering::Greater {
            pieces.push(Segment::new(other.upper.toggled(), self.upper.clone()));
        } else {
            pieces.push(Segment::new(self.lower.clone(), other.lower.toggled()));
        }
        canonicalize(pieces.into_vec())
    }

    /// Returns the smallest segment filling the space between this segment
    /// and the given one, or `None` if they intersect. A boundary adjacent
    /// to a closed endpoint becomes open in the gap, and vice versa; the
    /// gap of two touching segments is therefore an empty segment. Both
    /// operands must be non-empty.
    pub(crate) fn gap(&self, other: &Segment<E>) -> Option<Segment<E>> {
        debug_assert!(!self.is_empty() && !other.is_empty());
        if self.intersects(other) {
            return None;
        }
        let (first, second) = if self.cmp(other) == Ordering::Greater {
            (other, self)
        } else {
            (self, other)
        };
        Some(Segment::new(
            first.upper.toggled(),
            second.lower.toggled(),
        ))
    }

    /// Returns the smallest segment containing both this segment and the
    /// given value.
    pub(crate) fn expand_to(&self, value: E) -> Segment<E> {
        if self.is_empty() {
            return Segment::new(Bound::closed(value.clone()), Bound::closed(value));
        }
        if self.contains(&value) {
            return self.clone();
        }
        if self.cmp_lower(&value) == Ordering::Greater {
            Segment::new(Bound::closed(value), self.upper.clone())
        } else {
            Segment::new(self.lower.clone(), Bound::closed(value))
        }
    }

    /// The smallest closed segment containing this one.
    pub(crate) fn closure(&self) -> Segment<E> {
        if self.is_empty() || (self.lower.is_closed() && self.upper.is_closed()) {
            return self.clone();
        }
        Segment::new(
            Bound::closed(self.lower.value().clone()),
            Bound::closed(self.upper.value().clone()),
        )
    }

    /// The largest open segment contained in this one.
    pub(crate) fn interior(&self) -> Segment<E> {
        if self.is_empty() || (self.lower.is_opened() && self.upper.is_opened()) {
            return self.clone();
        }
        Segment::new(
            Bound::opened(self.lower.value().clone()),
            Bound::opened(self.upper.value().clone()),
        )
    }

    /// Returns whether the given segments, once canonicalized, reproduce
    /// exactly this segment with no gaps or overlaps. An empty receiver is
    /// partitioned only by all-empty segments.
    pub(crate) fn is_partitioned_by(&self, segments: &[Segment<E>]) -> bool {
        if segments.len() == 1 {
            return *self == segments[0];
        }
        if self.is_empty() {
            return segments.iter().all(Segment::is_empty);
        }
        if segments.is_empty() {
            return false;
        }
        let mut sorted = segments.to_vec();
        if !are_consecutive(&mut sorted) {
            return false;
        }
        let union = canonicalize(sorted);
        union.len() == 1 && *self == union[0]
    }
}

impl<E: Ord> PartialEq for Segment<E> {
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() {
            return other.is_empty();
        }
        self.lower == other.lower && self.upper == other.upper
    }
}

impl<E: Ord> Eq for Segment<E> {}

impl<E: Ord> PartialOrd for Segment<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E: Ord> Ord for Segment<E> {
    /// Empty segments sort before all non-empty ones and compare equal to
    /// each other. Non-empty segments compare by lower bound (value, then
    /// closed before open) and break ties by upper bound (value, then open
    /// before closed).
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => cmp_lower_bounds(&self.lower, &other.lower)
                .then_with(|| cmp_upper_bounds(&self.upper, &other.upper)),
        }
    }
}

fn cmp_lower_bounds<E: Ord>(a: &Bound<E>, b: &Bound<E>) -> Ordering {
    a.value().cmp(b.value()).then(match (a.is_closed(), b.is_closed()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    })
}

fn cmp_upper_bounds<E: Ord>(a: &Bound<E>, b: &Bound<E>) -> Ordering {
    a.value().cmp(b.value()).then(match (a.is_closed(), b.is_closed()) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => Ordering::Equal,
    })
}

impl<E: Ord + Hash> Hash for Segment<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_empty() {
            // All empty segments are equal, so they must hash alike.
            state.write_u8(0);
        } else {
            state.write_u8(1);
            self.lower.hash(state);
            self.upper.hash(state);
        }
    }
}

impl<E: fmt::Display> fmt::Display for Segment<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lower = if self.lower.is_closed() { '[' } else { ']' };
        let upper = if self.upper.is_closed() { ']' } else { '[' };
        write!(
            f,
            "{}{}, {}{}",
            lower,
            self.lower.value(),
            self.upper.value(),
            upper
        )
    }
}
