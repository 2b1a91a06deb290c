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

//! Lazy discretization of ranges.

use crate::segment::Segment;
use std::iter::FusedIterator;

/// A deterministic stepping capability over a value domain.
///
/// `next` must return a value strictly greater than `current`, and the
/// same input must always produce the same output. The crate never probes
/// further than one step past a segment boundary, so a sequencer that
/// violates strict growth stalls iteration rather than corrupting it.
pub trait Sequencer<E> {
    /// Returns the next value strictly greater than `current`.
    fn next(&self, current: &E) -> E;
}

/// A lazy, forward-only enumeration of the values a range contains under a
/// given sequencer.
///
/// A sequence never materializes its elements: each call to [`iter`]
/// (or each `IntoIterator` conversion) produces a fresh, single-pass
/// iterator over the range's canonical segments. Within a segment the
/// generator is anchored at the lower bound value; the bound value itself
/// is only yielded when the bound is closed.
///
/// [`iter`]: Sequence::iter
///
/// # Examples
///
/// ```rust
/// # use spanset::bound::Bound;
/// # use spanset::interval::Interval;
/// # use spanset::sequencer::StepSequencer;
///
/// let range = Interval::new(Bound::opened(-2), Bound::closed(3))
///     .union(&Interval::new(Bound::closed(5), Bound::opened(9)).to_range())
///     .union(&Interval::new(Bound::closed(11), Bound::closed(14)).to_range());
/// let sequence = range.sequence(StepSequencer::new(2));
/// let values: Vec<i32> = sequence.iter().collect();
/// assert_eq!(values, vec![0, 2, 5, 7, 11, 13]);
/// ```
#[derive(Clone, Debug)]
pub struct Sequence<E, S> {
    segments: Vec<Segment<E>>,
    sequencer: S,
}

impl<E: Ord + Clone, S: Sequencer<E>> Sequence<E, S> {
    pub(crate) fn new(segments: Vec<Segment<E>>, sequencer: S) -> Self {
        Self {
            segments,
            sequencer,
        }
    }

    /// Returns a fresh iterator over the sequence.
    pub fn iter(&self) -> Iter<'_, E, S> {
        Iter {
            segments: &self.segments,
            sequencer: &self.sequencer,
            index: 0,
            current: None,
        }
    }
}

/// Produces the next value of the traversal, advancing `index` and
/// `current` in place.
///
/// Within a segment: the first candidate is the lower bound value, which
/// is kept only if the segment actually contains it (a closed lower
/// bound); an excluded lower bound still anchors the generator, so one
/// step is taken from it. Afterwards each call steps once from the last
/// produced value; a step leaving the segment moves on to the next
/// segment. A segment whose first probe is not containable contributes
/// nothing, no attempt is made to search further ahead.
fn advance<E, S>(
    segments: &[Segment<E>],
    sequencer: &S,
    index: &mut usize,
    current: &mut Option<E>,
) -> Option<E>
where
    E: Ord + Clone,
    S: Sequencer<E>,
{
    loop {
        let segment = segments.get(*index)?;
        let candidate = match current.take() {
            None => {
                let anchor = segment.lower().value().clone();
                if segment.contains(&anchor) {
                    anchor
                } else {
                    sequencer.next(&anchor)
                }
            }
            Some(value) => sequencer.next(&value),
        };
        if segment.contains(&candidate) {
            *current = Some(candidate.clone());
            return Some(candidate);
        }
        *index += 1;
    }
}

/// A borrowing iterator over a [`Sequence`].
#[derive(Clone, Debug)]
pub struct Iter<'a, E, S> {
    segments: &'a [Segment<E>],
    sequencer: &'a S,
    index: usize,
    current: Option<E>,
}

impl<E: Ord + Clone, S: Sequencer<E>> Iterator for Iter<'_, E, S> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        advance(
            self.segments,
            self.sequencer,
            &mut self.index,
            &mut self.current,
        )
    }
}

impl<E: Ord + Clone, S: Sequencer<E>> FusedIterator for Iter<'_, E, S> {}

/// An owning iterator over a [`Sequence`].
#[derive(Clone, Debug)]
pub struct IntoIter<E, S> {
    segments: Vec<Segment<E>>,
    sequencer: S,
    index: usize,
    current: Option<E>,
}

impl<E: Ord + Clone, S: Sequencer<E>> Iterator for IntoIter<E, S> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        advance(
            &self.segments,
            &self.sequencer,
            &mut self.index,
            &mut self.current,
        )
    }
}

impl<E: Ord + Clone, S: Sequencer<E>> FusedIterator for IntoIter<E, S> {}

impl<E: Ord + Clone, S: Sequencer<E>> IntoIterator for Sequence<E, S> {
    type Item = E;
    type IntoIter = IntoIter<E, S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            segments: self.segments,
            sequencer: self.sequencer,
            index: 0,
            current: None,
        }
    }
}

impl<'a, E: Ord + Clone, S: Sequencer<E>> IntoIterator for &'a Sequence<E, S> {
    type Item = E;
    type IntoIter = Iter<'a, E, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E, S, T> PartialEq<Sequence<E, T>> for Sequence<E, S>
where
    E: Ord + Clone,
    S: Sequencer<E>,
    T: Sequencer<E>,
{
    /// Two sequences are equal iff they enumerate the same values in the
    /// same order, regardless of the underlying segments and sequencers.
    fn eq(&self, other: &Sequence<E, T>) -> bool {
        self.iter().eq(other.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::Bound;
    use crate::interval::Interval;
    use crate::range::Range;
    use crate::sequencer::StepSequencer;

    fn interval(lower: Bound<i32>, upper: Bound<i32>) -> Interval<i32> {
        Interval::new(lower, upper)
    }

    #[test]
    fn test_single_segment_open_lower_bound() {
        // The excluded anchor 0 is stepped over, never yielded.
        let iv = interval(Bound::opened(0), Bound::closed(15));
        let values: Vec<i32> = iv.sequence(StepSequencer::new(3)).iter().collect();
        assert_eq!(values, vec![3, 6, 9, 12, 15]);
    }

    #[test]
    fn test_single_segment_closed_lower_bound() {
        let iv = interval(Bound::closed(0), Bound::opened(10));
        let values: Vec<i32> = iv.sequence(StepSequencer::new(4)).iter().collect();
        assert_eq!(values, vec![0, 4, 8]);
    }

    #[test]
    fn test_multiple_segments() {
        let range: Range<i32> = [
            interval(Bound::opened(-2), Bound::closed(3)),
            interval(Bound::closed(5), Bound::opened(9)),
            interval(Bound::closed(11), Bound::closed(14)),
        ]
        .into_iter()
        .collect();
        let values: Vec<i32> = range.sequence(StepSequencer::new(2)).iter().collect();
        assert_eq!(values, vec![0, 2, 5, 7, 11, 13]);
    }

    #[test]
    fn test_empty_range_sequence() {
        let sequence = Range::<i32>::empty().sequence(StepSequencer::new(1));
        assert_eq!(sequence.iter().next(), None);
    }

    #[test]
    fn test_degenerate_interval() {
        let values: Vec<i32> = Interval::degenerate(7)
            .sequence(StepSequencer::new(3))
            .iter()
            .collect();
        assert_eq!(values, vec![7]);
    }

    #[test]
    fn test_infeasible_segment_is_skipped() {
        // ]4, 5[ contains no multiple-of-10 step from 4; the traversal
        // moves on to the next segment after the first probe.
        let range: Range<i32> = [
            interval(Bound::opened(4), Bound::opened(5)),
            interval(Bound::closed(20), Bound::closed(21)),
        ]
        .into_iter()
        .collect();
        let values: Vec<i32> = range.sequence(StepSequencer::new(10)).iter().collect();
        assert_eq!(values, vec![20]);
    }

    #[test]
    fn test_iterator_is_fused() {
        let iv = interval(Bound::closed(0), Bound::closed(2));
        let mut iter = iv.sequence(StepSequencer::new(1)).into_iter();
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_restartable() {
        let iv = interval(Bound::closed(1), Bound::closed(5));
        let sequence = iv.sequence(StepSequencer::new(2));
        let first: Vec<i32> = sequence.iter().collect();
        let second: Vec<i32> = sequence.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![1, 3, 5]);
    }

    #[test]
    fn test_for_loop_over_reference() {
        let iv = interval(Bound::closed(0), Bound::opened(6));
        let sequence = iv.sequence(StepSequencer::new(2));
        let mut values = Vec::new();
        for value in &sequence {
            values.push(value);
        }
        assert_eq!(values, vec![0, 2, 4]);
    }

    #[test]
    fn test_equality() {
        let a = interval(Bound::closed(0), Bound::closed(4)).sequence(StepSequencer::new(2));
        // Same values from a different range and step
        let b = interval(Bound::closed(0), Bound::opened(5)).sequence(StepSequencer::new(2));
        assert_eq!(a, b);

        let c = interval(Bound::closed(0), Bound::closed(4)).sequence(StepSequencer::new(1));
        assert_ne!(a, c);
    }
}
