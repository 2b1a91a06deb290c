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

//! Segment-list canonicalization.
//!
//! The canonical form of a finite union of segments is the sorted,
//! pairwise-disjoint, non-consecutive, non-empty segment list. It is the
//! unique normal form: two unions describe the same value set iff their
//! canonical lists are equal, which is what the equality, hashing and
//! rendering of `Range` and `Interval` rely on.

use crate::segment::Segment;

/// Reduces an arbitrary segment list to its canonical form.
///
/// Empty segments are dropped, the remainder is sorted, and a single
/// left-to-right sweep merges every segment that overlaps or is
/// consecutive to the previously accumulated one. In the merge branch the
/// two segments touch, so their union is always a single segment and the
/// accumulator stays sorted and disjoint.
pub(crate) fn canonicalize<E: Ord + Clone>(mut segments: Vec<Segment<E>>) -> Vec<Segment<E>> {
    segments.retain(|segment| !segment.is_empty());
    if segments.len() < 2 {
        return segments;
    }
    segments.sort();
    let mut canonical: Vec<Segment<E>> = Vec::with_capacity(segments.len());
    for segment in segments {
        let merge = canonical
            .last()
            .is_some_and(|last| last.intersects(&segment) || segment.is_consecutive_to(last));
        if merge {
            if let Some(last) = canonical.pop() {
                canonical.extend(last.union(&segment));
            }
        } else {
            canonical.push(segment);
        }
    }
    canonical
}

/// Returns whether the given segments form a strictly consecutive chain,
/// sorting them in place first.
///
/// # Panics
///
/// Panics if fewer than 2 segments are given.
pub(crate) fn are_consecutive<E: Ord + Clone>(segments: &mut [Segment<E>]) -> bool {
    assert!(
        segments.len() > 1,
        "consecutiveness requires at least 2 segments"
    );
    segments.sort();
    segments
        .windows(2)
        .all(|pair| pair[1].is_consecutive_to(&pair[0]))
}
