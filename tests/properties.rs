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

//! Algebraic laws of the range set operations, checked over randomly
//! generated interval unions.

use proptest::prelude::*;
use spanset::bound::Bound;
use spanset::interval::Interval;
use spanset::range::Range;

fn interval_strategy() -> impl Strategy<Value = Interval<i32>> {
    (-50i32..50, 0i32..20, any::<bool>(), any::<bool>()).prop_map(
        |(start, length, lower_closed, upper_closed)| {
            let lower = if lower_closed {
                Bound::closed(start)
            } else {
                Bound::opened(start)
            };
            let upper = if upper_closed {
                Bound::closed(start + length)
            } else {
                Bound::opened(start + length)
            };
            Interval::new(lower, upper)
        },
    )
}

fn range_strategy() -> impl Strategy<Value = Range<i32>> {
    prop::collection::vec(interval_strategy(), 0..6)
        .prop_map(|intervals| intervals.into_iter().collect())
}

proptest! {
    #[test]
    fn union_is_commutative(a in range_strategy(), b in range_strategy()) {
        prop_assert_eq!(a.union(&b), b.union(&a));
    }

    #[test]
    fn intersection_is_commutative(a in range_strategy(), b in range_strategy()) {
        prop_assert_eq!(a.intersection(&b), b.intersection(&a));
    }

    #[test]
    fn union_is_idempotent(a in range_strategy()) {
        prop_assert_eq!(a.union(&a), a);
    }

    #[test]
    fn range_includes_itself(a in range_strategy()) {
        prop_assert!(a.includes(&a));
    }

    #[test]
    fn self_subtraction_is_empty(a in range_strategy()) {
        prop_assert!(a.subtraction(&a).is_empty());
    }

    #[test]
    fn empty_is_union_identity(a in range_strategy()) {
        prop_assert_eq!(a.union(&Range::empty()), a);
    }

    #[test]
    fn empty_annihilates_intersection(a in range_strategy()) {
        prop_assert!(a.intersection(&Range::empty()).is_empty());
    }

    #[test]
    fn subtraction_removes_subtrahend(a in range_strategy(), b in range_strategy()) {
        prop_assert!(!a.subtraction(&b).intersects(&b));
    }

    #[test]
    fn subtraction_result_included_in_minuend(a in range_strategy(), b in range_strategy()) {
        prop_assert!(a.includes(&a.subtraction(&b)));
    }

    #[test]
    fn intersection_included_in_both(a in range_strategy(), b in range_strategy()) {
        let both = a.intersection(&b);
        prop_assert!(a.includes(&both));
        prop_assert!(b.includes(&both));
    }

    #[test]
    fn union_covers_both_operands(a in range_strategy(), b in range_strategy()) {
        let either = a.union(&b);
        prop_assert!(either.includes(&a));
        prop_assert!(either.includes(&b));
    }

    #[test]
    fn split_reassembles_the_range(a in range_strategy()) {
        let reassembled: Range<i32> = a.split().into_iter().collect();
        prop_assert_eq!(reassembled, a);
    }

    #[test]
    fn subtraction_and_intersection_partition_minuend(
        a in range_strategy(),
        b in range_strategy(),
    ) {
        let kept = a.subtraction(&b);
        let removed = a.intersection(&b);
        prop_assert_eq!(kept.union(&removed), a);
    }

    #[test]
    fn contained_point_survives_union(a in range_strategy(), b in range_strategy(), x in -60i32..60) {
        let either = a.union(&b);
        prop_assert_eq!(either.contains(&x), a.contains(&x) || b.contains(&x));
    }

    #[test]
    fn contained_point_in_intersection(a in range_strategy(), b in range_strategy(), x in -60i32..60) {
        let both = a.intersection(&b);
        prop_assert_eq!(both.contains(&x), a.contains(&x) && b.contains(&x));
    }
}
