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

//! Interval endpoints.

/// An interval endpoint: a value together with an inclusive/exclusive flag.
///
/// A closed bound includes its own value, an opened bound excludes it.
/// Two bounds are equal iff they carry the same value and the same flag.
/// A bound has no ordering of its own; how it compares against values
/// depends on whether it plays the lower or the upper role in an interval,
/// which is resolved by the interval types in this crate.
///
/// # Examples
///
/// ```rust
/// # use spanset::bound::Bound;
///
/// let closed = Bound::closed(5);
/// let opened = Bound::opened(5);
/// assert!(closed.is_closed());
/// assert!(opened.is_opened());
/// assert_ne!(closed, opened);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Bound<E> {
    value: E,
    closed: bool,
}

impl<E> Bound<E> {
    /// Creates a bound that includes its value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset::bound::Bound;
    ///
    /// let bound = Bound::closed(42);
    /// assert_eq!(*bound.value(), 42);
    /// assert!(bound.is_closed());
    /// ```
    #[inline]
    pub fn closed(value: E) -> Self {
        Self {
            value,
            closed: true,
        }
    }

    /// Creates a bound that excludes its value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanset::bound::Bound;
    ///
    /// let bound = Bound::opened(42);
    /// assert_eq!(*bound.value(), 42);
    /// assert!(bound.is_opened());
    /// ```
    #[inline]
    pub fn opened(value: E) -> Self {
        Self {
            value,
            closed: false,
        }
    }

    /// Returns `true` if this bound includes its value.
    #[inline]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns `true` if this bound excludes its value.
    #[inline]
    pub const fn is_opened(&self) -> bool {
        !self.closed
    }

    /// Returns the endpoint value.
    #[inline]
    pub const fn value(&self) -> &E {
        &self.value
    }

    /// Consumes the bound and returns the endpoint value.
    #[inline]
    pub fn into_value(self) -> E {
        self.value
    }

    /// Returns the same endpoint with the opposite flag.
    ///
    /// Used when carving gaps and subtraction remainders: a boundary
    /// adjacent to a closed endpoint becomes open, and vice versa.
    #[inline]
    pub(crate) fn toggled(&self) -> Self
    where
        E: Clone,
    {
        Self {
            value: self.value.clone(),
            closed: !self.closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed() {
        let bound = Bound::closed(7);
        assert!(bound.is_closed());
        assert!(!bound.is_opened());
        assert_eq!(*bound.value(), 7);
        assert_eq!(bound.into_value(), 7);
    }

    #[test]
    fn test_opened() {
        let bound = Bound::opened(7);
        assert!(bound.is_opened());
        assert!(!bound.is_closed());
        assert_eq!(*bound.value(), 7);
    }

    #[test]
    fn test_equality() {
        assert_eq!(Bound::closed(3), Bound::closed(3));
        assert_eq!(Bound::opened(3), Bound::opened(3));
        // Same value, different flag
        assert_ne!(Bound::closed(3), Bound::opened(3));
        // Same flag, different value
        assert_ne!(Bound::closed(3), Bound::closed(4));
    }

    #[test]
    fn test_toggled() {
        assert_eq!(Bound::closed(3).toggled(), Bound::opened(3));
        assert_eq!(Bound::opened(3).toggled(), Bound::closed(3));
    }
}
