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

//! Errors reported by the range algebra.
//!
//! Every operation in this crate is a bounded, synchronous computation over
//! immutable values; a failed call leaves no partial state behind. All
//! errors are caller contract violations surfaced at the start of the
//! operation.

use std::fmt;

/// Returned when reading a bound of an empty interval.
///
/// An empty interval contains no values and therefore has neither a lower
/// nor an upper bound.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NoBoundError;

impl fmt::Display for NoBoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an empty interval has no bounds")
    }
}

impl std::error::Error for NoBoundError {}

/// Returned when a gap computation is attempted on an empty operand.
///
/// The gap between two intervals is only defined when both are non-empty;
/// intersecting operands are not an error, their gap is simply the empty
/// interval.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GapError {
    /// The receiver of the gap computation is empty.
    EmptyReceiver,
    /// The interval the gap is computed against is empty.
    EmptyArgument,
}

impl fmt::Display for GapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GapError::EmptyReceiver => {
                write!(f, "cannot compute the gap from an empty interval")
            }
            GapError::EmptyArgument => {
                write!(f, "cannot compute the gap against an empty interval")
            }
        }
    }
}

impl std::error::Error for GapError {}
