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

//! # Spanset
//!
//! Set algebra over intervals and ranges of arbitrary totally ordered
//! values. Endpoints carry their own inclusion flag, so open, closed, and
//! half-open spans mix freely, and every set-level result comes back in a
//! unique canonical form: sorted, pairwise disjoint, not mutually
//! consecutive, with no empty members. Equal sets therefore always compare
//! and hash equal, no matter how they were built.
//!
//! ## Modules
//!
//! - `bound`: An endpoint value paired with an open/closed inclusion flag.
//! - `interval`: A continuous span between two bounds, possibly empty,
//!   with intersection, gap, expansion, closure/interior, partition
//!   testing, and promotion into ranges.
//! - `range`: A canonical union of disjoint intervals with the full set
//!   algebra (intersection, union, subtraction, inclusion, splitting) and
//!   `&`/`|`/`-` operator sugar.
//! - `sequence`: Lazy, forward-only enumeration of the values a range
//!   contains under a pluggable [`Sequencer`](sequence::Sequencer).
//! - `sequencer`: Ready-made sequencers for integers, ordered floats, and
//!   system time.
//! - `error`: Error types for bound access on empty intervals and for gap
//!   computations.
//!
//! ## Example
//!
//! ```rust
//! use spanset::bound::Bound;
//! use spanset::interval::Interval;
//!
//! let shift = Interval::new(Bound::closed(8), Bound::opened(17));
//! let lunch = Interval::new(Bound::closed(12), Bound::opened(13));
//! let working = shift.subtraction(&lunch.to_range());
//! assert_eq!(working.to_string(), "[8, 12[ U [13, 17[");
//! ```

pub mod bound;
pub mod error;
pub mod interval;
pub mod range;
pub mod sequence;
pub mod sequencer;

mod canonical;
mod segment;
