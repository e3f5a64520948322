//! Lockstep cursors: zip N sequence cursors into one composite cursor.
//!
//! A [`Zipper`] owns one cursor per sequence, moves all of them together,
//! and dereferences to the tuple of their current elements. Any algorithm
//! written against the [cursor traits][cursor] then works on N parallel
//! sequences at once, without knowing there is more than one. The classic
//! example is sorting one sequence by key while a second sequence is
//! permuted along with it.
//!
//! # Capabilities
//!
//! Cursors advertise one of four [categories][category] (input, forward,
//! bidirectional, random-access). A zipper is exactly as capable as its
//! weakest component, both in the category it advertises and in the traits
//! it implements; the reduction is computed by the type system.
//!
//! # Examples
//!
//! Sort two parallel arrays by the first one:
//!
//! ```rust
//! use zipcursor::prelude::*;
//! use zipcursor::cursors::{cells, SliceCursor};
//!
//! let mut a = [3, 1, 2];
//! let mut b = [30, 10, 20];
//! let (ca, cb) = (cells(&mut a), cells(&mut b));
//!
//! let first = zipcursor::zip((ca, cb));
//! let len = SliceCursor::end(ca) - SliceCursor::begin(ca);
//!
//! // Insertion sort, written against a single random-access cursor.
//! for i in 1..len {
//!     let mut j = i;
//!     while j > 0 && first.read_at(j).0 < first.read_at(j - 1).0 {
//!         (first + j).iter_swap(&(first + j - 1));
//!         j -= 1;
//!     }
//! }
//!
//! assert_eq!(a, [1, 2, 3]);
//! assert_eq!(b, [10, 20, 30]);
//! ```
//!
//! Zipping a random-access cursor with a forward-only one yields a forward
//! cursor:
//!
//! ```rust
//! use std::collections::LinkedList;
//! use zipcursor::category::{Capability, Category};
//! use zipcursor::cursor::Cursor;
//! use zipcursor::cursors::cells;
//!
//! let mut v = [1, 2, 3];
//! let list: LinkedList<char> = "abc".chars().collect();
//! let mut z = zipcursor::zip((cells(&mut v), &list));
//!
//! fn capability<C: Cursor>(_: &C) -> Capability {
//!     <C::Category as Category>::CAPABILITY
//! }
//! assert_eq!(capability(&z), Capability::Forward);
//!
//! z.step();
//! assert_eq!(z.read(), (2, 'b'));
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `alloc`.
//! - `alloc`: enables [`ListCursor`][cursors::ListCursor] over
//!   `alloc::collections::LinkedList`.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]
#![allow(non_snake_case)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod utils;
mod zipper;

pub mod category;
pub mod cursor;
pub mod cursors;

pub use zipper::{make_zipper, zip, CursorTuple, IntoCursors, Zipper};

/// The zipcursor prelude.
pub mod prelude {
    pub use super::cursor::BidirectionalCursor as _;
    pub use super::cursor::Cursor as _;
    pub use super::cursor::ForwardCursor as _;
    pub use super::cursor::IterSwap as _;
    pub use super::cursor::RandomAccessCursor as _;
}

/// Element-wise combinators over tuples, and the per-component operations
/// zippers are built from.
pub mod tuple {
    pub use crate::utils::tuple::{Apply, TupleMap, TupleRef, TupleZip};
    pub use crate::zipper::each::{Advance, Get, Read, Step, StepBack, Swap};
}
