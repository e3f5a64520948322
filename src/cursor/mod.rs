//! The cursor protocol.
//!
//! A cursor is a positional handle into a sequence. Unlike an [`Iterator`],
//! a cursor separates "where am I" from "what is here": it can be
//! dereferenced any number of times, copied to remember a position, and
//! compared against another cursor into the same sequence. Generic
//! algorithms are written against the weakest trait that provides what they
//! need:
//!
//! | Trait                   | Adds                                      |
//! | ---                     | ---                                       |
//! | [`Cursor`]              | `get`, `read`, `step`                     |
//! | [`ForwardCursor`]       | `Clone + PartialEq`, multi-pass traversal |
//! | [`BidirectionalCursor`] | `step_back`                               |
//! | [`RandomAccessCursor`]  | `advance`, `distance`, `precedes`         |
//! | [`IterSwap`]            | exchanging the values two cursors refer to |
//!
//! Each capability trait only declares its primitive operations. The derived
//! operations (postfix stepping, `at`, `advanced_by`, the relational
//! helpers) are provided methods written once in terms of those primitives.

use crate::category::Category;

mod into_cursor;
mod range;

pub use into_cursor::IntoCursor;
pub use range::{range, Range};

/// The signed distance between two cursors.
pub type Difference = isize;

/// A positional handle into a sequence that can be read and stepped forward.
///
/// This is the weakest capability: [`Input`][crate::category::Input]
/// cursors implement only this trait.
pub trait Cursor {
    /// The capability category this cursor advertises.
    type Category: Category;

    /// The owned value of an element.
    type Value;

    /// What dereferencing yields. For cursors over mutable storage this is a
    /// handle to the element, for read-only cursors usually `&T` or `T`.
    type Reference;

    /// Dereference the cursor.
    fn get(&self) -> Self::Reference;

    /// Read the current element out as an owned value.
    fn read(&self) -> Self::Value;

    /// Step to the next element.
    fn step(&mut self);
}

/// A cursor that can traverse its sequence more than once.
///
/// Copies of a forward cursor are independent positions, and two cursors
/// into the same sequence compare equal exactly when they are at the same
/// position.
pub trait ForwardCursor: Cursor + Clone + PartialEq {
    /// Step forward, returning the position before the step.
    fn post_step(&mut self) -> Self {
        let old = self.clone();
        self.step();
        old
    }

    /// The half-open range `[self, last)` as an [`Iterator`] over values.
    fn until(self, last: Self) -> Range<Self> {
        Range::new(self, last)
    }
}

/// A forward cursor that can also step backward.
pub trait BidirectionalCursor: ForwardCursor {
    /// Step to the previous element.
    fn step_back(&mut self);

    /// Step backward, returning the position before the step.
    fn post_step_back(&mut self) -> Self {
        let old = self.clone();
        self.step_back();
        old
    }
}

/// A cursor supporting constant-time jumps, distances and ordering.
pub trait RandomAccessCursor: BidirectionalCursor {
    /// Move the cursor by `n` elements; negative `n` moves backward.
    fn advance(&mut self, n: Difference);

    /// The signed number of steps from `origin` to `self`.
    fn distance(&self, origin: &Self) -> Difference;

    /// Whether `self` is positioned before `other`.
    fn precedes(&self, other: &Self) -> bool;

    /// Move the cursor back by `n` elements.
    ///
    /// # Panics
    ///
    /// Panics if `n` is [`Difference::MIN`], whose negation overflows.
    fn retreat(&mut self, n: Difference) {
        match n.checked_neg() {
            Some(n) => self.advance(n),
            None => panic!("cursor moved back by {n}, which overflows the difference type"),
        }
    }

    /// A copy of this cursor moved by `n`.
    fn advanced_by(&self, n: Difference) -> Self {
        let mut cursor = self.clone();
        cursor.advance(n);
        cursor
    }

    /// A copy of this cursor moved back by `n`.
    fn retreated_by(&self, n: Difference) -> Self {
        let mut cursor = self.clone();
        cursor.retreat(n);
        cursor
    }

    /// Dereference the element `n` positions away, leaving `self` in place.
    fn at(&self, n: Difference) -> Self::Reference {
        self.advanced_by(n).get()
    }

    /// Read the element `n` positions away, leaving `self` in place.
    fn read_at(&self, n: Difference) -> Self::Value {
        self.advanced_by(n).read()
    }

    /// Whether `self` is positioned after `other`.
    fn follows(&self, other: &Self) -> bool {
        other.precedes(self)
    }

    /// Whether `self` is not positioned after `other`.
    fn precedes_or_eq(&self, other: &Self) -> bool {
        !other.precedes(self)
    }

    /// Whether `self` is not positioned before `other`.
    fn follows_or_eq(&self, other: &Self) -> bool {
        !self.precedes(other)
    }
}

/// Exchange the values two cursors refer to.
///
/// The cursors themselves keep their positions; only the pointees move.
/// Every cursor type decides how its elements are swapped, and composite
/// cursors dispatch to each component's implementation.
pub trait IterSwap {
    /// Swap the element under `self` with the element under `other`.
    fn iter_swap(&self, other: &Self);
}
