//! Per-component operations a [`Zipper`][crate::Zipper] maps over its
//! cursors with [`TupleMap`][crate::tuple::TupleMap].

use crate::cursor::{BidirectionalCursor, Cursor, Difference, IterSwap, RandomAccessCursor};
use crate::utils::tuple::Apply;

/// Dereference a cursor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Get;

impl<'c, C: Cursor> Apply<&'c C> for Get {
    type Output = C::Reference;

    #[inline]
    fn apply(&mut self, cursor: &'c C) -> C::Reference {
        cursor.get()
    }
}

/// Read a cursor's current value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Read;

impl<'c, C: Cursor> Apply<&'c C> for Read {
    type Output = C::Value;

    #[inline]
    fn apply(&mut self, cursor: &'c C) -> C::Value {
        cursor.read()
    }
}

/// Step a cursor forward by one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Step;

impl<'c, C: Cursor> Apply<&'c mut C> for Step {
    type Output = ();

    #[inline]
    fn apply(&mut self, cursor: &'c mut C) {
        cursor.step();
    }
}

/// Step a cursor backward by one.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepBack;

impl<'c, C: BidirectionalCursor> Apply<&'c mut C> for StepBack {
    type Output = ();

    #[inline]
    fn apply(&mut self, cursor: &'c mut C) {
        cursor.step_back();
    }
}

/// Move a cursor by a signed offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct Advance(pub Difference);

impl<'c, C: RandomAccessCursor> Apply<&'c mut C> for Advance {
    type Output = ();

    #[inline]
    fn apply(&mut self, cursor: &'c mut C) {
        cursor.advance(self.0);
    }
}

/// Swap the pointees of a pair of cursors through their own [`IterSwap`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Swap;

impl<'a, 'b, C: IterSwap> Apply<(&'a C, &'b C)> for Swap {
    type Output = ();

    #[inline]
    fn apply(&mut self, (a, b): (&'a C, &'b C)) {
        a.iter_swap(b);
    }
}
