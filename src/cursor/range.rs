use core::iter::FusedIterator;

use super::{BidirectionalCursor, Cursor, RandomAccessCursor};

/// The half-open span `[first, last)` between two cursors into the same
/// sequence, as an iterator over the values in between.
///
/// This is the bridge from cursors to the [`Iterator`] ecosystem, e.g. for
/// copying zipped values out into a collection. Any cursor with equality
/// will do, so a single-pass [`InputCursor`][crate::cursors::InputCursor]
/// can be drained up to an exhausted one.
///
/// # Examples
///
/// ```
/// use zipcursor::cursor::range;
/// use zipcursor::cursors::{cells, SliceCursor};
///
/// let mut a = [1, 2, 3];
/// let mut b = ['x', 'y', 'z'];
/// let (a, b) = (cells(&mut a), cells(&mut b));
///
/// let first = zipcursor::zip((a, b));
/// let last = zipcursor::make_zipper((SliceCursor::end(a), SliceCursor::end(b)));
/// let pairs: Vec<_> = range(first, last).collect();
/// assert_eq!(pairs, [(1, 'x'), (2, 'y'), (3, 'z')]);
/// ```
pub fn range<C: Cursor + PartialEq>(first: C, last: C) -> Range<C> {
    Range::new(first, last)
}

/// An iterator over the values between two cursors.
///
/// This `struct` is created by the [`range`] function and the
/// [`until`][super::ForwardCursor::until] method. See their documentation for more.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Range<C> {
    front: C,
    back: C,
}

impl<C: Cursor + PartialEq> Range<C> {
    pub(crate) fn new(first: C, last: C) -> Self {
        Self {
            front: first,
            back: last,
        }
    }

    /// Returns the remaining bounds.
    pub fn into_bounds(self) -> (C, C) {
        (self.front, self.back)
    }
}

impl<C: RandomAccessCursor> Range<C> {
    /// The number of values left in the range.
    pub fn len(&self) -> usize {
        let len = self.back.distance(&self.front);
        assert!(len >= 0, "range bounds are out of order");
        len as usize
    }

    /// Whether the range has been exhausted.
    pub fn is_empty(&self) -> bool {
        self.front == self.back
    }
}

impl<C: Cursor + PartialEq> Iterator for Range<C> {
    type Item = C::Value;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let value = self.front.read();
        self.front.step();
        Some(value)
    }
}

impl<C: BidirectionalCursor> DoubleEndedIterator for Range<C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.step_back();
        Some(self.back.read())
    }
}

impl<C: Cursor + PartialEq> FusedIterator for Range<C> {}
