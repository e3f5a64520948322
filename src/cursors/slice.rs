use core::cell::Cell;
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::ptr;

use crate::category::RandomAccess;
use crate::cursor::{
    BidirectionalCursor, Cursor, Difference, ForwardCursor, IterSwap, RandomAccessCursor,
};

/// View a mutable slice as a slice of cells.
///
/// Any number of [`SliceCursor`]s can then share the slice while still
/// being able to swap its elements.
pub fn cells<T>(slice: &mut [T]) -> &[Cell<T>] {
    Cell::from_mut(slice).as_slice_of_cells()
}

/// A random-access cursor into a slice of cells.
///
/// Valid positions range over `0..=len`, where `len` is the one-past-the-end
/// position. Moving outside that range or dereferencing the end position
/// panics, just like indexing a slice out of bounds.
///
/// Two cursors compare equal only if they point into the same slice at the
/// same position; cursors into different slices are unordered.
///
/// Reading clones the element out of its cell, so elements need `Clone +
/// Default`: the value is taken out, cloned and put back, leaving the
/// default in the cell only while `clone` runs. Owned payloads such as
/// `String` can be zipped and sorted this way.
///
/// # Examples
///
/// ```
/// use zipcursor::cursor::{Cursor, RandomAccessCursor};
/// use zipcursor::cursors::{cells, SliceCursor};
///
/// let mut data = [10, 20, 30];
/// let (first, last) = SliceCursor::bounds(cells(&mut data));
///
/// assert_eq!(last - first, 3);
/// assert_eq!((first + 2).read(), 30);
/// assert_eq!(first.read_at(1), 20);
/// ```
pub struct SliceCursor<'a, T> {
    cells: &'a [Cell<T>],
    position: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// A cursor at the first element of `cells`.
    pub fn begin(cells: &'a [Cell<T>]) -> Self {
        Self { cells, position: 0 }
    }

    /// A cursor one past the last element of `cells`.
    pub fn end(cells: &'a [Cell<T>]) -> Self {
        Self {
            cells,
            position: cells.len(),
        }
    }

    /// The `[begin, end)` cursors of `cells`.
    pub fn bounds(cells: &'a [Cell<T>]) -> (Self, Self) {
        (Self::begin(cells), Self::end(cells))
    }

    /// A cursor at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is greater than `cells.len()`.
    pub fn at_position(cells: &'a [Cell<T>], position: usize) -> Self {
        assert!(
            position <= cells.len(),
            "cursor position {position} out of bounds for a sequence of length {}",
            cells.len()
        );
        Self { cells, position }
    }

    /// The index this cursor is positioned at.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The cells this cursor walks over.
    pub fn cells(&self) -> &'a [Cell<T>] {
        self.cells
    }

    fn same_sequence(&self, other: &Self) -> bool {
        ptr::eq(self.cells, other.cells)
    }

    fn cell(&self) -> &'a Cell<T> {
        match self.cells.get(self.position) {
            Some(cell) => cell,
            None => panic!(
                "cursor dereferenced at position {} in a sequence of length {}",
                self.position,
                self.cells.len()
            ),
        }
    }

    fn offset(&self, n: Difference) -> usize {
        match self.position.checked_add_signed(n) {
            Some(position) if position <= self.cells.len() => position,
            _ => panic!(
                "cursor at position {} moved by {n} out of a sequence of length {}",
                self.position,
                self.cells.len()
            ),
        }
    }
}

/// Puts a value taken out of a cell back on drop, including on unwind.
struct Restore<'a, T: Default>(&'a Cell<T>, T);

impl<T: Default> Drop for Restore<'_, T> {
    fn drop(&mut self) {
        self.0.set(core::mem::take(&mut self.1));
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("position", &self.position)
            .field("len", &self.cells.len())
            .finish()
    }
}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_sequence(other) && self.position == other.position
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> PartialOrd for SliceCursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.same_sequence(other) {
            Some(self.position.cmp(&other.position))
        } else {
            None
        }
    }
}

impl<'a, T: Clone + Default> Cursor for SliceCursor<'a, T> {
    type Category = RandomAccess;
    type Value = T;
    type Reference = &'a Cell<T>;

    #[inline]
    fn get(&self) -> &'a Cell<T> {
        self.cell()
    }

    #[inline]
    fn read(&self) -> T {
        let cell = self.cell();
        let held = Restore(cell, cell.take());
        held.1.clone()
    }

    #[inline]
    fn step(&mut self) {
        self.position = self.offset(1);
    }
}

impl<T: Clone + Default> ForwardCursor for SliceCursor<'_, T> {}

impl<T: Clone + Default> BidirectionalCursor for SliceCursor<'_, T> {
    #[inline]
    fn step_back(&mut self) {
        self.position = self.offset(-1);
    }
}

impl<T: Clone + Default> RandomAccessCursor for SliceCursor<'_, T> {
    #[inline]
    fn advance(&mut self, n: Difference) {
        self.position = self.offset(n);
    }

    fn distance(&self, origin: &Self) -> Difference {
        debug_assert!(
            self.same_sequence(origin),
            "distance between cursors into different sequences"
        );
        self.position as Difference - origin.position as Difference
    }

    fn precedes(&self, other: &Self) -> bool {
        debug_assert!(
            self.same_sequence(other),
            "ordering cursors into different sequences"
        );
        self.position < other.position
    }
}

impl<T> IterSwap for SliceCursor<'_, T> {
    fn iter_swap(&self, other: &Self) {
        self.cell().swap(other.cell());
    }
}

impl<T: Clone + Default> AddAssign<Difference> for SliceCursor<'_, T> {
    fn add_assign(&mut self, n: Difference) {
        self.advance(n);
    }
}

impl<T: Clone + Default> SubAssign<Difference> for SliceCursor<'_, T> {
    fn sub_assign(&mut self, n: Difference) {
        self.retreat(n);
    }
}

impl<T: Clone + Default> Add<Difference> for SliceCursor<'_, T> {
    type Output = Self;

    fn add(self, n: Difference) -> Self {
        self.advanced_by(n)
    }
}

impl<T: Clone + Default> Sub<Difference> for SliceCursor<'_, T> {
    type Output = Self;

    fn sub(self, n: Difference) -> Self {
        self.retreated_by(n)
    }
}

impl<T: Clone + Default> Sub for SliceCursor<'_, T> {
    type Output = Difference;

    fn sub(self, origin: Self) -> Difference {
        self.distance(&origin)
    }
}
