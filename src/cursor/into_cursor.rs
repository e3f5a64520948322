use core::cell::Cell;

use super::Cursor;
use crate::cursors::SliceCursor;

#[cfg(feature = "alloc")]
use crate::cursors::ListCursor;
#[cfg(feature = "alloc")]
use alloc::collections::LinkedList;

/// Conversion into a [`Cursor`].
///
/// By implementing `IntoCursor` for a type, you define which cursor
/// [`zip`][crate::zip] starts from when handed that type. Sequences convert
/// into a cursor at their first element; cursors convert into themselves.
pub trait IntoCursor {
    /// Which kind of cursor are we turning this into?
    type IntoCursor: Cursor;

    /// Creates a cursor from a value.
    fn into_cursor(self) -> Self::IntoCursor;
}

impl<C: Cursor> IntoCursor for C {
    type IntoCursor = C;

    #[inline]
    fn into_cursor(self) -> C {
        self
    }
}

impl<'a, T: Clone + Default> IntoCursor for &'a [Cell<T>] {
    type IntoCursor = SliceCursor<'a, T>;

    #[inline]
    fn into_cursor(self) -> Self::IntoCursor {
        SliceCursor::begin(self)
    }
}

#[cfg(feature = "alloc")]
impl<'a, T: Clone> IntoCursor for &'a LinkedList<T> {
    type IntoCursor = ListCursor<'a, T>;

    #[inline]
    fn into_cursor(self) -> Self::IntoCursor {
        ListCursor::begin(self)
    }
}
