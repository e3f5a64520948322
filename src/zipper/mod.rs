pub(crate) mod each;
mod ops;
mod tuple;

/// A cursor that moves N component cursors in lockstep.
///
/// Dereferencing a `Zipper` yields the tuple of its components' references,
/// and every movement is applied to all components. This lets an algorithm
/// written against a single cursor operate jointly on N parallel sequences,
/// e.g. sorting one sequence by key while keeping another one paired with it.
///
/// A `Zipper` advertises the weakest category of its components and
/// implements exactly the capability traits that all of its components
/// implement: zipping a random-access cursor with a forward-only cursor gives
/// a [`ForwardCursor`][crate::cursor::ForwardCursor], and asking it for
/// [`advance`][crate::cursor::RandomAccessCursor::advance] is a compile
/// error.
///
/// # Comparisons
///
/// Equality compares **every** component. Difference (`a - b`) and ordering
/// (`a < b`) look at the **first** component only. Zippers built from
/// components that are moved in lockstep from aligned starting points never
/// observe the difference; zippers whose trailing components disagree can be
/// unequal yet unordered, in which case `partial_cmp` reports
/// [`Equal`][core::cmp::Ordering::Equal].
///
/// # Examples
///
/// ```
/// use zipcursor::cursor::{Cursor, IterSwap, RandomAccessCursor};
/// use zipcursor::cursors::{cells, SliceCursor};
///
/// let mut keys = [3, 1, 2];
/// let mut values = ["c", "a", "b"];
/// let (k, v) = (cells(&mut keys), cells(&mut values));
///
/// let first = zipcursor::zip((k, v));
/// let last = zipcursor::make_zipper((SliceCursor::end(k), SliceCursor::end(v)));
/// assert_eq!(last - first, 3);
/// assert_eq!(first.read_at(1), (1, "a"));
///
/// // A selection sort keyed on the first component; values follow their keys.
/// let mut i = first;
/// while i != last {
///     let mut min = i;
///     let mut j = i;
///     while j != last {
///         if j.read().0 < min.read().0 {
///             min = j;
///         }
///         j.step();
///     }
///     i.iter_swap(&min);
///     i.step();
/// }
/// assert_eq!(keys, [1, 2, 3]);
/// assert_eq!(values, ["a", "b", "c"]);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Zipper<T> {
    cursors: T,
}

impl<T> Zipper<T> {
    /// Wrap a tuple of cursors.
    pub const fn new(cursors: T) -> Self {
        Self { cursors }
    }

    /// The component cursors.
    pub fn components(&self) -> &T {
        &self.cursors
    }

    /// Unwrap the component cursors.
    pub fn into_inner(self) -> T {
        self.cursors
    }
}

impl<T: CursorTuple> Zipper<T> {
    /// The number of component cursors.
    pub const ARITY: usize = T::ARITY;
}

/// A tuple of 1 to 12 cursors.
pub trait CursorTuple {
    /// The number of cursors in the tuple.
    const ARITY: usize;
}

/// A tuple of 1 to 12 values that each convert into a cursor.
pub trait IntoCursors {
    /// The tuple of converted cursors.
    type Cursors: CursorTuple;

    /// Convert every element into its cursor.
    fn into_cursors(self) -> Self::Cursors;
}

/// Zip a tuple of cursors, or of sequences convertible into cursors, into a
/// single [`Zipper`].
///
/// Each element is converted with [`IntoCursor`][crate::cursor::IntoCursor], so cursors are stored as
/// passed, and sequences such as `&[Cell<T>]` start at their first element.
///
/// ```
/// use zipcursor::cursor::Cursor;
/// use zipcursor::cursors::cells;
///
/// let mut a = [1, 2];
/// let mut b = [1.5, 2.5];
/// let mut zipper = zipcursor::zip((cells(&mut a), cells(&mut b)));
/// zipper.step();
/// assert_eq!(zipper.read(), (2, 2.5));
/// ```
pub fn zip<T: IntoCursors>(cursors: T) -> Zipper<T::Cursors> {
    Zipper::new(cursors.into_cursors())
}

/// Zip a tuple of cursors, taken by value, into a single [`Zipper`].
///
/// Unlike [`zip`], no conversion takes place: every element must already be
/// a cursor.
pub fn make_zipper<T: CursorTuple>(cursors: T) -> Zipper<T> {
    Zipper::new(cursors)
}

/// Zip a list of cursors or sequences; shorthand for calling [`zip`] with
/// a tuple.
///
/// ```
/// use zipcursor::cursor::Cursor;
/// use zipcursor::cursors::{cells, InputCursor};
///
/// let mut a = [1, 2, 3];
/// let zipper = zipcursor::zip!(cells(&mut a), InputCursor::new("xyz".chars()));
/// assert_eq!(zipper.read(), (1, 'x'));
/// ```
#[macro_export]
macro_rules! zip {
    ($($cursor:expr),+ $(,)?) => {
        $crate::zip(($($cursor,)+))
    };
}
