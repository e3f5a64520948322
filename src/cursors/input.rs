use core::fmt;

use crate::category::Input;
use crate::cursor::Cursor;

/// A single-pass cursor over any [`Iterator`].
///
/// The cursor holds the item it is positioned at; stepping pulls the next
/// one from the iterator. It cannot be copied, so it only supports the
/// [`Input`] operations.
///
/// Two input cursors compare equal exactly when both are exhausted. An
/// exhausted cursor therefore serves as the end of any input range, which
/// is what lets a zipper with an input component be driven to its end.
///
/// ```
/// use zipcursor::cursor::Cursor;
/// use zipcursor::cursors::InputCursor;
///
/// let mut cursor = InputCursor::new("ab".chars());
/// assert_eq!(cursor.get(), 'a');
/// cursor.step();
/// assert_eq!(cursor.get(), 'b');
/// cursor.step();
/// assert!(cursor.is_exhausted());
/// ```
pub struct InputCursor<I: Iterator> {
    iter: I,
    current: Option<I::Item>,
}

impl<I: Iterator> InputCursor<I> {
    /// A cursor at the first item of `iter`.
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        let mut iter = iter.into_iter();
        let current = iter.next();
        Self { iter, current }
    }

    /// Whether the underlying iterator has run out.
    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }
}

impl<I> fmt::Debug for InputCursor<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputCursor")
            .field("iter", &self.iter)
            .field("current", &self.current)
            .finish()
    }
}

impl<I: Iterator> PartialEq for InputCursor<I> {
    fn eq(&self, other: &Self) -> bool {
        self.is_exhausted() && other.is_exhausted()
    }
}

impl<I> Cursor for InputCursor<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Category = Input;
    type Value = I::Item;
    type Reference = I::Item;

    fn get(&self) -> I::Item {
        match &self.current {
            Some(item) => item.clone(),
            None => panic!("exhausted input cursor dereferenced"),
        }
    }

    fn read(&self) -> I::Item {
        self.get()
    }

    fn step(&mut self) {
        assert!(
            self.current.is_some(),
            "exhausted input cursor stepped forward"
        );
        self.current = self.iter.next();
    }
}
