//! Operator sugar for random-access zippers.
//!
//! Implemented once for every `Zipper<T>` in terms of the
//! [`RandomAccessCursor`] primitives, so `+`, `-`, `+=`, `-=` and the
//! relational operators all agree with `advance`, `distance` and `precedes`.

use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use super::Zipper;
use crate::cursor::{Difference, RandomAccessCursor};

impl<T> AddAssign<Difference> for Zipper<T>
where
    Zipper<T>: RandomAccessCursor,
{
    fn add_assign(&mut self, n: Difference) {
        self.advance(n);
    }
}

impl<T> SubAssign<Difference> for Zipper<T>
where
    Zipper<T>: RandomAccessCursor,
{
    fn sub_assign(&mut self, n: Difference) {
        self.retreat(n);
    }
}

impl<T> Add<Difference> for Zipper<T>
where
    Zipper<T>: RandomAccessCursor,
{
    type Output = Self;

    fn add(mut self, n: Difference) -> Self {
        self.advance(n);
        self
    }
}

impl<T> Sub<Difference> for Zipper<T>
where
    Zipper<T>: RandomAccessCursor,
{
    type Output = Self;

    fn sub(mut self, n: Difference) -> Self {
        self.retreat(n);
        self
    }
}

impl<T> Sub for Zipper<T>
where
    Zipper<T>: RandomAccessCursor,
{
    type Output = Difference;

    fn sub(self, origin: Self) -> Difference {
        self.distance(&origin)
    }
}

/// Orders zippers by their first component.
///
/// This is deliberately coarser than equality: two zippers that agree on the
/// first component compare `Equal` here even if they differ elsewhere.
impl<T> PartialOrd for Zipper<T>
where
    Zipper<T>: RandomAccessCursor,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.precedes(other) {
            Some(Ordering::Less)
        } else if other.precedes(self) {
            Some(Ordering::Greater)
        } else {
            Some(Ordering::Equal)
        }
    }

    fn lt(&self, other: &Self) -> bool {
        self.precedes(other)
    }

    fn gt(&self, other: &Self) -> bool {
        other.precedes(self)
    }
}
