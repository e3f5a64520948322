use super::each::{Advance, Get, Read, Step, StepBack, Swap};
use super::{CursorTuple, IntoCursors, Zipper};
use crate::category::CommonCategory;
use crate::cursor::{
    BidirectionalCursor, Cursor, Difference, ForwardCursor, IntoCursor, IterSwap,
    RandomAccessCursor,
};
use crate::utils::tuple::{TupleMap, TupleRef, TupleZip};

use core::fmt;

macro_rules! impl_zipper_tuple {
    ($($C:ident)+) => {
        impl<$($C),+> CursorTuple for ($($C,)+)
        where $(
            $C: Cursor,
        )+ {
            const ARITY: usize = crate::utils::tuple_len!($($C,)+);
        }

        impl<$($C),+> IntoCursors for ($($C,)+)
        where $(
            $C: IntoCursor,
        )+ {
            type Cursors = ($($C::IntoCursor,)+);

            fn into_cursors(self) -> Self::Cursors {
                let ($($C,)+) = self;
                ($($C.into_cursor(),)+)
            }
        }

        impl<$($C),+> fmt::Debug for Zipper<($($C,)+)>
        where $(
            $C: fmt::Debug,
        )+ {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let ($($C,)+) = &self.cursors;
                f.debug_tuple("Zipper")
                    $(.field($C))+
                    .finish()
            }
        }

        impl<$($C),+> Cursor for Zipper<($($C,)+)>
        where
            $($C: Cursor,)+
            ($(<$C as Cursor>::Category,)+): CommonCategory,
        {
            type Category = <($(<$C as Cursor>::Category,)+) as CommonCategory>::Output;
            type Value = ($(<$C as Cursor>::Value,)+);
            type Reference = ($(<$C as Cursor>::Reference,)+);

            #[inline]
            fn get(&self) -> Self::Reference {
                self.cursors.as_refs().map_each(Get)
            }

            #[inline]
            fn read(&self) -> Self::Value {
                self.cursors.as_refs().map_each(Read)
            }

            #[inline]
            fn step(&mut self) {
                self.cursors.as_muts().map_each(Step);
            }
        }

        impl<$($C),+> ForwardCursor for Zipper<($($C,)+)>
        where
            $($C: ForwardCursor,)+
            ($(<$C as Cursor>::Category,)+): CommonCategory,
        {}

        impl<$($C),+> BidirectionalCursor for Zipper<($($C,)+)>
        where
            $($C: BidirectionalCursor,)+
            ($(<$C as Cursor>::Category,)+): CommonCategory,
        {
            #[inline]
            fn step_back(&mut self) {
                self.cursors.as_muts().map_each(StepBack);
            }
        }

        impl<$($C),+> RandomAccessCursor for Zipper<($($C,)+)>
        where
            $($C: RandomAccessCursor,)+
            ($(<$C as Cursor>::Category,)+): CommonCategory,
        {
            #[inline]
            fn advance(&mut self, n: Difference) {
                self.cursors.as_muts().map_each(Advance(n));
            }

            #[inline]
            fn distance(&self, origin: &Self) -> Difference {
                self.cursors.0.distance(&origin.cursors.0)
            }

            #[inline]
            fn precedes(&self, other: &Self) -> bool {
                self.cursors.0.precedes(&other.cursors.0)
            }
        }

        impl<$($C),+> IterSwap for Zipper<($($C,)+)>
        where $(
            $C: IterSwap,
        )+ {
            fn iter_swap(&self, other: &Self) {
                self.cursors
                    .as_refs()
                    .zip_pairs(other.cursors.as_refs())
                    .map_each(Swap);
            }
        }
    };
}

impl_zipper_tuple! { A }
impl_zipper_tuple! { A B }
impl_zipper_tuple! { A B C }
impl_zipper_tuple! { A B C D }
impl_zipper_tuple! { A B C D E }
impl_zipper_tuple! { A B C D E F }
impl_zipper_tuple! { A B C D E F G }
impl_zipper_tuple! { A B C D E F G H }
impl_zipper_tuple! { A B C D E F G H I }
impl_zipper_tuple! { A B C D E F G H I J }
impl_zipper_tuple! { A B C D E F G H I J K }
impl_zipper_tuple! { A B C D E F G H I J K L }
