//! Element-wise combinators over fixed-size heterogeneous tuples.
//!
//! These are the building blocks of every [`Zipper`][crate::Zipper]
//! operation: borrow the components with [`TupleRef`], pair two borrowed
//! tuples up with [`TupleZip`], then run an operation over every element
//! with [`TupleMap`]. Elements are always visited from index 0 upward.

/// A unary operation that can be applied to values of type `Arg`.
///
/// A single operation type usually implements `Apply` for many argument
/// types, which is what lets [`TupleMap`] run it over a tuple whose
/// elements all have different types.
///
/// # Examples
///
/// ```
/// use zipcursor::tuple::{Apply, TupleMap};
///
/// struct Double;
///
/// impl Apply<u8> for Double {
///     type Output = u16;
///     fn apply(&mut self, arg: u8) -> u16 {
///         u16::from(arg) * 2
///     }
/// }
///
/// impl Apply<f32> for Double {
///     type Output = f32;
///     fn apply(&mut self, arg: f32) -> f32 {
///         arg * 2.0
///     }
/// }
///
/// assert_eq!((200u8, 1.5f32).map_each(Double), (400u16, 3.0f32));
/// ```
pub trait Apply<Arg> {
    /// The result of applying the operation to an `Arg`.
    type Output;

    /// Apply the operation.
    fn apply(&mut self, arg: Arg) -> Self::Output;
}

/// Apply an operation to every element of a tuple.
pub trait TupleMap<Op> {
    /// The tuple of per-element results.
    type Output;

    /// Apply `op` to each element in order, collecting the results.
    fn map_each(self, op: Op) -> Self::Output;
}

/// Borrow every element of a tuple individually.
pub trait TupleRef {
    /// `(&A, &B, ..)` for a tuple `(A, B, ..)`.
    type Refs<'a>
    where
        Self: 'a;

    /// `(&mut A, &mut B, ..)` for a tuple `(A, B, ..)`.
    type Muts<'a>
    where
        Self: 'a;

    /// Turn `&(A, B, ..)` into `(&A, &B, ..)`.
    fn as_refs(&self) -> Self::Refs<'_>;

    /// Turn `&mut (A, B, ..)` into `(&mut A, &mut B, ..)`.
    fn as_muts(&mut self) -> Self::Muts<'_>;
}

/// Pair up the elements of two tuples of the same length.
///
/// Only tuples of equal arity implement this for each other, so a length
/// mismatch is a type error.
///
/// ```
/// use zipcursor::tuple::TupleZip;
///
/// let pairs = (1, "a", 'x').zip_pairs((2.0, Some(3), ()));
/// assert_eq!(pairs, ((1, 2.0), ("a", Some(3)), ('x', ())));
/// ```
pub trait TupleZip<Rhs> {
    /// `((A, X), (B, Y), ..)` for `(A, B, ..)` zipped with `(X, Y, ..)`.
    type Output;

    /// Pair element `i` of `self` with element `i` of `rhs`.
    fn zip_pairs(self, rhs: Rhs) -> Self::Output;
}

/// Calculate the number of elements in a tuple from its type parameters.
macro_rules! tuple_len {
    (@count_one $F:ident) => (1);
    ($($F:ident,)*) => (0 $(+ crate::utils::tuple_len!(@count_one $F))*);
}
pub(crate) use tuple_len;

macro_rules! impl_tuple_combinators {
    ($($T:ident $U:ident $idx:tt)+) => {
        impl<Op, $($T),+> TupleMap<Op> for ($($T,)+)
        where $(
            Op: Apply<$T>,
        )+ {
            type Output = ($(<Op as Apply<$T>>::Output,)+);

            #[inline]
            fn map_each(self, mut op: Op) -> Self::Output {
                ($(op.apply(self.$idx),)+)
            }
        }

        impl<$($T),+> TupleRef for ($($T,)+) {
            type Refs<'a> = ($(&'a $T,)+) where Self: 'a;
            type Muts<'a> = ($(&'a mut $T,)+) where Self: 'a;

            #[inline]
            fn as_refs(&self) -> Self::Refs<'_> {
                ($(&self.$idx,)+)
            }

            #[inline]
            fn as_muts(&mut self) -> Self::Muts<'_> {
                ($(&mut self.$idx,)+)
            }
        }

        impl<$($T,)+ $($U,)+> TupleZip<($($U,)+)> for ($($T,)+) {
            type Output = ($(($T, $U),)+);

            #[inline]
            fn zip_pairs(self, rhs: ($($U,)+)) -> Self::Output {
                ($((self.$idx, rhs.$idx),)+)
            }
        }
    };
}

impl_tuple_combinators! { A Ua 0 }
impl_tuple_combinators! { A Ua 0 B Ub 1 }
impl_tuple_combinators! { A Ua 0 B Ub 1 C Uc 2 }
impl_tuple_combinators! { A Ua 0 B Ub 1 C Uc 2 D Ud 3 }
impl_tuple_combinators! { A Ua 0 B Ub 1 C Uc 2 D Ud 3 E Ue 4 }
impl_tuple_combinators! { A Ua 0 B Ub 1 C Uc 2 D Ud 3 E Ue 4 F Uf 5 }
impl_tuple_combinators! { A Ua 0 B Ub 1 C Uc 2 D Ud 3 E Ue 4 F Uf 5 G Ug 6 }
impl_tuple_combinators! { A Ua 0 B Ub 1 C Uc 2 D Ud 3 E Ue 4 F Uf 5 G Ug 6 H Uh 7 }
impl_tuple_combinators! { A Ua 0 B Ub 1 C Uc 2 D Ud 3 E Ue 4 F Uf 5 G Ug 6 H Uh 7 I Ui 8 }
impl_tuple_combinators! { A Ua 0 B Ub 1 C Uc 2 D Ud 3 E Ue 4 F Uf 5 G Ug 6 H Uh 7 I Ui 8 J Uj 9 }
impl_tuple_combinators! { A Ua 0 B Ub 1 C Uc 2 D Ud 3 E Ue 4 F Uf 5 G Ug 6 H Uh 7 I Ui 8 J Uj 9 K Uk 10 }
impl_tuple_combinators! { A Ua 0 B Ub 1 C Uc 2 D Ud 3 E Ue 4 F Uf 5 G Ug 6 H Uh 7 I Ui 8 J Uj 9 K Uk 10 L Ul 11 }

#[cfg(test)]
mod test {
    use super::*;

    /// Records the order in which elements are visited.
    struct Trace<'a>(&'a mut [usize; 3], usize);

    impl<T> Apply<T> for Trace<'_> {
        type Output = usize;

        fn apply(&mut self, _: T) -> usize {
            let slot = self.1;
            self.0[slot] = slot;
            self.1 += 1;
            slot
        }
    }

    struct Bump;

    impl Apply<&mut u32> for Bump {
        type Output = ();
        fn apply(&mut self, arg: &mut u32) {
            *arg += 1;
        }
    }

    impl Apply<&mut String> for Bump {
        type Output = ();
        fn apply(&mut self, arg: &mut String) {
            arg.push('!');
        }
    }

    #[test]
    fn map_visits_left_to_right() {
        let mut seen = [usize::MAX; 3];
        let out = ("a", 2u8, 3.0f64).map_each(Trace(&mut seen, 0));
        assert_eq!(out, (0, 1, 2));
        assert_eq!(seen, [0, 1, 2]);
    }

    #[test]
    fn map_over_mutable_borrows() {
        let mut tuple = (1u32, String::from("hi"), 7u32);
        tuple.as_muts().map_each(Bump);
        assert_eq!(tuple, (2, String::from("hi!"), 8));
    }

    #[test]
    fn refs_point_at_elements() {
        let tuple = (1u8, 'c');
        let (a, b) = tuple.as_refs();
        assert!(core::ptr::eq(a, &tuple.0));
        assert!(core::ptr::eq(b, &tuple.1));
    }

    #[test]
    fn zip_pairs_single() {
        assert_eq!((1,).zip_pairs(("one",)), ((1, "one"),));
    }

    #[test]
    fn tuple_len_counts() {
        assert_eq!(tuple_len!(A, B, C,), 3);
        assert_eq!(tuple_len!(), 0);
    }
}
