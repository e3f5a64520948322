//! Cursor capability categories and their reduction.
//!
//! Every cursor advertises one of four categories through
//! [`Cursor::Category`][crate::cursor::Cursor::Category]. They are totally
//! ordered from weakest to strongest:
//!
//! | Category          | Guarantees                              |
//! | ---               | ---                                     |
//! | [`Input`]         | dereference, step forward, single pass  |
//! | [`Forward`]       | multi-pass, equality                    |
//! | [`Bidirectional`] | step backward                           |
//! | [`RandomAccess`]  | signed advance, difference, ordering    |
//!
//! A [`Zipper`][crate::Zipper] is only as strong as its weakest component.
//! The reduction that computes its category lives entirely in the type
//! system: [`Meet`] picks the weaker of two categories, and
//! [`CommonCategory`] folds it over a tuple of categories from the left.
//!
//! ```
//! use zipcursor::category::{Capability, Category, CommonCategory, Forward, RandomAccess};
//!
//! type Zipped = <(RandomAccess, Forward, RandomAccess) as CommonCategory>::Output;
//! assert_eq!(<Zipped as Category>::CAPABILITY, Capability::Forward);
//! ```

use core::fmt::Debug;
use core::hash::Hash;

use static_assertions::{assert_type_eq_all, const_assert};

/// The runtime mirror of a [`Category`] marker.
///
/// Variants are declared from weakest to strongest, so the derived `Ord`
/// matches the capability order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    /// Single-pass reading.
    Input,
    /// Multi-pass reading, stepping forward only.
    Forward,
    /// Stepping in both directions.
    Bidirectional,
    /// Constant-time jumps, distances and ordering.
    RandomAccess,
}

impl Capability {
    /// Returns the weaker of two capabilities.
    pub const fn meet(self, other: Self) -> Self {
        if (self as u8) <= (other as u8) {
            self
        } else {
            other
        }
    }

    /// Reduces a list of capabilities to the weakest among them.
    ///
    /// `RandomAccess` is the identity of [`meet`][Self::meet], so an empty
    /// list reduces to it.
    pub const fn reduce(capabilities: &[Capability]) -> Self {
        let mut acc = Capability::RandomAccess;
        let mut i = 0;
        while i < capabilities.len() {
            acc = acc.meet(capabilities[i]);
            i += 1;
        }
        acc
    }
}

/// A type-level capability tag.
///
/// Implemented only by the four zero-sized markers in this module.
pub trait Category: Copy + Default + Debug + Eq + Hash + 'static {
    /// The capability this marker stands for.
    const CAPABILITY: Capability;
}

macro_rules! category_markers {
    ($($(#[$meta:meta])* $Name:ident,)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $Name;

            impl Category for $Name {
                const CAPABILITY: Capability = Capability::$Name;
            }
        )+
    };
}

category_markers! {
    /// Marker for single-pass cursors.
    Input,
    /// Marker for multi-pass, forward-only cursors.
    Forward,
    /// Marker for cursors that can also step backward.
    Bidirectional,
    /// Marker for cursors supporting signed jumps, distances and ordering.
    RandomAccess,
}

/// Binary reduction of two categories to the weaker one.
pub trait Meet<Rhs: Category>: Category {
    /// The weaker of `Self` and `Rhs`.
    type Output: Category;
}

macro_rules! impl_meet {
    ($($Lhs:ident & $Rhs:ident => $Out:ident;)+) => {
        $(
            impl Meet<$Rhs> for $Lhs {
                type Output = $Out;
            }
        )+
    };
}

impl_meet! {
    Input & Input => Input;
    Forward & Forward => Forward;
    Bidirectional & Bidirectional => Bidirectional;
    RandomAccess & RandomAccess => RandomAccess;

    RandomAccess & Bidirectional => Bidirectional;
    RandomAccess & Forward => Forward;
    RandomAccess & Input => Input;
    Bidirectional & Forward => Forward;
    Bidirectional & Input => Input;
    Forward & Input => Input;

    Bidirectional & RandomAccess => Bidirectional;
    Forward & RandomAccess => Forward;
    Input & RandomAccess => Input;
    Forward & Bidirectional => Forward;
    Input & Bidirectional => Input;
    Input & Forward => Input;
}

/// N-ary reduction of a tuple of categories, folded from the left.
pub trait CommonCategory {
    /// The weakest category in the tuple.
    type Output: Category;
}

/// Shorthand for the common category of a tuple of categories.
pub type Common<T> = <T as CommonCategory>::Output;

impl<A: Category> CommonCategory for (A,) {
    type Output = A;
}

macro_rules! impl_common_category {
    ($A:ident $B:ident $($R:ident)*) => {
        impl<$A, $B, $($R),*> CommonCategory for ($A, $B, $($R,)*)
        where
            $A: Meet<$B>,
            $B: Category,
            (<$A as Meet<$B>>::Output, $($R,)*): CommonCategory,
        {
            type Output = <(<$A as Meet<$B>>::Output, $($R,)*) as CommonCategory>::Output;
        }
    };
}

impl_common_category! { A B }
impl_common_category! { A B C }
impl_common_category! { A B C D }
impl_common_category! { A B C D E }
impl_common_category! { A B C D E F }
impl_common_category! { A B C D E F G }
impl_common_category! { A B C D E F G H }
impl_common_category! { A B C D E F G H I }
impl_common_category! { A B C D E F G H I J }
impl_common_category! { A B C D E F G H I J K }
impl_common_category! { A B C D E F G H I J K L }

assert_type_eq_all!(Common<(RandomAccess, Forward)>, Forward);
assert_type_eq_all!(Common<(Forward, RandomAccess)>, Forward);
assert_type_eq_all!(Common<(RandomAccess, RandomAccess, Bidirectional)>, Bidirectional);
const_assert!(matches!(
    Capability::reduce(&[Capability::RandomAccess, Capability::Input, Capability::Forward]),
    Capability::Input
));
