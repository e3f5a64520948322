//! Cursors over common sequences, ready to be zipped.
//!
//! | Cursor          | Sequence              | Category                                      |
//! | ---             | ---                   | ---                                           |
//! | [`SliceCursor`] | `&[Cell<T>]`          | [`RandomAccess`][crate::category::RandomAccess] |
//! | `ListCursor`    | `&LinkedList<T>`      | [`Forward`][crate::category::Forward]         |
//! | [`InputCursor`] | any `Iterator`        | [`Input`][crate::category::Input]             |

mod input;
#[cfg(feature = "alloc")]
mod list;
mod slice;

pub use input::InputCursor;
#[cfg(feature = "alloc")]
pub use list::ListCursor;
pub use slice::{cells, SliceCursor};
