//! Utilities shared by the zipper implementations.

pub(crate) mod tuple;

pub(crate) use tuple::tuple_len;
