use alloc::collections::linked_list::{self, LinkedList};
use core::fmt;
use core::ptr;

use crate::category::Forward;
use crate::cursor::{Cursor, ForwardCursor};

/// A forward cursor into a [`LinkedList`].
///
/// Two cursors are equal when they walk the same list and the same number
/// of elements remain after them. Dereferencing the end position panics.
pub struct ListCursor<'a, T> {
    list: &'a LinkedList<T>,
    iter: linked_list::Iter<'a, T>,
}

impl<'a, T> ListCursor<'a, T> {
    /// A cursor at the first element of `list`.
    pub fn begin(list: &'a LinkedList<T>) -> Self {
        Self {
            list,
            iter: list.iter(),
        }
    }

    /// A cursor one past the last element of `list`.
    ///
    /// This walks the list, so it takes linear time.
    pub fn end(list: &'a LinkedList<T>) -> Self {
        let mut iter = list.iter();
        while iter.next().is_some() {}
        Self { list, iter }
    }

    /// The number of elements from this position to the end of the list.
    pub fn remaining(&self) -> usize {
        self.iter.len()
    }
}

impl<T> Clone for ListCursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            iter: self.iter.clone(),
        }
    }
}

impl<T> fmt::Debug for ListCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListCursor")
            .field("remaining", &self.remaining())
            .finish()
    }
}

impl<T> PartialEq for ListCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.list, other.list) && self.remaining() == other.remaining()
    }
}

impl<T> Eq for ListCursor<'_, T> {}

impl<'a, T: Clone> Cursor for ListCursor<'a, T> {
    type Category = Forward;
    type Value = T;
    type Reference = &'a T;

    fn get(&self) -> &'a T {
        match self.iter.clone().next() {
            Some(value) => value,
            None => panic!("cursor dereferenced at the end of a linked list"),
        }
    }

    fn read(&self) -> T {
        self.get().clone()
    }

    fn step(&mut self) {
        if self.iter.next().is_none() {
            panic!("cursor stepped past the end of a linked list");
        }
    }
}

impl<T: Clone> ForwardCursor for ListCursor<'_, T> {}
