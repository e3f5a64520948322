use std::collections::LinkedList;

use proptest::prelude::*;
use static_assertions::{assert_impl_all, assert_not_impl_any};
use zipcursor::cursor::{
    range, BidirectionalCursor, Cursor, Difference, ForwardCursor, IterSwap, RandomAccessCursor,
};
use zipcursor::cursors::{cells, InputCursor, ListCursor, SliceCursor};
use zipcursor::{make_zipper, zip, Zipper};

/// A generic quicksort written against a single random-access cursor. It
/// knows nothing about zippers.
fn sort_by<C, F>(first: C, last: C, less: &mut F)
where
    C: RandomAccessCursor + IterSwap,
    F: FnMut(&C::Value, &C::Value) -> bool,
{
    let len = last.distance(&first);
    if len < 2 {
        return;
    }
    let pivot = last.retreated_by(1);
    let pivot_value = pivot.read();
    let mut store = first.clone();
    let mut cursor = first.clone();
    while cursor != pivot {
        if less(&cursor.read(), &pivot_value) {
            cursor.iter_swap(&store);
            store.step();
        }
        cursor.step();
    }
    store.iter_swap(&pivot);
    sort_by(first, store.clone(), less);
    sort_by(store.advanced_by(1), last, less);
}

fn is_sorted_by<C, F>(first: C, last: C, mut less: F) -> bool
where
    C: ForwardCursor,
    F: FnMut(&C::Value, &C::Value) -> bool,
{
    let values: Vec<_> = range(first, last).collect();
    values.windows(2).all(|w| !less(&w[1], &w[0]))
}

#[test]
fn sort_pairs_by_first_key() {
    let mut a = [3, 1, 2];
    let mut b = [30, 10, 20];
    {
        let (a, b) = (cells(&mut a), cells(&mut b));
        let first = zip((a, b));
        let last = make_zipper((SliceCursor::end(a), SliceCursor::end(b)));
        sort_by(first, last, &mut |x, y| x.0 < y.0);
    }
    assert_eq!(a, [1, 2, 3]);
    assert_eq!(b, [10, 20, 30]);
}

#[test]
fn sort_pairs_by_whole_tuple() {
    let mut a = [2, 1, 2, 1];
    let mut b = ['b', 'z', 'a', 'y'];
    {
        let (a, b) = (cells(&mut a), cells(&mut b));
        let first = zip((a, b));
        let last = first + 4;
        sort_by(first, last, &mut |x, y| x < y);
        assert!(is_sorted_by(first, last, |x, y| x < y));
    }
    assert_eq!(a, [1, 1, 2, 2]);
    assert_eq!(b, ['y', 'z', 'a', 'b']);
}

#[test]
fn sort_three_sequences_nested() {
    let mut v = [0.5, 0.25, 0.75];
    let mut w = [5u8, 25, 75];
    let mut x = ["half", "quarter", "three quarters"];
    {
        let (v, w, x) = (cells(&mut v), cells(&mut w), cells(&mut x));
        let first = zip((v, zip((w, x))));
        let last = zip((SliceCursor::end(v), zip((SliceCursor::end(w), SliceCursor::end(x)))));
        sort_by(first, last, &mut |a, b| a.0 < b.0);
    }
    assert_eq!(v, [0.25, 0.5, 0.75]);
    assert_eq!(w, [25, 5, 75]);
    assert_eq!(x, ["quarter", "half", "three quarters"]);
}

#[test]
fn sort_three_sequences_flat() {
    let mut v = [3i64, -1, 2, 0];
    let mut w = [3u32, 1, 2, 0];
    let mut x = ['d', 'b', 'c', 'a'];
    {
        let first = zip((cells(&mut v), cells(&mut w), cells(&mut x)));
        let last = first + 4;
        sort_by(first, last, &mut |a, b| a.0 < b.0);
    }
    assert_eq!(v, [-1, 0, 2, 3]);
    assert_eq!(w, [1, 0, 2, 3]);
    assert_eq!(x, ['b', 'a', 'c', 'd']);
}

#[test]
fn copy_zipped_values_out() {
    let mut v = [1.0, 2.0, 3.0];
    let mut w = [4.0, 5.0, 6.0];
    let (v, w) = (cells(&mut v), cells(&mut w));
    let first = zip((v, w));
    let last = zip((SliceCursor::end(v), SliceCursor::end(w)));

    let pairs: Vec<(f64, f64)> = first.until(last).collect();
    assert_eq!(pairs, [(1.0, 4.0), (2.0, 5.0), (3.0, 6.0)]);
    assert_eq!(range(first, last).len(), 3);
    itertools::assert_equal(range(first, last).rev(), pairs.into_iter().rev());
}

#[test]
fn heterogeneous_capabilities() {
    type Mixed = Zipper<(SliceCursor<'static, f64>, ListCursor<'static, f64>)>;
    assert_impl_all!(Mixed: ForwardCursor);
    assert_not_impl_any!(Mixed: BidirectionalCursor, RandomAccessCursor);

    let mut v = [1.0, 2.0, 3.0];
    let list: LinkedList<f64> = [1.0, 2.0, 3.0].into_iter().collect();
    let v = cells(&mut v);

    let mut z = zip((v, &list));
    let mut sv = SliceCursor::begin(v);
    let mut sl = ListCursor::begin(&list);
    for _ in 0..3 {
        assert_eq!(z.read(), (sv.read(), sl.read()));
        let (x, y) = z.get();
        assert_eq!(x.get(), *y);
        z.step();
        sv.step();
        sl.step();
    }
    assert_eq!(z, make_zipper((SliceCursor::end(v), ListCursor::end(&list))));
}

#[test]
fn copy_out_through_an_input_component() {
    type Lines = InputCursor<std::vec::IntoIter<String>>;
    assert_impl_all!(Zipper<(SliceCursor<'static, u32>, Lines)>: Cursor, PartialEq);
    assert_not_impl_any!(Zipper<(SliceCursor<'static, u32>, Lines)>: ForwardCursor);

    let mut numbers = [1u32, 2, 3];
    let numbers = cells(&mut numbers);
    let lines: Vec<String> = ["one", "two", "three"].map(String::from).into();

    let first = zip((numbers, InputCursor::new(lines)));
    let last = make_zipper((SliceCursor::end(numbers), InputCursor::new(Vec::new())));
    let pairs: Vec<(u32, String)> = range(first, last).collect();
    assert_eq!(
        pairs,
        [(1, "one".to_owned()), (2, "two".to_owned()), (3, "three".to_owned())]
    );
}

#[test]
fn sort_keys_with_owned_payload() {
    let mut keys = [3, 1, 2];
    let mut names: Vec<String> = ["c", "a", "b"].map(String::from).into();
    {
        let first = zip((cells(&mut keys), cells(&mut names)));
        let last = first + 3;
        sort_by(first, last, &mut |x, y| x.0 < y.0);
        assert_eq!(first.read_at(0), (1, "a".to_owned()));
    }
    assert_eq!(keys, [1, 2, 3]);
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn list_cursors_into_different_lists_differ() {
    let left: LinkedList<i32> = [1, 2].into_iter().collect();
    let right: LinkedList<i32> = [9, 9].into_iter().collect();
    assert_ne!(ListCursor::begin(&left), ListCursor::begin(&right));
    assert_ne!(ListCursor::end(&left), ListCursor::end(&right));
    assert_eq!(ListCursor::begin(&left), ListCursor::begin(&left));
}

#[test]
fn equality_and_ordering_disagree() {
    let mut a = [1, 2, 3];
    let mut b = [1, 2, 3];
    let (a, b) = (cells(&mut a), cells(&mut b));
    let x = make_zipper((SliceCursor::begin(a), SliceCursor::begin(b)));
    let y = make_zipper((SliceCursor::begin(a), SliceCursor::at_position(b, 1)));

    assert!(!x.precedes(&y) && !y.precedes(&x));
    assert_eq!(x.partial_cmp(&y), Some(std::cmp::Ordering::Equal));
    assert_eq!(x - y, 0);
    assert_ne!(x, y);
}

proptest! {
    #[test]
    fn lockstep_advance(values in prop::collection::vec(any::<(i32, u16)>(), 1..64), n in 0usize..64) {
        let n = n % (values.len() + 1);
        let mut a: Vec<i32> = values.iter().map(|v| v.0).collect();
        let mut b: Vec<u16> = values.iter().map(|v| v.1).collect();
        let (a, b) = (cells(&mut a), cells(&mut b));

        let mut z = zip((a, b));
        z += n as Difference;
        let (za, zb) = *z.components();
        prop_assert_eq!(za, SliceCursor::begin(a) + n as Difference);
        prop_assert_eq!(zb, SliceCursor::begin(b) + n as Difference);
        if n < values.len() {
            prop_assert_eq!(z.read(), values[n]);
        }
    }

    #[test]
    fn random_access_algebra(len in 1usize..64, n in 0usize..64) {
        let n = (n % (len + 1)) as Difference;
        let mut a = vec![0u8; len];
        let mut b = vec![0i64; len];
        let (a, b) = (cells(&mut a), cells(&mut b));
        let first = zip((a, b));

        prop_assert_eq!((first + n) - n, first);
        prop_assert_eq!((first + n) - first, n);
        prop_assert_eq!(first - (first + n), -n);

        let mid = first + n;
        let lt = first < mid;
        let eq = first == mid;
        let gt = first > mid;
        prop_assert_eq!(u8::from(lt) + u8::from(eq) + u8::from(gt), 1);
    }

    #[test]
    fn indexed_access_leaves_cursor(values in prop::collection::vec(any::<(u8, char)>(), 1..32), n in 0usize..32) {
        let n = n % values.len();
        let mut a: Vec<u8> = values.iter().map(|v| v.0).collect();
        let mut b: Vec<char> = values.iter().map(|v| v.1).collect();
        let first = zip((cells(&mut a), cells(&mut b)));
        let before = first;

        prop_assert_eq!(first.read_at(n as Difference), (first + n as Difference).read());
        prop_assert_eq!(first.read_at(n as Difference), values[n]);
        prop_assert_eq!(first, before);
    }

    #[test]
    fn swap_twice_restores(values in prop::collection::vec(any::<(u32, bool)>(), 2..32), i in 0usize..32, j in 0usize..32) {
        let (i, j) = (i % values.len(), j % values.len());
        let mut a: Vec<u32> = values.iter().map(|v| v.0).collect();
        let mut b: Vec<bool> = values.iter().map(|v| v.1).collect();
        {
            let first = zip((cells(&mut a), cells(&mut b)));
            let x = first + i as Difference;
            let y = first + j as Difference;
            x.iter_swap(&y);
            prop_assert_eq!(x.read(), values[j]);
            prop_assert_eq!(y.read(), values[i]);
            prop_assert_eq!(x - first, i as Difference);
            y.iter_swap(&x);
        }
        prop_assert_eq!(a.len(), values.len());
        let restored: Vec<(u32, bool)> = a.into_iter().zip(b).collect();
        prop_assert_eq!(restored, values);
    }

    #[test]
    fn sort_keeps_pairs(values in prop::collection::vec(any::<(i16, u64)>(), 0..48)) {
        let mut a: Vec<i16> = values.iter().map(|v| v.0).collect();
        let mut b: Vec<u64> = values.iter().map(|v| v.1).collect();
        {
            let first = zip((cells(&mut a), cells(&mut b)));
            let last = first + values.len() as Difference;
            sort_by(first, last, &mut |x, y| x.0 < y.0);
        }
        let sorted: Vec<(i16, u64)> = a.into_iter().zip(b).collect();
        prop_assert!(sorted.windows(2).all(|w| w[0].0 <= w[1].0));

        let mut expected = values.clone();
        expected.sort();
        let mut actual = sorted;
        actual.sort();
        prop_assert_eq!(actual, expected);
    }
}
