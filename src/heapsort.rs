//! In-place heapsort built on `MinHeap`.
//!
//! The heap is ordered with the predicate reversed, so its root is the greatest
//! element; each pop then leaves that element in the slot the heap just gave up,
//! filling the slice from the back.

use crate::callbacks::by_less;
use crate::heap::MinHeap;

pub fn sort_by<T, F>(v: &mut [T], mut is_less: F)
    where F: FnMut(&T, &T) -> bool
{
    let len = v.len();
    let mut heap = MinHeap::from_unordered(v, len, by_less(|a: &T, b: &T| is_less(b, a)));
    while !heap.is_empty() {
        heap.remove_root();
    }
}

pub fn sort<T: std::cmp::Ord>(v: &mut [T]) {
    sort_by(v, |a, b| a < b);
}
