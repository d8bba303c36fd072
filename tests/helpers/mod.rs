#![allow(dead_code)]

use minheap::HeapCallbacks;

/// Integer ordering which counts the callbacks made through it.
#[derive(Default)]
pub struct Counting {
    pub compares: usize,
    pub swaps: usize,
}

impl HeapCallbacks<i64> for Counting {
    fn less(&mut self, lhs: &i64, rhs: &i64) -> bool {
        self.compares += 1;
        lhs < rhs
    }

    fn swap(&mut self, lhs: &mut i64, rhs: &mut i64) {
        self.swaps += 1;
        std::mem::swap(lhs, rhs);
    }
}

/// Checks heap order directly on the storage, independent of `MinHeap::is_heap`.
pub fn assert_heap_order(data: &[i64]) {
    for child in 1..data.len() {
        let parent = (child - 1) / 2;
        assert!(
            data[parent] <= data[child],
            "{} at {} is less than its parent {} at {}: {:?}",
            data[child], child, data[parent], parent, data,
        );
    }
}

pub fn sorted(data: &[i64]) -> Vec<i64> {
    let mut out = data.to_vec();
    out.sort();
    out
}
