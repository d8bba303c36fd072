//! Binary min-heap over caller-owned storage.
//!
//! `MinHeap` borrows a slice and keeps its first `len` elements in heap order;
//! the rest of the slice is spare capacity. The heap never allocates, all
//! element movement goes through `HeapCallbacks::swap`.

use std::fmt;

use crate::callbacks::HeapCallbacks;
use crate::Error;

pub struct MinHeap<'a, T, C> {
    data: &'a mut [T],
    len: usize,
    callbacks: C,
}

impl<'a, T, C: HeapCallbacks<T>> MinHeap<'a, T, C> {
    /// Creates an empty heap which can hold `data.len()` elements.
    pub fn new(data: &'a mut [T], callbacks: C) -> MinHeap<'a, T, C> {
        MinHeap {
            data,
            len: 0,
            callbacks,
        }
    }

    /// Uses the first `len` elements of `data` as the heap contents.
    /// They are assumed to already be in heap order; use `from_unordered`
    /// (or call `heapify_all`) otherwise.
    pub fn with_len(data: &'a mut [T], len: usize, callbacks: C) -> MinHeap<'a, T, C> {
        assert!(len <= data.len(), "Heap length {} over capacity {}", len, data.len());
        MinHeap {
            data,
            len,
            callbacks,
        }
    }

    pub fn from_unordered(data: &'a mut [T], len: usize, callbacks: C) -> MinHeap<'a, T, C> {
        let mut heap = MinHeap::with_len(data, len, callbacks);
        heap.heapify_all();
        heap
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.data.len()
    }

    pub fn peek(&self) -> Option<&T> {
        self.data[..self.len].first()
    }

    pub fn callbacks(&self) -> &C {
        &self.callbacks
    }

    pub fn callbacks_mut(&mut self) -> &mut C {
        &mut self.callbacks
    }

    /// Swaps two distinct slots, `a < b`.
    #[inline]
    fn swap_slots(&mut self, a: usize, b: usize) {
        debug_assert!(a < b);
        let (low, high) = self.data.split_at_mut(b);
        self.callbacks.swap(&mut low[a], &mut high[0]);
    }

    /// Sifts the element at `pos` down the heap.
    ///
    /// Both subtrees of `pos` must already be in heap order. Follows the
    /// smaller children all the way to a leaf, then backtracks to the position
    /// the element belongs at; the element is moved there with one swap per level.
    pub fn heapify(&mut self, pos: usize) {
        let len = self.len;
        if pos >= len {
            return;
        }
        let mut i = pos;

        // Find the sift-down path all the way to the leaves.
        while i * 2 + 2 < len {
            let left = i * 2 + 1;
            let right = i * 2 + 2;
            i = if self.callbacks.less(&self.data[left], &self.data[right]) {
                left
            } else {
                right
            };
        }

        // Last leaf without a sibling
        if i * 2 + 2 == len {
            i = i * 2 + 1;
        }

        // Backtrack to the correct location.
        while i != pos && self.callbacks.less(&self.data[pos], &self.data[i]) {
            i = (i - 1) / 2;
        }

        // Rotate the element into `dest`, moving each element on the path one level up.
        let dest = i;
        while i != pos {
            i = (i - 1) / 2;
            self.swap_slots(i, dest);
        }
    }

    /// Floyd's heap construction, O(len).
    pub fn heapify_all(&mut self) {
        trace!("Heapifying {} elements", self.len);
        for i in (0..self.len / 2).rev() {
            self.heapify(i);
        }
    }

    /// Sifts the element at `pos` up towards the root.
    ///
    /// Moves the element past any parent that isn't strictly less than it,
    /// so equal elements end up above older ones.
    pub fn sift_up(&mut self, pos: usize) -> Result<(), Error> {
        if pos >= self.len {
            warn_once!("Sifting up {} outside heap of length {}", pos, self.len);
            return Err(Error::OutOfBounds(pos, self.len));
        }
        self.sift_up_from(pos);
        Ok(())
    }

    fn sift_up_from(&mut self, pos: usize) {
        let mut pos = pos;
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.callbacks.less(&self.data[parent], &self.data[pos]) {
                break;
            }
            self.swap_slots(parent, pos);
            pos = parent;
        }
    }

    /// Adds an element to the heap, O(log len).
    ///
    /// If the heap is full, the element is dropped and `Error::Overflow` is returned.
    pub fn push(&mut self, element: T) -> Result<(), Error> {
        if self.is_full() {
            warn_once!("Pushing on a full heap (capacity {})", self.capacity());
            return Err(Error::Overflow);
        }
        let pos = self.len;
        self.data[pos] = element;
        self.len += 1;
        self.sift_up_from(pos);
        Ok(())
    }

    /// Removes the minimum element, O(log len).
    ///
    /// The removed element is not dropped; it is left in the slot at index `len()`
    /// (the slot the heap just gave up). Use `pop_min` to get it back directly.
    pub fn pop(&mut self) -> Result<(), Error> {
        if self.is_empty() {
            warn_once!("Popping an empty heap");
            return Err(Error::Underflow);
        }
        self.remove_root();
        Ok(())
    }

    /// `pop` without the empty check.
    pub(crate) fn remove_root(&mut self) {
        debug_assert!(self.len != 0);
        self.len -= 1;
        // Place last element at the root and then sift down.
        if self.len != 0 {
            self.swap_slots(0, self.len);
            self.heapify(0);
        }
    }

    /// Removes the minimum element and returns a copy of it.
    pub fn pop_min(&mut self) -> Result<T, Error>
    where T: Clone
    {
        self.pop()?;
        Ok(self.data[self.len].clone())
    }

    /// Replaces the minimum element with `element`.
    ///
    /// Does a single sift, so this is cheaper than `pop` followed by `push`.
    /// Returns the element that was replaced.
    pub fn pop_push(&mut self, element: T) -> Result<T, Error> {
        if self.is_empty() {
            warn_once!("Replacing root of an empty heap");
            return Err(Error::Underflow);
        }
        let old = std::mem::replace(&mut self.data[0], element);
        self.heapify(0);
        Ok(old)
    }

    /// Removes the element at `index`, O(log len).
    ///
    /// As with `pop`, the removed element is left at index `len()`.
    pub fn delete(&mut self, index: usize) -> Result<(), Error> {
        if index >= self.len {
            warn_once!("Deleting {} outside heap of length {}", index, self.len);
            return Err(Error::OutOfBounds(index, self.len));
        }
        self.len -= 1;
        if index != self.len {
            self.swap_slots(index, self.len);
            self.sift_up_from(index);
            self.heapify(index);
        }
        Ok(())
    }

    /// Checks that every element is not less than its parent.
    pub fn is_heap(&mut self) -> bool {
        for child in 1..self.len {
            let parent = (child - 1) / 2;
            if self.callbacks.less(&self.data[child], &self.data[parent]) {
                return false;
            }
        }
        true
    }
}

impl<'a, T: fmt::Debug, C> fmt::Debug for MinHeap<'a, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("capacity", &self.data.len())
            .field("elements", &&self.data[..self.len])
            .finish()
    }
}
