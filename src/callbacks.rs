//! Ordering and swapping behaviour injected into a `MinHeap`.

use std::mem;

/// Data/functions used to customise a `MinHeap`.
///
/// `less` must be a strict weak ordering over the elements in the heap.
/// `swap` must exchange the two values and be its own inverse; the heap moves
/// elements only through it, so it can be used to track element positions.
pub trait HeapCallbacks<T> {
    fn less(&mut self, lhs: &T, rhs: &T) -> bool;

    fn swap(&mut self, lhs: &mut T, rhs: &mut T) {
        mem::swap(lhs, rhs);
    }
}

impl<'c, T, C: HeapCallbacks<T> + ?Sized> HeapCallbacks<T> for &'c mut C {
    #[inline]
    fn less(&mut self, lhs: &T, rhs: &T) -> bool {
        (**self).less(lhs, rhs)
    }

    #[inline]
    fn swap(&mut self, lhs: &mut T, rhs: &mut T) {
        (**self).swap(lhs, rhs)
    }
}

/// Orders elements with their `Ord` implementation.
#[derive(Debug, Copy, Clone, Default)]
pub struct NaturalOrder;

impl<T: Ord> HeapCallbacks<T> for NaturalOrder {
    #[inline]
    fn less(&mut self, lhs: &T, rhs: &T) -> bool {
        lhs < rhs
    }
}

/// Closure as `less`, default swap.
#[derive(Debug, Copy, Clone)]
pub struct ByLess<F>(pub F);

impl<T, F> HeapCallbacks<T> for ByLess<F>
where F: FnMut(&T, &T) -> bool
{
    #[inline]
    fn less(&mut self, lhs: &T, rhs: &T) -> bool {
        (self.0)(lhs, rhs)
    }
}

/// Closures for both `less` and `swap`.
#[derive(Debug, Copy, Clone)]
pub struct Callbacks<L, S> {
    pub less: L,
    pub swap: S,
}

impl<T, L, S> HeapCallbacks<T> for Callbacks<L, S>
where L: FnMut(&T, &T) -> bool,
      S: FnMut(&mut T, &mut T),
{
    #[inline]
    fn less(&mut self, lhs: &T, rhs: &T) -> bool {
        (self.less)(lhs, rhs)
    }

    #[inline]
    fn swap(&mut self, lhs: &mut T, rhs: &mut T) {
        (self.swap)(lhs, rhs)
    }
}

pub fn by_less<T, F>(less: F) -> ByLess<F>
where F: FnMut(&T, &T) -> bool
{
    ByLess(less)
}

pub fn callbacks<T, L, S>(less: L, swap: S) -> Callbacks<L, S>
where L: FnMut(&T, &T) -> bool,
      S: FnMut(&mut T, &mut T),
{
    Callbacks {
        less,
        swap,
    }
}
