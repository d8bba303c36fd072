#![allow(clippy::style, clippy::bool_comparison, clippy::needless_lifetimes)]

//! Binary min-heap over a caller-supplied fixed-capacity slice, with the
//! ordering and swapping of elements supplied by the caller.
//!
//! ```
//! use minheap::{MinHeap, NaturalOrder};
//!
//! let mut storage = [0u32; 4];
//! let mut heap = MinHeap::new(&mut storage, NaturalOrder);
//! heap.push(3).unwrap();
//! heap.push(1).unwrap();
//! heap.push(2).unwrap();
//! assert_eq!(heap.peek(), Some(&1));
//! heap.pop().unwrap();
//! assert_eq!(heap.pop_min().unwrap(), 2);
//! ```

#[macro_use] extern crate log;

/// `warn!` which is only logged the first time the call site is reached.
macro_rules! warn_once {
    ($($arg:tt)*) => {{
        static WARNED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
        if !WARNED.swap(true, std::sync::atomic::Ordering::Relaxed) {
            warn!($($arg)*);
        }
    }};
}

pub mod callbacks;
pub mod heap;
pub mod heapsort;

pub use crate::callbacks::{by_less, callbacks, ByLess, Callbacks, HeapCallbacks, NaturalOrder};
pub use crate::heap::MinHeap;

use quick_error::quick_error;

quick_error! {
    #[derive(Debug, Clone, Copy, Eq, PartialEq)]
    pub enum Error {
        Overflow {
            display("Pushing on a full heap")
        }
        Underflow {
            display("Popping an empty heap")
        }
        OutOfBounds(index: usize, len: usize) {
            display("Index {} out of bounds for heap of length {}", index, len)
        }
    }
}

#[test]
fn test_error_display() {
    assert_eq!(Error::Overflow.to_string(), "Pushing on a full heap");
    assert_eq!(Error::OutOfBounds(4, 2).to_string(), "Index 4 out of bounds for heap of length 2");
}
