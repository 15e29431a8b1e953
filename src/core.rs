//! Core traits for sortkit.
//!
//! This module defines:
//! - [`Sequence`]: The trait a collection implements to be sorted in place.
//! - apply_permutation: Internal cycle-following rearrangement used by the linear-time sorts.

use std::collections::VecDeque;

/// A finite, random-access sequence of elements.
///
/// Positions are plain indices in `[0, len)`. Sorting never changes the
/// length of a sequence; elements only move through [`Sequence::swap_items`].
///
/// # Examples
///
/// Implementing for a fixed-capacity ring buffer:
///
/// ```
/// use sortkit::core::Sequence;
///
/// struct Ring {
///     slots: [u32; 4],
///     head: usize,
/// }
///
/// impl Sequence for Ring {
///     type Item = u32;
///
///     fn len(&self) -> usize {
///         self.slots.len()
///     }
///
///     fn get_item(&self, index: usize) -> &u32 {
///         &self.slots[(self.head + index) % 4]
///     }
///
///     fn swap_items(&mut self, a: usize, b: usize) {
///         self.slots.swap((self.head + a) % 4, (self.head + b) % 4);
///     }
/// }
///
/// let mut ring = Ring { slots: [1, 9, 4, 7], head: 2 };
/// sortkit::insertion_sort(&mut ring);
///
/// let sorted: Vec<u32> = (0..4).map(|i| *ring.get_item(i)).collect();
/// assert_eq!(sorted, vec![1, 4, 7, 9]);
/// ```
pub trait Sequence {
    /// The element type.
    type Item;

    /// Returns the number of elements in the sequence.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`.
    ///
    /// Panics if `index >= len()`.
    fn get_item(&self, index: usize) -> &Self::Item;

    /// Exchanges the elements at positions `a` and `b`.
    ///
    /// Panics if either position is out of bounds.
    fn swap_items(&mut self, a: usize, b: usize);
}

impl<T> Sequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        self.len()
    }

    fn get_item(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap_items(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_mut_slice()).
impl<T> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.len()
    }

    fn get_item(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap_items(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

// Indexing is O(1) across the ring, so every sort here accepts it.
impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.len()
    }

    fn get_item(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap_items(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }
}

/// Rearranges `data` so that position `i` receives the element that was at
/// `order[i]`.
///
/// `order` must be a permutation of `0..data.len()`. Each cycle is walked
/// once, carrying its first element forward, so only `len` swaps happen in
/// the worst case and no element is cloned.
pub(crate) fn apply_permutation<S: Sequence + ?Sized>(data: &mut S, mut order: Vec<usize>) {
    debug_assert_eq!(order.len(), data.len());

    for start in 0..order.len() {
        let mut current = start;
        while order[current] != start {
            let next = order[current];
            data.swap_items(current, next);
            order[current] = current; // placed
            current = next;
        }
        order[current] = current;
    }
}
