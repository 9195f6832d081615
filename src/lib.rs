// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A fixed-capacity priority queue implemented with a binary min-heap.
//!
//! A `MinHeap` reserves its storage once, at construction, and refuses insertions beyond that
//! capacity instead of growing. It is meant as a building block for algorithms such as heap
//! sort or bounded priority scheduling.
//!
//! Insertion and removal of the smallest item are `O(log n)`. Retrieving the smallest item is
//! `O(1)`. Building a heap from an existing vector is `O(n)`.

use std::fmt::{self, Debug, Display};
use std::iter;
use std::slice;
use std::vec;

use compare::{natural, Compare, Natural};

mod error;

pub use crate::error::HeapError;

// A binary heap is a complete binary tree where every node is less than or
// equal to each of its children. This implies that the min item is always
// the root.
//
// The tree is stored level by level in a Vec without any links. Here's an
// example of a tree with 10 items where the numbers represent the *offsets*
// in the array:
//
//              0
//           /     \
//         1         2
//       /   \     /   \
//      3     4   5     6
//     / \   /
//    7   8 9
//
// The children of node `i` live at `2i + 1` and `2i + 2`, its parent at
// `(i - 1) / 2`. Every level except the last is full and the last one is
// filled from the left, so offsets `0..len` are always occupied.

/// Returns index of the parent node.
fn parent(x: usize) -> usize {
    debug_assert!(x > 0);
    (x - 1) / 2
}

/// Returns index of the left child. The right child, if any, follows it.
fn left_child(x: usize) -> usize {
    2 * x + 1
}

/// The first `v.len() - 1` items are considered a valid heap and the
/// last item is to be inserted. Moves it toward the root while it is not
/// greater than its parent.
fn sift_up<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    debug_assert!(!v.is_empty());
    let mut node = v.len() - 1;
    while node > 0 {
        let par = parent(node);
        if cmp.compares_gt(&v[node], &v[par]) {
            return; // ordering holds
        }
        v.swap(node, par);
        node = par;
    }
}

/// Both subtrees of `node` are valid heaps but `node` itself may be larger
/// than one of its children. Pushes it toward the leaves by swapping it with
/// its smaller child until it is no larger than both children.
///
/// Ties go to the node itself first (no swap), then to the left child.
fn sift_down<T, C: Compare<T>>(v: &mut [T], mut node: usize, cmp: &C) {
    loop {
        let left = left_child(node);
        if v.len() <= left { return; } // Leaf. We're done.
        let right = left + 1;
        // Pick the child with the lowest item
        let ch = if right < v.len() && cmp.compares_lt(&v[right], &v[left]) { right }
                 else { left };
        if cmp.compares_le(&v[node], &v[ch]) {
            return;
        }
        v.swap(node, ch);
        node = ch;
    }
}

/// Turns an arbitrary slice into a valid heap. Internal nodes are repaired
/// from the last one back to the root so that every `sift_down` starts above
/// subtrees that are heaps already. This takes `O(n)` time.
fn build_heap<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    for node in (0..v.len() / 2).rev() {
        sift_down(v, node, cmp);
    }
}

/// Sorts a slice in ascending order with heap sort.
///
/// The sort is in place and not stable. It runs in `O(n log n)` time.
///
/// # Examples
///
/// ```
/// let mut v = [5, 3, 8, 1, 9, 2];
/// bounded_min_heap::heap_sort(&mut v);
/// assert_eq!(v, [1, 2, 3, 5, 8, 9]);
/// ```
pub fn heap_sort<T: Ord>(v: &mut [T]) {
    // A max-heap lets the sorted tail grow from the back of the slice.
    let cmp = natural::<T>().rev();
    build_heap(v, &cmp);
    for end in (1..v.len()).rev() {
        v.swap(0, end);
        sift_down(&mut v[..end], 0, &cmp);
    }
}

/// A priority queue with a fixed capacity implemented with a binary min-heap.
///
/// Items are ordered by their `Ord` implementation. Items that compare equal come out in no
/// particular order relative to each other.
///
/// It is a logic error for an item to be modified in such a way that the
/// item's ordering relative to any other item changes while it is in the heap.
/// This is normally only possible through `Cell`, `RefCell`, global state, I/O,
/// or unsafe code.
#[derive(Clone)]
pub struct MinHeap<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T: Ord> MinHeap<T> {
    /// Returns an empty heap that can hold at most `capacity` items.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounded_min_heap::MinHeap;
    ///
    /// let heap = MinHeap::<u32>::with_capacity(5);
    /// assert!(heap.is_empty());
    /// assert_eq!(heap.capacity(), 5);
    /// ```
    pub fn with_capacity(capacity: usize) -> MinHeap<T> {
        MinHeap { data: Vec::with_capacity(capacity), capacity: capacity }
    }

    /// Returns an empty heap that can hold at most `capacity` items, rejecting a negative
    /// capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounded_min_heap::{HeapError, MinHeap};
    ///
    /// assert_eq!(MinHeap::<u32>::try_with_capacity(3).unwrap().capacity(), 3);
    /// assert_eq!(MinHeap::<u32>::try_with_capacity(-1).unwrap_err(),
    ///            HeapError::InvalidArgument { capacity: -1 });
    /// ```
    pub fn try_with_capacity(capacity: isize) -> Result<MinHeap<T>, HeapError> {
        usize::try_from(capacity)
            .map(Self::with_capacity)
            .map_err(|_| HeapError::InvalidArgument { capacity: capacity })
    }

    /// Returns a full heap holding a copy of every item of `values`.
    ///
    /// The capacity of the heap is `values.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounded_min_heap::MinHeap;
    ///
    /// let heap = MinHeap::from_slice(&[5, 3, 8]);
    /// assert!(heap.is_full());
    /// assert_eq!(heap.peek_min(), Ok(&3));
    /// ```
    pub fn from_slice(values: &[T]) -> MinHeap<T> where T: Clone {
        Self::from(values.to_vec())
    }

    /// Returns a reference to the smallest item in the heap.
    ///
    /// # Errors
    ///
    /// Returns `HeapError::EmptyContainer` if the heap is empty.
    pub fn peek_min(&self) -> Result<&T, HeapError> {
        debug_assert!(self.is_valid());
        self.data.first().ok_or(HeapError::EmptyContainer)
    }

    /// Removes the smallest item from the heap and returns it.
    ///
    /// # Errors
    ///
    /// Returns `HeapError::EmptyContainer` if the heap is empty.
    pub fn remove_min(&mut self) -> Result<T, HeapError> {
        debug_assert!(self.is_valid());
        if self.data.is_empty() {
            return Err(HeapError::EmptyContainer);
        }
        // The last item takes the place of the root, then sinks.
        let min = self.data.swap_remove(0);
        sift_down(&mut self.data, 0, &natural());
        debug_assert!(self.is_valid());
        Ok(min)
    }

    /// Inserts an item into the heap.
    ///
    /// # Errors
    ///
    /// Returns `HeapError::CapacityExceeded` if the heap already holds `capacity()` items. The
    /// heap is left unchanged and `item` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounded_min_heap::{HeapError, MinHeap};
    ///
    /// let mut heap = MinHeap::with_capacity(1);
    /// assert_eq!(heap.insert(4), Ok(()));
    /// assert_eq!(heap.insert(1), Err(HeapError::CapacityExceeded { capacity: 1 }));
    /// assert_eq!(heap.peek_min(), Ok(&4));
    /// ```
    pub fn insert(&mut self, item: T) -> Result<(), HeapError> {
        debug_assert!(self.is_valid());
        if self.is_full() {
            return Err(HeapError::CapacityExceeded { capacity: self.capacity });
        }
        self.data.push(item);
        sift_up(&mut self.data, &natural());
        debug_assert!(self.is_valid());
        Ok(())
    }

    /// Clears the heap, returning an iterator that removes the items in ascending order.
    ///
    /// Items the iterator has not yielded when it is dropped stay in the heap.
    pub fn drain_sorted(&mut self) -> DrainSorted<T> {
        DrainSorted(self)
    }

    /// Consumes the heap and returns its items as a vector in sorted (ascending) order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut vec = self.data;
        // Moving the min behind the shrinking heap leaves the items descending.
        for hsize in (1..vec.len()).rev() {
            vec.swap(0, hsize);
            sift_down(&mut vec[..hsize], 0, &natural());
        }
        vec.reverse();
        vec
    }

    /// Checks if the heap is valid.
    ///
    /// The heap is valid if it holds at most `capacity` items and every item is greater than
    /// or equal to its parent.
    fn is_valid(&self) -> bool {
        let cmp: Natural<T> = natural();
        self.data.len() <= self.capacity &&
        (1..self.data.len()).all(|i| cmp.compares_le(&self.data[parent(i)], &self.data[i]))
    }
}

impl<T> MinHeap<T> {
    /// Returns an iterator visiting all items in the heap in storage order.
    ///
    /// Storage order starts with the smallest item but is otherwise unsorted.
    pub fn iter(&self) -> Iter<T> {
        Iter(self.data.iter())
    }

    /// Returns the maximum number of items the heap can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of items in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap contains no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if another insertion would exceed the capacity.
    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    /// Removes all items from the heap. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap and returns its items as a vector in storage order.
    pub fn into_vec(self) -> Vec<T> { self.data }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    /// Returns a full heap containing all the items of the given vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use bounded_min_heap::MinHeap;
    ///
    /// let heap = MinHeap::from(vec![5, 1, 6, 4]);
    /// assert_eq!(heap.len(), 4);
    /// assert_eq!(heap.capacity(), 4);
    /// assert_eq!(heap.peek_min(), Ok(&1));
    /// ```
    fn from(mut vec: Vec<T>) -> MinHeap<T> {
        build_heap(&mut vec, &natural());
        let capacity = vec.len();
        let heap = MinHeap { data: vec, capacity: capacity };
        debug_assert!(heap.is_valid());
        heap
    }
}

impl<T: Debug> Debug for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

/// Lists the items in storage order, e.g. `[ 1  3  2 ]`.
impl<T: Display> Display for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("[")?;
        for item in self {
            write!(f, " {} ", item)?;
        }
        f.write_str("]")
    }
}

impl<T: Ord> iter::FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> MinHeap<T> {
        MinHeap::from(iter.into_iter().collect::<Vec<T>>())
    }
}

/// An iterator over a `MinHeap` in storage order.
///
/// Acquire through [`MinHeap::iter`](struct.MinHeap.html#method.iter).
pub struct Iter<'a, T: 'a>(slice::Iter<'a, T>);

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Iter<'a, T> { Iter(self.0.clone()) }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    #[inline] fn next(&mut self) -> Option<&'a T> { self.0.next() }
    #[inline] fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> { self.0.next_back() }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// A consuming iterator over a `MinHeap` in storage order.
///
/// Acquire through [`IntoIterator::into_iter`](
/// https://doc.rust-lang.org/stable/std/iter/trait.IntoIterator.html#tymethod.into_iter).
pub struct IntoIter<T>(vec::IntoIter<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> { self.0.next_back() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// An iterator that removes the items of a `MinHeap` in ascending order.
///
/// Acquire through [`MinHeap::drain_sorted`](struct.MinHeap.html#method.drain_sorted).
pub struct DrainSorted<'a, T: 'a + Ord>(&'a mut MinHeap<T>);

impl<'a, T: Ord> Iterator for DrainSorted<'a, T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.remove_min().ok() }
    fn size_hint(&self) -> (usize, Option<usize>) { (self.0.len(), Some(self.0.len())) }
}

impl<'a, T: Ord> ExactSizeIterator for DrainSorted<'a, T> {}

impl<T> IntoIterator for MinHeap<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> { IntoIter(self.data.into_iter()) }
}

impl<'a, T> IntoIterator for &'a MinHeap<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}
