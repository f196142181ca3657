//! Array-backed binary min-heap primitives.
//!
//! These functions treat a slice as an implicit complete binary tree: the
//! parent of index `i` is `(i - 1) / 2` and its children are `2 * i + 1` and
//! `2 * i + 2`. A slice is a *heap* when no element is greater than either
//! of its children under the supplied comparison.
//!
//! The comparison is any `FnMut(&T, &T) -> Ordering` describing a total
//! preorder. Only `Ordering::Less` causes an element to move, so elements
//! that compare `Equal` are never swapped.
//!
//! # Time Complexity
//!
//! | Operation   | Comparisons           |
//! |-------------|-----------------------|
//! | `sift_down` | O(log n)              |
//! | `sift_up`   | O(log n)              |
//! | `heapify`   | O(n), at most 2(n-1)  |
//! | `push`      | O(log n)              |
//! | `pop`       | O(log n)              |
//! | `is_heap`   | n - 1                 |
//!
//! # Examples
//!
//! ```rust
//! use sorting_machine::heap;
//!
//! let mut values = vec![5, 3, 8, 1, 9, 2];
//! heap::heapify(&mut values, i32::cmp);
//! assert!(heap::is_heap(&values, i32::cmp));
//!
//! let mut sorted = Vec::new();
//! while let Some(value) = heap::pop(&mut values, i32::cmp) {
//!     sorted.push(value);
//! }
//! assert_eq!(sorted, vec![1, 2, 3, 5, 8, 9]);
//! ```

use std::cmp::Ordering;

#[inline]
const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
const fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// Moves the element at `index` down until neither child is smaller.
///
/// At each level the element is compared with the smaller of its children
/// and swapped with it only if that child is strictly smaller. When both
/// children are equivalent the left one is taken.
///
/// Only `heap[index..]` is considered; the caller bounds the heap by passing
/// a shorter slice.
///
/// # Panics
///
/// Panics if `index` is out of bounds and the slice is not empty.
pub fn sift_down<T, F>(heap: &mut [T], mut index: usize, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let length = heap.len();
    if length == 0 {
        return;
    }
    assert!(index < length, "sift_down index {index} out of bounds for length {length}");

    loop {
        let mut child = left_child(index);
        if child >= length {
            break;
        }

        // Choose the smaller child; ties stay left.
        if child + 1 < length && compare(&heap[child + 1], &heap[child]) == Ordering::Less {
            child += 1;
        }

        if compare(&heap[child], &heap[index]) != Ordering::Less {
            break;
        }

        heap.swap(index, child);
        index = child;
    }
}

/// Moves the element at `index` up while it is strictly smaller than its
/// parent.
///
/// # Panics
///
/// Panics if `index` is out of bounds and the slice is not empty.
pub fn sift_up<T, F>(heap: &mut [T], mut index: usize, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let length = heap.len();
    if length == 0 {
        return;
    }
    assert!(index < length, "sift_up index {index} out of bounds for length {length}");

    while index > 0 {
        let parent = parent(index);
        if compare(&heap[index], &heap[parent]) != Ordering::Less {
            break;
        }
        heap.swap(index, parent);
        index = parent;
    }
}

/// Rearranges an arbitrary slice into a heap, in place.
///
/// Sifts every non-leaf node down, starting from the last one
/// (`len / 2 - 1`) and finishing at the root. The total work is linear in
/// the length of the slice.
pub fn heapify<T, F>(heap: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for index in (0..heap.len() / 2).rev() {
        sift_down(heap, index, &mut compare);
    }
}

/// Appends `element` to a heap stored in `heap` and restores the heap
/// property.
pub fn push<T, F>(heap: &mut Vec<T>, element: T, compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    heap.push(element);
    let last = heap.len() - 1;
    sift_up(heap, last, compare);
}

/// Removes and returns the smallest element of a heap stored in `heap`.
///
/// The last element takes the root's place and is sifted down. Returns
/// `None` if the heap is empty.
pub fn pop<T, F>(heap: &mut Vec<T>, compare: F) -> Option<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if heap.is_empty() {
        return None;
    }
    let first = heap.swap_remove(0);
    sift_down(heap, 0, compare);
    Some(first)
}

/// Returns `true` if no element of `heap` is greater than its children.
pub fn is_heap<T, F>(heap: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    (1..heap.len()).all(|index| compare(&heap[parent(index)], &heap[index]) != Ordering::Greater)
}
