//! Heap-backed sorting machine.
//!
//! This module provides [`HeapSortingMachine`], a [`SortingMachine`] that
//! stores its elements in a `Vec` and sorts them with heapsort split across
//! the two phases of the machine.
//!
//! # Overview
//!
//! - While inserting, the `Vec` is an unordered bag: `add` is a plain push.
//! - `change_to_extraction_mode` turns the bag into a binary min-heap in
//!   place with a bottom-up heapify.
//! - Each `remove_first` pops the root, moves the last element into its
//!   place and sifts it down.
//!
//! All sorting work is deferred to the transition and the removals, so a
//! burst of insertions costs nothing beyond the pushes themselves.
//!
//! # Time Complexity
//!
//! | Operation                   | Complexity       |
//! |-----------------------------|------------------|
//! | `add`                       | O(1) amortized   |
//! | `change_to_extraction_mode` | O(n)             |
//! | `remove_first`              | O(log n)         |
//! | `peek_first`                | O(1)             |
//! | `size` / `mode` / `order`   | O(1)             |
//! | `==`                        | O(n²) worst case |
//!
//! # Examples
//!
//! ```rust
//! use sorting_machine::prelude::*;
//!
//! let mut machine = HeapSortingMachine::new(CaseInsensitive);
//! machine.add("yellow").unwrap();
//! machine.add("Red").unwrap();
//! machine.add("purple").unwrap();
//!
//! machine.change_to_extraction_mode().unwrap();
//! assert_eq!(machine.remove_first(), Ok("purple"));
//! assert_eq!(machine.remove_first(), Ok("Red"));
//! assert_eq!(machine.remove_first(), Ok("yellow"));
//! assert!(machine.remove_first().is_err());
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::error::{Operation, SortingMachineError};
use crate::heap;
use crate::machine::{Mode, SortingMachine};
use crate::order::Order;

/// A sorting machine backed by an implicit binary min-heap.
///
/// Two machines are equal when they are in the same mode, have equal orders
/// and hold the same multiset of elements, regardless of how the elements
/// are laid out internally.
///
/// # Type Parameters
///
/// * `T` - The element type.
/// * `O` - The [`Order`] elements are extracted in. It must be a total
///   preorder; this is not checked.
///
/// # Examples
///
/// ```rust
/// use sorting_machine::prelude::*;
///
/// let mut machine = HeapSortingMachine::new(Reverse(NaturalOrder));
/// machine.add_all([4, 8, 1, 8]).unwrap();
/// assert_eq!(machine.into_sorted_vec(), vec![8, 8, 4, 1]);
/// ```
#[derive(Clone)]
pub struct HeapSortingMachine<T, O> {
    order: O,
    mode: Mode,
    elements: Vec<T>,
    size: usize,
}

// The machine is exactly as thread-safe as its parts.
static_assertions::assert_impl_all!(
    HeapSortingMachine<String, crate::order::NaturalOrder>: Send, Sync, Clone
);
static_assertions::assert_not_impl_any!(
    HeapSortingMachine<std::rc::Rc<str>, crate::order::NaturalOrder>: Send, Sync
);

impl<T, O> HeapSortingMachine<T, O> {
    /// Creates an empty machine in insertion mode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorting_machine::prelude::*;
    ///
    /// let machine: HeapSortingMachine<i32, _> = HeapSortingMachine::new(NaturalOrder);
    /// assert!(machine.is_in_insertion_mode());
    /// assert_eq!(machine.size(), 0);
    /// ```
    #[must_use]
    pub const fn new(order: O) -> Self {
        Self {
            order,
            mode: Mode::Inserting,
            elements: Vec::new(),
            size: 0,
        }
    }

    /// Creates an empty machine with room for `capacity` elements before the
    /// backing storage reallocates.
    #[must_use]
    pub fn with_capacity(order: O, capacity: usize) -> Self {
        Self {
            order,
            mode: Mode::Inserting,
            elements: Vec::with_capacity(capacity),
            size: 0,
        }
    }

    /// Returns the current mode.
    #[inline]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns `true` while the machine accepts new elements.
    #[inline]
    pub const fn is_in_insertion_mode(&self) -> bool {
        self.mode.is_inserting()
    }

    /// Returns the number of elements held.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the machine holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the order given at construction.
    #[inline]
    pub const fn order(&self) -> &O {
        &self.order
    }

    /// Returns an iterator over the held elements.
    ///
    /// The iteration order is unspecified. In extraction mode it follows the
    /// heap layout, not the extraction order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    fn invalid_state(&self, operation: Operation) -> SortingMachineError {
        let mode = self.mode;
        tracing::trace!(%operation, %mode, "rejected sorting machine operation");
        SortingMachineError::InvalidState { operation, mode }
    }

    fn empty_collection(operation: Operation) -> SortingMachineError {
        tracing::trace!(%operation, "rejected sorting machine operation on empty machine");
        SortingMachineError::EmptyCollection { operation }
    }
}

impl<T, O: Clone> HeapSortingMachine<T, O> {
    /// Returns a new empty machine in insertion mode with the same order.
    ///
    /// `self` is left untouched. A machine never returns to insertion mode,
    /// so reuse means replacing it with a new instance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorting_machine::prelude::*;
    ///
    /// let mut machine = HeapSortingMachine::new(NaturalOrder);
    /// machine.add_all([3, 1, 2]).unwrap();
    /// machine.change_to_extraction_mode().unwrap();
    ///
    /// let fresh = machine.new_instance();
    /// let drained = std::mem::replace(&mut machine, fresh);
    /// assert_eq!(drained.into_sorted_vec(), vec![1, 2, 3]);
    /// assert!(machine.is_in_insertion_mode());
    /// ```
    #[must_use]
    pub fn new_instance(&self) -> Self {
        Self::new(self.order.clone())
    }
}

impl<T, O: Order<T>> HeapSortingMachine<T, O> {
    /// Adds `element` to the machine.
    ///
    /// The element is appended as is; no ordering work happens until the
    /// machine changes to extraction mode.
    ///
    /// # Errors
    ///
    /// Returns [`SortingMachineError::InvalidState`] if the machine is in
    /// extraction mode. The element is dropped and the machine is unchanged.
    pub fn add(&mut self, element: T) -> Result<(), SortingMachineError> {
        if !self.mode.is_inserting() {
            return Err(self.invalid_state(Operation::Add));
        }
        self.elements.push(element);
        self.size += 1;
        Ok(())
    }

    /// Adds every element of `elements`.
    ///
    /// # Errors
    ///
    /// Returns [`SortingMachineError::InvalidState`] if the machine is in
    /// extraction mode, without consuming the iterator.
    pub fn add_all<I>(&mut self, elements: I) -> Result<(), SortingMachineError>
    where
        I: IntoIterator<Item = T>,
    {
        if !self.mode.is_inserting() {
            return Err(self.invalid_state(Operation::Add));
        }
        // Counted per element: `size` must match `elements` if the source panics.
        for element in elements {
            self.elements.push(element);
            self.size += 1;
        }
        Ok(())
    }

    /// Switches the machine to extraction mode.
    ///
    /// Rearranges the held elements into a binary min-heap under the
    /// machine's order using O(n) comparisons.
    ///
    /// # Errors
    ///
    /// Returns [`SortingMachineError::InvalidState`] if the machine is
    /// already in extraction mode.
    pub fn change_to_extraction_mode(&mut self) -> Result<(), SortingMachineError> {
        if !self.mode.is_inserting() {
            return Err(self.invalid_state(Operation::ChangeToExtractionMode));
        }
        self.build_heap();
        Ok(())
    }

    fn build_heap(&mut self) {
        let order = &self.order;
        heap::heapify(&mut self.elements, |left, right| order.compare(left, right));

        self.mode = Mode::Extracting;
        tracing::debug!(size = self.size, "sorting machine changed to extraction mode");
    }

    /// Removes and returns a smallest element under the machine's order.
    ///
    /// When several elements are equivalent, any one of them may be returned.
    ///
    /// # Errors
    ///
    /// Returns [`SortingMachineError::InvalidState`] in insertion mode and
    /// [`SortingMachineError::EmptyCollection`] if the machine is empty.
    pub fn remove_first(&mut self) -> Result<T, SortingMachineError> {
        if !self.mode.is_extracting() {
            return Err(self.invalid_state(Operation::RemoveFirst));
        }
        self.pop_first()
            .ok_or_else(|| Self::empty_collection(Operation::RemoveFirst))
    }

    fn pop_first(&mut self) -> Option<T> {
        let order = &self.order;
        let first = heap::pop(&mut self.elements, |left, right| order.compare(left, right))?;
        self.size -= 1;
        debug_assert_eq!(self.size, self.elements.len());
        Some(first)
    }

    /// Returns a smallest element without removing it, or `None` if the
    /// machine is empty.
    ///
    /// # Errors
    ///
    /// Returns [`SortingMachineError::InvalidState`] in insertion mode.
    pub fn peek_first(&self) -> Result<Option<&T>, SortingMachineError> {
        if !self.mode.is_extracting() {
            return Err(self.invalid_state(Operation::PeekFirst));
        }
        Ok(self.elements.first())
    }

    /// Returns an iterator that removes the remaining elements, smallest
    /// first.
    ///
    /// Elements not consumed by the iterator stay in the machine.
    ///
    /// # Errors
    ///
    /// Returns [`SortingMachineError::InvalidState`] in insertion mode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorting_machine::prelude::*;
    ///
    /// let mut machine = HeapSortingMachine::new(NaturalOrder);
    /// machine.add_all([5, 2, 9, 1]).unwrap();
    /// machine.change_to_extraction_mode().unwrap();
    ///
    /// let smallest: Vec<i32> = machine.drain_sorted().unwrap().take(2).collect();
    /// assert_eq!(smallest, vec![1, 2]);
    /// assert_eq!(machine.size(), 2);
    /// ```
    pub fn drain_sorted(&mut self) -> Result<DrainSorted<'_, T, O>, SortingMachineError> {
        if !self.mode.is_extracting() {
            return Err(self.invalid_state(Operation::DrainSorted));
        }
        Ok(DrainSorted { machine: self })
    }

    /// Consumes the machine and returns its elements in extraction order.
    ///
    /// A machine still in insertion mode is switched to extraction mode
    /// first.
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        if self.mode.is_inserting() {
            self.build_heap();
        }
        let mut sorted = Vec::with_capacity(self.size);
        while let Some(element) = self.pop_first() {
            sorted.push(element);
        }
        sorted
    }
}

impl<T, O: Order<T>> SortingMachine<T> for HeapSortingMachine<T, O> {
    type Order = O;

    fn new(order: O) -> Self {
        Self::new(order)
    }

    fn add(&mut self, element: T) -> Result<(), SortingMachineError> {
        Self::add(self, element)
    }

    fn change_to_extraction_mode(&mut self) -> Result<(), SortingMachineError> {
        Self::change_to_extraction_mode(self)
    }

    fn remove_first(&mut self) -> Result<T, SortingMachineError> {
        Self::remove_first(self)
    }

    fn mode(&self) -> Mode {
        self.mode
    }

    fn size(&self) -> usize {
        self.size
    }

    fn order(&self) -> &O {
        &self.order
    }

    fn add_all<I>(&mut self, elements: I) -> Result<(), SortingMachineError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::add_all(self, elements)
    }
}

/// Iterator returned by [`HeapSortingMachine::drain_sorted`].
pub struct DrainSorted<'a, T, O: Order<T>> {
    machine: &'a mut HeapSortingMachine<T, O>,
}

impl<T, O: Order<T>> Iterator for DrainSorted<'_, T, O> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.machine.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.machine.size, Some(self.machine.size))
    }
}

impl<T, O: Order<T>> ExactSizeIterator for DrainSorted<'_, T, O> {}

impl<T, O: Order<T>> FusedIterator for DrainSorted<'_, T, O> {}

impl<'a, T, O> IntoIterator for &'a HeapSortingMachine<T, O> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Equality
// =============================================================================

/// Returns `true` if both slices hold the same elements with the same
/// multiplicities.
fn same_multiset<T: PartialEq>(left: &[T], right: &[T]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    let mut matched = vec![false; right.len()];
    left.iter().all(|element| {
        let position = right
            .iter()
            .zip(&matched)
            .position(|(candidate, &used)| !used && candidate == element);
        position.is_some_and(|position| {
            matched[position] = true;
            true
        })
    })
}

impl<T: PartialEq, O: PartialEq> PartialEq for HeapSortingMachine<T, O> {
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode
            && self.size == other.size
            && self.order == other.order
            && same_multiset(&self.elements, &other.elements)
    }
}

impl<T: Eq, O: Eq> Eq for HeapSortingMachine<T, O> {}

// =============================================================================
// Formatting
// =============================================================================

impl<T: fmt::Debug, O: fmt::Debug> fmt::Debug for HeapSortingMachine<T, O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("HeapSortingMachine")
            .field("mode", &self.mode)
            .field("order", &self.order)
            .field("size", &self.size)
            .field("elements", &self.elements)
            .finish()
    }
}

/// Formats as `(insertion_mode, {e1, e2, ...})` with elements in storage
/// order.
impl<T: fmt::Display, O> fmt::Display for HeapSortingMachine<T, O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {{", self.mode.is_inserting())?;
        for (index, element) in self.elements.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}})")
    }
}

// =============================================================================
// Serde
// =============================================================================

#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
struct SnapshotRef<'a, T> {
    insertion_mode: bool,
    entries: &'a [T],
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct Snapshot<T> {
    insertion_mode: bool,
    entries: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize, O> serde::Serialize for HeapSortingMachine<T, O> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let snapshot = SnapshotRef {
            insertion_mode: self.mode.is_inserting(),
            entries: &self.elements,
        };
        serde::Serialize::serialize(&snapshot, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, O> serde::Deserialize<'de> for HeapSortingMachine<T, O>
where
    T: serde::Deserialize<'de>,
    O: Order<T> + Default,
{
    // The order is not serialized; `O::default()` stands in for it.
    // Extraction-mode entries are pushed onto a fresh heap, not trusted as laid out.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let snapshot = <Snapshot<T> as serde::Deserialize>::deserialize(deserializer)?;
        let mut machine = Self::with_capacity(O::default(), snapshot.entries.len());
        if snapshot.insertion_mode {
            machine.elements = snapshot.entries;
        } else {
            let order = &machine.order;
            for entry in snapshot.entries {
                heap::push(&mut machine.elements, entry, |left, right| {
                    order.compare(left, right)
                });
            }
            machine.mode = Mode::Extracting;
        }
        machine.size = machine.elements.len();
        Ok(machine)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{CaseInsensitive, FnOrder, NaturalOrder, Reverse};
    use rstest::rstest;

    fn extracting(values: &[i32]) -> HeapSortingMachine<i32, NaturalOrder> {
        let mut machine = HeapSortingMachine::new(NaturalOrder);
        machine.add_all(values.iter().copied()).unwrap();
        machine.change_to_extraction_mode().unwrap();
        machine
    }

    fn assert_heap_shape(machine: &HeapSortingMachine<i32, NaturalOrder>) {
        assert!(heap::is_heap(&machine.elements, i32::cmp));
        assert_eq!(machine.size, machine.elements.len());
    }

    #[rstest]
    fn test_add_keeps_insertion_order_in_storage() {
        let mut machine = HeapSortingMachine::new(NaturalOrder);
        for value in [5, 3, 9, 1] {
            machine.add(value).unwrap();
        }
        assert_eq!(machine.elements, vec![5, 3, 9, 1]);
        assert_eq!(machine.size(), 4);
    }

    #[rstest]
    fn test_change_to_extraction_mode_builds_heap() {
        let machine = extracting(&[9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
        assert_heap_shape(&machine);
        assert_eq!(machine.elements[0], 0);
    }

    #[rstest]
    fn test_remove_first_restores_heap_after_each_removal() {
        let mut machine = extracting(&[4, 1, 7, 3, 3, 8, 0, 2]);
        let mut removed = Vec::new();
        while !machine.is_empty() {
            removed.push(machine.remove_first().unwrap());
            assert_heap_shape(&machine);
        }
        assert_eq!(removed, vec![0, 1, 2, 3, 3, 4, 7, 8]);
    }

    #[rstest]
    fn test_failed_add_leaves_machine_unchanged() {
        let mut machine = extracting(&[2, 1]);
        let before = machine.clone();

        let result = machine.add(0);

        assert_eq!(
            result,
            Err(SortingMachineError::InvalidState {
                operation: Operation::Add,
                mode: Mode::Extracting,
            })
        );
        assert_eq!(machine.elements, before.elements);
        assert_eq!(machine.size(), 2);
    }

    #[rstest]
    fn test_failed_add_all_does_not_consume_iterator() {
        let mut machine = extracting(&[1]);
        let mut source = vec![7, 8, 9].into_iter();

        assert!(machine.add_all(source.by_ref()).is_err());
        assert_eq!(source.len(), 3);
    }

    #[rstest]
    fn test_second_change_to_extraction_mode_fails() {
        let mut machine = extracting(&[3, 1, 2]);
        let layout = machine.elements.clone();

        let result = machine.change_to_extraction_mode();

        assert_eq!(
            result,
            Err(SortingMachineError::InvalidState {
                operation: Operation::ChangeToExtractionMode,
                mode: Mode::Extracting,
            })
        );
        assert_eq!(machine.elements, layout);
    }

    #[rstest]
    fn test_remove_first_in_insertion_mode_fails() {
        let mut machine = HeapSortingMachine::new(NaturalOrder);
        machine.add(1).unwrap();

        assert_eq!(
            machine.remove_first(),
            Err(SortingMachineError::InvalidState {
                operation: Operation::RemoveFirst,
                mode: Mode::Inserting,
            })
        );
        assert_eq!(machine.size(), 1);
    }

    #[rstest]
    fn test_remove_first_on_empty_machine_fails() {
        let mut machine = extracting(&[]);
        assert_eq!(
            machine.remove_first(),
            Err(SortingMachineError::EmptyCollection {
                operation: Operation::RemoveFirst,
            })
        );
        assert_eq!(machine.size(), 0);
        assert_eq!(machine.mode(), Mode::Extracting);
    }

    #[rstest]
    fn test_peek_first_returns_minimum_without_removing() {
        let machine = extracting(&[6, 2, 4]);
        assert_eq!(machine.peek_first(), Ok(Some(&2)));
        assert_eq!(machine.size(), 3);

        let empty = extracting(&[]);
        assert_eq!(empty.peek_first(), Ok(None));

        let inserting: HeapSortingMachine<i32, _> = HeapSortingMachine::new(NaturalOrder);
        assert!(inserting.peek_first().unwrap_err().is_invalid_state());
    }

    #[rstest]
    fn test_drain_sorted_reports_exact_size() {
        let mut machine = extracting(&[3, 1, 2]);
        let mut drain = machine.drain_sorted().unwrap();
        assert_eq!(drain.len(), 3);
        assert_eq!(drain.next(), Some(1));
        assert_eq!(drain.len(), 2);
        assert_eq!(drain.by_ref().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(drain.next(), None);
    }

    #[rstest]
    fn test_drain_sorted_in_insertion_mode_fails() {
        let mut machine: HeapSortingMachine<i32, _> = HeapSortingMachine::new(NaturalOrder);
        assert_eq!(
            machine.drain_sorted().err(),
            Some(SortingMachineError::InvalidState {
                operation: Operation::DrainSorted,
                mode: Mode::Inserting,
            })
        );
    }

    #[rstest]
    #[case(&[], &[])]
    #[case(&[1], &[1])]
    #[case(&[3, 1, 2], &[2, 3, 1])]
    #[case(&[1, 1, 2], &[1, 2, 1])]
    fn test_same_multiset_ignores_layout(#[case] left: &[i32], #[case] right: &[i32]) {
        assert!(same_multiset(left, right));
    }

    #[rstest]
    #[case(&[1], &[])]
    #[case(&[1, 1, 2], &[1, 2, 2])]
    #[case(&[1, 2], &[2, 3])]
    fn test_same_multiset_detects_differences(#[case] left: &[i32], #[case] right: &[i32]) {
        assert!(!same_multiset(left, right));
    }

    #[rstest]
    fn test_equality_distinguishes_equivalent_but_unequal_elements() {
        let mut lower = HeapSortingMachine::new(CaseInsensitive);
        lower.add("red".to_string()).unwrap();
        let mut upper = HeapSortingMachine::new(CaseInsensitive);
        upper.add("RED".to_string()).unwrap();

        assert_ne!(lower, upper);
    }

    #[rstest]
    fn test_equality_compares_mode() {
        let inserting: HeapSortingMachine<i32, _> = HeapSortingMachine::new(NaturalOrder);
        let extracting = extracting(&[]);
        assert_ne!(inserting, extracting);
    }

    #[rstest]
    fn test_new_instance_leaves_extracting_machine_extracting() {
        let machine = extracting(&[1, 2, 3]);
        let fresh = machine.new_instance();

        assert!(fresh.is_in_insertion_mode());
        assert!(fresh.is_empty());
        assert_eq!(machine.mode(), Mode::Extracting);
        assert_eq!(machine.size(), 3);
    }

    #[rstest]
    fn test_equality_compares_fn_orders() {
        fn ascending(left: &i32, right: &i32) -> std::cmp::Ordering {
            left.cmp(right)
        }
        fn descending(left: &i32, right: &i32) -> std::cmp::Ordering {
            right.cmp(left)
        }
        type Compare = fn(&i32, &i32) -> std::cmp::Ordering;

        let up = FnOrder::new(ascending as Compare);
        let down = FnOrder::new(descending as Compare);
        let mut first = HeapSortingMachine::new(up);
        first.add_all([1, 2]).unwrap();
        let mut second = HeapSortingMachine::new(down);
        second.add_all([1, 2]).unwrap();
        let mut same = HeapSortingMachine::new(up);
        same.add_all([2, 1]).unwrap();

        assert_ne!(first, second);
        assert_eq!(first, same);
        assert_ne!(
            HeapSortingMachine::<i32, _>::new(up),
            HeapSortingMachine::<i32, _>::new(down)
        );
    }

    #[rstest]
    fn test_equality_compares_reverse_orders() {
        fn ascending(left: &i32, right: &i32) -> std::cmp::Ordering {
            left.cmp(right)
        }
        fn by_magnitude(left: &i32, right: &i32) -> std::cmp::Ordering {
            left.unsigned_abs().cmp(&right.unsigned_abs())
        }
        type Compare = fn(&i32, &i32) -> std::cmp::Ordering;

        let mut plain = HeapSortingMachine::new(Reverse(FnOrder::new(ascending as Compare)));
        plain.add_all([-3, 1]).unwrap();
        let mut magnitude = HeapSortingMachine::new(Reverse(FnOrder::new(by_magnitude as Compare)));
        magnitude.add_all([-3, 1]).unwrap();
        assert_ne!(plain, magnitude);

        let mut reversed = HeapSortingMachine::new(Reverse(NaturalOrder));
        reversed.add_all([1, 2]).unwrap();
        let mut reordered = HeapSortingMachine::new(Reverse(NaturalOrder));
        reordered.add_all([2, 1]).unwrap();
        assert_eq!(reversed, reordered);
    }

    #[rstest]
    fn test_add_all_keeps_size_in_step_when_iterator_panics() {
        let mut machine = HeapSortingMachine::new(NaturalOrder);
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            machine
                .add_all((0..5).map(|value| {
                    assert!(value < 3, "source failed");
                    value
                }))
                .unwrap();
        }));

        assert!(outcome.is_err());
        assert_eq!(machine.size(), 3);
        assert_eq!(machine.size(), machine.elements.len());
    }

    #[rstest]
    fn test_into_sorted_vec_from_insertion_mode() {
        let mut machine = HeapSortingMachine::new(NaturalOrder);
        machine.add_all([3, 3, 1, 2]).unwrap();
        assert_eq!(machine.into_sorted_vec(), vec![1, 2, 3, 3]);
    }

    #[rstest]
    fn test_into_sorted_vec_after_partial_extraction() {
        let mut machine = extracting(&[4, 2, 3, 1]);
        assert_eq!(machine.remove_first(), Ok(1));
        assert_eq!(machine.into_sorted_vec(), vec![2, 3, 4]);
    }

    #[rstest]
    fn test_display_lists_mode_and_elements() {
        let mut machine = HeapSortingMachine::new(NaturalOrder);
        assert_eq!(format!("{machine}"), "(true, {})");
        machine.add_all([2, 1]).unwrap();
        assert_eq!(format!("{machine}"), "(true, {2, 1})");
        machine.change_to_extraction_mode().unwrap();
        assert_eq!(format!("{machine}"), "(false, {1, 2})");
    }

    #[rstest]
    fn test_debug_includes_order_and_size() {
        let mut machine = HeapSortingMachine::new(NaturalOrder);
        machine.add(7).unwrap();
        assert_eq!(
            format!("{machine:?}"),
            "HeapSortingMachine { mode: Inserting, order: NaturalOrder, size: 1, elements: [7] }"
        );
    }

    #[rstest]
    fn test_with_capacity_preallocates() {
        let machine: HeapSortingMachine<i32, _> =
            HeapSortingMachine::with_capacity(NaturalOrder, 64);
        assert!(machine.elements.capacity() >= 64);
        assert!(machine.is_empty());
    }
}
