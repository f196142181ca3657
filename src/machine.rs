//! The sorting machine contract.
//!
//! A sorting machine has two phases. While in [`Mode::Inserting`], elements
//! are added in any order. A single call to
//! [`SortingMachine::change_to_extraction_mode`] moves it to
//! [`Mode::Extracting`], after which elements are removed one by one, each
//! removal returning a smallest remaining element under the machine's
//! [`Order`]. The transition never reverses.
//!
//! ```text
//!              add                      remove_first
//!            ┌─────┐                      ┌─────┐
//!            ▼     │                      ▼     │
//!         Inserting ─────────────────► Extracting
//!                change_to_extraction_mode
//! ```
//!
//! Operations called in the wrong mode fail with
//! [`SortingMachineError::InvalidState`] and leave the machine untouched.
//!
//! [`HeapSortingMachine`](crate::heap_machine::HeapSortingMachine) is the
//! heap-backed implementation. Code that only needs the contract should be
//! written against [`SortingMachine`].

use crate::error::{Operation, SortingMachineError};
use crate::order::Order;

/// The phase a sorting machine is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Elements may be added; none may be removed.
    #[default]
    Inserting,
    /// Elements may be removed in order; none may be added.
    Extracting,
}

impl Mode {
    /// Returns `true` for [`Mode::Inserting`].
    #[must_use]
    pub const fn is_inserting(self) -> bool {
        matches!(self, Self::Inserting)
    }

    /// Returns `true` for [`Mode::Extracting`].
    #[must_use]
    pub const fn is_extracting(self) -> bool {
        matches!(self, Self::Extracting)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inserting => formatter.write_str("insertion"),
            Self::Extracting => formatter.write_str("extraction"),
        }
    }
}

/// A two-phase container that sorts by accumulating, then extracting.
///
/// # Required Methods
///
/// - `new`, `add`, `change_to_extraction_mode`, `remove_first`, `mode`,
///   `size`, `order`
///
/// # Provided Methods
///
/// - `is_in_insertion_mode`: `mode() == Mode::Inserting`
/// - `is_empty`: `size() == 0`
/// - `add_all`: `add` for every element of an iterator, checking the mode once
/// - `remove_all`: `remove_first` until empty
///
/// # Examples
///
/// ```rust
/// use sorting_machine::prelude::*;
///
/// fn sort_with<M: SortingMachine<i32>>(mut machine: M, values: &[i32]) -> Vec<i32> {
///     machine.add_all(values.iter().copied()).unwrap();
///     machine.change_to_extraction_mode().unwrap();
///     machine.remove_all().unwrap()
/// }
///
/// let machine = HeapSortingMachine::new(NaturalOrder);
/// assert_eq!(sort_with(machine, &[3, 1, 2]), vec![1, 2, 3]);
/// ```
pub trait SortingMachine<T> {
    /// The order elements are extracted in.
    type Order: Order<T>;

    /// Creates an empty machine in insertion mode.
    fn new(order: Self::Order) -> Self
    where
        Self: Sized;

    /// Adds `element`.
    ///
    /// # Errors
    ///
    /// [`SortingMachineError::InvalidState`] if the machine is extracting.
    fn add(&mut self, element: T) -> Result<(), SortingMachineError>;

    /// Switches the machine to extraction mode.
    ///
    /// # Errors
    ///
    /// [`SortingMachineError::InvalidState`] if the machine is already
    /// extracting.
    fn change_to_extraction_mode(&mut self) -> Result<(), SortingMachineError>;

    /// Removes and returns a smallest element.
    ///
    /// # Errors
    ///
    /// [`SortingMachineError::InvalidState`] if the machine is inserting,
    /// [`SortingMachineError::EmptyCollection`] if it holds no elements.
    fn remove_first(&mut self) -> Result<T, SortingMachineError>;

    /// Returns the current mode.
    fn mode(&self) -> Mode;

    /// Returns the number of elements held.
    fn size(&self) -> usize;

    /// Returns the order fixed at construction.
    fn order(&self) -> &Self::Order;

    /// Returns `true` while the machine accepts new elements.
    fn is_in_insertion_mode(&self) -> bool {
        self.mode().is_inserting()
    }

    /// Returns `true` if the machine holds no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Adds every element of `elements`.
    ///
    /// # Errors
    ///
    /// [`SortingMachineError::InvalidState`] if the machine is extracting.
    /// The iterator is not consumed in that case.
    fn add_all<I>(&mut self, elements: I) -> Result<(), SortingMachineError>
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        if !self.is_in_insertion_mode() {
            return Err(SortingMachineError::InvalidState {
                operation: Operation::Add,
                mode: self.mode(),
            });
        }
        for element in elements {
            self.add(element)?;
        }
        Ok(())
    }

    /// Removes every remaining element, smallest first.
    ///
    /// # Errors
    ///
    /// [`SortingMachineError::InvalidState`] if the machine is inserting.
    fn remove_all(&mut self) -> Result<Vec<T>, SortingMachineError>
    where
        Self: Sized,
    {
        if self.is_in_insertion_mode() {
            return Err(SortingMachineError::InvalidState {
                operation: Operation::RemoveAll,
                mode: self.mode(),
            });
        }
        let mut removed = Vec::with_capacity(self.size());
        while !self.is_empty() {
            removed.push(self.remove_first()?);
        }
        Ok(removed)
    }
}
