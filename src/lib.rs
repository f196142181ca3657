//! # sorting-machine
//!
//! A two-phase sorting container: heapsort exposed as a stateful object.
//!
//! ## Overview
//!
//! A sorting machine accepts elements in any order while in *insertion
//! mode*. Once switched to *extraction mode* it hands them back one at a
//! time, smallest first, under a caller-supplied total preorder. The switch
//! happens exactly once and never reverses.
//!
//! - **Machines**: the [`SortingMachine`](machine::SortingMachine) contract and its
//!   heap-backed implementation [`HeapSortingMachine`](heap_machine::HeapSortingMachine)
//! - **Orders**: the [`Order`](order::Order) trait and stock orders
//! - **Heap primitives**: slice-level sift-down, sift-up and heapify in [`heap`]
//! - **Errors**: [`SortingMachineError`](error::SortingMachineError)
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for machines and modes
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use sorting_machine::prelude::*;
//!
//! let mut machine = HeapSortingMachine::new(NaturalOrder);
//! machine.add_all([31, 4, 15, 9, 2, 6]).unwrap();
//! machine.change_to_extraction_mode().unwrap();
//!
//! assert_eq!(machine.remove_first(), Ok(2));
//! assert_eq!(machine.remove_first(), Ok(4));
//! assert_eq!(machine.size(), 4);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use sorting_machine::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Operation, SortingMachineError};
    pub use crate::heap_machine::HeapSortingMachine;
    pub use crate::machine::{Mode, SortingMachine};
    pub use crate::order::{CaseInsensitive, FnOrder, NaturalOrder, Order, Reverse};
}

pub mod conformance;
pub mod error;
pub mod heap;
pub mod heap_machine;
pub mod machine;
pub mod order;

#[doc(hidden)]
pub use paste;

