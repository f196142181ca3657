//! Error types for sorting machines.
//!
//! Every misuse of a sorting machine is detected from its own state and
//! reported to the caller as a [`SortingMachineError`]. A failed call leaves
//! the machine exactly as it was.

use crate::machine::Mode;

/// Names the sorting machine operation that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `add` or `add_all`.
    Add,
    /// `change_to_extraction_mode`.
    ChangeToExtractionMode,
    /// `remove_first`.
    RemoveFirst,
    /// `peek_first`.
    PeekFirst,
    /// `remove_all`.
    RemoveAll,
    /// `drain_sorted`.
    DrainSorted,
}

impl Operation {
    /// Returns the operation name as it appears in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::ChangeToExtractionMode => "change_to_extraction_mode",
            Self::RemoveFirst => "remove_first",
            Self::PeekFirst => "peek_first",
            Self::RemoveAll => "remove_all",
            Self::DrainSorted => "drain_sorted",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Represents errors that can occur when driving a sorting machine.
///
/// # Examples
///
/// ```rust
/// use sorting_machine::error::{Operation, SortingMachineError};
/// use sorting_machine::machine::Mode;
///
/// let error = SortingMachineError::InvalidState {
///     operation: Operation::Add,
///     mode: Mode::Extracting,
/// };
/// assert_eq!(
///     format!("{}", error),
///     "add: invalid in extraction mode"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortingMachineError {
    /// The operation is not permitted in the machine's current mode.
    InvalidState {
        /// The operation that was attempted.
        operation: Operation,
        /// The mode the machine was in.
        mode: Mode,
    },
    /// The operation needs at least one element, but the machine is empty.
    EmptyCollection {
        /// The operation that was attempted.
        operation: Operation,
    },
}

impl SortingMachineError {
    /// Returns the operation that failed.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::InvalidState { operation, .. } | Self::EmptyCollection { operation } => {
                *operation
            }
        }
    }

    /// Returns `true` for [`SortingMachineError::InvalidState`].
    #[must_use]
    pub const fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }

    /// Returns `true` for [`SortingMachineError::EmptyCollection`].
    #[must_use]
    pub const fn is_empty_collection(&self) -> bool {
        matches!(self, Self::EmptyCollection { .. })
    }
}

impl std::fmt::Display for SortingMachineError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidState { operation, mode } => {
                write!(formatter, "{operation}: invalid in {mode} mode")
            }
            Self::EmptyCollection { operation } => {
                write!(formatter, "{operation}: sorting machine is empty")
            }
        }
    }
}

impl std::error::Error for SortingMachineError {}
