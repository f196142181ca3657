//! Order relations used by sorting machines.
//!
//! A sorting machine never looks at its elements through `Ord` directly.
//! Instead, it is parameterized by an [`Order`], a value that compares two
//! elements and is fixed for the whole lifetime of the machine.
//!
//! # Contract
//!
//! Every implementation must describe a *total preorder*:
//!
//! - **Reflexivity**: `compare(a, a) == Ordering::Equal`
//! - **Transitivity**: `compare(a, b) != Greater && compare(b, c) != Greater`
//!   implies `compare(a, c) != Greater`
//! - **Totality**: any two elements are comparable
//!
//! Distinct elements may compare as `Equal`. Violating the contract does not
//! cause undefined behavior, but the extraction order becomes unspecified.
//!
//! # Examples
//!
//! ```rust
//! use sorting_machine::order::{CaseInsensitive, NaturalOrder, Order, Reverse};
//! use std::cmp::Ordering;
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
//! assert_eq!(Reverse(NaturalOrder).compare(&1, &2), Ordering::Greater);
//! assert!(CaseInsensitive.is_equivalent("Red", "rED"));
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A total preorder over `T`.
///
/// Orders are compared with `PartialEq` when two sorting machines are
/// compared, so stock implementations are plain data with derived equality.
pub trait Order<T: ?Sized> {
    /// Compares two elements.
    fn compare(&self, left: &T, right: &T) -> Ordering;

    /// Returns `true` if `left` is strictly smaller than `right`.
    #[inline]
    fn is_less(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) == Ordering::Less
    }

    /// Returns `true` if neither element is smaller than the other.
    #[inline]
    fn is_equivalent(&self, left: &T, right: &T) -> bool {
        self.compare(left, right) == Ordering::Equal
    }
}

impl<T: ?Sized, O: Order<T> + ?Sized> Order<T> for &O {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (**self).compare(left, right)
    }
}

/// The order given by `T`'s own `Ord` implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Order<T> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// Reverses an inner order, so a machine using it extracts largest-first.
///
/// # Examples
///
/// ```rust
/// use sorting_machine::order::{NaturalOrder, Order, Reverse};
///
/// let order = Reverse(NaturalOrder);
/// assert!(order.is_less(&10, &3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Reverse<O>(pub O);

impl<T: ?Sized, O: Order<T>> Order<T> for Reverse<O> {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.0.compare(right, left)
    }
}

/// Lexicographic order over strings that ignores ASCII case.
///
/// `"Green"` and `"green"` are equivalent under this order but are still
/// distinct elements of a machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CaseInsensitive;

impl<T: AsRef<str> + ?Sized> Order<T> for CaseInsensitive {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        let left = left.as_ref().bytes().map(|byte| byte.to_ascii_lowercase());
        let right = right.as_ref().bytes().map(|byte| byte.to_ascii_lowercase());
        left.cmp(right)
    }
}

/// An order backed by a plain function pointer.
///
/// Function pointers have identity, so two `FnOrder`s are equal exactly when
/// they wrap the same function. Closures are not supported because they
/// cannot be compared.
///
/// # Examples
///
/// ```rust
/// use sorting_machine::order::{FnOrder, Order};
///
/// fn by_length(left: &String, right: &String) -> std::cmp::Ordering {
///     left.len().cmp(&right.len())
/// }
///
/// let order = FnOrder::new(by_length as fn(&String, &String) -> _);
/// assert!(order.is_less(&"ab".to_string(), &"abc".to_string()));
/// ```
pub struct FnOrder<T: ?Sized> {
    function: fn(&T, &T) -> Ordering,
}

impl<T: ?Sized> FnOrder<T> {
    /// Wraps `function` as an order.
    #[must_use]
    pub const fn new(function: fn(&T, &T) -> Ordering) -> Self {
        Self { function }
    }
}

impl<T: ?Sized> Order<T> for FnOrder<T> {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.function)(left, right)
    }
}

impl<T: ?Sized> Clone for FnOrder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for FnOrder<T> {}

impl<T: ?Sized> PartialEq for FnOrder<T> {
    #[allow(unpredictable_function_pointer_comparisons)]
    fn eq(&self, other: &Self) -> bool {
        self.function == other.function
    }
}

impl<T: ?Sized> Eq for FnOrder<T> {}

impl<T: ?Sized> fmt::Debug for FnOrder<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FnOrder")
            .field("function", &(self.function as *const ()))
            .finish()
    }
}
