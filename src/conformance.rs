//! Shared conformance tests for [`SortingMachine`](crate::machine::SortingMachine)
//! implementations.
//!
//! [`sorting_machine_conformance_tests!`](crate::sorting_machine_conformance_tests)
//! expands to a module of `#[test]` functions that drive an implementation
//! through the contract with `&'static str` elements under
//! [`CaseInsensitive`](crate::order::CaseInsensitive). Expected values are
//! built by the implementation under test itself, so the implementation's
//! `PartialEq` must compare element multisets rather than storage layout.

/// Generates the sorting machine conformance suite for a machine type.
///
/// The argument is the name of a type constructor `M` such that
/// `M<&'static str, CaseInsensitive>` implements
/// `SortingMachine<&'static str, Order = CaseInsensitive>`, `PartialEq` and
/// `Debug`. The generated module is named after the type in snake case with
/// a `_conformance` suffix.
///
/// # Examples
///
/// ```rust,ignore
/// use sorting_machine::heap_machine::HeapSortingMachine;
///
/// sorting_machine::sorting_machine_conformance_tests!(HeapSortingMachine);
/// ```
#[macro_export]
macro_rules! sorting_machine_conformance_tests {
    ($machine:ident) => {
        $crate::paste::paste! {
            #[cfg(test)]
            mod [<$machine:snake _conformance>] {
                use super::*;
                use $crate::error::{Operation, SortingMachineError};
                use $crate::machine::{Mode, SortingMachine};
                use $crate::order::CaseInsensitive;

                type Machine = $machine<&'static str, CaseInsensitive>;

                const ORDER: CaseInsensitive = CaseInsensitive;

                fn construct() -> Machine {
                    <Machine as SortingMachine<&'static str>>::new(ORDER)
                }

                fn create_from_args(insertion_mode: bool, args: &[&'static str]) -> Machine {
                    let mut machine = construct();
                    for &arg in args {
                        SortingMachine::add(&mut machine, arg).unwrap();
                    }
                    if !insertion_mode {
                        SortingMachine::change_to_extraction_mode(&mut machine).unwrap();
                    }
                    machine
                }

                #[test]
                fn test_constructor() {
                    let machine = construct();
                    assert_eq!(machine, create_from_args(true, &[]));
                    assert!(SortingMachine::is_in_insertion_mode(&machine));
                    assert_eq!(SortingMachine::size(&machine), 0);
                }

                #[test]
                fn test_add_to_empty() {
                    let mut machine = create_from_args(true, &[]);
                    let expected = create_from_args(true, &["green"]);
                    SortingMachine::add(&mut machine, "green").unwrap();
                    assert_eq!(machine, expected);
                }

                #[test]
                fn test_add_to_one_entry() {
                    let mut machine = create_from_args(true, &["red"]);
                    let expected = create_from_args(true, &["red", "yellow"]);
                    SortingMachine::add(&mut machine, "yellow").unwrap();
                    assert_eq!(machine, expected);
                }

                #[test]
                fn test_add_to_multiple_entries() {
                    let mut machine = create_from_args(true, &["red", "yellow"]);
                    let expected = create_from_args(true, &["red", "yellow", "orange"]);
                    SortingMachine::add(&mut machine, "orange").unwrap();
                    assert_eq!(machine, expected);
                    assert!(SortingMachine::is_in_insertion_mode(&machine));
                }

                #[test]
                fn test_add_in_any_order_is_equal() {
                    let machine = create_from_args(true, &["red", "yellow", "orange"]);
                    let expected = create_from_args(true, &["orange", "red", "yellow"]);
                    assert_eq!(machine, expected);
                }

                #[test]
                fn test_add_in_extraction_mode_is_invalid_state() {
                    let mut machine = create_from_args(false, &["red"]);
                    let expected = create_from_args(false, &["red"]);
                    assert_eq!(
                        SortingMachine::add(&mut machine, "green"),
                        Err(SortingMachineError::InvalidState {
                            operation: Operation::Add,
                            mode: Mode::Extracting,
                        })
                    );
                    assert_eq!(machine, expected);
                }

                #[test]
                fn test_change_to_extraction_mode_empty() {
                    let mut machine = create_from_args(true, &[]);
                    let expected = create_from_args(false, &[]);
                    SortingMachine::change_to_extraction_mode(&mut machine).unwrap();
                    assert_eq!(machine, expected);
                }

                #[test]
                fn test_change_to_extraction_mode_one_entry() {
                    let mut machine = create_from_args(true, &["red"]);
                    let expected = create_from_args(false, &["red"]);
                    SortingMachine::change_to_extraction_mode(&mut machine).unwrap();
                    assert_eq!(machine, expected);
                }

                #[test]
                fn test_change_to_extraction_mode_multiple_entries() {
                    let mut machine = create_from_args(true, &["yellow", "red", "purple"]);
                    let expected = create_from_args(false, &["yellow", "red", "purple"]);
                    SortingMachine::change_to_extraction_mode(&mut machine).unwrap();
                    assert_eq!(machine, expected);
                    assert!(!SortingMachine::is_in_insertion_mode(&machine));
                }

                #[test]
                fn test_change_to_extraction_mode_twice_is_invalid_state() {
                    let mut machine = create_from_args(false, &["red", "green"]);
                    let expected = create_from_args(false, &["red", "green"]);
                    assert_eq!(
                        SortingMachine::change_to_extraction_mode(&mut machine),
                        Err(SortingMachineError::InvalidState {
                            operation: Operation::ChangeToExtractionMode,
                            mode: Mode::Extracting,
                        })
                    );
                    assert_eq!(machine, expected);
                }

                #[test]
                fn test_remove_first_to_empty() {
                    let mut machine = create_from_args(false, &["hello"]);
                    let expected = create_from_args(false, &[]);
                    assert_eq!(SortingMachine::remove_first(&mut machine), Ok("hello"));
                    assert_eq!(machine, expected);
                    assert_eq!(SortingMachine::size(&machine), 0);
                }

                #[test]
                fn test_remove_first_leaving_one_entry() {
                    let mut machine = create_from_args(false, &["red", "green"]);
                    let expected = create_from_args(false, &["red"]);
                    assert_eq!(SortingMachine::remove_first(&mut machine), Ok("green"));
                    assert_eq!(machine, expected);
                }

                #[test]
                fn test_remove_first_leaving_multiple_entries() {
                    let mut machine = create_from_args(false, &["yellow", "red", "purple"]);
                    let expected = create_from_args(false, &["yellow", "red"]);
                    assert_eq!(SortingMachine::remove_first(&mut machine), Ok("purple"));
                    assert_eq!(machine, expected);
                }

                #[test]
                fn test_remove_first_smallest_of_three() {
                    let mut machine = create_from_args(false, &["green", "red", "yellow"]);
                    let expected = create_from_args(false, &["yellow", "red"]);
                    assert_eq!(SortingMachine::remove_first(&mut machine), Ok("green"));
                    assert_eq!(machine, expected);
                    assert_eq!(SortingMachine::size(&machine), 2);
                }

                #[test]
                fn test_remove_first_ignores_case() {
                    let mut machine =
                        create_from_args(false, &["banana", "Cherry", "apple", "Date"]);
                    let mut removed = Vec::new();
                    while !SortingMachine::is_empty(&machine) {
                        removed.push(SortingMachine::remove_first(&mut machine).unwrap());
                    }
                    assert_eq!(removed, vec!["apple", "banana", "Cherry", "Date"]);
                }

                #[test]
                fn test_remove_first_on_empty_is_empty_collection() {
                    let mut machine = create_from_args(false, &[]);
                    assert_eq!(
                        SortingMachine::remove_first(&mut machine),
                        Err(SortingMachineError::EmptyCollection {
                            operation: Operation::RemoveFirst,
                        })
                    );
                    assert_eq!(machine, create_from_args(false, &[]));
                }

                #[test]
                fn test_remove_first_in_insertion_mode_is_invalid_state() {
                    let mut machine = create_from_args(true, &["red"]);
                    assert_eq!(
                        SortingMachine::remove_first(&mut machine),
                        Err(SortingMachineError::InvalidState {
                            operation: Operation::RemoveFirst,
                            mode: Mode::Inserting,
                        })
                    );
                    assert_eq!(machine, create_from_args(true, &["red"]));
                }

                #[test]
                fn test_is_in_insertion_mode_true_non_empty() {
                    let machine = create_from_args(true, &["green"]);
                    assert!(SortingMachine::is_in_insertion_mode(&machine));
                    assert_eq!(machine, create_from_args(true, &["green"]));
                }

                #[test]
                fn test_is_in_insertion_mode_false_non_empty() {
                    let machine = create_from_args(false, &["green"]);
                    assert!(!SortingMachine::is_in_insertion_mode(&machine));
                    assert_eq!(machine, create_from_args(false, &["green"]));
                }

                #[test]
                fn test_is_in_insertion_mode_true_empty() {
                    let machine = create_from_args(true, &[]);
                    assert!(SortingMachine::is_in_insertion_mode(&machine));
                }

                #[test]
                fn test_is_in_insertion_mode_false_empty() {
                    let machine = create_from_args(false, &[]);
                    assert!(!SortingMachine::is_in_insertion_mode(&machine));
                }

                #[test]
                fn test_size_empty_insertion_mode() {
                    let machine = create_from_args(true, &[]);
                    assert_eq!(SortingMachine::size(&machine), 0);
                }

                #[test]
                fn test_size_empty_extraction_mode() {
                    let machine = create_from_args(false, &[]);
                    assert_eq!(SortingMachine::size(&machine), 0);
                }

                #[test]
                fn test_size_non_empty_insertion_mode() {
                    let machine = create_from_args(true, &["green", "red"]);
                    assert_eq!(SortingMachine::size(&machine), 2);
                    assert_eq!(machine, create_from_args(true, &["green", "red"]));
                }

                #[test]
                fn test_size_non_empty_extraction_mode() {
                    let machine = create_from_args(false, &["green", "red"]);
                    assert_eq!(SortingMachine::size(&machine), 2);
                    assert_eq!(machine, create_from_args(false, &["green", "red"]));
                }

                #[test]
                fn test_order_in_insertion_mode() {
                    let machine = create_from_args(true, &["green", "red"]);
                    assert_eq!(*SortingMachine::order(&machine), ORDER);
                }

                #[test]
                fn test_order_in_extraction_mode() {
                    let machine = create_from_args(false, &["green", "red"]);
                    assert_eq!(*SortingMachine::order(&machine), ORDER);
                }
            }
        }
    };
}
