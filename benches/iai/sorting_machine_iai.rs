//! IAI-Callgrind benchmark for HeapSortingMachine.
//!
//! Measures instruction counts for the switch to extraction mode and for a
//! complete sort. Data sizes: 1000 and 100000.

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use sorting_machine::prelude::*;
use std::hint::black_box;

fn setup_inserting_machine(size: u32) -> HeapSortingMachine<u32, NaturalOrder> {
    let mut machine = HeapSortingMachine::with_capacity(NaturalOrder, size as usize);
    machine
        .add_all((0..size).map(|index| index.wrapping_mul(2_654_435_761) % size))
        .expect("fresh machine accepts elements");
    machine
}

// change_to_extraction_mode benchmarks
#[library_benchmark]
#[bench::with_setup(setup_inserting_machine(1000))]
fn change_to_extraction_mode_1000(
    mut machine: HeapSortingMachine<u32, NaturalOrder>,
) -> HeapSortingMachine<u32, NaturalOrder> {
    machine.change_to_extraction_mode().expect("inserting");
    black_box(machine)
}

#[library_benchmark]
#[bench::with_setup(setup_inserting_machine(100000))]
fn change_to_extraction_mode_100000(
    mut machine: HeapSortingMachine<u32, NaturalOrder>,
) -> HeapSortingMachine<u32, NaturalOrder> {
    machine.change_to_extraction_mode().expect("inserting");
    black_box(machine)
}

// into_sorted_vec benchmarks
#[library_benchmark]
#[bench::with_setup(setup_inserting_machine(1000))]
fn into_sorted_vec_1000(machine: HeapSortingMachine<u32, NaturalOrder>) -> Vec<u32> {
    black_box(black_box(machine).into_sorted_vec())
}

#[library_benchmark]
#[bench::with_setup(setup_inserting_machine(100000))]
fn into_sorted_vec_100000(machine: HeapSortingMachine<u32, NaturalOrder>) -> Vec<u32> {
    black_box(black_box(machine).into_sorted_vec())
}

library_benchmark_group!(
    name = sorting_machine_group;
    benchmarks =
        change_to_extraction_mode_1000, change_to_extraction_mode_100000,
        into_sorted_vec_1000, into_sorted_vec_100000
);

main!(library_benchmark_groups = sorting_machine_group);
