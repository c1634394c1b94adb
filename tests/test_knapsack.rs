// Copyright 2026 The knapsack-bb developers
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use std::path::PathBuf;

use knapsack_bb::*;

fn instance(id: &str) -> Instance {
    let location = PathBuf::new()
        .join(env!("CARGO_MANIFEST_DIR"))
        .join("resources/knapsack/")
        .join(id);

    read_instance(location).expect("File not found")
}

fn solve(id: &str) -> usize {
    let instance = instance(id);
    let outcome  = BranchAndBound::new().maximize(&instance);

    assert!(outcome.completion.is_exact);
    assert!(outcome.solution.is_feasible());
    assert!(outcome.solution.is_binary());
    assert_eq!(outcome.completion.best_value, outcome.solution.value());
    outcome.completion.best_value
}

fn solve_parallel(id: &str) -> usize {
    let instance = instance(id);
    let outcome  = ParallelBranchAndBound::new().with_nb_threads(4).maximize(&instance);

    assert!(outcome.completion.is_exact);
    assert!(outcome.solution.is_feasible());
    assert!(outcome.solution.is_binary());
    assert_eq!(outcome.completion.best_value, outcome.solution.value());
    outcome.completion.best_value
}

#[test]
fn tiny_rucksack_0() {
    assert_eq!(solve("tiny-rucksack-0.txt"), 6);
}
#[test]
fn tiny_rucksack_1() {
    assert_eq!(solve("tiny-rucksack-1.txt"), 9);
}
#[test]
fn tiny_rucksack_2() {
    assert_eq!(solve("tiny-rucksack-2.txt"), 89);
}
#[test]
fn rucksack_00030_1() {
    assert_eq!(solve("rucksack-00030-1.txt"), 810);
}
#[test]
fn rucksack_00040_1() {
    assert_eq!(solve("rucksack-00040-1.txt"), 1314);
}

#[test]
fn parallel_tiny_rucksack_2() {
    assert_eq!(solve_parallel("tiny-rucksack-2.txt"), 89);
}
#[test]
fn parallel_rucksack_00030_1() {
    assert_eq!(solve_parallel("rucksack-00030-1.txt"), 810);
}
#[test]
fn parallel_rucksack_00040_1() {
    assert_eq!(solve_parallel("rucksack-00040-1.txt"), 1314);
}

#[test]
fn enumeration_agrees_on_the_tiny_fixtures() {
    for (id, expected) in [("tiny-rucksack-0.txt", 6), ("tiny-rucksack-1.txt", 9), ("tiny-rucksack-2.txt", 89)] {
        let instance = instance(id);
        let solution = Enumeration.solve(&instance);
        assert_eq!(expected, solution.value(), "{id}");
        assert!(solution.is_feasible());
    }
}

#[test]
fn fractional_values_bound_the_optimum() {
    for (id, expected, optimum) in [
        ("tiny-rucksack-0.txt",  19.0 / 3.0, 6),
        ("tiny-rucksack-1.txt",  9.75,       9),
        ("tiny-rucksack-2.txt",  90.6,       89),
        ("rucksack-00030-1.txt", 822.2857142857143, 810),
        ("rucksack-00040-1.txt", 1315.7179487179487, 1314),
    ] {
        let instance = instance(id);
        let solution = FractionalSolver.solve(&instance);
        assert!((solution.value() - expected).abs() < 1e-6, "{id}: {}", solution.value());
        assert!(solution.value() >= optimum as f64);
        assert!(solution.is_feasible());
    }
}

#[test]
fn greedy_values_are_lower_bounds() {
    for (id, expected, optimum) in [
        ("tiny-rucksack-0.txt",  6,    6),
        ("tiny-rucksack-1.txt",  9,    9),
        ("tiny-rucksack-2.txt",  76,   89),
        ("rucksack-00030-1.txt", 802,  810),
        ("rucksack-00040-1.txt", 1313, 1314),
    ] {
        let instance = instance(id);
        let solution = GreedyHeuristic.solve(&instance);
        assert_eq!(expected, solution.value(), "{id}");
        assert!(solution.value() <= optimum);
        assert!(solution.is_feasible());
        assert!(solution.is_binary());
    }
}

#[test]
fn the_tiny_fixture_is_solved_by_packing_items_0_and_2() {
    let instance = instance("tiny-rucksack-0.txt");
    let solution = BranchAndBound::new().solve(&instance);
    assert_eq!("[1, 0, 1] (weight = 9, value = 6)", solution.to_string());
}

#[test]
fn a_node_budget_yields_a_feasible_but_inexact_outcome() {
    let instance = instance("rucksack-00040-1.txt");
    let outcome  = BranchAndBound::with_cutoff(NodeBudget(10)).maximize(&instance);
    assert!(!outcome.completion.is_exact);
    assert_eq!(10, outcome.explored);
    assert!(outcome.solution.is_feasible());
    assert!(outcome.completion.best_value <= 1314);
}

// ----------------------------------------------------------------------------
// Edge cases
// ----------------------------------------------------------------------------
#[test]
fn an_item_heavier_than_the_sack_is_excluded() {
    let instance = Instance::from_pairs(4, vec![(5, 4)]).unwrap();
    let outcome  = BranchAndBound::new().maximize(&instance);
    assert_eq!(0, outcome.completion.best_value);
    assert_eq!(&[0], outcome.solution.quantities());
}
#[test]
fn an_item_as_heavy_as_the_sack_is_included() {
    let instance = Instance::from_pairs(5, vec![(5, 4)]).unwrap();
    let outcome  = BranchAndBound::new().maximize(&instance);
    assert_eq!(4, outcome.completion.best_value);
    assert_eq!(&[1], outcome.solution.quantities());
}
#[test]
fn a_null_capacity_packs_nothing() {
    let instance = Instance::from_pairs(0, vec![(5, 4), (3, 1), (4, 2)]).unwrap();
    let outcome  = BranchAndBound::new().maximize(&instance);
    assert_eq!(0, outcome.completion.best_value);
    assert_eq!(&[0, 0, 0], outcome.solution.quantities());
}
#[test]
fn identical_densities_reach_the_enumerated_maximum() {
    let instance = Instance::from_pairs(17, vec![(3, 6), (5, 10), (7, 14), (4, 8), (6, 12), (2, 4)]).unwrap();
    let outcome  = BranchAndBound::new().maximize(&instance);
    let oracle   = Enumeration.solve(&instance);
    assert_eq!(oracle.value(), outcome.completion.best_value);
    assert_eq!(34, outcome.completion.best_value);
    assert_eq!(17, outcome.solution.weight());
}

#[test]
fn ill_formed_files_are_rejected() {
    assert!(matches!("10 2\n0 5 4\n".parse::<Instance>(), Err(ReadError::CountMismatch { expected: 2, actual: 1 })));
    assert!(matches!("0 5 4\n".parse::<Instance>(), Err(ReadError::MissingHeader)));
    assert!(matches!("-1 1\n0 5 4\n".parse::<Instance>(), Err(ReadError::Format { .. })));
}

#[test]
fn parallel_search_interrupted_midway_stays_consistent() {
    // any complete search of this instance expands at least 280 nodes
    let instance = instance("rucksack-00040-1.txt");
    for nb_threads in 2..=4 {
        for budget in [1, 10, 50, 150] {
            let outcome = ParallelBranchAndBound::with_cutoff(NodeBudget(budget))
                .with_nb_threads(nb_threads)
                .maximize(&instance);

            assert!(!outcome.completion.is_exact, "{nb_threads} threads, budget {budget}");
            assert!(outcome.explored <= budget);
            assert!(outcome.solution.is_feasible());
            assert!(outcome.solution.is_binary());
            assert_eq!(outcome.completion.best_value, outcome.solution.value());
            assert!(outcome.completion.best_value <= 1314);
        }
    }
}

#[test]
fn parallel_search_with_a_large_budget_is_exact() {
    let instance = instance("rucksack-00030-1.txt");
    for nb_threads in 2..=4 {
        let outcome = ParallelBranchAndBound::with_cutoff(NodeBudget(1_000_000))
            .with_nb_threads(nb_threads)
            .maximize(&instance);
        assert!(outcome.completion.is_exact);
        assert_eq!(810, outcome.completion.best_value);
        assert_eq!(810, outcome.solution.value());
    }
}
