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

use crate::{Instance, SearchContext, Solution, Solver};

/// A sorting-based heuristic for the binary knapsack problem: it scans the 
/// items in decreasing density order and packs every item which still fits.
/// The value it finds is a lower bound on the optimum.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyHeuristic;

impl Solver for GreedyHeuristic {
    type Quantity = usize;

    fn solve<'a>(&self, instance: &'a Instance) -> Solution<'a> {
        let context      = SearchContext::new(instance);
        let mut solution = Solution::new(instance);
        for item in context.sorted_items() {
            if solution.weight() + item.weight <= instance.capacity() {
                solution.set(item.index, 1);
            }
        }
        solution
    }

    fn name(&self) -> &'static str {
        "Greedy"
    }
}

#[cfg(test)]
mod test_greedy {
    use crate::*;

    #[test]
    fn it_keeps_scanning_after_an_item_does_not_fit() {
        // densities: 3.0, 2.0, 1.0 -> item 1 overflows, item 2 still fits
        let instance = Instance::from_pairs(6, vec![(3, 9), (4, 8), (2, 2)]).unwrap();
        let solution = GreedyHeuristic.solve(&instance);
        assert_eq!(&[1, 0, 1], solution.quantities());
        assert_eq!(11, solution.value());
    }
    #[test]
    fn it_may_miss_the_optimum() {
        let instance = Instance::from_pairs(50, vec![(10, 20), (25, 45), (25, 45)]).unwrap();
        let solution = GreedyHeuristic.solve(&instance);
        assert_eq!(65, solution.value());
        assert!(solution.is_feasible());
    }
    #[test]
    fn the_solver_has_a_name() {
        assert_eq!("Greedy", GreedyHeuristic.name());
    }
}
