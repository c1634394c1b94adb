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

//! This module provides the optimal solver of the fractional relaxation of the
//! knapsack problem. Its value is the bound of the root node of a 
//! branch-and-bound search.

use crate::{FractionalSolution, Instance, SearchContext, Solver};

/// Packs the items in decreasing density order. The first item which does
/// not fit is packed fractionally, after what the sack is full.
#[derive(Debug, Default, Clone, Copy)]
pub struct FractionalSolver;

impl Solver for FractionalSolver {
    type Quantity = f64;

    fn solve<'a>(&self, instance: &'a Instance) -> FractionalSolution<'a> {
        let context      = SearchContext::new(instance);
        let mut solution = FractionalSolution::new(instance);
        let mut remaining = instance.capacity();

        for item in context.sorted_items() {
            if item.weight <= remaining {
                remaining -= item.weight;
                solution.set(item.index, 1.0);
            } else {
                if remaining > 0 {
                    solution.set(item.index, remaining as f64 / item.weight as f64);
                }
                break;
            }
        }
        solution
    }

    fn name(&self) -> &'static str {
        "Fractional"
    }
}
