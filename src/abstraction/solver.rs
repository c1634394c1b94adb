// Copyright 2020 Xavier Gillard
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

//! This module defines the `Solver` trait.

use crate::{GenericSolution, Instance, Quantity};

/// This is the solver abstraction. It is implemented by any structure which
/// is able to compute a solution to a knapsack instance: the exact
/// branch-and-bound solvers, but also the heuristics and relaxations which
/// come along with them.
pub trait Solver {
    /// The numeric type of the quantities in the produced solutions
    type Quantity: Quantity;

    /// Computes a solution to the given instance. The solution borrows the
    /// instance it was computed for.
    fn solve<'a>(&self, instance: &'a Instance) -> GenericSolution<'a, Self::Quantity>;

    /// A human readable label identifying the solver
    fn name(&self) -> &'static str;
}
