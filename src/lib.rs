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

//! # Knapsack-BB
//! Knapsack-BB is an exact solver for the binary (0/1) knapsack problem. Given
//! a sack of limited capacity and a set of items (each having a weight and a
//! value), it finds a subset of the items which fits in the sack and whose
//! total value is maximal.
//!
//! The solver performs a best-first branch-and-bound search: the items are 
//! decided one at a time (in decreasing value/weight density order), each 
//! partial decision being bounded by the optimum of the fractional relaxation
//! of the items which have not been decided yet. A partial decision whose 
//! bound does not beat the best known solution is never explored any further.
//!
//! ## Side benefit
//! The search can be spread over all the hardware threads of your machine with
//! the `ParallelBranchAndBound` solver.
//!
//! ## Quick Example
//! ```
//! # use knapsack_bb::*;
//! // 1. Describe the instance (either programmatically or by reading a file)
//! let instance = Instance::from_pairs(10, vec![(5, 4), (3, 1), (4, 2)]).unwrap();
//! // 2. Create a solver (optionally, give it a cutoff criterion)
//! let solver   = BranchAndBound::new();
//! // 3. Maximize your objective function. The outcome tells whether or not 
//! //    the solution was proved optimal.
//! let outcome  = solver.maximize(&instance);
//!
//! assert!(outcome.completion.is_exact);
//! assert_eq!(6, outcome.completion.best_value);
//! assert_eq!("[1, 0, 1] (weight = 9, value = 6)", outcome.solution.to_string());
//! ```
//!
//! ## Other solvers
//! Besides the branch-and-bound engine, the crate provides an exhaustive 
//! `Enumeration` (an exact but slow oracle), the `FractionalSolver` which
//! optimally solves the fractional relaxation of the problem, and the
//! `GreedyHeuristic`. All of them implement the `Solver` trait.

mod common;
mod solution;
mod io;
mod abstraction;
mod implementation;

pub use common::*;
pub use solution::*;
pub use io::*;
pub use abstraction::*;
pub use implementation::*;
