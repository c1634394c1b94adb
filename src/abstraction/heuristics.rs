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

//! This module defines the traits used to encapsulate the heuristics that
//! tune the behavior of a branch-and-bound search.

use std::cmp::Ordering;

use crate::SubProblem;

/// A subproblem ranking is an ordering that decides which of two subproblems
/// is the most promising one: the greater of the two is explored first.
pub trait SubProblemRanking {
    /// Compares two subproblems. `Greater` means that `a` must be explored
    /// before `b`.
    fn compare(&self, a: &SubProblem, b: &SubProblem) -> Ordering;
}

/// This trait encapsulates a criterion (external to the solver) which imposes
/// to stop searching for a better solution. Typically, this is done to grant
/// a given time budget to the search.
///
/// # Note
/// A solver interrupted by a cutoff returns the best solution it found so
/// far. That solution is no longer guaranteed to be optimal.
pub trait Cutoff {
    /// Returns true iff the criterion is met and the search must stop.
    /// The parameter tells how many nodes have been explored so far.
    fn must_stop(&self, explored: usize) -> bool;
}
