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

//! This module provides the search context shared by the branch-and-bound
//! solvers: the items of the instance sorted by decreasing density, and the
//! bounding function based on the fractional relaxation of the problem.
//!
//! A search context is created once per search and is never modified
//! afterwards. It can thus freely be shared among the threads of a parallel
//! search.

use ordered_float::OrderedFloat;

use crate::{Instance, Item, Solution, SubProblem};

/// The immutable data a branch-and-bound search works with. The decision
/// order of the search is the decreasing density order: a subproblem at
/// `level` k has decided on the items at (sorted) positions `0..k`.
///
/// # Note
/// Items having the same density are kept in the order of their index.
#[derive(Debug, Clone)]
pub struct SearchContext<'a> {
    instance: &'a Instance,
    sorted  : Vec<Item>,
}
impl <'a> SearchContext<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        let mut sorted = instance.items().to_vec();
        // stable sort: the instance stores its items by index
        sorted.sort_by(|a, b| b.cmp_density(a));
        Self { instance, sorted }
    }
    pub fn instance(&self) -> &'a Instance {
        self.instance
    }
    pub fn capacity(&self) -> usize {
        self.instance.capacity()
    }
    pub fn nb_items(&self) -> usize {
        self.sorted.len()
    }
    /// The items in decreasing density order
    pub fn sorted_items(&self) -> &[Item] {
        &self.sorted
    }
    /// The item at the given position of the density order
    pub fn item_at(&self, position: usize) -> &Item {
        &self.sorted[position]
    }

    /// Computes an upper bound on the value of any completion of a partial
    /// assignment where the items before `level` have been decided and weigh
    /// `weight` for a total value of `value`.
    ///
    /// The bound is the optimum of the fractional relaxation over the
    /// remaining items: these are greedily packed in density order and the
    /// first item which does not fit is packed fractionally.
    ///
    /// # Example
    /// ```
    /// # use knapsack_bb::*;
    /// let instance = Instance::from_pairs(10, vec![(5, 4), (3, 1), (4, 2)]).unwrap();
    /// let context  = SearchContext::new(&instance);
    /// // items 0 and 2 fit, then one third of item 1 does
    /// assert!((context.upper_bound(0, 0, 0) - 19.0 / 3.0).abs() < 1e-9);
    /// // nothing left to decide: the bound is the value itself
    /// assert_eq!(5.0, context.upper_bound(3, 8, 5));
    /// ```
    pub fn upper_bound(&self, level: usize, weight: usize, value: usize) -> f64 {
        let mut remaining = self.capacity().saturating_sub(weight);
        let mut full      = value;

        for item in self.sorted.get(level..).unwrap_or_default() {
            if item.weight <= remaining {
                remaining -= item.weight;
                full      += item.value;
            } else {
                let fraction = (remaining as u128 * item.value as u128) as f64 / item.weight as f64;
                return full as f64 + fraction;
            }
        }
        full as f64
    }

    /// The root of the search tree: nothing has been decided yet.
    pub fn root(&self) -> SubProblem {
        SubProblem {
            id     : 0,
            level  : 0,
            weight : 0,
            value  : 0,
            bound  : OrderedFloat(self.upper_bound(0, 0, 0)),
            lineage: None,
        }
    }
    /// Returns true iff every item has been decided in the given node
    pub fn is_leaf(&self, node: &SubProblem) -> bool {
        node.level >= self.nb_items()
    }
    /// The child of `parent` where the next item is packed, or `None` when that
    /// item does not fit in the sack (or its weight cannot be represented).
    ///
    /// # Note
    /// The child inherits the id and lineage of its parent. It is up to the
    /// caller to stamp them with the appropriate values.
    pub fn include(&self, parent: &SubProblem) -> Option<SubProblem> {
        let item   = self.sorted.get(parent.level)?;
        let weight = parent.weight.checked_add(item.weight)
            .filter(|weight| *weight <= self.capacity())?;
        let level = parent.level + 1;
        let value = parent.value + item.value;
        Some(SubProblem {
            level, weight, value,
            bound: OrderedFloat(self.upper_bound(level, weight, value)),
            ..*parent
        })
    }
    /// The child of `parent` where the next item is left out.
    ///
    /// # Note
    /// The child inherits the id and lineage of its parent. It is up to the
    /// caller to stamp it with a fresh id.
    pub fn exclude(&self, parent: &SubProblem) -> SubProblem {
        let level = parent.level + 1;
        SubProblem {
            level,
            bound: OrderedFloat(self.upper_bound(level, parent.weight, parent.value)),
            ..*parent
        }
    }

    /// Materializes the solution where the items at the given (sorted)
    /// positions are packed.
    pub fn solution<I>(&self, packed: I) -> Solution<'a>
    where I: IntoIterator<Item = usize>
    {
        let mut solution = Solution::new(self.instance);
        for position in packed {
            solution.set(self.sorted[position].index, 1);
        }
        solution
    }
}
