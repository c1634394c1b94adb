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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.

use std::cmp::Ordering;

use ordered_float::OrderedFloat;
use thiserror::Error;

use crate::LineageId;

// ----------------------------------------------------------------------------
// --- ITEM -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// An item that may be put in the sack. It is identified by its `index` in
/// the instance it belongs to, and it has a strictly positive `weight` and a
/// `value` (profit) which is gained when the item is packed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Item {
    pub index : usize,
    pub weight: usize,
    pub value : usize,
}
impl Item {
    /// Creates a new item
    pub fn new(index: usize, weight: usize, value: usize) -> Self {
        Self { index, weight, value }
    }
    /// The value density (value per unit of weight) of this item.
    ///
    /// # Examples:
    /// ```
    /// # use knapsack_bb::Item;
    /// assert_eq!(0.8, Item::new(0, 5, 4).density());
    /// assert_eq!(2.0, Item::new(1, 2, 4).density());
    /// ```
    #[inline]
    pub fn density(&self) -> f64 {
        self.value as f64 / self.weight as f64
    }
    /// Compares the densities of two items without going through floating
    /// point arithmetic (the cross products are exact).
    pub fn cmp_density(&self, other: &Item) -> Ordering {
        let lhs = self.value  as u128 * other.weight as u128;
        let rhs = other.value as u128 * self.weight  as u128;
        lhs.cmp(&rhs)
    }
}

// ----------------------------------------------------------------------------
// --- INSTANCE ---------------------------------------------------------------
// ----------------------------------------------------------------------------
/// The reasons why a knapsack instance can be rejected upon construction
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InstanceError {
    #[error("item {index} has a null weight")]
    ZeroWeight { index: usize },
    #[error("item index {index} is out of range (the instance has {nb_items} items)")]
    IndexOutOfRange { index: usize, nb_items: usize },
    #[error("item index {index} is used more than once")]
    DuplicateIndex { index: usize },
    #[error("the total weight of the items overflows")]
    WeightOverflow,
    #[error("the total value of the items overflows")]
    ValueOverflow,
}

/// A binary knapsack instance: a capacity and an ordered collection of items.
/// An instance is immutable once it has been created. Every solution and
/// every solver only ever borrows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    capacity: usize,
    items   : Vec<Item>,
}
impl Instance {
    /// Creates a new instance after having checked that the item indices form
    /// a permutation of `0..n` and that no item is weightless. The items are
    /// stored in index order, regardless of the order in which they are given.
    ///
    /// The total weight and the total value of all items must fit in a
    /// `usize`, so that no partial packing can overflow.
    pub fn new(capacity: usize, mut items: Vec<Item>) -> Result<Self, InstanceError> {
        let nb_items = items.len();
        let mut seen = vec![false; nb_items];
        let mut total_weight = 0_usize;
        let mut total_value  = 0_usize;
        for item in items.iter() {
            total_weight = total_weight.checked_add(item.weight).ok_or(InstanceError::WeightOverflow)?;
            total_value  = total_value.checked_add(item.value).ok_or(InstanceError::ValueOverflow)?;
            if item.index >= nb_items {
                return Err(InstanceError::IndexOutOfRange { index: item.index, nb_items });
            }
            if seen[item.index] {
                return Err(InstanceError::DuplicateIndex { index: item.index });
            }
            if item.weight == 0 {
                return Err(InstanceError::ZeroWeight { index: item.index });
            }
            seen[item.index] = true;
        }
        items.sort_unstable_by_key(|i| i.index);
        Ok(Self { capacity, items })
    }
    /// Creates an instance from a sequence of `(weight, value)` pairs. The
    /// items are indexed in the order they are yielded.
    ///
    /// # Examples:
    /// ```
    /// # use knapsack_bb::Instance;
    /// let instance = Instance::from_pairs(10, vec![(5, 4), (3, 1), (4, 2)]).unwrap();
    /// assert_eq!(3, instance.nb_items());
    /// assert_eq!(3, instance.weight(1));
    /// assert_eq!(2, instance.value(2));
    /// ```
    pub fn from_pairs<I>(capacity: usize, pairs: I) -> Result<Self, InstanceError>
    where I: IntoIterator<Item = (usize, usize)>
    {
        let items = pairs.into_iter()
            .enumerate()
            .map(|(index, (weight, value))| Item { index, weight, value })
            .collect();
        Self::new(capacity, items)
    }
    /// The maximum total weight a feasible solution may carry
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    /// The number of items
    pub fn nb_items(&self) -> usize {
        self.items.len()
    }
    /// All items, ordered by index
    pub fn items(&self) -> &[Item] {
        &self.items
    }
    /// The item having the given index
    pub fn item(&self, index: usize) -> &Item {
        &self.items[index]
    }
    pub fn weight(&self, index: usize) -> usize {
        self.items[index].weight
    }
    pub fn value(&self, index: usize) -> usize {
        self.items[index].value
    }
}

// ----------------------------------------------------------------------------
// --- SUBPROBLEM -------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A subproblem is a node of the branch-and-bound tree: a partial assignment
/// where the first `level` items (in decreasing density order) have been
/// decided upon. The items that were packed along the way are not stored in
/// the node itself but in a lineage arena (see `Lineage`).
///
/// # Note:
/// Subproblems are created and consumed by the solvers. If you are only
/// discovering the API, rest assured.. you don't need to create any
/// subproblem yourself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubProblem {
    /// A sequence number telling when the node was created
    pub id: usize,
    /// The position (in density order) of the next item to decide
    pub level: usize,
    /// The weight of the items packed so far
    pub weight: usize,
    /// The value of the items packed so far
    pub value: usize,
    /// An upper bound on the value reachable from this subproblem
    pub bound: OrderedFloat<f64>,
    /// The last packed item of the partial assignment (if any)
    pub lineage: Option<LineageId>,
}

// ----------------------------------------------------------------------------
// --- Results ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A reason explaining why the search stopped before proving optimality
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Reason {
    /// It stopped because the configured cutoff criterion was met
    CutoffOccurred
}

/// The outcome of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// is the given solution exact (proved optimal)? or is it the best
    /// one found before a cutoff occurred ?
    pub is_exact: bool,
    /// the value of the best solution that was found
    pub best_value: usize,
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################
