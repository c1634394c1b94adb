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

//! This module defines the solutions of the knapsack problem. A solution
//! assigns a quantity to each item of an instance, and it keeps track of the
//! total weight and value of that assignment as the quantities are changed.
//!
//! The same structure serves the integer (and binary) variant of the problem
//! where quantities are `usize`, and the fractional variant where quantities
//! are `f64` in `[0, 1]`.

use std::fmt::{self, Debug, Display};
use std::ops::{Add, Mul, Sub};

use crate::Instance;

/// The tolerance used when checking the feasibility or integrality of a
/// fractional solution.
pub const EPSILON: f64 = 1e-6;

/// The numeric type of the quantities assigned to the items of a solution.
pub trait Quantity:
    Copy + Debug + Display + PartialOrd + Default
    + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// Converts a weight or value into a quantity
    fn from_usize(x: usize) -> Self;
    /// Returns true iff a total weight of `weight` fits within `capacity`
    fn fits(weight: Self, capacity: usize) -> bool;
    /// Returns true iff the quantity amounts to 0 or 1
    fn is_binary(self) -> bool;
}

impl Quantity for usize {
    fn from_usize(x: usize) -> Self {
        x
    }
    fn fits(weight: Self, capacity: usize) -> bool {
        weight <= capacity
    }
    fn is_binary(self) -> bool {
        self == 0 || self == 1
    }
}

impl Quantity for f64 {
    fn from_usize(x: usize) -> Self {
        x as f64
    }
    fn fits(weight: Self, capacity: usize) -> bool {
        weight <= capacity as f64 + EPSILON
    }
    fn is_binary(self) -> bool {
        self <= EPSILON || self >= 1.0 - EPSILON
    }
}

/// A quantity assignment for the items of a given instance.
///
/// # Note
/// The total weight and value are maintained incrementally by `set`. They
/// are never recomputed from scratch.
///
/// # Example
/// ```
/// # use knapsack_bb::*;
/// let instance = Instance::from_pairs(10, vec![(5, 4), (3, 1), (4, 2)]).unwrap();
/// let mut solution = Solution::new(&instance);
/// solution.set(0, 1);
/// solution.set(2, 1);
/// assert_eq!(9, solution.weight());
/// assert_eq!(6, solution.value());
/// assert!(solution.is_feasible());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GenericSolution<'a, Q: Quantity> {
    instance  : &'a Instance,
    quantities: Vec<Q>,
    weight    : Q,
    value     : Q,
}

/// A solution to the integer (or binary) knapsack problem
pub type Solution<'a> = GenericSolution<'a, usize>;
/// A solution to the fractional knapsack problem
pub type FractionalSolution<'a> = GenericSolution<'a, f64>;

impl <'a, Q: Quantity> GenericSolution<'a, Q> {
    /// Creates the empty solution (all quantities are zero) of an instance
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            quantities: vec![Q::default(); instance.nb_items()],
            weight    : Q::default(),
            value     : Q::default(),
        }
    }
    /// Assigns a quantity to an item.
    ///
    /// # Panics
    /// When `item` is not the index of an item of the instance.
    pub fn set(&mut self, item: usize, quantity: Q) {
        let previous = self.quantities[item];
        let weight   = Q::from_usize(self.instance.weight(item));
        let value    = Q::from_usize(self.instance.value(item));

        // subtract before adding so that unsigned totals never underflow
        self.weight = self.weight - previous * weight + quantity * weight;
        self.value  = self.value  - previous * value  + quantity * value;
        self.quantities[item] = quantity;
    }
    /// The quantity assigned to the given item
    pub fn quantity(&self, item: usize) -> Q {
        self.quantities[item]
    }
    /// All quantities, ordered by item index
    pub fn quantities(&self) -> &[Q] {
        &self.quantities
    }
    /// The total weight of the solution
    pub fn weight(&self) -> Q {
        self.weight
    }
    /// The total value of the solution
    pub fn value(&self) -> Q {
        self.value
    }
    /// The instance this is a solution of
    pub fn instance(&self) -> &'a Instance {
        self.instance
    }
    /// Returns true iff the total weight does not exceed the capacity
    pub fn is_feasible(&self) -> bool {
        Q::fits(self.weight, self.instance.capacity())
    }
    /// Returns true iff every quantity is either 0 or 1
    pub fn is_binary(&self) -> bool {
        self.quantities.iter().all(|q| q.is_binary())
    }
}

impl <Q: Quantity> Display for GenericSolution<'_, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, q) in self.quantities.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{q}")?;
        }
        write!(f, "] (weight = {}, value = {})", self.weight, self.value)
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################
