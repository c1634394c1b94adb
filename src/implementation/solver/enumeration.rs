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

//! This module provides a solver which exhaustively enumerates every feasible
//! packing of the sack. It is hopelessly slow on anything but small instances,
//! but its results are beyond suspicion.

use crate::{Instance, Solution, Solver};

/// An exact solver which decides every item (in index order) both ways,
/// without any kind of bounding.
#[derive(Debug, Default, Clone, Copy)]
pub struct Enumeration;

impl Enumeration {
    fn enumerate<'a>(&self, item: usize, current: &mut Solution<'a>, best: &mut Solution<'a>) {
        let instance = current.instance();
        if item == instance.nb_items() {
            if current.value() > best.value() {
                best.clone_from(current);
            }
            return;
        }

        if current.weight() + instance.weight(item) <= instance.capacity() {
            current.set(item, 1);
            self.enumerate(item + 1, current, best);
            current.set(item, 0);
        }
        self.enumerate(item + 1, current, best);
    }
}

impl Solver for Enumeration {
    type Quantity = usize;

    fn solve<'a>(&self, instance: &'a Instance) -> Solution<'a> {
        let mut current = Solution::new(instance);
        let mut best    = Solution::new(instance);
        self.enumerate(0, &mut current, &mut best);
        best
    }

    fn name(&self) -> &'static str {
        "Enumeration"
    }
}

#[cfg(test)]
mod test_enumeration {
    use crate::*;

    #[test]
    fn it_finds_the_optimum() {
        let instance = Instance::from_pairs(10, vec![(5, 4), (3, 1), (4, 2)]).unwrap();
        let solution = Enumeration.solve(&instance);
        assert_eq!(6, solution.value());
        assert_eq!(9, solution.weight());
        assert_eq!(&[1, 0, 1], solution.quantities());
    }
    #[test]
    fn it_keeps_the_first_optimum_it_meets() {
        // both {0} and {1} are worth 5: packing 0 is tried first
        let instance = Instance::from_pairs(3, vec![(3, 5), (3, 5)]).unwrap();
        let solution = Enumeration.solve(&instance);
        assert_eq!(&[1, 0], solution.quantities());
    }
    #[test]
    fn nothing_fits_in_an_empty_sack() {
        let instance = Instance::from_pairs(0, vec![(1, 1), (2, 2)]).unwrap();
        let solution = Enumeration.solve(&instance);
        assert_eq!(0, solution.value());
        assert!(solution.is_feasible());
    }
}
