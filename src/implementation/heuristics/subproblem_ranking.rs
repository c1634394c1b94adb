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

//! This module provides the implementation of subproblem rankings that are used to
//! set the ordering of the solver fringe.

use std::cmp::Ordering;

use crate::{SubProblemRanking, SubProblem};

/// The MaxBound (maximum upper bound) strategy is one that always selects the
/// node having the highest upper bound in the fringe. In case of equalities,
/// the ties are broken using the value accumulated by the nodes (the highest
/// wins), and eventually by their creation order (the oldest wins).
///
/// # Example
/// ```
/// # use knapsack_bb::*;
/// # use ordered_float::OrderedFloat;
/// let a = SubProblem {id: 0, level: 1, weight: 3, value: 42, bound: OrderedFloat(300.0), lineage: None};
/// let b = SubProblem {id: 1, level: 1, weight: 0, value:  2, bound: OrderedFloat(100.0), lineage: None};
/// let c = SubProblem {id: 2, level: 2, weight: 4, value: 24, bound: OrderedFloat(150.5), lineage: None};
/// let d = SubProblem {id: 3, level: 2, weight: 0, value: 19, bound: OrderedFloat(100.0), lineage: None};
///
/// let mut priority_q = SimpleFringe::new(MaxBound);
/// priority_q.push(a);
/// priority_q.push(b);
/// priority_q.push(c);
/// priority_q.push(d);
///
/// assert_eq!(0, priority_q.pop().unwrap().id); // because 300 is the highest upper bound
/// assert_eq!(2, priority_q.pop().unwrap().id); // because 150.5 is the next highest
/// assert_eq!(3, priority_q.pop().unwrap().id); // because bound = 100 but value = 19
/// assert_eq!(1, priority_q.pop().unwrap().id); // because bound = 100 but value = 2
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct MaxBound;
impl SubProblemRanking for MaxBound {
    fn compare(&self, l: &SubProblem, r: &SubProblem) -> Ordering {
        l.bound.cmp(&r.bound)
            .then_with(|| l.value.cmp(&r.value))
            .then_with(|| r.id.cmp(&l.id))
    }
}


#[cfg(test)]
#[allow(clippy::many_single_char_names)]
mod test_maxbound {
    use std::cmp::Ordering;

    use binary_heap_plus::BinaryHeap;
    use ordered_float::OrderedFloat;

    use crate::*;

    fn node(id: usize, value: usize, bound: f64) -> SubProblem {
        SubProblem { id, level: 0, weight: 0, value, bound: OrderedFloat(bound), lineage: None }
    }

    #[test]
    fn example() {
        let a = node(0, 42, 300.0);
        let b = node(1,  2, 100.0);
        let c = node(2, 24, 150.0);
        let d = node(3, 13,  60.0);
        let e = node(4, 65, 700.0);
        let f = node(5, 19, 100.0);

        let nodes = vec![a, b, c, d, e, f];
        let mut priority_q = BinaryHeap::from_vec_cmp(nodes, CompareSubProblem::new(MaxBound));

        assert_eq!(4, priority_q.pop().unwrap().id); // because 700 is the highest upper bound
        assert_eq!(0, priority_q.pop().unwrap().id); // because 300 is the next highest
        assert_eq!(2, priority_q.pop().unwrap().id); // idem, because of bound = 150
        assert_eq!(5, priority_q.pop().unwrap().id); // because bound = 100 but value = 19
        assert_eq!(1, priority_q.pop().unwrap().id); // because bound = 100 but value = 2
        assert_eq!(3, priority_q.pop().unwrap().id); // because bound = 60 which is the worst
    }

    #[test]
    fn gt_because_bound() {
        let a = node(0, 42, 300.0);
        let b = node(1, 42, 100.0);
        assert_eq!(Ordering::Greater, MaxBound.compare(&a, &b));
    }
    #[test]
    fn gt_because_value() {
        let a = node(0, 42, 300.0);
        let b = node(1,  2, 300.0);
        assert_eq!(Ordering::Greater, MaxBound.compare(&a, &b));
    }
    #[test]
    fn gt_because_older() {
        let a = node(0, 42, 300.0);
        let b = node(1, 42, 300.0);
        assert_eq!(Ordering::Greater, MaxBound.compare(&a, &b));
    }
    #[test]
    fn lt_because_bound() {
        let a = node(0, 42, 300.0);
        let b = node(1, 42, 100.0);
        assert_eq!(Ordering::Less, MaxBound.compare(&b, &a));
    }
    #[test]
    fn lt_because_value() {
        let a = node(0, 42, 300.0);
        let b = node(1,  2, 300.0);
        assert_eq!(Ordering::Less, MaxBound.compare(&b, &a));
    }
    #[test]
    fn nearly_equal_bounds_are_not_confused() {
        let a = node(0, 1, 0.1 + 0.2);
        let b = node(1, 1, 0.3);
        assert_eq!(Ordering::Greater, MaxBound.compare(&a, &b));
        assert_eq!(Ordering::Less,    MaxBound.compare(&b, &a));
    }
    #[test]
    fn eq_self() {
        let a = node(0, 42, 300.0);
        assert_eq!(Ordering::Equal, MaxBound.compare(&a, &a));
    }
}
