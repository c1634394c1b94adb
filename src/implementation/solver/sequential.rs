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

//! This module provides the implementation of the sequential branch-and-bound
//! solver. That is a solver that explores the search tree using one single
//! thread of execution, in best-first order.
//!
//! The search tree is a binary tree: at each level, the next item (in 
//! decreasing density order) is either packed or left out. Every node is
//! bounded with the fractional relaxation of its remaining items, and the
//! nodes whose bound cannot beat the best known solution are pruned.

use log::{debug, info};

use crate::{Completion, Cutoff, Fringe, Instance, Lineage, LineageId, MaxBound, NoCutoff, Reason, SearchContext, SimpleFringe, Solution, Solver, SubProblem};

/// The result of a branch-and-bound search
#[derive(Debug, Clone)]
pub struct Outcome<'a> {
    /// The best solution that has been found
    pub solution: Solution<'a>,
    /// Tells whether that solution was proved optimal, and its value
    pub completion: Completion,
    /// The number of nodes that have been expanded during the search
    pub explored: usize,
}

/// The best solution found so far (aka the incumbent). Its value never
/// decreases during the search.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Incumbent {
    pub value  : usize,
    pub weight : usize,
    pub lineage: Option<LineageId>,
}
impl Incumbent {
    /// Returns true iff a node with the given bound could still improve on
    /// the incumbent
    pub fn is_beaten_by(&self, node: &SubProblem) -> bool {
        node.bound.0 > self.value as f64
    }
}

/// The workload the search gets from the fringe
enum WorkLoad {
    /// There is no work left to be done: the search is over
    Complete,
    /// The work must stop because of an external cutoff
    Aborted,
    /// The item to process
    WorkItem { node: SubProblem },
}

/// An exact best-first branch-and-bound solver for the binary knapsack
/// problem.
///
/// # Example Usage
/// ```
/// # use knapsack_bb::*;
/// let instance = Instance::from_pairs(50, vec![(10, 60), (20, 100), (30, 120)]).unwrap();
/// let solver   = BranchAndBound::new();
/// let outcome  = solver.maximize(&instance);
///
/// assert!(outcome.completion.is_exact);
/// assert_eq!(220, outcome.completion.best_value);
/// assert_eq!(&[0, 1, 1], outcome.solution.quantities());
/// ```
#[derive(Debug, Clone, Default)]
pub struct BranchAndBound<C: Cutoff = NoCutoff> {
    /// A cutoff heuristic meant to decide when to stop the resolution of 
    /// a given problem.
    cutoff: C,
}

impl BranchAndBound<NoCutoff> {
    /// Creates a solver which always proves optimality
    pub fn new() -> Self {
        Self { cutoff: NoCutoff }
    }
}

impl <C: Cutoff> BranchAndBound<C> {
    /// Creates a solver which stops searching as soon as the cutoff says so
    pub fn with_cutoff(cutoff: C) -> Self {
        Self { cutoff }
    }

    /// Searches for the optimal solution of the given instance. The outcome
    /// tells whether or not the search went until the proof of optimality.
    pub fn maximize<'a>(&self, instance: &'a Instance) -> Outcome<'a> {
        let context    = SearchContext::new(instance);
        let mut fringe = SimpleFringe::new(MaxBound);
        let mut search = Search::new(&context, &self.cutoff, &mut fringe);
        search.maximize()
    }
}

impl <C: Cutoff> Solver for BranchAndBound<C> {
    type Quantity = usize;

    fn solve<'a>(&self, instance: &'a Instance) -> Solution<'a> {
        self.maximize(instance).solution
    }

    fn name(&self) -> &'static str {
        "BranchAndBound"
    }
}

/// The state of one sequential search
struct Search<'a, 'b> {
    /// The sorted items and bounding function
    context: &'b SearchContext<'a>,
    /// A cutoff heuristic meant to decide when to stop the search
    cutoff: &'b dyn Cutoff,
    /// This is the fringe: the set of nodes that must still be explored before
    /// the problem can be considered 'solved'.
    ///
    /// # Note:
    /// This fringe orders the nodes by upper bound (so the highest bound is
    /// going to pop first). So, it is guaranteed that the bound of the first
    /// node being popped is an upper bound on the value reachable by exploring
    /// any of the nodes remaining on the fringe. As a consequence, the
    /// exploration can be stopped as soon as a node with a bound <= current
    /// best value is popped.
    fringe: &'b mut dyn Fringe,
    /// The items packed along the branches of the search
    lineage: Lineage,
    /// The best solution found so far
    best: Incumbent,
    /// The number of nodes that have been expanded
    explored: usize,
    /// The id to give to the next node being created
    next_id: usize,
    /// If we decide not to go through a complete proof of optimality, this is
    /// the reason why we took that decision.
    abort_proof: Option<Reason>,
}

impl <'a, 'b> Search<'a, 'b> {
    fn new(context: &'b SearchContext<'a>, cutoff: &'b dyn Cutoff, fringe: &'b mut dyn Fringe) -> Self {
        Self {
            context,
            cutoff,
            fringe,
            lineage: Lineage::new(),
            best: Incumbent::default(),
            explored: 0,
            next_id: 0,
            abort_proof: None,
        }
    }

    /// Posts the root node onto the fringe so that the search can be
    /// bootstrapped.
    fn initialize(&mut self) {
        let mut root = self.context.root();
        root.id = self.fresh_id();
        self.fringe.push(root);
    }

    fn fresh_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Consults the fringe to fetch a workload. Depending on the current
    /// state, the workload can either be:
    ///
    ///   + Complete, when the problem is solved
    ///   + Aborted, when the cutoff criterion was met
    ///   + WorkItem, when there is a subproblem to process.
    ///
    /// The nodes which cannot improve on the incumbent are dropped before the
    /// cutoff is consulted: a search left with such nodes only is complete.
    fn get_workload(&mut self) -> WorkLoad {
        loop {
            if self.abort_proof.is_some() {
                return WorkLoad::Aborted;
            }
            let Some(node) = self.fringe.pop() else {
                return WorkLoad::Complete;
            };
            if !self.best.is_beaten_by(&node) {
                // no node left on the fringe can do any better
                self.fringe.clear();
                return WorkLoad::Complete;
            }
            if self.context.is_leaf(&node) {
                continue;
            }
            if self.cutoff.must_stop(self.explored) {
                self.abort_search(Reason::CutoffOccurred);
                return WorkLoad::Aborted;
            }
            return WorkLoad::WorkItem { node };
        }
    }

    /// Expands the given `node`: it derives the two children of the node,
    /// updates the incumbent if that is possible, and pushes the children
    /// which can still improve on the incumbent onto the fringe.
    ///
    /// Only the packed children which are either pushed or become the new
    /// incumbent get a link in the lineage arena.
    fn process_one_node(&mut self, node: SubProblem) {
        self.explored += 1;

        if let Some(mut with) = self.context.include(&node) {
            with.id = self.fresh_id();
            let improves  = with.value > self.best.value;
            let promising = with.bound.0 > self.best.value.max(with.value) as f64;
            if improves || promising {
                with.lineage = Some(self.lineage.push(node.lineage, node.level));
            }
            if improves {
                self.maybe_update_best(&with);
            }
            if promising {
                self.fringe.push(with);
            }
        }

        let mut without = self.context.exclude(&node);
        without.id = self.fresh_id();
        if self.best.is_beaten_by(&without) {
            self.fringe.push(without);
        }
    }

    /// Replaces the incumbent if the given node improves on it.
    fn maybe_update_best(&mut self, node: &SubProblem) {
        if node.value > self.best.value {
            self.best = Incumbent { value: node.value, weight: node.weight, lineage: node.lineage };
            debug!("new incumbent: value {} weight {} after {} nodes", node.value, node.weight, self.explored);
        }
    }

    fn abort_search(&mut self, reason: Reason) {
        info!("search aborted ({reason:?}) after {} nodes, {} left open", self.explored, self.fringe.len());
        self.abort_proof = Some(reason);
        self.fringe.clear();
    }

    fn maximize(&mut self) -> Outcome<'a> {
        self.initialize();

        loop {
            match self.get_workload() {
                WorkLoad::Complete => break,
                WorkLoad::Aborted  => break,
                WorkLoad::WorkItem { node } => self.process_one_node(node),
            }
        }

        let is_exact = self.abort_proof.is_none();
        if is_exact {
            info!("optimum {} (weight {}) proved after {} nodes", self.best.value, self.best.weight, self.explored);
        }
        Outcome {
            solution  : self.context.solution(self.lineage.items(self.best.lineage)),
            completion: Completion { is_exact, best_value: self.best.value },
            explored  : self.explored,
        }
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_solver {
    use crate::*;

    fn solve(capacity: usize, pairs: Vec<(usize, usize)>) -> (usize, Vec<usize>, bool) {
        let instance = Instance::from_pairs(capacity, pairs).unwrap();
        let outcome  = BranchAndBound::new().maximize(&instance);
        assert!(outcome.solution.is_feasible());
        assert!(outcome.solution.is_binary());
        assert_eq!(outcome.completion.best_value, outcome.solution.value());
        (outcome.solution.value(), outcome.solution.quantities().to_vec(), outcome.completion.is_exact)
    }

    #[test]
    fn it_solves_the_tiny_fixture() {
        let (value, quantities, exact) = solve(10, vec![(5, 4), (3, 1), (4, 2)]);
        assert_eq!(6, value);
        assert_eq!(vec![1, 0, 1], quantities);
        assert!(exact);
    }
    #[test]
    fn an_item_heavier_than_the_sack_is_left_out() {
        let (value, quantities, _) = solve(4, vec![(5, 4)]);
        assert_eq!(0, value);
        assert_eq!(vec![0], quantities);
    }
    #[test]
    fn an_item_filling_the_sack_is_packed() {
        let (value, quantities, _) = solve(5, vec![(5, 4)]);
        assert_eq!(4, value);
        assert_eq!(vec![1], quantities);
    }
    #[test]
    fn a_null_capacity_packs_nothing() {
        let (value, quantities, exact) = solve(0, vec![(5, 4), (3, 1), (4, 2)]);
        assert_eq!(0, value);
        assert_eq!(vec![0, 0, 0], quantities);
        assert!(exact);
    }
    #[test]
    fn an_empty_instance_has_an_empty_solution() {
        let (value, quantities, exact) = solve(10, vec![]);
        assert_eq!(0, value);
        assert!(quantities.is_empty());
        assert!(exact);
    }
    #[test]
    fn the_last_item_is_decided_too() {
        // the best solution requires packing the least dense item
        let (value, quantities, _) = solve(10, vec![(6, 12), (4, 4)]);
        assert_eq!(16, value);
        assert_eq!(vec![1, 1], quantities);
    }
    #[test]
    fn identical_densities_fill_as_much_weight_as_possible() {
        let (value, _, _) = solve(10, vec![(4, 8), (3, 6), (6, 12), (5, 10)]);
        assert_eq!(20, value);
    }
    #[test]
    fn zero_valued_items_are_harmless() {
        let (value, _, _) = solve(10, vec![(4, 0), (3, 0), (6, 5)]);
        assert_eq!(5, value);
    }
    #[test]
    fn greedy_is_not_optimal_but_the_solver_is() {
        // the greedy picks item 0 (density 2.0) and gets stuck with 65
        let (value, quantities, _) = solve(50, vec![(10, 20), (25, 45), (25, 45)]);
        assert_eq!(90, value);
        assert_eq!(vec![0, 1, 1], quantities);
    }
    #[test]
    fn weights_close_to_the_limit_do_not_overflow() {
        // together, both items weigh usize::MAX which exceeds the capacity
        let half = usize::MAX / 2;
        let (value, quantities, exact) = solve(usize::MAX - 1, vec![(half, 3), (half + 1, 2)]);
        assert_eq!(3, value);
        assert_eq!(vec![1, 0], quantities);
        assert!(exact);

        let instance = Instance::from_pairs(usize::MAX - 1, vec![(half, 3), (half + 1, 2)]).unwrap();
        assert_eq!(3, GreedyHeuristic.solve(&instance).value());
        assert_eq!(3, Enumeration.solve(&instance).value());
    }
    #[test]
    fn the_solver_has_a_name() {
        assert_eq!("BranchAndBound", BranchAndBound::new().name());
    }
    #[test]
    fn solve_and_maximize_agree() {
        let instance = Instance::from_pairs(10, vec![(5, 4), (3, 1), (4, 2)]).unwrap();
        let solver   = BranchAndBound::new();
        assert_eq!(solver.maximize(&instance).solution, solver.solve(&instance));
    }
    #[test]
    fn a_cutoff_makes_the_outcome_inexact() {
        let instance = Instance::from_pairs(10, vec![(5, 4), (3, 1), (4, 2)]).unwrap();
        let outcome  = BranchAndBound::with_cutoff(NodeBudget(0)).maximize(&instance);
        assert!(!outcome.completion.is_exact);
        assert_eq!(0, outcome.completion.best_value);
        assert_eq!(0, outcome.explored);
        assert!(outcome.solution.is_feasible());
    }
    #[test]
    fn a_large_budget_does_not_alter_the_search() {
        let instance = Instance::from_pairs(10, vec![(5, 4), (3, 1), (4, 2)]).unwrap();
        let limited  = BranchAndBound::with_cutoff(NodeBudget(1_000)).maximize(&instance);
        let complete = BranchAndBound::new().maximize(&instance);
        assert!(limited.completion.is_exact);
        assert_eq!(complete.completion, limited.completion);
        assert_eq!(complete.explored, limited.explored);
    }
    #[test]
    fn a_budget_matching_the_search_effort_is_exact() {
        // this search ends with a dominated node left on the fringe
        let instance = Instance::from_pairs(12, vec![(4, 3), (6, 5), (3, 2), (5, 4), (2, 1)]).unwrap();
        let complete = BranchAndBound::new().maximize(&instance);
        let limited  = BranchAndBound::with_cutoff(NodeBudget(complete.explored)).maximize(&instance);
        assert!(limited.completion.is_exact);
        assert_eq!(complete.completion, limited.completion);
        assert_eq!(complete.solution, limited.solution);
    }
    #[test]
    fn a_budget_one_node_short_is_not_exact() {
        let instance = Instance::from_pairs(12, vec![(4, 3), (6, 5), (3, 2), (5, 4), (2, 1)]).unwrap();
        let complete = BranchAndBound::new().maximize(&instance);
        let limited  = BranchAndBound::with_cutoff(NodeBudget(complete.explored - 1)).maximize(&instance);
        assert!(!limited.completion.is_exact);
        assert_eq!(complete.explored - 1, limited.explored);
    }
    #[test]
    fn the_lineage_only_links_pushed_or_improving_children() {
        let instance   = Instance::from_pairs(10, vec![(5, 4), (3, 1), (4, 2)]).unwrap();
        let context    = SearchContext::new(&instance);
        let mut fringe = SimpleFringe::new(MaxBound);
        let mut search = super::Search::new(&context, &NoCutoff, &mut fringe);
        let outcome    = search.maximize();
        assert_eq!(6, outcome.completion.best_value);
        // packing item 0 then item 2 improves the incumbent; packing item 1
        // on top of them does not fit, and no other packed child is pushed
        assert_eq!(2, search.lineage.len());
    }
    #[test]
    fn pruning_keeps_the_search_small() {
        // 2^20 leaves, but the bound prunes almost everything
        let pairs = (1..=20).map(|i| (i, i * 2 + 1)).collect::<Vec<_>>();
        let instance = Instance::from_pairs(50, pairs).unwrap();
        let outcome  = BranchAndBound::new().maximize(&instance);
        assert!(outcome.completion.is_exact);
        assert!(outcome.explored < 1 << 20);
        assert_eq!(Enumeration.solve(&instance).value(), outcome.completion.best_value);
    }
}
