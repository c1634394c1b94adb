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

//! This module provides the implementation of a parallel branch-and-bound
//! solver. That is a solver that explores the search tree using as many 
//! threads as requested. By default, it uses as many threads as the number of
//! hardware threads available on the machine.
//!
//! All threads share one single fringe, one single node arena and one single
//! incumbent. These are only ever manipulated within critical sections, 
//! whereas the bounding of the children of a node happens outside of them.

use log::{debug, info};
use parking_lot::{Condvar, Mutex};

use crate::{Completion, Cutoff, Fringe, Instance, Lineage, MaxBound, NoCutoff, Outcome, Reason, SearchContext, SimpleFringe, Solution, Solver, SubProblem};

use super::sequential::Incumbent;

/// The shared data that may only be manipulated within critical sections
struct Critical<'b> {
    /// This is the fringe: the set of nodes that must still be explored before
    /// the problem can be considered 'solved'.
    ///
    /// # Note:
    /// The fringe pops the node having the highest bound first. As soon as a
    /// node whose bound does not beat the incumbent is popped, the remainder 
    /// of the fringe can be dropped.
    fringe: &'b mut (dyn Fringe + Send),
    /// The items packed along the branches of the search
    lineage: Lineage,
    /// The best solution found so far
    best: Incumbent,
    /// This is the number of nodes that are currently being explored.
    ///
    /// # Note
    /// This is the piece of information that lets us distinguish between a
    /// node-starvation and the completion of the problem resolution. It needs 
    /// to be carefully managed to guarantee the termination of all threads.
    ongoing: usize,
    /// The number of nodes that have been popped from the fringe and expanded
    explored: usize,
    /// The id to give to the next node being created
    next_id: usize,
    /// If we decide not to go through a complete proof of optimality, this is
    /// the reason why we took that decision.
    abort_proof: Option<Reason>,
}
impl Critical<'_> {
    fn fresh_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// The state which is shared among the many running threads: it provides an
/// access to the critical data (protected by a mutex) as well as a monitor
/// (condvar) to park threads in case of node-starvation.
struct Shared<'a, 'b> {
    /// The sorted items and bounding function
    context: &'b SearchContext<'a>,
    /// A cutoff heuristic meant to decide when to stop the search
    cutoff: &'b (dyn Cutoff + Sync),
    /// This is the shared state data which can only be accessed within 
    /// critical sections. Therefore, it is protected by a mutex which
    /// prevents concurrent reads/writes.
    critical: Mutex<Critical<'b>>,
    /// This is the monitor on which nodes must wait when facing an empty 
    /// fringe. The corresponding mutex is `critical`.
    monitor: Condvar,
}

/// The workload a thread can get from the shared state
enum WorkLoad {
    /// There is no work left to be done: you can safely terminate
    Complete,
    /// The work must stop because of an external cutoff
    Aborted,
    /// There is nothing you can do right now. Check again when you wake up
    Starvation,
    /// The item to process
    WorkItem { node: SubProblem },
}

/// A branch-and-bound solver that spreads the exploration of the search tree
/// over several threads.
///
/// # Example Usage
/// ```
/// # use knapsack_bb::*;
/// let instance = Instance::from_pairs(50, vec![(10, 60), (20, 100), (30, 120)]).unwrap();
/// let solver   = ParallelBranchAndBound::new().with_nb_threads(4);
/// let outcome  = solver.maximize(&instance);
///
/// assert!(outcome.completion.is_exact);
/// assert_eq!(220, outcome.completion.best_value);
/// ```
#[derive(Debug, Clone)]
pub struct ParallelBranchAndBound<C: Cutoff = NoCutoff> {
    cutoff: C,
    /// The number of threads exploring the search tree
    nb_threads: usize,
}

impl ParallelBranchAndBound<NoCutoff> {
    pub fn new() -> Self {
        Self::with_cutoff(NoCutoff)
    }
}
impl Default for ParallelBranchAndBound<NoCutoff> {
    fn default() -> Self {
        Self::new()
    }
}

impl <C: Cutoff + Sync> ParallelBranchAndBound<C> {
    pub fn with_cutoff(cutoff: C) -> Self {
        Self { cutoff, nb_threads: num_cpus::get() }
    }
    /// Sets the number of threads used by the solver (at least one)
    pub fn with_nb_threads(mut self, nb_threads: usize) -> Self {
        self.nb_threads = nb_threads.max(1);
        self
    }
    pub fn nb_threads(&self) -> usize {
        self.nb_threads
    }

    /// Searches for the optimal solution of the given instance, using
    /// `nb_threads` threads.
    pub fn maximize<'a>(&self, instance: &'a Instance) -> Outcome<'a> {
        let context    = SearchContext::new(instance);
        let mut fringe = SimpleFringe::new(MaxBound);

        let root = context.root();
        fringe.push(root);

        let shared = Shared {
            context: &context,
            cutoff : &self.cutoff,
            critical: Mutex::new(Critical {
                fringe     : &mut fringe,
                lineage    : Lineage::new(),
                best       : Incumbent::default(),
                ongoing    : 0,
                explored   : 0,
                next_id    : root.id + 1,
                abort_proof: None,
            }),
            monitor: Condvar::new(),
        };

        std::thread::scope(|s| {
            for _ in 0..self.nb_threads {
                let shared = &shared;
                s.spawn(move || {
                    loop {
                        match shared.get_workload() {
                            WorkLoad::Complete   => break,
                            WorkLoad::Aborted    => break,
                            WorkLoad::Starvation => continue,
                            WorkLoad::WorkItem { node } => {
                                shared.process_one_node(node);
                                shared.notify_node_finished();
                            }
                        }
                    }
                });
            }
        });

        let critical = shared.critical.lock();
        let is_exact = critical.abort_proof.is_none();
        if is_exact {
            info!("optimum {} proved after {} nodes on {} threads", critical.best.value, critical.explored, self.nb_threads);
        }
        let solution = context.solution(critical.lineage.items(critical.best.lineage));
        let completion = Completion { is_exact, best_value: critical.best.value };
        Outcome { solution, completion, explored: critical.explored }
    }
}

impl <C: Cutoff + Sync> Solver for ParallelBranchAndBound<C> {
    type Quantity = usize;

    fn solve<'a>(&self, instance: &'a Instance) -> Solution<'a> {
        self.maximize(instance).solution
    }

    fn name(&self) -> &'static str {
        "ParallelBranchAndBound"
    }
}

impl Shared<'_, '_> {
    /// Consults the shared state to fetch a workload. Depending on the current
    /// state, the workload can either be:
    ///
    ///   + Complete, when the problem is solved and all threads should stop
    ///   + Aborted, when the cutoff criterion was met
    ///   + Starvation, when there is no subproblem available for processing
    ///     at the time being (but some subproblem are still being processed
    ///     and thus the problem cannot be considered solved).
    ///   + WorkItem, when the thread successfully obtained a subproblem to
    ///     process.
    fn get_workload(&self) -> WorkLoad {
        let mut critical = self.critical.lock();

        // Are we done ?
        if critical.ongoing == 0 && critical.fringe.is_empty() {
            self.monitor.notify_all();
            return WorkLoad::Complete;
        }

        // Do we need to stop
        if critical.abort_proof.is_some() {
            return WorkLoad::Aborted;
        }

        // Nothing to do yet ? => Wait for someone to post jobs
        if critical.fringe.is_empty() {
            self.monitor.wait(&mut critical);
            return WorkLoad::Starvation;
        }

        let Some(node) = critical.fringe.pop() else {
            return WorkLoad::Starvation;
        };
        // Nothing relevant ? => Wait for someone to post jobs
        if !critical.best.is_beaten_by(&node) {
            critical.fringe.clear();
            return WorkLoad::Starvation;
        }
        if self.context.is_leaf(&node) {
            return WorkLoad::Starvation;
        }

        // Dominated nodes are dropped before the cutoff gets a say
        if self.cutoff.must_stop(critical.explored) {
            info!("search aborted after {} nodes, {} left open", critical.explored, critical.fringe.len() + 1);
            critical.abort_proof = Some(Reason::CutoffOccurred);
            critical.fringe.clear();
            self.monitor.notify_all();
            return WorkLoad::Aborted;
        }

        // Consume the current node and process it
        critical.ongoing  += 1;
        critical.explored += 1;

        WorkLoad::WorkItem { node }
    }

    /// Derives both children of the node outside of any critical section,
    /// then publishes them (and the improved incumbent, if any).
    fn process_one_node(&self, node: SubProblem) {
        let with    = self.context.include(&node);
        let without = self.context.exclude(&node);

        let mut critical = self.critical.lock();
        let open = critical.abort_proof.is_none();

        if let Some(mut with) = with {
            with.id = critical.fresh_id();
            let improves  = with.value > critical.best.value;
            let promising = open && with.bound.0 > critical.best.value.max(with.value) as f64;
            if improves || promising {
                with.lineage = Some(critical.lineage.push(node.lineage, node.level));
            }
            if improves {
                critical.best = Incumbent { value: with.value, weight: with.weight, lineage: with.lineage };
                debug!("new incumbent: value {} weight {} after {} nodes", with.value, with.weight, critical.explored);
            }
            if promising {
                critical.fringe.push(with);
            }
        }

        let mut without = without;
        without.id = critical.fresh_id();
        if open && critical.best.is_beaten_by(&without) {
            critical.fringe.push(without);
        }
    }

    /// Acknowledges that a thread finished processing its node.
    fn notify_node_finished(&self) {
        let mut critical = self.critical.lock();
        critical.ongoing -= 1;
        self.monitor.notify_all();
    }
}


// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_parallel {
    use crate::*;

    fn tiny() -> Instance {
        Instance::from_pairs(10, vec![(5, 4), (3, 1), (4, 2)]).unwrap()
    }

    #[test]
    fn it_solves_the_tiny_fixture_on_many_threads() {
        let instance = tiny();
        for nb_threads in 1..=8 {
            let outcome = ParallelBranchAndBound::new().with_nb_threads(nb_threads).maximize(&instance);
            assert!(outcome.completion.is_exact);
            assert_eq!(6, outcome.completion.best_value);
            assert_eq!(&[1, 0, 1], outcome.solution.quantities());
        }
    }
    #[test]
    fn the_number_of_threads_is_at_least_one() {
        let solver = ParallelBranchAndBound::new().with_nb_threads(0);
        assert_eq!(1, solver.nb_threads());
    }
    #[test]
    fn by_default_it_uses_every_hardware_thread() {
        assert_eq!(num_cpus::get(), ParallelBranchAndBound::new().nb_threads());
    }
    #[test]
    fn an_empty_instance_does_not_hang() {
        let instance = Instance::from_pairs(10, vec![]).unwrap();
        let outcome  = ParallelBranchAndBound::new().with_nb_threads(4).maximize(&instance);
        assert!(outcome.completion.is_exact);
        assert_eq!(0, outcome.completion.best_value);
    }
    #[test]
    fn a_cutoff_makes_the_outcome_inexact() {
        let instance = tiny();
        let outcome  = ParallelBranchAndBound::with_cutoff(NodeBudget(0)).with_nb_threads(4).maximize(&instance);
        assert!(!outcome.completion.is_exact);
        assert_eq!(0, outcome.explored);
        assert!(outcome.solution.is_feasible());
    }
    #[test]
    fn it_agrees_with_the_sequential_solver() {
        let pairs    = (1..=25).map(|i| (i * 7 % 23 + 1, i * 11 % 31 + 1)).collect::<Vec<_>>();
        let instance = Instance::from_pairs(60, pairs).unwrap();
        let parallel = ParallelBranchAndBound::new().with_nb_threads(4).maximize(&instance);
        let sequent  = BranchAndBound::new().maximize(&instance);
        assert!(parallel.completion.is_exact);
        assert_eq!(sequent.completion.best_value, parallel.completion.best_value);
        assert_eq!(parallel.completion.best_value, parallel.solution.value());
        assert!(parallel.solution.is_feasible());
    }
    #[test]
    fn the_solver_has_a_name() {
        assert_eq!("ParallelBranchAndBound", ParallelBranchAndBound::new().name());
    }
}
