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

use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use env_logger::Env;
use knapsack_bb::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// Sequential best-first branch and bound
    Bnb,
    /// Branch and bound using several threads
    Parallel,
    /// Exhaustive enumeration (only for small instances)
    Enumeration,
    /// Optimum of the fractional relaxation
    Fractional,
    /// Density-sorting heuristic
    Greedy,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Solves a binary knapsack instance with a best-first branch and bound 
/// (or one of the alternative solvers)
struct Args {
    /// The path to the instance file
    fname: String,
    /// The solver to use
    #[clap(short, long, value_enum, default_value = "bnb")]
    solver: Strategy,
    /// The number of concurrent threads (parallel solver only)
    #[clap(short, long)]
    threads: Option<usize>,
    /// The maximum amount of time (in seconds) you would like the search to run
    #[clap(short, long)]
    duration: Option<u64>,
    /// The maximum number of nodes you would like the search to expand
    #[clap(short, long)]
    nodes: Option<usize>,
}

/// Stops the search as soon as any of the configured limits is reached
#[derive(Debug, Clone)]
struct Limits {
    time : Option<TimeBudget>,
    nodes: Option<NodeBudget>,
}
impl Cutoff for Limits {
    fn must_stop(&self, explored: usize) -> bool {
        self.time.as_ref().is_some_and(|t| t.must_stop(explored))
            || self.nodes.as_ref().is_some_and(|n| n.must_stop(explored))
    }
}

fn report<Q: Quantity>(duration: Duration, solution: &GenericSolution<'_, Q>, aborted: bool, explored: Option<usize>) {
    let selected = solution.quantities().iter().enumerate()
        .filter(|(_, q)| **q != Q::default())
        .map(|(i, _)| i)
        .collect::<Vec<_>>();

    println!("Duration:   {:.3} seconds\nObjective:  {}\nWeight:     {}\nCapacity:   {}\nAborted:    {}\nExplored:   {}\nSolution:   {:?}",
            duration.as_secs_f32(),
            solution.value(),
            solution.weight(),
            solution.instance().capacity(),
            aborted,
            explored.map_or_else(|| "-".to_string(), |n| n.to_string()),
            selected);
}

fn main() -> Result<(), ReadError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args     = Args::parse();
    let instance = read_instance(&args.fname)?;
    let limits   = Limits {
        time : args.duration.map(|secs| TimeBudget::new(Duration::from_secs(secs))),
        nodes: args.nodes.map(NodeBudget),
    };

    let start = Instant::now();
    match args.solver {
        Strategy::Bnb => {
            let outcome = BranchAndBound::with_cutoff(limits).maximize(&instance);
            report(start.elapsed(), &outcome.solution, !outcome.completion.is_exact, Some(outcome.explored));
        },
        Strategy::Parallel => {
            let mut solver = ParallelBranchAndBound::with_cutoff(limits);
            if let Some(threads) = args.threads {
                solver = solver.with_nb_threads(threads);
            }
            let outcome = solver.maximize(&instance);
            report(start.elapsed(), &outcome.solution, !outcome.completion.is_exact, Some(outcome.explored));
        },
        Strategy::Enumeration => {
            let solution = Enumeration.solve(&instance);
            report(start.elapsed(), &solution, false, None);
        },
        Strategy::Fractional => {
            let solution = FractionalSolver.solve(&instance);
            report(start.elapsed(), &solution, false, None);
        },
        Strategy::Greedy => {
            let solution = GreedyHeuristic.solve(&instance);
            report(start.elapsed(), &solution, false, None);
        },
    }
    Ok(())
}
