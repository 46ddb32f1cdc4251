// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Boarding Solver
//!
//! Evaluation and optimization of boarding orders.
//!
//! - `sim`: the boarding-time simulator.
//! - `construction`: one-pass heuristics producing an initial order.
//! - `search`: pairwise-swap hill climbing on top of an order.
//! - `selector`: runs all heuristics with search and keeps the best.
//! - `persist`: rebuilds solutions from stored result records.
//!
//! Everything is single-threaded. A `Problem` is never mutated, so callers
//! may evaluate several strategies on separate threads themselves.

pub mod construction;
pub mod framework;
pub mod persist;
pub mod rng;
pub mod search;
pub mod selector;
pub mod sim;

pub mod prelude {
    pub use crate::construction::{MaxSettleRow, OutsideInBackToFront, RandomOrdering, Strategy};
    pub use crate::framework::{
        err::SolverError,
        solver::{ConstructionHeuristic, ConstructionSolver, Solver},
    };
    pub use crate::persist::load_solution;
    pub use crate::search::{
        LocalSearchConfig, LocalSearchOutcome, LocalSearchSolver, LocalSearchStatistics,
        LocalSearchTerminationReason, SearchLimits, SwapHillClimbing, improve,
    };
    pub use crate::selector::{HeuristicSearch, SelectionOutcome, SelectorConfig, select_best};
    pub use crate::sim::{Simulator, makespan, simulate};
}
