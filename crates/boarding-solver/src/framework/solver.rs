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

use crate::{framework::err::SolverError, sim::simulate};
use boarding_core::prelude::BoardingNumeric;
use boarding_model::prelude::{Ordering, OrderingError, Problem, Solution};
use std::time::Instant;

/// Builds a boarding order from scratch.
pub trait ConstructionHeuristic<T> {
    fn name(&self) -> &str;

    fn construct(&mut self, problem: &Problem<T>) -> Result<Ordering, OrderingError>;
}

impl<T, H> ConstructionHeuristic<T> for Box<H>
where
    H: ConstructionHeuristic<T> + ?Sized,
{
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn construct(&mut self, problem: &Problem<T>) -> Result<Ordering, OrderingError> {
        (**self).construct(problem)
    }
}

/// Anything that turns a problem into a simulated solution.
///
/// Implementations stamp the solution with their `name` and the wall-clock
/// time spent in `solve`.
pub trait Solver<T> {
    fn name(&self) -> &str;

    fn solve(&mut self, problem: &Problem<T>) -> Result<Solution<T>, SolverError>;
}

/// Runs a construction heuristic and simulates its ordering.
#[derive(Debug, Clone)]
pub struct ConstructionSolver<H> {
    heuristic: H,
}

impl<H> ConstructionSolver<H> {
    #[inline]
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }

    #[inline]
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    #[inline]
    pub fn into_inner(self) -> H {
        self.heuristic
    }
}

impl<T, H> Solver<T> for ConstructionSolver<H>
where
    T: BoardingNumeric,
    H: ConstructionHeuristic<T>,
{
    #[inline]
    fn name(&self) -> &str {
        self.heuristic.name()
    }

    fn solve(&mut self, problem: &Problem<T>) -> Result<Solution<T>, SolverError> {
        let start = Instant::now();
        let ordering = self.heuristic.construct(problem)?;
        let schedule = simulate(problem, &ordering)?;
        Ok(Solution::from_schedule(ordering, schedule)
            .with_algorithm(self.heuristic.name())
            .with_computation_time(start.elapsed()))
    }
}

impl<H: std::fmt::Display> std::fmt::Display for ConstructionSolver<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ConstructionSolver({})", self.heuristic)
    }
}
