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

use crate::{
    framework::{
        err::SolverError,
        solver::{ConstructionHeuristic, ConstructionSolver, Solver},
    },
    search::{
        config::LocalSearchConfig,
        result::{AbortReason, LocalSearchOutcome},
        stats::LocalSearchStatistics,
    },
    sim::Simulator,
};
use boarding_core::prelude::BoardingNumeric;
use boarding_model::prelude::{Problem, Solution};
use std::time::Instant;

/// Pairwise-swap hill climbing with first improvement.
///
/// Pairs of positions `(i, j)` with `i < j` are tried in lexicographic
/// order. The first swap that strictly lowers the makespan is adopted and
/// the scan restarts at `(0, 1)`. The run ends when a full scan finds no
/// improving swap, or earlier when one of the configured limits is hit.
#[derive(Debug, Clone)]
pub struct SwapHillClimbing<T> {
    config: LocalSearchConfig,
    simulator: Simulator<T>,
}

impl<T: BoardingNumeric> Default for SwapHillClimbing<T> {
    fn default() -> Self {
        Self::new(LocalSearchConfig::default())
    }
}

impl<T: BoardingNumeric> SwapHillClimbing<T> {
    pub const NAME: &'static str = "SwapHillClimbing";

    #[inline]
    pub fn new(config: LocalSearchConfig) -> Self {
        Self {
            config,
            simulator: Simulator::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &LocalSearchConfig {
        &self.config
    }

    #[inline]
    fn limit_reached(&self, stats: &LocalSearchStatistics, start: Instant) -> Option<AbortReason> {
        let limits = &self.config.limits;
        if limits
            .max_accepted_moves
            .is_some_and(|max| stats.accepted_moves >= max)
        {
            return Some(AbortReason::MaxAcceptedMoves);
        }
        if limits
            .max_evaluations
            .is_some_and(|max| stats.evaluations >= max)
        {
            return Some(AbortReason::MaxEvaluations);
        }
        if limits
            .time_limit
            .is_some_and(|limit| start.elapsed() >= limit)
        {
            return Some(AbortReason::TimeLimit);
        }
        None
    }

    /// Improves `initial` until a local optimum or a limit is reached.
    ///
    /// The returned solution never has a larger makespan than `initial`,
    /// including when `initial` carries a makespan lower than what its
    /// ordering simulates to. In that case `initial` is returned unchanged.
    #[tracing::instrument(
        level = "debug",
        name = "Swap Hill Climbing",
        skip(self, problem, initial),
        fields(passengers = problem.passenger_count())
    )]
    pub fn improve(
        &mut self,
        problem: &Problem<T>,
        initial: Solution<T>,
    ) -> Result<LocalSearchOutcome<T>, SolverError> {
        let start = Instant::now();
        let mut stats = LocalSearchStatistics::default();

        let mut current = initial.ordering().clone();
        let mut best = self.simulator.makespan(problem, &current)?;
        let n = current.len();
        let mut abort = None;

        'search: loop {
            stats.on_pass();
            let mut improved = false;

            'scan: for i in 0..n {
                for j in (i + 1)..n {
                    if let Some(reason) = self.limit_reached(&stats, start) {
                        abort = Some(reason);
                        break 'search;
                    }

                    current.swap(i, j);
                    let candidate = self.simulator.makespan(problem, &current)?;
                    stats.on_evaluation();

                    if candidate < best {
                        tracing::trace!(
                            "swap ({}, {}) improves makespan {} -> {}",
                            i,
                            j,
                            best.value(),
                            candidate.value()
                        );
                        best = candidate;
                        stats.on_accepted_move();
                        improved = true;
                        break 'scan;
                    }
                    current.swap(i, j);
                }
            }

            if !improved {
                break;
            }
        }

        let refined = if self.config.record_schedule {
            let schedule = self.simulator.schedule(problem, &current)?;
            Solution::from_schedule(current, schedule)
        } else {
            Solution::new(current, best)
        };
        let algorithm = initial.algorithm().unwrap_or(Self::NAME).to_string();
        let prior = initial.computation_time().unwrap_or_default();
        let initial_makespan = initial.makespan();
        let elapsed = start.elapsed();

        // A caller-supplied makespan below the simulated one is kept as is.
        let solution = if refined.makespan() > initial_makespan {
            initial
        } else {
            refined
        }
        .with_algorithm(algorithm)
        .with_computation_time(prior + elapsed);

        stats.set_total_time(elapsed);
        tracing::debug!(
            "finished: makespan {} -> {}, {} accepted / {} evaluated",
            initial_makespan.value(),
            solution.makespan().value(),
            stats.accepted_moves,
            stats.evaluations
        );

        Ok(match abort {
            Some(reason) => LocalSearchOutcome::aborted(solution, reason, stats),
            None => LocalSearchOutcome::local_optimum(solution, stats),
        })
    }
}

/// Improves `initial` with an unbounded swap search.
pub fn improve<T: BoardingNumeric>(
    problem: &Problem<T>,
    initial: Solution<T>,
) -> Result<Solution<T>, SolverError> {
    Ok(SwapHillClimbing::default()
        .improve(problem, initial)?
        .into_solution())
}

/// A construction heuristic followed by swap hill climbing.
#[derive(Debug, Clone)]
pub struct LocalSearchSolver<T, H> {
    construction: ConstructionSolver<H>,
    search: SwapHillClimbing<T>,
    name: String,
}

impl<T, H> LocalSearchSolver<T, H>
where
    T: BoardingNumeric,
    H: ConstructionHeuristic<T>,
{
    pub fn new(heuristic: H, config: LocalSearchConfig) -> Self {
        let name = format!("{}+{}", heuristic.name(), SwapHillClimbing::<T>::NAME);
        Self {
            construction: ConstructionSolver::new(heuristic),
            search: SwapHillClimbing::new(config),
            name,
        }
    }

    /// Runs construction and search, keeping the search outcome.
    pub fn run(&mut self, problem: &Problem<T>) -> Result<LocalSearchOutcome<T>, SolverError> {
        let initial = self.construction.solve(problem)?;
        self.search.improve(problem, initial)
    }
}

impl<T, H> Solver<T> for LocalSearchSolver<T, H>
where
    T: BoardingNumeric,
    H: ConstructionHeuristic<T>,
{
    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    fn solve(&mut self, problem: &Problem<T>) -> Result<Solution<T>, SolverError> {
        let solution = self.run(problem)?.into_solution();
        Ok(solution.with_algorithm(self.name.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        construction::{MaxSettleRow, OutsideInBackToFront, RandomOrdering},
        search::{config::SearchLimits, result::LocalSearchTerminationReason},
        sim::makespan,
    };
    use boarding_core::prelude::{TimeDelta, TimePoint};
    use boarding_model::prelude::{Ordering, PassengerIndex, ProblemBuilder, Seat};
    use std::time::Duration;

    #[inline]
    fn td(v: i64) -> TimeDelta<i64> {
        TimeDelta::new(v)
    }

    /// A 6x2 cabin, fully booked, with varied settle and move times.
    fn problem() -> Problem<i64> {
        let mut b = ProblemBuilder::new(6, 2);
        for row in 1..=6usize {
            for col in 1..=2usize {
                let settle = ((row * 7 + col * 3) % 5 + 1) as i64;
                let moves = (1..=6).map(|k| td(((k + row + col) % 3) as i64)).collect::<Vec<_>>();
                b.push_seated(Seat::new(row, col), td(settle), moves);
            }
        }
        b.build().unwrap()
    }

    fn front_to_back(p: &Problem<i64>) -> Solution<i64> {
        let o = Ordering::identity(p);
        let m = makespan(p, &o).unwrap();
        Solution::new(o, m)
    }

    fn is_permutation(p: &Problem<i64>, s: &Solution<i64>) -> bool {
        Ordering::try_new(p, s.ordering().as_slice().to_vec()).is_ok()
    }

    #[test]
    fn test_never_worse_than_initial_and_reaches_local_optimum() {
        let p = problem();
        let initial = front_to_back(&p);
        let before = initial.makespan();
        let out = SwapHillClimbing::default().improve(&p, initial).unwrap();

        assert!(out.is_local_optimum());
        assert!(out.solution().makespan() <= before);
        assert!(is_permutation(&p, out.solution()));
        assert_eq!(
            makespan(&p, out.solution().ordering()).unwrap(),
            out.solution().makespan()
        );
        assert!(out.solution().schedule().is_some());
    }

    #[test]
    fn test_improves_front_to_back_boarding() {
        // Boarding front to back through a single aisle serializes every
        // settle; the search must find something strictly better.
        let p = problem();
        let initial = front_to_back(&p);
        let before = initial.makespan();
        let after = improve(&p, initial).unwrap().makespan();
        assert!(after < before, "expected {after:?} < {before:?}");
    }

    #[test]
    fn test_local_optimum_is_fixed_point() {
        let p = problem();
        let first = improve(&p, front_to_back(&p)).unwrap();
        let out = SwapHillClimbing::default()
            .improve(&p, first.clone())
            .unwrap();
        assert_eq!(out.solution().ordering(), first.ordering());
        assert_eq!(out.solution().makespan(), first.makespan());
        assert_eq!(out.statistics().accepted_moves, 0);
        assert_eq!(out.statistics().passes, 1);
        let n = p.passenger_count() as u64;
        assert_eq!(out.statistics().evaluations, n * (n - 1) / 2);
    }

    #[test]
    fn test_evaluation_limit_aborts_with_valid_solution() {
        let p = problem();
        let initial = front_to_back(&p);
        let before = initial.makespan();
        let config = LocalSearchConfig::default()
            .with_limits(SearchLimits::unbounded().with_max_evaluations(5));
        let out = SwapHillClimbing::new(config).improve(&p, initial).unwrap();

        assert_eq!(
            out.termination_reason(),
            LocalSearchTerminationReason::Aborted(AbortReason::MaxEvaluations)
        );
        assert_eq!(out.statistics().evaluations, 5);
        assert!(out.solution().makespan() <= before);
        assert!(is_permutation(&p, out.solution()));
    }

    #[test]
    fn test_accepted_move_limit() {
        let p = problem();
        let config = LocalSearchConfig::default()
            .with_limits(SearchLimits::unbounded().with_max_accepted_moves(1));
        let out = SwapHillClimbing::new(config)
            .improve(&p, front_to_back(&p))
            .unwrap();
        assert_eq!(out.statistics().accepted_moves, 1);
        assert_eq!(
            out.termination_reason(),
            LocalSearchTerminationReason::Aborted(AbortReason::MaxAcceptedMoves)
        );
    }

    #[test]
    fn test_zero_time_limit_returns_initial() {
        let p = problem();
        let initial = front_to_back(&p);
        let config = LocalSearchConfig::default()
            .with_limits(SearchLimits::unbounded().with_time_limit(Duration::ZERO))
            .with_record_schedule(false);
        let out = SwapHillClimbing::new(config)
            .improve(&p, initial.clone())
            .unwrap();
        assert_eq!(
            out.termination_reason(),
            LocalSearchTerminationReason::Aborted(AbortReason::TimeLimit)
        );
        assert_eq!(out.solution().ordering(), initial.ordering());
        assert!(out.solution().schedule().is_none());
    }

    #[test]
    fn test_understated_initial_makespan_is_never_exceeded() {
        let p = problem();
        let o = Ordering::identity(&p);
        let initial = Solution::new(o.clone(), TimePoint::new(1));
        let out = SwapHillClimbing::default().improve(&p, initial).unwrap();
        assert_eq!(out.solution().makespan(), TimePoint::new(1));
        assert_eq!(out.solution().ordering(), &o);
        assert!(out.statistics().accepted_moves > 0);
    }

    #[test]
    fn test_single_passenger_is_trivially_optimal() {
        let mut b = ProblemBuilder::new(2, 1);
        b.push_seated(Seat::new(2, 1), td(3), vec![td(1)]);
        let p = b.build().unwrap();
        let out = SwapHillClimbing::default()
            .improve(&p, front_to_back(&p))
            .unwrap();
        assert!(out.is_local_optimum());
        assert_eq!(out.statistics().evaluations, 0);
        assert_eq!(out.solution().makespan(), TimePoint::new(4));
    }

    #[test]
    fn test_every_heuristic_refines_to_permutation() {
        let p = problem();
        let mut solvers: Vec<Box<dyn Solver<i64>>> = vec![
            Box::new(LocalSearchSolver::new(
                MaxSettleRow,
                LocalSearchConfig::default(),
            )),
            Box::new(LocalSearchSolver::new(
                OutsideInBackToFront,
                LocalSearchConfig::default(),
            )),
            Box::new(LocalSearchSolver::new(
                RandomOrdering::from_seed(3),
                LocalSearchConfig::default(),
            )),
        ];
        for solver in solvers.iter_mut() {
            let s = solver.solve(&p).unwrap();
            assert!(is_permutation(&p, &s), "{} broke the permutation", solver.name());
            assert_eq!(s.algorithm(), Some(solver.name()));
        }
    }

    #[test]
    fn test_run_keeps_order_of_identical_passengers_irrelevant() {
        // Two interchangeable passengers: swapping them never counts as an
        // improvement.
        let mut b = ProblemBuilder::new(1, 2);
        b.push_seated(Seat::new(1, 1), td(2), Vec::new())
            .push_seated(Seat::new(1, 2), td(2), Vec::new());
        let p = b.build().unwrap();
        let out = SwapHillClimbing::default()
            .improve(&p, front_to_back(&p))
            .unwrap();
        assert_eq!(out.statistics().accepted_moves, 0);
        assert_eq!(
            out.solution().ordering().as_slice(),
            &[PassengerIndex::new(0), PassengerIndex::new(1)]
        );
    }
}
