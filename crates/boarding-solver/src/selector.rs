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

//! Runs every construction heuristic, refines each with swap hill climbing
//! and keeps the best result.

use crate::{
    construction::Strategy,
    framework::{
        err::SolverError,
        solver::{ConstructionSolver, Solver},
    },
    rng::SeedSequencer,
    search::{
        config::LocalSearchConfig, hill_climb::SwapHillClimbing,
        result::LocalSearchTerminationReason, stats::LocalSearchStatistics,
    },
};
use boarding_core::prelude::{BoardingNumeric, TimePoint};
use boarding_model::prelude::{Problem, Solution};
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Strategies in the order they are run. On equal makespans the earlier
    /// strategy wins.
    pub strategies: Vec<Strategy>,
    pub seed: u64,
    pub local_search: LocalSearchConfig,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            strategies: Strategy::ALL.to_vec(),
            seed: 0,
            local_search: LocalSearchConfig::default(),
        }
    }
}

impl SelectorConfig {
    #[inline]
    pub fn with_strategies<I: IntoIterator<Item = Strategy>>(mut self, strategies: I) -> Self {
        self.strategies = strategies.into_iter().collect();
        self
    }

    #[inline]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[inline]
    pub fn with_local_search(mut self, config: LocalSearchConfig) -> Self {
        self.local_search = config;
        self
    }
}

/// What one strategy achieved.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateReport<T> {
    pub strategy: Strategy,
    pub constructed: TimePoint<T>,
    pub refined: TimePoint<T>,
    pub termination: LocalSearchTerminationReason,
    pub statistics: LocalSearchStatistics,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionOutcome<T> {
    best: Solution<T>,
    best_strategy: Strategy,
    candidates: Vec<CandidateReport<T>>,
}

impl<T> SelectionOutcome<T> {
    #[inline]
    pub fn best(&self) -> &Solution<T> {
        &self.best
    }

    #[inline]
    pub fn best_strategy(&self) -> Strategy {
        self.best_strategy
    }

    #[inline]
    pub fn candidates(&self) -> &[CandidateReport<T>] {
        &self.candidates
    }

    #[inline]
    pub fn into_best(self) -> Solution<T> {
        self.best
    }
}

#[derive(Debug, Clone)]
pub struct HeuristicSearch<T> {
    config: SelectorConfig,
    search: SwapHillClimbing<T>,
}

impl<T: BoardingNumeric> Default for HeuristicSearch<T> {
    fn default() -> Self {
        Self::new(SelectorConfig::default())
    }
}

impl<T: BoardingNumeric> HeuristicSearch<T> {
    pub const NAME: &'static str = "HeuristicSearch";

    pub fn new(config: SelectorConfig) -> Self {
        let search = SwapHillClimbing::new(config.local_search.clone());
        Self { config, search }
    }

    #[inline]
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    #[tracing::instrument(
        level = "info",
        name = "Heuristic Search",
        skip(self, problem),
        fields(passengers = problem.passenger_count())
    )]
    pub fn run(&mut self, problem: &Problem<T>) -> Result<SelectionOutcome<T>, SolverError> {
        let seeds = SeedSequencer::new(self.config.seed);
        let mut best: Option<(Strategy, Solution<T>)> = None;
        let mut candidates = Vec::with_capacity(self.config.strategies.len());

        for (slot, &strategy) in self.config.strategies.iter().enumerate() {
            let mut construction = ConstructionSolver::new(strategy.build::<T>(seeds.for_slot(slot)));
            let initial = construction.solve(problem)?;
            let constructed = initial.makespan();

            let outcome = self.search.improve(problem, initial)?;
            let refined = outcome.solution().makespan();
            tracing::info!(
                "{} found solution with {} makespan (constructed {}, {})",
                strategy,
                refined.value(),
                constructed.value(),
                outcome.termination_reason()
            );

            candidates.push(CandidateReport {
                strategy,
                constructed,
                refined,
                termination: outcome.termination_reason(),
                statistics: outcome.statistics().clone(),
            });

            let solution = outcome.into_solution();
            let replace = match &best {
                None => true,
                Some((_, incumbent)) => solution.is_better_than(incumbent),
            };
            if replace {
                best = Some((strategy, solution));
            }
        }

        let (best_strategy, best) = best.ok_or(SolverError::NoStrategies)?;
        Ok(SelectionOutcome {
            best,
            best_strategy,
            candidates,
        })
    }
}

impl<T: BoardingNumeric> Solver<T> for HeuristicSearch<T> {
    #[inline]
    fn name(&self) -> &str {
        Self::NAME
    }

    fn solve(&mut self, problem: &Problem<T>) -> Result<Solution<T>, SolverError> {
        let start = Instant::now();
        let best = self.run(problem)?.into_best();
        Ok(best
            .with_algorithm(Self::NAME)
            .with_computation_time(start.elapsed()))
    }
}

/// Best refined solution over all strategies with the default settings.
pub fn select_best<T: BoardingNumeric>(problem: &Problem<T>) -> Result<Solution<T>, SolverError> {
    HeuristicSearch::default().solve(problem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::makespan;
    use boarding_core::prelude::TimeDelta;
    use boarding_model::prelude::{Ordering, ProblemBuilder, Seat};

    #[inline]
    fn td(v: i64) -> TimeDelta<i64> {
        TimeDelta::new(v)
    }

    fn problem() -> Problem<i64> {
        let mut b = ProblemBuilder::new(5, 2);
        for row in 1..=5usize {
            for col in 1..=2usize {
                let settle = ((row * 3 + col) % 4 + 1) as i64;
                let moves = (1..=5).map(|k| td(((k * row + col) % 2) as i64)).collect::<Vec<_>>();
                b.push_seated(Seat::new(row, col), td(settle), moves);
            }
        }
        b.build().unwrap()
    }

    #[test]
    fn test_best_is_minimum_over_candidates() {
        let p = problem();
        let out = HeuristicSearch::default().run(&p).unwrap();
        assert_eq!(out.candidates().len(), 3);
        let min = out.candidates().iter().map(|c| c.refined).min().unwrap();
        assert_eq!(out.best().makespan(), min);
        assert_eq!(
            makespan(&p, out.best().ordering()).unwrap(),
            out.best().makespan()
        );
        for c in out.candidates() {
            assert!(c.refined <= c.constructed);
        }
    }

    #[test]
    fn test_candidates_follow_configured_order() {
        let p = problem();
        let out = HeuristicSearch::default().run(&p).unwrap();
        let order: Vec<Strategy> = out.candidates().iter().map(|c| c.strategy).collect();
        assert_eq!(order, Strategy::ALL.to_vec());
    }

    #[test]
    fn test_ties_go_to_earlier_strategy() {
        // All passengers interchangeable: every ordering has the same makespan.
        let mut b = ProblemBuilder::new(1, 3);
        for col in 1..=3 {
            b.push_seated(Seat::new(1, col), td(2), Vec::new());
        }
        let p = b.build().unwrap();

        let out = HeuristicSearch::default().run(&p).unwrap();
        assert_eq!(out.best_strategy(), Strategy::MaxSettleRow);

        let config = SelectorConfig::default()
            .with_strategies([Strategy::Random, Strategy::OutsideInBackToFront]);
        let out = HeuristicSearch::new(config).run(&p).unwrap();
        assert_eq!(out.best_strategy(), Strategy::Random);
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let p = problem();
        let config = SelectorConfig::default()
            .with_strategies([Strategy::Random])
            .with_seed(99);
        let a = HeuristicSearch::new(config.clone()).run(&p).unwrap();
        let b = HeuristicSearch::new(config).run(&p).unwrap();
        assert_eq!(a.best().ordering(), b.best().ordering());
    }

    #[test]
    fn test_empty_strategy_set_is_an_error() {
        let p = problem();
        let config = SelectorConfig::default().with_strategies(Vec::new());
        assert_eq!(
            HeuristicSearch::new(config).run(&p).unwrap_err(),
            SolverError::NoStrategies
        );
    }

    #[test]
    fn test_select_best_stamps_algorithm() {
        let p = problem();
        let s = select_best(&p).unwrap();
        assert_eq!(s.algorithm(), Some(HeuristicSearch::<i64>::NAME));
        assert!(s.computation_time().is_some());
        assert!(Ordering::try_new(&p, s.ordering().as_slice().to_vec()).is_ok());
    }

    #[test]
    fn test_empty_problem() {
        let p = ProblemBuilder::<i64>::new(2, 2).build().unwrap();
        let s = select_best(&p).unwrap();
        assert!(s.ordering().is_empty());
        assert_eq!(s.makespan(), TimePoint::new(0));
    }
}
