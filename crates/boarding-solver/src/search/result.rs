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

use crate::search::stats::LocalSearchStatistics;
use boarding_model::prelude::Solution;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbortReason {
    MaxAcceptedMoves,
    MaxEvaluations,
    TimeLimit,
}

impl std::fmt::Display for AbortReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbortReason::MaxAcceptedMoves => write!(f, "accepted move limit reached"),
            AbortReason::MaxEvaluations => write!(f, "evaluation limit reached"),
            AbortReason::TimeLimit => write!(f, "time limit reached"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalSearchTerminationReason {
    /// A full scan of all swaps found no improvement.
    LocalOptimum,
    /// A search limit stopped the run before a local optimum was confirmed.
    Aborted(AbortReason),
}

impl std::fmt::Display for LocalSearchTerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocalSearchTerminationReason::LocalOptimum => write!(f, "Local Optimum Reached"),
            LocalSearchTerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocalSearchOutcome<T> {
    termination_reason: LocalSearchTerminationReason,
    solution: Solution<T>,
    statistics: LocalSearchStatistics,
}

impl<T> LocalSearchOutcome<T> {
    #[inline]
    pub fn local_optimum(solution: Solution<T>, statistics: LocalSearchStatistics) -> Self {
        Self {
            termination_reason: LocalSearchTerminationReason::LocalOptimum,
            solution,
            statistics,
        }
    }

    #[inline]
    pub fn aborted(
        solution: Solution<T>,
        reason: AbortReason,
        statistics: LocalSearchStatistics,
    ) -> Self {
        Self {
            termination_reason: LocalSearchTerminationReason::Aborted(reason),
            solution,
            statistics,
        }
    }

    #[inline]
    pub fn termination_reason(&self) -> LocalSearchTerminationReason {
        self.termination_reason
    }

    #[inline]
    pub fn is_local_optimum(&self) -> bool {
        self.termination_reason == LocalSearchTerminationReason::LocalOptimum
    }

    #[inline]
    pub fn solution(&self) -> &Solution<T> {
        &self.solution
    }

    #[inline]
    pub fn statistics(&self) -> &LocalSearchStatistics {
        &self.statistics
    }

    #[inline]
    pub fn into_solution(self) -> Solution<T> {
        self.solution
    }
}
