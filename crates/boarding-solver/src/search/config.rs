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

use std::time::Duration;

/// Optional bounds on a local search run. A run that hits any of them stops
/// early and reports the best ordering found so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of improving swaps to adopt.
    pub max_accepted_moves: Option<u64>,
    /// Maximum number of candidate orderings to simulate.
    pub max_evaluations: Option<u64>,
    /// Wall-clock budget measured from the start of the run.
    pub time_limit: Option<Duration>,
}

impl SearchLimits {
    #[inline]
    pub fn unbounded() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_max_accepted_moves(mut self, n: u64) -> Self {
        self.max_accepted_moves = Some(n);
        self
    }

    #[inline]
    pub fn with_max_evaluations(mut self, n: u64) -> Self {
        self.max_evaluations = Some(n);
        self
    }

    #[inline]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.max_accepted_moves.is_none()
            && self.max_evaluations.is_none()
            && self.time_limit.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalSearchConfig {
    pub limits: SearchLimits,
    /// Attach the full boarding schedule to the returned solution. Costs one
    /// extra simulation at the end of the run.
    pub record_schedule: bool,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            limits: SearchLimits::unbounded(),
            record_schedule: true,
        }
    }
}

impl LocalSearchConfig {
    #[inline]
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    #[inline]
    pub fn with_record_schedule(mut self, yes: bool) -> Self {
        self.record_schedule = yes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        assert!(LocalSearchConfig::default().limits.is_unbounded());
        let l = SearchLimits::unbounded().with_max_evaluations(10);
        assert!(!l.is_unbounded());
        assert_eq!(l.max_evaluations, Some(10));
    }
}
