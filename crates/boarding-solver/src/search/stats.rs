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

/// Counters collected during one local search run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LocalSearchStatistics {
    /// Candidate orderings simulated.
    pub evaluations: u64,
    /// Improving swaps adopted.
    pub accepted_moves: u64,
    /// Neighborhood scans started. Every accepted move starts a new one.
    pub passes: u64,
    pub time_total: Duration,
}

impl LocalSearchStatistics {
    #[inline]
    pub fn on_evaluation(&mut self) {
        self.evaluations = self.evaluations.saturating_add(1);
    }

    #[inline]
    pub fn on_accepted_move(&mut self) {
        self.accepted_moves = self.accepted_moves.saturating_add(1);
    }

    #[inline]
    pub fn on_pass(&mut self) {
        self.passes = self.passes.saturating_add(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    #[inline]
    pub fn rejected_moves(&self) -> u64 {
        self.evaluations.saturating_sub(self.accepted_moves)
    }
}

impl std::fmt::Display for LocalSearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Local Search Statistics:")?;
        writeln!(f, "   Passes:          {}", self.passes)?;
        writeln!(f, "   Evaluations:     {}", self.evaluations)?;
        writeln!(f, "   Accepted Moves:  {}", self.accepted_moves)?;
        writeln!(f, "   Rejected Moves:  {}", self.rejected_moves())?;
        writeln!(f, "   Total Time:      {:?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut s = LocalSearchStatistics::default();
        s.on_pass();
        s.on_evaluation();
        s.on_evaluation();
        s.on_accepted_move();
        assert_eq!(s.passes, 1);
        assert_eq!(s.evaluations, 2);
        assert_eq!(s.rejected_moves(), 1);
    }
}
