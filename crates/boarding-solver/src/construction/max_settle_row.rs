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

use crate::framework::solver::ConstructionHeuristic;
use boarding_core::prelude::BoardingNumeric;
use boarding_model::prelude::{Ordering, OrderingError, PassengerIndex, Problem};

/// Interleaves the rows from the rear to the front.
///
/// Passengers are grouped by row and each group is sorted by settle time,
/// longest first. Boarding then proceeds in rounds: every round takes the
/// next passenger of each row that still has passengers left, rear row
/// first. Rows of different size simply drop out once exhausted, so every
/// passenger is placed exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxSettleRow;

impl MaxSettleRow {
    pub const NAME: &'static str = "MaxSettleRow";

    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl std::fmt::Display for MaxSettleRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(Self::NAME)
    }
}

impl<T: BoardingNumeric> ConstructionHeuristic<T> for MaxSettleRow {
    #[inline]
    fn name(&self) -> &str {
        Self::NAME
    }

    fn construct(&mut self, problem: &Problem<T>) -> Result<Ordering, OrderingError> {
        // groups[0] is the rear row.
        let mut groups: Vec<Vec<PassengerIndex>> = vec![Vec::new(); problem.num_rows()];
        for (index, p) in problem.iter_indexed() {
            groups[problem.num_rows() - p.row()].push(index);
        }

        for group in &mut groups {
            group.sort_by(|&a, &b| {
                let (pa, pb) = (problem.passenger(a), problem.passenger(b));
                pb.settle_time()
                    .partial_cmp(&pa.settle_time())
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| pa.id().cmp(&pb.id()))
            });
        }

        let rounds = groups.iter().map(Vec::len).max().unwrap_or(0);
        let mut sequence = Vec::with_capacity(problem.passenger_count());
        for round in 0..rounds {
            sequence.extend(groups.iter().filter_map(|g| g.get(round).copied()));
        }

        Ordering::try_new(problem, sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boarding_core::prelude::TimeDelta;
    use boarding_model::prelude::{ProblemBuilder, Seat};

    /// `(row, column, settle)` per passenger.
    fn problem(ps: &[(usize, usize, i64)]) -> Problem<i64> {
        let mut b = ProblemBuilder::new(3, 3);
        for &(row, col, settle) in ps {
            b.push_seated(Seat::new(row, col), TimeDelta::new(settle), Vec::new());
        }
        b.build().unwrap()
    }

    fn ids(p: &Problem<i64>) -> Vec<u32> {
        MaxSettleRow
            .construct(p)
            .unwrap()
            .ids(p)
            .into_iter()
            .map(|i| i.into_inner())
            .collect()
    }

    #[test]
    fn test_round_robin_rear_first_longest_settle_first() {
        let p = problem(&[
            (1, 1, 2), // 0
            (1, 2, 9), // 1
            (2, 1, 5), // 2
            (2, 2, 7), // 3
            (3, 1, 1), // 4
            (3, 2, 4), // 5
        ]);
        assert_eq!(ids(&p), vec![5, 3, 1, 4, 2, 0]);
    }

    #[test]
    fn test_uneven_rows_place_every_passenger() {
        let p = problem(&[
            (3, 1, 1), // 0
            (3, 2, 3), // 1
            (3, 3, 2), // 2
            (1, 1, 6), // 3
        ]);
        // Row 2 is empty, row 1 runs out after the first round.
        assert_eq!(ids(&p), vec![1, 3, 2, 0]);
    }

    #[test]
    fn test_equal_settle_times_break_ties_by_id() {
        let p = problem(&[(2, 3, 4), (2, 1, 4), (2, 2, 4)]);
        assert_eq!(ids(&p), vec![0, 1, 2]);
    }
}
