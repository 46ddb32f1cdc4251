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

//! Boarding-time simulation.
//!
//! Passengers enter the aisle one after another in boarding order and walk
//! towards their row. Every aisle row holds at most one passenger; a row
//! stays blocked until its occupant has moved on or has finished settling
//! into the seat. The simulation is a single pass over the ordering that
//! tracks, per row, the earliest time the next passenger may enter it.

use boarding_core::prelude::{BoardingNumeric, TimePoint};
use boarding_model::prelude::{
    BoardingSchedule, Ordering, OrderingError, Passenger, PassengerTimeline, Problem,
};

/// Reusable simulation state.
///
/// Holds the per-row blockage buffer so repeated evaluations (as in local
/// search) do not allocate. The buffer is reset at the start of every run,
/// so consecutive calls are independent.
#[derive(Debug, Clone)]
pub struct Simulator<T> {
    row_blockage: Vec<TimePoint<T>>,
}

impl<T: BoardingNumeric> Default for Simulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: BoardingNumeric> Simulator<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            row_blockage: Vec::new(),
        }
    }

    #[inline]
    pub fn with_rows(num_rows: usize) -> Self {
        Self {
            row_blockage: Vec::with_capacity(num_rows + 1),
        }
    }

    #[inline]
    fn reset(&mut self, num_rows: usize) {
        self.row_blockage.clear();
        self.row_blockage.resize(num_rows + 1, TimePoint::zero());
    }

    #[inline]
    fn check(problem: &Problem<T>, ordering: &Ordering) -> Result<(), OrderingError> {
        if ordering.len() != problem.passenger_count() {
            return Err(OrderingError::LengthMismatch {
                expected: problem.passenger_count(),
                actual: ordering.len(),
            });
        }
        Ok(())
    }

    /// Walks one passenger from the aisle entrance to their seat, calling
    /// `on_entry(row, time)` for every row entered. Returns the seated time.
    #[inline]
    fn board<F>(&mut self, passenger: &Passenger<T>, mut on_entry: F) -> TimePoint<T>
    where
        F: FnMut(usize, TimePoint<T>),
    {
        let destination = passenger.row();
        let mut entered = self.row_blockage[0];
        on_entry(0, entered);

        for row in 1..=destination {
            let ready = entered + passenger.time_at_row(row - 1);
            entered = ready.latest(self.row_blockage[row]);
            self.row_blockage[row - 1] = entered;
            on_entry(row, entered);
        }

        let seated = entered + passenger.settle_time();
        self.row_blockage[destination] = seated;
        seated
    }

    /// Time at which the last passenger is seated. Zero for an empty plane.
    pub fn makespan(
        &mut self,
        problem: &Problem<T>,
        ordering: &Ordering,
    ) -> Result<TimePoint<T>, OrderingError> {
        Self::check(problem, ordering)?;
        self.reset(problem.num_rows());

        let mut makespan = TimePoint::zero();
        for index in ordering.iter() {
            let seated = self.board(problem.passenger(index), |_, _| {});
            makespan = makespan.latest(seated);
        }
        Ok(makespan)
    }

    /// Full simulation, recording every row entry.
    pub fn schedule(
        &mut self,
        problem: &Problem<T>,
        ordering: &Ordering,
    ) -> Result<BoardingSchedule<T>, OrderingError> {
        Self::check(problem, ordering)?;
        self.reset(problem.num_rows());

        let mut makespan = TimePoint::zero();
        let mut timelines = Vec::with_capacity(ordering.len());
        for (position, index) in ordering.iter().enumerate() {
            let passenger = problem.passenger(index);
            let mut entries = Vec::with_capacity(passenger.row() + 1);
            let seated = self.board(passenger, |_, t| entries.push(t));
            makespan = makespan.latest(seated);
            timelines.push((
                index,
                PassengerTimeline::new(passenger.id(), position, entries, seated),
            ));
        }

        timelines.sort_unstable_by_key(|(index, _)| *index);
        Ok(BoardingSchedule::new(
            makespan,
            timelines.into_iter().map(|(_, t)| t).collect(),
        ))
    }
}

/// Simulates `ordering` and returns the full schedule.
#[inline]
pub fn simulate<T: BoardingNumeric>(
    problem: &Problem<T>,
    ordering: &Ordering,
) -> Result<BoardingSchedule<T>, OrderingError> {
    Simulator::with_rows(problem.num_rows()).schedule(problem, ordering)
}

/// Simulates `ordering` and returns only the makespan.
#[inline]
pub fn makespan<T: BoardingNumeric>(
    problem: &Problem<T>,
    ordering: &Ordering,
) -> Result<TimePoint<T>, OrderingError> {
    Simulator::with_rows(problem.num_rows()).makespan(problem, ordering)
}

#[cfg(test)]
mod tests {
    use super::*;
    use boarding_core::prelude::TimeDelta;
    use boarding_model::prelude::{PassengerIdentifier, PassengerIndex, ProblemBuilder, Seat};

    #[inline]
    fn td(v: i64) -> TimeDelta<i64> {
        TimeDelta::new(v)
    }

    #[inline]
    fn tp(v: i64) -> TimePoint<i64> {
        TimePoint::new(v)
    }

    #[inline]
    fn pix(n: usize) -> PassengerIndex {
        PassengerIndex::new(n)
    }

    /// `(row, column, settle, moves)` per passenger, ids in insertion order.
    fn problem(rows: usize, cols: usize, ps: &[(usize, usize, i64, &[i64])]) -> Problem<i64> {
        let mut b = ProblemBuilder::new(rows, cols);
        for &(row, col, settle, moves) in ps {
            b.push_seated(
                Seat::new(row, col),
                td(settle),
                moves.iter().copied().map(td).collect::<Vec<_>>(),
            );
        }
        b.build().unwrap()
    }

    fn order(p: &Problem<i64>, idx: &[usize]) -> Ordering {
        Ordering::try_new(p, idx.iter().copied().map(pix).collect()).unwrap()
    }

    #[test]
    fn test_empty_plane_has_zero_makespan() {
        let p = problem(3, 2, &[]);
        let o = Ordering::identity(&p);
        assert_eq!(makespan(&p, &o).unwrap(), tp(0));
        assert!(simulate(&p, &o).unwrap().timelines().is_empty());
    }

    #[test]
    fn test_single_passenger_walks_then_settles() {
        // Row 4: moves past rows 1..3 cost 1 + 2 + 3, settle 5.
        let p = problem(5, 1, &[(4, 1, 5, &[1, 2, 3, 100, 100])]);
        let o = Ordering::identity(&p);
        assert_eq!(makespan(&p, &o).unwrap(), tp(11));

        let s = simulate(&p, &o).unwrap();
        let t = s.timeline(pix(0)).unwrap();
        assert_eq!(t.row_entries(), &[tp(0), tp(0), tp(1), tp(3), tp(6)]);
        assert_eq!(t.seated(), tp(11));
        assert_eq!(t.position(), 0);
    }

    #[test]
    fn test_two_passengers_in_first_row_settle_sequentially() {
        let p = problem(2, 2, &[(1, 1, 3, &[]), (1, 2, 4, &[])]);
        assert_eq!(makespan(&p, &order(&p, &[0, 1])).unwrap(), tp(7));
        assert_eq!(makespan(&p, &order(&p, &[1, 0])).unwrap(), tp(7));
    }

    #[test]
    fn test_back_to_front_overlaps_settling() {
        // Rear passenger first: the front passenger enters row 1 as soon as
        // the rear passenger has moved on to row 2.
        let p = problem(2, 1, &[(1, 1, 5, &[1, 1]), (2, 1, 5, &[1, 1])]);
        assert_eq!(makespan(&p, &order(&p, &[1, 0])).unwrap(), tp(6));
        // Front passenger first blocks row 1 for the whole settle time.
        assert_eq!(makespan(&p, &order(&p, &[0, 1])).unwrap(), tp(11));
    }

    #[test]
    fn test_blocked_passenger_timeline() {
        let p = problem(2, 1, &[(1, 1, 5, &[1, 1]), (2, 1, 5, &[1, 1])]);
        let s = simulate(&p, &order(&p, &[0, 1])).unwrap();
        let rear = s.timeline(pix(1)).unwrap();
        // Waits at the entrance until the front passenger is seated.
        assert_eq!(rear.row_entries(), &[tp(0), tp(5), tp(6)]);
        assert_eq!(rear.seated(), tp(11));
        assert_eq!(rear.position(), 1);
        assert_eq!(s.makespan(), tp(11));
    }

    #[test]
    fn test_interchangeable_passengers_commute() {
        let p = problem(
            3,
            3,
            &[
                (2, 1, 4, &[2, 2, 2]),
                (3, 2, 1, &[1, 3, 1]),
                (2, 3, 4, &[2, 2, 2]),
            ],
        );
        let a = makespan(&p, &order(&p, &[0, 1, 2])).unwrap();
        let b = makespan(&p, &order(&p, &[2, 1, 0])).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_swapping_passengers_behind_a_dominant_settler_keeps_makespan() {
        // Passengers 0 and 1 differ in settle time, but passenger 2 settles
        // so long that it alone determines the makespan.
        let p = problem(
            3,
            2,
            &[
                (1, 1, 1, &[1, 1, 1]),
                (1, 2, 3, &[1, 1, 1]),
                (3, 1, 100, &[1, 1, 1]),
            ],
        );
        let a = simulate(&p, &order(&p, &[2, 0, 1])).unwrap();
        let b = simulate(&p, &order(&p, &[2, 1, 0])).unwrap();
        assert_eq!(a.makespan(), tp(102));
        assert_eq!(b.makespan(), tp(102));

        // The swap itself is visible in the individual timelines.
        assert_eq!(a.seated(pix(0)), Some(tp(2)));
        assert_eq!(a.seated(pix(1)), Some(tp(5)));
        assert_eq!(b.seated(pix(1)), Some(tp(4)));
        assert_eq!(b.seated(pix(0)), Some(tp(5)));
    }

    #[test]
    fn test_all_zero_durations_give_zero_makespan() {
        let p = problem(
            3,
            2,
            &[(1, 1, 0, &[0, 0, 0]), (3, 2, 0, &[0, 0, 0]), (2, 1, 0, &[])],
        );
        assert_eq!(makespan(&p, &order(&p, &[2, 0, 1])).unwrap(), tp(0));
    }

    #[test]
    fn test_simulator_reuse_is_independent() {
        let p = problem(2, 1, &[(1, 1, 5, &[1, 1]), (2, 1, 5, &[1, 1])]);
        let mut sim = Simulator::new();
        let first = sim.makespan(&p, &order(&p, &[0, 1])).unwrap();
        let _ = sim.makespan(&p, &order(&p, &[1, 0])).unwrap();
        assert_eq!(sim.makespan(&p, &order(&p, &[0, 1])).unwrap(), first);
    }

    #[test]
    fn test_schedule_and_makespan_agree() {
        let p = problem(
            4,
            2,
            &[
                (4, 1, 3, &[1, 2, 1, 0]),
                (2, 2, 6, &[2, 1, 0, 0]),
                (1, 1, 2, &[]),
                (3, 2, 4, &[1, 1, 1, 0]),
            ],
        );
        let o = order(&p, &[1, 3, 0, 2]);
        let s = simulate(&p, &o).unwrap();
        assert_eq!(s.makespan(), makespan(&p, &o).unwrap());
        let max_seated = s.timelines().iter().map(|t| t.seated()).max().unwrap();
        assert_eq!(max_seated, s.makespan());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let small = problem(2, 1, &[(1, 1, 1, &[])]);
        let large = problem(2, 1, &[(1, 1, 1, &[]), (2, 1, 1, &[])]);
        let o = Ordering::identity(&small);
        assert_eq!(
            makespan(&large, &o).unwrap_err(),
            OrderingError::LengthMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_float_durations() {
        let mut b = ProblemBuilder::new(2, 1);
        b.add_passenger(Passenger::new(
            PassengerIdentifier::new(0),
            Seat::new(2, 1),
            TimeDelta::new(1.5f64),
            vec![TimeDelta::new(0.25), TimeDelta::new(0.0)],
        ));
        let p = b.build().unwrap();
        let m = makespan(&p, &Ordering::identity(&p)).unwrap();
        assert_eq!(m.value(), 1.75);
    }
}
