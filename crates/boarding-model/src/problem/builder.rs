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
    common::PassengerIdentifier,
    problem::{
        err::ProblemError,
        passenger::{Passenger, Seat},
        prob::Problem,
    },
};
use boarding_core::prelude::{BoardingNumeric, TimeDelta};

/// Incrementally assembles a `Problem`. Validation happens in `build`.
#[derive(Debug, Clone)]
pub struct ProblemBuilder<T> {
    num_rows: usize,
    num_cols: usize,
    passengers: Vec<Passenger<T>>,
}

impl<T: BoardingNumeric> ProblemBuilder<T> {
    #[inline]
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            num_rows,
            num_cols,
            passengers: Vec::new(),
        }
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    #[inline]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    #[inline]
    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    #[inline]
    pub fn with_passengers<I>(mut self, passengers: I) -> Self
    where
        I: IntoIterator<Item = Passenger<T>>,
    {
        self.passengers.clear();
        self.passengers.extend(passengers);
        self
    }

    #[inline]
    pub fn add_passenger(&mut self, passenger: Passenger<T>) -> &mut Self {
        self.passengers.push(passenger);
        self
    }

    #[inline]
    pub fn extend_passengers<I>(&mut self, passengers: I) -> &mut Self
    where
        I: IntoIterator<Item = Passenger<T>>,
    {
        self.passengers.extend(passengers);
        self
    }

    /// Adds a passenger whose id is its insertion position, the convention
    /// used by instance files. Move times may stop short of `num_rows`; the
    /// missing trailing entries count as zero.
    pub fn push_seated(
        &mut self,
        seat: Seat,
        settle_time: TimeDelta<T>,
        move_times: impl IntoIterator<Item = TimeDelta<T>>,
    ) -> &mut Self {
        let id = PassengerIdentifier::new(self.passengers.len() as u32);
        let moves: Vec<TimeDelta<T>> = move_times.into_iter().collect();
        self.add_passenger(Passenger::new(id, seat, settle_time, moves))
    }

    #[inline]
    pub fn build(self) -> Result<Problem<T>, ProblemError> {
        Problem::new(self.num_rows, self.num_cols, self.passengers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn td(v: i64) -> TimeDelta<i64> {
        TimeDelta::new(v)
    }

    #[inline]
    fn pid(n: u32) -> PassengerIdentifier {
        PassengerIdentifier::new(n)
    }

    #[test]
    fn test_build_empty() {
        let p = ProblemBuilder::<i64>::new(2, 3).build().unwrap();
        assert!(p.is_empty());
        assert_eq!(p.num_rows(), 2);
        assert_eq!(p.num_cols(), 3);
    }

    #[test]
    fn test_push_seated_assigns_sequential_ids() {
        let mut b = ProblemBuilder::new(3, 2);
        b.push_seated(Seat::new(3, 1), td(4), [td(1)])
            .push_seated(Seat::new(1, 2), td(2), Vec::new());
        assert_eq!(b.passenger_count(), 2);

        let p = b.build().unwrap();
        assert_eq!(p.passengers()[0].id(), pid(0));
        assert_eq!(p.passengers()[1].id(), pid(1));
        assert_eq!(p.passengers()[0].move_times(), &[td(1)]);
        assert_eq!(p.passengers()[0].time_at_row(2), td(0));
    }

    #[test]
    fn test_push_seated_does_not_allocate_per_row() {
        let mut b = ProblemBuilder::new(usize::MAX / 4, 1);
        b.push_seated(Seat::new(1, 1), td(1), Vec::new());
        assert!(b.passengers[0].move_times().is_empty());
    }

    #[test]
    fn test_with_passengers_replaces_previous() {
        let a = Passenger::new(pid(1), Seat::new(1, 1), td(1), vec![td(0)]);
        let b = Passenger::new(pid(2), Seat::new(1, 2), td(1), vec![td(0)]);
        let mut builder = ProblemBuilder::new(1, 2);
        builder.add_passenger(a.clone());
        let p = builder.with_passengers([b]).build().unwrap();
        assert_eq!(p.passenger_count(), 1);
        assert_eq!(p.passengers()[0].id(), pid(2));
    }

    #[test]
    fn test_extend_then_build_reports_validation_errors() {
        let a = Passenger::new(pid(1), Seat::new(1, 1), td(1), vec![td(0)]);
        let b = Passenger::new(pid(2), Seat::new(1, 1), td(1), vec![td(0)]);
        let mut builder = ProblemBuilder::new(1, 2);
        builder.extend_passengers([a, b]);
        assert!(matches!(
            builder.build().unwrap_err(),
            ProblemError::DuplicateSeat(_)
        ));
    }
}
