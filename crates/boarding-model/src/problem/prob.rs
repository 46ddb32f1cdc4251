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

use crate::common::{PassengerIdentifier, PassengerIndex};
use crate::problem::{
    err::{
        CapacityOverflowError, DuplicatePassengerError, DuplicateSeatError,
        DurationConversionError, MoveTimesLengthError, NegativeDurationError,
        NonFiniteDurationError, NonPositiveDimensionsError, ProblemError, SeatOutOfBoundsError,
        TooManyPassengersError,
    },
    passenger::{Passenger, Seat},
};
use boarding_core::prelude::{BoardingNumeric, TimeDelta};
use std::collections::HashMap;

/// An airplane boarding instance: the cabin geometry and the passengers
/// that have to be seated.
///
/// Passengers keep the order they were added in; `PassengerIndex` values
/// refer to positions in that order. A `Problem` is validated once on
/// construction and never changes afterwards.
#[derive(Debug, Clone)]
pub struct Problem<T> {
    num_rows: usize,
    num_cols: usize,
    passengers: Vec<Passenger<T>>,
    index_by_id: HashMap<PassengerIdentifier, PassengerIndex>,
}

impl<T: BoardingNumeric> Problem<T> {
    pub fn new(
        num_rows: usize,
        num_cols: usize,
        passengers: Vec<Passenger<T>>,
    ) -> Result<Self, ProblemError> {
        if num_rows == 0 || num_cols == 0 {
            return Err(NonPositiveDimensionsError::new(num_rows, num_cols).into());
        }

        let capacity = num_rows
            .checked_mul(num_cols)
            .ok_or(CapacityOverflowError::new(num_rows, num_cols))?;
        if passengers.len() > capacity {
            return Err(TooManyPassengersError::new(passengers.len(), capacity).into());
        }

        let mut index_by_id = HashMap::with_capacity(passengers.len());
        let mut seat_owner: HashMap<Seat, PassengerIdentifier> =
            HashMap::with_capacity(passengers.len());

        for (i, p) in passengers.iter().enumerate() {
            let seat = p.seat();
            if seat.row() == 0
                || seat.row() > num_rows
                || seat.column() == 0
                || seat.column() > num_cols
            {
                return Err(SeatOutOfBoundsError::new(p.id(), seat, num_rows, num_cols).into());
            }

            if p.move_times().len() > num_rows {
                return Err(
                    MoveTimesLengthError::new(p.id(), num_rows, p.move_times().len()).into(),
                );
            }

            if p.has_non_finite_duration() {
                return Err(NonFiniteDurationError::new(p.id()).into());
            }

            if p.has_negative_duration() {
                return Err(NegativeDurationError::new(p.id()).into());
            }

            if index_by_id.insert(p.id(), PassengerIndex::new(i)).is_some() {
                return Err(DuplicatePassengerError::new(p.id()).into());
            }

            if let Some(&owner) = seat_owner.get(&seat) {
                return Err(DuplicateSeatError::new(owner, p.id(), seat).into());
            }
            seat_owner.insert(seat, p.id());
        }

        Ok(Self {
            num_rows,
            num_cols,
            passengers,
            index_by_id,
        })
    }

    /// Converts every duration with `f`. The result is validated again, so a
    /// conversion producing negative durations is reported instead of
    /// silently accepted.
    pub fn map_durations<U, F>(&self, mut f: F) -> Result<Problem<U>, ProblemError>
    where
        U: BoardingNumeric,
        F: FnMut(T) -> U,
    {
        let passengers = self
            .passengers
            .iter()
            .map(|p| p.map_durations(&mut f))
            .collect();
        Problem::new(self.num_rows, self.num_cols, passengers)
    }

    /// Scales every duration by `scale` and truncates toward zero.
    ///
    /// External integer solvers work on `i64` instances; results they report
    /// have to be divided by the same `scale` to be compared with the
    /// continuous instance. A scaled value outside the `i64` range, or a
    /// non-finite `scale`, is reported as `DurationConversion`.
    pub fn discretize(&self, scale: T) -> Result<Problem<i64>, ProblemError> {
        let mut passengers = Vec::with_capacity(self.passengers.len());
        for p in &self.passengers {
            let convert = |d: TimeDelta<T>| {
                let scaled = d.value() * scale;
                scaled
                    .is_finite_value()
                    .then(|| scaled.to_i64())
                    .flatten()
                    .map(TimeDelta::new)
                    .ok_or(DurationConversionError::new(p.id()))
            };
            let settle = convert(p.settle_time())?;
            let moves = p
                .move_times()
                .iter()
                .map(|&d| convert(d))
                .collect::<Result<Vec<_>, _>>()?;
            passengers.push(Passenger::new(p.id(), p.seat(), settle, moves));
        }
        Problem::new(self.num_rows, self.num_cols, passengers)
    }
}

impl<T> Problem<T> {
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    #[inline]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.num_rows * self.num_cols
    }

    #[inline]
    pub fn passengers(&self) -> &[Passenger<T>] {
        &self.passengers
    }

    #[inline]
    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    #[inline]
    pub fn passenger(&self, index: PassengerIndex) -> &Passenger<T> {
        &self.passengers[index.get()]
    }

    #[inline]
    pub fn get_passenger(&self, index: PassengerIndex) -> Option<&Passenger<T>> {
        self.passengers.get(index.get())
    }

    #[inline]
    pub fn index_of(&self, id: PassengerIdentifier) -> Option<PassengerIndex> {
        self.index_by_id.get(&id).copied()
    }

    #[inline]
    pub fn passenger_by_id(&self, id: PassengerIdentifier) -> Option<&Passenger<T>> {
        self.index_of(id).map(|i| self.passenger(i))
    }

    #[inline]
    pub fn indices(
        &self,
    ) -> impl DoubleEndedIterator<Item = PassengerIndex> + ExactSizeIterator + use<T> {
        (0..self.passengers.len()).map(PassengerIndex::new)
    }

    #[inline]
    pub fn iter_indexed(&self) -> impl Iterator<Item = (PassengerIndex, &Passenger<T>)> {
        self.passengers
            .iter()
            .enumerate()
            .map(|(i, p)| (PassengerIndex::new(i), p))
    }
}
