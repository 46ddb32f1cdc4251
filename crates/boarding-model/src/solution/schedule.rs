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
use boarding_core::prelude::{BoardingNumeric, TimeDelta, TimePoint};

/// When one passenger entered each aisle row and when they were seated.
#[derive(Debug, Clone, PartialEq)]
pub struct PassengerTimeline<T> {
    passenger: PassengerIdentifier,
    position: usize,
    row_entries: Vec<TimePoint<T>>,
    seated: TimePoint<T>,
}

impl<T: Copy> PassengerTimeline<T> {
    /// `row_entries[r]` is the entry time into row `r`, from the aisle
    /// entrance (row 0) up to and including the destination row.
    #[inline]
    pub fn new(
        passenger: PassengerIdentifier,
        position: usize,
        row_entries: Vec<TimePoint<T>>,
        seated: TimePoint<T>,
    ) -> Self {
        Self {
            passenger,
            position,
            row_entries,
            seated,
        }
    }

    #[inline]
    pub fn passenger(&self) -> PassengerIdentifier {
        self.passenger
    }

    /// Position of the passenger in the boarding order.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn row_entries(&self) -> &[TimePoint<T>] {
        &self.row_entries
    }

    #[inline]
    pub fn entered(&self, row: usize) -> Option<TimePoint<T>> {
        self.row_entries.get(row).copied()
    }

    /// Time the passenger stops occupying `row`: entry into the next row
    /// while in transit, the seated time at the destination.
    #[inline]
    pub fn left(&self, row: usize) -> Option<TimePoint<T>> {
        let destination = self.row_entries.len().checked_sub(1)?;
        if row < destination {
            self.row_entries.get(row + 1).copied()
        } else if row == destination {
            Some(self.seated)
        } else {
            None
        }
    }

    #[inline]
    pub fn seated(&self) -> TimePoint<T> {
        self.seated
    }

    /// Time spent between entering the aisle and being seated.
    #[inline]
    pub fn total_time(&self) -> TimeDelta<T>
    where
        T: BoardingNumeric,
    {
        match self.row_entries.first() {
            Some(&start) => self.seated - start,
            None => TimeDelta::zero(),
        }
    }
}

/// Output of one simulation run: the makespan and a timeline per passenger.
///
/// Timelines are stored by `PassengerIndex`, not by boarding position.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardingSchedule<T> {
    makespan: TimePoint<T>,
    timelines: Vec<PassengerTimeline<T>>,
}

impl<T: Copy> BoardingSchedule<T> {
    #[inline]
    pub fn new(makespan: TimePoint<T>, timelines: Vec<PassengerTimeline<T>>) -> Self {
        Self {
            makespan,
            timelines,
        }
    }

    #[inline]
    pub fn makespan(&self) -> TimePoint<T> {
        self.makespan
    }

    #[inline]
    pub fn timelines(&self) -> &[PassengerTimeline<T>] {
        &self.timelines
    }

    #[inline]
    pub fn timeline(&self, index: PassengerIndex) -> Option<&PassengerTimeline<T>> {
        self.timelines.get(index.get())
    }

    #[inline]
    pub fn seated(&self, index: PassengerIndex) -> Option<TimePoint<T>> {
        self.timeline(index).map(|t| t.seated())
    }

    /// The passenger finishing last, if any.
    pub fn last_seated(&self) -> Option<&PassengerTimeline<T>>
    where
        T: BoardingNumeric,
    {
        self.timelines
            .iter()
            .find(|t| t.seated() >= self.makespan)
    }
}
