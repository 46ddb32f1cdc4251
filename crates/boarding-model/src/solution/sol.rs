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
    problem::prob::Problem,
    solution::{ordering::Ordering, record::ResultRecord, schedule::BoardingSchedule},
};
use boarding_core::prelude::{BoardingNumeric, TimePoint};
use std::time::Duration;

/// An ordering together with its simulated makespan.
///
/// Solutions are snapshots: improving one produces a new `Solution`.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<T> {
    ordering: Ordering,
    makespan: TimePoint<T>,
    schedule: Option<BoardingSchedule<T>>,
    algorithm: Option<String>,
    computation_time: Option<Duration>,
}

impl<T: BoardingNumeric> Solution<T> {
    #[inline]
    pub fn new(ordering: Ordering, makespan: TimePoint<T>) -> Self {
        Self {
            ordering,
            makespan,
            schedule: None,
            algorithm: None,
            computation_time: None,
        }
    }

    #[inline]
    pub fn from_schedule(ordering: Ordering, schedule: BoardingSchedule<T>) -> Self {
        Self {
            ordering,
            makespan: schedule.makespan(),
            schedule: Some(schedule),
            algorithm: None,
            computation_time: None,
        }
    }

    #[inline]
    pub fn with_algorithm(mut self, name: impl Into<String>) -> Self {
        self.algorithm = Some(name.into());
        self
    }

    #[inline]
    pub fn with_computation_time(mut self, elapsed: Duration) -> Self {
        self.computation_time = Some(elapsed);
        self
    }

    #[inline]
    pub fn ordering(&self) -> &Ordering {
        &self.ordering
    }

    #[inline]
    pub fn into_ordering(self) -> Ordering {
        self.ordering
    }

    #[inline]
    pub fn makespan(&self) -> TimePoint<T> {
        self.makespan
    }

    #[inline]
    pub fn schedule(&self) -> Option<&BoardingSchedule<T>> {
        self.schedule.as_ref()
    }

    #[inline]
    pub fn algorithm(&self) -> Option<&str> {
        self.algorithm.as_deref()
    }

    #[inline]
    pub fn computation_time(&self) -> Option<Duration> {
        self.computation_time
    }

    /// Strictly smaller makespan.
    #[inline]
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.makespan < other.makespan
    }

    /// Result record for this solution. The makespan is reported as `f64`.
    pub fn to_record(&self, problem: &Problem<T>, instance_name: impl Into<String>) -> ResultRecord {
        ResultRecord {
            instance_name: instance_name.into(),
            algorithm: self.algorithm.clone().unwrap_or_default(),
            computation_time: self
                .computation_time
                .map(|d| d.as_secs_f64())
                .unwrap_or_default(),
            objective_value: self.makespan.value().to_f64().unwrap_or(f64::NAN),
            order: self
                .ordering
                .ids(problem)
                .into_iter()
                .map(|id| id.into_inner())
                .collect(),
            lower_bound: None,
            upper_bound: None,
            gap: None,
        }
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Solution<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Solution(makespan: {}, order: {}", self.makespan, self.ordering)?;
        if let Some(name) = &self.algorithm {
            write!(f, ", algorithm: {name}")?;
        }
        write!(f, ")")
    }
}
