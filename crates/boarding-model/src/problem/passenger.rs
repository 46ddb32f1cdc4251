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

use crate::common::PassengerIdentifier;
use boarding_core::prelude::{BoardingNumeric, TimeDelta};
use std::cmp::Ordering;

/// A seat in the cabin. Rows and columns are 1-indexed; row 1 is closest to
/// the aisle entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seat {
    row: usize,
    column: usize,
}

impl Seat {
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    #[inline]
    pub const fn row(&self) -> usize {
        self.row
    }

    #[inline]
    pub const fn column(&self) -> usize {
        self.column
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// A passenger and the time they spend in each row of the aisle.
///
/// `move_times[k - 1]` is the time needed to advance past row `k` while in
/// transit. Entries at or behind the passenger's own row are carried along
/// but never read.
#[derive(Debug, Clone, PartialEq)]
pub struct Passenger<T> {
    id: PassengerIdentifier,
    seat: Seat,
    settle_time: TimeDelta<T>,
    move_times: Vec<TimeDelta<T>>,
}

impl<T> Passenger<T> {
    #[inline]
    pub fn new(
        id: PassengerIdentifier,
        seat: Seat,
        settle_time: TimeDelta<T>,
        move_times: Vec<TimeDelta<T>>,
    ) -> Self {
        Self {
            id,
            seat,
            settle_time,
            move_times,
        }
    }

    #[inline]
    pub fn id(&self) -> PassengerIdentifier {
        self.id
    }

    #[inline]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.seat.row
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.seat.column
    }

    #[inline]
    pub fn move_times(&self) -> &[TimeDelta<T>] {
        &self.move_times
    }

    /// Converts every duration with `f`, keeping identity and seat.
    pub fn map_durations<U, F>(&self, mut f: F) -> Passenger<U>
    where
        T: Copy,
        F: FnMut(T) -> U,
    {
        Passenger {
            id: self.id,
            seat: self.seat,
            settle_time: self.settle_time.map(&mut f),
            move_times: self.move_times.iter().map(|d| d.map(&mut f)).collect(),
        }
    }
}

impl<T: Copy> Passenger<T> {
    #[inline]
    pub fn settle_time(&self) -> TimeDelta<T> {
        self.settle_time
    }

    /// Time to advance past `row` while heading further back.
    #[inline]
    pub fn move_time_at(&self, row: usize) -> Option<TimeDelta<T>> {
        row.checked_sub(1)
            .and_then(|k| self.move_times.get(k))
            .copied()
    }

    /// Time this passenger occupies `row`: the move time in front of the
    /// destination, the settle time at it, nothing behind it. Row 0 is the
    /// aisle entrance and costs nothing.
    #[inline]
    pub fn time_at_row(&self, row: usize) -> TimeDelta<T>
    where
        T: BoardingNumeric,
    {
        match row.cmp(&self.seat.row) {
            Ordering::Less => self.move_time_at(row).unwrap_or_else(TimeDelta::zero),
            Ordering::Equal => self.settle_time,
            Ordering::Greater => TimeDelta::zero(),
        }
    }

    /// Sum of the move times from row 1 up to the row in front of the seat.
    #[inline]
    pub fn transit_time(&self) -> TimeDelta<T>
    where
        T: BoardingNumeric,
    {
        (1..self.seat.row).map(|r| self.time_at_row(r)).sum()
    }

    #[inline]
    pub fn has_negative_duration(&self) -> bool
    where
        T: BoardingNumeric,
    {
        self.settle_time.is_negative() || self.move_times.iter().any(|d| d.is_negative())
    }

    /// True if any duration is NaN or infinite.
    #[inline]
    pub fn has_non_finite_duration(&self) -> bool
    where
        T: BoardingNumeric,
    {
        !self.settle_time.is_finite() || self.move_times.iter().any(|d| !d.is_finite())
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Passenger<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at seat {} (settle: {})",
            self.id, self.seat, self.settle_time
        )
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

    fn passenger(row: usize, settle: i64, moves: &[i64]) -> Passenger<i64> {
        Passenger::new(
            pid(1),
            Seat::new(row, 1),
            td(settle),
            moves.iter().copied().map(td).collect(),
        )
    }

    #[test]
    fn test_time_at_row_branches() {
        let p = passenger(3, 9, &[1, 2, 5, 7]);
        assert_eq!(p.time_at_row(0), td(0));
        assert_eq!(p.time_at_row(1), td(1));
        assert_eq!(p.time_at_row(2), td(2));
        assert_eq!(p.time_at_row(3), td(9));
        assert_eq!(p.time_at_row(4), td(0));
    }

    #[test]
    fn test_transit_time_skips_destination_and_beyond() {
        let p = passenger(3, 9, &[1, 2, 5, 7]);
        assert_eq!(p.transit_time(), td(3));
        let front = passenger(1, 4, &[8, 8]);
        assert_eq!(front.transit_time(), td(0));
    }

    #[test]
    fn test_move_time_at_out_of_range() {
        let p = passenger(2, 1, &[3]);
        assert_eq!(p.move_time_at(0), None);
        assert_eq!(p.move_time_at(1), Some(td(3)));
        assert_eq!(p.move_time_at(2), None);
    }

    #[test]
    fn test_negative_duration_detection() {
        assert!(!passenger(2, 1, &[0, 0]).has_negative_duration());
        assert!(passenger(2, -1, &[0, 0]).has_negative_duration());
        assert!(passenger(2, 1, &[0, -3]).has_negative_duration());
    }

    #[test]
    fn test_non_finite_duration_detection() {
        let ok = Passenger::new(pid(1), Seat::new(1, 1), TimeDelta::new(1.0f64), vec![]);
        assert!(!ok.has_non_finite_duration());
        let nan_settle = Passenger::new(pid(1), Seat::new(1, 1), TimeDelta::new(f64::NAN), vec![]);
        assert!(nan_settle.has_non_finite_duration());
        assert!(!nan_settle.has_negative_duration());
        let inf_move = Passenger::new(
            pid(1),
            Seat::new(2, 1),
            TimeDelta::new(1.0f64),
            vec![TimeDelta::new(f64::INFINITY)],
        );
        assert!(inf_move.has_non_finite_duration());
    }

    #[test]
    fn test_identity_accessors_need_no_bounds_on_durations() {
        fn describe<T>(p: &Passenger<T>) -> (PassengerIdentifier, Seat, usize, usize, usize) {
            (p.id(), p.seat(), p.row(), p.column(), p.move_times().len())
        }

        let p = Passenger::new(
            pid(7),
            Seat::new(4, 2),
            TimeDelta::new(String::from("settle")),
            vec![TimeDelta::new(String::from("move"))],
        );
        assert_eq!(describe(&p), (pid(7), Seat::new(4, 2), 4, 2, 1));
    }

    #[test]
    fn test_map_durations_keeps_identity() {
        let p = Passenger::new(
            pid(4),
            Seat::new(2, 3),
            TimeDelta::new(1.25f64),
            vec![TimeDelta::new(0.5), TimeDelta::new(2.0)],
        );
        let q = p.map_durations(|v| (v * 10.0) as i64);
        assert_eq!(q.id(), pid(4));
        assert_eq!(q.seat(), Seat::new(2, 3));
        assert_eq!(q.settle_time(), td(12));
        assert_eq!(q.move_times(), &[td(5), td(20)]);
    }

    #[test]
    fn test_seat_display() {
        assert_eq!(format!("{}", Seat::new(12, 4)), "(12, 4)");
    }
}
