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
use crate::problem::passenger::Seat;
use std::num::{ParseFloatError, ParseIntError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NonPositiveDimensionsError {
    num_rows: usize,
    num_cols: usize,
}

impl NonPositiveDimensionsError {
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self { num_rows, num_cols }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }
}

impl std::fmt::Display for NonPositiveDimensionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Plane dimensions must be positive (rows: {}, columns: {})",
            self.num_rows, self.num_cols
        )
    }
}

impl std::error::Error for NonPositiveDimensionsError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeatOutOfBoundsError {
    passenger: PassengerIdentifier,
    seat: Seat,
    num_rows: usize,
    num_cols: usize,
}

impl SeatOutOfBoundsError {
    pub fn new(passenger: PassengerIdentifier, seat: Seat, num_rows: usize, num_cols: usize) -> Self {
        Self {
            passenger,
            seat,
            num_rows,
            num_cols,
        }
    }

    pub fn passenger(&self) -> PassengerIdentifier {
        self.passenger
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }
}

impl std::fmt::Display for SeatOutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Seat {} of {} lies outside the plane ({} rows x {} columns)",
            self.seat, self.passenger, self.num_rows, self.num_cols
        )
    }
}

impl std::error::Error for SeatOutOfBoundsError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DuplicateSeatError {
    first: PassengerIdentifier,
    second: PassengerIdentifier,
    seat: Seat,
}

impl DuplicateSeatError {
    pub fn new(first: PassengerIdentifier, second: PassengerIdentifier, seat: Seat) -> Self {
        Self {
            first,
            second,
            seat,
        }
    }

    pub fn first(&self) -> PassengerIdentifier {
        self.first
    }

    pub fn second(&self) -> PassengerIdentifier {
        self.second
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }
}

impl std::fmt::Display for DuplicateSeatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Passengers {} and {} are both assigned to seat {}",
            self.first, self.second, self.seat
        )
    }
}

impl std::error::Error for DuplicateSeatError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DuplicatePassengerError {
    id: PassengerIdentifier,
}

impl DuplicatePassengerError {
    pub fn new(id: PassengerIdentifier) -> Self {
        Self { id }
    }

    pub fn id(&self) -> PassengerIdentifier {
        self.id
    }
}

impl std::fmt::Display for DuplicatePassengerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Passenger {} is defined more than once", self.id)
    }
}

impl std::error::Error for DuplicatePassengerError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TooManyPassengersError {
    count: usize,
    capacity: usize,
}

impl TooManyPassengersError {
    pub fn new(count: usize, capacity: usize) -> Self {
        Self { count, capacity }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl std::fmt::Display for TooManyPassengersError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} passengers do not fit into a plane with {} seats",
            self.count, self.capacity
        )
    }
}

impl std::error::Error for TooManyPassengersError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveTimesLengthError {
    passenger: PassengerIdentifier,
    expected: usize,
    actual: usize,
}

impl MoveTimesLengthError {
    pub fn new(passenger: PassengerIdentifier, expected: usize, actual: usize) -> Self {
        Self {
            passenger,
            expected,
            actual,
        }
    }

    pub fn passenger(&self) -> PassengerIdentifier {
        self.passenger
    }

    pub fn expected(&self) -> usize {
        self.expected
    }

    pub fn actual(&self) -> usize {
        self.actual
    }
}

impl std::fmt::Display for MoveTimesLengthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} has {} move times for a plane with {} rows",
            self.passenger, self.actual, self.expected
        )
    }
}

impl std::error::Error for MoveTimesLengthError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NegativeDurationError {
    passenger: PassengerIdentifier,
}

impl NegativeDurationError {
    pub fn new(passenger: PassengerIdentifier) -> Self {
        Self { passenger }
    }

    pub fn passenger(&self) -> PassengerIdentifier {
        self.passenger
    }
}

impl std::fmt::Display for NegativeDurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} has a negative move or settle time", self.passenger)
    }
}

impl std::error::Error for NegativeDurationError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NonFiniteDurationError {
    passenger: PassengerIdentifier,
}

impl NonFiniteDurationError {
    pub fn new(passenger: PassengerIdentifier) -> Self {
        Self { passenger }
    }

    pub fn passenger(&self) -> PassengerIdentifier {
        self.passenger
    }
}

impl std::fmt::Display for NonFiniteDurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} has a NaN or infinite move or settle time", self.passenger)
    }
}

impl std::error::Error for NonFiniteDurationError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapacityOverflowError {
    num_rows: usize,
    num_cols: usize,
}

impl CapacityOverflowError {
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self { num_rows, num_cols }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }
}

impl std::fmt::Display for CapacityOverflowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Seat count of a plane with {} rows and {} columns does not fit into usize",
            self.num_rows, self.num_cols
        )
    }
}

impl std::error::Error for CapacityOverflowError {}

/// A scaled duration that has no `i64` representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DurationConversionError {
    passenger: PassengerIdentifier,
}

impl DurationConversionError {
    pub fn new(passenger: PassengerIdentifier) -> Self {
        Self { passenger }
    }

    pub fn passenger(&self) -> PassengerIdentifier {
        self.passenger
    }
}

impl std::fmt::Display for DurationConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "a scaled duration of {} is out of range for integer time",
            self.passenger
        )
    }
}

impl std::error::Error for DurationConversionError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProblemError {
    NonPositiveDimensions(NonPositiveDimensionsError),
    CapacityOverflow(CapacityOverflowError),
    SeatOutOfBounds(SeatOutOfBoundsError),
    DuplicateSeat(DuplicateSeatError),
    DuplicatePassenger(DuplicatePassengerError),
    TooManyPassengers(TooManyPassengersError),
    MoveTimesLength(MoveTimesLengthError),
    NegativeDuration(NegativeDurationError),
    NonFiniteDuration(NonFiniteDurationError),
    DurationConversion(DurationConversionError),
}

impl std::fmt::Display for ProblemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProblemError::NonPositiveDimensions(e) => write!(f, "{}", e),
            ProblemError::CapacityOverflow(e) => write!(f, "{}", e),
            ProblemError::SeatOutOfBounds(e) => write!(f, "{}", e),
            ProblemError::DuplicateSeat(e) => write!(f, "{}", e),
            ProblemError::DuplicatePassenger(e) => write!(f, "{}", e),
            ProblemError::TooManyPassengers(e) => write!(f, "{}", e),
            ProblemError::MoveTimesLength(e) => write!(f, "{}", e),
            ProblemError::NegativeDuration(e) => write!(f, "{}", e),
            ProblemError::NonFiniteDuration(e) => write!(f, "{}", e),
            ProblemError::DurationConversion(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ProblemError {}

impl From<NonPositiveDimensionsError> for ProblemError {
    fn from(err: NonPositiveDimensionsError) -> Self {
        ProblemError::NonPositiveDimensions(err)
    }
}

impl From<SeatOutOfBoundsError> for ProblemError {
    fn from(err: SeatOutOfBoundsError) -> Self {
        ProblemError::SeatOutOfBounds(err)
    }
}

impl From<DuplicateSeatError> for ProblemError {
    fn from(err: DuplicateSeatError) -> Self {
        ProblemError::DuplicateSeat(err)
    }
}

impl From<DuplicatePassengerError> for ProblemError {
    fn from(err: DuplicatePassengerError) -> Self {
        ProblemError::DuplicatePassenger(err)
    }
}

impl From<TooManyPassengersError> for ProblemError {
    fn from(err: TooManyPassengersError) -> Self {
        ProblemError::TooManyPassengers(err)
    }
}

impl From<MoveTimesLengthError> for ProblemError {
    fn from(err: MoveTimesLengthError) -> Self {
        ProblemError::MoveTimesLength(err)
    }
}

impl From<NegativeDurationError> for ProblemError {
    fn from(err: NegativeDurationError) -> Self {
        ProblemError::NegativeDuration(err)
    }
}

impl From<NonFiniteDurationError> for ProblemError {
    fn from(err: NonFiniteDurationError) -> Self {
        ProblemError::NonFiniteDuration(err)
    }
}

impl From<CapacityOverflowError> for ProblemError {
    fn from(err: CapacityOverflowError) -> Self {
        ProblemError::CapacityOverflow(err)
    }
}

impl From<DurationConversionError> for ProblemError {
    fn from(err: DurationConversionError) -> Self {
        ProblemError::DurationConversion(err)
    }
}

#[derive(Debug)]
pub enum ProblemLoaderError {
    Io(std::io::Error),
    ParseInt { line: usize, source: ParseIntError },
    ParseFloat { line: usize, source: ParseFloatError },
    MissingValue { line: usize },
    UnexpectedEof,
    PassengerCountMismatch { declared: usize, found: usize },
    Problem(ProblemError),
}

impl From<std::io::Error> for ProblemLoaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ProblemError> for ProblemLoaderError {
    fn from(e: ProblemError) -> Self {
        Self::Problem(e)
    }
}

impl std::fmt::Display for ProblemLoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ProblemLoaderError::*;
        match self {
            Io(e) => write!(f, "I/O error: {e}"),
            ParseInt { line, source } => write!(f, "line {line}: parse-int error: {source}"),
            ParseFloat { line, source } => write!(f, "line {line}: parse-float error: {source}"),
            MissingValue { line } => write!(f, "line {line}: expected `<label> <value>`"),
            UnexpectedEof => write!(f, "unexpected end of file while parsing instance"),
            PassengerCountMismatch { declared, found } => write!(
                f,
                "header declares {declared} passengers but {found} were found"
            ),
            Problem(e) => write!(f, "problem error: {e}"),
        }
    }
}

impl std::error::Error for ProblemLoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProblemLoaderError::Io(e) => Some(e),
            ProblemLoaderError::ParseInt { source, .. } => Some(source),
            ProblemLoaderError::ParseFloat { source, .. } => Some(source),
            ProblemLoaderError::Problem(e) => Some(e),
            _ => None,
        }
    }
}
