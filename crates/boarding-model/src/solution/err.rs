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

/// An ordering that is not a permutation of the problem's passengers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderingError {
    UnknownPassenger(PassengerIdentifier),
    IndexOutOfRange { index: PassengerIndex, len: usize },
    DuplicatePassenger(PassengerIdentifier),
    MissingPassenger(PassengerIdentifier),
    LengthMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for OrderingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderingError::UnknownPassenger(id) => {
                write!(f, "Ordering references unknown passenger {}", id)
            }
            OrderingError::IndexOutOfRange { index, len } => {
                write!(f, "{} is out of range for {} passengers", index, len)
            }
            OrderingError::DuplicatePassenger(id) => {
                write!(f, "{} appears more than once in the ordering", id)
            }
            OrderingError::MissingPassenger(id) => {
                write!(f, "{} is missing from the ordering", id)
            }
            OrderingError::LengthMismatch { expected, actual } => write!(
                f,
                "Ordering has {} entries but the problem has {} passengers",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for OrderingError {}

/// Failure to read or write a result record.
#[derive(Debug)]
pub enum RecordError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl From<std::io::Error> for RecordError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for RecordError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordError::Io(e) => write!(f, "I/O error: {e}"),
            RecordError::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordError::Io(e) => Some(e),
            RecordError::Json(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_error_display() {
        let e = OrderingError::DuplicatePassenger(PassengerIdentifier::new(3));
        assert_eq!(
            e.to_string(),
            "Passenger(3) appears more than once in the ordering"
        );
        let e = OrderingError::LengthMismatch {
            expected: 4,
            actual: 2,
        };
        assert_eq!(
            e.to_string(),
            "Ordering has 2 entries but the problem has 4 passengers"
        );
    }
}
