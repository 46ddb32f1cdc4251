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
    common::{PassengerIdentifier, PassengerIndex},
    problem::prob::Problem,
    solution::err::OrderingError,
};

/// A boarding order: a permutation of the problem's passengers.
///
/// Entries are `PassengerIndex` values of the problem the ordering was
/// validated against. The permutation property is checked once on
/// construction and preserved by `swap`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ordering {
    sequence: Vec<PassengerIndex>,
}

impl Ordering {
    /// Validates that `sequence` visits every passenger of `problem` exactly
    /// once.
    pub fn try_new<T>(
        problem: &Problem<T>,
        sequence: Vec<PassengerIndex>,
    ) -> Result<Self, OrderingError> {
        let n = problem.passenger_count();
        let mut seen = vec![false; n];
        for &index in &sequence {
            let i = index.get();
            if i >= n {
                return Err(OrderingError::IndexOutOfRange { index, len: n });
            }
            if seen[i] {
                return Err(OrderingError::DuplicatePassenger(
                    problem.passenger(index).id(),
                ));
            }
            seen[i] = true;
        }

        if let Some(missing) = seen.iter().position(|s| !s) {
            let id = problem.passenger(PassengerIndex::new(missing)).id();
            return Err(OrderingError::MissingPassenger(id));
        }

        Ok(Self { sequence })
    }

    /// Builds an ordering from passenger ids, as stored in result records.
    pub fn from_ids<T, I>(problem: &Problem<T>, ids: I) -> Result<Self, OrderingError>
    where
        I: IntoIterator<Item = PassengerIdentifier>,
    {
        let sequence = ids
            .into_iter()
            .map(|id| {
                problem
                    .index_of(id)
                    .ok_or(OrderingError::UnknownPassenger(id))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_new(problem, sequence)
    }

    /// Passengers in the order they were added to the problem.
    pub fn identity<T>(problem: &Problem<T>) -> Self {
        Self {
            sequence: problem.indices().collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[PassengerIndex] {
        &self.sequence
    }

    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = PassengerIndex> + '_ {
        self.sequence.iter().copied()
    }

    #[inline]
    pub fn get(&self, position: usize) -> Option<PassengerIndex> {
        self.sequence.get(position).copied()
    }

    /// Position of `index` in the boarding sequence.
    #[inline]
    pub fn position_of(&self, index: PassengerIndex) -> Option<usize> {
        self.sequence.iter().position(|&p| p == index)
    }

    /// Swaps the passengers at two positions. Panics if either is out of
    /// bounds.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.sequence.swap(a, b);
    }

    #[inline]
    pub fn swapped(&self, a: usize, b: usize) -> Self {
        let mut next = self.clone();
        next.swap(a, b);
        next
    }

    /// The sequence as passenger ids of `problem`.
    pub fn ids<T>(&self, problem: &Problem<T>) -> Vec<PassengerIdentifier> {
        self.sequence
            .iter()
            .map(|&i| problem.passenger(i).id())
            .collect()
    }

    #[inline]
    pub fn into_inner(self) -> Vec<PassengerIndex> {
        self.sequence
    }
}

impl std::fmt::Display for Ordering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (k, i) in self.sequence.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", i.get())?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{builder::ProblemBuilder, passenger::Seat};
    use boarding_core::prelude::TimeDelta;

    #[inline]
    fn pid(n: u32) -> PassengerIdentifier {
        PassengerIdentifier::new(n)
    }

    #[inline]
    fn pix(n: usize) -> PassengerIndex {
        PassengerIndex::new(n)
    }

    fn problem3() -> Problem<i64> {
        let mut b = ProblemBuilder::new(3, 1);
        for row in 1..=3 {
            b.push_seated(Seat::new(row, 1), TimeDelta::new(1), Vec::new());
        }
        b.build().unwrap()
    }

    #[test]
    fn test_identity_is_valid_permutation() {
        let p = problem3();
        let o = Ordering::identity(&p);
        assert_eq!(o.as_slice(), &[pix(0), pix(1), pix(2)]);
        assert_eq!(Ordering::try_new(&p, o.clone().into_inner()).unwrap(), o);
    }

    #[test]
    fn test_duplicate_and_missing_detected() {
        let p = problem3();
        assert_eq!(
            Ordering::try_new(&p, vec![pix(0), pix(0), pix(2)]).unwrap_err(),
            OrderingError::DuplicatePassenger(pid(0))
        );
        assert_eq!(
            Ordering::try_new(&p, vec![pix(2), pix(0)]).unwrap_err(),
            OrderingError::MissingPassenger(pid(1))
        );
        assert!(matches!(
            Ordering::try_new(&p, vec![pix(0), pix(1), pix(5)]).unwrap_err(),
            OrderingError::IndexOutOfRange { len: 3, .. }
        ));
    }

    #[test]
    fn test_from_ids_resolves_and_rejects_unknown() {
        let p = problem3();
        let o = Ordering::from_ids(&p, [pid(2), pid(0), pid(1)]).unwrap();
        assert_eq!(o.as_slice(), &[pix(2), pix(0), pix(1)]);
        assert_eq!(o.ids(&p), vec![pid(2), pid(0), pid(1)]);

        assert_eq!(
            Ordering::from_ids(&p, [pid(2), pid(9), pid(1)]).unwrap_err(),
            OrderingError::UnknownPassenger(pid(9))
        );
    }

    #[test]
    fn test_swap_preserves_permutation() {
        let p = problem3();
        let o = Ordering::identity(&p).swapped(0, 2);
        assert_eq!(o.as_slice(), &[pix(2), pix(1), pix(0)]);
        assert_eq!(o.position_of(pix(0)), Some(2));
        assert!(Ordering::try_new(&p, o.into_inner()).is_ok());
    }

    #[test]
    fn test_display() {
        let p = problem3();
        assert_eq!(Ordering::identity(&p).to_string(), "[0, 1, 2]");
    }
}
