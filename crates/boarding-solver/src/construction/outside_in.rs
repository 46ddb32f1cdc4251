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
use boarding_model::prelude::{Ordering, OrderingError, Problem};

/// Boards column by column, starting with column 1, and within a column
/// from the rear row to the front.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutsideInBackToFront;

impl OutsideInBackToFront {
    pub const NAME: &'static str = "OutsideInBackToFront";

    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl std::fmt::Display for OutsideInBackToFront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(Self::NAME)
    }
}

impl<T: BoardingNumeric> ConstructionHeuristic<T> for OutsideInBackToFront {
    #[inline]
    fn name(&self) -> &str {
        Self::NAME
    }

    fn construct(&mut self, problem: &Problem<T>) -> Result<Ordering, OrderingError> {
        let mut sequence: Vec<_> = problem.indices().collect();
        sequence.sort_by(|&a, &b| {
            let (pa, pb) = (problem.passenger(a), problem.passenger(b));
            pa.column()
                .cmp(&pb.column())
                .then_with(|| pb.row().cmp(&pa.row()))
                .then_with(|| pa.id().cmp(&pb.id()))
        });
        Ordering::try_new(problem, sequence)
    }
}
