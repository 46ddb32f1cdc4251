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
use rand::{Rng, SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;

/// A uniformly random boarding order drawn from the owned generator.
///
/// Each call to `construct` advances the generator, so repeated calls yield
/// different orders while the whole sequence stays reproducible from the
/// seed.
#[derive(Debug, Clone)]
pub struct RandomOrdering<R = ChaCha8Rng> {
    rng: R,
}

impl RandomOrdering<ChaCha8Rng> {
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R> RandomOrdering<R> {
    pub const NAME: &'static str = "Random";

    #[inline]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    #[inline]
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl<R> std::fmt::Display for RandomOrdering<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(Self::NAME)
    }
}

impl<T: BoardingNumeric, R: Rng> ConstructionHeuristic<T> for RandomOrdering<R> {
    #[inline]
    fn name(&self) -> &str {
        Self::NAME
    }

    fn construct(&mut self, problem: &Problem<T>) -> Result<Ordering, OrderingError> {
        let mut sequence: Vec<_> = problem.indices().collect();
        sequence.shuffle(&mut self.rng);
        Ordering::try_new(problem, sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boarding_core::prelude::TimeDelta;
    use boarding_model::prelude::{ProblemBuilder, Seat};

    fn problem() -> Problem<i64> {
        let mut b = ProblemBuilder::new(5, 4);
        for row in 1..=5 {
            for col in 1..=4 {
                b.push_seated(Seat::new(row, col), TimeDelta::new(1), Vec::new());
            }
        }
        b.build().unwrap()
    }

    #[test]
    fn test_same_seed_same_order() {
        let p = problem();
        let a = RandomOrdering::from_seed(7).construct(&p).unwrap();
        let b = RandomOrdering::from_seed(7).construct(&p).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_output_is_permutation() {
        let p = problem();
        let mut h = RandomOrdering::from_seed(42);
        for _ in 0..5 {
            let o = h.construct(&p).unwrap();
            assert_eq!(o.len(), p.passenger_count());
            assert!(Ordering::try_new(&p, o.into_inner()).is_ok());
        }
    }

    #[test]
    fn test_accepts_any_rng() {
        let p = problem();
        let mut h = RandomOrdering::new(rand::rngs::StdRng::seed_from_u64(1));
        let o = ConstructionHeuristic::<i64>::construct(&mut h, &p).unwrap();
        assert_eq!(o.len(), 20);
    }
}
