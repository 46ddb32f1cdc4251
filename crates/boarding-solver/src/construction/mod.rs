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

//! Construction heuristics: boarding orders built in one pass without
//! search.

pub mod max_settle_row;
pub mod outside_in;
pub mod random;

pub use max_settle_row::MaxSettleRow;
pub use outside_in::OutsideInBackToFront;
pub use random::RandomOrdering;

use crate::framework::solver::ConstructionHeuristic;
use boarding_core::prelude::BoardingNumeric;

/// The closed set of construction heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    MaxSettleRow,
    OutsideInBackToFront,
    Random,
}

impl Strategy {
    /// Every strategy, in the order the selector runs them.
    pub const ALL: [Strategy; 3] = [
        Strategy::MaxSettleRow,
        Strategy::OutsideInBackToFront,
        Strategy::Random,
    ];

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::MaxSettleRow => MaxSettleRow::NAME,
            Strategy::OutsideInBackToFront => OutsideInBackToFront::NAME,
            Strategy::Random => RandomOrdering::<rand_chacha::ChaCha8Rng>::NAME,
        }
    }

    /// Instantiates the heuristic. `seed` is only used by `Random`.
    pub fn build<T: BoardingNumeric>(self, seed: u64) -> Box<dyn ConstructionHeuristic<T>> {
        match self {
            Strategy::MaxSettleRow => Box::new(MaxSettleRow),
            Strategy::OutsideInBackToFront => Box::new(OutsideInBackToFront),
            Strategy::Random => Box::new(RandomOrdering::from_seed(seed)),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategyError(String);

impl std::fmt::Display for UnknownStrategyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown strategy `{}` (expected max-settle-row, outside-in-btf or random)",
            self.0
        )
    }
}

impl std::error::Error for UnknownStrategyError {}

impl std::str::FromStr for Strategy {
    type Err = UnknownStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "maxsettlerow" => Ok(Strategy::MaxSettleRow),
            "outsideinbacktofront" | "outsideinbtf" => Ok(Strategy::OutsideInBackToFront),
            "random" => Ok(Strategy::Random),
            _ => Err(UnknownStrategyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_names_and_kebab_case() {
        assert_eq!("max-settle-row".parse::<Strategy>(), Ok(Strategy::MaxSettleRow));
        assert_eq!("MaxSettleRow".parse::<Strategy>(), Ok(Strategy::MaxSettleRow));
        assert_eq!("outside-in-btf".parse::<Strategy>(), Ok(Strategy::OutsideInBackToFront));
        assert_eq!("Random".parse::<Strategy>(), Ok(Strategy::Random));
        assert!("two-opt".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_build_names_match() {
        for s in Strategy::ALL {
            let h = s.build::<f64>(0);
            assert_eq!(h.name(), s.name());
        }
    }
}
