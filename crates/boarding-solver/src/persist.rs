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

use crate::{framework::err::SolverError, sim::simulate};
use boarding_core::prelude::BoardingNumeric;
use boarding_model::prelude::{Ordering, PassengerIdentifier, Problem, ResultRecord, Solution};
use std::time::Duration;

/// Rebuilds a solution from a stored result record.
///
/// The boarding order is resolved by passenger id and simulated again, so
/// the returned makespan is the one this simulator computes rather than the
/// record's `objective_value`.
pub fn load_solution<T: BoardingNumeric>(
    problem: &Problem<T>,
    record: &ResultRecord,
) -> Result<Solution<T>, SolverError> {
    let ids = record.order.iter().copied().map(PassengerIdentifier::new);
    let ordering = Ordering::from_ids(problem, ids)?;
    let schedule = simulate(problem, &ordering)?;

    let mut solution = Solution::from_schedule(ordering, schedule).with_algorithm(&record.algorithm);
    if let Ok(elapsed) = Duration::try_from_secs_f64(record.computation_time) {
        solution = solution.with_computation_time(elapsed);
    }
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::select_best;
    use boarding_core::prelude::{TimeDelta, TimePoint};
    use boarding_model::prelude::{OrderingError, ProblemBuilder, Seat, instance_name};

    fn problem() -> Problem<f64> {
        let mut b = ProblemBuilder::new(3, 2);
        for (row, col, settle) in [(1, 1, 2.0), (2, 2, 1.5), (3, 1, 3.0), (3, 2, 0.5)] {
            b.push_seated(
                Seat::new(row, col),
                TimeDelta::new(settle),
                vec![TimeDelta::new(0.5); 3],
            );
        }
        b.build().unwrap()
    }

    fn record(order: Vec<u32>) -> ResultRecord {
        ResultRecord {
            instance_name: instance_name(3, 2, 0),
            algorithm: "cp".to_string(),
            computation_time: 2.0,
            objective_value: 0.0,
            order,
            lower_bound: None,
            upper_bound: None,
            gap: None,
        }
    }

    #[test]
    fn test_round_trip_through_record_reproduces_makespan() {
        let p = problem();
        let best = select_best(&p).unwrap();
        let rec = best.to_record(&p, instance_name(3, 2, 0));
        let json = rec.to_json_string().unwrap();

        let loaded = load_solution(&p, &ResultRecord::from_json_str(&json).unwrap()).unwrap();
        assert_eq!(loaded.ordering(), best.ordering());
        assert_eq!(loaded.makespan(), best.makespan());
        assert_eq!(loaded.makespan().value(), rec.objective_value);
    }

    #[test]
    fn test_metadata_is_carried_over() {
        let p = problem();
        let s = load_solution(&p, &record(vec![3, 2, 1, 0])).unwrap();
        assert_eq!(s.algorithm(), Some("cp"));
        assert_eq!(s.computation_time(), Some(Duration::from_secs(2)));
        assert!(s.makespan() > TimePoint::new(0.0));
    }

    #[test]
    fn test_unknown_and_duplicate_ids_rejected() {
        let p = problem();
        assert_eq!(
            load_solution(&p, &record(vec![0, 1, 2, 7])).unwrap_err(),
            SolverError::InvalidOrdering(OrderingError::UnknownPassenger(
                PassengerIdentifier::new(7)
            ))
        );
        assert_eq!(
            load_solution(&p, &record(vec![0, 1, 1, 3])).unwrap_err(),
            SolverError::InvalidOrdering(OrderingError::DuplicatePassenger(
                PassengerIdentifier::new(1)
            ))
        );
        assert!(matches!(
            load_solution(&p, &record(vec![0, 1, 2])).unwrap_err(),
            SolverError::InvalidOrdering(OrderingError::MissingPassenger(_))
        ));
    }
}
