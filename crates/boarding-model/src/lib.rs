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

//! # Boarding Model
//!
//! Data types for the airplane boarding problem.
//!
//! - `problem`: passengers, the validated `Problem`, its builder and the
//!   `.abp` instance loader.
//! - `solution`: boarding orders, simulated schedules, solutions and the
//!   JSON result record.
//!
//! Simulation and search live in `boarding-solver`; this crate only holds
//! the data they operate on.

pub mod common;
pub mod problem;
pub mod solution;

pub mod prelude {
    pub use crate::common::{PassengerIdentifier, PassengerIndex};
    pub use crate::problem::{
        Passenger, Problem, ProblemBuilder, ProblemError, ProblemLoader, ProblemLoaderError, Seat,
    };
    pub use crate::solution::{
        BoardingSchedule, Ordering, OrderingError, PassengerTimeline, RecordError, ResultRecord,
        Solution, instance_name,
    };
}
