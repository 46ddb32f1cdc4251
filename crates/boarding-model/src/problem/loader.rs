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
    common::PassengerIdentifier,
    problem::{
        builder::ProblemBuilder,
        err::{MoveTimesLengthError, ProblemError, ProblemLoaderError},
        passenger::Seat,
        prob::Problem,
    },
};
use boarding_core::prelude::TimeDelta;
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

/// Reads `.abp` instance files.
///
/// The format is line based, every line being a label followed by one or
/// more values:
///
/// ```text
/// rows 4
/// columns 2
/// passengers 1
/// row 3
/// column 1
/// settle 2.5
/// move 1.0 1.5 0.5
/// ```
///
/// The three header lines are followed by four lines per passenger. Labels
/// are not interpreted. Passengers receive ids `0..n` in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemLoader {
    pad_move_times: bool,
}

impl Default for ProblemLoader {
    fn default() -> Self {
        Self {
            pad_move_times: true,
        }
    }
}

impl ProblemLoader {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// When enabled (the default), `move` lines may be shorter than the
    /// number of rows and the missing entries count as zero. Otherwise short
    /// lines are rejected.
    #[inline]
    pub fn pad_move_times(mut self, yes: bool) -> Self {
        self.pad_move_times = yes;
        self
    }

    pub fn from_bufread<R: BufRead>(&self, br: R) -> Result<Problem<f64>, ProblemLoaderError> {
        let mut sc = LineScanner::new(br);
        let num_rows: usize = sc.expect_line()?.single()?;
        let num_cols: usize = sc.expect_line()?.single()?;
        let declared: usize = sc.expect_line()?.single()?;

        let mut builder = ProblemBuilder::new(num_rows, num_cols);

        while let Some(row_line) = sc.next_line()? {
            let row: usize = row_line.single()?;
            let column: usize = sc.expect_line()?.single()?;
            let settle: f64 = sc.expect_line()?.single()?;
            let moves: Vec<TimeDelta<f64>> = sc
                .expect_line()?
                .values::<f64>()?
                .into_iter()
                .map(TimeDelta::new)
                .collect();

            if !self.pad_move_times && moves.len() < num_rows {
                let id = PassengerIdentifier::new(builder.passenger_count() as u32);
                let err = MoveTimesLengthError::new(id, num_rows, moves.len());
                return Err(ProblemError::from(err).into());
            }
            builder.push_seated(Seat::new(row, column), TimeDelta::new(settle), moves);
        }

        let found = builder.passenger_count();
        if found != declared {
            return Err(ProblemLoaderError::PassengerCountMismatch { declared, found });
        }

        Ok(builder.build()?)
    }

    #[inline]
    pub fn from_path(&self, path: impl AsRef<Path>) -> Result<Problem<f64>, ProblemLoaderError> {
        let file = File::open(path).map_err(ProblemLoaderError::Io)?;
        self.from_bufread(BufReader::new(file))
    }

    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Problem<f64>, ProblemLoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Problem<f64>, ProblemLoaderError> {
        self.from_reader(s.as_bytes())
    }
}

/// One non-blank line split into its label and values.
#[derive(Debug)]
struct Line {
    number: usize,
    values: Vec<String>,
}

/// Numbers that can appear as values, with the matching error variant.
trait ParseValue: Sized {
    fn parse_value(tok: &str, line: usize) -> Result<Self, ProblemLoaderError>;
}

impl ParseValue for usize {
    fn parse_value(tok: &str, line: usize) -> Result<Self, ProblemLoaderError> {
        tok.parse()
            .map_err(|source| ProblemLoaderError::ParseInt { line, source })
    }
}

impl ParseValue for f64 {
    fn parse_value(tok: &str, line: usize) -> Result<Self, ProblemLoaderError> {
        tok.parse()
            .map_err(|source| ProblemLoaderError::ParseFloat { line, source })
    }
}

impl Line {
    fn single<V: ParseValue>(&self) -> Result<V, ProblemLoaderError> {
        let tok = self
            .values
            .first()
            .ok_or(ProblemLoaderError::MissingValue { line: self.number })?;
        V::parse_value(tok, self.number)
    }

    fn values<V: ParseValue>(&self) -> Result<Vec<V>, ProblemLoaderError> {
        self.values
            .iter()
            .map(|tok| V::parse_value(tok, self.number))
            .collect()
    }
}

#[derive(Debug)]
struct LineScanner<R: BufRead> {
    rdr: R,
    buf: String,
    line: usize,
}

impl<R: BufRead> LineScanner<R> {
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: String::new(),
            line: 0,
        }
    }

    /// Next non-blank line, or `None` at end of input.
    fn next_line(&mut self) -> Result<Option<Line>, ProblemLoaderError> {
        loop {
            self.buf.clear();
            let n = self
                .rdr
                .read_line(&mut self.buf)
                .map_err(ProblemLoaderError::Io)?;
            if n == 0 {
                return Ok(None);
            }
            self.line += 1;

            let mut tokens = self.buf.split_whitespace();
            if tokens.next().is_none() {
                continue;
            }
            return Ok(Some(Line {
                number: self.line,
                values: tokens.map(str::to_owned).collect(),
            }));
        }
    }

    #[inline]
    fn expect_line(&mut self) -> Result<Line, ProblemLoaderError> {
        self.next_line()?.ok_or(ProblemLoaderError::UnexpectedEof)
    }
}
