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

use boarding_solver::prelude::Strategy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run every construction heuristic with swap search and keep the best order.
    #[clap(name = "solve")]
    Solve(Box<SolveArgs>),

    /// Re-simulate the boarding order stored in a result record.
    #[clap(name = "check")]
    Check(CheckArgs),

    /// Print a table of all result records in a directory.
    #[clap(name = "report")]
    Report(ReportArgs),
}

#[derive(Parser)]
pub struct SolveArgs {
    /// Instance files (`.abp`), or directories containing them.
    #[clap(required = true)]
    pub instances: Vec<PathBuf>,

    /// Strategies to run, in order.
    #[clap(
        long,
        env = "BOARDING_STRATEGIES",
        value_delimiter = ',',
        default_value = "max-settle-row,outside-in-btf,random"
    )]
    pub strategies: Vec<Strategy>,

    /// Seed for the random strategy.
    #[clap(long, default_value = "0", env = "BOARDING_SEED")]
    pub seed: u64,

    /// Multiply every duration by this factor and truncate to integers
    /// before solving.
    #[clap(long, env = "BOARDING_SCALE")]
    pub scale: Option<f64>,

    #[clap(flatten)]
    pub limits: LimitArgs,

    /// Directory to write one result record per instance into.
    #[clap(long = "output-dir", env = "BOARDING_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// File to write the run log (timestamps and makespans) to.
    #[clap(long = "run-log", default_value = "boarding_runs.json")]
    pub run_log: PathBuf,
}

#[derive(Copy, Clone, Parser)]
pub struct LimitArgs {
    /// Wall-clock budget per local search run, in seconds.
    #[clap(long = "time-limit-secs", env = "BOARDING_TIME_LIMIT_SECS")]
    pub time_limit_secs: Option<f64>,

    /// Maximum number of simulated candidates per local search run.
    #[clap(long = "max-evaluations", env = "BOARDING_MAX_EVALUATIONS")]
    pub max_evaluations: Option<u64>,

    /// Maximum number of adopted swaps per local search run.
    #[clap(long = "max-moves", env = "BOARDING_MAX_MOVES")]
    pub max_moves: Option<u64>,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Instance the record was produced for.
    pub instance: PathBuf,

    /// Result record (JSON).
    pub record: PathBuf,

    /// Scale the record's makespan was computed with.
    #[clap(long, env = "BOARDING_SCALE")]
    pub scale: Option<f64>,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Directory containing result records.
    pub directory: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_solve_defaults() {
        let args = Args::try_parse_from(["boarding", "solve", "a.abp"]).unwrap();
        let Command::Solve(solve) = args.command else {
            panic!("expected solve");
        };
        assert_eq!(solve.strategies, Strategy::ALL.to_vec());
        assert_eq!(solve.seed, 0);
        assert!(solve.scale.is_none());
        assert!(solve.limits.time_limit_secs.is_none());
    }

    #[test]
    fn test_parse_strategy_list() {
        let args = Args::try_parse_from([
            "boarding",
            "solve",
            "--strategies",
            "random,max-settle-row",
            "--scale",
            "10",
            "a.abp",
        ])
        .unwrap();
        let Command::Solve(solve) = args.command else {
            panic!("expected solve");
        };
        assert_eq!(
            solve.strategies,
            vec![Strategy::Random, Strategy::MaxSettleRow]
        );
        assert_eq!(solve.scale, Some(10.0));
    }
}
