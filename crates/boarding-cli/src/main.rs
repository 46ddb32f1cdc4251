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

mod cli;

use crate::cli::{Args, CheckArgs, Command, LimitArgs, ReportArgs, SolveArgs};
use anyhow::{Context, Result, bail};
use boarding_core::prelude::BoardingNumeric;
use boarding_model::prelude::{Problem, ProblemLoader, ResultRecord};
use boarding_solver::prelude::{
    HeuristicSearch, LocalSearchConfig, SearchLimits, SelectorConfig, Solver, load_solution,
};
use chrono::{DateTime, Utc};
use clap::Parser;
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::{Duration, Instant},
};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .init();
}

#[derive(Serialize)]
struct RunRecord {
    iteration: usize,
    filename: String,
    strategy: String,
    start_ts: DateTime<Utc>,
    end_ts: DateTime<Utc>,
    runtime_ms: u128,
    makespan: f64,
}

/// Expands directories into the `.abp` files they contain, sorted by name.
fn collect_instances(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found: Vec<PathBuf> = fs::read_dir(path)
                .with_context(|| format!("reading directory {}", path.display()))?
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| p.is_file() && p.extension().is_some_and(|x| x == "abp"))
                .collect();
            found.sort();
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn instance_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

fn search_limits(args: LimitArgs) -> Result<SearchLimits> {
    let mut limits = SearchLimits::unbounded();
    if let Some(secs) = args.time_limit_secs {
        let limit = Duration::try_from_secs_f64(secs)
            .with_context(|| format!("invalid time limit {secs}"))?;
        limits = limits.with_time_limit(limit);
    }
    if let Some(n) = args.max_evaluations {
        limits = limits.with_max_evaluations(n);
    }
    if let Some(n) = args.max_moves {
        limits = limits.with_max_accepted_moves(n);
    }
    Ok(limits)
}

/// Runs the selector and returns the result record and the winning strategy.
fn solve_problem<T: BoardingNumeric>(
    problem: &Problem<T>,
    config: SelectorConfig,
    name: &str,
) -> Result<(ResultRecord, String)> {
    let mut selector = HeuristicSearch::new(config);
    let start = Instant::now();
    let outcome = selector.run(problem)?;
    let strategy = outcome.best_strategy().to_string();
    let best = outcome
        .into_best()
        .with_algorithm(selector.name())
        .with_computation_time(start.elapsed());
    Ok((best.to_record(problem, name), strategy))
}

fn solve(args: SolveArgs) -> Result<()> {
    let files = collect_instances(&args.instances)?;
    if files.is_empty() {
        bail!("no instance files found");
    }

    let config = SelectorConfig::default()
        .with_strategies(args.strategies.iter().copied())
        .with_seed(args.seed)
        .with_local_search(LocalSearchConfig::default().with_limits(search_limits(args.limits)?));

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let loader = ProblemLoader::default();
    let mut runs: Vec<RunRecord> = Vec::with_capacity(files.len());

    for (iter, path) in files.iter().enumerate() {
        let iteration = iter + 1;
        let name = instance_name(path);
        let problem = loader
            .from_path(path)
            .with_context(|| format!("loading {}", path.display()))?;

        tracing::info!(
            "Solving [{}] {} with {} rows, {} columns and {} passengers",
            iteration,
            name,
            problem.num_rows(),
            problem.num_cols(),
            problem.passenger_count()
        );

        let start_ts = Utc::now();
        let t0 = Instant::now();
        let (record, strategy) = match args.scale {
            Some(scale) => {
                let discrete = problem
                    .discretize(scale)
                    .with_context(|| format!("discretizing {} by {scale}", name))?;
                solve_problem(&discrete, config.clone(), &name)?
            }
            None => solve_problem(&problem, config.clone(), &name)?,
        };
        let runtime = t0.elapsed();

        tracing::info!(
            "Finished [{}] {}: makespan={} via {}, runtime={:?}",
            iteration,
            name,
            record.objective_value,
            strategy,
            runtime
        );

        if let Some(dir) = &args.output_dir {
            let out = dir.join(record.file_name());
            record
                .write_to_path(&out)
                .with_context(|| format!("writing {}", out.display()))?;
        }

        runs.push(RunRecord {
            iteration,
            filename: name,
            strategy,
            start_ts,
            end_ts: Utc::now(),
            runtime_ms: runtime.as_millis(),
            makespan: record.objective_value,
        });
    }

    let json = serde_json::to_string_pretty(&runs)?;
    fs::write(&args.run_log, json)
        .with_context(|| format!("writing {}", args.run_log.display()))?;
    tracing::info!(
        "Wrote {} run record(s) to {}",
        runs.len(),
        args.run_log.display()
    );
    Ok(())
}

fn check_record<T: BoardingNumeric>(problem: &Problem<T>, record: &ResultRecord) -> Result<f64> {
    let solution = load_solution(problem, record)?;
    Ok(solution.makespan().value().to_f64().unwrap_or(f64::NAN))
}

fn check(args: CheckArgs) -> Result<()> {
    let problem = ProblemLoader::default()
        .from_path(&args.instance)
        .with_context(|| format!("loading {}", args.instance.display()))?;
    let record = ResultRecord::from_path(&args.record)
        .with_context(|| format!("reading {}", args.record.display()))?;

    let makespan = match args.scale {
        Some(scale) => check_record(&problem.discretize(scale)?, &record)?,
        None => check_record(&problem, &record)?,
    };

    if makespan == record.objective_value {
        tracing::info!("{}: makespan {} confirmed", record.instance_name, makespan);
    } else {
        tracing::warn!(
            "{}: record states {} but simulation gives {}",
            record.instance_name,
            record.objective_value,
            makespan
        );
    }
    println!("{makespan}");
    Ok(())
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map_or_else(|| "N/A".to_string(), |x| format!("{x:.2}"))
}

fn report(args: ReportArgs) -> Result<()> {
    let mut files: Vec<PathBuf> = fs::read_dir(&args.directory)
        .with_context(|| format!("reading directory {}", args.directory.display()))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|x| x == "json"))
        .collect();
    files.sort();

    println!(
        "{:38} {:>12} {:>12} {:>8} {:>12} {:>10}",
        "file", "lower_bound", "upper_bound", "gap (%)", "objective", "time (s)"
    );
    for path in files {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        match ResultRecord::from_path(&path) {
            Ok(r) => println!(
                "{:38} {:>12} {:>12} {:>8} {:>12.2} {:>10.2}",
                file,
                fmt_opt(r.lower_bound),
                fmt_opt(r.upper_bound),
                fmt_opt(r.gap),
                r.objective_value,
                r.computation_time
            ),
            Err(e) => tracing::warn!("skipping {}: {}", file, e),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    enable_tracing();

    match Args::parse().command {
        Command::Solve(args) => solve(*args),
        Command::Check(args) => check(args),
        Command::Report(args) => report(args),
    }
}
