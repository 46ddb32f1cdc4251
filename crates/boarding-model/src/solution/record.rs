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

use crate::solution::err::RecordError;
use serde::{Deserialize, Deserializer, Serialize};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

/// Name of the `test`-th generated instance with the given cabin size.
#[inline]
pub fn instance_name(num_rows: usize, num_cols: usize, test: usize) -> String {
    format!("mp_sp__{num_rows}_{num_cols}__{test}")
}

/// A solver result as written to disk.
///
/// `order` holds passenger ids in boarding order; `objective_value` is the
/// makespan in the time unit of the instance that was solved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub instance_name: String,
    pub algorithm: String,
    pub computation_time: f64,
    pub objective_value: f64,
    pub order: Vec<u32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "number_or_na"
    )]
    pub lower_bound: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "number_or_na"
    )]
    pub upper_bound: Option<f64>,
    /// Relative gap between the bounds in percent.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "number_or_na"
    )]
    pub gap: Option<f64>,
}

/// Bounds written by exact solvers are numbers, or the string `"N/A"` when
/// the solver did not report one.
fn number_or_na<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(d)? {
        Some(Raw::Number(v)) => Some(v),
        _ => None,
    })
}

impl ResultRecord {
    /// Attaches bounds and derives the gap `|ub - lb| / |ub| * 100`.
    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.lower_bound = Some(lower);
        self.upper_bound = Some(upper);
        self.gap = (upper != 0.0).then(|| (upper - lower).abs() / upper.abs() * 100.0);
        self
    }

    /// File name results are stored under: `<algorithm>__<instance>.json`.
    pub fn file_name(&self) -> String {
        format!(
            "{}__{}.json",
            self.algorithm.to_lowercase(),
            self.instance_name
        )
    }

    #[inline]
    pub fn to_json_string(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[inline]
    pub fn from_json_str(s: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn write_to_path(&self, path: impl AsRef<Path>) -> Result<(), RecordError> {
        let mut w = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut w, self)?;
        w.write_all(b"\n")?;
        w.flush()?;
        Ok(())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RecordError> {
        let r = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(r)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ResultRecord {
        ResultRecord {
            instance_name: instance_name(10, 4, 3),
            algorithm: "HeuristicSearch".to_string(),
            computation_time: 0.25,
            objective_value: 42.5,
            order: vec![2, 0, 1],
            lower_bound: None,
            upper_bound: None,
            gap: None,
        }
    }

    #[test]
    fn test_instance_name_format() {
        assert_eq!(instance_name(10, 4, 3), "mp_sp__10_4__3");
    }

    #[test]
    fn test_file_name_lowercases_algorithm() {
        assert_eq!(record().file_name(), "heuristicsearch__mp_sp__10_4__3.json");
    }

    #[test]
    fn test_json_round_trip_omits_missing_bounds() {
        let r = record();
        let json = r.to_json_string().unwrap();
        assert!(!json.contains("lower_bound"));
        assert_eq!(ResultRecord::from_json_str(&json).unwrap(), r);
    }

    #[test]
    fn test_reads_records_without_optional_fields() {
        let json = r#"{
            "instance_name": "mp_sp__2_2__0",
            "algorithm": "CP",
            "computation_time": 1.5,
            "objective_value": 7.0,
            "order": [1, 0],
            "lower_bound": 6.0
        }"#;
        let r = ResultRecord::from_json_str(json).unwrap();
        assert_eq!(r.lower_bound, Some(6.0));
        assert_eq!(r.upper_bound, None);
        assert_eq!(r.order, vec![1, 0]);
    }

    #[test]
    fn test_not_available_bounds_read_as_none() {
        let json = r#"{
            "instance_name": "mp_sp__2_2__0",
            "algorithm": "mip",
            "computation_time": 1.5,
            "objective_value": 7.0,
            "order": [0, 1],
            "lower_bound": "N/A",
            "upper_bound": "N/A",
            "gap": "N/A"
        }"#;
        let r = ResultRecord::from_json_str(json).unwrap();
        assert_eq!(r.lower_bound, None);
        assert_eq!(r.upper_bound, None);
        assert_eq!(r.gap, None);
    }

    #[test]
    fn test_with_bounds_computes_gap() {
        let r = record().with_bounds(40.0, 50.0);
        assert_eq!(r.gap, Some(20.0));
        let json = r.to_json_string().unwrap();
        assert!(json.contains("\"gap\""));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            ResultRecord::from_json_str("{ not json").unwrap_err(),
            RecordError::Json(_)
        ));
    }
}
