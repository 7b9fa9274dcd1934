//! # Logbook
//!
//! The logbook is the per-generation record of a run: one [`GenerationRecord`]
//! per generation, appended in order and never modified afterwards. It can be
//! inspected as data, rendered as a table, or streamed incrementally while the
//! run is in progress.
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use std::time::Duration;
//! use elitega::logbook::{GenerationRecord, Logbook};
//!
//! let mut logbook = Logbook::new(vec!["min".to_string()]);
//! let mut stats = BTreeMap::new();
//! stats.insert("min".to_string(), 1.5);
//! logbook.record(GenerationRecord::new(0, 10, Duration::from_millis(2), stats));
//!
//! assert_eq!(logbook.select("nevals"), vec![10.0]);
//! assert_eq!(logbook.select("min"), vec![1.5]);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const GENERATION_FIELD: &str = "gen";
const EVALUATIONS_FIELD: &str = "nevals";
const DURATION_FIELD: &str = "exec_time_seconds";

/// Everything recorded about one generation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRecord {
    pub generation: usize,
    /// Number of fitness evaluations performed in this generation.
    pub evaluations: usize,
    /// Wall-clock time spent on this generation.
    pub duration: Duration,
    /// Compiled statistics, empty when no statistics engine is configured.
    pub statistics: BTreeMap<String, f64>,
}

impl GenerationRecord {
    pub fn new(
        generation: usize,
        evaluations: usize,
        duration: Duration,
        statistics: BTreeMap<String, f64>,
    ) -> Self {
        Self {
            generation,
            evaluations,
            duration,
            statistics,
        }
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration.as_secs_f64()
    }

    /// Looks up a column by name, including the fixed `gen`, `nevals` and
    /// `exec_time_seconds` columns.
    pub fn get(&self, field: &str) -> Option<f64> {
        match field {
            GENERATION_FIELD => Some(self.generation as f64),
            EVALUATIONS_FIELD => Some(self.evaluations as f64),
            DURATION_FIELD => Some(self.duration_seconds()),
            other => self.statistics.get(other).copied(),
        }
    }
}

/// Append-only sequence of generation records.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct Logbook {
    header: Vec<String>,
    records: Vec<GenerationRecord>,
    #[cfg_attr(feature = "serde", serde(skip))]
    streamed: Option<usize>,
}

impl Logbook {
    /// Creates an empty logbook whose header is the fixed columns followed by
    /// `statistic_fields`.
    pub fn new(statistic_fields: Vec<String>) -> Self {
        let mut header = vec![
            GENERATION_FIELD.to_string(),
            EVALUATIONS_FIELD.to_string(),
            DURATION_FIELD.to_string(),
        ];
        header.extend(statistic_fields);

        Self {
            header,
            records: Vec::new(),
            streamed: None,
        }
    }

    pub fn record(&mut self, record: GenerationRecord) {
        self.records.push(record);
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn records(&self) -> &[GenerationRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GenerationRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&GenerationRecord> {
        self.records.last()
    }

    /// Extracts one column. Records lacking the field are skipped.
    pub fn select(&self, field: &str) -> Vec<f64> {
        self.records.iter().filter_map(|r| r.get(field)).collect()
    }

    /// Renders the rows added since the previous call, preceded by the header
    /// on the first call.
    pub fn stream(&mut self) -> String {
        let mut lines = Vec::new();
        let start = match self.streamed {
            Some(next) => next,
            None => {
                lines.push(self.header.join("\t"));
                0
            }
        };

        lines.extend(self.records[start..].iter().map(|r| self.format_row(r)));
        self.streamed = Some(self.records.len());
        lines.join("\n")
    }

    fn format_row(&self, record: &GenerationRecord) -> String {
        self.header
            .iter()
            .map(|field| match field.as_str() {
                GENERATION_FIELD => record.generation.to_string(),
                EVALUATIONS_FIELD => record.evaluations.to_string(),
                other => record
                    .get(other)
                    .map(|v| format!("{:.6}", v))
                    .unwrap_or_default(),
            })
            .collect::<Vec<_>>()
            .join("\t")
    }
}

// the stream cursor is output state, not content
impl PartialEq for Logbook {
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header && self.records == other.records
    }
}

impl<'a> IntoIterator for &'a Logbook {
    type Item = &'a GenerationRecord;
    type IntoIter = std::slice::Iter<'a, GenerationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl fmt::Display for Logbook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header.join("\t"))?;
        for record in &self.records {
            write!(f, "\n{}", self.format_row(record))?;
        }
        Ok(())
    }
}
