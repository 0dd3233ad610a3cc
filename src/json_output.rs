//! JSON output format for sequence reports
//!
//! `--format json` renders the same rows as the text report (same ordering and
//! limit) plus summary statistics, for machine consumption.

use crate::sequence::SequenceCounter;
use serde::{Deserialize, Serialize};

/// Format name embedded in every document
pub const JSON_FORMAT: &str = "wordgrams-json-v1";

/// One reported sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSequence {
    /// Space-joined words
    pub sequence: String,
    /// Number of occurrences
    pub count: usize,
}

/// Summary statistics over the whole frequency table (not just reported rows)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSummary {
    /// Number of distinct sequences seen
    pub unique_sequences: usize,
    /// Total sequence occurrences
    pub total_sequences: usize,
    /// unique / total (0.0 when nothing was counted)
    pub coverage: f64,
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Crate version that produced the document
    pub version: String,
    /// Format name
    pub format: String,
    /// Sources in the order they were processed
    pub sources: Vec<String>,
    /// Words per sequence
    pub sequence_size: usize,
    /// Most common sequences, count descending
    pub sequences: Vec<JsonSequence>,
    pub summary: JsonSummary,
}

impl JsonOutput {
    /// Build the document for the current state of `counter`
    pub fn from_counter(counter: &SequenceCounter) -> Self {
        let sequences = counter
            .top_sequences()
            .into_iter()
            .map(|(sequence, count)| JsonSequence { sequence, count })
            .collect();

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: JSON_FORMAT.to_string(),
            sources: counter.sources().to_vec(),
            sequence_size: counter.sequence_size(),
            sequences,
            summary: JsonSummary {
                unique_sequences: counter.unique_sequences(),
                total_sequences: counter.total_sequences(),
                coverage: counter.coverage(),
            },
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_counter() -> SequenceCounter {
        let mut counter = SequenceCounter::new(2, 2).unwrap();
        counter.record_source("a.txt");
        for word in ["to", "be", "or", "not", "to", "be"] {
            counter.ingest(word);
        }
        counter
    }

    #[test]
    fn test_json_structure() {
        let output = JsonOutput::from_counter(&sample_counter());

        assert_eq!(output.format, "wordgrams-json-v1");
        assert_eq!(output.sources, vec!["a.txt"]);
        assert_eq!(output.sequence_size, 2);
        assert_eq!(output.sequences.len(), 2);
        assert_eq!(
            output.sequences[0],
            JsonSequence {
                sequence: "to be".to_string(),
                count: 2
            }
        );
        assert_eq!(output.summary.unique_sequences, 4);
        assert_eq!(output.summary.total_sequences, 5);
    }

    #[test]
    fn test_json_serialization() {
        let json = JsonOutput::from_counter(&sample_counter()).to_json().unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["format"], "wordgrams-json-v1");
        assert_eq!(parsed["sequences"][0]["sequence"], "to be");
        assert_eq!(parsed["sequences"][0]["count"], 2);
        assert!(parsed["summary"]["coverage"].is_number());
    }

    #[test]
    fn test_json_without_sources() {
        let output = JsonOutput::from_counter(&SequenceCounter::default());

        assert!(output.sources.is_empty());
        assert!(output.sequences.is_empty());
        assert_eq!(output.summary.coverage, 0.0);
    }
}
