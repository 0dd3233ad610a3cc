use super::ngram::{ngram_coverage, top_ngrams, NGramMap, KEY_SEPARATOR};
use super::window::RollingWindow;
use crate::config::CounterConfig;
use crate::error::Result;

const SEQUENCE_COLUMN_WIDTH: usize = 35;
const OUTPUT_SEPARATOR: &str = "===========================================";
const HEADER_SEPARATOR: &str = "-------------------------------------------";
const TABLE_HEADER: &str = "Sequence                            | Count";
const NO_SOURCES_MESSAGE: &str = "No sources were provided, and thus no output is available! =^-^=";

/// Streaming word sequence counter
///
/// Tokens are fed one at a time through a [`RollingWindow`]; every time the
/// window is full its contents are joined into a key and counted. Each input
/// unit is announced with [`record_source`](Self::record_source) before its
/// tokens, which also starts a fresh window so sequences never span units.
///
/// # Example
/// ```
/// use wordgrams::sequence::SequenceCounter;
///
/// let mut counter = SequenceCounter::default();
/// counter.record_source("StdIn");
/// for token in ["a", "b", "c", "a", "b", "c"] {
///     counter.ingest(token);
/// }
///
/// assert_eq!(counter.count("a b c"), 2);
/// assert!(counter.report().contains("for StdIn"));
/// ```
#[derive(Debug, Clone)]
pub struct SequenceCounter {
    window: RollingWindow<String>,
    frequencies: NGramMap,
    sources: Vec<String>,
    result_limit: usize,
}

impl SequenceCounter {
    /// Create a counter reporting `result_limit` rows of `sequence_size` words
    ///
    /// Both values must be at least 1.
    pub fn new(result_limit: usize, sequence_size: usize) -> Result<Self> {
        Self::from_config(&CounterConfig {
            result_limit,
            sequence_size,
        })
    }

    pub fn from_config(config: &CounterConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            window: RollingWindow::new(config.sequence_size)?,
            frequencies: NGramMap::new(),
            sources: Vec::new(),
            result_limit: config.result_limit,
        })
    }

    /// Register the start of a new input unit
    pub fn record_source(&mut self, id: &str) {
        self.sources.push(id.to_string());
        self.window.clear();
    }

    /// Feed one normalized token
    pub fn ingest(&mut self, token: &str) {
        self.window.push(token.to_string());

        if let Some(words) = self.window.snapshot() {
            let key = words.join(KEY_SEPARATOR);
            let count = self.frequencies.entry(key).or_insert(0);
            *count += 1;
            if *count == 1 {
                tracing::trace!(sequences = self.frequencies.len(), "new sequence");
            }
        }
    }

    /// Clear counts, buffered words and recorded sources
    pub fn reset(&mut self) {
        self.frequencies.clear();
        self.window.clear();
        self.sources.clear();
    }

    /// Render the most common sequences as a plain-text table
    ///
    /// Without any recorded source only the "no sources" message is printed.
    pub fn report(&self) -> String {
        let mut out = String::from("\n");

        if self.sources.is_empty() {
            out.push_str(NO_SOURCES_MESSAGE);
            out.push('\n');
            out.push_str(OUTPUT_SEPARATOR);
            return out;
        }

        out.push_str(&format!(
            "Here are the most common word sequences for {}\n\n",
            self.source_header()
        ));
        out.push_str(TABLE_HEADER);
        out.push('\n');
        out.push_str(HEADER_SEPARATOR);
        out.push('\n');

        for (sequence, count) in self.top_sequences() {
            out.push_str(&format!(
                "{:<width$} | {}\n",
                sequence,
                count,
                width = SEQUENCE_COLUMN_WIDTH
            ));
        }

        out.push_str(OUTPUT_SEPARATOR);
        out
    }

    fn source_header(&self) -> String {
        if self.sources.len() == 1 {
            self.sources[0].clone()
        } else {
            format!(
                "the following combined sources: {}",
                self.sources.join(" | ")
            )
        }
    }

    /// The reported rows: count descending, then sequence text, truncated to the limit
    pub fn top_sequences(&self) -> Vec<(String, usize)> {
        top_ngrams(&self.frequencies, self.result_limit)
    }

    pub fn count(&self, sequence: &str) -> usize {
        self.frequencies.get(sequence).copied().unwrap_or(0)
    }

    pub fn frequencies(&self) -> &NGramMap {
        &self.frequencies
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn unique_sequences(&self) -> usize {
        self.frequencies.len()
    }

    pub fn total_sequences(&self) -> usize {
        self.frequencies.values().sum()
    }

    pub fn coverage(&self) -> f64 {
        ngram_coverage(&self.frequencies)
    }

    pub fn sequence_size(&self) -> usize {
        self.window.capacity()
    }

    pub fn result_limit(&self) -> usize {
        self.result_limit
    }
}

impl Default for SequenceCounter {
    fn default() -> Self {
        let config = CounterConfig::default();
        Self {
            window: RollingWindow::default(),
            frequencies: NGramMap::new(),
            sources: Vec::new(),
            result_limit: config.result_limit,
        }
    }
}
