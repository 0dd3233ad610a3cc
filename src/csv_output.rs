//! CSV output format for sequence reports
//!
//! `--format csv` for spreadsheet analysis: a `sequence,count` header then one
//! row per reported sequence.

use crate::sequence::SequenceCounter;

/// CSV output formatter
#[derive(Debug, Default)]
pub struct CsvOutput {
    rows: Vec<(String, usize)>,
}

impl CsvOutput {
    /// Collect the reported rows of `counter`
    pub fn from_counter(counter: &SequenceCounter) -> Self {
        Self {
            rows: counter.top_sequences(),
        }
    }

    fn header(&self) -> &'static str {
        "sequence,count"
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(self.header());
        output.push('\n');

        for (sequence, count) in &self.rows {
            output.push_str(&Self::escape_field(sequence));
            output.push(',');
            output.push_str(&count.to_string());
            output.push('\n');
        }

        output
    }
}
