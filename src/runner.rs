//! Run orchestration: process every input unit in order and print reports
//!
//! Owns the single [`SequenceCounter`] for the run. Units that cannot be read
//! are reported on the error stream and skipped; they never abort the run.

use crate::cli::OutputFormat;
use crate::config::CounterConfig;
use crate::csv_output::CsvOutput;
use crate::json_output::JsonOutput;
use crate::reader::{process_source, InputSource};
use crate::sequence::SequenceCounter;
use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;

/// Everything needed for one run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Files in the order given; empty means standard input
    pub files: Vec<PathBuf>,
    /// Report and reset after each file
    pub reset_each: bool,
    pub format: OutputFormat,
    pub counter: CounterConfig,
}

impl RunConfig {
    /// Input units in processing order
    pub fn sources(&self) -> Vec<InputSource> {
        if self.files.is_empty() {
            vec![InputSource::Stdin]
        } else {
            self.files.iter().cloned().map(InputSource::File).collect()
        }
    }

    fn banner(&self) -> String {
        if self.files.is_empty() {
            "Parsing StdIn".to_string()
        } else {
            let names: Vec<String> = self.files.iter().map(|f| f.display().to_string()).collect();
            format!("Parsing the following file(s): [{}]", names.join(", "))
        }
    }
}

/// Process all units of `config`, writing reports to `out` and diagnostics to `err`
pub fn run<O: Write, E: Write>(config: &RunConfig, out: &mut O, err: &mut E) -> Result<()> {
    let mut counter = SequenceCounter::from_config(&config.counter)?;

    // machine-readable formats keep stdout clean
    if config.format == OutputFormat::Text {
        writeln!(out, "{}", config.banner())?;
    } else {
        writeln!(err, "{}", config.banner())?;
    }

    let per_unit = config.reset_each && !config.files.is_empty();

    for source in config.sources() {
        if let Err(e) = process_source(&mut counter, &source) {
            tracing::warn!(source = %e.source_name, error = %e.source, "skipping unreadable unit");
            match source {
                InputSource::Stdin => writeln!(err, "Unable to read input from StdIn: {}", e.source)?,
                InputSource::File(_) => writeln!(
                    err,
                    "There was an issue processing the file: {}... {}",
                    e.source_name, e.source
                )?,
            }
        }

        if per_unit {
            write_report(&counter, config.format, out)?;
            counter.reset();
        }
    }

    if !per_unit {
        write_report(&counter, config.format, out)?;
    }

    Ok(())
}

/// Write one report of the counter's current state
pub fn write_report<W: Write>(counter: &SequenceCounter, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", counter.report())?,
        OutputFormat::Json => writeln!(out, "{}", JsonOutput::from_counter(counter).to_json()?)?,
        OutputFormat::Csv => write!(out, "{}", CsvOutput::from_counter(counter).to_csv())?,
    }
    Ok(())
}
