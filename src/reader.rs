//! Input units: opening files and standard input and feeding their words to a counter
//!
//! A unit is read completely before any of it reaches the counter, so a unit
//! that fails part way (unreadable file, invalid UTF-8) leaves no trace: it is
//! not recorded as a source and contributes no sequences.

use crate::error::ReadError;
use crate::sequence::SequenceCounter;
use crate::tokenize::tokenize_line;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Name under which standard input is reported
pub const STDIN_NAME: &str = "StdIn";

/// One logical input unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Human-readable name used in report headers and diagnostics
    pub fn name(&self) -> String {
        match self {
            InputSource::Stdin => STDIN_NAME.to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    /// Read every line of this unit
    pub fn read_lines(&self) -> Result<Vec<String>, ReadError> {
        let result = match self {
            InputSource::Stdin => read_all_lines(io::stdin().lock()),
            InputSource::File(path) => File::open(path).and_then(|file| read_all_lines(BufReader::new(file))),
        };

        result.map_err(|source| ReadError {
            source_name: self.name(),
            source,
        })
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Collect lines with their `\n` / `\r\n` terminators stripped
fn read_all_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader.lines().collect()
}

/// Read one unit and feed its words to `counter`
///
/// Returns the number of words ingested. On error the counter is untouched.
pub fn process_source(counter: &mut SequenceCounter, source: &InputSource) -> Result<usize, ReadError> {
    tracing::debug!(source = %source, "reading unit");
    let lines = source.read_lines()?;
    let words = ingest_lines(counter, &source.name(), &lines);
    tracing::debug!(source = %source, lines = lines.len(), words, "unit processed");
    Ok(words)
}

/// Read a unit from any buffered reader under the given name
pub fn process_reader<R: BufRead>(counter: &mut SequenceCounter, name: &str, reader: R) -> Result<usize, ReadError> {
    let lines = read_all_lines(reader).map_err(|source| ReadError {
        source_name: name.to_string(),
        source,
    })?;
    Ok(ingest_lines(counter, name, &lines))
}

/// Record `name` as a source and ingest the words of `lines` in document order
///
/// Sequences continue across line breaks; empty lines change nothing.
pub fn ingest_lines<S: AsRef<str>>(counter: &mut SequenceCounter, name: &str, lines: &[S]) -> usize {
    counter.record_source(name);

    let mut words = 0;
    for line in lines {
        for word in tokenize_line(line.as_ref()) {
            counter.ingest(&word);
            words += 1;
        }
    }
    words
}
