//! Wordgrams - most common word sequences (n-grams) in text
//!
//! This library provides the sliding-window sequence counter, the line
//! tokenizer that feeds it, and the readers and report formats used by the
//! `wordgrams` binary.

pub mod cli;
pub mod config;
pub mod csv_output;
pub mod error;
pub mod json_output;
pub mod reader;
pub mod runner;
pub mod sequence;
pub mod tokenize;
