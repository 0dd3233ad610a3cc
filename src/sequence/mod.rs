// Word Sequence (N-gram) Counting
//
// A stream of normalized words is pushed through a fixed-size rolling window.
// Every time the window is full its contents form one sequence, which is
// counted in a frequency table keyed by the space-joined words. Reports list
// the most frequent sequences.
//
// Sequences are order sensitive ("quick brown fox" != "brown quick fox") and
// never span two input units.

mod counter;
mod ngram;
mod window;

pub use counter::SequenceCounter;
pub use ngram::{extract_ngrams, ngram_coverage, top_ngrams, NGramMap, KEY_SEPARATOR};
pub use window::RollingWindow;
