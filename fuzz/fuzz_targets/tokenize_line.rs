#![no_main]

use libfuzzer_sys::fuzz_target;
use wordgrams::sequence::SequenceCounter;
use wordgrams::tokenize::tokenize_line;

fuzz_target!(|data: &[u8]| {
    // Invalid UTF-8 never reaches the tokenizer; the reader rejects it first
    if let Ok(input) = std::str::from_utf8(data) {
        let mut counter = SequenceCounter::default();
        counter.record_source("fuzz");
        for line in input.lines() {
            for word in tokenize_line(line) {
                assert!(!word.is_empty());
                counter.ingest(&word);
            }
        }
        let _ = counter.report();
    }
});
