//! Property-based tests for the sequence counting core
//!
//! Covers the window invariants, report ordering, reset behaviour and
//! tokenizer normalization with proptest.

use proptest::prelude::*;
use wordgrams::sequence::{extract_ngrams, RollingWindow, SequenceCounter};
use wordgrams::tokenize::tokenize_line;

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{1,3}", 0..60)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_window_ready_only_when_full(capacity in 1usize..8, items in prop::collection::vec(0u32..100, 0..20)) {
        let mut window = RollingWindow::new(capacity).unwrap();

        for (i, item) in items.iter().enumerate() {
            window.push(*item);
            let pushed = i + 1;

            match window.snapshot() {
                None => {
                    prop_assert!(pushed < capacity);
                }
                Some(snapshot) => {
                    prop_assert!(pushed >= capacity);
                    prop_assert_eq!(snapshot.len(), capacity);
                    prop_assert_eq!(&snapshot[..], &items[pushed - capacity..pushed]);
                }
            }
        }
    }

    #[test]
    fn prop_push_into_full_window_evicts_oldest(capacity in 1usize..8, items in prop::collection::vec(0u32..100, 8..20), next in 0u32..100) {
        let mut window = RollingWindow::new(capacity).unwrap();
        for item in &items {
            window.push(*item);
        }
        let before = window.snapshot().unwrap();

        window.push(next);
        let after = window.snapshot().unwrap();

        let mut expected = before[1..].to_vec();
        expected.push(next);
        prop_assert_eq!(after, expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_streaming_matches_batch(tokens in words(), size in 1usize..5) {
        let mut counter = SequenceCounter::new(100, size).unwrap();
        counter.record_source("StdIn");
        for token in &tokens {
            counter.ingest(token);
        }

        prop_assert_eq!(counter.frequencies(), &extract_ngrams(&tokens, size));
    }

    #[test]
    fn prop_rows_sorted_and_truncated(tokens in words(), size in 1usize..4, limit in 1usize..10) {
        let mut counter = SequenceCounter::new(limit, size).unwrap();
        counter.record_source("StdIn");
        for token in &tokens {
            counter.ingest(token);
        }

        let rows = counter.top_sequences();
        prop_assert!(rows.len() <= limit);
        prop_assert_eq!(rows.len(), counter.unique_sequences().min(limit));

        for pair in rows.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }

        // nothing left out beats the lowest reported row
        if let Some((_, lowest)) = rows.last() {
            let dropped = counter
                .frequencies()
                .iter()
                .filter(|(key, _)| !rows.iter().any(|(row, _)| row == *key));
            for (_, count) in dropped {
                prop_assert!(count <= lowest);
            }
        }
    }

    #[test]
    fn prop_report_deterministic(tokens in words()) {
        let build = || {
            let mut counter = SequenceCounter::default();
            counter.record_source("StdIn");
            for token in &tokens {
                counter.ingest(token);
            }
            counter.report()
        };

        prop_assert_eq!(build(), build());
    }

    #[test]
    fn prop_reset_equals_fresh(tokens in words()) {
        let mut counter = SequenceCounter::default();
        counter.record_source("some-file.txt");
        for token in &tokens {
            counter.ingest(token);
        }

        counter.reset();

        prop_assert_eq!(counter.report(), SequenceCounter::default().report());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_unicode_punctuation_equivalent(parts in prop::collection::vec("[A-Za-z]{1,6}", 2..8)) {
        let ascii = parts.join("-") + " " + &parts.join("'");
        let unicode = parts.join("\u{2014}") + " " + &parts.join("\u{2019}");

        prop_assert_eq!(tokenize_line(&unicode), tokenize_line(&ascii));
    }

    #[test]
    fn prop_tokens_are_normalized(line in "\\PC{0,80}") {
        for token in tokenize_line(&line) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.chars().any(char::is_whitespace));
            prop_assert!(!token.chars().any(|c| c.is_ascii_uppercase()));
            prop_assert!(token.chars().next().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_'));
            prop_assert!(token.chars().filter(|c| *c == '-' || *c == '\'').count() <= 1);
        }
    }
}
